//! Error handling example for yatra-rs
//!
//! This example demonstrates the error variants and non-error outcomes

use yatra_core::sustainability::Vehicle;
use yatra_core::{Dataset, FilterSelection, Level, MatchOutcome, MemorySource, Result, TourError};

fn main() -> Result<()> {
    println!("=== yatra-rs Error Handling Example ===\n");

    // Example 1: A missing table makes the dataset unavailable
    println!("--- Example 1: Loading from an incomplete source ---");
    match Dataset::from_source(&MemorySource::new()) {
        Ok(_) => println!("  unexpectedly loaded"),
        Err(TourError::DataUnavailable(msg)) => println!("✗ Data unavailable: {msg}"),
        Err(e) => return Err(e),
    }
    println!();

    let db = Dataset::load()?;

    // Example 2: Asking for cities without choosing a state
    println!("--- Example 2: Missing coarser selection ---");
    let zone_only = FilterSelection::default().with(Level::Zone, "Northern");
    match db.places.candidates_at_level(Level::City, &zone_only) {
        Ok(cities) => println!("  cities: {cities:?}"),
        Err(e) => println!("✗ {e}"),
    }
    println!();

    // Example 3: A full selection that matches nothing
    println!("--- Example 3: Unknown place ---");
    let sel = FilterSelection::full("Northern", "Delhi", "Delhi", "Atlantis");
    if let Err(TourError::NotFound(msg)) = db.places.resolve(&sel) {
        println!("✗ Not found: {msg}");
    }
    println!();

    // Example 4: Fuzzy outcomes are values, not errors
    println!("--- Example 4: Q&A outcomes ---");
    for q in ["", "xylophone quartz", "who built the konark sun temple"] {
        match db.qa.ask(q) {
            MatchOutcome::NoQuery => println!("  {q:?}: no question given"),
            MatchOutcome::NoCandidates => println!("  {q:?}: nothing to match against"),
            MatchOutcome::BelowThreshold { score, .. } => println!("  {q:?}: no good match (best score {score})"),
            MatchOutcome::Answered(a) => println!("  {q:?}: {} (score {})", a.answer, a.score),
        }
    }
    println!();

    // Example 5: Bad option labels
    println!("--- Example 5: Parsing quiz options ---");
    for label in ["public-transport", "rocket"] {
        match label.parse::<Vehicle>() {
            Ok(v) => println!("  {label}: {v} ({} points)", v.points()),
            Err(e) => println!("✗ {e}"),
        }
    }

    Ok(())
}
