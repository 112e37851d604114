//! Basic usage example for yatra-rs
//!
//! This example demonstrates how to:
//! - Load the bundled dataset
//! - Narrow places zone by zone
//! - Ask a free-text question
//! - Read a festival story

use yatra_core::{Dataset, FilterSelection, Level, Result};

fn main() -> Result<()> {
    println!("=== yatra-rs Basic Usage Example ===\n");

    // Load the dataset (cached in-process and as a binary file next to the tables)
    println!("Loading dataset...");
    let db = Dataset::load()?;
    let stats = db.stats();
    println!("✓ Dataset loaded: {} places, {} Q&A pairs\n", stats.places, stats.qa_pairs);

    // Example 1: Zones
    println!("--- Example 1: List all zones ---");
    let zones = db.places.candidates_at_level(Level::Zone, &FilterSelection::default())?;
    for (i, zone) in zones.iter().enumerate() {
        println!("{}. {zone}", i + 1);
    }
    println!();

    // Example 2: States of one zone
    println!("--- Example 2: States in the Northern zone ---");
    let northern = FilterSelection::default().with(Level::Zone, "Northern");
    for state in db.places.candidates_at_level(Level::State, &northern)? {
        println!("- {state}");
    }
    println!();

    // Example 3: A fully resolved place
    println!("--- Example 3: Resolve a place ---");
    let sel = FilterSelection::full("Northern", "Uttar Pradesh", "Agra", "Taj Mahal");
    let place = db.places.resolve(&sel)?;
    println!("Found: {}", place.name().unwrap_or("?"));
    println!("Established: {:?}", place.establishment_year);
    println!("Rating: {:?} ({:?} stars)", place.google_rating, place.rating_stars());
    println!();

    // Example 4: Question answering
    println!("--- Example 4: Ask a question ---");
    match db.qa.ask("history of the taj mahal").answer() {
        Some(a) => println!("Q: {}\nA: {} (score {})", a.question, a.answer, a.score),
        None => println!("No good match"),
    }
    println!();

    // Example 5: Festival stories
    println!("--- Example 5: Festival stories ---");
    let names = db.stories.festival_names();
    println!("Festivals: {}", names.join(", "));
    if let Some(first) = names.first() {
        let story = db.stories.story(first)?;
        println!("{first}: {}", story.description.as_deref().unwrap_or("not available"));
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
