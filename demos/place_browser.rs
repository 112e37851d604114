//! Place browser example for yatra-rs
//!
//! Walks the zone -> state -> city -> place hierarchy the way an interactive
//! browser does: change one level, then re-cascade to settle the finer ones.

use yatra_core::{Dataset, FilterSelection, Level, Result};

fn show(db: &Dataset, sel: &FilterSelection) -> Result<()> {
    for level in Level::ALL {
        let candidates = db.places.candidates_at_level(level, sel)?;
        println!(
            "  {:<6} {:<24} of {}",
            format!("{level}:"),
            sel.get(level).unwrap_or("-"),
            candidates.len()
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    println!("=== yatra-rs Place Browser Example ===\n");

    let db = Dataset::load()?;

    // Start with nothing chosen: every level defaults to its first candidate
    println!("--- Step 1: Default selection ---");
    let sel = db.places.cascade(FilterSelection::default());
    show(db, &sel)?;
    println!();

    // Switch the zone: finer levels are cleared, then settled again
    println!("--- Step 2: Switch to the Southern zone ---");
    let sel = db.places.cascade(sel.with(Level::Zone, "Southern"));
    show(db, &sel)?;
    println!();

    // Pick a state explicitly
    println!("--- Step 3: Pick Karnataka ---");
    let sel = db.places.cascade(sel.with(Level::State, "Karnataka"));
    show(db, &sel)?;
    let place = db.places.resolve(&sel)?;
    println!(
        "  -> {} ({}), fee: {:?} INR",
        place.name().unwrap_or("?"),
        place.place_type.as_deref().unwrap_or("not available"),
        place.entrance_fee_inr
    );
    println!();

    // A stale city is replaced by the first valid one
    println!("--- Step 4: Stale city is replaced ---");
    let stale = FilterSelection::full("Western", "Rajasthan", "Agra", "Taj Mahal");
    let sel = db.places.cascade(stale);
    show(db, &sel)?;

    Ok(())
}
