//! yatra — Command-line interface for yatra-core
//!
//! This binary explores the bundled tourism dataset from your terminal:
//! browse places zone by zone, ask free-text questions, read festival
//! stories, look at visitor statistics and score a trip's sustainability.
//!
//! Usage examples
//! --------------
//!
//! - Show table sizes
//!   $ yatra stats
//!
//! - Browse places (missing or stale levels default to the first choice)
//!   $ yatra browse --zone Southern --state Karnataka
//!
//! - Ask a question
//!   $ yatra ask who built the konark sun temple
//!
//! - Score a trip
//!   $ yatra score --vehicle public-transport --stay eco-lodge --food local-vegetarian --reusables
//!
//! - Hotels around a hotspot (needs GEOAPIFY_API_KEY or `[hotels] api_key`)
//!   $ yatra hotels "Taj Mahal" --keyword view
//!
//! Data source
//! -----------
//!
//! By default the tables bundled with `yatra-core` are loaded and a binary
//! cache is written next to them for fast subsequent runs. Use
//! `--data-dir <dir>` (or `data_dir` in the `--config` file) to point to
//! another set of tables.
mod args;
mod config;

use crate::args::{CliArgs, Commands};
use crate::config::Settings;
use anyhow::Context;
use clap::Parser;
use yatra_core::filter::Level;
use yatra_core::sustainability::{Food, Stay, TravelGroup, TravelPlan, Vehicle};
use yatra_core::{Dataset, FilterSelection, MatchOutcome, PlaceRecord, QaResolver};

const NOT_AVAILABLE: &str = "not available";

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(verbose > 1)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let settings = Settings::load(args.config.as_deref())?;

    // Command-line directory wins over the settings file
    let data_dir = args.data_dir.clone().or_else(|| settings.data_dir.clone());
    let owned;
    let db: &Dataset = match data_dir {
        Some(dir) => {
            owned = Dataset::load_from_dir(&dir)
                .with_context(|| format!("Failed to load tables from {}", dir.display()))?;
            &owned
        }
        None => Dataset::load().context("Failed to load the bundled tables")?,
    };

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            println!("Dataset statistics:");
            println!("  Places: {}", stats.places);
            println!("  Q&A pairs: {}", stats.qa_pairs);
            println!("  Hotspots: {} ({} with coordinates)", stats.hotspots, stats.mappable_hotspots);
            println!("  Visitor rows: {}", stats.visitor_rows);
            println!("  Festival stories: {}", stats.stories);
        }

        Commands::Browse {
            zone,
            state,
            city,
            place,
            json,
        } => {
            let wanted = FilterSelection {
                zone,
                state,
                city,
                name: place,
            };
            browse(db, wanted, json)?;
        }

        Commands::Ask { question } => {
            let question = question.join(" ");
            let resolver = QaResolver::new(settings.qa_threshold);
            match resolver.resolve(&question, db.qa.pairs()) {
                MatchOutcome::NoQuery => println!("Please type a question."),
                MatchOutcome::NoCandidates => println!("No known questions to match against."),
                MatchOutcome::BelowThreshold {
                    best_question,
                    score,
                } => {
                    println!("Sorry, I couldn't find a good match for that question.");
                    println!("Closest known question: {best_question} (score: {score})");
                }
                MatchOutcome::Answered(a) => {
                    println!("Matched question: {} (score: {})", a.question, a.score);
                    println!();
                    println!("{}", a.answer);
                }
            }
        }

        Commands::Score {
            vehicle,
            stay,
            food,
            reusables,
            group,
        } => {
            let plan = TravelPlan {
                vehicle: vehicle.parse::<Vehicle>()?,
                stay: stay.parse::<Stay>()?,
                food: food.parse::<Food>()?,
                reusables,
                group: if group { TravelGroup::Group } else { TravelGroup::Solo },
            };
            println!("Sustainable travel score: {}", plan.score());
            match plan.badge() {
                Some(badge) => println!("Badge unlocked: {badge}"),
                None => println!("Start exploring to earn badges!"),
            }
            println!("{}", progress_bar(plan.progress(), 20));
        }

        Commands::Visitors { state } => {
            let rows = match state.as_deref() {
                Some(s) => db.visitors.for_state(s),
                None => db.visitors.stats.iter().collect(),
            };
            if rows.is_empty() {
                println!("No visitor statistics found.");
            }
            for r in &rows {
                println!(
                    "{:<28} {:<9} {:<7} {:>12}",
                    r.state,
                    r.kind,
                    year_label(r.year),
                    r.visitors
                );
            }
            if state.is_none() && !rows.is_empty() {
                println!();
                println!("Totals by year:");
                for ((year, kind), total) in db.visitors.totals() {
                    println!("  {:<7} {:<9} {:>12}", year_label(year), kind, total);
                }
            }
        }

        Commands::Hotspots { search } => {
            let hits = db.hotspots.search(search.as_deref().unwrap_or(""));
            if hits.is_empty() {
                println!("No hotspots found.");
            }
            for h in hits {
                // mappable hotspots always carry coordinates
                let (lat, lon) = h.coordinates().unwrap_or_default();
                println!(
                    "{} ({}, {}) at {lat:.4}, {lon:.4}",
                    h.name,
                    h.hotspot_type.as_deref().unwrap_or(NOT_AVAILABLE),
                    h.state.as_deref().unwrap_or(NOT_AVAILABLE)
                );
            }
        }

        #[cfg(feature = "fetch")]
        Commands::Hotels { hotspot, keyword } => {
            hotels(db, &settings, &hotspot, keyword.as_deref().unwrap_or(""))?;
        }

        Commands::Stories => {
            for name in db.stories.festival_names() {
                println!("- {name}");
            }
        }

        Commands::Story { festival } => {
            let story = db.stories.story(&festival)?;
            println!("{festival}");
            println!("  Region: {}", text_or_na(story.region.as_deref()));
            println!("  Category: {}", text_or_na(story.category.as_deref()));
            println!("  Subcategory: {}", text_or_na(story.subcategory.as_deref()));
            println!("  Source: {}", text_or_na(story.source.as_deref()));
            println!();
            println!("{}", text_or_na(story.description.as_deref()));
        }
    }

    Ok(())
}

fn browse(db: &Dataset, wanted: FilterSelection, json: bool) -> anyhow::Result<()> {
    let sel = db.places.cascade(wanted.clone());
    for level in Level::ALL {
        if let (Some(asked), got) = (wanted.get(level), sel.get(level)) {
            if got != Some(asked) {
                tracing::warn!(%level, asked, "not available here, using the first choice");
            }
        }
    }

    if !json {
        for level in Level::ALL {
            // cascade settles coarser levels first, so a break here means no data
            let Ok(candidates) = db.places.candidates_at_level(level, &sel) else {
                break;
            };
            let chosen = sel.get(level);
            let listed: Vec<String> = candidates
                .iter()
                .map(|c| {
                    if Some(*c) == chosen {
                        format!("[{c}]")
                    } else {
                        c.to_string()
                    }
                })
                .collect();
            println!("{:<6} {}", format!("{level}:"), listed.join(", "));
        }
        println!();
    }

    if !sel.is_complete() {
        println!("No places available.");
        return Ok(());
    }

    let place = db.places.resolve(&sel)?;
    if json {
        println!("{}", serde_json::to_string_pretty(place)?);
    } else {
        print_place(place);
    }
    Ok(())
}

fn print_place(p: &PlaceRecord) {
    let stars = p
        .rating_stars()
        .map(|n| format!(" {}", "*".repeat(n as usize)))
        .unwrap_or_default();

    println!("{}", text_or_na(p.name()));
    println!("  Zone: {}", text_or_na(p.zone()));
    println!("  State: {}", text_or_na(p.state()));
    println!("  City: {}", text_or_na(p.city()));
    println!("  Type: {}", text_or_na(p.place_type.as_deref()));
    println!("  Established: {}", text_or_na(p.establishment_year.as_deref()));
    println!("  Time needed (hrs): {}", or_na(p.time_needed_hours));
    println!("  Google rating: {}{stars}", or_na(p.google_rating));
    println!("  Entrance fee (INR): {}", or_na(p.entrance_fee_inr));
    println!("  Airport within 50 km: {}", or_na(p.has_nearby_airport.map(yes_no)));
    println!("  Weekly off: {}", text_or_na(p.weekly_off.as_deref()));
    println!("  Significance: {}", text_or_na(p.significance.as_deref()));
    println!("  DSLR allowed: {}", or_na(p.dslr_allowed.map(yes_no)));
    println!("  Google reviews (lakhs): {}", or_na(p.review_count_lakhs));
    println!("  Best time to visit: {}", text_or_na(p.best_time_to_visit.as_deref()));
}

#[cfg(feature = "fetch")]
fn hotels(db: &Dataset, settings: &Settings, hotspot: &str, keyword: &str) -> anyhow::Result<()> {
    use std::time::Duration;
    use yatra_core::nearby::{filter_hotels, GeoapifyClient, NearbyLookup, NearbyQuery, DEFAULT_ENDPOINT};

    let spot = db.hotspots.find(hotspot)?;
    let (lat, lon) = spot
        .coordinates()
        .context("hotspot has no coordinates")?;

    let api_key = settings.hotels.api_key.clone().with_context(|| {
        format!(
            "No Geoapify API key: set {} or `api_key` under [hotels] in the settings file",
            config::API_KEY_ENV
        )
    })?;
    let endpoint = settings.hotels.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT);
    let client = GeoapifyClient::with_endpoint(
        endpoint,
        api_key,
        Duration::from_secs(settings.hotels.timeout_secs),
    )?;

    let query = NearbyQuery::new(lat, lon)
        .with_radius(settings.hotels.radius_m)
        .with_limit(settings.hotels.limit);
    let found = client.find_nearby(&query)?;
    let shown = filter_hotels(found, keyword);

    if shown.is_empty() {
        println!("No hotels found near {}.", spot.name);
        return Ok(());
    }
    println!("Hotels near {}:", spot.name);
    for h in shown {
        println!("- {}", h.name.as_deref().unwrap_or("Unnamed hotel"));
        println!("  Address: {}", text_or_na(h.address.as_deref()));
        if let Some(site) = h.website.as_deref() {
            println!("  Website: {site}");
        }
    }
    Ok(())
}

// ---- formatting helpers ----

fn text_or_na(v: Option<&str>) -> &str {
    v.unwrap_or(NOT_AVAILABLE)
}

fn or_na<T: std::fmt::Display>(v: Option<T>) -> String {
    v.map(|x| x.to_string()).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "Yes"
    } else {
        "No"
    }
}

fn year_label(year: Option<u16>) -> String {
    or_na(year)
}

fn progress_bar(fraction: f32, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f32).round() as usize).min(width);
    format!(
        "[{}{}] {:.0}%",
        "#".repeat(filled),
        "-".repeat(width - filled),
        fraction * 100.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_fills_proportionally() {
        assert_eq!(progress_bar(0.9, 10), "[#########-] 90%");
        assert_eq!(progress_bar(0.0, 4), "[----] 0%");
    }

    #[test]
    fn missing_values_print_not_available() {
        assert_eq!(or_na::<f64>(None), "not available");
        assert_eq!(or_na(Some(4.5)), "4.5");
        assert_eq!(text_or_na(None), "not available");
    }
}
