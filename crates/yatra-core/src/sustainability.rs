// crates/yatra-core/src/sustainability.rs
//! # Sustainability Score
//!
//! A five-question travel quiz scored out of 100. The best reachable score
//! is 90.
//!
//! ```rust
//! use yatra_core::sustainability::{Badge, Food, Stay, TravelGroup, TravelPlan, Vehicle};
//!
//! let plan = TravelPlan {
//!     vehicle: "electric-vehicle".parse().unwrap(),
//!     stay: Stay::EcoLodge,
//!     food: Food::LocalVegetarian,
//!     reusables: true,
//!     group: TravelGroup::Group,
//! };
//! assert_eq!(plan.score(), 90);
//! assert_eq!(plan.badge(), Some(Badge::EcoTraveler));
//! ```

use crate::error::{Result, TourError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Folds `Public Transport`, `public-transport` and `PUBLIC_TRANSPORT`
/// to the same key.
fn option_key(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_option<T: Copy>(s: &str, all: &[T], label: fn(T) -> &'static str, what: &str) -> Result<T> {
    let key = option_key(s);
    all.iter()
        .copied()
        .find(|o| option_key(label(*o)) == key)
        .ok_or_else(|| {
            let choices: Vec<&str> = all.iter().map(|o| label(*o)).collect();
            TourError::InvalidArgument(format!(
                "unknown {what} {s:?}, expected one of: {}",
                choices.join(", ")
            ))
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vehicle {
    ElectricVehicle,
    PublicTransport,
    Bike,
    Car,
    Flight,
}

impl Vehicle {
    pub const ALL: [Vehicle; 5] = [
        Vehicle::ElectricVehicle,
        Vehicle::PublicTransport,
        Vehicle::Bike,
        Vehicle::Car,
        Vehicle::Flight,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Vehicle::ElectricVehicle => "Electric Vehicle",
            Vehicle::PublicTransport => "Public Transport",
            Vehicle::Bike => "Bike",
            Vehicle::Car => "Car",
            Vehicle::Flight => "Flight",
        }
    }

    pub fn points(self) -> u8 {
        match self {
            Vehicle::ElectricVehicle => 30,
            Vehicle::PublicTransport => 25,
            Vehicle::Bike => 20,
            Vehicle::Car => 10,
            Vehicle::Flight => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stay {
    EcoLodge,
    BudgetHotel,
    LuxuryHotel,
}

impl Stay {
    pub const ALL: [Stay; 3] = [Stay::EcoLodge, Stay::BudgetHotel, Stay::LuxuryHotel];

    pub fn label(self) -> &'static str {
        match self {
            Stay::EcoLodge => "Eco Lodge",
            Stay::BudgetHotel => "Budget Hotel",
            Stay::LuxuryHotel => "Luxury Hotel",
        }
    }

    pub fn points(self) -> u8 {
        match self {
            Stay::EcoLodge => 25,
            Stay::BudgetHotel => 15,
            Stay::LuxuryHotel => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Food {
    LocalVegetarian,
    LocalNonVegetarian,
    FastFoodChains,
}

impl Food {
    pub const ALL: [Food; 3] = [Food::LocalVegetarian, Food::LocalNonVegetarian, Food::FastFoodChains];

    pub fn label(self) -> &'static str {
        match self {
            Food::LocalVegetarian => "Local Vegetarian",
            Food::LocalNonVegetarian => "Local Non-Vegetarian",
            Food::FastFoodChains => "Fast Food Chains",
        }
    }

    pub fn points(self) -> u8 {
        match self {
            Food::LocalVegetarian => 15,
            Food::LocalNonVegetarian => 10,
            Food::FastFoodChains => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TravelGroup {
    #[default]
    Solo,
    Group,
}

impl TravelGroup {
    pub const ALL: [TravelGroup; 2] = [TravelGroup::Solo, TravelGroup::Group];

    pub fn label(self) -> &'static str {
        match self {
            TravelGroup::Solo => "Solo",
            TravelGroup::Group => "Group",
        }
    }
}

// ---- parsing & display ----

impl FromStr for Vehicle {
    type Err = TourError;
    fn from_str(s: &str) -> Result<Self> {
        parse_option(s, &Self::ALL, Self::label, "vehicle")
    }
}

impl FromStr for Stay {
    type Err = TourError;
    fn from_str(s: &str) -> Result<Self> {
        parse_option(s, &Self::ALL, Self::label, "stay")
    }
}

impl FromStr for Food {
    type Err = TourError;
    fn from_str(s: &str) -> Result<Self> {
        parse_option(s, &Self::ALL, Self::label, "food")
    }
}

impl FromStr for TravelGroup {
    type Err = TourError;
    fn from_str(s: &str) -> Result<Self> {
        parse_option(s, &Self::ALL, Self::label, "travel group")
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Stay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Food {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for TravelGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---- scoring ----

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Badge {
    /// 80 points or more.
    EcoTraveler,
    /// 50 to 79 points.
    CultureSeeker,
}

impl Badge {
    pub fn for_score(points: u8) -> Option<Badge> {
        match points {
            80.. => Some(Badge::EcoTraveler),
            50..=79 => Some(Badge::CultureSeeker),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Badge::EcoTraveler => "Eco Traveler",
            Badge::CultureSeeker => "Culture Seeker",
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Answers to the travel quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelPlan {
    pub vehicle: Vehicle,
    pub stay: Stay,
    pub food: Food,
    /// Carrying reusable bottles and bags.
    pub reusables: bool,
    pub group: TravelGroup,
}

impl TravelPlan {
    pub fn score(&self) -> u8 {
        let mut points = self.vehicle.points() + self.stay.points() + self.food.points();
        if self.reusables {
            points += 10;
        }
        if self.group == TravelGroup::Group {
            points += 10;
        }
        points
    }

    pub fn badge(&self) -> Option<Badge> {
        Badge::for_score(self.score())
    }

    /// Score as a fraction of 100, for progress bars.
    pub fn progress(&self) -> f32 {
        f32::from(self.score()) / 100.0
    }
}
