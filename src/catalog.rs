//! Catalog module - Static soil, crop and season tables

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::sensor::generator::SensorRanges;

/// Case-insensitive lookup of a display name in a closed list.
pub(crate) fn parse_named<T: Copy>(
    kind: &'static str,
    value: &str,
    all: &[T],
    name: impl Fn(T) -> &'static str,
) -> Result<T, Error> {
    let wanted = value.trim();
    all.iter()
        .copied()
        .find(|item| name(*item).eq_ignore_ascii_case(wanted))
        .ok_or_else(|| Error::UnknownSelection {
            kind,
            value: value.to_string(),
        })
}

// ============================================================================
// SEASON
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Season {
    Summer,
    Rainy,
    Winter,
}

impl Season {
    pub const ALL: [Season; 3] = [Season::Summer, Season::Rainy, Season::Winter];

    pub fn name(self) -> &'static str {
        match self {
            Season::Summer => "Summer",
            Season::Rainy => "Rainy",
            Season::Winter => "Winter",
        }
    }

    /// Generator ranges for readings taken in this season.
    pub fn ranges(self) -> SensorRanges {
        match self {
            Season::Summer => SensorRanges::new((30.0, 45.0), (20.0, 50.0), (10.0, 30.0)),
            Season::Rainy => SensorRanges::new((25.0, 35.0), (60.0, 90.0), (40.0, 70.0)),
            Season::Winter => SensorRanges::new((15.0, 25.0), (30.0, 60.0), (20.0, 40.0)),
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Season {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named("season", s, &Season::ALL, Season::name)
    }
}

impl TryFrom<String> for Season {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Season> for String {
    fn from(season: Season) -> Self {
        season.name().to_string()
    }
}

// ============================================================================
// SOIL TYPE - Crop suggestions and default season
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SoilType {
    Sandy,
    Clay,
    Loamy,
    Saline,
}

impl SoilType {
    pub const ALL: [SoilType; 4] = [
        SoilType::Sandy,
        SoilType::Clay,
        SoilType::Loamy,
        SoilType::Saline,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SoilType::Sandy => "Sandy",
            SoilType::Clay => "Clay",
            SoilType::Loamy => "Loamy",
            SoilType::Saline => "Saline",
        }
    }

    /// Farming types suggested for this soil, in display order.
    pub fn farming_options(self) -> &'static [&'static str] {
        match self {
            SoilType::Sandy => &["Groundnut", "Cotton", "Millets"],
            SoilType::Clay => &["Rice", "Sugarcane", "Wheat"],
            SoilType::Loamy => &["Vegetables", "Fruits", "Pulses"],
            SoilType::Saline => &["Barley", "Date Palm", "Fodder"],
        }
    }

    pub fn default_season(self) -> Season {
        match self {
            SoilType::Sandy | SoilType::Saline => Season::Summer,
            SoilType::Clay => Season::Rainy,
            SoilType::Loamy => Season::Winter,
        }
    }

    /// Resolve a farming type against this soil's suggestions.
    ///
    /// `None` picks the first suggestion, matching the selector's initial state.
    pub fn farming_type(self, requested: Option<&str>) -> Result<&'static str, Error> {
        let options = self.farming_options();
        match requested {
            None => Ok(options[0]),
            Some(name) => options
                .iter()
                .copied()
                .find(|option| option.eq_ignore_ascii_case(name.trim()))
                .ok_or_else(|| Error::FarmingNotOffered {
                    soil: self,
                    farming: name.to_string(),
                }),
        }
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SoilType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named("soil type", s, &SoilType::ALL, SoilType::name)
    }
}

impl TryFrom<String> for SoilType {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SoilType> for String {
    fn from(soil: SoilType) -> Self {
        soil.name().to_string()
    }
}
