// src/domain/city.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Image shown when a city has no photograph of its own.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Continent {
    Asia,
    Europe,
    #[serde(rename = "North America")]
    NorthAmerica,
    #[serde(rename = "South America")]
    SouthAmerica,
    Africa,
    Oceania,
    #[serde(rename = "Middle East")]
    MiddleEast,
}

impl Continent {
    /// Display order used by the continent chips.
    pub const ALL: [Continent; 7] = [
        Continent::Asia,
        Continent::Europe,
        Continent::NorthAmerica,
        Continent::SouthAmerica,
        Continent::Africa,
        Continent::Oceania,
        Continent::MiddleEast,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::NorthAmerica => "North America",
            Continent::SouthAmerica => "South America",
            Continent::Africa => "Africa",
            Continent::Oceania => "Oceania",
            Continent::MiddleEast => "Middle East",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Continent {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Continent::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}

/// A name that does not correspond to any variant of a closed enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownName(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Safety {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    Cold,
    Mild,
    Warm,
    Hot,
}

/// One city in the directory.
///
/// Records are compiled into the binary, so text fields borrow `'static`
/// data and never allocate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: &'static str,
    pub name: &'static str,
    pub country: &'static str,
    pub continent: Continent,
    /// USD per month.
    pub cost: f64,
    /// Celsius.
    pub temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feels_like: Option<f64>,
    /// Mbps.
    pub internet_speed: f64,
    /// AQI, lower is better.
    pub air_quality: f64,
    /// Precomputed composite rating in `[0, 5]`.
    pub nomad_score: f64,
    /// Image path or URL; empty means "no image".
    pub image: &'static str,
    pub safety: Safety,
    pub weather: Weather,
}

impl City {
    pub fn image_src(&self) -> &'static str {
        if self.image.is_empty() {
            PLACEHOLDER_IMAGE
        } else {
            self.image
        }
    }
}
