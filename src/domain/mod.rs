pub mod city;
pub mod filters;
pub mod stats;

pub use city::{City, Continent, Safety, Weather};
pub use filters::{ContinentFilter, FilterCategory, FilterParseError, FilterState};
pub use stats::CityStats;
