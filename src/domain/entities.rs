use serde::{Deserialize, Serialize};

/// Official FIPE appraisal band for one neighborhood, in R$ per m².
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PriceBand {
    pub min_m2: f64,
    pub avg_m2: f64,
    pub max_m2: f64,
}

impl PriceBand {
    /// A well-formed band satisfies `0 <= min <= avg <= max`. The dataset is
    /// assumed to hold this; classification stays total either way.
    pub fn is_well_formed(&self) -> bool {
        self.min_m2 >= 0.0 && self.min_m2 <= self.avg_m2 && self.avg_m2 <= self.max_m2
    }
}

/// Socioeconomic indices for one neighborhood, each typically in [0, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IndicatorScores {
    pub wellbeing: f64,
    pub human_development: f64,
    pub environment: f64,
    pub housing: f64,
}

/// Amenity counts used for display and for the composite secondary scores.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Amenities {
    pub bus_stops: u32,
    pub bike_stations: u32,
    pub bike_lane_km: f64,
    pub schools: u32,
    pub health_units: u32,
    pub squares: u32,
    pub public_wifi: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One reference record of the embedded dataset. Read-only after load.
#[derive(Clone, Debug, PartialEq)]
pub struct Neighborhood {
    /// Unique key; lookup is an exact match on the trimmed name.
    pub name: String,
    /// Administrative region ("Regional N").
    pub region: String,
    pub band: PriceBand,
    /// Classifieds-market (OLX) average, R$ per m².
    pub olx_avg_m2: f64,
    pub indicators: IndicatorScores,
    pub avg_household_income: f64,
    pub description: String,
    pub amenities: Amenities,
    pub coordinates: Option<Coordinates>,
}

impl Neighborhood {
    /// Market value implied by the official average for a property of
    /// `area` m².
    pub fn estimated_market_value(&self, area: u32) -> f64 {
        self.band.avg_m2 * f64::from(area)
    }
}

/// One valuation query as entered by the user, already normalized.
#[derive(Clone, Debug, PartialEq)]
pub struct ValuationInput {
    pub neighborhood: String,
    pub total_price: f64,
    pub area: u32,
}

/// Closed severity ladder shared by deal tiers and indicator ratings.
/// The UI resolves each variant to exactly one style; color names never
/// travel through the app as strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}
