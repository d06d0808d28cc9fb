//! Domain logic for property valuation lives here.

pub mod app_state;
pub mod entities;
pub mod indicators;
pub mod money;
pub mod valuation;

pub use app_state::{AppState, PersistedState, Theme};
pub use entities::{
    Amenities, Coordinates, IndicatorScores, Neighborhood, PriceBand, Severity, ValuationInput,
};
pub use indicators::{
    classify_education_health, classify_indicator, classify_mobility, education_health_score,
    indicator_report, mobility_score, CompositeRating, IndicatorCurve, IndicatorRating,
    IndicatorReport,
};
pub use money::{format_currency, normalize_currency, parse_area};
pub use valuation::{
    classify_deal, evaluate, price_per_area, DealTier, MarketVerdict, Valuation, ValuationError,
};
