pub mod detail_row;
pub mod indicator_badge;
pub mod kpi_card;
pub mod toast;
pub mod verdict_card;

pub use detail_row::DetailRow;
pub use indicator_badge::IndicatorBadge;
pub use kpi_card::KpiCard;
pub use verdict_card::{NoMarketDataCard, VerdictCard};
