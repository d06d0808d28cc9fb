//! The valuation engine: price-per-area computation and deal-tier
//! classification against a neighborhood's FIPE reference band.

use thiserror::Error;

use super::entities::{Neighborhood, PriceBand, Severity};
use super::indicators::{indicator_report, IndicatorReport};
use super::money::format_currency;

/// An excellent deal sits more than 5% below the official floor.
const FLOOR_DISCOUNT_FACTOR: f64 = 0.95;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValuationError {
    #[error("total price must be a positive, finite amount")]
    InvalidPrice,
    #[error("area must be greater than zero")]
    InvalidArea,
}

/// Ordered verdict tiers, cheapest to most expensive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum DealTier {
    ExcellentDeal,
    VeryAdvantageous,
    FairPrice,
    Overpriced,
}

impl DealTier {
    pub fn label(&self) -> &'static str {
        match self {
            DealTier::ExcellentDeal => "Excellent deal",
            DealTier::VeryAdvantageous => "Very advantageous",
            DealTier::FairPrice => "Fair price",
            DealTier::Overpriced => "Overpriced",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            DealTier::ExcellentDeal => Severity::Excellent,
            DealTier::VeryAdvantageous => Severity::Good,
            DealTier::FairPrice => Severity::Fair,
            DealTier::Overpriced => Severity::Critical,
        }
    }
}

/// Classification of one query against one neighborhood record.
#[derive(Clone, Debug, PartialEq)]
pub struct MarketVerdict {
    pub tier: DealTier,
    pub message: String,
    /// FIPE average × area.
    pub estimated_market_value: f64,
    pub indicators: IndicatorReport,
}

/// Full result of one evaluation. `market` is `None` when the neighborhood
/// has no record — the "insufficient data" state, not an error and not a
/// fifth tier.
#[derive(Clone, Debug, PartialEq)]
pub struct Valuation {
    pub price_per_m2: f64,
    pub market: Option<MarketVerdict>,
}

/// `total_price / area`, guarded so NaN/Infinity can never escape.
pub fn price_per_area(total_price: f64, area: u32) -> Result<f64, ValuationError> {
    if !total_price.is_finite() || total_price <= 0.0 {
        return Err(ValuationError::InvalidPrice);
    }
    if area == 0 {
        return Err(ValuationError::InvalidArea);
    }
    Ok(total_price / f64::from(area))
}

/// Places a price-per-m² in the band. First match wins, strict inequalities
/// at every boundary; a zero floor disables the top tier.
pub fn classify_deal(price_m2: f64, band: &PriceBand) -> DealTier {
    if band.min_m2 > 0.0 && price_m2 < band.min_m2 * FLOOR_DISCOUNT_FACTOR {
        DealTier::ExcellentDeal
    } else if price_m2 < band.avg_m2 {
        DealTier::VeryAdvantageous
    } else if price_m2 > band.max_m2 {
        DealTier::Overpriced
    } else {
        DealTier::FairPrice
    }
}

/// Evaluates one query. Lookup misses flow through as `market: None`;
/// only malformed numeric input is an error.
pub fn evaluate(
    total_price: f64,
    area: u32,
    neighborhood: Option<&Neighborhood>,
) -> Result<Valuation, ValuationError> {
    let price_per_m2 = price_per_area(total_price, area)?;
    let market = neighborhood.map(|hood| {
        let tier = classify_deal(price_per_m2, &hood.band);
        MarketVerdict {
            tier,
            message: verdict_message(tier, price_per_m2, &hood.band, hood.olx_avg_m2),
            estimated_market_value: hood.estimated_market_value(area),
            indicators: indicator_report(&hood.indicators, &hood.amenities),
        }
    });
    Ok(Valuation {
        price_per_m2,
        market,
    })
}

fn verdict_message(tier: DealTier, price_m2: f64, band: &PriceBand, olx_avg_m2: f64) -> String {
    let price = format_currency(price_m2);
    let olx = format_currency(olx_avg_m2);
    match tier {
        DealTier::ExcellentDeal => format!(
            "{price}/m² is more than 5% below the official floor of {}/m². \
             Classifieds average: {olx}/m².",
            format_currency(band.min_m2)
        ),
        DealTier::VeryAdvantageous => format!(
            "{price}/m² is below the official average of {}/m². \
             Classifieds average: {olx}/m².",
            format_currency(band.avg_m2)
        ),
        DealTier::Overpriced => format!(
            "{price}/m² is above the official ceiling of {}/m². \
             Classifieds average: {olx}/m².",
            format_currency(band.max_m2)
        ),
        DealTier::FairPrice => format!(
            "{price}/m² sits within the official band of {} to {}/m². \
             Classifieds average: {olx}/m².",
            format_currency(band.avg_m2),
            format_currency(band.max_m2)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Amenities, IndicatorScores};

    fn band(min: f64, avg: f64, max: f64) -> PriceBand {
        PriceBand {
            min_m2: min,
            avg_m2: avg,
            max_m2: max,
        }
    }

    fn sample_neighborhood() -> Neighborhood {
        Neighborhood {
            name: "Aldeota".to_string(),
            region: "Regional 2".to_string(),
            band: band(1_000.0, 2_000.0, 3_000.0),
            olx_avg_m2: 1_900.0,
            indicators: IndicatorScores {
                wellbeing: 0.91,
                human_development: 0.86,
                environment: 0.78,
                housing: 0.88,
            },
            avg_household_income: 8_500.0,
            description: String::new(),
            amenities: Amenities::default(),
            coordinates: None,
        }
    }

    #[test]
    fn tier_boundaries_use_strict_inequalities() {
        let band = band(1_000.0, 2_000.0, 3_000.0);
        // Exactly min × 0.95 is no longer an excellent deal.
        assert_eq!(classify_deal(949.99, &band), DealTier::ExcellentDeal);
        assert_eq!(classify_deal(950.0, &band), DealTier::VeryAdvantageous);
        assert_eq!(classify_deal(1_999.99, &band), DealTier::VeryAdvantageous);
        assert_eq!(classify_deal(2_000.0, &band), DealTier::FairPrice);
        assert_eq!(classify_deal(3_000.0, &band), DealTier::FairPrice);
        assert_eq!(classify_deal(3_000.01, &band), DealTier::Overpriced);
    }

    #[test]
    fn zero_floor_disables_the_top_tier() {
        let band = band(0.0, 2_000.0, 3_000.0);
        assert_eq!(classify_deal(1.0, &band), DealTier::VeryAdvantageous);
        assert_eq!(classify_deal(2_500.0, &band), DealTier::FairPrice);
        assert_eq!(classify_deal(3_500.0, &band), DealTier::Overpriced);
    }

    #[test]
    fn tiers_never_regress_as_price_climbs() {
        let band = band(1_000.0, 2_000.0, 3_000.0);
        let mut last = DealTier::ExcellentDeal;
        let mut price = 100.0;
        while price <= 5_000.0 {
            let tier = classify_deal(price, &band);
            assert!(tier >= last, "tier regressed at {price}");
            last = tier;
            price += 10.0;
        }
        assert_eq!(last, DealTier::Overpriced);
    }

    #[test]
    fn malformed_band_still_classifies_without_panicking() {
        // avg above max; nonsense data must not crash the engine.
        let band = band(4_000.0, 5_000.0, 3_000.0);
        let _ = classify_deal(4_500.0, &band);
    }

    #[test]
    fn division_guard_rejects_zero_area() {
        assert_eq!(
            price_per_area(500_000.0, 0),
            Err(ValuationError::InvalidArea)
        );
        assert_eq!(
            evaluate(500_000.0, 0, Some(&sample_neighborhood())),
            Err(ValuationError::InvalidArea)
        );
    }

    #[test]
    fn non_finite_or_non_positive_price_is_rejected() {
        assert_eq!(price_per_area(0.0, 100), Err(ValuationError::InvalidPrice));
        assert_eq!(
            price_per_area(-10.0, 100),
            Err(ValuationError::InvalidPrice)
        );
        assert_eq!(
            price_per_area(f64::INFINITY, 100),
            Err(ValuationError::InvalidPrice)
        );
        assert_eq!(
            price_per_area(f64::NAN, 100),
            Err(ValuationError::InvalidPrice)
        );
    }

    #[test]
    fn price_per_area_is_unrounded() {
        assert_eq!(price_per_area(1_000.0, 3).unwrap(), 1_000.0 / 3.0);
    }

    #[test]
    fn missing_neighborhood_skips_classification() {
        let valuation = evaluate(500_000.0, 100, None).unwrap();
        assert_eq!(valuation.price_per_m2, 5_000.0);
        assert!(valuation.market.is_none());
    }

    #[test]
    fn evaluate_produces_a_full_verdict() {
        let hood = sample_neighborhood();
        // 180.000 over 100 m² → 1.800/m²: below average, above the 5% floor gap.
        let valuation = evaluate(180_000.0, 100, Some(&hood)).unwrap();
        let market = valuation.market.expect("record present");
        assert_eq!(market.tier, DealTier::VeryAdvantageous);
        assert_eq!(market.estimated_market_value, 200_000.0);
        assert!(market.message.contains("R$ 1.800,00"));
        assert!(market.message.contains("R$ 2.000,00"));
        assert!(market.message.contains("R$ 1.900,00"));
        assert_eq!(market.indicators.wellbeing.label, "Very High");
        assert_eq!(market.indicators.housing.label, "Good");
    }

    #[test]
    fn tier_severity_is_a_closed_mapping() {
        assert_eq!(DealTier::ExcellentDeal.severity(), Severity::Excellent);
        assert_eq!(DealTier::Overpriced.severity(), Severity::Critical);
    }
}
