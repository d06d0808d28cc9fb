//! Scalar-to-label classification of the socioeconomic indicators and the
//! two composite secondary scores.
//!
//! Curves and cut points are domain constants inherited from the reference
//! statistics; they are not derivable and must not be "tidied up".

use super::entities::{Amenities, IndicatorScores, Severity};

/// Which classification ladder applies to a score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndicatorCurve {
    /// Five bands, used for the wellbeing index only.
    Wellbeing,
    /// Four bands, shared by human-development, environment and housing.
    Generic,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndicatorRating {
    pub label: &'static str,
    pub severity: Severity,
}

/// Maps a continuous score to a discrete rating. A missing or non-finite
/// score counts as 0 and lands on the worst band; this never fails.
pub fn classify_indicator(score: Option<f64>, curve: IndicatorCurve) -> IndicatorRating {
    let score = score.filter(|value| value.is_finite()).unwrap_or(0.0);
    let (label, severity) = match curve {
        IndicatorCurve::Wellbeing => match score {
            s if s >= 0.9 => ("Very High", Severity::Excellent),
            s if s >= 0.8 => ("High", Severity::Good),
            s if s >= 0.7 => ("Medium", Severity::Fair),
            s if s >= 0.6 => ("Low", Severity::Poor),
            _ => ("Very Low", Severity::Critical),
        },
        IndicatorCurve::Generic => match score {
            s if s >= 0.9 => ("Excellent", Severity::Excellent),
            s if s >= 0.8 => ("Good", Severity::Good),
            s if s >= 0.7 => ("Regular", Severity::Fair),
            _ => ("Poor", Severity::Critical),
        },
    };
    IndicatorRating { label, severity }
}

/// A composite score together with its classification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompositeRating {
    pub score: f64,
    pub rating: IndicatorRating,
}

/// Weighted mobility score: bus stops ×1, bike-share stations ×5,
/// bike-lane km ×3.
pub fn mobility_score(amenities: &Amenities) -> f64 {
    f64::from(amenities.bus_stops)
        + f64::from(amenities.bike_stations) * 5.0
        + amenities.bike_lane_km * 3.0
}

pub fn classify_mobility(score: f64) -> IndicatorRating {
    let (label, severity) = match score {
        s if s > 60.0 => ("Excellent", Severity::Excellent),
        s if s > 30.0 => ("Good", Severity::Good),
        s if s > 15.0 => ("Regular", Severity::Fair),
        _ => ("Limited", Severity::Poor),
    };
    IndicatorRating { label, severity }
}

/// Education and health coverage: schools ×1, health units ×3.
pub fn education_health_score(amenities: &Amenities) -> f64 {
    f64::from(amenities.schools) + f64::from(amenities.health_units) * 3.0
}

pub fn classify_education_health(score: f64) -> IndicatorRating {
    let (label, severity) = match score {
        s if s > 25.0 => ("Excellent", Severity::Excellent),
        s if s > 15.0 => ("Good", Severity::Good),
        s if s > 5.0 => ("Regular", Severity::Fair),
        _ => ("Limited", Severity::Poor),
    };
    IndicatorRating { label, severity }
}

/// All per-neighborhood classifications rendered on the result page.
/// Each entry is independent of the others and of the price tier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorReport {
    pub wellbeing: IndicatorRating,
    pub human_development: IndicatorRating,
    pub environment: IndicatorRating,
    pub housing: IndicatorRating,
    pub mobility: CompositeRating,
    pub education_health: CompositeRating,
}

pub fn indicator_report(scores: &IndicatorScores, amenities: &Amenities) -> IndicatorReport {
    let mobility = mobility_score(amenities);
    let education_health = education_health_score(amenities);
    IndicatorReport {
        wellbeing: classify_indicator(Some(scores.wellbeing), IndicatorCurve::Wellbeing),
        human_development: classify_indicator(
            Some(scores.human_development),
            IndicatorCurve::Generic,
        ),
        environment: classify_indicator(Some(scores.environment), IndicatorCurve::Generic),
        housing: classify_indicator(Some(scores.housing), IndicatorCurve::Generic),
        mobility: CompositeRating {
            score: mobility,
            rating: classify_mobility(mobility),
        },
        education_health: CompositeRating {
            score: education_health,
            rating: classify_education_health(education_health),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wellbeing_curve_has_five_bands() {
        let cases = [
            (0.95, "Very High"),
            (0.9, "Very High"),
            (0.85, "High"),
            (0.75, "Medium"),
            (0.65, "Low"),
            (0.59, "Very Low"),
            (0.0, "Very Low"),
        ];
        for (score, expected) in cases {
            let rating = classify_indicator(Some(score), IndicatorCurve::Wellbeing);
            assert_eq!(rating.label, expected, "score {score}");
        }
    }

    #[test]
    fn generic_curve_has_four_bands() {
        let cases = [
            (0.95, "Excellent"),
            (0.85, "Good"),
            (0.72, "Regular"),
            (0.69, "Poor"),
        ];
        for (score, expected) in cases {
            let rating = classify_indicator(Some(score), IndicatorCurve::Generic);
            assert_eq!(rating.label, expected, "score {score}");
        }
    }

    #[test]
    fn missing_score_lands_on_worst_band() {
        assert_eq!(
            classify_indicator(None, IndicatorCurve::Generic).label,
            "Poor"
        );
        assert_eq!(
            classify_indicator(Some(f64::NAN), IndicatorCurve::Wellbeing).label,
            "Very Low"
        );
    }

    #[test]
    fn mobility_example_from_reference_data() {
        let amenities = Amenities {
            bus_stops: 20,
            bike_stations: 2,
            bike_lane_km: 1.0,
            ..Amenities::default()
        };
        let score = mobility_score(&amenities);
        assert_eq!(score, 33.0);
        assert_eq!(classify_mobility(score).label, "Good");
    }

    #[test]
    fn mobility_thresholds_are_exclusive() {
        assert_eq!(classify_mobility(61.0).label, "Excellent");
        assert_eq!(classify_mobility(60.0).label, "Good");
        assert_eq!(classify_mobility(30.0).label, "Regular");
        assert_eq!(classify_mobility(15.0).label, "Limited");
    }

    #[test]
    fn education_health_weights_and_cuts() {
        let amenities = Amenities {
            schools: 10,
            health_units: 6,
            ..Amenities::default()
        };
        let score = education_health_score(&amenities);
        assert_eq!(score, 28.0);
        assert_eq!(classify_education_health(score).label, "Excellent");
        assert_eq!(classify_education_health(16.0).label, "Good");
        assert_eq!(classify_education_health(5.0).label, "Limited");
    }
}
