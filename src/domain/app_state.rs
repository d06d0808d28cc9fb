use serde::{Deserialize, Serialize};

use super::entities::ValuationInput;
use super::money::{normalize_currency, parse_area};

/// Visual theme for the whole UI. One value drives every style lookup in
/// `ui::theme`; pages never branch on it themselves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }
}

/// Session state shared across pages via a Dioxus signal.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub theme: Theme,
    /// Masked display value of the price field ("R$ 250.000,00").
    pub price_input: String,
    pub area_input: String,
    /// Free text of the neighborhood search box.
    pub neighborhood_query: String,
    /// Canonical catalog name once the query resolves to one.
    pub selected_neighborhood: Option<String>,
    /// The query the result page renders. Set on submit, never persisted.
    pub submitted: Option<ValuationInput>,
}

impl AppState {
    /// Builds a valuation query from the current form fields, or `None`
    /// while any field is missing or invalid. Drives both the submit
    /// handler and the button's enabled state.
    pub fn form_input(&self) -> Option<ValuationInput> {
        let total_price = normalize_currency(&self.price_input).filter(|price| *price > 0.0)?;
        let area = parse_area(&self.area_input).filter(|area| *area > 0)?;
        let neighborhood = self.selected_neighborhood.clone()?;
        Some(ValuationInput {
            neighborhood,
            total_price,
            area,
        })
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.theme = persisted.theme;
        if let Some(name) = persisted.last_neighborhood {
            self.neighborhood_query = name.clone();
            self.selected_neighborhood = Some(name);
        }
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            theme: self.theme,
            last_neighborhood: self.selected_neighborhood.clone(),
        }
    }
}

/// What survives a restart: the theme and the last neighborhood looked at.
/// Valuation inputs and results are deliberately not part of this.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub last_neighborhood: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_input_requires_every_field() {
        let mut state = AppState::default();
        assert!(state.form_input().is_none());

        state.price_input = "R$ 250.000,00".to_string();
        state.area_input = "100".to_string();
        assert!(state.form_input().is_none(), "neighborhood still missing");

        state.selected_neighborhood = Some("Aldeota".to_string());
        let input = state.form_input().expect("all fields present");
        assert_eq!(input.total_price, 250_000.0);
        assert_eq!(input.area, 100);
        assert_eq!(input.neighborhood, "Aldeota");
    }

    #[test]
    fn form_input_rejects_zero_price_and_area() {
        let mut state = AppState {
            price_input: "R$ 0,00".to_string(),
            area_input: "100".to_string(),
            selected_neighborhood: Some("Centro".to_string()),
            ..AppState::default()
        };
        assert!(state.form_input().is_none());

        state.price_input = "R$ 1.000,00".to_string();
        state.area_input = "0".to_string();
        assert!(state.form_input().is_none());
    }

    #[test]
    fn persisted_round_trip_keeps_theme_and_neighborhood() {
        let state = AppState {
            theme: Theme::Light,
            selected_neighborhood: Some("Meireles".to_string()),
            submitted: None,
            ..AppState::default()
        };
        let mut restored = AppState::default();
        restored.apply_persisted(state.to_persisted());
        assert_eq!(restored.theme, Theme::Light);
        assert_eq!(restored.selected_neighborhood.as_deref(), Some("Meireles"));
        assert_eq!(restored.neighborhood_query, "Meireles");
    }
}
