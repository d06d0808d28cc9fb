use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::{
        evaluate, format_currency, AppState, Neighborhood, Severity, Theme, Valuation,
        ValuationInput,
    },
    infra::dataset,
    ui::{
        components::{DetailRow, IndicatorBadge, KpiCard, NoMarketDataCard, VerdictCard},
        theme,
    },
};

#[component]
pub fn ResultPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let nav = use_navigator();
    let theme = state.with(|st| st.theme);
    let submitted = state.with(|st| st.submitted.clone());

    let Some(input) = submitted else {
        return rsx! {
            div { class: "mx-auto max-w-xl {theme::panel(theme)} p-8 text-center",
                p { class: "text-sm {theme::text_muted(theme)}", "Nothing to show yet — run an analysis first." }
                button {
                    class: "mt-4 {theme::btn_primary(theme)}",
                    onclick: move |_| { nav.push(Route::Analyze {}); },
                    "Go to Analyze"
                }
            }
        };
    };

    let neighborhood = dataset::catalog().find(&input.neighborhood);

    match evaluate(input.total_price, input.area, neighborhood) {
        Ok(valuation) => rsx! {
            ResultSections { input, valuation, neighborhood: neighborhood.cloned(), theme }
        },
        // The form blocks invalid input before it gets here; this is the
        // engine's own guard surfacing.
        Err(err) => rsx! {
            div { class: "mx-auto max-w-xl {theme::severity_card(Severity::Critical)} p-6 text-center",
                p { class: "text-sm font-semibold", "Invalid input" }
                p { class: "mt-1 text-sm opacity-90", "{err}" }
                button {
                    class: "mt-4 {theme::btn_secondary(theme)}",
                    onclick: move |_| { nav.push(Route::Analyze {}); },
                    "Back to the form"
                }
            }
        },
    }
}

#[component]
fn ResultSections(
    input: ValuationInput,
    valuation: Valuation,
    neighborhood: Option<Neighborhood>,
    theme: Theme,
) -> Element {
    let market_details = neighborhood.as_ref().zip(valuation.market.as_ref());
    rsx! {
        div { class: "space-y-6",
            h2 { class: "text-center text-2xl font-bold {theme::text_primary(theme)}", "Market Evaluation" }

            match valuation.market {
                Some(ref verdict) => rsx! {
                    VerdictCard { tier: verdict.tier, message: verdict.message.clone() }
                },
                None => rsx! {
                    NoMarketDataCard { neighborhood: input.neighborhood.clone() }
                },
            }

            section {
                class: "{theme::panel(theme)} p-6",
                h3 { class: "text-sm font-semibold uppercase tracking-wide {theme::accent_text(theme)}", "Property Data" }
                div { class: "mt-3 {theme::divider(theme)}",
                    DetailRow { label: "Neighborhood".to_string(), value: input.neighborhood.clone(), theme }
                    DetailRow { label: "Total area".to_string(), value: format!("{} m²", input.area), theme }
                    DetailRow { label: "Asking price".to_string(), value: format_currency(input.total_price), theme }
                    DetailRow { label: "Price per m²".to_string(), value: format!("{}/m²", format_currency(valuation.price_per_m2)), theme }
                }
            }

            if let Some((hood, verdict)) = market_details {
                section {
                    class: "{theme::panel(theme)} p-6",
                    h3 { class: "text-sm font-semibold uppercase tracking-wide {theme::accent_text(theme)}", "Market Analysis (FIPE / OLX)" }
                    div { class: "mt-3 {theme::divider(theme)}",
                        DetailRow { label: "FIPE floor / m²".to_string(), value: format_currency(hood.band.min_m2), theme }
                        DetailRow { label: "FIPE average / m²".to_string(), value: format_currency(hood.band.avg_m2), theme }
                        DetailRow { label: "FIPE ceiling / m²".to_string(), value: format_currency(hood.band.max_m2), theme }
                        DetailRow { label: "OLX average / m²".to_string(), value: format_currency(hood.olx_avg_m2), theme }
                        DetailRow {
                            label: "Estimated market value".to_string(),
                            value: format_currency(verdict.estimated_market_value),
                            theme,
                            accent: Some(true),
                        }
                    }
                }

                section {
                    h3 { class: "mb-3 text-sm font-semibold uppercase tracking-wide {theme::accent_text(theme)}", "Neighborhood Indicators" }
                    div { class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-4",
                        IndicatorBadge { title: "Urban Wellbeing".to_string(), rating: verdict.indicators.wellbeing, theme }
                        IndicatorBadge { title: "Human Development".to_string(), rating: verdict.indicators.human_development, theme }
                        IndicatorBadge { title: "Environment".to_string(), rating: verdict.indicators.environment, theme }
                        IndicatorBadge { title: "Housing Conditions".to_string(), rating: verdict.indicators.housing, theme }
                    }
                    div { class: "mt-4 grid gap-4 sm:grid-cols-2",
                        KpiCard {
                            title: "Mobility".to_string(),
                            value: format!("{} — {:.0} pts", verdict.indicators.mobility.rating.label, verdict.indicators.mobility.score),
                            description: Some("Bus stops, bike-share stations and bike lanes".to_string()),
                            theme,
                        }
                        KpiCard {
                            title: "Education & Health".to_string(),
                            value: format!("{} — {:.0} pts", verdict.indicators.education_health.rating.label, verdict.indicators.education_health.score),
                            description: Some("Schools and public health units".to_string()),
                            theme,
                        }
                    }
                }

                NeighborhoodProfile { hood: hood.clone(), theme }
            }
        }
    }
}

#[component]
fn NeighborhoodProfile(hood: Neighborhood, theme: Theme) -> Element {
    let wifi = if hood.amenities.public_wifi { "Yes" } else { "No" };
    rsx! {
        section {
            class: "{theme::panel(theme)} p-6",
            h3 { class: "text-sm font-semibold uppercase tracking-wide {theme::accent_text(theme)}", "Neighborhood Profile" }
            if !hood.description.is_empty() {
                p { class: "mt-3 text-sm {theme::text_secondary(theme)}", "{hood.description}" }
            }
            div { class: "mt-3 {theme::divider(theme)}",
                DetailRow { label: "Region".to_string(), value: hood.region.clone(), theme }
                DetailRow { label: "Avg. household income".to_string(), value: format_currency(hood.avg_household_income), theme }
                DetailRow { label: "Bus stops".to_string(), value: hood.amenities.bus_stops.to_string(), theme }
                DetailRow { label: "Bike-share stations".to_string(), value: hood.amenities.bike_stations.to_string(), theme }
                DetailRow { label: "Bike lanes".to_string(), value: format!("{:.1} km", hood.amenities.bike_lane_km), theme }
                DetailRow { label: "Schools".to_string(), value: hood.amenities.schools.to_string(), theme }
                DetailRow { label: "Health units".to_string(), value: hood.amenities.health_units.to_string(), theme }
                DetailRow { label: "Public squares".to_string(), value: hood.amenities.squares.to_string(), theme }
                DetailRow { label: "Public wifi".to_string(), value: wifi.to_string(), theme }
                if let Some(coords) = hood.coordinates {
                    DetailRow {
                        label: "Location".to_string(),
                        value: format!("{:.4}, {:.4}", coords.latitude, coords.longitude),
                        theme,
                    }
                }
            }
        }
    }
}
