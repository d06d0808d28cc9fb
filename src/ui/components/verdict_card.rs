use dioxus::prelude::*;

use crate::domain::DealTier;
use crate::ui::theme;

/// The headline card of the result page: tier label plus the generated
/// market message, colored by the tier's severity.
#[component]
pub fn VerdictCard(tier: DealTier, message: String) -> Element {
    let classes = theme::severity_card(tier.severity());
    rsx! {
        div {
            class: "{classes} px-5 py-4",
            div {
                class: "flex items-center justify-between",
                span { class: "text-xs font-semibold uppercase tracking-wide", "Verdict" }
                span { class: "text-xs font-semibold uppercase", "{tier.label()}" }
            }
            p { class: "mt-2 text-lg font-semibold", "{tier.label()}" }
            p { class: "mt-1 text-sm opacity-90", "{message}" }
        }
    }
}

/// Shown instead of a verdict when the neighborhood has no reference
/// record. A distinct state, deliberately not styled like any tier.
#[component]
pub fn NoMarketDataCard(neighborhood: String) -> Element {
    rsx! {
        div {
            class: "{theme::insufficient_data_card()} px-5 py-4",
            div {
                class: "flex items-center justify-between",
                span { class: "text-xs font-semibold uppercase tracking-wide", "Verdict" }
                span { class: "text-xs font-semibold uppercase", "Insufficient data" }
            }
            p {
                class: "mt-2 text-sm",
                "No market reference data available for \"{neighborhood}\". The price per m² below is still valid; the market comparison is not possible."
            }
        }
    }
}
