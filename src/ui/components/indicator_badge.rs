use dioxus::prelude::*;

use crate::domain::{IndicatorRating, Theme};
use crate::ui::theme;

/// Tile showing one indicator's classification as a colored pill.
#[component]
pub fn IndicatorBadge(title: String, rating: IndicatorRating, theme: Theme) -> Element {
    rsx! {
        div {
            class: "{theme::panel_solid(theme)} p-4",
            h3 { class: "{theme::label_class(theme)}", "{title}" }
            span {
                class: "mt-2 inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-medium {theme::severity_badge(rating.severity)}",
                "{rating.label}"
            }
        }
    }
}
