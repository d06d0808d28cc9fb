use dioxus::prelude::*;

use crate::domain::Theme;
use crate::ui::theme;

/// One label/value line of a result section. `accent` marks the row a
/// section wants the eye drawn to (e.g. the estimated market value).
#[component]
pub fn DetailRow(label: String, value: String, theme: Theme, accent: Option<bool>) -> Element {
    let value_class = if accent.unwrap_or(false) {
        format!("text-sm font-bold {}", theme::accent_text(theme))
    } else {
        format!("text-sm font-semibold {}", theme::text_primary(theme))
    };
    rsx! {
        div {
            class: "flex items-center justify-between py-2",
            span { class: "text-sm {theme::text_muted(theme)}", "{label}" }
            span { class: "{value_class}", "{value}" }
        }
    }
}
