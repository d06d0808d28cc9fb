use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::{AppState, Theme};
use crate::ui::theme;
use crate::util::version::APP_NAME;

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let theme = state.with(|s| s.theme);

    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "{theme::page_background(theme)}",
            header {
                class: "{theme::header_class(theme)}",
                div { class: "mx-auto flex max-w-5xl items-center justify-between gap-4",
                    div { class: "flex items-center gap-3",
                        span { class: "text-2xl", "🏠" }
                        div {
                            h1 { class: "{theme::title_class(theme)}", "{APP_NAME}" }
                            p { class: "text-xs italic {theme::text_muted(theme)}", "is the asking price fair?" }
                        }
                    }
                    nav { class: "flex gap-2 text-sm",
                        NavButton {
                            active: matches!(current_route, Route::Analyze {}),
                            onclick: move |_| { nav.push(Route::Analyze {}); },
                            label: "🔎 Analyze",
                            theme: theme,
                        }
                        NavButton {
                            active: matches!(current_route, Route::Result {}),
                            onclick: move |_| { nav.push(Route::Result {}); },
                            label: "📈 Result",
                            theme: theme,
                        }
                        NavButton {
                            active: matches!(current_route, Route::Settings {}),
                            onclick: move |_| { nav.push(Route::Settings {}); },
                            label: "⚙️",
                            theme: theme,
                        }
                    }
                }
            }
            main { class: "mx-auto max-w-5xl px-6 py-10",
                {children}
            }
        }
    }
}

#[component]
fn NavButton(
    active: bool,
    onclick: EventHandler<()>,
    label: &'static str,
    theme: Theme,
) -> Element {
    let class = if active {
        theme::nav_active(theme)
    } else {
        theme::nav_inactive(theme)
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
