use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{AppState, Theme},
    infra::dataset,
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
    util::version::{version_label, APP_NAME, APP_REPO_URL},
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let current = state.with(|st| st.theme);

    let catalog = dataset::catalog();
    let record_count = catalog.len();
    let region_count = {
        let mut regions: Vec<&str> = catalog.iter().map(|hood| hood.region.as_str()).collect();
        regions.sort_unstable();
        regions.dedup();
        regions.len()
    };
    let mapped_count = catalog
        .iter()
        .filter(|hood| hood.coordinates.is_some())
        .count();

    let set_theme = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |next: Theme| {
            state.with_mut(|st| st.theme = next);
            persist_user_state(&state);
            push_toast(
                toasts.clone(),
                ToastKind::Success,
                format!("Switched to the {} theme.", next.name()),
            );
        }
    };

    rsx! {
        div { class: "space-y-8",
            section {
                class: "{theme::panel(current)} p-6",
                h2 { class: "{theme::label_class(current)}", "Appearance" }
                p { class: "mt-2 text-sm {theme::text_muted(current)}",
                    "One theme value drives every screen; pick whichever reads better."
                }
                div { class: "mt-4 flex gap-2",
                    ThemeButton { option: Theme::Dark, current, onpick: set_theme.clone() }
                    ThemeButton { option: Theme::Light, current, onpick: set_theme }
                }
            }

            section {
                class: "{theme::panel(current)} p-6",
                h2 { class: "{theme::label_class(current)}", "Reference Dataset" }
                ul { class: "mt-3 space-y-2 text-sm {theme::text_secondary(current)}",
                    li { "{record_count} neighborhoods covered across {region_count} regions." }
                    li { "{mapped_count} records carry map coordinates." }
                    li { "The dataset ships inside the binary; the app never goes online." }
                }
            }

            section {
                class: "flex flex-col items-center gap-2 {theme::panel(current)} p-6 text-center",
                h2 { class: "{theme::label_class(current)}", "About" }
                p { class: "text-sm {theme::text_secondary(current)}", "{APP_NAME} {version_label()}" }
                a {
                    href: "{APP_REPO_URL}",
                    target: "_blank",
                    rel: "noreferrer",
                    class: "text-xs {theme::accent_text(current)} hover:underline",
                    "{APP_REPO_URL}"
                }
                p { class: "text-xs {theme::text_muted(current)}",
                    "Price bands from FIPE appraisals; market averages from OLX listings; socioeconomic indices from public municipal statistics."
                }
            }
        }
    }
}

#[component]
fn ThemeButton(option: Theme, current: Theme, onpick: EventHandler<Theme>) -> Element {
    let class = if option == current {
        theme::btn_choice_active(current)
    } else {
        theme::btn_choice_inactive(current)
    };
    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onpick.call(option),
            "{option.name()}"
        }
    }
}
