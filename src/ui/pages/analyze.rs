use dioxus::prelude::*;

use crate::{
    app::{persist_user_state, Route},
    domain::{format_currency, normalize_currency, AppState},
    infra::dataset,
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
};

#[component]
pub fn AnalyzePage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let nav = use_navigator();

    let theme = state.with(|st| st.theme);
    let price_value = state.with(|st| st.price_input.clone());
    let area_value = state.with(|st| st.area_input.clone());
    let query_value = state.with(|st| st.neighborhood_query.clone());
    let selected = state.with(|st| st.selected_neighborhood.clone());
    let can_submit = state.with(|st| st.form_input().is_some());

    let names: Vec<String> = dataset::catalog()
        .names()
        .map(str::to_string)
        .collect();

    // Masked input: every keystroke is normalized and re-rendered, which is
    // why normalization must round-trip over its own output.
    let on_price_input = {
        let mut state = state.clone();
        move |evt: FormEvent| {
            let masked = normalize_currency(&evt.value())
                .map(format_currency)
                .unwrap_or_default();
            state.with_mut(|st| st.price_input = masked);
        }
    };

    let on_area_input = {
        let mut state = state.clone();
        move |evt: FormEvent| {
            state.with_mut(|st| st.area_input = evt.value());
        }
    };

    let on_query_input = {
        let mut state = state.clone();
        move |evt: FormEvent| {
            let raw = evt.value();
            let resolved = dataset::catalog()
                .resolve_name(&raw)
                .map(str::to_string);
            state.with_mut(|st| {
                st.neighborhood_query = raw;
                st.selected_neighborhood = resolved;
            });
        }
    };

    let on_submit = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            match state.with(|st| st.form_input()) {
                Some(input) => {
                    state.with_mut(|st| st.submitted = Some(input));
                    persist_user_state(&state);
                    nav.push(Route::Result {});
                }
                None => {
                    push_toast(
                        toasts.clone(),
                        ToastKind::Warning,
                        "Fill in price, area and neighborhood before analyzing.",
                    );
                }
            }
        }
    };

    let button_class = if can_submit {
        theme::btn_primary(theme)
    } else {
        theme::btn_disabled(theme)
    };

    rsx! {
        div { class: "mx-auto max-w-xl space-y-6",
            div { class: "text-center",
                h2 { class: "text-2xl font-bold {theme::text_primary(theme)}", "Property Investment Analysis" }
                p { class: "mt-2 text-sm {theme::text_muted(theme)}",
                    "Enter the listing details and find out whether the purchase is worth it."
                }
            }

            form {
                class: "{theme::panel(theme)} space-y-5 p-6",
                onsubmit: on_submit,

                div {
                    label { class: "{theme::label_class(theme)}", "Asking Price" }
                    input {
                        class: "{theme::input_class(theme)}",
                        inputmode: "numeric",
                        value: price_value,
                        oninput: on_price_input,
                        placeholder: "R$ 250.000,00",
                    }
                }

                div {
                    label { class: "{theme::label_class(theme)}", "Area (m²)" }
                    input {
                        class: "{theme::input_class(theme)}",
                        inputmode: "numeric",
                        value: area_value,
                        oninput: on_area_input,
                        placeholder: "130",
                    }
                }

                div {
                    label { class: "{theme::label_class(theme)}", "Neighborhood" }
                    input {
                        class: "{theme::input_class(theme)}",
                        value: query_value,
                        oninput: on_query_input,
                        list: "neighborhood-list",
                        placeholder: "Search or select a neighborhood",
                    }
                    datalist {
                        id: "neighborhood-list",
                        for name in names.iter() {
                            option { value: name.clone() }
                        }
                    }
                    if let Some(ref name) = selected {
                        p { class: "mt-2 text-xs font-medium {theme::accent_text(theme)}",
                            "Selected neighborhood: {name}"
                        }
                    }
                }

                button {
                    class: "{button_class} w-full",
                    r#type: "submit",
                    disabled: !can_submit,
                    "Analyze Property"
                }
            }

            p { class: "text-center text-xs {theme::text_muted(theme)}",
                "Based on FIPE appraisal bands and OLX market averages for Fortaleza."
            }
        }
    }
}
