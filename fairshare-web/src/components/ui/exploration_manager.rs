use web_sys::{HtmlInputElement, HtmlSelectElement, KeyboardEvent};
use yew::prelude::*;

use crate::model::{COUNTRIES, Exploration, country_by_code};

/// Explorations that pass the country filter, newest first.
fn visible_explorations(explorations: &[Exploration], filter_country: &str) -> Vec<Exploration> {
    let mut visible: Vec<Exploration> = explorations
        .iter()
        .filter(|e| filter_country.is_empty() || e.country_code.as_deref() == Some(filter_country))
        .cloned()
        .collect();
    visible.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    visible
}

fn country_name_or_na(code: Option<&str>) -> &'static str {
    code.and_then(country_by_code).map_or("N/A", |country| country.name)
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub explorations: Vec<Exploration>,
    pub active_id: AttrValue,
    pub comparison_ids: Vec<String>,
    pub on_select: Callback<String>,
    pub on_create: Callback<()>,
    pub on_delete: Callback<String>,
    pub on_rename: Callback<(String, String)>,
    pub on_import: Callback<web_sys::File>,
    pub on_export: Callback<()>,
    pub on_add_compare: Callback<String>,
    pub on_remove_compare: Callback<String>,
    pub on_clear_compare: Callback<()>,
    pub on_start_compare: Callback<()>,
}

/// Collapsible dashboard over the whole collection: select, create,
/// delete, rename, filter, import/export, and the comparison queue.
#[function_component(ExplorationManager)]
pub fn exploration_manager(p: &Props) -> Html {
    let expanded = use_state(|| true);
    let editing_id = use_state(|| None::<String>);
    let editing_name = use_state(String::new);
    let filter_country = use_state(String::new);
    let file_input_ref = use_node_ref();

    let toggle_expanded = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };

    let on_filter_change = {
        let filter_country = filter_country.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                filter_country.set(select.value());
            }
        })
    };

    let on_import_click = {
        let file_input_ref = file_input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_file_change = {
        let on_import = p.on_import.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                if let Some(file) = input.files().and_then(|files| files.get(0)) {
                    on_import.emit(file);
                }
                // Reset so the same file can be selected again if needed.
                input.set_value("");
            }
        })
    };

    let start_edit = {
        let editing_id = editing_id.clone();
        let editing_name = editing_name.clone();
        Callback::from(move |(id, name): (String, String)| {
            editing_id.set(Some(id));
            editing_name.set(name);
        })
    };

    let on_name_input = {
        let editing_name = editing_name.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                editing_name.set(input.value());
            }
        })
    };

    // Commit the draft; whitespace-only edits are discarded, not saved.
    let commit_edit = {
        let editing_id = editing_id.clone();
        let editing_name = editing_name.clone();
        let on_rename = p.on_rename.clone();
        Callback::from(move |id: String| {
            let name = editing_name.trim().to_string();
            if !name.is_empty() {
                on_rename.emit((id, name));
            }
            editing_id.set(None);
        })
    };

    let visible = visible_explorations(&p.explorations, &filter_country);
    let queued: Vec<Exploration> = p
        .comparison_ids
        .iter()
        .filter_map(|id| p.explorations.iter().find(|e| &e.id == id))
        .cloned()
        .collect();
    let sole_member = p.explorations.len() <= 1;

    html! {
        <div class="bg-slate-100 rounded-2xl mb-8 border border-slate-200 transition-all duration-300">
            <button onclick={toggle_expanded} class="w-full p-4 flex justify-between items-center">
                <h2 class="text-lg font-bold text-slate-800">{ "My Explorations Dashboard" }</h2>
                <span class="text-2xl text-slate-500 transform transition-transform">{ if *expanded { "−" } else { "+" } }</span>
            </button>

            if *expanded {
                <div class="p-4 pt-0">
                    <div class="flex flex-wrap items-center gap-3 mb-4 pb-4 border-b border-slate-200">
                        <button
                            onclick={{ let cb = p.on_create.clone(); Callback::from(move |_: MouseEvent| cb.emit(())) }}
                            class="bg-teal-600 text-white hover:bg-teal-700 font-semibold py-2 px-4 rounded-lg text-sm transition-colors"
                        >
                            { "+ New Exploration" }
                        </button>
                        <div class="flex-grow"></div>
                        <select
                            onchange={on_filter_change}
                            class="bg-white border border-slate-300 text-slate-900 text-sm rounded-lg focus:ring-teal-500 focus:border-teal-500 p-2"
                        >
                            <option value="" selected={filter_country.is_empty()}>{ "Filter by country..." }</option>
                            { for COUNTRIES.iter().map(|country| html! {
                                <option
                                    key={country.code}
                                    value={country.code}
                                    selected={filter_country.as_str() == country.code}
                                >
                                    { country.name }
                                </option>
                            }) }
                        </select>
                        <button onclick={on_import_click} class="text-sm font-medium text-slate-600 hover:text-teal-600 transition-colors">{ "Import" }</button>
                        <input type="file" ref={file_input_ref} onchange={on_file_change} class="hidden" accept=".json" />
                        <button
                            onclick={{ let cb = p.on_export.clone(); Callback::from(move |_: MouseEvent| cb.emit(())) }}
                            class="text-sm font-medium text-slate-600 hover:text-teal-600 transition-colors"
                        >
                            { "Export" }
                        </button>
                    </div>

                    if !p.comparison_ids.is_empty() {
                        <div class="p-3 mb-4 bg-teal-50 border border-teal-200 rounded-lg fade-in">
                            <div class="flex justify-between items-center mb-2">
                                <h3 class="font-bold text-teal-800">{ format!("Comparison Queue ({}/3)", p.comparison_ids.len()) }</h3>
                                <div class="flex items-center">
                                    <button
                                        onclick={{ let cb = p.on_start_compare.clone(); Callback::from(move |_: MouseEvent| cb.emit(())) }}
                                        disabled={p.comparison_ids.len() < 2}
                                        class="bg-teal-600 text-white hover:bg-teal-700 font-semibold py-1.5 px-4 rounded-lg text-sm transition-colors disabled:bg-slate-400 disabled:cursor-not-allowed"
                                    >
                                        { "Compare" }
                                    </button>
                                    <button
                                        onclick={{ let cb = p.on_clear_compare.clone(); Callback::from(move |_: MouseEvent| cb.emit(())) }}
                                        class="ml-3 text-sm font-medium text-slate-600 hover:text-rose-600 transition-colors"
                                    >
                                        { "Clear" }
                                    </button>
                                </div>
                            </div>
                            <div class="flex flex-wrap gap-2">
                                { for queued.iter().map(|exploration| {
                                    let remove = {
                                        let cb = p.on_remove_compare.clone();
                                        let id = exploration.id.clone();
                                        Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
                                    };
                                    html! {
                                        <div key={exploration.id.clone()} class="bg-white px-2 py-1 rounded-md text-sm text-slate-700 border border-slate-200 flex items-center gap-1.5">
                                            <span>{ exploration.name.clone() }</span>
                                            <button onclick={remove} class="text-slate-400 hover:text-rose-500 font-bold leading-none text-lg -mt-0.5">{ "×" }</button>
                                        </div>
                                    }
                                }) }
                            </div>
                        </div>
                    }

                    <div class="space-y-2 max-h-60 overflow-y-auto pr-2">
                        { for visible.iter().map(|exploration| {
                            let id = exploration.id.clone();
                            let is_active = p.active_id.as_str() == exploration.id;
                            let is_queued = p.comparison_ids.contains(&exploration.id);
                            let select = {
                                let cb = p.on_select.clone();
                                let id = id.clone();
                                Callback::from(move |_: Event| cb.emit(id.clone()))
                            };
                            let edit = {
                                let cb = start_edit.clone();
                                let id = id.clone();
                                let name = exploration.name.clone();
                                Callback::from(move |_: MouseEvent| cb.emit((id.clone(), name.clone())))
                            };
                            let delete = {
                                let cb = p.on_delete.clone();
                                let id = id.clone();
                                Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
                            };
                            let add_compare = {
                                let cb = p.on_add_compare.clone();
                                let id = id.clone();
                                Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
                            };
                            let commit_blur = {
                                let cb = commit_edit.clone();
                                let id = id.clone();
                                Callback::from(move |_: FocusEvent| cb.emit(id.clone()))
                            };
                            let commit_enter = {
                                let cb = commit_edit.clone();
                                let id = id.clone();
                                Callback::from(move |e: KeyboardEvent| {
                                    if e.key() == "Enter" {
                                        cb.emit(id.clone());
                                    }
                                })
                            };
                            html! {
                                <div
                                    key={exploration.id.clone()}
                                    class={classes!(
                                        "p-3", "rounded-lg", "flex", "items-center", "gap-3", "transition-colors",
                                        if is_active { "bg-teal-50 border border-teal-200" } else { "bg-white" },
                                    )}
                                >
                                    <input
                                        type="radio"
                                        name="active-exploration"
                                        checked={is_active}
                                        onchange={select}
                                        class="form-radio h-4 w-4 text-teal-600 border-gray-300 focus:ring-teal-500 flex-shrink-0"
                                    />

                                    <div class="flex-grow">
                                        if editing_id.as_deref() == Some(exploration.id.as_str()) {
                                            <input
                                                type="text"
                                                value={(*editing_name).clone()}
                                                oninput={on_name_input.clone()}
                                                onblur={commit_blur}
                                                onkeydown={commit_enter}
                                                class="bg-white border border-slate-300 text-slate-900 text-sm rounded-md focus:ring-teal-500 focus:border-teal-500 p-1 w-full"
                                            />
                                        } else {
                                            <p class="font-medium text-slate-800">{ exploration.name.clone() }</p>
                                        }
                                        <p class="text-xs text-slate-500">
                                            { format!(
                                                "{} · {}% Participation",
                                                country_name_or_na(exploration.country_code.as_deref()),
                                                exploration.participation_rate,
                                            ) }
                                        </p>
                                    </div>

                                    <div class="flex items-center gap-2 flex-shrink-0">
                                        <button onclick={edit} title="Edit name" class="p-2 text-slate-500 hover:text-slate-800 transition-colors text-lg leading-none">{ "✏️" }</button>
                                        <button
                                            onclick={delete}
                                            disabled={sole_member}
                                            title="Delete"
                                            class="p-2 text-rose-500 hover:text-rose-700 transition-colors disabled:opacity-50 disabled:cursor-not-allowed text-lg leading-none"
                                        >
                                            { "🗑️" }
                                        </button>
                                        <button
                                            onclick={add_compare}
                                            disabled={is_queued || p.comparison_ids.len() >= 3}
                                            class={classes!(
                                                "text-sm", "font-semibold", "py-1.5", "px-3", "rounded-lg", "transition-colors",
                                                "w-36", "text-center", "disabled:opacity-60", "disabled:cursor-not-allowed",
                                                if is_queued {
                                                    "bg-teal-100 text-teal-800 cursor-default"
                                                } else {
                                                    "bg-slate-200 hover:bg-slate-300 text-slate-700"
                                                },
                                            )}
                                        >
                                            { if is_queued { "✓ Added" } else { "+ Add to Compare" } }
                                        </button>
                                    </div>
                                </div>
                            }
                        }) }
                    </div>
                    if visible.is_empty() {
                        <p class="text-center text-slate-500 py-4">{ "No explorations match your filter." }</p>
                    }
                </div>
            }
        </div>
    }
}
