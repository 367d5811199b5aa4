use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::model::{COUNTRIES, Country, Exploration};

/// Which systemic intervention a toggle refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralToggle {
    Grid,
    Transport,
    Food,
}

#[derive(Properties, PartialEq, Clone)]
struct ToggleProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub checked: bool,
    pub on_change: Callback<bool>,
}

#[function_component(ToggleSwitch)]
fn toggle_switch(p: &ToggleProps) -> Html {
    let onchange = {
        let cb = p.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                cb.emit(input.checked());
            }
        })
    };
    html! {
        <div class="flex items-center justify-between bg-slate-50 p-3 rounded-lg border border-slate-200">
            <span class="font-medium text-slate-700">{ p.label.clone() }</span>
            <label for={p.id.clone()} class="relative inline-flex items-center cursor-pointer">
                <input
                    type="checkbox"
                    id={p.id.clone()}
                    class="sr-only peer"
                    checked={p.checked}
                    {onchange}
                />
                <div class="w-11 h-6 bg-gray-200 rounded-full peer peer-focus:ring-2 peer-focus:ring-teal-300 peer-checked:after:translate-x-full peer-checked:after:border-white after:content-[''] after:absolute after:top-0.5 after:left-[2px] after:bg-white after:border-gray-300 after:border after:rounded-full after:h-5 after:w-5 after:transition-all peer-checked:bg-teal-600"></div>
            </label>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub active: Exploration,
    pub selected_country: Option<Country>,
    pub adjusted_emissions: f64,
    pub on_country_change: Callback<Option<String>>,
    pub on_toggle: Callback<(StructuralToggle, bool)>,
    pub on_participation: Callback<u8>,
}

/// Scenario inputs: starting country, structural changes, participation.
#[function_component(Controls)]
pub fn controls(p: &Props) -> Html {
    let on_country = {
        let cb = p.on_country_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                let value = select.value();
                cb.emit((!value.is_empty()).then_some(value));
            }
        })
    };

    let on_slider = {
        let cb = p.on_participation.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                if let Ok(rate) = input.value().parse::<u8>() {
                    cb.emit(rate);
                }
            }
        })
    };

    let toggle = |kind: StructuralToggle| {
        let cb = p.on_toggle.clone();
        Callback::from(move |enabled: bool| cb.emit((kind, enabled)))
    };

    let changes = p.active.structural_changes;

    html! {
        <>
            <div class="bg-white p-6 md:p-8 rounded-2xl shadow-lg border border-slate-200">
                <h2 class="text-xl font-bold text-center text-slate-900 mb-6">{ "1. Select a Starting Point" }</h2>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <label for="country-select" class="font-medium">{ "Average footprint for:" }</label>
                    <select
                        id="country-select"
                        onchange={on_country}
                        class="bg-slate-100 border border-slate-300 text-slate-900 text-sm rounded-lg focus:ring-teal-500 focus:border-teal-500 block w-full sm:w-auto p-2.5"
                    >
                        <option value="" selected={p.active.country_code.is_none()}>{ "Choose a country" }</option>
                        { for COUNTRIES.iter().map(|country| html! {
                            <option
                                key={country.code}
                                value={country.code}
                                selected={p.active.country_code.as_deref() == Some(country.code)}
                            >
                                { country.name }
                            </option>
                        }) }
                    </select>
                </div>
                if let Some(country) = p.selected_country {
                    <div class="mt-6 text-center bg-slate-50 p-4 rounded-lg border border-slate-200">
                        <p class="text-lg">
                            { "The average footprint in " }<strong>{ country.name }</strong>
                            { " is about " }<strong class="text-rose-600 text-xl">{ country.emissions }</strong>
                            { " tonnes per person." }
                        </p>
                    </div>
                }
            </div>

            if p.selected_country.is_some() {
                <div class="bg-white p-6 md:p-8 rounded-2xl shadow-lg mt-8 border border-slate-200 fade-in">
                    <h2 class="text-xl font-bold text-center text-slate-900 mb-2">{ "2. Apply Structural Changes" }</h2>
                    <p class="text-center text-slate-600 mb-6">{ "Systemic changes can dramatically lower the starting footprint for everyone. Toggle them on to see the effect." }</p>
                    <div class="space-y-3">
                        <ToggleSwitch id="toggle-grid" label="Decarbonize the Grid" checked={changes.grid} on_change={toggle(StructuralToggle::Grid)} />
                        <ToggleSwitch id="toggle-transport" label="Electrify Transport" checked={changes.transport} on_change={toggle(StructuralToggle::Transport)} />
                        <ToggleSwitch id="toggle-food" label="Sustainable Food Systems" checked={changes.food} on_change={toggle(StructuralToggle::Food)} />
                    </div>
                    <div class="mt-6 text-center bg-slate-100 p-4 rounded-lg">
                        <p class="text-slate-700">{ "With these changes, the new average footprint becomes:" }</p>
                        <p class="text-3xl font-bold text-green-600 my-2">{ format!("{:.1} tonnes", p.adjusted_emissions) }</p>
                    </div>
                </div>

                <div class="bg-white p-6 md:p-8 rounded-2xl shadow-lg mt-8 border border-slate-200 fade-in">
                    <h2 class="text-xl font-bold text-center text-slate-900 mb-2">{ "3. Set Participation Rate" }</h2>
                    <p class="text-center text-slate-600 mb-6">{ "What happens if not everyone participates? This shows how the burden on participants changes." }</p>
                    <div class="flex items-center justify-center gap-4 mb-4">
                        <label for="participation-slider" class="font-medium">{ "Participation Rate:" }</label>
                        <span class="font-bold text-teal-600 text-lg w-16 text-center">{ format!("{}%", p.active.participation_rate) }</span>
                    </div>
                    <input
                        type="range"
                        id="participation-slider"
                        min="1"
                        max="100"
                        value={p.active.participation_rate.to_string()}
                        oninput={on_slider}
                        class="w-full"
                    />
                </div>
            }
        </>
    }
}
