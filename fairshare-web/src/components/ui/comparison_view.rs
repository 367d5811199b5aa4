use yew::prelude::*;

use crate::components::ui::lifestyle_guide::LifestyleGuide;
use crate::markdown;
use crate::model::{Exploration, StructuralChanges, country_by_code, derive_targets};

/// Display labels for the enabled structural changes, in canonical order.
fn active_change_labels(changes: StructuralChanges) -> Vec<&'static str> {
    let mut labels = Vec::new();
    if changes.grid {
        labels.push("Grid");
    }
    if changes.transport {
        labels.push("Transport");
    }
    if changes.food {
        labels.push("Food");
    }
    labels
}

#[derive(Properties, PartialEq, Clone)]
struct ColumnProps {
    pub exploration: Exploration,
}

#[function_component(ExplorationColumn)]
fn exploration_column(p: &ColumnProps) -> Html {
    let derived = derive_targets(&p.exploration);
    let country = p
        .exploration
        .country_code
        .as_deref()
        .and_then(country_by_code);
    let labels = active_change_labels(p.exploration.structural_changes);

    html! {
        <div class="bg-white p-6 rounded-2xl shadow-lg border border-slate-200 flex flex-col gap-6">
            <h3 class="text-2xl font-bold text-center text-slate-900">{ p.exploration.name.clone() }</h3>

            <div class="border border-slate-200 rounded-lg p-4">
                <h4 class="text-lg font-bold text-slate-800 mb-3 text-center">{ "Scenario Parameters" }</h4>
                <ul class="space-y-2 text-sm text-slate-700">
                    <li class="flex justify-between">
                        <span class="font-medium">{ "Country:" }</span>
                        <span>{ country.map_or("N/A", |c| c.name) }</span>
                    </li>
                    <li class="flex justify-between">
                        <span class="font-medium">{ "Initial Emissions:" }</span>
                        <span>{ country.map_or_else(|| "N/A".to_string(), |c| format!("{:.1} tonnes", c.emissions)) }</span>
                    </li>
                    <li class="flex justify-between">
                        <span class="font-medium">{ "Participation Rate:" }</span>
                        <span>{ format!("{}%", p.exploration.participation_rate) }</span>
                    </li>
                    <li class="flex flex-col">
                        <span class="font-medium mb-1">{ "Structural Changes:" }</span>
                        if labels.is_empty() {
                            <span class="text-slate-500 italic">{ "None applied" }</span>
                        } else {
                            <div class="flex flex-wrap gap-1.5">
                                { for labels.iter().map(|label| html! {
                                    <span key={*label} class="bg-slate-200 text-slate-700 px-2 py-0.5 rounded-md text-xs font-semibold">{ *label }</span>
                                }) }
                            </div>
                        }
                    </li>
                </ul>
            </div>

            <div class="text-center bg-slate-100 p-4 rounded-lg">
                if derived.is_impossible {
                    <p class="text-3xl font-bold text-rose-600 my-2">{ "Impossible Goal" }</p>
                    <p class="text-slate-700 mt-1">{ "This scenario is not viable." }</p>
                } else {
                    <p class="text-slate-700">{ "Personal Target:" }</p>
                    <p class="text-4xl font-bold text-teal-600 my-2">{ format!("{:.1} tonnes", derived.personal_target) }</p>
                }
            </div>

            if !derived.is_impossible && country.is_some() {
                <LifestyleGuide target={derived.personal_target} />
            }

            <div>
                <h4 class="text-xl font-bold text-center text-slate-900 mb-4">{ "Generated Stories" }</h4>
                <div class="space-y-4 max-h-96 overflow-y-auto pr-2">
                    if p.exploration.stories.is_empty() {
                        <p class="text-center text-slate-500 py-4">{ "No stories generated." }</p>
                    }
                    { for p.exploration.stories.iter().map(|story| {
                        let rendered = markdown::markdown_to_html(&story.text);
                        html! {
                            <div key={story.id.clone()} class="p-4 bg-slate-50 rounded-lg border border-slate-200">
                                <span class="text-sm font-semibold px-2 py-1 bg-teal-100 text-teal-800 rounded mb-2 inline-block">{ story.genre.clone() }</span>
                                <div class="prose prose-sm max-w-none">
                                    { Html::from_html_unchecked(AttrValue::from(rendered)) }
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub explorations: Vec<Exploration>,
    pub on_exit: Callback<()>,
}

/// Side-by-side view of the queued explorations.
#[function_component(ComparisonView)]
pub fn comparison_view(p: &Props) -> Html {
    let on_exit = {
        let cb = p.on_exit.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="container mx-auto px-4 py-8 md:py-12 max-w-7xl">
            <header class="text-center mb-8 md:mb-12">
                <h1 class="text-4xl md:text-5xl font-bold text-slate-900 tracking-tight">{ "Comparison View" }</h1>
                <p class="mt-3 text-lg text-slate-600">{ format!("Comparing {} climate scenarios.", p.explorations.len()) }</p>
                <button onclick={on_exit} class="mt-6 bg-teal-600 text-white font-bold py-2 px-5 rounded-lg hover:bg-teal-700 transition-colors">
                    { "← Back to Editor" }
                </button>
            </header>
            <main class={format!("grid grid-cols-1 lg:grid-cols-{} gap-8 items-start", p.explorations.len())}>
                { for p.explorations.iter().map(|exploration| html! {
                    <ExplorationColumn key={exploration.id.clone()} exploration={exploration.clone()} />
                }) }
            </main>
        </div>
    }
}
