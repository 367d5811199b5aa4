use yew::prelude::*;

use crate::model::OVERALL_TARGET;

/// The fixed global lifestyle target everything in the tool is measured
/// against.
#[function_component(TargetDisplay)]
pub fn target_display() -> Html {
    html! {
        <div class="bg-white p-6 md:p-8 rounded-2xl shadow-lg border border-slate-200 mb-8">
            <h2 class="text-xl font-bold text-center text-slate-900 mb-4">{ "The 1.5°C Lifestyle Target" }</h2>
            <div class="flex justify-center mb-6">
                <div class="target-circle bg-teal-500 text-white shadow-md flex flex-col justify-center items-center w-40 h-40 rounded-full transition-transform duration-300 hover:scale-105">
                    <span class="text-5xl font-bold">{ OVERALL_TARGET }</span>
                    <span class="text-lg">{ "tonnes CO₂e/year" }</span>
                </div>
            </div>
            <p class="text-slate-700 leading-relaxed text-center max-w-xl mx-auto">
                { "This represents the global average \"lifestyle\" carbon footprint of " }
                <strong>{ format!("{OVERALL_TARGET} tonnes CO₂e per person, per year by 2030") }</strong>
                { " required to keep global warming below 1.5°C." }
            </p>
        </div>
    }
}
