use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub country_name: AttrValue,
    pub participation_rate: u8,
    pub personal_target: f64,
    pub is_impossible: bool,
}

/// The outcome panel: either the required personal target for participants
/// or the impossible-goal state. The latter is a business state, not an
/// error.
#[function_component(CollectiveResult)]
pub fn collective_result(p: &Props) -> Html {
    html! {
        <div class="bg-white p-6 md:p-8 rounded-2xl shadow-lg mt-8 border border-slate-200 fade-in">
            <h2 class="text-xl font-bold text-center text-slate-900 mb-2">{ "4. The Collective Action Result" }</h2>
            <p class="text-center text-slate-600 mb-6">
                { format!(
                    "If only {}% of people in {} participate after structural changes, their new individual target must be:",
                    p.participation_rate, p.country_name,
                ) }
            </p>
            if p.is_impossible {
                <div class="text-center bg-rose-100 p-4 rounded-lg border border-rose-200">
                    <p class="text-3xl font-bold text-rose-600 my-2">{ "Impossible Goal" }</p>
                    <p class="text-slate-700 mt-1">{ "The goal can't be met, highlighting the need for higher participation or more systemic change." }</p>
                </div>
            } else {
                <div class="text-center bg-slate-100 p-4 rounded-lg">
                    <p class="text-4xl font-bold text-teal-600 my-2">{ format!("{:.1} tonnes", p.personal_target) }</p>
                    <p class="text-slate-600">{ "to keep the global average on track." }</p>
                </div>
            }
        </div>
    }
}
