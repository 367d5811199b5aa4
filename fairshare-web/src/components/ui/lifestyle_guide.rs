use yew::prelude::*;

use crate::model::tier_for_target;

fn category_heading(key: &str) -> &'static str {
    match key {
        "food" => "Food",
        "mobility" => "Mobility",
        "home" => "Home & Energy",
        "stuff" => "Consumption (\"Stuff\")",
        _ => "",
    }
}

fn pill_classes(key: &str) -> &'static str {
    match key {
        "food" => "bg-green-100 text-green-800 border-green-200",
        "mobility" => "bg-blue-100 text-blue-800 border-blue-200",
        "home" => "bg-yellow-100 text-yellow-800 border-yellow-200",
        _ => "bg-purple-100 text-purple-800 border-purple-200",
    }
}

fn border_classes(key: &str) -> &'static str {
    match key {
        "food" => "border-green-300",
        "mobility" => "border-blue-300",
        "home" => "border-yellow-300",
        _ => "border-purple-300",
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub target: f64,
}

/// Qualitative description of what living at the given target looks like.
#[function_component(LifestyleGuide)]
pub fn lifestyle_guide(p: &Props) -> Html {
    let tier = tier_for_target(p.target);

    html! {
        <div class="bg-white p-6 md:p-8 rounded-2xl shadow-lg mt-8 border border-slate-200">
            <h2 class="text-2xl font-bold text-center text-slate-900 mb-2">
                { "What Does a " }<span class="text-teal-600">{ format!("{:.1}", p.target) }</span>{ "-Tonne Lifestyle Look Like?" }
            </h2>
            <p class="text-center text-slate-600 mb-8">
                { "This is a " }<strong class="text-slate-800">{ tier.title }</strong>{ " level of ambition, requiring choices like:" }
            </p>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                { for tier.categories().iter().map(|(key, phrases)| html! {
                    <div key={*key} class={classes!(
                        "bg-white", "p-5", "rounded-xl", "shadow-md", "border-2",
                        border_classes(key), "flex", "flex-col",
                    )}>
                        <h3 class="text-lg font-bold text-slate-800 mb-4">{ category_heading(key) }</h3>
                        <div class="flex flex-wrap gap-2 flex-grow items-start">
                            { for phrases.iter().map(|phrase| html! {
                                <span key={*phrase} class={classes!(
                                    "text-sm", "font-medium", "px-3", "py-1.5",
                                    "rounded-full", "border", pill_classes(key),
                                )}>
                                    { *phrase }
                                </span>
                            }) }
                        </div>
                    </div>
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_key_has_a_heading_and_styles() {
        for key in ["food", "mobility", "home", "stuff"] {
            assert!(!category_heading(key).is_empty());
            assert!(!pill_classes(key).is_empty());
            assert!(!border_classes(key).is_empty());
        }
    }

    #[test]
    fn stuff_heading_keeps_the_quoted_label() {
        assert_eq!(category_heading("stuff"), "Consumption (\"Stuff\")");
    }
}
