use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::dom;
use crate::flight::SingleFlight;
use crate::markdown;
use crate::model::{GeneratedStory, STORY_GENRES};
use crate::story;

const GENERATION_FAILED_MESSAGE: &str =
    "Sorry, there was an error imagining this future. Please try again.";

/// How long the "Copied!" confirmation stays up, in milliseconds.
const COPY_FEEDBACK_MS: u32 = 2_000;

fn copy_label(is_copied: bool) -> &'static str {
    if is_copied { "Copied!" } else { "Copy" }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub country_name: AttrValue,
    pub personal_target: f64,
    pub stories: Vec<GeneratedStory>,
    pub on_add_story: Callback<GeneratedStory>,
    pub on_delete_story: Callback<String>,
}

/// Story generation panel: pick a genre, ask the generator for a vision of
/// society at the current personal target, and keep the results.
#[function_component(FutureImaginator)]
pub fn future_imaginator(p: &Props) -> Html {
    let genre = use_state(|| STORY_GENRES[0].to_string());
    let is_loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let copied_id = use_state(|| None::<String>);
    // Completed generations land here and are handed up in an effect, so
    // the story is appended against the session as it is then, not as it
    // was when the request started.
    let pending = use_state(|| None::<GeneratedStory>);
    let flight = use_memo((), |_| SingleFlight::new());

    {
        let pending_handle = pending.clone();
        let on_add_story = p.on_add_story.clone();
        use_effect_with((*pending).clone(), move |pending_story| {
            if let Some(story) = pending_story.clone() {
                on_add_story.emit(story);
                pending_handle.set(None);
            }
        });
    }

    let on_genre_change = {
        let genre = genre.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                genre.set(select.value());
            }
        })
    };

    let on_generate = {
        let genre = genre.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();
        let pending = pending.clone();
        let flight = flight.clone();
        let country_name = p.country_name.clone();
        let personal_target = p.personal_target;
        Callback::from(move |_: MouseEvent| {
            let Some(guard) = flight.begin() else {
                return;
            };
            let prompt = story::build_story_prompt(&genre, &country_name, personal_target);
            let genre_label = (*genre).clone();
            is_loading.set(true);
            error.set(None);

            let is_loading = is_loading.clone();
            let error = error.clone();
            let pending = pending.clone();
            spawn_local(async move {
                let _guard = guard;
                match story::generate_story(&prompt).await {
                    Ok(text) => pending.set(Some(GeneratedStory::new(prompt, text, genre_label))),
                    Err(_) => error.set(Some(GENERATION_FAILED_MESSAGE.to_string())),
                }
                is_loading.set(false);
            });
        })
    };

    let on_copy = {
        let copied_id = copied_id.clone();
        Callback::from(move |story: GeneratedStory| {
            dom::copy_text(&markdown::markdown_to_plain_text(&story.text));
            copied_id.set(Some(story.id.clone()));
            let copied_id = copied_id.clone();
            Timeout::new(COPY_FEEDBACK_MS, move || copied_id.set(None)).forget();
        })
    };

    html! {
        <div class="bg-white p-6 md:p-8 rounded-2xl shadow-lg mt-8 border border-slate-200">
            <h2 class="text-xl font-bold text-center text-slate-900 mb-2">{ "Imagine the Future" }</h2>
            <p class="text-center text-slate-600 mb-6">{ "Translate this target number into a vision of society. Generate one or more stories to explore the possibilities." }</p>

            <div class="bg-slate-50 p-4 rounded-lg border border-slate-200">
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <select
                        onchange={on_genre_change}
                        class="bg-white border border-slate-300 text-slate-900 text-sm rounded-lg focus:ring-teal-500 focus:border-teal-500 block w-full sm:w-auto p-2.5"
                    >
                        { for STORY_GENRES.iter().map(|label| html! {
                            <option key={*label} value={*label} selected={*label == genre.as_str()}>{ *label }</option>
                        }) }
                    </select>
                    <button
                        onclick={on_generate}
                        disabled={*is_loading}
                        class="bg-teal-600 text-white font-bold py-2.5 px-5 rounded-lg hover:bg-teal-700 transition-colors disabled:bg-slate-400 disabled:cursor-not-allowed w-full sm:w-auto"
                    >
                        { if *is_loading { "Imagining..." } else { "+ Generate New Story" } }
                    </button>
                </div>
                if let Some(message) = (*error).clone() {
                    <div class="text-center text-red-500 mt-3">{ message }</div>
                }
            </div>

            <div class="mt-6 space-y-4">
                if p.stories.is_empty() {
                    <div class="text-center text-slate-500 py-8">
                        <p>{ "Your generated stories will appear here." }</p>
                    </div>
                }
                { for p.stories.iter().map(|story| {
                    let copy = {
                        let on_copy = on_copy.clone();
                        let story = story.clone();
                        Callback::from(move |_: MouseEvent| on_copy.emit(story.clone()))
                    };
                    let delete = {
                        let on_delete_story = p.on_delete_story.clone();
                        let id = story.id.clone();
                        Callback::from(move |_: MouseEvent| on_delete_story.emit(id.clone()))
                    };
                    let rendered = markdown::markdown_to_html(&story.text);
                    html! {
                        <div key={story.id.clone()} class="p-4 bg-slate-50 rounded-lg border border-slate-200">
                            <div class="flex justify-between items-center mb-2">
                                <span class="text-sm font-semibold px-2 py-1 bg-teal-100 text-teal-800 rounded">{ story.genre.clone() }</span>
                                <div>
                                    <button onclick={copy} class="text-sm font-medium text-slate-500 hover:text-teal-600 mr-2">
                                        { copy_label(copied_id.as_deref() == Some(story.id.as_str())) }
                                    </button>
                                    <button onclick={delete} class="text-sm font-medium text-rose-500 hover:text-rose-700">{ "Delete" }</button>
                                </div>
                            </div>
                            <div class="prose prose-lg max-w-none">
                                { Html::from_html_unchecked(AttrValue::from(rendered)) }
                            </div>
                        </div>
                    }
                }) }
                if *is_loading {
                    <div class="text-center text-slate-500 p-4">{ "✨ Thinking about a brighter future..." }</div>
                }
            </div>
        </div>
    }
}
