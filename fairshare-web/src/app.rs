use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::ui::collective_result::CollectiveResult;
use crate::components::ui::comparison_view::ComparisonView;
use crate::components::ui::controls::{Controls, StructuralToggle};
use crate::components::ui::exploration_manager::ExplorationManager;
use crate::components::ui::future_imaginator::FutureImaginator;
use crate::components::ui::lifestyle_guide::LifestyleGuide;
use crate::components::ui::target_display::TargetDisplay;
use crate::dom;
use crate::flight::SingleFlight;
use crate::model::{
    Exploration, GeneratedStory, country_by_code, derive_targets, export_file_name, parse_import,
};

/// Hard cap on the comparison queue.
const MAX_COMPARE: usize = 3;

const IMPORT_FAILED_MESSAGE: &str = "Failed to import explorations. Please check the file format.";

#[allow(clippy::future_not_send)] // Wasm futures rely on browser file APIs, which are not `Send`.
async fn read_and_parse(file: web_sys::File) -> anyhow::Result<Vec<Exploration>> {
    let text = dom::read_file_text(&file)
        .await
        .map_err(|err| anyhow::anyhow!(dom::js_error_message(&err)))?;
    Ok(parse_import(&text)?)
}

/// Main application component.
///
/// Owns the exploration session and the comparison queue; derived values
/// are recomputed on every render rather than cached.
#[function_component(App)]
pub fn app() -> Html {
    let session = use_state(crate::model::load_web_session);
    let comparison_ids = use_state(Vec::<String>::new);
    let is_comparing = use_state(|| false);
    let import_error = use_state(|| None::<String>);
    let import_flight = use_memo((), |_| SingleFlight::new());

    let active = session.active().cloned().unwrap_or_else(Exploration::first);
    let derived = derive_targets(&active);
    let selected_country = active
        .country_code
        .as_deref()
        .and_then(country_by_code)
        .copied();

    let on_select = {
        let session = session.clone();
        Callback::from(move |id: String| {
            let mut s = (*session).clone();
            s.set_active(id);
            session.set(s);
        })
    };

    let on_create = {
        let session = session.clone();
        Callback::from(move |()| {
            let mut s = (*session).clone();
            s.create_new();
            session.set(s);
        })
    };

    let on_delete = {
        let session = session.clone();
        let comparison_ids = comparison_ids.clone();
        Callback::from(move |id: String| {
            let mut s = (*session).clone();
            s.delete(&id);
            session.set(s);
            // A deleted exploration has no business lingering in the queue.
            let mut ids = (*comparison_ids).clone();
            ids.retain(|queued| queued != &id);
            comparison_ids.set(ids);
        })
    };

    let on_rename = {
        let session = session.clone();
        Callback::from(move |(id, name): (String, String)| {
            let mut s = (*session).clone();
            s.rename(&id, &name);
            session.set(s);
        })
    };

    // Selecting a country for the first time upgrades a placeholder name to
    // something descriptive.
    let on_country_change = {
        let session = session.clone();
        Callback::from(move |code: Option<String>| {
            let mut s = (*session).clone();
            if let Some(code) = code.as_deref() {
                let upgrade = s.active().and_then(|active| {
                    if active.country_code.is_none() && active.has_default_name() {
                        country_by_code(code).map(|country| {
                            (
                                active.id.clone(),
                                format!("{} @ {}%", country.name, active.participation_rate),
                            )
                        })
                    } else {
                        None
                    }
                });
                if let Some((id, name)) = upgrade {
                    s.rename(&id, &name);
                }
            }
            s.update_active(move |exploration| exploration.country_code = code);
            session.set(s);
        })
    };

    let on_toggle = {
        let session = session.clone();
        Callback::from(move |(toggle, enabled): (StructuralToggle, bool)| {
            let mut s = (*session).clone();
            s.update_active(|exploration| {
                let changes = &mut exploration.structural_changes;
                match toggle {
                    StructuralToggle::Grid => changes.grid = enabled,
                    StructuralToggle::Transport => changes.transport = enabled,
                    StructuralToggle::Food => changes.food = enabled,
                }
            });
            session.set(s);
        })
    };

    let on_participation = {
        let session = session.clone();
        Callback::from(move |rate: u8| {
            let mut s = (*session).clone();
            s.update_active(|exploration| exploration.participation_rate = rate);
            session.set(s);
        })
    };

    let on_add_story = {
        let session = session.clone();
        let active_id = active.id.clone();
        Callback::from(move |story: GeneratedStory| {
            let mut s = (*session).clone();
            s.add_story(&active_id, story);
            session.set(s);
        })
    };

    let on_delete_story = {
        let session = session.clone();
        let active_id = active.id.clone();
        Callback::from(move |story_id: String| {
            let mut s = (*session).clone();
            s.delete_story(&active_id, &story_id);
            session.set(s);
        })
    };

    let on_export = {
        let session = session.clone();
        Callback::from(move |()| match session.export_json() {
            Ok(json) => {
                let file_name = export_file_name(chrono::Utc::now().date_naive());
                if let Err(err) = dom::download_json(&file_name, &json) {
                    dom::console_error(&format!(
                        "export failed: {}",
                        dom::js_error_message(&err)
                    ));
                }
            }
            Err(err) => dom::console_error(&format!("export failed: {err}")),
        })
    };

    let on_import = {
        let session = session.clone();
        let import_error = import_error.clone();
        let import_flight = import_flight.clone();
        Callback::from(move |file: web_sys::File| {
            let Some(guard) = import_flight.begin() else {
                import_error.set(Some("An import is already in progress.".to_string()));
                return;
            };
            let session = session.clone();
            let import_error = import_error.clone();
            spawn_local(async move {
                let _guard = guard;
                match read_and_parse(file).await {
                    Ok(imported) => {
                        let mut s = (*session).clone();
                        s.replace_all(imported);
                        session.set(s);
                        import_error.set(None);
                    }
                    Err(err) => {
                        log::error!("import failed: {err:#}");
                        import_error.set(Some(IMPORT_FAILED_MESSAGE.to_string()));
                    }
                }
            });
        })
    };

    let on_add_compare = {
        let comparison_ids = comparison_ids.clone();
        Callback::from(move |id: String| {
            let mut ids = (*comparison_ids).clone();
            if ids.contains(&id) || ids.len() >= MAX_COMPARE {
                return;
            }
            ids.push(id);
            comparison_ids.set(ids);
        })
    };

    let on_remove_compare = {
        let comparison_ids = comparison_ids.clone();
        Callback::from(move |id: String| {
            let mut ids = (*comparison_ids).clone();
            ids.retain(|queued| queued != &id);
            comparison_ids.set(ids);
        })
    };

    let on_clear_compare = {
        let comparison_ids = comparison_ids.clone();
        Callback::from(move |()| comparison_ids.set(Vec::new()))
    };

    let on_start_compare = {
        let comparison_ids = comparison_ids.clone();
        let is_comparing = is_comparing.clone();
        Callback::from(move |()| {
            if comparison_ids.len() >= 2 {
                is_comparing.set(true);
            }
        })
    };

    if *is_comparing {
        let explorations_to_compare: Vec<Exploration> = comparison_ids
            .iter()
            .filter_map(|id| session.explorations().iter().find(|e| &e.id == id))
            .cloned()
            .collect();
        let on_exit = {
            let is_comparing = is_comparing.clone();
            Callback::from(move |()| is_comparing.set(false))
        };
        return html! {
            <ComparisonView explorations={explorations_to_compare} {on_exit} />
        };
    }

    html! {
        <div class="container mx-auto px-4 py-8 md:py-12 max-w-4xl">
            <header class="text-center mb-8 md:mb-12">
                <h1 class="text-4xl md:text-5xl font-bold text-slate-900 tracking-tight">{ "Collective Climate Target" }</h1>
                <p class="mt-3 text-lg text-slate-600">{ "Explore the path to a 1.5°C-compatible lifestyle." }</p>
            </header>

            <main>
                <ExplorationManager
                    explorations={session.explorations().to_vec()}
                    active_id={active.id.clone()}
                    comparison_ids={(*comparison_ids).clone()}
                    {on_select}
                    {on_create}
                    {on_delete}
                    {on_rename}
                    {on_import}
                    {on_export}
                    {on_add_compare}
                    {on_remove_compare}
                    {on_clear_compare}
                    {on_start_compare}
                />

                if let Some(message) = (*import_error).clone() {
                    <div class="mb-8 p-4 bg-rose-100 border border-rose-200 rounded-lg text-center text-rose-700">
                        { message }
                    </div>
                }

                <TargetDisplay />

                <Controls
                    active={active.clone()}
                    selected_country={selected_country}
                    adjusted_emissions={derived.adjusted_emissions}
                    {on_country_change}
                    {on_toggle}
                    {on_participation}
                />

                if let Some(country) = selected_country {
                    <CollectiveResult
                        country_name={country.name}
                        participation_rate={active.participation_rate}
                        personal_target={derived.personal_target}
                        is_impossible={derived.is_impossible}
                    />

                    if !derived.is_impossible {
                        <div class="mt-8 fade-in">
                            <LifestyleGuide target={derived.personal_target} />
                            <FutureImaginator
                                key={active.id.clone()}
                                country_name={country.name}
                                personal_target={derived.personal_target}
                                stories={active.stories.clone()}
                                on_add_story={on_add_story}
                                on_delete_story={on_delete_story}
                            />
                        </div>
                    }
                }

                <footer class="text-center mt-12 text-sm text-slate-500">
                    <p>{ "This is a simplified tool for educational purposes, inspired by systems thinking in climate communication." }</p>
                    <p>{ "Data is illustrative and based on various public sources for consumption-based emissions." }</p>
                </footer>
            </main>
        </div>
    }
}
