use futures::executor::block_on;
use yew::{Callback, LocalServerRenderer};

use fairshare_web::components::ui::collective_result::CollectiveResult;
use fairshare_web::components::ui::comparison_view::ComparisonView;
use fairshare_web::components::ui::controls::Controls;
use fairshare_web::components::ui::exploration_manager::ExplorationManager;
use fairshare_web::components::ui::future_imaginator::FutureImaginator;
use fairshare_web::components::ui::lifestyle_guide::LifestyleGuide;
use fairshare_web::components::ui::target_display::TargetDisplay;
use fairshare_web::model::{Exploration, GeneratedStory, country_by_code};

fn exploration_named(name: &str, country: Option<&str>) -> Exploration {
    let mut exploration = Exploration::with_name(name);
    exploration.country_code = country.map(str::to_string);
    exploration
}

#[test]
fn target_display_shows_the_global_target() {
    let html = block_on(LocalServerRenderer::<TargetDisplay>::new().render());
    assert!(html.contains("2.5"));
    assert!(html.contains("tonnes CO₂e/year"));
}

#[test]
fn collective_result_renders_the_personal_target() {
    let props = fairshare_web::components::ui::collective_result::Props {
        country_name: "Sweden".into(),
        participation_rate: 80,
        personal_target: 2.04,
        is_impossible: false,
    };
    let html = block_on(LocalServerRenderer::<CollectiveResult>::with_props(props).render());
    assert!(html.contains("80% of people in Sweden"));
    assert!(html.contains("2.0 tonnes"));
    assert!(!html.contains("Impossible Goal"));
}

#[test]
fn collective_result_renders_the_impossible_state() {
    let props = fairshare_web::components::ui::collective_result::Props {
        country_name: "United States".into(),
        participation_rate: 10,
        personal_target: -3.7,
        is_impossible: true,
    };
    let html = block_on(LocalServerRenderer::<CollectiveResult>::with_props(props).render());
    assert!(html.contains("Impossible Goal"));
    assert!(!html.contains("to keep the global average on track"));
}

#[test]
fn lifestyle_guide_names_the_matching_tier() {
    let props = fairshare_web::components::ui::lifestyle_guide::Props { target: 2.0 };
    let html = block_on(LocalServerRenderer::<LifestyleGuide>::with_props(props).render());
    assert!(html.contains("Ambitious"));
    assert!(html.contains("Home &amp; Energy") || html.contains("Home & Energy"));
    assert!(html.contains("Mostly flight-free"));
}

#[test]
fn controls_hide_later_steps_until_a_country_is_chosen() {
    let props = fairshare_web::components::ui::controls::Props {
        active: exploration_named("blank", None),
        selected_country: None,
        adjusted_emissions: 0.0,
        on_country_change: Callback::noop(),
        on_toggle: Callback::noop(),
        on_participation: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Controls>::with_props(props).render());
    assert!(html.contains("1. Select a Starting Point"));
    assert!(html.contains("Choose a country"));
    assert!(!html.contains("2. Apply Structural Changes"));
    assert!(!html.contains("participation-slider"));
}

#[test]
fn controls_show_structural_changes_and_slider_with_a_country() {
    let props = fairshare_web::components::ui::controls::Props {
        active: exploration_named("usa", Some("USA")),
        selected_country: country_by_code("USA").copied(),
        adjusted_emissions: 8.72,
        on_country_change: Callback::noop(),
        on_toggle: Callback::noop(),
        on_participation: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Controls>::with_props(props).render());
    assert!(html.contains("United States"));
    assert!(html.contains("2. Apply Structural Changes"));
    assert!(html.contains("Decarbonize the Grid"));
    assert!(html.contains("8.7 tonnes"));
    assert!(html.contains("participation-slider"));
}

#[test]
fn exploration_manager_disables_delete_for_the_sole_member() {
    let sole = exploration_named("Only one", None);
    let props = fairshare_web::components::ui::exploration_manager::Props {
        active_id: sole.id.clone().into(),
        explorations: vec![sole],
        comparison_ids: Vec::new(),
        on_select: Callback::noop(),
        on_create: Callback::noop(),
        on_delete: Callback::noop(),
        on_rename: Callback::noop(),
        on_import: Callback::noop(),
        on_export: Callback::noop(),
        on_add_compare: Callback::noop(),
        on_remove_compare: Callback::noop(),
        on_clear_compare: Callback::noop(),
        on_start_compare: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ExplorationManager>::with_props(props).render());
    assert!(html.contains("My Explorations Dashboard"));
    assert!(html.contains("Only one"));
    assert!(html.contains("disabled"));
    assert!(html.contains("N/A"));
}

#[test]
fn exploration_manager_shows_the_comparison_queue() {
    let first = exploration_named("First", Some("SWE"));
    let second = exploration_named("Second", Some("USA"));
    let props = fairshare_web::components::ui::exploration_manager::Props {
        active_id: first.id.clone().into(),
        comparison_ids: vec![first.id.clone(), second.id.clone()],
        explorations: vec![first, second],
        on_select: Callback::noop(),
        on_create: Callback::noop(),
        on_delete: Callback::noop(),
        on_rename: Callback::noop(),
        on_import: Callback::noop(),
        on_export: Callback::noop(),
        on_add_compare: Callback::noop(),
        on_remove_compare: Callback::noop(),
        on_clear_compare: Callback::noop(),
        on_start_compare: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ExplorationManager>::with_props(props).render());
    assert!(html.contains("Comparison Queue (2/3)"));
    assert!(html.contains("✓ Added"));
}

#[test]
fn future_imaginator_renders_stories_as_markdown() {
    let mut stories = Vec::new();
    stories.push(GeneratedStory::new(
        "the prompt",
        "A *quiet* morning on the fjord.",
        "Hopeful Solarpunk",
    ));
    let props = fairshare_web::components::ui::future_imaginator::Props {
        country_name: "Sweden".into(),
        personal_target: 2.0,
        stories,
        on_add_story: Callback::noop(),
        on_delete_story: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<FutureImaginator>::with_props(props).render());
    assert!(html.contains("Imagine the Future"));
    assert!(html.contains("<em>quiet</em>"));
    assert!(html.contains("Hopeful Solarpunk"));
    assert!(html.contains("Children's Tale") || html.contains("Children&#x27;s Tale"));
}

#[test]
fn future_imaginator_shows_the_empty_state() {
    let props = fairshare_web::components::ui::future_imaginator::Props {
        country_name: "France".into(),
        personal_target: 2.5,
        stories: Vec::new(),
        on_add_story: Callback::noop(),
        on_delete_story: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<FutureImaginator>::with_props(props).render());
    assert!(html.contains("Your generated stories will appear here."));
}

#[test]
fn comparison_view_renders_one_column_per_exploration() {
    let mut sweden = exploration_named("Sweden @ 80%", Some("SWE"));
    sweden.participation_rate = 80;
    let mut blank = exploration_named("No baseline", None);
    blank.participation_rate = 25;

    let props = fairshare_web::components::ui::comparison_view::Props {
        explorations: vec![sweden, blank],
        on_exit: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ComparisonView>::with_props(props).render());
    assert!(html.contains("Comparing 2 climate scenarios."));
    assert!(html.contains("Sweden @ 80%"));
    assert!(html.contains("No baseline"));
    assert!(html.contains("N/A"));
    assert!(html.contains("No stories generated."));
}
