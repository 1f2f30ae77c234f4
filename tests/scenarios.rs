//! End-to-end scenarios over the mock page.
//!
//! Each test builds the page the way the documentation generator would
//! (three models across two groups, one doc block per model), activates the
//! picker against a starting URL, and checks the projected attribute state.

use docpick::{GroupTag, Interaction, Key, Location, ModelTag, Page, Picker, Target, Trigger};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn fixture_page() -> Page {
    let mut page = Page::new();
    page.add_group("groupA");
    page.add_group("groupB");
    page.add_model("m1", "groupA");
    page.add_model("m2", "groupA");
    page.add_model("m3", "groupB");
    page.add_doc("m1");
    page.add_doc("m2");
    page.add_doc("m3");
    page
}

fn activate(page: &mut Page, query: &str) -> (Picker, Location) {
    let mut location = Location::new("/docs/benchmarks.html", query);
    let Some(picker) = Picker::install(page, &mut location) else {
        unreachable!("fixture markup is complete");
    };
    (picker, location)
}

fn hidden_models(page: &Page) -> Vec<&str> {
    page.models
        .iter()
        .filter(|control| control.hidden)
        .map(|control| control.model.as_str())
        .collect()
}

fn visible_docs(page: &Page) -> Vec<&str> {
    page.docs
        .iter()
        .filter(|block| !block.hidden)
        .flat_map(|block| block.classes.iter())
        .filter(|class| class.as_str() != "model-doc")
        .map(String::as_str)
        .collect()
}

#[test]
fn scenario_a_no_url_parameter_selects_first_model() {
    let mut page = fixture_page();
    let (picker, location) = activate(&mut page, "");

    assert_eq!(picker.selection().model, ModelTag::new("m1"));
    assert_eq!(picker.selection().group, GroupTag::new("groupA"));
    assert_eq!(location.search, "model=m1");

    // m2 shares the group and stays visible; m3 is hidden with its group.
    assert_eq!(hidden_models(&page), vec!["m3"]);
    assert_eq!(visible_docs(&page), vec!["m1"]);

    let groups: Vec<_> = page
        .groups
        .iter()
        .map(|control| (control.group.as_str(), control.param_state.as_str()))
        .collect();
    assert_eq!(groups, vec![("groupA", "selected"), ("groupB", "")]);
}

#[test]
fn scenario_b_group_click_selects_first_member() {
    let mut page = fixture_page();
    let (mut picker, mut location) = activate(&mut page, "?model=m3");

    assert_eq!(picker.selection().model, ModelTag::new("m3"));
    assert_eq!(picker.selection().group, GroupTag::new("groupB"));

    let target = page.find_group("groupA").map(Target::from_group_control);
    picker.handle(&Interaction::click(target), &mut page, &mut location);

    assert_eq!(picker.selection().model, ModelTag::new("m1"));
    assert_eq!(picker.selection().group, GroupTag::new("groupA"));
    assert_eq!(location.search, "model=m1");
    assert_eq!(hidden_models(&page), vec!["m3"]);
}

#[rstest]
#[case("?model=unknown-tag")]
#[case("?model=")]
#[case("?other=1")]
fn scenario_c_unknown_model_falls_back_and_rewrites_url(#[case] query: &str) {
    let mut page = fixture_page();
    let (picker, location) = activate(&mut page, query);

    assert_eq!(picker.selection().model, ModelTag::new("m1"));
    assert_eq!(location.model_param(), Some("m1".to_owned()));
}

#[test]
fn scenario_c_preserves_unrelated_parameters() {
    let mut page = fixture_page();
    let (_picker, location) = activate(&mut page, "?tab=latency&model=unknown-tag");

    assert_eq!(location.search, "tab=latency&model=m1");
}

#[test]
fn scenario_d_matching_doc_block_is_shown() {
    let mut page = fixture_page();
    let (mut picker, mut location) = activate(&mut page, "");

    let target = page.find_model("m2").map(Target::from_model_control);
    picker.handle(&Interaction::click(target), &mut page, &mut location);

    assert_eq!(visible_docs(&page), vec!["m2"]);
    let states: Vec<_> = page
        .models
        .iter()
        .map(|control| (control.model.as_str(), control.param_state.as_str()))
        .collect();
    assert_eq!(states, vec![("m1", ""), ("m2", "selected"), ("m3", "")]);
    assert_eq!(
        page.find_model("m2").map(|c| c.aria_selected.as_str()),
        Some("true")
    );
}

#[test]
fn scenario_e_empty_markup_leaves_page_untouched() {
    let mut page = Page::new();
    page.add_doc("m1");
    let before = page.clone();
    let mut location = Location::new("/docs/benchmarks.html", "?model=m1");
    let before_location = location.clone();

    assert!(Picker::install(&mut page, &mut location).is_none());
    assert_eq!(page, before);
    assert_eq!(location, before_location);
}

#[test]
fn url_round_trips_through_activation() {
    let mut page = fixture_page();
    let (picker, location) = activate(&mut page, "?model=m2");

    assert_eq!(
        location.model_param().as_deref(),
        Some(picker.selection().model.as_str())
    );
}

#[test]
fn projection_is_idempotent() {
    let mut page = fixture_page();
    let (mut picker, mut location) = activate(&mut page, "?model=m2");
    let snapshot = page.clone();
    let href = location.href();

    // Re-activating the same control replays the same projection.
    let target = page.find_model("m2").map(Target::from_model_control);
    picker.handle(&Interaction::click(target), &mut page, &mut location);

    assert_eq!(page, snapshot);
    assert_eq!(location.href(), href);
}

#[test]
fn doc_blocks_with_no_match_all_stay_hidden() {
    let mut page = fixture_page();
    page.docs.clear();
    page.add_doc("some-other-model");
    let (_picker, _location) = activate(&mut page, "");

    assert!(page.docs.iter().all(|block| block.hidden));
}

#[test]
fn normalized_doc_class_matches_generator_output() {
    let mut page = Page::new();
    page.add_group("llama");
    page.add_model("pyt_vllm_llama-3.1-8b", "llama");
    // The generator mangles the tag's punctuation into dashes.
    page.add_doc("pyt-vllm-llama-3-1-8b");
    let (picker, _location) = activate(&mut page, "");

    assert_eq!(
        picker.selection().model,
        ModelTag::new("pyt_vllm_llama-3.1-8b")
    );
    assert!(!page.docs[0].hidden);
}

#[rstest]
#[case(Trigger::Key(Key::Enter), true)]
#[case(Trigger::Key(Key::Space), true)]
#[case(Trigger::Click, false)]
fn keyboard_activation_reports_consumption(#[case] trigger: Trigger, #[case] consumed: bool) {
    let mut page = fixture_page();
    let (mut picker, mut location) = activate(&mut page, "");

    let target = page.find_group("groupB").map(Target::from_group_control);
    let interaction = Interaction { trigger, target };
    assert_eq!(
        picker.handle(&interaction, &mut page, &mut location),
        consumed
    );
    assert_eq!(picker.selection().model, ModelTag::new("m3"));
}

#[test]
fn selection_survives_a_reload() {
    let mut page = fixture_page();
    let (mut picker, mut location) = activate(&mut page, "");

    let target = page.find_model("m3").map(Target::from_model_control);
    picker.handle(&Interaction::click(target), &mut page, &mut location);
    assert_eq!(location.search, "model=m3");

    // Reload: fresh page, fresh picker, same URL.
    let mut reloaded = fixture_page();
    let (picker, _location) = activate(&mut reloaded, &location.search);
    assert_eq!(picker.selection().model, ModelTag::new("m3"));
    assert_eq!(picker.selection().group, GroupTag::new("groupB"));
    assert_eq!(hidden_models(&reloaded), vec!["m1", "m2"]);
}
