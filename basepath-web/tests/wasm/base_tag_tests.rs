#![cfg(target_arch = "wasm32")]

use basepath_core::{DocumentHead, ProfileTable, RuntimeSignal, StartupOptions, apply_base_path};
use basepath_web::dom::{self, DomError, WebDocumentHead};
use basepath_web::{bindings, page, startup};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn reset_head() -> web_sys::HtmlHeadElement {
    let doc = dom::document().expect("document");
    while let Some(existing) = doc.query_selector("base").expect("query base") {
        existing.remove();
    }
    doc.head().expect("document head")
}

fn base_elements() -> Vec<String> {
    let doc = dom::document().expect("document");
    let nodes = doc.query_selector_all("base").expect("query bases");
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| {
            wasm_bindgen::JsCast::dyn_into::<web_sys::Element>(node)
                .ok()
                .and_then(|el| el.get_attribute("href"))
        })
        .collect()
}

#[wasm_bindgen_test]
fn patching_twice_leaves_one_base_as_first_child() {
    let head = reset_head();
    let mut web_head = WebDocumentHead::current().expect("web head");
    let table = ProfileTable::builtin();

    apply_base_path(&mut web_head, table, &RuntimeSignal::new("localhost", "http:"), None)
        .expect("first patch");
    let second = apply_base_path(
        &mut web_head,
        table,
        &RuntimeSignal::new("example.com", "https:"),
        None,
    )
    .expect("second patch");

    assert_eq!(base_elements(), vec![second.base.clone()]);
    let first = head.first_element_child().expect("head has children");
    assert_eq!(first.tag_name(), "BASE");
    assert_eq!(
        first.get_attribute("href").unwrap_or_default(),
        "https://cdn.example.com/games/"
    );
}

#[wasm_bindgen_test]
fn override_is_written_verbatim() {
    reset_head();
    let profile = page::patch_document(Some("/preview/build-42/")).expect("patch");
    assert_eq!(profile.base, "/preview/build-42/");
    assert_eq!(profile.assets, None);
    assert_eq!(base_elements(), vec!["/preview/build-42/".to_string()]);
}

#[wasm_bindgen_test]
fn find_existing_reports_absence_without_error() {
    reset_head();
    let web_head = WebDocumentHead::current().expect("web head");
    assert!(web_head.find_existing().expect("query").is_none());
}

#[wasm_bindgen_test]
fn detected_profile_matches_test_runner_host() {
    let env = page::current_environment().expect("environment");
    let exported = bindings::current_environment().expect("exported environment");
    assert_eq!(exported, env.as_str());
    assert_eq!(
        page::current_profile().expect("profile"),
        ProfileTable::builtin().get(env)
    );
}

#[wasm_bindgen_test]
fn exported_asset_path_defaults_to_assets_field() {
    let env = page::current_environment().expect("environment");
    let expected = basepath_core::join_path(
        ProfileTable::builtin().get(env).select("assets"),
        "icons/a.png",
    );
    assert_eq!(
        bindings::build_asset_path("/icons/a.png", None).expect("asset path"),
        expected
    );
}

#[wasm_bindgen_test]
fn auto_apply_flag_reads_js_truthiness() {
    let window = dom::window().expect("window");
    let key = JsValue::from_str(startup::AUTO_APPLY_FLAG);

    let _ = js_sys::Reflect::delete_property(&window, &key);
    assert_eq!(startup::startup_options(&window), StartupOptions::default());

    for (value, expected) in [
        (JsValue::FALSE, false),
        (JsValue::from_f64(0.0), false),
        (JsValue::NULL, false),
        (JsValue::TRUE, true),
        (JsValue::from_str("yes"), true),
    ] {
        js_sys::Reflect::set(&window, &key, &value).expect("set flag");
        assert_eq!(startup::startup_options(&window).auto_apply, expected);
    }
    let _ = js_sys::Reflect::delete_property(&window, &key);
}

#[wasm_bindgen_test]
fn disabled_auto_apply_leaves_head_untouched() {
    reset_head();
    let doc = dom::document().expect("document");
    startup::schedule_auto_apply(&doc, StartupOptions::from_flag(Some(false)))
        .expect("schedule");
    assert!(base_elements().is_empty());
}

#[wasm_bindgen_test]
fn default_auto_apply_installs_detected_base() {
    reset_head();
    let doc = dom::document().expect("document");
    assert_ne!(doc.ready_state(), "loading");
    startup::schedule_auto_apply(&doc, StartupOptions::default()).expect("schedule");
    let expected = page::current_profile().expect("profile").base.clone();
    assert_eq!(base_elements(), vec![expected]);
}

#[wasm_bindgen_test]
fn document_without_head_is_rejected_up_front() {
    let headless = web_sys::Document::new().expect("blank document");
    assert!(headless.head().is_none());
    assert!(matches!(
        WebDocumentHead::new(headless),
        Err(DomError::MissingHead)
    ));
}

#[wasm_bindgen_test]
fn profile_table_export_is_a_plain_object() {
    let table = bindings::profile_table().expect("table");
    let pages = js_sys::Reflect::get(&table, &JsValue::from_str("github-pages")).expect("pages");
    let games = js_sys::Reflect::get(&pages, &JsValue::from_str("games")).expect("games");
    assert_eq!(games.as_string().as_deref(), Some("/miaoda-games-demo/games/"));
}
