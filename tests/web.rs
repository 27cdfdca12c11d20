//! Browser tests for the tag group.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use tag_group_ui::{Item, Key, TagGroup};

wasm_bindgen_test_configure!(run_in_browser);

fn container() -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let el = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&el).unwrap();
    el.dyn_into().unwrap()
}

fn fruits() -> Vec<Item<()>> {
    vec![Item::new("a", (), "Apple"), Item::new("b", (), "Banana")]
}

fn key_down(target: &web_sys::Element, key: &str) {
    let init = web_sys::KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    let ev = web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    target.dispatch_event(&ev).unwrap();
}

fn cell(parent: &web_sys::HtmlElement, key: &str) -> web_sys::HtmlElement {
    parent
        .query_selector(&format!("[data-key=\"{}\"]", key))
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap()
}

// Effects apply attributes after the first tick
async fn settle() {
    TimeoutFuture::new(0).await;
}

#[wasm_bindgen_test]
async fn renders_grid_rows_and_cells() {
    let parent = container();
    let _handle = leptos::mount::mount_to(parent.clone(), || {
        view! { <TagGroup items=Signal::stored(fruits()) is_removable=true aria_label="Fruits" /> }
    });
    settle().await;

    let grid = parent.query_selector("[role=grid]").unwrap().unwrap();
    assert_eq!(grid.get_attribute("aria-label").as_deref(), Some("Fruits"));
    assert_eq!(grid.get_attribute("aria-colcount").as_deref(), Some("2"));
    assert_eq!(parent.query_selector_all("[role=row]").unwrap().length(), 2);
    assert_eq!(parent.query_selector_all("[role=gridcell]").unwrap().length(), 4);
    assert_eq!(cell(&parent, "a").text_content().as_deref(), Some("Apple"));
    assert_eq!(cell(&parent, "a").get_attribute("tabindex").as_deref(), Some("0"));
    assert_eq!(cell(&parent, "remove-b").get_attribute("tabindex").as_deref(), Some("-1"));
}

#[wasm_bindgen_test]
async fn non_removable_has_one_column() {
    let parent = container();
    let _handle = leptos::mount::mount_to(parent.clone(), || {
        view! { <TagGroup items=Signal::stored(fruits()) aria_label="Fruits" /> }
    });
    settle().await;

    assert_eq!(parent.query_selector_all("[role=gridcell]").unwrap().length(), 2);
    assert!(parent.query_selector("button").unwrap().is_none());
}

#[wasm_bindgen_test]
async fn arrow_keys_move_focus() {
    let parent = container();
    let _handle = leptos::mount::mount_to(parent.clone(), || {
        view! { <TagGroup items=Signal::stored(fruits()) is_removable=true aria_label="Fruits" /> }
    });
    settle().await;

    let first = cell(&parent, "a");
    first.focus().unwrap();
    key_down(&first, "ArrowRight");
    settle().await;

    let document = web_sys::window().unwrap().document().unwrap();
    let active = document.active_element().unwrap();
    assert_eq!(active.get_attribute("data-key").as_deref(), Some("remove-a"));
    assert_eq!(active.get_attribute("tabindex").as_deref(), Some("0"));
}

#[wasm_bindgen_test]
async fn remove_forwards_item_key() {
    let removed = Arc::new(Mutex::new(Vec::<HashSet<Key>>::new()));
    let sink = Arc::clone(&removed);
    let parent = container();
    let _handle = leptos::mount::mount_to(parent.clone(), move || {
        let on_remove = move |keys: HashSet<Key>| sink.lock().unwrap().push(keys);
        view! {
            <TagGroup
                items=Signal::stored(fruits())
                is_removable=true
                on_remove=on_remove
                aria_label="Fruits"
            />
        }
    });
    settle().await;

    let button: web_sys::HtmlElement = cell(&parent, "remove-b")
        .query_selector("button")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    button.click();

    key_down(&cell(&parent, "remove-a"), "Delete");

    let removed = removed.lock().unwrap();
    assert_eq!(removed.len(), 2);
    assert!(removed[0].contains("b"));
    assert!(removed[1].contains("a"));
}

#[wasm_bindgen_test]
async fn rows_follow_item_list_changes() {
    let items = RwSignal::new(vec![
        Item::new("a", (), "Apple"),
        Item::new("b", (), "Banana"),
        Item::new("c", (), "Cherry"),
    ]);
    let parent = container();
    let _handle = leptos::mount::mount_to(parent.clone(), move || {
        view! { <TagGroup items=Signal::from(items) is_removable=true aria_label="Fruits" /> }
    });
    settle().await;
    assert_eq!(cell(&parent, "row-c").get_attribute("aria-rowindex").as_deref(), Some("3"));

    items.update(|items| {
        items.remove(0);
    });
    settle().await;
    settle().await;

    let grid = parent.query_selector("[role=grid]").unwrap().unwrap();
    assert_eq!(grid.get_attribute("aria-rowcount").as_deref(), Some("2"));
    assert_eq!(parent.query_selector_all("[role=row]").unwrap().length(), 2);
    assert_eq!(parent.query_selector_all("[role=gridcell]").unwrap().length(), 4);
    assert_eq!(cell(&parent, "row-b").get_attribute("aria-rowindex").as_deref(), Some("1"));
    assert_eq!(cell(&parent, "row-c").get_attribute("aria-rowindex").as_deref(), Some("2"));
    assert_eq!(cell(&parent, "b").text_content().as_deref(), Some("Banana"));
    assert_eq!(cell(&parent, "b").get_attribute("tabindex").as_deref(), Some("0"));

    items.update(|items| items[0] = Item::new("b", (), "Blueberry"));
    settle().await;
    settle().await;

    assert_eq!(cell(&parent, "b").text_content().as_deref(), Some("Blueberry"));
    let button = cell(&parent, "remove-b").query_selector("button").unwrap().unwrap();
    assert_eq!(button.get_attribute("aria-label").as_deref(), Some("Remove Blueberry"));
}

#[wasm_bindgen_test]
fn apply_attrs_drops_stale_attributes() {
    use tag_group_ui::dom::apply_attrs;
    use tag_grid::aria::AttrBag;

    let el = container();
    let prev = AttrBag::new().with("role", "gridcell").with("aria-disabled", "true");
    apply_attrs(&el, None, &prev);
    assert_eq!(el.get_attribute("aria-disabled").as_deref(), Some("true"));

    let next = AttrBag::new().with("role", "gridcell");
    apply_attrs(&el, Some(&prev), &next);
    assert_eq!(el.get_attribute("aria-disabled"), None);
    assert_eq!(el.get_attribute("role").as_deref(), Some("gridcell"));
}
