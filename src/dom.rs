//! DOM Glue
//!
//! Applying attribute bags to elements, moving DOM focus to a grid key and
//! reading keyboard events.

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use tag_grid::aria::AttrBag;
use tag_grid::{Key, KeyInput};

/// Escape a value for use inside a double-quoted CSS attribute selector
pub fn escape_attr_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch == '"' || ch == '\\' {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

pub fn key_selector(key: &Key) -> String {
    format!("[data-key=\"{}\"]", escape_attr_value(key.as_str()))
}

/// Set every attribute of `next`, removing those only `prev` had
pub fn apply_attrs(el: &web_sys::Element, prev: Option<&AttrBag>, next: &AttrBag) {
    if let Some(prev) = prev {
        for (name, _) in prev.iter().filter(|(name, _)| next.get(name).is_none()) {
            if let Err(e) = el.remove_attribute(name) {
                log::warn!("failed to remove {}: {:?}", name, e);
            }
        }
    }
    for (name, value) in next.iter() {
        if let Err(e) = el.set_attribute(name, value) {
            log::warn!("failed to set {}: {:?}", name, e);
        }
    }
}

/// Keep the element behind `node_ref` in sync with a reactive attribute bag
pub fn use_attrs(node_ref: NodeRef<Div>, attrs: impl Fn() -> AttrBag + 'static) {
    Effect::new(move |prev: Option<AttrBag>| {
        let next = attrs();
        match node_ref.get() {
            Some(el) => {
                apply_attrs(&el, prev.as_ref(), &next);
                next
            }
            // Not mounted yet: nothing applied
            None => AttrBag::new(),
        }
    });
}

/// Move DOM focus to the element carrying `key` below `root`
pub fn focus_key(root: &web_sys::Element, key: &Key) -> Result<(), String> {
    let el = root
        .query_selector(&key_selector(key))
        .map_err(|e| format!("{:?}", e))?
        .ok_or_else(|| format!("no element for key {}", key))?;
    let el: web_sys::HtmlElement = el
        .dyn_into()
        .map_err(|_| format!("element for key {} is not focusable", key))?;
    el.focus().map_err(|e| format!("{:?}", e))
}

/// Grid key of the element an event started from
pub fn event_key(target: Option<web_sys::EventTarget>) -> Option<Key> {
    let el = target?.dyn_into::<web_sys::Element>().ok()?;
    let keyed = el.closest("[data-key]").ok()??;
    keyed.get_attribute("data-key").map(Key::from)
}

/// Whether `node` lies inside `root`
pub fn contains(root: &web_sys::Element, node: Option<web_sys::EventTarget>) -> bool {
    node.and_then(|target| target.dyn_into::<web_sys::Node>().ok())
        .is_some_and(|node| root.contains(Some(&node)))
}

pub fn key_input(ev: &web_sys::KeyboardEvent) -> KeyInput {
    KeyInput {
        key: ev.key(),
        ctrl: ev.ctrl_key(),
        meta: ev.meta_key(),
        alt: ev.alt_key(),
        shift: ev.shift_key(),
    }
}

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_attr_value() {
        assert_eq!(escape_attr_value("plain"), "plain");
        assert_eq!(escape_attr_value(r#"a"b"#), r#"a\"b"#);
        assert_eq!(escape_attr_value(r"a\b"), r"a\\b");
    }

    #[test]
    fn test_key_selector() {
        assert_eq!(key_selector(&Key::from("remove-a")), "[data-key=\"remove-a\"]");
    }
}
