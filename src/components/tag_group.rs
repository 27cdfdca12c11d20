//! Tag Group Component
//!
//! Renders a list of items as a grid of tag chips. The items are adapted into
//! a grid collection (label column plus optional remove column), focus moves
//! between cells with the keyboard, and removal requests are forwarded to
//! `on_remove`.

use std::collections::HashSet;

use leptos::html::Div;
use leptos::prelude::*;

use tag_grid::aria::{grid_attrs, merge_attrs, tag_group_attrs, TagGroupAria};
use tag_grid::{class_names, GridCollection, GridRow, GridState, Item, Key, ListCollection, StyleProps, TypeSelect};

use crate::components::tag::Tag;
use crate::context::{resolve_disabled, use_locale, use_provider_config};
use crate::dom;

/// Group of tag chips navigable as a grid
///
/// Props:
/// - items: Items in display order; keys must be unique
/// - is_disabled: Disables the whole group (falls back to the provider)
/// - is_removable: Adds a remove cell to every tag
/// - on_remove: Receives the keys the user asked to remove
/// - node_ref: Forwarded ref to the root element
#[component]
pub fn TagGroup<T>(
    items: Signal<Vec<Item<T>>>,
    #[prop(optional)] is_disabled: Option<bool>,
    #[prop(optional)] is_removable: bool,
    #[prop(optional, into)] on_remove: Option<Callback<HashSet<Key>>>,
    #[prop(optional, into)] disabled_keys: MaybeProp<Vec<Key>>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] aria_labelledby: Option<String>,
    #[prop(optional, into)] aria_describedby: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] style: StyleProps,
    #[prop(optional)] node_ref: Option<NodeRef<Div>>,
) -> impl IntoView
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let provider = use_provider_config();
    let is_disabled = resolve_disabled(is_disabled, provider.as_ref());
    let direction = use_locale().direction;
    let root_ref = node_ref.unwrap_or_else(NodeRef::new);

    // Rebuilt whenever the item list changes
    let list = Memo::new(move |_| ListCollection::new(items.get()));
    let grid = Memo::new(move |_| list.with(|list| GridCollection::from_list(list, is_removable)));

    let state = RwSignal::new({
        let mut initial = GridState::new(grid.get_untracked());
        initial.set_group_disabled(is_disabled);
        initial
    });
    Effect::new(move |_| {
        let collection = grid.get();
        state.update(|s| s.set_collection(collection));
    });
    Effect::new(move |_| {
        let keys = disabled_keys.get().unwrap_or_default();
        state.update(|s| s.set_disabled_keys(keys));
    });

    let group_bag = tag_group_attrs(&TagGroupAria {
        id,
        aria_label,
        aria_labelledby,
        aria_describedby,
    });
    dom::use_attrs(root_ref, move || {
        grid.with(|grid| merge_attrs(&[&group_bag, &grid_attrs(grid, is_disabled)]))
    });

    let request_remove = move |key: &Key| {
        if !is_removable || is_disabled {
            return;
        }
        let Some(on_remove) = on_remove else {
            return;
        };
        let item_key = state.with_untracked(|s| {
            s.collection()
                .row_of(key)
                .filter(|_| !s.is_disabled(key))
                .map(|row| row.item().key.clone())
        });
        if let Some(item_key) = item_key {
            log::debug!("remove requested for {}", item_key);
            on_remove.run(HashSet::from([item_key]));
        }
    };

    let type_select = StoredValue::new(TypeSelect::default());

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if is_disabled {
            return;
        }
        let input = dom::key_input(&ev);
        // The cell the event came from wins over the remembered focus
        let focused = dom::event_key(ev.target())
            .or_else(|| state.with_untracked(|s| s.focused_key().cloned()));

        if input.is_remove() {
            if let Some(key) = focused.as_ref() {
                ev.prevent_default();
                request_remove(key);
            }
            return;
        }

        let search = input.printable_char().and_then(|ch| {
            type_select
                .try_update_value(|ts| ts.push(ch, dom::now_ms()).map(str::to_string))
                .flatten()
        });
        let target = state.with_untracked(|s| {
            let delegate = s.keyboard_delegate(direction);
            match search.as_deref() {
                Some(search) => delegate.key_for_type_select(search, focused.as_ref()),
                None => delegate.navigate(focused.as_ref(), &input),
            }
        });
        let Some(target) = target else {
            return;
        };

        ev.prevent_default();
        state.update(|s| s.set_focused_key(Some(target.clone())));
        if let Some(root) = root_ref.get_untracked() {
            if let Err(e) = dom::focus_key(&root, &target) {
                log::warn!("could not focus {}: {}", target, e);
            }
        }
    };

    let on_focusin = move |ev: web_sys::FocusEvent| {
        let key = dom::event_key(ev.target());
        state.update(|s| {
            if key.is_some() {
                s.set_focused_key(key);
            }
            s.set_focused(true);
        });
    };

    let on_focusout = move |ev: web_sys::FocusEvent| {
        let stays_inside = root_ref
            .get_untracked()
            .is_some_and(|root| dom::contains(&root, ev.related_target()));
        if !stays_inside {
            state.update(|s| s.set_focused(false));
        }
    };

    let class = class_names([
        ("spectrum-Tags", true),
        ("is-disabled", is_disabled),
        (style.class_name().unwrap_or_default(), true),
    ]);
    let inline_style = style.style_string();

    view! {
        <div
            node_ref=root_ref
            class=class
            style=inline_style
            on:keydown=on_keydown
            on:focusin=on_focusin
            on:focusout=on_focusout
        >
            <For
                each=move || grid.with(|grid| grid.rows().to_vec())
                key={|row: &GridRow<T>| row.item().key.clone()}
                children={move |row: GridRow<T>| {
                    view! {
                        <Tag
                            row=row
                            state=state
                            is_disabled=is_disabled
                            is_removable=is_removable
                            on_remove=on_remove
                        />
                    }
                }}
            />
        </div>
    }
}
