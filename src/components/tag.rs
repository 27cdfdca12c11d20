//! Tag Component
//!
//! One chip of a tag group: a row with a label cell and, for removable
//! groups, a remove cell holding the clear button.

use std::collections::HashSet;

use leptos::html::Div;
use leptos::prelude::*;

use tag_grid::aria::{cell_attrs, row_attrs};
use tag_grid::{class_names, GridCell, GridRow, GridState, Key};

use crate::dom::use_attrs;

/// A single tag chip
///
/// # Arguments
/// * `row` - Grid row this tag was created for; index and label are read back from `state`
/// * `state` - Grid state shared with the owning group
/// * `is_disabled` / `is_removable` - Group-wide flags
/// * `on_remove` - Called with this tag's item key when the clear button is pressed
#[component]
pub fn Tag<T>(
    row: GridRow<T>,
    state: RwSignal<GridState<T>>,
    is_disabled: bool,
    is_removable: bool,
    on_remove: Option<Callback<HashSet<Key>>>,
) -> impl IntoView
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let item_key = row.item().key.clone();
    // Keyed by item, so index and label follow the rebuilt grid
    let current = Memo::new({
        let item_key = item_key.clone();
        move |_| state.with(|s| s.collection().row_of(&item_key).cloned())
    });

    let row_ref = NodeRef::<Div>::new();
    use_attrs(row_ref, move || current.with(|row| row.as_ref().map(row_attrs).unwrap_or_default()));

    let class = {
        let item_key = item_key.clone();
        move || {
            state.with(|s| {
                let focused_here = s.is_focused()
                    && s.focused_key()
                        .and_then(|key| s.collection().row_of(key))
                        .is_some_and(|focused_row| focused_row.item().key == item_key);
                class_names([
                    ("spectrum-Tags-item", true),
                    ("is-disabled", s.is_disabled(&item_key)),
                    ("is-removable", is_removable),
                    ("focus-ring", focused_here),
                ])
            })
        }
    };

    let cells = row
        .cells()
        .iter()
        .cloned()
        .map(|cell| cell_view(cell, current, state, is_disabled, on_remove, item_key.clone()))
        .collect_view();

    view! {
        <div node_ref=row_ref class=class>
            {cells}
        </div>
    }
}

fn cell_view<T>(
    cell: GridCell<T>,
    row: Memo<Option<GridRow<T>>>,
    state: RwSignal<GridState<T>>,
    is_disabled: bool,
    on_remove: Option<Callback<HashSet<Key>>>,
    item_key: Key,
) -> AnyView
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let cell_ref = NodeRef::<Div>::new();
    let attrs_cell = cell.clone();
    use_attrs(cell_ref, move || {
        state.with(|s| {
            let key = attrs_cell.key();
            cell_attrs(&attrs_cell, s.focusable_key() == Some(key), s.is_disabled(key))
        })
    });

    let label = move || row.with(|row| row.as_ref().map(|row| row.label().to_string()).unwrap_or_default());

    match cell {
        GridCell::Data(_) => view! {
            <div node_ref=cell_ref class="spectrum-Tags-itemLabel">{label}</div>
        }
        .into_any(),
        GridCell::Action(action) => {
            let action_key = action.key.clone();
            let remove_label = move || {
                row.with(|row| {
                    let text = row
                        .as_ref()
                        .and_then(|row| row.remove_cell())
                        .map_or(action.text_value.as_str(), |cell| cell.text_value.as_str())
                        .to_string();
                    format!("Remove {}", text)
                })
            };
            view! {
                <div node_ref=cell_ref class="spectrum-Tags-itemClearButton">
                    <button
                        type="button"
                        tabindex="-1"
                        aria-label=remove_label
                        disabled=move || state.with(|s| s.is_disabled(&action_key))
                        on:click=move |ev| {
                            ev.stop_propagation();
                            if is_disabled {
                                return;
                            }
                            if let Some(on_remove) = on_remove {
                                on_remove.run(HashSet::from([item_key.clone()]));
                            }
                        }
                    >
                        "×"
                    </button>
                </div>
            }
            .into_any()
        }
    }
}
