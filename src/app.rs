//! Tag Group Demo App
//!
//! A removable fruit group wired to a store.

use std::collections::HashSet;

use leptos::prelude::*;
use reactive_stores::Store;

use tag_group_ui::{Key, Provider, ProviderConfig, StyleProps, TagGroup};

use crate::store::{store_fruit_items, store_remove_fruits, store_removed, store_reset, DemoState};

#[component]
pub fn App(config: ProviderConfig) -> impl IntoView {
    let store = Store::new(DemoState::new());
    provide_context(store);

    let items = Signal::derive(move || store_fruit_items(&store));
    let on_remove = move |keys: HashSet<Key>| store_remove_fruits(&store, &keys);
    let style = StyleProps {
        width: Some("size-3600".into()),
        ..Default::default()
    };

    view! {
        <Provider config=config>
            <main class="demo">
                <h1>"Tag Group"</h1>

                <TagGroup
                    items=items
                    is_removable=true
                    on_remove=on_remove
                    aria_label="Fruits"
                    style=style
                />

                <p class="removed-log">
                    {move || {
                        let removed = store_removed(&store);
                        if removed.is_empty() {
                            "Nothing removed".to_string()
                        } else {
                            format!("Removed: {}", removed.join(", "))
                        }
                    }}
                </p>

                <button on:click=move |_| store_reset(&store)>"Reset"</button>
            </main>
        </Provider>
    }
}
