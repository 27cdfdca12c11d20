//! Demo State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::collections::HashSet;

use leptos::prelude::*;
use reactive_stores::Store;
use serde::{Deserialize, Serialize};

use tag_group_ui::{Item, Key};

const SEED_FRUITS: &str = r#"[
    {"id": 1, "name": "Apple", "emoji": "🍎"},
    {"id": 2, "name": "Banana", "emoji": "🍌"},
    {"id": 3, "name": "Cherry", "emoji": "🍒"},
    {"id": 4, "name": "Blueberry", "emoji": "🫐"},
    {"id": 5, "name": "Grape"}
]"#;

/// Fruit shown as a tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fruit {
    pub id: u32,
    pub name: String,
    pub emoji: Option<String>,
}

impl Fruit {
    pub fn into_item(self) -> Item<Fruit> {
        let rendered = match &self.emoji {
            Some(emoji) => format!("{} {}", emoji, self.name),
            None => self.name.clone(),
        };
        Item::new(self.id, self.clone(), self.name).with_rendered(rendered)
    }
}

/// Demo state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DemoState {
    /// Fruits still in the group
    pub fruits: Vec<Fruit>,
    /// Names removed so far, oldest first
    pub removed: Vec<String>,
}

impl DemoState {
    pub fn new() -> Self {
        Self {
            fruits: seed_fruits(),
            ..Default::default()
        }
    }
}

pub type DemoStore = Store<DemoState>;

pub fn seed_fruits() -> Vec<Fruit> {
    serde_json::from_str(SEED_FRUITS).unwrap_or_else(|e| {
        log::warn!("bad seed data: {}", e);
        Vec::new()
    })
}

// ========================
// Store Helper Functions
// ========================

/// Fruits as tag items (tracked)
pub fn store_fruit_items(store: &DemoStore) -> Vec<Item<Fruit>> {
    store.fruits().get().into_iter().map(Fruit::into_item).collect()
}

/// Removed names (tracked)
pub fn store_removed(store: &DemoStore) -> Vec<String> {
    store.removed().get()
}

/// Remove fruits by key, recording their names
pub fn store_remove_fruits(store: &DemoStore, keys: &HashSet<Key>) {
    let mut removed = Vec::new();
    store.fruits().write().retain(|fruit| {
        let keep = !keys.contains(&Key::from(fruit.id));
        if !keep {
            removed.push(fruit.name.clone());
        }
        keep
    });
    log::info!("removed {:?}", removed);
    store.removed().write().extend(removed);
}

/// Restore the seed fruits and clear the removal log
pub fn store_reset(store: &DemoStore) {
    *store.fruits().write() = seed_fruits();
    store.removed().write().clear();
}
