//! In-memory category store
//!
//! BTreeMap-based store with RwLock for concurrency.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use super::{Category, CategoryId, CategoryStore, NewCategory};

/// Categories every freshly seeded store starts with
pub const DEFAULT_CATEGORIES: [(CategoryId, &str); 3] =
    [(1, "Beverages"), (2, "Condiments"), (3, "Confections")];

/// In-memory category collection
pub struct MemoryStore {
    data: RwLock<BTreeMap<CategoryId, Category>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            data: RwLock::new(BTreeMap::new()),
        }
    }

    /// Create a store holding [`DEFAULT_CATEGORIES`]
    pub fn seeded() -> Self {
        Self::with_categories(
            DEFAULT_CATEGORIES
                .iter()
                .map(|&(cid, name)| Category::new(cid, name)),
        )
    }

    /// Create a store from existing categories (later duplicates win)
    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let data = categories.into_iter().map(|c| (c.cid, c)).collect();
        Self {
            data: RwLock::new(data),
        }
    }

    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryStore for MemoryStore {
    fn list(&self) -> Vec<Category> {
        self.data.read().values().cloned().collect()
    }

    fn get(&self, cid: CategoryId) -> Option<Category> {
        self.data.read().get(&cid).cloned()
    }

    fn create(&self, category: NewCategory) -> Category {
        // Id assignment and insert happen under one write lock
        let mut data = self.data.write();
        let cid = data.keys().next_back().map_or(1, |max| max + 1);
        let created = Category::new(cid, category.name);
        data.insert(cid, created.clone());
        created
    }

    fn update(&self, cid: CategoryId, category: NewCategory) -> bool {
        match self.data.write().get_mut(&cid) {
            Some(existing) => {
                existing.name = category.name;
                true
            }
            None => false,
        }
    }

    fn delete(&self, cid: CategoryId) -> bool {
        self.data.write().remove(&cid).is_some()
    }
}
