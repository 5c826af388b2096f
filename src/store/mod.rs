//! Store Module
//!
//! The category collection the dispatcher operates on.
//!
//! ## Responsibilities
//! - List, get, create, update and delete categories
//! - Assign ids (`max existing id + 1`, or 1 when empty)
//! - Serialize mutations across concurrent connections
//!
//! ## Data Structure Choice
//! BTreeMap wrapped in RwLock:
//! - Ordered keys give ascending-id listings and the max id for free
//! - Reads share the lock, mutations take it exclusively

mod memory;

pub use memory::MemoryStore;

use serde::{Deserialize, Serialize};

/// Category identifier
pub type CategoryId = i64;

/// A stored category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub cid: CategoryId,
    pub name: String,
}

impl Category {
    pub fn new(cid: CategoryId, name: impl Into<String>) -> Self {
        Self {
            cid,
            name: name.into(),
        }
    }
}

/// Client-supplied category fields. A `cid` in the input is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
}

impl NewCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Storage operations used by the dispatcher
pub trait CategoryStore: Send + Sync {
    /// All categories ordered by ascending id
    fn list(&self) -> Vec<Category>;

    /// Category with the given id
    fn get(&self, cid: CategoryId) -> Option<Category>;

    /// Insert a category under a freshly assigned id
    fn create(&self, category: NewCategory) -> Category;

    /// Replace the name of an existing category. False if absent.
    fn update(&self, cid: CategoryId, category: NewCategory) -> bool;

    /// Remove a category. False if absent.
    fn delete(&self, cid: CategoryId) -> bool;
}
