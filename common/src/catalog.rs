//! Catalog store
//!
//! Holds the immutable item collection loaded once per session and answers
//! lookups by id. Ids must be unique: the render differ keys cards by id.

use crate::error::{Error, Result};
use crate::types::{ExactGroup, FacetGroup, Item, ItemId};
use std::collections::{HashMap, HashSet};

/// Immutable item collection
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    index: HashMap<ItemId, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(items: Vec<Item>) -> Result<Self> {
        let mut index = HashMap::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            if index.insert(item.id, pos).is_some() {
                return Err(Error::DuplicateId(item.id));
            }
        }
        Ok(Self { items, index })
    }

    /// Parse the `herramientas.json` document (top-level array)
    pub fn from_json(json: &str) -> Result<Self> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// Read from a file (not available on WASM)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Base collection in document order
    pub fn all(&self) -> &[Item] {
        &self.items
    }

    pub fn by_id(&self, id: ItemId) -> Option<&Item> {
        self.index.get(&id).map(|&pos| &self.items[pos])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct tags of a faceted group, in first-seen order
    pub fn tags(&self, group: FacetGroup) -> Vec<String> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .flat_map(|item| item.tags(group))
            .filter(|tag| seen.insert(tag.as_str()))
            .cloned()
            .collect()
    }

    /// Distinct scalar tags of an exact group, sorted
    pub fn scalars(&self, group: ExactGroup) -> Vec<String> {
        let mut values: Vec<String> = self
            .items
            .iter()
            .filter_map(|item| item.scalar(group))
            .map(str::to_string)
            .collect();
        values.sort();
        values.dedup();
        values
    }
}

/// Data problem found by [`validate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    DuplicateId(ItemId),
    EmptyTitle(ItemId),
    /// Faceted item with an empty tag list in one group
    EmptyGroup(ItemId, FacetGroup),
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Issue::DuplicateId(id) => write!(f, "id {} aparece más de una vez", id),
            Issue::EmptyTitle(id) => write!(f, "id {}: título vacío", id),
            Issue::EmptyGroup(id, group) => write!(f, "id {}: grupo '{}' sin etiquetas", id, group.key()),
        }
    }
}

/// Check raw items before building a [`Catalog`].
///
/// Items without any faceted tag are treated as exact-layout items and are
/// not checked for empty groups.
pub fn validate(items: &[Item]) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for item in items {
        if !seen.insert(item.id) {
            issues.push(Issue::DuplicateId(item.id));
        }
        if item.title.trim().is_empty() {
            issues.push(Issue::EmptyTitle(item.id));
        }

        let faceted = FacetGroup::ALL.iter().any(|g| !item.tags(*g).is_empty());
        if faceted {
            for group in FacetGroup::ALL {
                if item.tags(group).is_empty() {
                    issues.push(Issue::EmptyGroup(item.id, group));
                }
            }
        }
    }

    issues
}
