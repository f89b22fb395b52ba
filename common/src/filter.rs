//! Filter engine
//!
//! Two explicit contracts, one per catalog layout:
//!
//! - [`FacetSelection`]: AND across groups, OR within a group. An item passes a
//!   group when its tag list intersects the selected set.
//! - [`ExactSelection`]: AND across groups, each group an exact match on the
//!   item's single tag.
//!
//! A group without an active selection imposes no constraint. With nothing
//! selected the full collection comes back in original order.

use crate::types::{ExactGroup, FacetGroup, Item};
use std::collections::{HashMap, HashSet};

/// Predicate over items
pub trait Filter {
    /// No group has an active selection
    fn is_empty(&self) -> bool;

    fn matches(&self, item: &Item) -> bool;
}

/// Items passing `filter`, in original order
pub fn apply<F: Filter + ?Sized>(filter: &F, items: &[Item]) -> Vec<Item> {
    if filter.is_empty() {
        return items.to_vec();
    }
    items.iter().filter(|item| filter.matches(item)).cloned().collect()
}

/// Which filter contract a deployment uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterContract {
    Faceted,
    Exact,
}

/// Multi-select selection (checkbox groups)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacetSelection {
    groups: HashMap<FacetGroup, HashSet<String>>,
}

impl FacetSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle one value; returns whether it is now selected
    pub fn toggle(&mut self, group: FacetGroup, value: &str) -> bool {
        let set = self.groups.entry(group).or_default();
        if set.remove(value) {
            false
        } else {
            set.insert(value.to_string());
            true
        }
    }

    pub fn set(&mut self, group: FacetGroup, value: &str, selected: bool) {
        if selected {
            self.groups.entry(group).or_default().insert(value.to_string());
        } else if let Some(set) = self.groups.get_mut(&group) {
            set.remove(value);
        }
    }

    /// Builder form of [`set`](Self::set)
    pub fn with(mut self, group: FacetGroup, value: &str) -> Self {
        self.set(group, value, true);
        self
    }

    pub fn is_selected(&self, group: FacetGroup, value: &str) -> bool {
        self.groups.get(&group).is_some_and(|set| set.contains(value))
    }

    /// Number of selected values in a group
    pub fn count(&self, group: FacetGroup) -> usize {
        self.groups.get(&group).map_or(0, HashSet::len)
    }

    /// Number of selected values across all groups
    pub fn total(&self) -> usize {
        self.groups.values().map(HashSet::len).sum()
    }

    pub fn clear(&mut self) {
        self.groups.clear();
    }

    fn group_passes(&self, group: FacetGroup, item: &Item) -> bool {
        match self.groups.get(&group) {
            Some(selected) if !selected.is_empty() => {
                item.tags(group).iter().any(|tag| selected.contains(tag))
            }
            _ => true,
        }
    }
}

impl Filter for FacetSelection {
    fn is_empty(&self) -> bool {
        self.total() == 0
    }

    fn matches(&self, item: &Item) -> bool {
        FacetGroup::ALL.iter().all(|group| self.group_passes(*group, item))
    }
}

/// Single-select selection (one dropdown per group)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExactSelection {
    groups: HashMap<ExactGroup, String>,
}

impl ExactSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a value; `None` or a blank string clears the group
    pub fn select(&mut self, group: ExactGroup, value: Option<&str>) {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => {
                self.groups.insert(group, v.to_string());
            }
            None => {
                self.groups.remove(&group);
            }
        }
    }

    pub fn with(mut self, group: ExactGroup, value: &str) -> Self {
        self.select(group, Some(value));
        self
    }

    pub fn selected(&self, group: ExactGroup) -> Option<&str> {
        self.groups.get(&group).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.groups.clear();
    }
}

impl Filter for ExactSelection {
    fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn matches(&self, item: &Item) -> bool {
        self.groups
            .iter()
            .all(|(group, wanted)| item.scalar(*group) == Some(wanted.as_str()))
    }
}

/// A selection under one of the two contracts
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Faceted(FacetSelection),
    Exact(ExactSelection),
}

impl Selection {
    pub fn contract(&self) -> FilterContract {
        match self {
            Selection::Faceted(_) => FilterContract::Faceted,
            Selection::Exact(_) => FilterContract::Exact,
        }
    }

    /// Empty selection under the same contract
    pub fn cleared(&self) -> Self {
        Self::empty(self.contract())
    }

    pub fn empty(contract: FilterContract) -> Self {
        match contract {
            FilterContract::Faceted => Selection::Faceted(FacetSelection::new()),
            FilterContract::Exact => Selection::Exact(ExactSelection::new()),
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Faceted(FacetSelection::new())
    }
}

impl Filter for Selection {
    fn is_empty(&self) -> bool {
        match self {
            Selection::Faceted(s) => s.is_empty(),
            Selection::Exact(s) => s.is_empty(),
        }
    }

    fn matches(&self, item: &Item) -> bool {
        match self {
            Selection::Faceted(s) => s.matches(item),
            Selection::Exact(s) => s.matches(item),
        }
    }
}
