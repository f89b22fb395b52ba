//! Render differ
//!
//! Computes the minimal card removals and insertions between the currently
//! rendered card keys and a new filtered result. Cards present in both stay
//! mounted and untouched, so focus and entrance animations are preserved.

use crate::types::{Item, ItemId};
use std::collections::HashSet;

/// One card to insert
#[derive(Debug, Clone, PartialEq)]
pub struct Insertion {
    pub item: Item,
    /// Rendered card to insert in front of; `None` appends.
    ///
    /// Always a retained card that follows this item in the filtered order,
    /// so inserting front-to-back keeps grid order equal to filtered order.
    pub before: Option<ItemId>,
}

/// Result of [`reconcile`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderPlan {
    /// Rendered ids no longer in the result, in rendered order
    pub to_remove: Vec<ItemId>,
    /// New items, in filtered order
    pub to_insert: Vec<Insertion>,
    /// The filtered result is empty
    pub empty: bool,
}

impl RenderPlan {
    /// Nothing to remove and nothing to insert
    pub fn is_noop(&self) -> bool {
        self.to_remove.is_empty() && self.to_insert.is_empty()
    }

    pub fn insert_ids(&self) -> Vec<ItemId> {
        self.to_insert.iter().map(|i| i.item.id).collect()
    }
}

/// Diff rendered keys against the next filtered items.
///
/// - `to_remove` = previous − keys(next)
/// - `to_insert` = next items whose id is not in previous, order preserved
pub fn reconcile(previous: &[ItemId], next: &[Item]) -> RenderPlan {
    let next_ids: HashSet<ItemId> = next.iter().map(|item| item.id).collect();
    let rendered: HashSet<ItemId> = previous.iter().copied().collect();

    let to_remove = previous
        .iter()
        .copied()
        .filter(|id| !next_ids.contains(id))
        .collect();

    // Walk backwards so each insertion knows the next retained card after it.
    let mut anchor = None;
    let mut to_insert = Vec::new();
    for item in next.iter().rev() {
        if rendered.contains(&item.id) {
            anchor = Some(item.id);
        } else {
            to_insert.push(Insertion {
                item: item.clone(),
                before: anchor,
            });
        }
    }
    to_insert.reverse();

    RenderPlan {
        to_remove,
        to_insert,
        empty: next.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(ids: &[u32]) -> Vec<Item> {
        ids.iter()
            .map(|&id| Item {
                id,
                title: format!("#{}", id),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_initial_render_inserts_everything() {
        let plan = reconcile(&[], &items(&[1, 2, 3]));
        assert!(plan.to_remove.is_empty());
        assert_eq!(plan.insert_ids(), vec![1, 2, 3]);
        assert!(plan.to_insert.iter().all(|i| i.before.is_none()));
        assert!(!plan.empty);
    }

    #[test]
    fn test_removal_only() {
        let plan = reconcile(&[1, 2, 3], &items(&[1, 3]));
        assert_eq!(plan.to_remove, vec![2]);
        assert!(plan.to_insert.is_empty());
    }

    #[test]
    fn test_unchanged_is_noop() {
        let next = items(&[1, 3]);
        let rendered: Vec<u32> = next.iter().map(|i| i.id).collect();
        let plan = reconcile(&rendered, &next);
        assert!(plan.is_noop());
    }

    #[test]
    fn test_mixed_insert_and_remove() {
        let plan = reconcile(&[1, 3], &items(&[2, 3, 4]));
        assert_eq!(plan.to_remove, vec![1]);
        assert_eq!(plan.insert_ids(), vec![2, 4]);
        assert_eq!(plan.to_insert[0].before, Some(3));
        assert_eq!(plan.to_insert[1].before, None);
    }

    #[test]
    fn test_consecutive_insertions_share_anchor() {
        let plan = reconcile(&[4], &items(&[1, 2, 3, 4, 5]));
        let anchors: Vec<Option<u32>> = plan.to_insert.iter().map(|i| i.before).collect();
        assert_eq!(anchors, vec![Some(4), Some(4), Some(4), None]);
    }

    #[test]
    fn test_empty_result() {
        let plan = reconcile(&[1, 2], &[]);
        assert_eq!(plan.to_remove, vec![1, 2]);
        assert!(plan.to_insert.is_empty());
        assert!(plan.empty);
    }

    #[test]
    fn test_remove_keeps_rendered_order() {
        let plan = reconcile(&[5, 1, 9, 2], &items(&[1]));
        assert_eq!(plan.to_remove, vec![5, 9, 2]);
    }

    /// Applying the plan to a simulated grid yields exactly the filtered order.
    #[test]
    fn test_applied_plan_matches_filtered_order() {
        let mut grid: Vec<u32> = vec![2, 4, 6];
        let next = items(&[1, 2, 3, 6, 7]);
        let plan = reconcile(&grid, &next);

        grid.retain(|id| !plan.to_remove.contains(id));
        for insertion in &plan.to_insert {
            let pos = insertion
                .before
                .and_then(|b| grid.iter().position(|id| *id == b))
                .unwrap_or(grid.len());
            grid.insert(pos, insertion.item.id);
        }

        assert_eq!(grid, vec![1, 2, 3, 6, 7]);
    }
}
