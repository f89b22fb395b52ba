//! Catalog session
//!
//! Owns the per-page state (catalog, current selection, filtered result) and
//! drives filter → announce → diff → render through a [`GridPort`].
//!
//! Every filter run recomputes from the full selection, so when runs overlap
//! (an exit transition still pending) the last one decides the final grid.

use crate::announcer::{Announcer, LiveRegion};
use crate::card;
use crate::catalog::Catalog;
use crate::differ::reconcile;
use crate::filter::{self, FilterContract, Selection};
use crate::types::{Item, ItemId};
use crate::viewport::{Animator, GridPort};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

struct State<P, R: LiveRegion> {
    catalog: Catalog,
    selection: Selection,
    filtered: Vec<Item>,
    /// Cards handed to an exit transition that has not completed yet
    exiting: HashSet<ItemId>,
    grid: P,
    announcer: Announcer<R>,
}

impl<P: GridPort, R: LiveRegion> State<P, R> {
    /// Bring the grid in line with `filtered`; returns ids to fade in
    fn sync_grid(&mut self) -> Vec<ItemId> {
        let rendered = self.grid.rendered_ids();
        let plan = reconcile(&rendered, &self.filtered);

        for id in &plan.to_remove {
            self.grid.remove_card(*id);
        }

        // Cards that started exiting but belong to the latest result again
        let mut entering: Vec<ItemId> = self
            .exiting
            .drain()
            .filter(|id| rendered.contains(id) && !plan.to_remove.contains(id))
            .collect();

        self.grid.set_no_results(plan.empty);
        if plan.empty {
            return entering;
        }

        for insertion in &plan.to_insert {
            let view = card::build(&insertion.item);
            self.grid.insert_card(&insertion.item, &view, insertion.before);
            entering.push(insertion.item.id);
        }

        entering
    }
}

/// Session handle; clones share the same state
pub struct CatalogSession<P: GridPort, R: LiveRegion> {
    state: Rc<RefCell<State<P, R>>>,
    animator: Rc<dyn Animator>,
}

impl<P: GridPort, R: LiveRegion> Clone for CatalogSession<P, R> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
            animator: Rc::clone(&self.animator),
        }
    }
}

impl<P: GridPort + 'static, R: LiveRegion + 'static> CatalogSession<P, R> {
    pub fn new(
        catalog: Catalog,
        grid: P,
        region: R,
        animator: Rc<dyn Animator>,
        contract: FilterContract,
    ) -> Self {
        let filtered = catalog.all().to_vec();
        let state = State {
            catalog,
            selection: Selection::empty(contract),
            filtered,
            exiting: HashSet::new(),
            grid,
            announcer: Announcer::new(region),
        };
        Self {
            state: Rc::new(RefCell::new(state)),
            animator,
        }
    }

    /// First render of the full catalog, with entrance animation
    pub fn render_initial(&self) {
        Self::settle(&self.state, self.animator.as_ref());
    }

    /// Filter with `selection` and reconcile the grid; returns the result count
    pub fn apply(&self, selection: Selection) -> usize {
        let (outgoing, count) = {
            let mut state = self.state.borrow_mut();
            let filtered = filter::apply(&selection, state.catalog.all());
            state.selection = selection;
            state.filtered = filtered;

            let count = state.filtered.len();
            state.announcer.announce(count);

            let plan = reconcile(&state.grid.rendered_ids(), &state.filtered);
            state.exiting.extend(plan.to_remove.iter().copied());
            (plan.to_remove, count)
        };

        if outgoing.is_empty() {
            Self::settle(&self.state, self.animator.as_ref());
        } else {
            let state = Rc::clone(&self.state);
            let animator = Rc::clone(&self.animator);
            self.animator.fade_out(
                &outgoing,
                Box::new(move || Self::settle(&state, animator.as_ref())),
            );
        }

        count
    }

    /// Drop every active filter
    pub fn clear(&self) -> usize {
        let cleared = self.state.borrow().selection.cleared();
        self.apply(cleared)
    }

    fn settle(state: &Rc<RefCell<State<P, R>>>, animator: &dyn Animator) {
        let entering = state.borrow_mut().sync_grid();
        if !entering.is_empty() {
            animator.fade_in(&entering);
        }
    }
}

#[cfg(test)]
impl<P: GridPort, R: LiveRegion> CatalogSession<P, R> {
    fn selection(&self) -> Selection {
        self.state.borrow().selection.clone()
    }

    fn filtered_ids(&self) -> Vec<ItemId> {
        self.state.borrow().filtered.iter().map(|i| i.id).collect()
    }

    fn item(&self, id: ItemId) -> Option<Item> {
        self.state.borrow().catalog.by_id(id).cloned()
    }

    fn catalog_len(&self) -> usize {
        self.state.borrow().catalog.len()
    }

    fn with_grid<T>(&self, f: impl FnOnce(&P) -> T) -> T {
        f(&self.state.borrow().grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardView;
    use crate::filter::FacetSelection;
    use crate::types::FacetGroup;
    use crate::viewport::NoAnimation;

    #[derive(Default)]
    struct FakeGrid {
        cards: Vec<ItemId>,
        inserted: Vec<ItemId>,
        removed: Vec<ItemId>,
        no_results: bool,
    }

    impl GridPort for FakeGrid {
        fn rendered_ids(&self) -> Vec<ItemId> {
            self.cards.clone()
        }

        fn insert_card(&mut self, item: &Item, card: &CardView, before: Option<ItemId>) {
            assert_eq!(item.id, card.id);
            let pos = before
                .and_then(|b| self.cards.iter().position(|id| *id == b))
                .unwrap_or(self.cards.len());
            self.cards.insert(pos, item.id);
            self.inserted.push(item.id);
        }

        fn remove_card(&mut self, id: ItemId) {
            self.cards.retain(|c| *c != id);
            self.removed.push(id);
        }

        fn set_no_results(&mut self, visible: bool) {
            self.no_results = visible;
        }
    }

    #[derive(Default)]
    struct FakeRegion {
        texts: RefCell<Vec<String>>,
    }

    impl LiveRegion for FakeRegion {
        fn set_text(&self, text: &str) {
            self.texts.borrow_mut().push(text.to_string());
        }

        fn clear_after(&self, _delay_ms: u32) {}
    }

    /// Holds exit completions until the test flushes them
    #[derive(Default)]
    struct DeferredAnimator {
        pending: RefCell<Vec<Box<dyn FnOnce()>>>,
        faded_in: RefCell<Vec<ItemId>>,
    }

    impl DeferredAnimator {
        fn flush(&self) {
            let pending: Vec<_> = self.pending.borrow_mut().drain(..).collect();
            for done in pending {
                done();
            }
        }
    }

    impl Animator for DeferredAnimator {
        fn fade_in(&self, ids: &[ItemId]) {
            self.faded_in.borrow_mut().extend_from_slice(ids);
        }

        fn fade_out(&self, _ids: &[ItemId], on_complete: Box<dyn FnOnce()>) {
            self.pending.borrow_mut().push(on_complete);
        }

        fn open_transition(&self) {}

        fn close_transition(&self, on_complete: Box<dyn FnOnce()>) {
            self.pending.borrow_mut().push(on_complete);
        }
    }

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"[
                {"id": 1, "titulo": "Uno", "usuarios": ["analyst"], "uso": ["ideas"], "tipo": ["guías"]},
                {"id": 2, "titulo": "Dos", "usuarios": ["designer"], "uso": ["ideas"], "tipo": ["infografías"]},
                {"id": 3, "titulo": "Tres", "usuarios": ["analyst", "designer"], "uso": ["tests"], "tipo": ["guías"]}
            ]"#,
        )
        .expect("catalog parse failed")
    }

    fn users(value: &str) -> Selection {
        Selection::Faceted(FacetSelection::new().with(FacetGroup::Users, value))
    }

    fn session_with(animator: Rc<dyn Animator>) -> CatalogSession<FakeGrid, FakeRegion> {
        let session = CatalogSession::new(
            catalog(),
            FakeGrid::default(),
            FakeRegion::default(),
            animator,
            FilterContract::Faceted,
        );
        session.render_initial();
        session
    }

    fn cards(session: &CatalogSession<FakeGrid, FakeRegion>) -> Vec<ItemId> {
        session.with_grid(|g| g.cards.clone())
    }

    #[test]
    fn test_initial_render() {
        let animator = Rc::new(DeferredAnimator::default());
        let session = session_with(animator.clone());
        assert_eq!(cards(&session), vec![1, 2, 3]);
        assert_eq!(*animator.faded_in.borrow(), vec![1, 2, 3]);
        assert_eq!(session.catalog_len(), 3);
    }

    #[test]
    fn test_filter_then_clear() {
        let session = session_with(Rc::new(NoAnimation));

        assert_eq!(session.apply(users("analyst")), 2);
        assert_eq!(cards(&session), vec![1, 3]);
        assert_eq!(session.filtered_ids(), vec![1, 3]);

        assert_eq!(session.clear(), 3);
        assert_eq!(cards(&session), vec![1, 2, 3]);
    }

    #[test]
    fn test_retained_cards_are_not_rebuilt() {
        let session = session_with(Rc::new(NoAnimation));
        session.apply(users("analyst"));
        session.clear();

        let inserted = session.with_grid(|g| g.inserted.clone());
        // 1 and 3 were inserted once (initial render); only 2 came back.
        assert_eq!(inserted, vec![1, 2, 3, 2]);
        assert_eq!(session.with_grid(|g| g.removed.clone()), vec![2]);
    }

    #[test]
    fn test_same_selection_twice_is_noop() {
        let session = session_with(Rc::new(NoAnimation));
        session.apply(users("designer"));
        let before = session.with_grid(|g| (g.inserted.len(), g.removed.len()));

        session.apply(users("designer"));
        let after = session.with_grid(|g| (g.inserted.len(), g.removed.len()));
        assert_eq!(before, after);
    }

    #[test]
    fn test_announces_every_run() {
        let session = session_with(Rc::new(NoAnimation));
        session.apply(users("analyst"));
        session.apply(users("nobody"));

        let texts = session.state.borrow().announcer.region().texts.borrow().clone();
        assert_eq!(texts.len(), 2);
        assert!(texts[0].contains("Se encontraron 2"));
        assert!(texts[1].starts_with("No se encontraron"));
    }

    #[test]
    fn test_empty_result_shows_no_results() {
        let session = session_with(Rc::new(NoAnimation));
        assert_eq!(session.apply(users("nobody")), 0);
        assert!(cards(&session).is_empty());
        assert!(session.with_grid(|g| g.no_results));

        session.clear();
        assert!(!session.with_grid(|g| g.no_results));
        assert_eq!(cards(&session), vec![1, 2, 3]);
    }

    #[test]
    fn test_deferred_exit_converges_like_no_animation() {
        let animator = Rc::new(DeferredAnimator::default());
        let animated = session_with(animator.clone());
        let plain = session_with(Rc::new(NoAnimation));

        animated.apply(users("designer"));
        // Exit pending: card 1 still mounted
        assert_eq!(cards(&animated), vec![1, 2, 3]);

        animator.flush();
        plain.apply(users("designer"));
        assert_eq!(cards(&animated), cards(&plain));
        assert_eq!(cards(&animated), vec![2, 3]);
    }

    #[test]
    fn test_insertion_without_removal_skips_exit() {
        let animator = Rc::new(DeferredAnimator::default());
        let session = session_with(animator.clone());
        session.apply(users("analyst"));
        animator.flush();

        session.clear();
        // No removal: insertion happened without waiting on the animator
        assert!(animator.pending.borrow().is_empty());
        assert_eq!(cards(&session), vec![1, 2, 3]);
    }

    #[test]
    fn test_last_run_wins_while_exit_pending() {
        let animator = Rc::new(DeferredAnimator::default());
        let session = session_with(animator.clone());

        session.apply(users("designer")); // exits 1
        session.apply(users("analyst")); // exits 2, wants 1 back
        animator.flush();

        assert_eq!(cards(&session), vec![1, 3]);
        // Card 1 was faded out and kept, so it fades back in
        assert!(animator.faded_in.borrow().contains(&1));
    }

    #[test]
    fn test_item_lookup() {
        let session = session_with(Rc::new(NoAnimation));
        assert_eq!(session.item(2).map(|i| i.title), Some("Dos".to_string()));
        assert!(session.item(7).is_none());
        assert_eq!(session.selection().contract(), FilterContract::Faceted);
    }
}
