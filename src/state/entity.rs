use crate::graph::PathLocation;
use crate::label::{Label, LabelSet};
use crate::state::StateId;

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::sync::Arc;

/// All candidate states of a single time step, in candidate order.
pub type Column = Vec<State>;

/// What one expansion left behind on a state: the whole label arena
/// and the per-right-candidate index into it.
#[derive(Debug)]
struct RouteCache {
    labelset: Arc<LabelSet>,
    labels: FxHashMap<StateId, usize>,
}

/// A candidate at one time step, carrying its routed-label cache.
///
/// The cache starts empty and is populated exactly once, when the
/// transition model first routes out of this state; every later
/// transition out of it is answered from the cache. Interior
/// mutability lets the matcher hold its columns immutably while the
/// model memoizes; the matcher is single threaded, so the `RefCell`
/// only guards against re-entrancy.
#[derive(Debug)]
pub struct State {
    id: StateId,
    candidate: PathLocation,
    route: RefCell<Option<RouteCache>>,
}

impl State {
    pub fn new(id: StateId, candidate: PathLocation) -> Self {
        Self {
            id,
            candidate,
            route: RefCell::new(None),
        }
    }

    pub fn id(&self) -> StateId {
        self.id
    }

    pub fn candidate(&self) -> &PathLocation {
        &self.candidate
    }

    /// Whether this state has been routed towards its right column.
    pub fn routed(&self) -> bool {
        self.route.borrow().is_some()
    }

    /// Stores the outcome of this state's expansion: `stateids` are
    /// the right-column candidates that were routed, in destination
    /// order (location index 1 onwards); `results` is the expander's
    /// location-index to label-index map; `labelset` is the arena both
    /// index into.
    ///
    /// Flips `routed` exactly once. Routing a state twice is a caller
    /// bug, surfaced by the debug assertion.
    pub(crate) fn set_route(
        &self,
        stateids: &[StateId],
        results: &FxHashMap<usize, usize>,
        labelset: Arc<LabelSet>,
    ) {
        debug_assert!(!self.routed(), "state {} routed twice", self.id);

        let labels = stateids
            .iter()
            .enumerate()
            .filter_map(|(offset, stateid)| {
                // Location 0 is the origin; destinations follow.
                results.get(&(offset + 1)).map(|&label| (*stateid, label))
            })
            .collect();

        *self.route.borrow_mut() = Some(RouteCache { labelset, labels });
    }

    /// The best label that reached `rhs` from this state, if routing
    /// got there within budget.
    pub fn last_label(&self, rhs: StateId) -> Option<Label> {
        let route = self.route.borrow();
        let cache = route.as_ref()?;

        cache.labels.get(&rhs).map(|&index| cache.labelset[index])
    }

    /// The label arena produced when this state was routed.
    pub fn labelset(&self) -> Option<Arc<LabelSet>> {
        self.route
            .borrow()
            .as_ref()
            .map(|cache| Arc::clone(&cache.labelset))
    }
}
