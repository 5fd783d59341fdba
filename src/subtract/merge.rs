use crate::polyhedron::Polyhedron;
use std::fmt::Debug;

/// Post-pass over subtraction fragments.
///
/// Fragments are returned as they are. Merging adjacent fragments into fewer
/// convex pieces would go here; whatever it does must keep the union of the
/// fragments unchanged.
pub fn merge_fragments<S: Clone + Send + Sync + Debug>(
    fragments: Vec<Polyhedron<S>>,
) -> Vec<Polyhedron<S>> {
    fragments
}
