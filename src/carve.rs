//! Carving: subtracting one brush from many.

use crate::polyhedron::{Polyhedron, PolyhedronCallback};
use std::fmt::Debug;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Subtract `subtrahend` from every minuend, one fragment list per minuend
/// in input order.
#[cfg(not(feature = "parallel"))]
pub fn carve<S, C>(
    minuends: &[Polyhedron<S>],
    subtrahend: &Polyhedron<S>,
    callback: &C,
) -> Vec<Vec<Polyhedron<S>>>
where
    S: Clone + Send + Sync + Debug,
    C: PolyhedronCallback<S>,
{
    let carved: Vec<Vec<Polyhedron<S>>> = minuends
        .iter()
        .map(|minuend| minuend.subtract_with(subtrahend, callback))
        .collect();
    debug!(
        minuends = minuends.len(),
        fragments = carved.iter().map(Vec::len).sum::<usize>(),
        "carved"
    );
    carved
}

/// Subtract `subtrahend` from every minuend, one fragment list per minuend
/// in input order.
#[cfg(feature = "parallel")]
pub fn carve<S, C>(
    minuends: &[Polyhedron<S>],
    subtrahend: &Polyhedron<S>,
    callback: &C,
) -> Vec<Vec<Polyhedron<S>>>
where
    S: Clone + Send + Sync + Debug,
    C: PolyhedronCallback<S> + Sync,
{
    let carved: Vec<Vec<Polyhedron<S>>> = minuends
        .par_iter()
        .map(|minuend| minuend.subtract_with(subtrahend, callback))
        .collect();
    debug!(
        minuends = minuends.len(),
        fragments = carved.iter().map(Vec::len).sum::<usize>(),
        "carved"
    );
    carved
}
