use tracing::{debug, trace};

use crate::geometry::{Pline, PlineVertex, Segment};
use crate::math::coincident;

use super::options::ChainOptions;
use super::pool::WorkingPool;

/// Builds one polyline starting from `seed`, consuming every segment that
/// chains onto either of its ends.
///
/// The result is closed when its ends meet; otherwise it is returned open.
pub(super) fn build_chain(seed: &Segment, pool: &mut WorkingPool, options: &ChainOptions) -> Pline {
    let mut pline = Pline {
        vertices: vec![
            PlineVertex::at(&seed.start(), seed.bulge(false)),
            PlineVertex::at(&seed.end(), 0.0),
        ],
        closed: false,
        style: seed.style().clone(),
    };

    extend(&mut pline, pool, options);

    // Grow from the seed's start by walking the chain backwards.
    let mut pline = pline.reversed();
    extend(&mut pline, pool, options);
    let mut pline = pline.reversed();

    close_if_ends_meet(&mut pline, options.tolerance);
    debug!(
        vertices = pline.vertices.len(),
        closed = pline.closed,
        "chain finished"
    );
    pline
}

/// Appends segments to the free end of `pline` until none connects.
///
/// Every pass over the pool either consumes a segment or stops growth, so
/// disconnected input cannot loop forever.
fn extend(pline: &mut Pline, pool: &mut WorkingPool, options: &ChainOptions) {
    while pool.open_count() > 0 {
        let Some(frontier) = pline.vertices.last().map(PlineVertex::point) else {
            return;
        };
        let layer = options.same_layer_only.then_some(&pline.style);
        let Some((segment, reversed)) = pool.take_adjacent(&frontier, layer, options.tolerance)
        else {
            return;
        };

        let far = if reversed { segment.start() } else { segment.end() };
        if let Some(last) = pline.vertices.last_mut() {
            last.bulge = segment.bulge(reversed);
        }
        pline.vertices.push(PlineVertex::at(&far, 0.0));
        trace!(x = far.x, y = far.y, reversed, "segment attached");
    }
}

/// Drops a final vertex that repeats the first one and marks the polyline closed.
fn close_if_ends_meet(pline: &mut Pline, tol: f64) {
    if pline.vertices.len() < 3 {
        return;
    }
    let first = pline.vertices[0].point();
    let ends_meet = pline
        .vertices
        .last()
        .is_some_and(|last| coincident(&last.point(), &first, tol));
    if ends_meet {
        pline.vertices.pop();
        pline.closed = true;
    }
}
