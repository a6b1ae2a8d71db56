mod contour;
mod grow;
mod options;
mod pool;

pub use contour::Contour;
pub use options::{ChainOptions, DEFAULT_MAX_DEPTH};

use tracing::{debug, debug_span};

use crate::error::{OperationError, Result};
use crate::math::TOLERANCE;
use crate::shape::Item;

use pool::WorkingPool;

/// Joins loose line and arc segments into polylines by matching endpoints.
///
/// Closed curves pass through unchanged, open segments are chained into
/// polylines, and composites (regions, hatches) are expanded and chained
/// recursively. A chain that cannot be closed is still returned, open.
#[derive(Debug)]
pub struct ChainCurves {
    items: Vec<Item>,
    options: ChainOptions,
}

impl ChainCurves {
    /// Creates a new chaining operation with default options.
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            options: ChainOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ChainOptions) -> Self {
        self.options = options;
        self
    }

    /// Executes the chaining, consuming the input items.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` for an unusable tolerance,
    /// `OperationError::NestingTooDeep` when composites nest deeper than the
    /// configured limit, and any error raised while expanding a composite.
    pub fn execute(self) -> Result<Vec<Contour>> {
        self.options.validate()?;
        chain_items(self.items, &self.options, 0)
    }
}

fn chain_items(mut items: Vec<Item>, options: &ChainOptions, depth: usize) -> Result<Vec<Contour>> {
    if depth > options.max_depth {
        return Err(OperationError::NestingTooDeep {
            limit: options.max_depth,
        }
        .into());
    }

    let _span = debug_span!("chain", depth, items = items.len()).entered();

    // A lone curve has nothing to join with.
    if items.len() == 1 && !matches!(items[0], Item::Composite(_)) {
        return Ok(match items.pop() {
            Some(Item::Segment(segment)) => vec![Contour::Curve(segment)],
            Some(Item::Pline(pline)) => vec![Contour::Pline(pline)],
            Some(Item::Composite(_)) | None => Vec::new(),
        });
    }

    let mut pool = WorkingPool::new(items)?;
    let mut output = Vec::new();

    while !pool.is_empty() {
        output.extend(pool.take_closed(options.tolerance));

        if let Some(seed) = pool.take_first_open() {
            output.push(Contour::Pline(grow::build_chain(&seed, &mut pool, options)));
        }

        for composite in pool.take_composites() {
            debug!(remaining = pool.len(), "expanding composite");
            let drop_flat = composite.drops_flat_loops();
            let contours = chain_items(composite.expand()?, options, depth + 1)?;
            output.extend(
                contours
                    .into_iter()
                    .filter(|contour| !(drop_flat && is_flat_loop(contour))),
            );
        }
    }

    Ok(output)
}

fn is_flat_loop(contour: &Contour) -> bool {
    match contour {
        Contour::Pline(pline) if pline.closed => {
            let flat = pline.area().abs() < TOLERANCE;
            if flat {
                debug!(vertices = pline.vertices.len(), "dropping zero-area loop");
            }
            flat
        }
        Contour::Pline(_) | Contour::Curve(_) => false,
    }
}
