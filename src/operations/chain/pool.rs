use slotmap::SlotMap;

use crate::error::Result;
use crate::geometry::{Segment, Style};
use crate::math::{coincident, Point2};
use crate::shape::{Composite, Item};

use super::contour::Contour;

slotmap::new_key_type! {
    /// Identifier of an item in the working pool.
    struct ItemKey;
}

/// The not-yet-consumed items of one chaining run.
///
/// Keys are only handed out while the pool is built, so iterating the slot
/// map visits items in input order.
#[derive(Debug, Default)]
pub(super) struct WorkingPool {
    items: SlotMap<ItemKey, Item>,
}

impl WorkingPool {
    /// Builds the pool. Open polylines are exploded into their segments in
    /// place so they can join neighbouring segments.
    pub(super) fn new(items: Vec<Item>) -> Result<Self> {
        let mut pool = Self::default();
        for item in items {
            match item {
                Item::Pline(pline) if !pline.closed => {
                    for segment in pline.segments()? {
                        pool.items.insert(Item::Segment(segment));
                    }
                }
                item => {
                    pool.items.insert(item);
                }
            }
        }
        Ok(pool)
    }

    pub(super) fn len(&self) -> usize {
        self.items.len()
    }

    pub(super) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every closed segment and closed polyline, in pool order.
    pub(super) fn take_closed(&mut self, tol: f64) -> Vec<Contour> {
        let keys: Vec<ItemKey> = self
            .items
            .iter()
            .filter(|(_, item)| match item {
                Item::Segment(segment) => segment.is_closed(tol),
                Item::Pline(pline) => pline.closed,
                Item::Composite(_) => false,
            })
            .map(|(key, _)| key)
            .collect();

        keys.into_iter()
            .filter_map(|key| match self.items.remove(key)? {
                Item::Segment(segment) => Some(Contour::Curve(segment)),
                Item::Pline(pline) => Some(Contour::Pline(pline)),
                Item::Composite(_) => None,
            })
            .collect()
    }

    /// Number of segments still in the pool.
    pub(super) fn open_count(&self) -> usize {
        self.items
            .values()
            .filter(|item| matches!(item, Item::Segment(_)))
            .count()
    }

    /// Removes and returns the first segment in pool order.
    pub(super) fn take_first_open(&mut self) -> Option<Segment> {
        let key = self
            .items
            .iter()
            .find(|(_, item)| matches!(item, Item::Segment(_)))
            .map(|(key, _)| key)?;
        self.take_segment(key)
    }

    /// Removes the first segment with an endpoint coincident with `frontier`.
    ///
    /// With `layer` set, only segments on the same layer are considered.
    /// Returns the segment and whether it is travelled end to start.
    pub(super) fn take_adjacent(
        &mut self,
        frontier: &Point2,
        layer: Option<&Style>,
        tol: f64,
    ) -> Option<(Segment, bool)> {
        let (key, reversed) = self.items.iter().find_map(|(key, item)| {
            let Item::Segment(segment) = item else {
                return None;
            };
            if layer.is_some_and(|style| !style.same_layer(segment.style())) {
                return None;
            }
            if coincident(&segment.start(), frontier, tol) {
                Some((key, false))
            } else if coincident(&segment.end(), frontier, tol) {
                Some((key, true))
            } else {
                None
            }
        })?;
        self.take_segment(key).map(|segment| (segment, reversed))
    }

    /// Removes every composite, in pool order.
    pub(super) fn take_composites(&mut self) -> Vec<Box<dyn Composite>> {
        let keys: Vec<ItemKey> = self
            .items
            .iter()
            .filter(|(_, item)| matches!(item, Item::Composite(_)))
            .map(|(key, _)| key)
            .collect();

        keys.into_iter()
            .filter_map(|key| match self.items.remove(key)? {
                Item::Composite(composite) => Some(composite),
                Item::Segment(_) | Item::Pline(_) => None,
            })
            .collect()
    }

    fn take_segment(&mut self, key: ItemKey) -> Option<Segment> {
        match self.items.remove(key)? {
            Item::Segment(segment) => Some(segment),
            Item::Pline(_) | Item::Composite(_) => None,
        }
    }
}
