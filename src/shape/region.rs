use crate::error::Result;
use crate::geometry::Style;

use super::{Composite, Item};

/// A bounded planar area described by its boundary items.
///
/// Expanding a region yields its boundary; the chain builder then rebuilds
/// the boundary loops. Items without a layer, colour or line weight of their
/// own take the region's. Loops enclosing no area are dropped.
#[derive(Debug, Default)]
pub struct Region {
    boundary: Vec<Item>,
    style: Style,
}

impl Region {
    #[must_use]
    pub fn new(boundary: Vec<Item>) -> Self {
        Self {
            boundary,
            style: Style::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Adds a boundary item.
    pub fn push(&mut self, item: impl Into<Item>) {
        self.boundary.push(item.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boundary.is_empty()
    }
}

impl Composite for Region {
    fn expand(self: Box<Self>) -> Result<Vec<Item>> {
        let Region { boundary, style } = *self;
        Ok(boundary
            .into_iter()
            .map(|item| item.inherit_style(&style))
            .collect())
    }

    fn inherit_style(&mut self, parent: &Style) {
        self.style = std::mem::take(&mut self.style).or_inherit(parent);
    }

    fn drops_flat_loops(&self) -> bool {
        true
    }
}
