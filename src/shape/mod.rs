mod hatch;
mod region;

pub use hatch::{BoundaryEdge, Hatch, HatchLoop};
pub use region::Region;

use std::fmt;

use crate::error::Result;
use crate::geometry::{Pline, Segment, Style};

/// An input item that is not a primitive curve but decomposes into items.
pub trait Composite: fmt::Debug {
    /// Consumes the composite and returns the items it is made of.
    ///
    /// The result may be empty and may contain further composites.
    ///
    /// # Errors
    ///
    /// Returns an error if the composite holds geometry that cannot be
    /// turned into valid primitives.
    fn expand(self: Box<Self>) -> Result<Vec<Item>>;

    /// Fills absent style fields from the enclosing composite.
    fn inherit_style(&mut self, parent: &Style);

    /// Whether closed loops of zero area rebuilt from this composite are
    /// discarded.
    fn drops_flat_loops(&self) -> bool {
        false
    }
}

/// One entry of the collection handed to the chain builder.
#[derive(Debug)]
pub enum Item {
    Segment(Segment),
    Pline(Pline),
    Composite(Box<dyn Composite>),
}

impl Item {
    /// Wraps a composite.
    pub fn composite(composite: impl Composite + 'static) -> Self {
        Self::Composite(Box::new(composite))
    }

    /// Fills absent style fields from `parent`.
    #[must_use]
    pub fn inherit_style(self, parent: &Style) -> Self {
        match self {
            Self::Segment(segment) => {
                let style = segment.style().clone().or_inherit(parent);
                Self::Segment(segment.with_style(style))
            }
            Self::Pline(pline) => {
                let style = pline.style.clone().or_inherit(parent);
                Self::Pline(pline.with_style(style))
            }
            Self::Composite(mut composite) => {
                composite.inherit_style(parent);
                Self::Composite(composite)
            }
        }
    }
}

impl From<Segment> for Item {
    fn from(segment: Segment) -> Self {
        Self::Segment(segment)
    }
}

impl From<Pline> for Item {
    fn from(pline: Pline) -> Self {
        Self::Pline(pline)
    }
}

impl From<Region> for Item {
    fn from(region: Region) -> Self {
        Self::composite(region)
    }
}

impl From<Hatch> for Item {
    fn from(hatch: Hatch) -> Self {
        Self::composite(hatch)
    }
}
