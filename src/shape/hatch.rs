use std::f64::consts::TAU;

use crate::error::Result;
use crate::geometry::{Arc, Circle, Line, Pline, Segment, Style};
use crate::math::{coincident, Point2, DEFAULT_CHAIN_TOLERANCE};

use super::{Composite, Item, Region};

/// Angular span below which (or within this of a full turn) a boundary arc
/// is treated as a full circle.
const FULL_TURN_SLACK: f64 = 1e-5;

/// One edge of an edge-defined hatch boundary loop.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryEdge {
    Line {
        start: Point2,
        end: Point2,
    },
    /// Circular arc travelled from `start_angle` to `end_angle`, clockwise
    /// when `clockwise` is set.
    Arc {
        center: Point2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
    },
}

impl BoundaryEdge {
    fn to_segment(&self) -> Result<Segment> {
        match *self {
            Self::Line { start, end } => Ok(Segment::new(Line::new(start, end)?)),
            Self::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                clockwise,
            } => {
                let span = (end_angle - start_angle).abs();
                if span < FULL_TURN_SLACK || span > TAU - FULL_TURN_SLACK {
                    return Ok(Segment::new(Circle::new(center, radius)?));
                }
                let arc = if clockwise {
                    Arc::clockwise(center, radius, start_angle, end_angle)?
                } else {
                    Arc::new(center, radius, start_angle, end_angle)?
                };
                Ok(Segment::new(arc))
            }
        }
    }
}

/// A single boundary loop of a hatch.
#[derive(Debug, Clone, PartialEq)]
pub enum HatchLoop {
    /// Loop stored directly as a bulge polyline.
    Polyline(Pline),
    /// Loop stored as loose edges that still need chaining.
    Edges(Vec<BoundaryEdge>),
}

/// A filled area bounded by one or more loops.
///
/// Everything a hatch expands to takes the hatch's layer and colour.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hatch {
    loops: Vec<HatchLoop>,
    style: Style,
}

impl Hatch {
    #[must_use]
    pub fn new(loops: Vec<HatchLoop>) -> Self {
        Self {
            loops,
            style: Style::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Composite for Hatch {
    fn expand(self: Box<Self>) -> Result<Vec<Item>> {
        let Hatch { loops, style } = *self;
        let mut items = Vec::with_capacity(loops.len());

        for boundary in loops {
            match boundary {
                HatchLoop::Polyline(pline) => {
                    items.push(Item::Pline(close_loop(pline, &style)));
                }
                HatchLoop::Edges(edges) => {
                    let segments = edges
                        .iter()
                        .map(|edge| {
                            let segment = edge.to_segment()?;
                            let edge_style = segment.style().clone().overridden_by(&style);
                            Ok(Item::Segment(segment.with_style(edge_style)))
                        })
                        .collect::<Result<Vec<_>>>()?;
                    // Each loop chains on its own.
                    items.push(Item::composite(Region::new(segments)));
                }
            }
        }

        Ok(items)
    }

    fn inherit_style(&mut self, parent: &Style) {
        self.style = std::mem::take(&mut self.style).or_inherit(parent);
    }
}

/// Marks a polyline loop closed, dropping a repeated closing vertex.
fn close_loop(mut pline: Pline, hatch_style: &Style) -> Pline {
    if pline.vertices.len() > 2 {
        let first = pline.vertices[0].point();
        let repeats_first = pline
            .vertices
            .last()
            .is_some_and(|last| coincident(&last.point(), &first, DEFAULT_CHAIN_TOLERANCE));
        if repeats_first {
            pline.vertices.pop();
        }
    }
    pline.closed = true;
    pline.style = pline.style.overridden_by(hatch_style);
    pline
}
