use crate::geometry::{Pline, Segment, Style};

/// One result of a chaining run.
#[derive(Debug, Clone, PartialEq)]
pub enum Contour {
    /// A closed native curve (circle, closed arc, degenerate segment) or a
    /// lone input segment, passed through unchanged.
    Curve(Segment),
    /// A polyline, either rebuilt from segments or passed through.
    Pline(Pline),
}

impl Contour {
    /// Returns whether the contour is closed. Segments are judged with `tol`.
    #[must_use]
    pub fn is_closed(&self, tol: f64) -> bool {
        match self {
            Self::Curve(segment) => segment.is_closed(tol),
            Self::Pline(pline) => pline.closed,
        }
    }

    #[must_use]
    pub fn style(&self) -> &Style {
        match self {
            Self::Curve(segment) => segment.style(),
            Self::Pline(pline) => &pline.style,
        }
    }

    #[must_use]
    pub fn as_pline(&self) -> Option<&Pline> {
        match self {
            Self::Pline(pline) => Some(pline),
            Self::Curve(_) => None,
        }
    }

    /// Converts the contour to a polyline, re-expressing native curves.
    #[must_use]
    pub fn into_pline(self, tol: f64) -> Pline {
        match self {
            Self::Curve(segment) => segment.to_pline(tol),
            Self::Pline(pline) => pline,
        }
    }
}
