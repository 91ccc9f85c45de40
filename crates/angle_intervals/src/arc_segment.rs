use std::cmp::Ordering;

use angles::tolerance::about_eq;
use getset::CopyGetters;
use ordered_float::OrderedFloat;

use crate::bool_with_partial::BoolWithPartial;
use crate::relative_interval_location::RelativeIntervalLocation;

/// A linear (non-wrapping) piece of an arc, bounds in radians.
///
/// Canonical segments of an [`AngleInterval`](crate::AngleInterval) lie in `[0, 2π]`, and the
/// seam point is always carried by the `0` side: a piece that runs up to the seam ends at an
/// open `2π`.
#[derive(Debug, Copy, Clone, PartialEq, CopyGetters)]
#[get_copy = "pub"]
pub struct ArcSegment {
    start: f64,
    end: f64,
    start_closed: bool,
    end_closed: bool,
}

impl ArcSegment {
    pub fn new(start: f64, end: f64, start_closed: bool, end_closed: bool) -> Self {
        ArcSegment {
            start,
            end,
            start_closed,
            end_closed,
        }
    }

    /// No point satisfies the bounds. NaN bounds make a segment empty.
    pub fn is_empty(&self) -> bool {
        if about_eq(self.start, self.end) {
            !(self.start_closed && self.end_closed)
        } else {
            !(self.start < self.end)
        }
    }

    pub fn shifted(&self, offset: f64) -> Self {
        Self::new(
            self.start + offset,
            self.end + offset,
            self.start_closed,
            self.end_closed,
        )
    }

    pub fn locate(&self, x: f64) -> RelativeIntervalLocation {
        if about_eq(x, self.start) {
            RelativeIntervalLocation::Start
        } else if about_eq(x, self.end) {
            RelativeIntervalLocation::End
        } else if self.start < x && x < self.end {
            RelativeIntervalLocation::During
        } else if x < self.start {
            RelativeIntervalLocation::Before
        } else {
            RelativeIntervalLocation::After
        }
    }

    pub fn contains(&self, x: f64) -> bool {
        self.locate(x)
            .is_covered(self.start_closed, self.end_closed)
    }

    /// Sort order for sweeps: by start, closed starts first on ties.
    pub fn start_order(a: &Self, b: &Self) -> Ordering {
        OrderedFloat(a.start)
            .cmp(&OrderedFloat(b.start))
            .then(b.start_closed.cmp(&a.start_closed))
    }

    /// `True` if the bounds share more than a point, `Partial` if one ends where the other
    /// starts, `False` if they are apart. Boundary flags are not consulted.
    pub fn overlap_with(&self, other: &Self) -> BoolWithPartial {
        if about_eq(self.end, other.start) || about_eq(other.end, self.start) {
            BoolWithPartial::Partial
        } else if self.end < other.start || other.end < self.start {
            BoolWithPartial::False
        } else {
            BoolWithPartial::True
        }
    }

    fn touching_point(&self, other: &Self) -> f64 {
        if about_eq(self.end, other.start) {
            other.start
        } else {
            self.start
        }
    }

    /// Both segments admit at least one common point.
    pub fn shares_point_with(&self, other: &Self) -> bool {
        match self.overlap_with(other) {
            BoolWithPartial::True => true,
            BoolWithPartial::Partial => {
                let p = self.touching_point(other);
                self.contains(p) && other.contains(p)
            }
            BoolWithPartial::False => false,
        }
    }

    /// The two segments together cover an unbroken range.
    pub fn overlaps_or_touches(&self, other: &Self) -> bool {
        let overlap = self.overlap_with(other);
        if overlap.is_partial() {
            let p = self.touching_point(other);
            return self.contains(p) || other.contains(p);
        }
        overlap.is_at_least_partial()
    }

    /// Merges two segments that overlap or touch at an admitted point.
    pub fn try_join(&self, other: &Self) -> Option<Self> {
        if !self.overlaps_or_touches(other) {
            return None;
        }
        let (first, second) = if Self::start_order(self, other).is_le() {
            (self, other)
        } else {
            (other, self)
        };

        let start_closed = first.start_closed
            || (about_eq(first.start, second.start) && second.start_closed);
        let (end, end_closed) = if about_eq(first.end, second.end) {
            (
                first.end.max(second.end),
                first.end_closed || second.end_closed,
            )
        } else if second.end > first.end {
            (second.end, second.end_closed)
        } else {
            (first.end, first.end_closed)
        };
        Some(Self::new(first.start, end, start_closed, end_closed))
    }

    /// Every point of `self` is a point of `outer`.
    pub fn is_inside(&self, outer: &Self) -> bool {
        let start_ok = if about_eq(self.start, outer.start) {
            !self.start_closed || outer.start_closed
        } else {
            self.start > outer.start
        };
        let end_ok = if about_eq(self.end, outer.end) {
            !self.end_closed || outer.end_closed
        } else {
            self.end < outer.end
        };
        start_ok && end_ok
    }

    /// What is left of `self` after removing `cutter`: zero, one or two pieces.
    ///
    /// A remainder edge created by the cut takes the opposite flag of the cutter edge it came
    /// from, so cutting a closed edge leaves an open one and the other way round.
    pub fn subtract(&self, cutter: &Self) -> Vec<Self> {
        if !self.shares_point_with(cutter) {
            return vec![*self];
        }

        let mut pieces = vec![];

        let left_exists = if about_eq(self.start, cutter.start) {
            self.start_closed && !cutter.start_closed
        } else {
            self.start < cutter.start
        };
        if left_exists {
            pieces.push(Self::new(
                self.start,
                cutter.start,
                self.start_closed,
                !cutter.start_closed,
            ));
        }

        let right_exists = if about_eq(self.end, cutter.end) {
            self.end_closed && !cutter.end_closed
        } else {
            self.end > cutter.end
        };
        if right_exists {
            pieces.push(Self::new(
                cutter.end,
                self.end,
                !cutter.end_closed,
                self.end_closed,
            ));
        }

        pieces.retain(|piece| !piece.is_empty());
        pieces
    }
}
