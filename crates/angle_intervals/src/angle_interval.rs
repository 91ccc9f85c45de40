use std::cmp::Ordering;
use std::f64::consts::TAU;
use std::fmt::{Display, Formatter};
use std::ops::{Add, Sub};

use angles::tolerance::about_eq;
use angles::Angle;
use getset::CopyGetters;
use itertools::Itertools;

use crate::arc_segment::ArcSegment;
use crate::circular_merging::{circular_merging, linear_merging};
use crate::complement::Complement;

/// An arc of the circle running counter-clockwise from `start` to `end`, each end open or closed.
///
/// When the normalized start is past the normalized end the arc wraps through the `0`/`2π`
/// seam. Arcs whose ends are the same angle are resolved this way:
///
/// - same raw measure: the single point `[a, a]` if both ends are closed, otherwise empty;
/// - raw measures a nonzero number of turns apart (like `[0°, 360°]`): the full circle. The
///   point where the ends meet belongs to it unless both ends are open.
///
/// Arcs with a non-finite end are empty.
#[derive(Debug, Copy, Clone, CopyGetters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[get_copy = "pub"]
pub struct AngleInterval {
    start: Angle,
    end: Angle,
    start_closed: bool,
    end_closed: bool,
}

impl AngleInterval {
    pub fn new(
        start: impl Into<Angle>,
        end: impl Into<Angle>,
        start_closed: bool,
        end_closed: bool,
    ) -> Self {
        AngleInterval {
            start: start.into(),
            end: end.into(),
            start_closed,
            end_closed,
        }
    }
    pub fn closed(start: impl Into<Angle>, end: impl Into<Angle>) -> Self {
        Self::new(start, end, true, true)
    }
    pub fn from_degrees(start: f64, end: f64, start_closed: bool, end_closed: bool) -> Self {
        Self::new(
            Angle::from_degrees(start),
            Angle::from_degrees(end),
            start_closed,
            end_closed,
        )
    }
    pub fn closed_degrees(start: f64, end: f64) -> Self {
        Self::from_degrees(start, end, true, true)
    }
    pub fn full() -> Self {
        Self::closed(0.0, TAU)
    }
    pub fn empty() -> Self {
        Self::new(0.0, 0.0, false, false)
    }

    pub fn with_start(&self, start: impl Into<Angle>) -> Self {
        Self {
            start: start.into(),
            ..*self
        }
    }
    pub fn with_end(&self, end: impl Into<Angle>) -> Self {
        Self {
            end: end.into(),
            ..*self
        }
    }
    pub fn with_start_closed(&self, start_closed: bool) -> Self {
        Self {
            start_closed,
            ..*self
        }
    }
    pub fn with_end_closed(&self, end_closed: bool) -> Self {
        Self {
            end_closed,
            ..*self
        }
    }

    pub fn start_radians(&self) -> f64 {
        self.start.radians()
    }
    pub fn end_radians(&self) -> f64 {
        self.end.radians()
    }
    pub fn start_degrees(&self) -> f64 {
        self.start.degrees()
    }
    pub fn end_degrees(&self) -> f64 {
        self.end.degrees()
    }

    fn has_finite_ends(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }
    fn ends_coincide(&self) -> bool {
        self.start == self.end
    }
    fn has_zero_span(&self) -> bool {
        self.ends_coincide() && about_eq(self.start.radians(), self.end.radians())
    }

    pub fn wraps(&self) -> bool {
        !self.ends_coincide() && self.start > self.end
    }
    pub fn is_full(&self) -> bool {
        self.ends_coincide() && !self.has_zero_span()
    }
    pub fn is_point(&self) -> bool {
        self.has_zero_span() && self.start_closed && self.end_closed
    }
    pub fn is_empty(&self) -> bool {
        self.segments().is_empty()
    }

    /// Angular size in radians: `0` for points and empty arcs, `2π` for the full circle.
    pub fn length(&self) -> f64 {
        if !self.has_finite_ends() {
            return 0.0;
        }
        if self.is_full() {
            return TAU;
        }
        if self.has_zero_span() {
            return 0.0;
        }
        let s = self.start.normalized_radians();
        let e = self.end.normalized_radians();
        if self.wraps() {
            (TAU - s) + e
        } else {
            e - s
        }
    }

    /// The arc as sorted linear pieces inside `[0, 2π]`, with empty pieces dropped and
    /// touching pieces merged.
    ///
    /// A wrapping arc splits at the seam into `[0, end]` and `[start, 2π)`. The seam point
    /// belongs to the `0` piece only.
    pub fn segments(&self) -> Vec<ArcSegment> {
        let s = self.start.normalized_radians();
        let e = self.end.normalized_radians();
        let pieces = if self.has_zero_span() {
            vec![ArcSegment::new(s, s, self.start_closed, self.end_closed)]
        } else if self.is_full() || self.wraps() {
            let e = if self.is_full() { s } else { e };
            vec![
                ArcSegment::new(0.0, e, true, self.end_closed),
                ArcSegment::new(s, TAU, self.start_closed, false),
            ]
        } else {
            vec![ArcSegment::new(s, e, self.start_closed, self.end_closed)]
        };
        linear_merging(
            pieces.into_iter().filter(|piece| !piece.is_empty()),
            ArcSegment::try_join,
        )
    }

    pub fn contains_point(&self, angle: impl Into<Angle>) -> bool {
        let x = angle.into().normalized_radians();
        self.segments().iter().any(|segment| segment.contains(x))
    }

    /// Every piece of `other` fits inside a single piece of `self`.
    pub fn contains_interval(&self, other: &AngleInterval) -> bool {
        let outer = self.segments();
        other
            .segments()
            .iter()
            .all(|inner| outer.iter().any(|o| inner.is_inside(o)))
    }

    /// The two arcs have at least one point in common.
    pub fn overlaps(&self, other: &AngleInterval) -> bool {
        let theirs = other.segments();
        self.segments()
            .iter()
            .cartesian_product(theirs.iter())
            .any(|(a, b)| a.shares_point_with(b))
    }

    /// Smallest set of disjoint arcs covering every input arc, sorted by normalized start.
    pub fn union_all(intervals: impl IntoIterator<Item = AngleInterval>) -> Vec<AngleInterval> {
        let sorted_segments = intervals
            .into_iter()
            .flat_map(|interval| interval.segments())
            .sorted_by(ArcSegment::start_order);
        Self::from_sorted_segments(sorted_segments)
    }

    /// Arcs covering every point of either operand.
    ///
    /// Two non-empty operands that neither overlap nor touch come back unchanged, `self` first.
    pub fn union(&self, other: &AngleInterval) -> Vec<AngleInterval> {
        let pieces = Self::union_all([*self, *other]);
        log::trace!("{self} ∪ {other} -> {} piece(s)", pieces.len());
        // each non-empty operand is a single piece on its own, so two pieces means no merge
        if pieces.len() == 2 && !self.is_empty() && !other.is_empty() {
            return vec![*self, *other];
        }
        pieces
    }

    /// Arcs covering every point of `self` that is not in `other`, sorted by normalized start.
    pub fn difference(&self, other: &AngleInterval) -> Vec<AngleInterval> {
        let mut remaining = self.segments();
        for cutter in other.segments() {
            remaining = remaining
                .iter()
                .flat_map(|segment| segment.subtract(&cutter))
                .collect();
            if remaining.is_empty() {
                break;
            }
        }
        let sorted_segments = remaining
            .into_iter()
            .filter(|segment| !segment.is_empty())
            .sorted_by(ArcSegment::start_order);
        let pieces = Self::from_sorted_segments(sorted_segments);
        log::trace!("{self} − {other} -> {} piece(s)", pieces.len());
        pieces
    }

    fn from_sorted_segments(sorted_segments: impl IntoIterator<Item = ArcSegment>) -> Vec<Self> {
        circular_merging(sorted_segments, ArcSegment::try_join, |last, first| {
            let fused = last.try_join(&first.shifted(TAU))?;
            if about_eq(first.end(), last.start()) {
                // closes the whole circle, so the end has to stay a turn past the start
                return Some(fused);
            }
            // the unshifted end avoids re-normalizing `TAU + end`, which drifts by a few ulps
            Some(ArcSegment::new(
                fused.start(),
                first.end(),
                fused.start_closed(),
                fused.end_closed(),
            ))
        })
        .into_iter()
        .map(AngleInterval::from)
        .collect()
    }
}

impl From<ArcSegment> for AngleInterval {
    fn from(segment: ArcSegment) -> Self {
        AngleInterval::new(
            segment.start(),
            segment.end(),
            segment.start_closed(),
            segment.end_closed(),
        )
    }
}

impl Complement for AngleInterval {
    type Output = Self;
    /// The arc from `end` back round to `start`, with both flags flipped.
    fn complement(&self) -> Self::Output {
        if !self.has_finite_ends() {
            return AngleInterval::full();
        }
        let start = self.end.normalized();
        let span = TAU - self.length();
        AngleInterval::new(start, start + span, !self.end_closed, !self.start_closed)
    }
}

impl PartialEq for AngleInterval {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
            && self.end == other.end
            && self.start_closed == other.start_closed
            && self.end_closed == other.end_closed
            && self.is_full() == other.is_full()
    }
}

/// Shorter arcs first, then by normalized start.
impl PartialOrd for AngleInterval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.length(), self.start.normalized_radians())
            .partial_cmp(&(other.length(), other.start.normalized_radians()))
    }
}

impl Add for AngleInterval {
    type Output = Vec<AngleInterval>;
    fn add(self, rhs: Self) -> Self::Output {
        self.union(&rhs)
    }
}

impl Sub for AngleInterval {
    type Output = Vec<AngleInterval>;
    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(&rhs)
    }
}

impl Display for AngleInterval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let precision = f.precision().unwrap_or(0);
        let open_bracket = if self.start_closed { '[' } else { '(' };
        let close_bracket = if self.end_closed { ']' } else { ')' };
        let start = self.start.degrees();
        let end = if self.is_full() {
            start + 360.0
        } else {
            self.end.degrees()
        };
        write!(
            f,
            "{open_bracket}{start:.precision$}°, {end:.precision$}°{close_bracket}"
        )
    }
}
