/// Where a value sits relative to a linear interval.
/// Needs to account for exact points at start and end of coverage.
#[derive(Clone, Hash, Eq, PartialEq, Debug, Copy)]
pub enum RelativeIntervalLocation {
    After,
    End,
    During,
    Start,
    Before,
}

impl RelativeIntervalLocation {
    /// Whether an interval with the given boundary flags covers a value at this location.
    pub fn is_covered(&self, start_closed: bool, end_closed: bool) -> bool {
        match self {
            RelativeIntervalLocation::After => false,
            RelativeIntervalLocation::End => end_closed,
            RelativeIntervalLocation::During => true,
            RelativeIntervalLocation::Start => start_closed,
            RelativeIntervalLocation::Before => false,
        }
    }
}
