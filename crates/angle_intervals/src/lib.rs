pub mod angle_interval;
pub mod arc_segment;
pub mod bool_with_partial;
pub mod circular_merging;
pub mod complement;
pub mod relative_interval_location;

pub use angle_interval::AngleInterval;
pub use arc_segment::ArcSegment;
pub use bool_with_partial::BoolWithPartial;
pub use circular_merging::{circular_merging, linear_merging};
pub use complement::Complement;
pub use relative_interval_location::RelativeIntervalLocation;

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use angles::deg;

    #[test]
    fn test_interval_round_trips_through_json() {
        let interval = AngleInterval::new(deg(300.0), deg(20.0), true, false);
        let json = serde_json::to_string(&interval).unwrap();
        let back: AngleInterval = serde_json::from_str(&json).unwrap();
        assert_eq!(back, interval);
    }
}
