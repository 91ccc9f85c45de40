
use angle_intervals::{AngleInterval, Complement};
use angles::{deg, Angle};
use ntest::{assert_about_eq, assert_false};
use pretty_assertions::assert_eq;
use std::f64::consts::{FRAC_PI_2, PI};
use utils_for_tests::*;

#[test]
fn test_angles_whole_turns_apart_are_equal() {
    assert_eq!(deg(0.0), deg(360.0));
    assert_eq!(deg(360.0), deg(-720.0));
    assert!(deg(10.0) < deg(350.0));
}

#[test]
fn test_quarter_arc_length() {
    assert_about_eq!(closed_deg(0.0, 90.0).length(), FRAC_PI_2);
}

#[test]
fn test_wrapping_arc_length() {
    assert_about_eq!(closed_deg(270.0, 90.0).length(), PI);
}

#[test]
fn test_membership_respects_open_ends() {
    let open = AngleInterval::from_degrees(0.0, 90.0, false, false);
    assert!(closed_deg(0.0, 90.0).contains_point(deg(45.0)));
    assert!(open.contains_point(deg(45.0)));
    assert_false!(open.contains_point(deg(0.0)));
}

#[test]
fn test_union_of_overlapping_half_open_arcs() {
    let a = AngleInterval::from_degrees(120.0, 200.0, true, false);
    let b = AngleInterval::from_degrees(150.0, 240.0, true, false);
    let union = a + b;
    assert_eq!(union, vec![AngleInterval::from_degrees(120.0, 240.0, true, false)]);
    assert_eq!(union[0].to_string(), "[120°, 240°)");
}

#[test]
fn test_union_of_disjoint_arcs_is_unchanged() {
    let a = closed_deg(0.0, 45.0);
    let b = closed_deg(90.0, 135.0);
    assert_eq!(a + b, vec![a, b]);
}

#[test]
fn test_difference_cuts_out_the_middle() {
    let base = closed_deg(0.0, 180.0);
    let cut = AngleInterval::from_degrees(45.0, 135.0, false, true);
    let pieces = base - cut;
    assert_eq!(
        pieces.iter().map(|p| p.to_string()).collect::<Vec<_>>(),
        vec!["[0°, 45°]", "(135°, 180°]"]
    );
}

#[test]
fn test_difference_by_open_arc_leaves_end_points() {
    let base = closed_deg(10.0, 50.0);
    let cut = AngleInterval::from_degrees(10.0, 50.0, false, false);
    let pieces = base - cut;
    assert_eq!(pieces, vec![closed_deg(10.0, 10.0), closed_deg(50.0, 50.0)]);
    assert!(pieces.iter().all(|p| p.is_point()));
}

#[test]
fn test_range_in_range() {
    let half_open = AngleInterval::from_degrees(10.0, 20.0, false, true);
    assert_false!(half_open.contains_interval(&closed_deg(10.0, 20.0)));
    assert!(closed_deg(90.0, -90.0).contains_interval(&closed_deg(90.0, 270.0)));
}

#[test]
fn test_union_across_the_seam() {
    let union = closed_deg(270.0, 30.0) + closed_deg(300.0, 90.0);
    assert_eq!(union, vec![closed_deg(270.0, 90.0)]);
    assert_about_eq!(union[0].length(), PI);
}

#[test]
fn test_difference_across_the_seam() {
    let pieces = closed_deg(270.0, 90.0) - closed_deg(300.0, 30.0);
    assert_same_coverage(
        &pieces,
        &[
            AngleInterval::from_degrees(270.0, 300.0, true, false),
            AngleInterval::from_degrees(30.0, 90.0, false, true),
        ],
    );
    assert_eq!(pieces.len(), 2);
}

#[test]
fn test_difference_of_a_point() {
    let pieces = closed_deg(0.0, 180.0) - closed_deg(90.0, 90.0);
    assert_eq!(
        pieces,
        vec![
            AngleInterval::from_degrees(0.0, 90.0, true, false),
            AngleInterval::from_degrees(90.0, 180.0, false, true),
        ]
    );
}

#[test]
fn test_complement_then_union_restores_full_circle() {
    let a = AngleInterval::from_degrees(100.0, 10.0, false, true);
    let union = a.union(&a.complement());
    assert_eq!(union.len(), 1);
    assert!(union[0].is_full());
    assert_same_coverage(&union, &[AngleInterval::full()]);
}

#[test]
fn test_sub_arc_round_trip() {
    let whole = closed_deg(20.0, 200.0);
    let part = closed_deg(60.0, 100.0);
    let rest = whole - part;
    let mut restored = vec![];
    for piece in rest {
        restored = AngleInterval::union_all(restored.into_iter().chain([piece]));
    }
    restored = AngleInterval::union_all(restored.into_iter().chain([part]));
    assert_eq!(restored, vec![whole]);
}

#[test]
fn test_removing_complement_of_sub_arc_then_adding_back() {
    for (whole, part) in [
        (closed_deg(20.0, 200.0), closed_deg(60.0, 100.0)),
        (closed_deg(300.0, 90.0), AngleInterval::from_degrees(330.0, 30.0, false, true)),
        (AngleInterval::from_degrees(10.0, 80.0, true, false), closed_deg(10.0, 10.0)),
    ] {
        let kept = whole - part.complement();
        assert_same_coverage(&kept, &[part]);
        let restored = AngleInterval::union_all(kept.into_iter().chain(whole - part));
        assert_same_coverage(&restored, &[whole]);
    }
}

#[test]
fn test_ordering_is_by_length_first() {
    let mut arcs = vec![closed_deg(0.0, 90.0), closed_deg(300.0, 310.0), closed_deg(5.0, 5.0)];
    arcs.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(
        arcs,
        vec![closed_deg(5.0, 5.0), closed_deg(300.0, 310.0), closed_deg(0.0, 90.0)]
    );
}

#[test]
fn test_point_queries_accept_raw_radians() {
    let arc = closed_deg(350.0, 10.0);
    assert!(arc.contains_point(0.0));
    assert!(arc.contains_point(Angle::from_turns(3.0)));
    assert_false!(arc.contains_point(PI));
}
