use std::error::Error;

use angle_intervals::{AngleInterval, Complement};
use angles::{deg, Angle, QUARTER_TURN};
use itertools::Itertools;
use log::LevelFilter;

fn show(pieces: &[AngleInterval]) -> String {
    if pieces.is_empty() {
        "∅".to_string()
    } else {
        pieces.iter().map(|piece| piece.to_string()).join(" ∪ ")
    }
}

fn angles_section() {
    println!("== angles ==");
    let a = deg(-90.0);
    println!("-90° is {:#}", a);
    for measure in [0.0, 360.0, -720.0] {
        println!("{measure}° == 0°: {}", deg(measure) == deg(0.0));
    }
    println!("10° < 350°: {}", deg(10.0) < deg(350.0));
    println!("300° + 300° = {:#}", deg(300.0) + deg(300.0));
    println!("quarter turn * 3 = {:#}", QUARTER_TURN * 3.0);
    println!("150.7° as whole degrees: {}", i64::from(deg(150.7)));
    match deg(45.0).checked_div(0.0) {
        Ok(quotient) => println!("45° / 0 = {quotient}"),
        Err(e) => println!("45° / 0: {e}"),
    }
    match Angle::try_from_radians(f64::NAN) {
        Ok(angle) => println!("NaN angle: {angle}"),
        Err(e) => println!("NaN angle rejected: {e}"),
    }
}

fn lengths_and_membership_section() {
    println!("== lengths and membership ==");
    for interval in [
        AngleInterval::closed_degrees(0.0, 90.0),
        AngleInterval::closed_degrees(270.0, 90.0),
        AngleInterval::closed_degrees(30.0, 30.0),
        AngleInterval::closed_degrees(30.0, 390.0),
    ] {
        println!(
            "{interval} has length {:.4} rad (wraps: {})",
            interval.length(),
            interval.wraps()
        );
    }
    let closed = AngleInterval::closed_degrees(0.0, 90.0);
    let open = AngleInterval::from_degrees(0.0, 90.0, false, false);
    for (interval, point) in [(closed, 45.0), (open, 45.0), (open, 0.0)] {
        println!(
            "{point}° ∈ {interval}: {}",
            interval.contains_point(deg(point))
        );
    }
}

fn containment_section() {
    println!("== range in range ==");
    let pairs = [
        (
            AngleInterval::from_degrees(10.0, 20.0, false, true),
            AngleInterval::closed_degrees(10.0, 20.0),
        ),
        (
            AngleInterval::closed_degrees(90.0, -90.0),
            AngleInterval::closed_degrees(90.0, 270.0),
        ),
    ];
    for (outer, inner) in pairs {
        println!("{inner} ⊂ {outer}: {}", outer.contains_interval(&inner));
    }
}

fn set_operations_section() {
    println!("== union ==");
    let unions = [
        (
            AngleInterval::from_degrees(120.0, 200.0, true, false),
            AngleInterval::from_degrees(150.0, 240.0, true, false),
        ),
        (
            AngleInterval::closed_degrees(0.0, 45.0),
            AngleInterval::closed_degrees(90.0, 135.0),
        ),
        (
            AngleInterval::closed_degrees(270.0, 30.0),
            AngleInterval::closed_degrees(300.0, 90.0),
        ),
    ];
    for (a, b) in unions {
        println!("{a} ∪ {b} = {}", show(&(a + b)));
    }

    println!("== difference ==");
    let differences = [
        (
            AngleInterval::closed_degrees(0.0, 180.0),
            AngleInterval::from_degrees(45.0, 135.0, false, true),
        ),
        (
            AngleInterval::closed_degrees(10.0, 50.0),
            AngleInterval::from_degrees(10.0, 50.0, false, false),
        ),
        (
            AngleInterval::closed_degrees(270.0, 90.0),
            AngleInterval::closed_degrees(300.0, 30.0),
        ),
        (
            AngleInterval::closed_degrees(0.0, 180.0),
            AngleInterval::closed_degrees(90.0, 90.0),
        ),
    ];
    for (a, b) in differences {
        println!("{a} − {b} = {}", show(&(a - b)));
    }

    println!("== complement ==");
    let a = AngleInterval::from_degrees(300.0, 20.0, true, false);
    println!("complement of {a} is {}", a.complement());
}

fn main() -> Result<(), Box<dyn Error>> {
    simple_logger::SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()?;
    log::info!("arc demo starting");

    angles_section();
    lengths_and_membership_section();
    containment_section();
    set_operations_section();

    log::info!("arc demo done");
    Ok(())
}
