#![allow(dead_code)]

use approx::assert_relative_eq;
use camino::Utf8PathBuf;
use neoscene::{
    neo_feed::{feed_client::load_browse_file, NeoBrowsePage},
    trajectory::TrajectoryPoint,
};

pub fn sample_browse_path() -> Utf8PathBuf {
    Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("neo_browse_sample.json")
}

pub fn sample_browse_page() -> NeoBrowsePage {
    load_browse_file(&sample_browse_path()).expect("fixture should load")
}

pub fn assert_point_close(actual: &TrajectoryPoint, expected: &TrajectoryPoint, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}

/// Digits after the decimal point in the shortest representation of `value`.
pub fn decimal_places(value: f64) -> usize {
    let text = format!("{value}");
    text.split_once('.').map_or(0, |(_, frac)| frac.len())
}
