// Shared chart palette and axis-range helpers

use chrono::{Duration, NaiveDateTime};
use plotters::style::RGBColor;
use std::ops::Range;

// Series palette carried over from the original dashboards
pub const RPS_BLUE: RGBColor = RGBColor(0x2e, 0x86, 0xab);
pub const LATENCY_PLUM: RGBColor = RGBColor(0xa2, 0x3b, 0x72);
pub const P99_ORANGE: RGBColor = RGBColor(0xf1, 0x8f, 0x01);
pub const MEMORY_RUST: RGBColor = RGBColor(0xc7, 0x3e, 0x1d);
pub const CPU_STEEL: RGBColor = RGBColor(0x3f, 0x88, 0xc5);
pub const CONNECTIONS_RED: RGBColor = RGBColor(0xd0, 0x00, 0x00);
pub const MEDIAN_RED: RGBColor = RGBColor(0xdc, 0x26, 0x26);

/// Value range padded by `factor` of the span on both ends, so constant
/// series still get a drawable axis.
pub fn padded_range(min: f64, max: f64, factor: f64) -> Range<f64> {
    let span = max - min;
    if span > 0.0 {
        (min - span * factor)..(max + span * factor)
    } else {
        (min - 1.0)..(max + 1.0)
    }
}

/// Time axis range; a single-instant series is widened by one second.
pub fn time_range(first: NaiveDateTime, last: NaiveDateTime) -> Range<NaiveDateTime> {
    if last > first {
        first..last
    } else {
        first..(first + Duration::seconds(1))
    }
}

/// Blue-white-red gradient for correlation values in [-1, 1].
/// NaN (zero-variance columns) renders neutral white.
pub fn correlation_color(r: f64) -> RGBColor {
    if r.is_nan() {
        return RGBColor(0xff, 0xff, 0xff);
    }
    let r = r.clamp(-1.0, 1.0);
    let blend = |from: u8, to: u8, t: f64| (f64::from(from) + (f64::from(to) - f64::from(from)) * t) as u8;
    if r >= 0.0 {
        // white -> red
        RGBColor(
            blend(0xff, 0xb4, r),
            blend(0xff, 0x0c, r),
            blend(0xff, 0x1f, r),
        )
    } else {
        // white -> blue
        let t = -r;
        RGBColor(
            blend(0xff, 0x1f, t),
            blend(0xff, 0x4e, t),
            blend(0xff, 0xb4, t),
        )
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_padded_range__expands_span() {
        let range = padded_range(0.0, 100.0, 0.05);
        assert_eq!(range.start, -5.0);
        assert_eq!(range.end, 105.0);
    }

    #[test]
    fn test_padded_range__constant_values_stay_drawable() {
        let range = padded_range(42.0, 42.0, 0.05);
        assert!(range.start < range.end);
        assert!(range.start < 42.0 && 42.0 < range.end);
    }

    #[test]
    fn test_time_range__single_instant_widened() {
        let t = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        let range = time_range(t, t);
        assert!(range.start < range.end);
    }

    #[test]
    fn test_correlation_color__endpoints_and_nan() {
        let positive = correlation_color(1.0);
        let negative = correlation_color(-1.0);
        let neutral = correlation_color(0.0);
        let nan = correlation_color(f64::NAN);

        assert!(positive.0 > positive.2, "strong positive should be red");
        assert!(negative.2 > negative.0, "strong negative should be blue");
        assert_eq!(neutral, RGBColor(0xff, 0xff, 0xff));
        assert_eq!(nan, RGBColor(0xff, 0xff, 0xff));
    }
}
