// File: crates/hoverplot-core/tests/scales.rs
// Purpose: Validate linear, band and color scales plus tick generation.

use hoverplot_core::scale::{format_grouped, ticks};
use hoverplot_core::{BandScale, Color, ColorScale, LinearScale, TickSource};

#[test]
fn linear_endpoints_are_exact() {
    let cases = [
        ((500.0, 900.0), (550.0, 50.0)),
        ((0.0, 1.0), (60.0, 740.0)),
        ((-3.7, 12.9), (0.1, 0.3)),
        ((1e-6, 3e9), (1000.0, -1000.0)),
    ];
    for ((d0, d1), (r0, r1)) in cases {
        let s = LinearScale::new((d0, d1), (r0, r1));
        assert_eq!(s.apply(d0), r0, "domain min of {d0}..{d1}");
        assert_eq!(s.apply(d1), r1, "domain max of {d0}..{d1}");
    }
}

#[test]
fn linear_interpolates_and_inverts_range() {
    let s = LinearScale::new((500.0, 900.0), (550.0, 50.0));
    assert!((s.apply(600.0) - 425.0).abs() < 1e-9);
    assert!((s.apply(700.0) - 300.0).abs() < 1e-9);
}

#[test]
fn undefined_domain_is_identity() {
    let s = LinearScale::from_extent(None, (550.0, 50.0));
    assert!(s.is_identity());
    for v in [-5.0, 0.0, 42.5] {
        assert_eq!(s.apply(v), v);
    }
    assert!(s.ticks().is_empty());
}

#[test]
fn collapsed_domain_maps_to_range_middle() {
    let s = LinearScale::new((400.0, 400.0), (540.0, 60.0));
    assert_eq!(s.apply(400.0), 300.0);
    assert_eq!(s.apply(10.0), 300.0);
}

#[test]
fn linear_ticks_use_round_steps() {
    let s = LinearScale::new((500.0, 900.0), (550.0, 50.0));
    let t = s.ticks();
    let labels: Vec<&str> = t.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["500", "550", "600", "650", "700", "750", "800", "850", "900"]);
    assert_eq!(t[0].position, 550.0);
    assert_eq!(t.last().unwrap().position, 50.0);
}

#[test]
fn tick_labels_group_thousands_and_keep_precision() {
    let big = LinearScale::new((0.0, 2000.0), (0.0, 100.0));
    assert!(big.ticks().iter().any(|t| t.label == "1,000"));

    let unit = LinearScale::new((0.0, 1.0), (0.0, 100.0));
    let labels: Vec<String> = unit.ticks().into_iter().map(|t| t.label).collect();
    assert_eq!(labels.first().map(String::as_str), Some("0.0"));
    assert_eq!(labels.get(5).map(String::as_str), Some("0.5"));
    assert_eq!(labels.last().map(String::as_str), Some("1.0"));
}

#[test]
fn ticks_handle_reversed_and_degenerate_bounds() {
    assert_eq!(ticks(1.0, 0.0, 2.0), vec![1.0, 0.5, 0.0]);
    assert_eq!(ticks(3.0, 3.0, 10.0), vec![3.0]);
    assert!(ticks(0.0, 1.0, 0.0).is_empty());
    assert!(ticks(f64::NAN, 1.0, 10.0).is_empty());
}

#[test]
fn grouped_formatting() {
    assert_eq!(format_grouped(1234567.0, 0), "1,234,567");
    assert_eq!(format_grouped(-0.5, 1), "-0.5");
    assert_eq!(format_grouped(-0.0, 0), "0");
    assert_eq!(format_grouped(999.0, 0), "999");
}

#[test]
fn band_padding_and_bandwidth() {
    let s = BandScale::new(["Jan", "Feb"], (50.0, 750.0), 0.4);
    let step = 700.0 / 2.4;
    assert!((s.step() - step).abs() < 1e-9);
    assert!((s.bandwidth() - step * 0.6).abs() < 1e-9);
    let jan = s.apply("Jan").unwrap();
    let feb = s.apply("Feb").unwrap();
    assert!((feb - jan - step).abs() < 1e-9);
    // outer padding is symmetric
    let left_gap = jan - 50.0;
    let right_gap = 750.0 - (feb + s.bandwidth());
    assert!((left_gap - right_gap).abs() < 1e-9);
    assert_eq!(s.apply("Mar"), None);
}

#[test]
fn band_domain_deduplicates_in_first_seen_order() {
    let s = BandScale::new(["Feb", "Jan", "Feb", "Mar"], (0.0, 300.0), 0.4);
    assert_eq!(s.domain(), ["Feb", "Jan", "Mar"]);
}

#[test]
fn band_ticks_sit_at_band_centers() {
    let s = BandScale::new(["A", "B", "C"], (0.0, 300.0), 0.4);
    let t = s.ticks();
    assert_eq!(t.len(), 3);
    for (tick, cat) in t.iter().zip(["A", "B", "C"]) {
        assert_eq!(tick.label, cat);
        let start = s.apply(cat).unwrap();
        assert!((tick.position - (start + s.bandwidth() / 2.0)).abs() < 1e-9);
    }
}

#[test]
fn sequential_color_endpoints_and_undefined_domain() {
    let lo: Color = "#f1fbee".parse().unwrap();
    let hi: Color = "#00441b".parse().unwrap();
    let s = ColorScale::sequential(Some((5.0, 12.0)), lo, hi);
    assert_eq!(s.apply(5.0), lo);
    assert_eq!(s.apply(12.0), hi);
    assert!(s.apply(12.0).luminance() < s.apply(8.0).luminance());

    let empty = ColorScale::sequential(None, lo, hi);
    assert_eq!(empty.apply(0.0), lo);
    assert_eq!(empty.apply(1.0), hi);
}

#[test]
fn diverging_color_stops() {
    let magenta: Color = "magenta".parse().unwrap();
    let white: Color = "white".parse().unwrap();
    let navy: Color = "navy".parse().unwrap();
    let s = ColorScale::diverging([0.0, 0.5, 1.0], [magenta, white, navy]);
    assert_eq!(s.apply(0.0), magenta);
    assert_eq!(s.apply(0.5), white);
    assert_eq!(s.apply(1.0), navy);

    let c = s.apply(0.8);
    assert_eq!(c, Color::rgb(102, 102, 179));
    assert!(c.distance(&navy) < c.distance(&magenta));
    assert_eq!(s.apply(f64::NAN), white);
}

#[test]
fn color_parsing() {
    assert_eq!("#fff".parse::<Color>().unwrap(), Color::WHITE);
    assert_eq!("Navy".parse::<Color>().unwrap(), Color::rgb(0, 0, 128));
    assert!("#12345".parse::<Color>().is_err());
    assert!("#+f+f+f".parse::<Color>().is_err());
    assert!("#+1+2+3".parse::<Color>().is_err());
    assert!("#-0ff".parse::<Color>().is_err());
    assert!("chartreuse-ish".parse::<Color>().is_err());
    assert_eq!(Color::rgb(1, 2, 3).to_string(), "rgb(1, 2, 3)");
}
