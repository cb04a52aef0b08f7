use super::*;

fn m(px: f64) -> LayoutMetric {
    LayoutMetric::new(px).unwrap()
}

#[test]
fn free_functions_match_reference_values() {
    let m400 = m(400.0);
    assert_eq!(tracking_region_height(m400), 300.0);
    assert_eq!(tracking_region_negative_margin(m400), 200.0);
    assert_eq!(tracking_region_y_offset(m400, 24.0), 188.0);
    assert_eq!(horizontal_offset_distance(m400, 24.0), 176.0);
    assert_eq!(active_threshold(m400, 24.0), 188.0 / 300.0);
    assert!((active_threshold(m400, 24.0) - 0.6267).abs() < 1e-4);
}

#[test]
fn bound_geometry_agrees_with_free_functions() {
    let g = Geometry::new(m(400.0), &SlideshowConfig::default());
    assert_eq!(g.region_height(), tracking_region_height(m(400.0)));
    assert_eq!(g.region_margin(), tracking_region_negative_margin(m(400.0)));
    assert_eq!(g.region_y_offset(), tracking_region_y_offset(m(400.0), 24.0));
    assert_eq!(g.offset_distance(), horizontal_offset_distance(m(400.0), 24.0));
    assert_eq!(g.active_threshold(), active_threshold(m(400.0), 24.0));
    assert_eq!(g, Geometry::with_row_gap(m(400.0), 24.0));
}

#[test]
fn margin_stays_below_height_for_any_metric() {
    for px in [0.5, 1.0, 37.0, 400.0, 12_000.0] {
        let mm = m(px);
        assert!(tracking_region_negative_margin(mm) < tracking_region_height(mm));
    }
}

#[test]
fn sticky_panel_is_vertically_centred() {
    let g = Geometry::with_row_gap(m(400.0), 24.0);
    assert_eq!(g.sticky_top(900.0), 250.0);
}

fn band(start: f64, end: f64) -> ViewportBand {
    ViewportBand { start, end }
}

#[test]
fn exclusive_activation_breaks_for_tiny_metrics() {
    let centred = ViewportBand::default();
    assert!(Geometry::with_row_gap(m(400.0), 24.0).has_exclusive_activation(centred, 900.0));
    assert!(!Geometry::with_row_gap(m(24.0), 24.0).has_exclusive_activation(centred, 900.0));
    assert!(!Geometry::with_row_gap(m(20.0), 24.0).has_exclusive_activation(centred, 900.0));
}

#[test]
fn exclusive_activation_depends_on_band_skew() {
    // Threshold 188/300 is above one half, so an end offset below the start
    // offset widens every slide's window past its pitch.
    let g = Geometry::with_row_gap(m(400.0), 24.0);
    assert!(!g.has_exclusive_activation(band(0.45, 0.55), 900.0));
    assert!(g.has_exclusive_activation(band(0.55, 0.45), 900.0));
    assert!(g.has_exclusive_activation(band(0.3, 0.3), 900.0));

    // Below one half the roles swap.
    let low = Geometry::with_row_gap(m(400.0), 200.0);
    assert!(low.active_threshold() > 0.0 && low.active_threshold() < 0.5);
    assert!(low.has_exclusive_activation(band(0.45, 0.55), 900.0));
    assert!(!low.has_exclusive_activation(band(0.55, 0.45), 900.0));
}

#[test]
fn custom_ratios_flow_through() {
    let config = SlideshowConfig {
        row_gap_px: 0.0,
        region_height_ratio: 1.0,
        region_margin_ratio: 0.25,
        ..SlideshowConfig::default()
    };
    let g = Geometry::new(m(400.0), &config);
    assert_eq!(g.region_height(), 400.0);
    assert_eq!(g.region_margin(), 100.0);
    assert_eq!(g.active_threshold(), 0.25);
    assert_eq!(g.offset_distance(), 200.0);
}

#[test]
fn constants_serialize() {
    let g = Geometry::with_row_gap(m(400.0), 24.0);
    let v = serde_json::to_value(g.constants(ViewportBand::default(), 900.0)).unwrap();
    assert_eq!(v["offset_distance"], 176.0);
    assert_eq!(v["exclusive_activation"], true);
    let skewed = serde_json::to_value(g.constants(band(0.45, 0.55), 900.0)).unwrap();
    assert_eq!(skewed["exclusive_activation"], false);
}
