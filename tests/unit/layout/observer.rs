use super::*;

#[test]
fn starts_without_metric() {
    let o = LayoutObserver::new();
    assert_eq!(o.metric(), None);
    assert!(!o.is_ready());
}

#[test]
fn first_measurement_publishes_and_latches_ready() {
    let mut o = LayoutObserver::new();
    let published = o.observe(Some(400.0)).unwrap();
    assert_eq!(published.map(LayoutMetric::px), Some(400.0));
    assert!(o.is_ready());
}

#[test]
fn unchanged_measurement_is_not_republished() {
    let mut o = LayoutObserver::new();
    o.observe(Some(400.0));
    assert_eq!(o.observe(Some(400.0)), None);
    assert!(o.observe(Some(380.0)).is_some());
}

#[test]
fn zero_and_non_finite_widths_mean_no_measurement() {
    let mut o = LayoutObserver::new();
    assert_eq!(o.observe(Some(0.0)), None);
    assert_eq!(o.observe(Some(f64::NAN)), None);
    assert!(!o.is_ready());

    o.observe(Some(400.0));
    assert_eq!(o.observe(Some(0.0)), Some(None));
    assert_eq!(o.metric(), None);
    assert!(o.is_ready());
}

#[test]
fn disconnect_drops_later_measurements() {
    let mut o = LayoutObserver::new();
    o.observe(Some(400.0));
    o.disconnect();
    assert!(o.is_disconnected());
    assert_eq!(o.observe(Some(500.0)), None);
    assert_eq!(o.metric().map(LayoutMetric::px), Some(400.0));
}
