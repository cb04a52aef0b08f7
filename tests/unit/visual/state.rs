use super::*;
use crate::foundation::core::LayoutMetric;

fn geometry() -> Geometry {
    Geometry::with_row_gap(LayoutMetric::new(400.0).unwrap(), 24.0)
}

fn tracking(top: f64, bottom: f64) -> SlideTracking {
    SlideTracking::new(
        Progress::new(top).unwrap(),
        Progress::new(bottom).unwrap(),
    )
}

#[test]
fn scale_endpoints_and_midpoint() {
    assert_eq!(scale_for_opacity(0.0), 0.75);
    assert_eq!(scale_for_opacity(1.0), 1.0);
    assert_eq!(scale_for_opacity(0.5), 0.8125);
}

#[test]
fn middle_slide_fades_in_then_out() {
    let g = geometry();
    let entering = visual_state(2, 5, tracking(0.25, 0.0), &g).unwrap();
    assert_eq!(entering.opacity, 0.25);

    let settled = visual_state(2, 5, tracking(1.0, 0.0), &g).unwrap();
    assert_eq!(settled.opacity, 1.0);
    assert_eq!(settled.scale, 1.0);
    assert_eq!(settled.x, 0.0);

    let exiting = visual_state(2, 5, tracking(1.0, 0.75), &g).unwrap();
    assert_eq!(exiting.opacity, 0.25);
}

#[test]
fn opacity_is_min_of_top_and_bottom() {
    let g = geometry();
    let s = visual_state(1, 5, tracking(0.6, 0.5), &g).unwrap();
    assert_eq!(s.opacity, 0.5);
    let s = visual_state(1, 5, tracking(0.3, 0.5), &g).unwrap();
    assert_eq!(s.opacity, 0.3);
}

#[test]
fn first_slide_never_enters() {
    let g = geometry();
    for top in [0.0, 0.3, 1.0] {
        let s = visual_state(0, 5, tracking(top, 0.0), &g).unwrap();
        assert_eq!(s.opacity, 1.0);
    }
    let s = visual_state(0, 5, tracking(0.0, 1.0), &g).unwrap();
    assert_eq!(s.opacity, 0.0);
}

#[test]
fn last_slide_never_exits() {
    let g = geometry();
    for bottom in [0.0, 0.3, 1.0] {
        let s = visual_state(4, 5, tracking(1.0, bottom), &g).unwrap();
        assert_eq!(s.opacity, 1.0);
    }
    let s = visual_state(4, 5, tracking(0.0, 1.0), &g).unwrap();
    assert_eq!(s.opacity, 0.0);
}

#[test]
fn single_slide_is_always_fully_visible() {
    let g = geometry();
    for (t, b) in [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (0.4, 0.9)] {
        let s = visual_state(0, 1, tracking(t, b), &g).unwrap();
        assert_eq!(s.opacity, 1.0);
        assert_eq!(s.x, 0.0);
    }
}

#[test]
fn x_alternates_entry_side() {
    let g = geometry();
    assert_eq!(g.offset_distance(), 176.0);

    let odd = visual_state(1, 5, tracking(0.0, 0.0), &g).unwrap();
    assert_eq!(odd.opacity, 0.0);
    assert_eq!(odd.x, 176.0);

    let even = visual_state(0, 5, tracking(0.0, 1.0), &g).unwrap();
    assert_eq!(even.opacity, 0.0);
    assert_eq!(even.x, -176.0);

    let half = visual_state(3, 5, tracking(0.5, 0.0), &g).unwrap();
    assert_eq!(half.x, 88.0);
}

#[test]
fn out_of_range_id_is_a_precondition_error() {
    let g = geometry();
    let err = visual_state(5, 5, SlideTracking::default(), &g).unwrap_err();
    assert!(matches!(err, ScrollfadeError::Precondition(_)));
    assert!(visual_state(0, 0, SlideTracking::default(), &g).is_err());
}

#[test]
fn resting_state_matches_zero_opacity() {
    let g = geometry();
    for id in 1..4 {
        let computed = visual_state(id, 5, tracking(0.0, 0.0), &g).unwrap();
        assert_eq!(VisualState::resting(id, &g), computed);
    }
}

#[test]
fn affine_scales_about_centre_then_translates() {
    let s = VisualState {
        opacity: 0.0,
        scale: 0.75,
        x: -176.0,
    };
    let a = s.to_affine(400.0);
    let centre = a * kurbo::Point::new(200.0, 200.0);
    assert_eq!(centre, kurbo::Point::new(24.0, 200.0));
    let corner = a * kurbo::Point::new(0.0, 0.0);
    assert_eq!(corner, kurbo::Point::new(50.0 - 176.0, 50.0));
}

#[test]
fn identity_state_is_identity_affine() {
    let s = VisualState {
        opacity: 1.0,
        scale: 1.0,
        x: 0.0,
    };
    assert_eq!(s.to_affine(320.0), Affine::IDENTITY);
}
