use super::*;

#[test]
fn interpolate_clamps_to_output() {
    assert_eq!(interpolate(-1.0, (0.0, 1.0), (0.0, 1.0)), 0.0);
    assert_eq!(interpolate(2.0, (0.0, 1.0), (0.0, 1.0)), 1.0);
    assert_eq!(interpolate(0.25, (0.0, 1.0), (1.0, 0.0)), 0.75);
}

#[test]
fn interpolate_constant_output_ignores_input() {
    for v in [0.0, 0.3, 1.0] {
        assert_eq!(interpolate(v, (0.0, 1.0), (1.0, 1.0)), 1.0);
    }
}

#[test]
fn interpolate_degenerate_input_is_step() {
    assert_eq!(interpolate(4.0, (5.0, 5.0), (0.0, 1.0)), 0.0);
    assert_eq!(interpolate(5.0, (5.0, 5.0), (0.0, 1.0)), 1.0);
}

#[test]
fn overlap_len_of_disjoint_and_nested() {
    assert_eq!(overlap_len((0.0, 1.0), (2.0, 3.0)), 0.0);
    assert_eq!(overlap_len((0.0, 10.0), (2.0, 3.0)), 1.0);
    assert_eq!(overlap_len((0.0, 5.0), (4.0, 9.0)), 1.0);
}
