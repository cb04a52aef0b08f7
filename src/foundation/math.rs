/// Map `value` from `input` onto `output` linearly, clamping to the output range.
///
/// A degenerate input range (`input.0 == input.1`) yields the output start for
/// values below it and the output end otherwise.
pub(crate) fn interpolate(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (i0, i1) = input;
    let (o0, o1) = output;
    let span = i1 - i0;
    if span == 0.0 {
        return if value < i0 { o0 } else { o1 };
    }
    let t = ((value - i0) / span).clamp(0.0, 1.0);
    o0 + (o1 - o0) * t
}

/// Length of the overlap of two closed intervals, `0.0` when disjoint.
pub(crate) fn overlap_len(a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.1.min(b.1) - a.0.max(b.0)).max(0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
