/// Absolute tolerance for numeric closeness checks.
pub const ABS_TOL: f64 = 1e-8;
/// Relative tolerance for numeric closeness checks.
pub const REL_TOL: f64 = 1e-5;

/// Dot product of two equal-length slices.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Whether `a` is numerically close to `b`: |a - b| <= ABS_TOL + REL_TOL * |b|.
///
/// Exact floating-point equality is never required anywhere in the pipeline;
/// equality constraints and the strong-duality comparison both go through
/// this test.
pub fn is_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= ABS_TOL + REL_TOL * b.abs()
}
