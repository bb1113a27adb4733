#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// Evaluates a polynomial at `t` with coefficients ordered from the constant
/// term upward (Horner's method, highest power first).
#[inline]
pub fn horner(coefficients: &[f64], t: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, c| acc * t + c)
}
