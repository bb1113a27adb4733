//! Interpolation primitives for tabulated Earth orientation parameters.
//!
//! Two methods: a 2-point linear interpolant for bracket lookups and the
//! full N-point Lagrange basis-polynomial sum for window lookups. Lagrange
//! is O(n^2), exact for polynomials of degree below n, and reproduces a
//! node's y-value exactly when the query lands on that node.

use eop_core::{EopError, EopResult};

/// Linear interpolation through exactly two points.
pub fn linear(xs: &[f64], ys: &[f64], x: f64) -> EopResult<f64> {
    if xs.len() != 2 || ys.len() != 2 {
        return Err(EopError::invalid_input(format!(
            "linear interpolation requires exactly 2 points, got {} xs and {} ys",
            xs.len(),
            ys.len()
        )));
    }

    let t = (x - xs[0]) / (xs[1] - xs[0]);
    Ok(ys[0] + t * (ys[1] - ys[0]))
}

/// Lagrange polynomial interpolation through `n >= 2` points.
pub fn lagrange(xs: &[f64], ys: &[f64], x: f64) -> EopResult<f64> {
    let n = xs.len();

    if n != ys.len() {
        return Err(EopError::invalid_input(format!(
            "xs and ys must have the same length, got {n} and {}",
            ys.len()
        )));
    }
    if n < 2 {
        return Err(EopError::invalid_input(format!(
            "lagrange interpolation requires at least 2 points, got {n}"
        )));
    }

    let mut result = 0.0;
    for i in 0..n {
        let mut basis = 1.0;
        for j in 0..n {
            if i == j {
                continue;
            }
            basis *= (x - xs[j]) / (xs[i] - xs[j]);
        }
        result += ys[i] * basis;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_midpoint_is_mean() {
        let y = linear(&[41684.0, 41685.0], &[0.8, 0.6], 41684.5).unwrap();
        assert!((y - 0.7).abs() < 1e-15);
    }

    #[test]
    fn test_linear_endpoints() {
        let xs = [0.0, 2.0];
        let ys = [1.0, 5.0];
        assert_eq!(linear(&xs, &ys, 0.0).unwrap(), 1.0);
        assert_eq!(linear(&xs, &ys, 2.0).unwrap(), 5.0);
        assert_eq!(linear(&xs, &ys, 1.0).unwrap(), 3.0);
    }

    #[test]
    fn test_linear_rejects_wrong_arity() {
        assert!(linear(&[1.0], &[1.0], 1.0).is_err());
        assert!(linear(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], 1.5).is_err());
        assert!(linear(&[1.0, 2.0], &[1.0], 1.5).is_err());
    }

    #[test]
    fn test_lagrange_reproduces_nodes() {
        let xs = [41684.0, 41685.0, 41686.0, 41687.0];
        let ys = [0.8084, 0.8055, 0.8027, 0.7998];
        for (i, &x) in xs.iter().enumerate() {
            let y = lagrange(&xs, &ys, x).unwrap();
            assert_eq!(y, ys[i], "node {i} not reproduced exactly");
        }
    }

    #[test]
    fn test_lagrange_exact_for_cubic() {
        // Four nodes determine a cubic exactly; sample y = x^3
        let xs: [f64; 4] = [1.0, 2.0, 3.0, 4.0];
        let ys: Vec<f64> = xs.iter().map(|x| x.powi(3)).collect();
        let y = lagrange(&xs, &ys, 2.5).unwrap();
        assert!((y - 15.625).abs() < 1e-12);
    }

    #[test]
    fn test_lagrange_two_points_matches_linear() {
        let xs = [10.0, 12.0];
        let ys = [3.0, 7.0];
        let a = lagrange(&xs, &ys, 10.5).unwrap();
        let b = linear(&xs, &ys, 10.5).unwrap();
        assert!((a - b).abs() < 1e-15);
    }

    #[test]
    fn test_lagrange_rejects_bad_input() {
        assert!(lagrange(&[1.0], &[1.0], 1.0).is_err());
        assert!(lagrange(&[1.0, 2.0], &[1.0], 1.5).is_err());
        assert!(lagrange(&[], &[], 0.0).is_err());
    }
}
