use ndarray::ArrayView1;

/// Computes the squared Euclidean distance between a feature vector and a
/// centroid row.
///
/// The square root is never taken: squared distance is monotone in the true
/// distance, so nearest-centroid comparisons are unaffected and the scan
/// stays cheap.
///
/// # Parameters
/// - `a`: A slice of floating-point numbers representing a point's features.
/// - `b`: A centroid row of the same length.
///
/// # Returns
/// The sum over all components of the squared componentwise difference.
pub fn euclidean_sq(a: &[f64], b: ArrayView1<f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::arr1;

    #[test]
    fn identical_vectors_are_at_distance_zero() {
        let b = arr1(&[1.5, -2.0, 0.25]);
        assert_eq!(euclidean_sq(&[1.5, -2.0, 0.25], b.view()), 0.0);
    }

    #[test]
    fn squared_distance_skips_the_square_root() {
        let b = arr1(&[3.0, 4.0]);
        // 3-4-5 triangle: squared distance is 25, not 5
        assert_abs_diff_eq!(euclidean_sq(&[0.0, 0.0], b.view()), 25.0);
    }

    #[test]
    fn single_dimension() {
        let b = arr1(&[2.0]);
        assert_abs_diff_eq!(euclidean_sq(&[-1.0], b.view()), 9.0);
    }
}
