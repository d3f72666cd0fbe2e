use crate::config::Number;
use wide::f64x4;

/// Rescale `vector` to unit Euclidean norm.
///
/// An all-zero vector has no direction and maps to the zero vector.
pub fn normalize_vector(vector: &[Number]) -> Vec<Number> {
    let sum_of_squares: Number = vector.iter().map(|&x| x * x).sum();
    let scale = if sum_of_squares > 0.0 {
        1.0 / sum_of_squares.sqrt()
    } else {
        0.0
    };
    vector.iter().map(|&x| x * scale).collect()
}

/// Euclidean distance between `a` and `b`, divided by the dimension and expressed as a
/// percentage: `sqrt(sum((a_i - b_i)^2)) / n * 100`.
///
/// Returns `None` when the vectors are not comparable (different lengths, or both empty).
pub fn compute_difference(a: &[Number], b: &[Number]) -> Option<Number> {
    if a.len() != b.len() {
        tracing::trace!("Vector length mismatch: {} vs {}", a.len(), b.len());
        return None;
    }
    if a.is_empty() {
        return None;
    }

    let len = a.len();
    let simd_len = len - (len % 4);
    let mut acc = f64x4::splat(0.0);

    for i in (0..simd_len).step_by(4) {
        let va = f64x4::new([a[i], a[i + 1], a[i + 2], a[i + 3]]);
        let vb = f64x4::new([b[i], b[i + 1], b[i + 2], b[i + 3]]);
        let diff = va - vb;
        acc += diff * diff;
    }

    let mut sum = acc.reduce_add();

    // Remaining elements
    for i in simd_len..len {
        let diff = a[i] - b[i];
        sum += diff * diff;
    }

    Some(sum.sqrt() / len as Number * 100.0)
}

/// Euclidean length of `vector`.
pub fn l2_norm(vector: &[Number]) -> Number {
    vector.iter().map(|&x| x * x).sum::<Number>().sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: Number = 1e-9;

    #[test]
    fn normalized_vector_has_unit_norm() {
        let v = normalize_vector(&[3.0, 4.0]);
        assert!((v[0] - 0.6).abs() < TOLERANCE);
        assert!((v[1] - 0.8).abs() < TOLERANCE);
        assert!((l2_norm(&v) - 1.0).abs() < TOLERANCE);

        let v = normalize_vector(&[-2.5, 0.1, 7.0, 1e-3, 42.0]);
        assert!((l2_norm(&v) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn zero_vector_stays_zero() {
        assert_eq!(normalize_vector(&[0.0, 0.0, 0.0]), vec![0.0, 0.0, 0.0]);
        assert!(normalize_vector(&[]).is_empty());
    }

    #[test]
    fn normalization_ignores_positive_scale() {
        let v = [0.3, -1.2, 4.4, 0.05];
        let scaled: Vec<Number> = v.iter().map(|x| x * 17.5).collect();
        let a = normalize_vector(&v);
        let b = normalize_vector(&scaled);
        for (x, y) in a.iter().zip(&b) {
            assert!((x - y).abs() < TOLERANCE);
        }
    }

    #[test]
    fn difference_of_identical_vectors_is_zero() {
        let v = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7];
        assert_eq!(compute_difference(&v, &v), Some(0.0));
    }

    #[test]
    fn difference_is_positive_when_any_component_differs() {
        let a = [0.1, 0.2, 0.3, 0.4, 0.5];
        let mut b = a;
        b[4] += 1e-6;
        assert!(compute_difference(&a, &b).unwrap() > 0.0);
    }

    #[test]
    fn difference_is_symmetric() {
        let a = [0.9, -0.3, 0.0, 1.5, 2.25, -7.0];
        let b = [0.1, 0.4, -0.2, 1.0, 2.0, 3.0];
        assert_eq!(compute_difference(&a, &b), compute_difference(&b, &a));
    }

    #[test]
    fn difference_scales_distance_by_dimension() {
        let d = compute_difference(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
        assert!((d - 2f64.sqrt() / 2.0 * 100.0).abs() < TOLERANCE);
        assert_eq!(format!("{:.4}", d), "70.7107");

        // Crosses the SIMD boundary: four lanes plus a tail of one.
        let a = [1.0; 5];
        let b = [0.0; 5];
        let d = compute_difference(&a, &b).unwrap();
        assert!((d - 5f64.sqrt() / 5.0 * 100.0).abs() < TOLERANCE);
    }

    #[test]
    fn length_mismatch_is_not_comparable() {
        assert_eq!(compute_difference(&[1.0, 2.0, 3.0], &[1.0, 2.0]), None);
        assert_eq!(compute_difference(&[], &[1.0]), None);
        assert_eq!(compute_difference(&[], &[]), None);
    }
}
