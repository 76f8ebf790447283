//! Euclidean distance over the two vector representations.
//!
//! Both kernels sum squared differences in ascending index order with no
//! compensation, so for the same input they produce bit-identical results.
//! Only the memory access pattern differs.

/// Distance between two contiguous buffers.
///
/// Iterates over the length of `v1`; panics if `v2` is shorter.
#[inline]
#[allow(clippy::needless_range_loop)]
pub fn euclidean_on_arrays(v1: &[f64], v2: &[f64]) -> f64 {
    let mut square_diff = 0.0;
    for i in 0..v1.len() {
        square_diff += (v1[i] - v2[i]) * (v1[i] - v2[i]);
    }
    square_diff.sqrt()
}

/// Distance between two sequences of individually boxed values.
///
/// Each squared term is boxed and folded into a boxed accumulator, so every
/// step dereferences a separate allocation. Empty input yields `0.0`.
/// Panics if `l2` is shorter than `l1`.
#[inline]
pub fn euclidean_on_lists(l1: &[Box<f64>], l2: &[Box<f64>]) -> f64 {
    let square_diff: Box<f64> = (0..l1.len())
        .map(|i| Box::new((*l1[i] - *l2[i]) * (*l1[i] - *l2[i])))
        .reduce(|acc, term| Box::new(*acc + *term))
        .unwrap_or_else(|| Box::new(0.0));
    (*square_diff).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(values: &[f64]) -> Vec<Box<f64>> {
        values.iter().copied().map(Box::new).collect()
    }

    #[test]
    fn worked_example() {
        let expected = 27f64.sqrt();
        assert_eq!(euclidean_on_arrays(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), expected);
        assert_eq!(
            euclidean_on_lists(&boxed(&[1.0, 2.0, 3.0]), &boxed(&[4.0, 5.0, 6.0])),
            expected
        );
        assert!((expected - 5.196152423).abs() < 1e-9);
    }

    #[test]
    fn identical_vectors_are_zero_apart() {
        let v = [0.25, -8.0, 1e10];
        assert_eq!(euclidean_on_arrays(&v, &v), 0.0);
        assert_eq!(euclidean_on_lists(&boxed(&v), &boxed(&v)), 0.0);
    }

    #[test]
    fn representations_agree_bit_for_bit() {
        let a: Vec<f64> = (0..257).map(|i| (i as f64 * 0.731).sin() * 97.3).collect();
        let b: Vec<f64> = (0..257).map(|i| (i as f64 * 1.113).cos() * -41.9).collect();

        let flat = euclidean_on_arrays(&a, &b);
        let list = euclidean_on_lists(&boxed(&a), &boxed(&b));
        assert_eq!(flat.to_bits(), list.to_bits());
    }

    #[test]
    fn empty_vectors() {
        assert_eq!(euclidean_on_arrays(&[], &[]), 0.0);
        assert_eq!(euclidean_on_lists(&[], &[]), 0.0);
    }

    #[test]
    fn longer_second_vector_is_truncated() {
        assert_eq!(euclidean_on_arrays(&[3.0], &[0.0, 100.0]), 3.0);
        assert_eq!(euclidean_on_lists(&boxed(&[3.0]), &boxed(&[0.0, 100.0])), 3.0);
    }

    #[test]
    #[should_panic]
    fn shorter_second_vector_panics() {
        euclidean_on_arrays(&[1.0, 2.0], &[1.0]);
    }
}
