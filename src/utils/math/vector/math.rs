use std::cmp::Ordering;

use num::Float;

use super::ZeroSpVec;

impl<N> ZeroSpVec<N>
where
    N: Float,
{
    /// Dot product of two sparse vectors (merge join over sorted indices)
    ///
    /// # Arguments
    /// * `other` - the other vector, same dimension
    ///
    /// # Returns
    /// * `N` - dot product
    #[inline]
    pub fn dot(&self, other: &Self) -> N {
        debug_assert_eq!(
            self.len(),
            other.len(),
            "Vectors must be of the same length to compute dot product."
        );

        let mut result = N::zero();
        if self.is_zero_vec() || other.is_zero_vec() {
            return result;
        }

        let mut a_it = self.raw_iter();
        let mut b_it = other.raw_iter();
        let mut a_next = a_it.next();
        let mut b_next = b_it.next();
        while let (Some((ia, va)), Some((ib, vb))) = (a_next, b_next) {
            match ia.cmp(&ib) {
                Ordering::Equal => {
                    result = result + *va * *vb;
                    a_next = a_it.next();
                    b_next = b_it.next();
                }
                Ordering::Less => a_next = a_it.next(),
                Ordering::Greater => b_next = b_it.next(),
            }
        }
        result
    }

    #[inline]
    pub fn norm_sq(&self) -> N {
        self.raw_iter().fold(N::zero(), |acc, (_, v)| acc + *v * *v)
    }

    /// Euclidean norm
    #[inline]
    pub fn norm(&self) -> N {
        self.norm_sq().sqrt()
    }

    /// Scale to unit length in place.
    /// The zero vector stays the zero vector.
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > N::zero() {
            let inv = N::one() / norm;
            for v in self.vals.iter_mut() {
                *v = *v * inv;
            }
        }
    }

    /// Multiply element-wise by a dense weight table indexed like this vector.
    /// Indices past the end of `weights` become zero and are dropped.
    pub fn scale_by(&mut self, weights: &[N]) {
        let mut inds = Vec::with_capacity(self.nnz());
        let mut vals = Vec::with_capacity(self.nnz());
        for (idx, val) in self.raw_iter() {
            let w = weights.get(idx).copied().unwrap_or_else(N::zero);
            let scaled = *val * w;
            if !scaled.is_zero() {
                inds.push(idx as u32);
                vals.push(scaled);
            }
        }
        self.inds = inds;
        self.vals = vals;
    }
}

#[cfg(test)]
mod tests {
    use crate::utils::math::vector::ZeroSpVec;

    #[test]
    fn dot_only_counts_shared_indices() {
        let a = ZeroSpVec::from_pairs(5, vec![(0, 1.0), (2, 2.0), (4, 3.0)]);
        let b = ZeroSpVec::from_pairs(5, vec![(1, 5.0), (2, 4.0), (4, 1.0)]);
        assert_eq!(a.dot(&b), 2.0 * 4.0 + 3.0 * 1.0);
        assert_eq!(b.dot(&a), a.dot(&b));
    }

    #[test]
    fn normalize_gives_unit_norm() {
        let mut v = ZeroSpVec::from_pairs(3, vec![(0, 3.0_f64), (2, 4.0)]);
        v.normalize();
        assert!((v.norm() - 1.0).abs() < 1e-12);
        assert!((v.get(0).unwrap() - 0.6).abs() < 1e-12);
        assert!((v.get(2).unwrap() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn normalize_leaves_zero_vector_alone() {
        let mut v: ZeroSpVec<f64> = ZeroSpVec::from_pairs(4, vec![(2, 0.0)]);
        v.normalize();
        assert!(v.is_zero_vec());
        assert_eq!(v.norm(), 0.0);
    }

    #[test]
    fn scale_by_applies_weights() {
        let mut v = ZeroSpVec::from_pairs(3, vec![(0, 2.0_f64), (1, 1.0), (2, 5.0)]);
        v.scale_by(&[0.5, 0.0, 2.0]);
        assert_eq!(v.to_dense(), vec![1.0, 0.0, 10.0]);
        assert_eq!(v.nnz(), 2);
    }
}
