pub mod math;

use num::Num;
use serde::{Deserialize, Serialize};

/// ZeroSpVec is a sparse vector that treats zero elements as absent.
/// It holds `inds` and `vals`:
/// `inds` keeps the index of each stored element,
/// `vals` keeps the value of each stored element.
///
/// Stored elements are guaranteed to be sorted by ascending index,
/// and no stored value is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZeroSpVec<N> {
    inds: Vec<u32>,
    vals: Vec<N>,
    len: usize,
}

impl<N> ZeroSpVec<N>
where
    N: Num + Copy,
{
    #[inline]
    fn with_capacity(cap: usize) -> Self {
        ZeroSpVec {
            inds: Vec::with_capacity(cap),
            vals: Vec::with_capacity(cap),
            len: 0,
        }
    }

    /// Build a vector of dimension `len` from `(index, value)` pairs.
    /// Pairs may come in any order; zero values are skipped.
    ///
    /// # Arguments
    /// * `len` - dimension of the vector
    /// * `pairs` - elements; every index must be `< len` and appear at most once
    pub fn from_pairs<I>(len: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (usize, N)>,
    {
        let mut pairs: Vec<(usize, N)> = pairs
            .into_iter()
            .filter(|(_, v)| !v.is_zero())
            .collect();
        pairs.sort_unstable_by_key(|(idx, _)| *idx);
        debug_assert!(pairs.windows(2).all(|w| w[0].0 < w[1].0), "duplicate index");
        debug_assert!(pairs.last().map_or(true, |(idx, _)| *idx < len), "index out of range");

        let mut vec = ZeroSpVec::with_capacity(pairs.len());
        for (idx, val) in pairs {
            vec.inds.push(idx as u32);
            vec.vals.push(val);
        }
        vec.len = len;
        vec
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// number of non-zero elements
    #[inline]
    pub fn nnz(&self) -> usize {
        self.vals.len()
    }

    /// true when every element is zero
    #[inline]
    pub fn is_zero_vec(&self) -> bool {
        self.vals.is_empty()
    }

    /// Element at `index`, `None` when out of range
    #[inline]
    pub fn get(&self, index: usize) -> Option<N> {
        if index >= self.len {
            return None;
        }
        match self.inds.binary_search(&(index as u32)) {
            Ok(pos) => Some(self.vals[pos]),
            Err(_) => Some(N::zero()),
        }
    }

    /// Iterate non-zero elements as `(index, &value)` in ascending index order
    #[inline]
    pub fn raw_iter(&self) -> impl Iterator<Item = (usize, &N)> + '_ {
        self.inds.iter().map(|&i| i as usize).zip(self.vals.iter())
    }

    /// Check the storage invariants: one value per index, indices strictly
    /// ascending and inside the dimension, no stored zero.
    /// Vectors built through this API always pass; decoded ones may not.
    pub fn check_layout(&self) -> Result<(), String> {
        if self.inds.len() != self.vals.len() {
            return Err(format!(
                "{} indices but {} values",
                self.inds.len(),
                self.vals.len()
            ));
        }
        if let Some(w) = self.inds.windows(2).find(|w| w[0] >= w[1]) {
            return Err(format!("index {} follows {}, indices must ascend", w[1], w[0]));
        }
        if let Some(&last) = self.inds.last() {
            if last as usize >= self.len {
                return Err(format!("index {last} out of range for dimension {}", self.len));
            }
        }
        if self.vals.iter().any(|v| v.is_zero()) {
            return Err("explicit zero stored".to_string());
        }
        Ok(())
    }

    /// Dense copy, mostly for debugging and tests
    pub fn to_dense(&self) -> Vec<N> {
        let mut dense = vec![N::zero(); self.len];
        for (idx, val) in self.raw_iter() {
            dense[idx] = *val;
        }
        dense
    }
}
