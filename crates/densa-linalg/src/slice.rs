//! Strided 1-D views into a matrix's storage.
//!
//! A slice is a `(first, limit, step)` walk over the parent's flat storage:
//! the flat indices `first, first + step, ...` that are below `limit`. Slices
//! never copy. Writing through a [`SliceMut`] writes the parent.

use std::ops::{Index, IndexMut};

use densa_scalar::Scalar;

use crate::aggregator::Aggregator;

#[inline]
fn normalize(len: usize, first: usize, limit: usize, step: usize) -> (usize, usize) {
    assert!(step > 0, "slice step must be positive");
    let limit = limit.min(len);
    (first.min(limit), limit)
}

#[inline]
fn count_of(first: usize, limit: usize, step: usize) -> usize {
    (limit - first).div_ceil(step)
}

fn largest<'a, N: Scalar + 'a>(values: impl Iterator<Item = &'a N>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, value) in values.enumerate() {
        let norm = value.norm();
        match best {
            Some((_, best_norm)) if norm <= best_norm => {}
            _ => best = Some((i, norm)),
        }
    }
    best.map(|(i, _)| i)
}

/// A read-only strided view.
#[derive(Debug)]
pub struct Slice<'a, N> {
    data: &'a [N],
    first: usize,
    limit: usize,
    step: usize,
}

impl<N> Clone for Slice<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for Slice<'_, N> {}

impl<'a, N> Slice<'a, N> {
    /// Creates a view of `data` at `first, first + step, ...` below `limit`.
    ///
    /// `limit` is clamped to the length of `data`.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero.
    #[must_use]
    pub fn new(data: &'a [N], first: usize, limit: usize, step: usize) -> Self {
        let (first, limit) = normalize(data.len(), first, limit, step);
        Self {
            data,
            first,
            limit,
            step,
        }
    }

    /// Number of elements in the view.
    #[must_use]
    pub fn count(&self) -> usize {
        count_of(self.first, self.limit, self.step)
    }

    /// Returns true if the view is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first == self.limit
    }

    /// Flat index in the parent of the `i`-th element.
    #[must_use]
    pub fn parent_index(&self, i: usize) -> usize {
        self.first + i * self.step
    }

    /// Returns the `i`-th element of the view.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<&'a N> {
        let data: &'a [N] = self.data;
        if i < self.count() {
            Some(&data[self.parent_index(i)])
        } else {
            None
        }
    }

    /// Iterates the view in order.
    pub fn iter(&self) -> impl Iterator<Item = &'a N> + 'a {
        let data: &'a [N] = self.data;
        data[self.first..self.limit].iter().step_by(self.step)
    }

    /// Copies the view into a vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<N>
    where
        N: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<N: Scalar> Slice<'_, N> {
    /// Position (within the view) of the element with the largest norm.
    #[must_use]
    pub fn index_of_largest(&self) -> Option<usize> {
        largest(self.iter())
    }

    /// Reduces the view.
    #[must_use]
    pub fn aggregate(&self, aggregator: Aggregator) -> N {
        aggregator.aggregate(self.iter())
    }

    /// Tests every element with [`Scalar::is_small`].
    #[must_use]
    pub fn is_all_small(&self, compared_to: f64) -> bool {
        self.iter().all(|v| v.is_small(compared_to))
    }
}

impl<N> Index<usize> for Slice<'_, N> {
    type Output = N;

    fn index(&self, i: usize) -> &Self::Output {
        assert!(i < self.count(), "slice index {i} out of range");
        &self.data[self.parent_index(i)]
    }
}

/// A mutable strided view.
#[derive(Debug)]
pub struct SliceMut<'a, N> {
    data: &'a mut [N],
    first: usize,
    limit: usize,
    step: usize,
}

impl<'a, N> SliceMut<'a, N> {
    /// Creates a mutable view of `data` at `first, first + step, ...` below
    /// `limit`.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero.
    #[must_use]
    pub fn new(data: &'a mut [N], first: usize, limit: usize, step: usize) -> Self {
        let (first, limit) = normalize(data.len(), first, limit, step);
        Self {
            data,
            first,
            limit,
            step,
        }
    }

    /// Number of elements in the view.
    #[must_use]
    pub fn count(&self) -> usize {
        count_of(self.first, self.limit, self.step)
    }

    /// Returns true if the view is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first == self.limit
    }

    /// Flat index in the parent of the `i`-th element.
    #[must_use]
    pub fn parent_index(&self, i: usize) -> usize {
        self.first + i * self.step
    }

    /// Reborrows as a read-only view.
    #[must_use]
    pub fn as_slice(&self) -> Slice<'_, N> {
        Slice {
            data: &*self.data,
            first: self.first,
            limit: self.limit,
            step: self.step,
        }
    }

    /// Returns the `i`-th element of the view.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<&N> {
        if i < self.count() {
            Some(&self.data[self.parent_index(i)])
        } else {
            None
        }
    }

    /// Returns the `i`-th element of the view mutably.
    pub fn get_mut(&mut self, i: usize) -> Option<&mut N> {
        if i < self.count() {
            let index = self.parent_index(i);
            Some(&mut self.data[index])
        } else {
            None
        }
    }

    /// Overwrites the `i`-th element.
    pub fn set(&mut self, i: usize, value: N) {
        self[i] = value;
    }

    /// Iterates the view in order.
    pub fn iter(&self) -> impl Iterator<Item = &N> + '_ {
        self.data[self.first..self.limit].iter().step_by(self.step)
    }

    /// Iterates the view mutably in order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut N> + '_ {
        self.data[self.first..self.limit]
            .iter_mut()
            .step_by(self.step)
    }

    /// Overwrites every element with `value`.
    pub fn fill(&mut self, value: &N)
    where
        N: Clone,
    {
        for slot in self.iter_mut() {
            slot.clone_from(value);
        }
    }

    /// Replaces every element `x` with `f(x)`.
    pub fn modify(&mut self, mut f: impl FnMut(&N) -> N) {
        for slot in self.iter_mut() {
            *slot = f(slot);
        }
    }

    /// Copies the view into a vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<N>
    where
        N: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<N> Index<usize> for SliceMut<'_, N> {
    type Output = N;

    fn index(&self, i: usize) -> &Self::Output {
        assert!(i < self.count(), "slice index {i} out of range");
        &self.data[self.parent_index(i)]
    }
}

impl<N> IndexMut<usize> for SliceMut<'_, N> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        assert!(i < self.count(), "slice index {i} out of range");
        let index = self.parent_index(i);
        &mut self.data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strided_walk() {
        let data: Vec<f64> = (0..10).map(f64::from).collect();
        let s = Slice::new(&data, 1, 10, 3);
        assert_eq!(s.count(), 3);
        assert_eq!(s.to_vec(), vec![1.0, 4.0, 7.0]);
        assert_eq!(s[2], 7.0);
        assert_eq!(s.get(3), None);
        assert_eq!(s.parent_index(1), 4);
    }

    #[test]
    fn test_limit_is_clamped() {
        let data = [1.0, 2.0, 3.0];
        let s = Slice::new(&data, 2, 100, 1);
        assert_eq!(s.to_vec(), vec![3.0]);
        let empty = Slice::new(&data, 5, 100, 1);
        assert!(empty.is_empty());
        assert_eq!(empty.count(), 0);
    }

    #[test]
    fn test_mutation_reaches_parent() {
        let mut data = vec![0.0; 6];
        {
            let mut s = SliceMut::new(&mut data, 0, 6, 2);
            s.fill(&5.0);
            s.set(1, 9.0);
            s.modify(|x| x + 1.0);
        }
        assert_eq!(data, vec![6.0, 0.0, 10.0, 0.0, 6.0, 0.0]);
    }

    #[test]
    fn test_largest_and_aggregate() {
        let data = [1.0, -8.0, 3.0, 8.0];
        let s = Slice::new(&data, 0, 4, 1);
        assert_eq!(s.index_of_largest(), Some(1));
        assert_eq!(s.aggregate(Aggregator::Sum), 4.0);
        assert!(!s.is_all_small(1.0));
        let empty: [f64; 0] = [];
        assert_eq!(Slice::new(&empty, 0, 0, 1).index_of_largest(), None);
    }
}
