//! Reductions over ranges of matrix elements.

use densa_scalar::Scalar;

/// A reduction applied to a row, column, diagonal or range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Aggregator {
    /// Sum of the elements; zero when empty.
    Sum,
    /// Product of the elements; one when empty.
    Product,
    /// Product of the squared elements; one when empty.
    Product2,
    /// Element with the smallest real projection.
    Minimum,
    /// Element with the largest real projection.
    Maximum,
    /// Element with the largest magnitude.
    Largest,
    /// Element with the smallest magnitude.
    Smallest,
}

impl Aggregator {
    /// Reduces `values` to a single element.
    ///
    /// The selecting aggregators (`Minimum`, `Maximum`, `Largest`,
    /// `Smallest`) return zero for an empty input and keep the first
    /// element on ties.
    pub fn aggregate<'a, N, I>(self, values: I) -> N
    where
        N: Scalar + 'a,
        I: IntoIterator<Item = &'a N>,
    {
        let values = values.into_iter();
        match self {
            Aggregator::Sum => values.fold(N::zero(), |acc, v| acc + v.clone()),
            Aggregator::Product => values.fold(N::one(), |acc, v| acc * v.clone()),
            Aggregator::Product2 => {
                values.fold(N::one(), |acc, v| acc * v.clone() * v.clone())
            }
            Aggregator::Minimum => select(values, Scalar::to_f64, |candidate, best| {
                candidate < best
            }),
            Aggregator::Maximum => select(values, Scalar::to_f64, |candidate, best| {
                candidate > best
            }),
            Aggregator::Largest => select(values, Scalar::norm, |candidate, best| {
                candidate > best
            }),
            Aggregator::Smallest => select(values, Scalar::norm, |candidate, best| {
                candidate < best
            }),
        }
    }
}

fn select<'a, N, I>(values: I, key: fn(&N) -> f64, better: fn(f64, f64) -> bool) -> N
where
    N: Scalar + 'a,
    I: Iterator<Item = &'a N>,
{
    let mut best: Option<(&N, f64)> = None;
    for value in values {
        let k = key(value);
        match best {
            Some((_, best_key)) if !better(k, best_key) => {}
            _ => best = Some((value, k)),
        }
    }
    best.map_or_else(N::zero, |(value, _)| value.clone())
}
