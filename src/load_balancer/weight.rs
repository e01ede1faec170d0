//! Weights and the cumulative-weight table.
//!
//! # Responsibilities
//! - Abstract over integer and floating point weights
//! - Build the prefix-sum table shared by the weighted policies
//! - Map a point in `[0, total)` to the server owning it

use std::fmt::Debug;

use rand::distributions::uniform::SampleUniform;

use crate::load_balancer::SelectorError;

/// A numeric weight usable by the weighted policies.
pub trait Weight: SampleUniform + PartialOrd + Copy + Debug + Send + Sync + 'static {
    const ZERO: Self;

    /// Addition that fails instead of overflowing (or going non-finite).
    fn checked_add(self, other: Self) -> Option<Self>;

    /// False for negative values and NaN.
    fn is_non_negative(self) -> bool;
}

macro_rules! unsigned_weight {
    ($($ty:ty),*) => {$(
        impl Weight for $ty {
            const ZERO: Self = 0;

            fn checked_add(self, other: Self) -> Option<Self> {
                <$ty>::checked_add(self, other)
            }

            fn is_non_negative(self) -> bool {
                true
            }
        }
    )*};
}

macro_rules! signed_weight {
    ($($ty:ty),*) => {$(
        impl Weight for $ty {
            const ZERO: Self = 0;

            fn checked_add(self, other: Self) -> Option<Self> {
                <$ty>::checked_add(self, other)
            }

            fn is_non_negative(self) -> bool {
                self >= 0
            }
        }
    )*};
}

macro_rules! float_weight {
    ($($ty:ty),*) => {$(
        impl Weight for $ty {
            const ZERO: Self = 0.0;

            fn checked_add(self, other: Self) -> Option<Self> {
                let sum = self + other;
                sum.is_finite().then_some(sum)
            }

            fn is_non_negative(self) -> bool {
                self >= 0.0
            }
        }
    )*};
}

unsigned_weight!(u32, u64, usize);
signed_weight!(i32, i64);
float_weight!(f32, f64);

/// A pool entry paired with its weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Weighted<T, W = u32> {
    pub item: T,
    pub weight: W,
}

impl<T, W> Weighted<T, W> {
    pub fn new(item: T, weight: W) -> Self {
        Self { item, weight }
    }
}

/// Running sums of the pool weights, in pool order.
///
/// `table[i]` is the sum of `weight[0..=i]`; the last entry is the total.
#[derive(Debug, Clone)]
pub(crate) struct CumulativeWeights<W> {
    table: Vec<W>,
    total: W,
}

impl<W: Weight> CumulativeWeights<W> {
    /// Build the table, rejecting negative weights and overflowing sums.
    pub(crate) fn build(weights: impl IntoIterator<Item = W>) -> Result<Self, SelectorError> {
        let mut table = Vec::new();
        let mut total = W::ZERO;

        for (index, weight) in weights.into_iter().enumerate() {
            if !weight.is_non_negative() {
                return Err(SelectorError::InvalidConfiguration(format!(
                    "server at index {index} has invalid weight {weight:?}"
                )));
            }
            let next = total.checked_add(weight).ok_or_else(|| {
                SelectorError::InvalidConfiguration(format!(
                    "total weight overflows at server index {index}"
                ))
            })?;
            // A positive weight must widen its bucket, or the server is unreachable.
            if weight > W::ZERO && next == total {
                return Err(SelectorError::InvalidConfiguration(format!(
                    "weight {weight:?} of server at index {index} is lost in total {total:?}"
                )));
            }
            total = next;
            table.push(total);
        }

        if table.is_empty() {
            return Err(SelectorError::InvalidConfiguration(
                "server list cannot be empty".to_string(),
            ));
        }

        Ok(Self { table, total })
    }

    pub(crate) fn total(&self) -> W {
        self.total
    }

    /// True when no server can ever be selected.
    pub(crate) fn is_exhausted(&self) -> bool {
        self.total == W::ZERO
    }

    /// First index whose running sum is strictly greater than `point`.
    ///
    /// Binary search over the non-decreasing table; the result is the same
    /// index a front-to-back scan would stop at.
    pub(crate) fn locate(&self, point: W) -> Result<usize, SelectorError> {
        let index = self.table.partition_point(|sum| *sum <= point);
        if index < self.table.len() {
            Ok(index)
        } else {
            tracing::error!(
                draw = ?point,
                total = ?self.total,
                "Point not covered by cumulative weight table"
            );
            Err(SelectorError::InternalInvariantViolation(format!(
                "draw {point:?} not covered by cumulative weights (total {:?})",
                self.total
            )))
        }
    }
}
