use rand::distributions::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::amount::Amount;
use crate::error::Error;

/// Lower bound of the default capacity range used for road segments.
pub const DEFAULT_MIN_CAPACITY: u16 = 1;
/// Upper bound (inclusive) of the default capacity range used for road segments.
pub const DEFAULT_MAX_CAPACITY: u16 = 18888;

/// Assigns a capacity to an arc that came without one.
pub trait CapacityAssigner<NodeId, A> {
    fn capacity(&mut self, tail: &NodeId, head: &NodeId) -> A;
}

impl<NodeId, A, F> CapacityAssigner<NodeId, A> for F
where
    F: FnMut(&NodeId, &NodeId) -> A,
{
    fn capacity(&mut self, tail: &NodeId, head: &NodeId) -> A {
        self(tail, head)
    }
}

/// Gives every arc the same capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConstantCapacity<A>(pub A);

impl<NodeId, A: Copy> CapacityAssigner<NodeId, A> for ConstantCapacity<A> {
    fn capacity(&mut self, _tail: &NodeId, _head: &NodeId) -> A {
        self.0
    }
}

/// Draws every capacity independently and uniformly from `low..=high`.
#[derive(Clone, Debug)]
pub struct RandomCapacity<A, R = StdRng> {
    rng: R,
    low: A,
    high: A,
}

impl<A, R> RandomCapacity<A, R>
where
    A: Amount + SampleUniform,
    R: Rng,
{
    pub fn with_range(rng: R, low: A, high: A) -> Result<Self, Error> {
        if low < A::zero() {
            Err(Error::NegativeCapacity)
        } else if low > high {
            Err(Error::EmptyCapacityRange)
        } else {
            Ok(Self { rng, low, high })
        }
    }

    pub fn range(&self) -> (A, A) {
        (self.low, self.high)
    }
}

impl<A> RandomCapacity<A, StdRng>
where
    A: Amount + SampleUniform + From<u16>,
{
    /// A reproducible assigner over the default road capacity range.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            low: A::from(DEFAULT_MIN_CAPACITY),
            high: A::from(DEFAULT_MAX_CAPACITY),
        }
    }
}

impl<NodeId, A, R> CapacityAssigner<NodeId, A> for RandomCapacity<A, R>
where
    A: Amount + SampleUniform,
    R: Rng,
{
    fn capacity(&mut self, _tail: &NodeId, _head: &NodeId) -> A {
        self.rng.gen_range(self.low..=self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_capacities_are_reproducible_and_in_range() {
        let mut a = RandomCapacity::<i64>::seeded(7);
        let mut b = RandomCapacity::<i64>::seeded(7);
        for i in 0..100u32 {
            let ca = a.capacity(&i, &(i + 1));
            let cb = b.capacity(&i, &(i + 1));
            assert_eq!(ca, cb);
            assert!((1..=18888).contains(&ca));
        }
    }

    #[test]
    fn invalid_ranges_are_rejected() {
        let rng = StdRng::seed_from_u64(0);
        assert_eq!(
            RandomCapacity::with_range(rng.clone(), -1i32, 5).unwrap_err(),
            Error::NegativeCapacity
        );
        assert_eq!(
            RandomCapacity::with_range(rng, 6i32, 5).unwrap_err(),
            Error::EmptyCapacityRange
        );
    }

    #[test]
    fn closures_and_constants_assign_capacities() {
        let mut by_tail = |tail: &i32, _head: &i32| *tail * 10;
        assert_eq!(CapacityAssigner::<i32, i32>::capacity(&mut by_tail, &3, &4), 30);

        let mut constant = ConstantCapacity(5i64);
        assert_eq!(constant.capacity(&'a', &'b'), 5);
    }
}
