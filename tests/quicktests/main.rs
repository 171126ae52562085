mod tree;

use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<K> {
    /// Insert the K into the data structure
    Insert(K),
    /// Remove the K from the data structure
    Remove(K),
    /// Compare iterators
    Iter,
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation. Inserts are weighted
    /// heavier so trees actually grow.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]) {
            Some(0) => Op::Insert(K::arbitrary(g)),
            Some(1) => Op::Remove(K::arbitrary(g)),
            _ => Op::Iter,
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            Op::Insert(k) => Box::new(k.shrink().map(Op::Insert)),
            Op::Remove(k) => Box::new(k.shrink().map(Op::Remove)),
            Op::Iter => quickcheck::empty_shrinker(),
        }
    }
}
