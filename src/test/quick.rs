use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// a red-black tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<K> {
    /// Insert the K into the data structure
    Insert(K),
    /// Check whether the K is in the data structure
    Contains(K),
    /// Compare iterators
    Iter,
}

impl<K> Op<K> {
    /// Converts the key of this operation, e.g. from a narrow type that produces lots of
    /// duplicates to the tree's key type.
    pub(crate) fn map<T>(self, f: impl FnOnce(K) -> T) -> Op<T> {
        match self {
            Op::Insert(k) => Op::Insert(f(k)),
            Op::Contains(k) => Op::Contains(f(k)),
            Op::Iter => Op::Iter,
        }
    }
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation. Inserts are
    /// weighted up so the trees get big enough to need rebalancing.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]).unwrap() {
            0 => Op::Insert(K::arbitrary(g)),
            1 => Op::Contains(K::arbitrary(g)),
            2 => Op::Iter,
            _ => unreachable!(),
        }
    }
}
