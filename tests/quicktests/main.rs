#[macro_use(quickcheck)]
extern crate quickcheck_macros;

mod red_black;

use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// a red-black tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<K> {
    /// Insert the K into the data structure
    Insert(K),
    /// Copy the data structure and keep working on the copy
    Clone,
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1]).unwrap() {
            0 => Op::Insert(K::arbitrary(g)),
            1 => Op::Clone,
            _ => unreachable!(),
        }
    }
}
