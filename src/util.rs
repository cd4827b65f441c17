/// Which child slot of a parent a node occupies. Rotations and the fix-up case analysis are
/// written once in terms of a `Side` and its [`opposite`][Side::opposite] rather than twice as
/// mirror images.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    /// The child holding strictly smaller keys.
    Left,
    /// The child holding greater or equal keys.
    Right,
}

impl Side {
    pub(crate) fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}
