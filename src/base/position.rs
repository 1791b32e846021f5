/// Integer block coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// Dimensions of a box of blocks.
///
/// Components may be negative: a Litematica region grows from its origin
/// in whichever direction it was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BlockSize {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const ORIGIN: Self = Self::new(0, 0, 0);

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

impl BlockSize {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Number of block positions covered, ignoring direction.
    ///
    /// `None` if the count does not fit in an `i64`.
    pub fn volume(&self) -> Option<i64> {
        i64::from(self.x)
            .abs()
            .checked_mul(i64::from(self.y).abs())?
            .checked_mul(i64::from(self.z).abs())
    }

    /// True if every component is strictly positive
    pub fn is_positive(&self) -> bool {
        self.x > 0 && self.y > 0 && self.z > 0
    }

    /// True if any component is zero
    pub fn is_empty(&self) -> bool {
        self.x == 0 || self.y == 0 || self.z == 0
    }
}
