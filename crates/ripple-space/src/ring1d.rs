//! 1D ring lattice (always-wrap periodic boundary).

use crate::error::SpaceError;

/// A one-dimensional ring of `len` cells.
///
/// Cell `0`'s left neighbour is `len - 1` and cell `len - 1`'s right
/// neighbour is `0`; every other cell has its usual neighbours.
///
/// # Examples
///
/// ```
/// use ripple_space::Ring1D;
///
/// let ring = Ring1D::new(10).unwrap();
/// assert_eq!(ring.neighbours(0), [9, 1]);
/// assert_eq!(ring.neighbours(9), [8, 0]);
/// assert_eq!(ring.edges(), [0, 9]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ring1D {
    len: usize,
}

impl Ring1D {
    /// Smallest ring with distinct left and right edges.
    pub const MIN_LEN: usize = 2;

    /// Create a ring with `len` cells.
    ///
    /// Returns `Err(SpaceError::TooFewPoints)` if `len < 2`.
    pub fn new(len: usize) -> Result<Self, SpaceError> {
        if len < Self::MIN_LEN {
            return Err(SpaceError::TooFewPoints {
                points: len,
                min: Self::MIN_LEN,
            });
        }
        Ok(Self { len })
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always returns `false`: construction rejects short rings.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Left neighbour of `i`, wrapping at `0`.
    #[inline]
    pub fn left(&self, i: usize) -> usize {
        debug_assert!(i < self.len);
        if i == 0 {
            self.len - 1
        } else {
            i - 1
        }
    }

    /// Right neighbour of `i`, wrapping at `len - 1`.
    #[inline]
    pub fn right(&self, i: usize) -> usize {
        debug_assert!(i < self.len);
        if i + 1 == self.len {
            0
        } else {
            i + 1
        }
    }

    /// `[left, right]` neighbours of `i`.
    pub fn neighbours(&self, i: usize) -> [usize; 2] {
        [self.left(i), self.right(i)]
    }

    /// The two cells whose stencil wraps: `0` and `len - 1`.
    pub fn edges(&self) -> [usize; 2] {
        [0, self.len - 1]
    }

    /// Cells whose neighbours need no wrapping: `1..len - 1`.
    pub fn interior(&self) -> std::ops::Range<usize> {
        1..self.len - 1
    }
}
