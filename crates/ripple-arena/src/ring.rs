//! Three-slot ring of field buffers indexed by time-level role.

use crate::error::ArenaError;

/// The time level a slot currently represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// Field at `t - dt`.
    Past,
    /// Field at `t`.
    Present,
    /// Field being computed for `t + dt`.
    Future,
}

impl Role {
    /// All roles, in time order.
    pub const ALL: [Role; 3] = [Role::Past, Role::Present, Role::Future];

    /// Offset of this role's slot from the cursor, modulo 3.
    fn offset(self) -> usize {
        match self {
            Role::Present => 0,
            Role::Future => 1,
            Role::Past => 2,
        }
    }
}

/// Disjoint borrows of the three time levels for one stencil sweep.
#[derive(Debug)]
pub struct StepBuffers<'a> {
    /// Field at `t - dt`.
    pub past: &'a [f64],
    /// Field at `t`.
    pub present: &'a [f64],
    /// Field being computed for `t + dt`.
    pub future: &'a mut [f64],
}

/// Three equal-length field buffers whose roles rotate without copying.
///
/// # Examples
///
/// ```
/// use ripple_arena::FieldRing;
///
/// let mut ring = FieldRing::new(vec![1.0, 2.0, 3.0]).unwrap();
/// ring.split().future.copy_from_slice(&[4.0, 5.0, 6.0]);
///
/// ring.rotate();
/// assert_eq!(ring.present(), &[4.0, 5.0, 6.0]);
/// assert_eq!(ring.past(), &[1.0, 2.0, 3.0]);
/// assert_eq!(ring.rotations(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct FieldRing {
    slots: [Vec<f64>; 3],
    /// Slot index of the Present role.
    cursor: usize,
    rotations: u64,
}

impl FieldRing {
    /// Create a ring with Past, Present and Future all equal to `initial`.
    ///
    /// The three slots are independent allocations; writing one never
    /// affects another.
    pub fn new(initial: Vec<f64>) -> Result<Self, ArenaError> {
        if initial.is_empty() {
            return Err(ArenaError::EmptyField);
        }
        Ok(Self {
            slots: [initial.clone(), initial.clone(), initial],
            cursor: 0,
            rotations: 0,
        })
    }

    /// Number of values per buffer.
    pub fn len(&self) -> usize {
        self.slots[0].len()
    }

    /// Always returns `false`: construction rejects empty fields.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of rotations performed since construction.
    pub fn rotations(&self) -> u64 {
        self.rotations
    }

    /// Slot index currently holding `role`.
    pub fn slot_of(&self, role: Role) -> usize {
        (self.cursor + role.offset()) % 3
    }

    /// Read the buffer holding `role`.
    pub fn get(&self, role: Role) -> &[f64] {
        &self.slots[self.slot_of(role)]
    }

    /// Field at `t - dt`.
    pub fn past(&self) -> &[f64] {
        self.get(Role::Past)
    }

    /// Field at `t`.
    pub fn present(&self) -> &[f64] {
        self.get(Role::Present)
    }

    /// Field being computed for `t + dt`.
    pub fn future(&self) -> &[f64] {
        self.get(Role::Future)
    }

    /// Advance roles by one time level.
    ///
    /// Future becomes Present, Present becomes Past, and the old Past slot
    /// is recycled as the next Future. Its stale contents are left in place
    /// for the next stencil sweep to overwrite.
    pub fn rotate(&mut self) {
        self.cursor = (self.cursor + 1) % 3;
        self.rotations += 1;
    }

    /// Borrow Past and Present immutably and Future mutably at once.
    pub fn split(&mut self) -> StepBuffers<'_> {
        let [s0, s1, s2] = &mut self.slots;
        let (past, present, future) = match self.cursor {
            0 => (&*s2, &*s0, s1),
            1 => (&*s0, &*s1, s2),
            _ => (&*s1, &*s2, s0),
        };
        StepBuffers {
            past: past.as_slice(),
            present: present.as_slice(),
            future: future.as_mut_slice(),
        }
    }
}
