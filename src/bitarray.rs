//! BitArray - Thread-safe fixed-capacity bit storage over packed bytes.
//!
//! This module provides a bit array that packs boolean flags into a byte
//! buffer (8 flags per byte) and guards every access with a per-instance
//! mutex, so one instance can be shared across threads without any external
//! synchronization.
//!
//! # Design
//!
//! - Uses `Mutex<Vec<u8>>` for storage (8 bits per byte)
//! - Bit indexing: byte_idx = position / 8, bit_offset = position % 8
//! - Capacity is fixed at construction and never changes
//! - Every public operation is atomic with respect to every other operation
//!   on the same instance; the bounds check happens inside the critical
//!   section
//! - All operations take `&self`, so the natural concurrent handle is
//!   `Arc<BitArray>`
//!
//! # Examples
//!
//! ```
//! use lockbit::BitArray;
//!
//! let ba = BitArray::new(5);
//! ba.set(2).unwrap();
//! ba.set(4).unwrap();
//! assert_eq!(ba.get(2).unwrap(), 1);
//! assert_eq!(ba.get(3).unwrap(), 0);
//! assert_eq!(ba.num_set(), 2);
//! ```

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::{LockbitError, Result};

/// Number of bit positions stored per buffer byte
pub const BITS_PER_BYTE: usize = 8;

/// Get byte index from bit position
#[inline(always)]
const fn get_byte_idx(position: usize) -> usize {
    position >> 3 // position / 8
}

/// Get bit offset within byte from bit position
#[inline(always)]
const fn get_bit_idx(position: usize) -> usize {
    position & 7 // position % 8
}

/// Thread-safe bit array with a fixed number of addressable positions.
///
/// Bits are packed into a byte buffer guarded by one coarse mutex. All
/// position indices are 0-based; a position is valid when it is strictly
/// less than [`num_bits`](BitArray::num_bits). Operations on invalid
/// positions fail with [`LockbitError::IndexOutOfBounds`] and leave the
/// buffer untouched.
pub struct BitArray {
    /// Total number of addressable bit positions
    num_bits: usize,
    /// Packed storage, `ceil(num_bits / 8)` bytes
    data: Mutex<Vec<u8>>,
}

impl BitArray {
    /// Create a new BitArray with `num_bits` positions, all initialized to 0.
    ///
    /// A zero-sized array allocates nothing and rejects every position.
    ///
    /// # Examples
    ///
    /// ```
    /// use lockbit::BitArray;
    ///
    /// let ba = BitArray::new(1024);
    /// assert_eq!(ba.num_bits(), 1024);
    /// assert_eq!(ba.num_set(), 0);
    /// ```
    pub fn new(num_bits: usize) -> Self {
        let num_bytes = (num_bits + BITS_PER_BYTE - 1) / BITS_PER_BYTE;
        Self {
            num_bits,
            data: Mutex::new(vec![0; num_bytes]),
        }
    }

    /// Acquire the buffer lock.
    ///
    /// A poisoned lock is recovered by taking the inner guard: critical
    /// sections validate before writing, so a panic elsewhere cannot leave
    /// a half-applied mutation behind.
    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.data.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Validate a bit position against the configured size.
    #[inline]
    fn ensure_position(&self, position: usize) -> Result<()> {
        if position >= self.num_bits {
            return Err(LockbitError::IndexOutOfBounds {
                position,
                num_bits: self.num_bits,
            });
        }
        Ok(())
    }

    // =========================================================================
    // Single Bit Operations
    // =========================================================================

    /// Set the bit at `position` to 1. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`LockbitError::IndexOutOfBounds`] if `position >= num_bits`;
    /// the buffer is left unchanged.
    pub fn set(&self, position: usize) -> Result<()> {
        let mut data = self.lock();
        self.ensure_position(position)?;
        data[get_byte_idx(position)] |= 1 << get_bit_idx(position);
        Ok(())
    }

    /// Clear the bit at `position` to 0. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`LockbitError::IndexOutOfBounds`] if `position >= num_bits`;
    /// the buffer is left unchanged.
    pub fn unset(&self, position: usize) -> Result<()> {
        let mut data = self.lock();
        self.ensure_position(position)?;
        data[get_byte_idx(position)] &= !(1 << get_bit_idx(position));
        Ok(())
    }

    /// Get the bit at `position` (returns 0 or 1). Does not mutate.
    ///
    /// # Errors
    ///
    /// Returns [`LockbitError::IndexOutOfBounds`] if `position >= num_bits`.
    pub fn get(&self, position: usize) -> Result<u8> {
        let data = self.lock();
        self.ensure_position(position)?;
        Ok((data[get_byte_idx(position)] >> get_bit_idx(position)) & 1)
    }

    /// Toggle the bit at `position` and return its new value (0 or 1).
    ///
    /// The flip and the read of the new value happen under one lock
    /// acquisition, so the returned value is exactly what this toggle
    /// produced.
    ///
    /// # Errors
    ///
    /// Returns [`LockbitError::IndexOutOfBounds`] if `position >= num_bits`;
    /// the buffer is left unchanged.
    pub fn toggle(&self, position: usize) -> Result<u8> {
        let mut data = self.lock();
        self.ensure_position(position)?;
        let byte = &mut data[get_byte_idx(position)];
        *byte ^= 1 << get_bit_idx(position);
        Ok((*byte >> get_bit_idx(position)) & 1)
    }

    /// Assign the bit at `position` from a value (0 or 1).
    ///
    /// Any non-zero value is treated as 1.
    ///
    /// # Errors
    ///
    /// Returns [`LockbitError::IndexOutOfBounds`] if `position >= num_bits`.
    pub fn assign(&self, position: usize, value: u8) -> Result<()> {
        if value > 0 {
            self.set(position)
        } else {
            self.unset(position)
        }
    }

    // =========================================================================
    // Bulk Operations
    // =========================================================================

    /// Clear all bits to 0. Never fails and is idempotent.
    pub fn reset(&self) {
        self.lock().fill(0);
    }

    // =========================================================================
    // Counting and Information
    // =========================================================================

    /// Count number of set bits (population count).
    ///
    /// Padding bits in the final byte are never set, so the raw byte
    /// popcount equals the logical count.
    pub fn num_set(&self) -> usize {
        self.lock().iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Get the number of addressable bit positions.
    #[inline]
    pub fn num_bits(&self) -> usize {
        self.num_bits
    }

    /// Get the number of bytes in storage.
    pub fn num_bytes(&self) -> usize {
        self.lock().len()
    }
}

impl fmt::Debug for BitArray {
    /// Reports size and set count only; the buffer itself never escapes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitArray")
            .field("num_bits", &self.num_bits)
            .field("num_set", &self.num_set())
            .finish()
    }
}
