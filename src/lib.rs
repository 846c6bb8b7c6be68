//! Lockbit - Thread-Safe Fixed-Capacity Bit Array
//!
//! Lockbit provides compact boolean-flag storage (membership sets, visited
//! markers, feature flags) addressable by integer position, packed 8 flags
//! per byte and safe for concurrent access from multiple threads without
//! external synchronization.
//!
//! # Key Characteristics
//!
//! - Packed byte storage: position `p` lives at byte `p / 8`, bit `p % 8`
//! - One coarse mutex per instance; every operation is atomic with respect
//!   to every other operation on the same instance
//! - Fixed capacity: the size chosen at construction never changes
//! - Fallible operations return `Result` rather than panicking on bad input
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use lockbit::BitArray;
//!
//! let ba = BitArray::new(5);
//! ba.set(2).unwrap();
//! ba.set(4).unwrap();
//!
//! assert_eq!(ba.get(2).unwrap(), 1);
//! assert_eq!(ba.get(3).unwrap(), 0);
//!
//! // Toggle returns the new value
//! assert_eq!(ba.toggle(2).unwrap(), 0);
//!
//! // Out-of-range positions are rejected, never silently wrapped
//! assert!(ba.get(5).is_err());
//! ```
//!
//! ## Sharing Across Threads
//!
//! ```
//! use lockbit::BitArray;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let ba = Arc::new(BitArray::new(64));
//! let handles: Vec<_> = (0..4)
//!     .map(|t| {
//!         let ba = Arc::clone(&ba);
//!         thread::spawn(move || {
//!             for p in (t * 16)..(t * 16 + 16) {
//!                 ba.set(p).unwrap();
//!             }
//!         })
//!     })
//!     .collect();
//! for h in handles {
//!     h.join().unwrap();
//! }
//! assert_eq!(ba.num_set(), 64);
//! ```
//!
//! # Concurrency
//!
//! Locking is coarse: operations on different bits of the same instance are
//! serialized. Each critical section is a constant-time sequence of
//! arithmetic and branches, so contention cost stays low and no operation
//! can block indefinitely.

// Module declarations
pub mod bitarray;
pub mod error;

// Re-exports for convenient access
pub use bitarray::{BitArray, BITS_PER_BYTE};
pub use error::{LockbitError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = "Lockbit";

/// Get version string
pub fn version() -> String {
    format!("{} v{}", NAME, VERSION)
}
