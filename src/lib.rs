//! Circular Buffer - fixed-capacity FIFO with overwrite-on-full semantics
//!
//! A [`RingBuffer`] holds at most `capacity` owned elements. Pushing into a
//! full buffer silently evicts (and drops) the oldest element; popping an
//! empty buffer yields `None`. Only construction can fail.
//!
//! # Quick Start
//!
//! ```
//! use circular_buffer::RingBuffer;
//!
//! let mut rb = RingBuffer::new(2)?;
//! rb.push(1);
//! rb.push(2);
//! rb.push(3); // evicts 1
//! assert_eq!(rb.pop(), Some(2));
//! assert_eq!(rb.pop(), Some(3));
//! assert_eq!(rb.pop(), None);
//! # Ok::<(), circular_buffer::RingBufferError>(())
//! ```

// ─── Core ─────────────────────────────────────────────────────────
pub mod buffer;
pub mod dump;
pub mod errors;

// ─── Application surface ──────────────────────────────────────────
pub mod cli;
pub mod config;
pub mod telemetry;

pub use buffer::RingBuffer;
pub use dump::dump_buffer;
pub use errors::{Result, RingBufferError};
