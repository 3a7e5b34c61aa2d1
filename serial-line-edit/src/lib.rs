//! No-allocation line editor core for a byte-oriented serial channel
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![forbid(unsafe_code)]
#![warn(missing_docs)]
mod channel;
mod editor;
mod ring;
#[cfg(any(test, feature = "testlib"))]
pub mod testlib;

pub use channel::ByteChannel;
pub use editor::LineEditor;
pub use ring::{RingBuffer, DEFAULT_BUFFER_SIZE};

/// Error type used for this crate
#[derive(Copy, Clone, PartialEq, Eq, Debug, derive_more::Display)]
pub enum LineEditError {
    /// No room left in the ring buffer
    #[display("line buffer is full")]
    BufferFull,
}

/// Result type used in this crate
pub type LineEditResult<T = ()> = Result<T, LineEditError>;
