//! Line-edited standard I/O over a serial channel
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
mod console;
mod errors;
mod reader;
mod stream;
mod writer;

pub use console::SerialConsole;
pub use errors::{StdioError, StdioResult};
pub use reader::LineReader;
pub use stream::StreamId;
pub use writer::LineWriter;
