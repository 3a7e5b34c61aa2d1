//! Home of the `SerialConsole` object - the stdio hooks for one serial channel
use crate::{LineReader, LineWriter, StdioError, StdioResult, StreamId};
use core::fmt;
use log::debug;
use serial_line_edit::{ByteChannel, RingBuffer, DEFAULT_BUFFER_SIZE};

/// Standard input, output and error on top of a single [ByteChannel]
///
/// Owns the channel and the line buffer. Reads are line edited and echoed; writes have
/// `'\n'` expanded to `"\n\r"`.
///
/// # Example
/// ```
/// use serial_line_edit::ByteChannel;
/// use serial_stdio::SerialConsole;
///
/// struct Terminal {
///     keys: &'static [u8],
///     screen: Vec<u8>,
/// }
///
/// impl ByteChannel for Terminal {
///     fn send_byte(&mut self, byte: u8) {
///         self.screen.push(byte);
///     }
///     fn receive_byte(&mut self) -> u8 {
///         let (first, rest) = self.keys.split_first().unwrap();
///         self.keys = rest;
///         *first
///     }
/// }
///
/// let mut console: SerialConsole<_> = SerialConsole::new(Terminal {
///     keys: b"ls\r",
///     screen: Vec::new(),
/// });
/// assert_eq!(console.write(1, b"$ ").unwrap(), 2);
///
/// let mut line = [0u8; 32];
/// let count = console.read(0, &mut line).unwrap();
/// assert_eq!(&line[..count], b"ls\n");
/// assert_eq!(console.channel().screen, b"$ ls\r\n");
/// ```
pub struct SerialConsole<C: ByteChannel, const SIZE: usize = DEFAULT_BUFFER_SIZE> {
    channel: C,
    ring: RingBuffer<SIZE>,
}

impl<C: ByteChannel, const SIZE: usize> SerialConsole<C, SIZE> {
    /// Construct a console with an empty line buffer
    pub const fn new(channel: C) -> Self {
        Self {
            channel,
            ring: RingBuffer::new(),
        }
    }

    /// Get a reference to the underlying channel
    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// Get a mutable reference to the underlying channel
    pub fn channel_mut(&mut self) -> &mut C {
        &mut self.channel
    }

    /// Give back the underlying channel, dropping any queued input
    pub fn into_channel(self) -> C {
        self.channel
    }

    /// Number of input bytes waiting to be read
    pub fn pending(&self) -> usize {
        self.ring.len()
    }

    /// Borrow the read side
    pub fn reader(&mut self) -> LineReader<'_, C, SIZE> {
        LineReader::new(&mut self.ring, &mut self.channel)
    }

    /// Borrow the write side
    pub fn writer(&mut self) -> LineWriter<'_, C> {
        LineWriter::new(&mut self.channel)
    }

    /// Read up to `dst.len()` bytes of edited input
    ///
    /// Blocks until a line is entered if none is pending. Fails with
    /// [StdioError::InvalidArgument] if `dst` is empty, without touching the channel.
    pub fn read(&mut self, stream: i32, dst: &mut [u8]) -> StdioResult<usize> {
        check_stream(stream)?;
        if dst.is_empty() {
            return Err(StdioError::InvalidArgument);
        }
        Ok(self.reader().read(dst))
    }

    /// Write `src` up to its first NUL byte
    ///
    /// Returns the number of bytes taken from `src`. Nothing is sent if `stream` is
    /// rejected.
    pub fn write(&mut self, stream: i32, src: &[u8]) -> StdioResult<usize> {
        check_stream(stream)?;
        Ok(self.writer().write(src))
    }

    /// [read](Self::read), returning [StdioError::RAW_ERROR] on failure
    pub fn read_raw(&mut self, stream: i32, dst: &mut [u8]) -> isize {
        into_raw(self.read(stream, dst))
    }

    /// [write](Self::write), returning [StdioError::RAW_ERROR] on failure
    pub fn write_raw(&mut self, stream: i32, src: &[u8]) -> isize {
        into_raw(self.write(stream, src))
    }
}

/// Formatted output goes to stdout
impl<C: ByteChannel, const SIZE: usize> fmt::Write for SerialConsole<C, SIZE> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        fmt::Write::write_str(&mut self.writer(), s)
    }
}

fn check_stream(stream: i32) -> StdioResult<StreamId> {
    StreamId::try_from(stream).inspect_err(|_| debug!("rejected stream {stream}"))
}

fn into_raw(result: StdioResult<usize>) -> isize {
    match result {
        Ok(count) => count as isize,
        Err(_) => StdioError::RAW_ERROR,
    }
}
