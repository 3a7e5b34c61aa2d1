//! Write side: terminal output with newline normalization
use core::fmt;
use serial_line_edit::ByteChannel;

/// Sends bytes to a [ByteChannel], following every `'\n'` with a `'\r'`
///
/// # Example
/// ```
/// use core::fmt::Write;
/// use serial_line_edit::ByteChannel;
/// use serial_stdio::LineWriter;
///
/// #[derive(Default)]
/// struct Wire(Vec<u8>);
///
/// impl ByteChannel for Wire {
///     fn send_byte(&mut self, byte: u8) {
///         self.0.push(byte);
///     }
///     fn receive_byte(&mut self) -> u8 {
///         unimplemented!()
///     }
/// }
///
/// let mut wire = Wire::default();
/// writeln!(LineWriter::new(&mut wire), "Hello World!").unwrap();
/// assert_eq!(wire.0, b"Hello World!\n\r");
/// ```
pub struct LineWriter<'a, C: ByteChannel> {
    channel: &'a mut C,
}

impl<'a, C: ByteChannel> LineWriter<'a, C> {
    /// Construct a new [LineWriter]
    pub fn new(channel: &'a mut C) -> Self {
        Self { channel }
    }

    /// Send `src` up to its end or its first NUL byte, whichever comes first
    ///
    /// Returns the number of bytes taken from `src`, not counting the injected `'\r'`s.
    pub fn write(&mut self, src: &[u8]) -> usize {
        let mut count = 0;
        for &byte in src.iter().take_while(|&&byte| byte != 0) {
            self.channel.send_byte(byte);
            if byte == b'\n' {
                self.channel.send_byte(b'\r');
            }
            count += 1;
        }
        count
    }
}

impl<C: ByteChannel> fmt::Write for LineWriter<'_, C> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.write(s.as_bytes()) == s.len() {
            Ok(())
        } else {
            // Stopped at a NUL
            Err(fmt::Error)
        }
    }
}
