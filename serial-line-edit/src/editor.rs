//! Byte-at-a-time line editing on top of a [RingBuffer]
use crate::{ByteChannel, RingBuffer, DEFAULT_BUFFER_SIZE};
use log::{debug, trace};

// Input keys
const CARRIAGE_RETURN: u8 = b'\r';
const BACKSPACE: u8 = 0x08;
const DELETE: u8 = 0x7f;
const CONTROL_U: u8 = 0x15;
const CONTROL_W: u8 = 0x17;

// Output
const BELL: u8 = 0x07;
const ERASE_CHAR: &[u8] = b"\x08 \x08";
const NEWLINE: &[u8] = b"\r\n";

/// `isspace` in the C locale
fn is_space(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == 0x0b
}

/// Collects one edited line from a [ByteChannel] into a [RingBuffer]
///
/// Every visual effect (inserted characters, erasures, the final newline) is echoed back
/// over the same channel. Invalid operator actions ring the bell instead of failing.
///
/// # Example
/// ```
/// use serial_line_edit::{ByteChannel, LineEditor, RingBuffer};
///
/// struct Keys(&'static [u8]);
///
/// impl ByteChannel for Keys {
///     fn send_byte(&mut self, _byte: u8) {}
///     fn receive_byte(&mut self) -> u8 {
///         let (first, rest) = self.0.split_first().unwrap();
///         self.0 = rest;
///         *first
///     }
/// }
///
/// let mut ring = RingBuffer::<128>::new();
/// let mut keys = Keys(b"hx\x08i\r");
/// assert!(LineEditor::new(&mut ring, &mut keys).fill_line());
/// assert_eq!(ring.len(), 3);
/// ```
pub struct LineEditor<'a, C: ByteChannel, const SIZE: usize = DEFAULT_BUFFER_SIZE> {
    ring: &'a mut RingBuffer<SIZE>,
    channel: &'a mut C,
}

impl<'a, C: ByteChannel, const SIZE: usize> LineEditor<'a, C, SIZE> {
    /// Construct a new [LineEditor]
    pub fn new(ring: &'a mut RingBuffer<SIZE>, channel: &'a mut C) -> Self {
        Self { ring, channel }
    }

    /// Block until a full line has been entered
    ///
    /// Does nothing and returns `false` if the previous line has not been fully drained
    /// yet; only one line is ever in flight. Returns `true` once a new line, terminated by
    /// `'\n'`, is queued.
    pub fn fill_line(&mut self) -> bool {
        if !self.ring.is_empty() {
            return false;
        }

        loop {
            match self.channel.receive_byte() {
                // <Enter> is pressed. Terminate the line and return
                CARRIAGE_RETURN => {
                    let pushed = self.ring.push_back(b'\n');
                    debug_assert!(pushed.is_ok(), "inserts always leave room for the terminator");
                    self.ring.write_sentinel();
                    self.channel.send_bytes(NEWLINE);
                    debug!("collected line of {} bytes", self.ring.len());
                    return true;
                }

                // <BackSpace> is pressed. Delete last character.
                BACKSPACE | DELETE => {
                    if self.ring.is_empty() {
                        self.bell();
                    } else {
                        self.back_up();
                    }
                }

                // Erase back through the byte under the write cursor, then each erased
                // byte in turn, until one of them is whitespace
                CONTROL_W => {
                    while !self.ring.is_empty() && !is_space(self.ring.byte_at_end()) {
                        self.back_up();
                    }
                }

                CONTROL_U => {
                    while !self.ring.is_empty() {
                        self.back_up();
                    }
                }

                // Anything else is inserted and echoed
                c => {
                    // The '\n' pushed on <Enter> needs the last free slot
                    if self.ring.len() + 1 >= self.ring.capacity() {
                        trace!("line full, dropped {c:#04x}");
                        self.bell();
                    } else if self.ring.push_back(c).is_ok() {
                        self.channel.send_byte(c);
                    }
                }
            }
        }
    }

    fn bell(&mut self) {
        trace!("bell");
        self.channel.send_byte(BELL);
    }

    /// Erase the last character, on screen too
    fn back_up(&mut self) {
        if self.ring.undo_back().is_some() {
            self.channel.send_bytes(ERASE_CHAR);
        }
    }
}
