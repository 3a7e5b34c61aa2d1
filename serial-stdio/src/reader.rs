//! Read side: hand out edited lines
use serial_line_edit::{ByteChannel, LineEditor, RingBuffer, DEFAULT_BUFFER_SIZE};

/// Drains edited lines into caller buffers, collecting a new line when none is pending
pub struct LineReader<'a, C: ByteChannel, const SIZE: usize = DEFAULT_BUFFER_SIZE> {
    ring: &'a mut RingBuffer<SIZE>,
    channel: &'a mut C,
}

impl<'a, C: ByteChannel, const SIZE: usize> LineReader<'a, C, SIZE> {
    /// Construct a new [LineReader]
    pub fn new(ring: &'a mut RingBuffer<SIZE>, channel: &'a mut C) -> Self {
        Self { ring, channel }
    }

    /// Number of bytes still queued from the current line
    pub fn pending(&self) -> usize {
        self.ring.len()
    }

    /// Copy up to `dst.len()` bytes of the current line into `dst`
    ///
    /// Blocks for a new line first if nothing is queued. Whatever does not fit stays queued
    /// for the next call. Returns the number of bytes copied.
    ///
    /// An empty `dst` returns 0 at once without reading the channel.
    /// [SerialConsole::read](crate::SerialConsole::read) reports it as
    /// [StdioError::InvalidArgument](crate::StdioError::InvalidArgument).
    pub fn read(&mut self, dst: &mut [u8]) -> usize {
        if dst.is_empty() {
            return 0;
        }
        LineEditor::new(&mut *self.ring, &mut *self.channel).fill_line();

        let mut count = 0;
        for slot in dst.iter_mut() {
            match self.ring.pop_front() {
                Some(byte) => *slot = byte,
                None => break,
            }
            count += 1;
        }
        count
    }
}
