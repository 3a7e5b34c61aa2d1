//! Fixed-capacity byte ring shared by the line editor and the line consumer
use crate::{LineEditError, LineEditResult};

/// Backing array length used when none is given (127 usable cursor positions)
pub const DEFAULT_BUFFER_SIZE: usize = 128;

/// A classic character ring buffer
///
/// `SIZE` is the length of the backing array. Cursors wrap modulo `SIZE - 1`, and one of
/// those positions is always left free so that `start == end` can only mean "empty".
/// The editor owns `end`, the reader owns `start`.
///
/// # Example
/// ```
/// use serial_line_edit::RingBuffer;
///
/// let mut ring = RingBuffer::<8>::new();
/// ring.push_back(b'h').unwrap();
/// ring.push_back(b'i').unwrap();
/// assert_eq!(ring.undo_back(), Some(b'i'));
/// assert_eq!(ring.pop_front(), Some(b'h'));
/// assert!(ring.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct RingBuffer<const SIZE: usize = DEFAULT_BUFFER_SIZE> {
    storage: [u8; SIZE],
    start: usize,
    end: usize,
}

impl<const SIZE: usize> Default for RingBuffer<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const SIZE: usize> RingBuffer<SIZE> {
    const MODULUS: usize = {
        assert!(SIZE >= 3, "ring buffer needs at least three bytes of storage");
        SIZE - 1
    };

    /// Construct an empty, zeroed ring buffer
    pub const fn new() -> Self {
        Self {
            storage: [0; SIZE],
            start: 0,
            end: 0,
        }
    }

    const fn inc(index: usize) -> usize {
        (index + 1) % Self::MODULUS
    }

    const fn dec(index: usize) -> usize {
        (index + Self::MODULUS - 1) % Self::MODULUS
    }

    /// Maximum number of bytes that can be queued at once
    pub const fn capacity(&self) -> usize {
        Self::MODULUS - 1
    }

    /// Number of queued bytes
    pub fn len(&self) -> usize {
        (self.end as isize - self.start as isize).rem_euclid(Self::MODULUS as isize) as usize
    }

    /// Returns true if nothing is queued
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if another [push_back](Self::push_back) would fail
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Append a byte at the write cursor
    ///
    /// Leaves the buffer untouched and returns [LineEditError::BufferFull] if there is no
    /// room.
    pub fn push_back(&mut self, byte: u8) -> LineEditResult {
        if self.is_full() {
            return Err(LineEditError::BufferFull);
        }
        self.storage[self.end] = byte;
        self.end = Self::inc(self.end);
        Ok(())
    }

    /// Take the oldest byte from the read cursor
    pub fn pop_front(&mut self) -> Option<u8> {
        if self.is_empty() {
            return None;
        }
        let byte = self.storage[self.start];
        self.start = Self::inc(self.start);
        Some(byte)
    }

    /// Take back the most recently pushed byte
    ///
    /// Returns `None`, without moving a cursor, if nothing is queued.
    pub fn undo_back(&mut self) -> Option<u8> {
        if self.is_empty() {
            return None;
        }
        self.end = Self::dec(self.end);
        Some(self.storage[self.end])
    }

    /// Raw storage byte under the write cursor
    ///
    /// This slot is not part of the queue, so it holds whatever was last written there:
    /// an old byte, a sentinel, or zero.
    pub fn byte_at_end(&self) -> u8 {
        self.storage[self.end]
    }

    /// Store a `0` sentinel under the write cursor without moving it
    pub fn write_sentinel(&mut self) {
        self.storage[self.end] = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use std::collections::VecDeque;

    #[test]
    fn push_pop_in_order() -> LineEditResult {
        let mut ring = RingBuffer::<8>::new();
        for byte in b"abc" {
            ring.push_back(*byte)?;
        }
        assert_eq!(ring.len(), 3);
        assert_eq!(ring.pop_front(), Some(b'a'));
        assert_eq!(ring.pop_front(), Some(b'b'));
        assert_eq!(ring.pop_front(), Some(b'c'));
        assert_eq!(ring.pop_front(), None);
        assert!(ring.is_empty());
        Ok(())
    }

    #[test]
    fn default_capacity() {
        let ring = RingBuffer::<DEFAULT_BUFFER_SIZE>::new();
        assert_eq!(ring.capacity(), 126);
    }

    #[test]
    fn push_when_full_changes_nothing() -> LineEditResult {
        let mut ring = RingBuffer::<6>::new();
        for byte in b"1234" {
            ring.push_back(*byte)?;
        }
        assert!(ring.is_full());
        assert_eq!(ring.push_back(b'5'), Err(LineEditError::BufferFull));
        assert_eq!(ring.len(), 4);
        assert_eq!(ring.byte_at_end(), 0);
        assert_eq!(ring.undo_back(), Some(b'4'));
        Ok(())
    }

    #[test]
    fn undo_when_empty_changes_nothing() -> LineEditResult {
        let mut ring = RingBuffer::<6>::new();
        assert_eq!(ring.undo_back(), None);
        assert_eq!(ring.len(), 0);
        ring.push_back(b'x')?;
        assert_eq!(ring.pop_front(), Some(b'x'));
        assert_eq!(ring.undo_back(), None);
        assert_eq!(ring.pop_front(), None);
        Ok(())
    }

    #[test]
    fn wraps_around() -> LineEditResult {
        let mut ring = RingBuffer::<5>::new();
        for round in 0..20u8 {
            ring.push_back(round)?;
            ring.push_back(round.wrapping_mul(3))?;
            assert_eq!(ring.len(), 2);
            assert_eq!(ring.pop_front(), Some(round));
            assert_eq!(ring.pop_front(), Some(round.wrapping_mul(3)));
        }
        Ok(())
    }

    #[test]
    fn undo_across_wrap() -> LineEditResult {
        let mut ring = RingBuffer::<5>::new();
        for byte in b"abc" {
            ring.push_back(*byte)?;
        }
        for _ in 0..3 {
            ring.pop_front();
        }
        // Write cursor is now at the last slot; the next push wraps to zero
        ring.push_back(b'd')?;
        ring.push_back(b'e')?;
        assert_eq!(ring.undo_back(), Some(b'e'));
        assert_eq!(ring.undo_back(), Some(b'd'));
        assert_eq!(ring.undo_back(), None);
        Ok(())
    }

    #[test]
    fn sentinel_is_not_queued() -> LineEditResult {
        let mut ring = RingBuffer::<8>::new();
        ring.push_back(b'\n')?;
        ring.write_sentinel();
        assert_eq!(ring.len(), 1);
        assert_eq!(ring.byte_at_end(), 0);
        Ok(())
    }

    #[test]
    fn fuzz() {
        let mut rng = rand::thread_rng();
        let mut ring = RingBuffer::<16>::new();
        let mut model = VecDeque::new();

        for _ in 0..10000 {
            match rng.gen_range(0..3) {
                0 => {
                    let byte = rng.gen();
                    let pushed = ring.push_back(byte).is_ok();
                    assert_eq!(pushed, model.len() < ring.capacity());
                    if pushed {
                        model.push_back(byte);
                    }
                }
                1 => assert_eq!(ring.pop_front(), model.pop_front()),
                _ => assert_eq!(ring.undo_back(), model.pop_back()),
            }
            assert_eq!(ring.len(), model.len());
            assert!(ring.len() <= ring.capacity());
        }
    }
}
