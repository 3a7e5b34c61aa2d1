//! In-memory channel for exercising the editor without hardware
use crate::ByteChannel;
use ringbuffer::{ConstGenericRingBuffer, RingBuffer as _};

/// How many scripted input bytes can be queued at once
pub const SCRIPT_CAPACITY: usize = 1024;

/// A [ByteChannel] that replays scripted input and records everything sent
///
/// # Panics
/// [receive_byte](ByteChannel::receive_byte) panics once the script runs out, since a
/// real channel would block forever.
pub struct ScriptedChannel {
    input: ConstGenericRingBuffer<u8, SCRIPT_CAPACITY>,
    output: Vec<u8>,
}

impl ScriptedChannel {
    /// Construct a channel that will deliver `input`
    pub fn new(input: &[u8]) -> Self {
        let mut channel = Self {
            input: ConstGenericRingBuffer::new(),
            output: Vec::new(),
        };
        channel.feed(input);
        channel
    }

    /// Queue more input behind whatever is still pending
    ///
    /// # Panics
    /// Panics if the script would exceed [SCRIPT_CAPACITY]
    pub fn feed(&mut self, input: &[u8]) {
        assert!(
            self.input.len() + input.len() <= SCRIPT_CAPACITY,
            "script too long"
        );
        for byte in input {
            self.input.push(*byte);
        }
    }

    /// Number of scripted bytes not yet received
    pub fn remaining(&self) -> usize {
        self.input.len()
    }

    /// Everything sent so far
    pub fn sent(&self) -> &[u8] {
        &self.output
    }

    /// Forget everything sent so far
    pub fn clear_sent(&mut self) {
        self.output.clear();
    }
}

impl ByteChannel for ScriptedChannel {
    fn send_byte(&mut self, byte: u8) {
        self.output.push(byte);
    }

    fn receive_byte(&mut self) -> u8 {
        self.input
            .dequeue()
            .expect("scripted channel ran out of input")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_and_records() {
        let mut channel = ScriptedChannel::new(b"ab");
        channel.feed(b"c");
        assert_eq!(channel.remaining(), 3);
        assert_eq!(channel.receive_byte(), b'a');
        assert_eq!(channel.receive_byte(), b'b');
        assert_eq!(channel.receive_byte(), b'c');
        channel.send_bytes(b"xyz");
        assert_eq!(channel.sent(), b"xyz");
        channel.clear_sent();
        assert!(channel.sent().is_empty());
    }

    #[test]
    #[should_panic]
    fn empty_script_panics() {
        ScriptedChannel::new(b"").receive_byte();
    }
}
