//! The transport the editor talks through

/// A blocking, byte-at-a-time serial transport
///
/// Implementations are expected to block (busy-poll a ready flag, wait on an interrupt,
/// ...) until the byte has been handed to or taken from the hardware. Neither direction
/// can fail or time out.
pub trait ByteChannel {
    /// Write a byte to the channel
    fn send_byte(&mut self, byte: u8);

    /// Read the next byte out of the channel
    fn receive_byte(&mut self) -> u8;

    /// Send every byte of `bytes`, in order
    fn send_bytes(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.send_byte(*byte);
        }
    }
}

impl<C: ByteChannel + ?Sized> ByteChannel for &mut C {
    fn send_byte(&mut self, byte: u8) {
        (**self).send_byte(byte)
    }

    fn receive_byte(&mut self) -> u8 {
        (**self).receive_byte()
    }
}
