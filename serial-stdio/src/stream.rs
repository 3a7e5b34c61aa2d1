//! Logical stream identifiers
use crate::StdioError;

/// One of the three standard streams
///
/// All of them are routed through the same serial channel.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[repr(i32)]
pub enum StreamId {
    /// Standard input
    Stdin = 0,
    /// Standard output
    Stdout = 1,
    /// Standard error
    Stderr = 2,
}

impl TryFrom<i32> for StreamId {
    type Error = StdioError;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Self::Stdin),
            1 => Ok(Self::Stdout),
            2 => Ok(Self::Stderr),
            _ => Err(StdioError::UnsupportedStream(id)),
        }
    }
}

impl From<StreamId> for i32 {
    fn from(id: StreamId) -> Self {
        id as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_streams() {
        for id in [StreamId::Stdin, StreamId::Stdout, StreamId::Stderr] {
            assert_eq!(StreamId::try_from(i32::from(id)), Ok(id));
        }
    }

    #[test]
    fn others_rejected() {
        for id in [3, 4, -1, i32::MAX, i32::MIN] {
            assert_eq!(
                StreamId::try_from(id),
                Err(StdioError::UnsupportedStream(id))
            );
        }
    }
}
