use derive_more::Display;

/// Error type used in this crate
#[derive(Copy, Clone, PartialEq, Eq, Debug, Display)]
pub enum StdioError {
    /// Stream identifier other than stdin, stdout or stderr
    #[display("Unsupported stream: {_0}")]
    UnsupportedStream(i32),
    /// Argument is invalid
    #[display("Invalid argument")]
    InvalidArgument,
}

impl StdioError {
    /// Value returned through the C-style `read_raw`/`write_raw` hooks
    pub const RAW_ERROR: isize = -1;
}

/// Result type used in this crate
pub type StdioResult<T = ()> = Result<T, StdioError>;
