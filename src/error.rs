//! Error types and the host-facing diagnostics slot.

use thiserror::Error;

/// Errors surfaced by a render call.
///
/// The renderer itself has no recoverable failure mode: output-buffer
/// growth either succeeds or aborts the process. The only error a caller
/// can observe is the structure producer giving up mid-document, whose
/// status code is propagated unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("structure producer failed with status {code}: {message}")]
    Producer { code: u32, message: String },
}

impl Error {
    /// A producer failure with a nonzero status code.
    pub fn producer(code: u32, message: impl Into<String>) -> Self {
        Error::Producer {
            code,
            message: message.into(),
        }
    }

    /// The numeric status carried by this error.
    pub fn status(&self) -> u32 {
        match self {
            Error::Producer { code, .. } => *code,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Last-error diagnostics as an explicit, caller-owned value.
///
/// Hosts that report errors out-of-band (status code plus message, read
/// back separately from the call that failed) keep one of these wherever
/// suits them instead of relying on process-wide state. The slot holds the
/// most recently recorded failure until it is overwritten or cleared;
/// successful calls never touch it. Sharing a slot across threads is the
/// host's responsibility, same as any other plain value.
///
/// # Examples
///
/// ```
/// use mdstream::ErrorSlot;
///
/// let mut slot = ErrorSlot::new();
/// slot.set(2, "unterminated code fence");
/// assert_eq!(slot.code(), 2);
/// slot.clear();
/// assert_eq!(slot.code(), 0);
/// assert_eq!(slot.message(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSlot {
    code: u32,
    message: String,
}

impl ErrorSlot {
    /// An empty slot: code 0, empty message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the slot. A zero `code` clears it instead, discarding
    /// `message`.
    pub fn set(&mut self, code: u32, message: impl Into<String>) {
        self.clear();
        if code != 0 {
            self.code = code;
            self.message = message.into();
        }
    }

    /// Reset to code 0 and an empty message. Safe to call repeatedly.
    pub fn clear(&mut self) {
        self.code = 0;
        self.message.clear();
    }

    /// The recorded status code, or 0 when the slot is empty.
    pub fn code(&self) -> u32 {
        self.code
    }

    /// The recorded message, or `""` when the slot is empty.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether a failure is currently recorded.
    pub fn is_set(&self) -> bool {
        self.code != 0
    }

    /// Record a render error.
    pub fn record(&mut self, err: &Error) {
        match err {
            Error::Producer { code, message } => self.set(*code, message.clone()),
        }
    }

    /// Store a failure and pass a success through untouched.
    ///
    /// On `Ok` the slot keeps whatever it held before, so the last failure
    /// stays readable until the host clears it.
    pub fn capture<T>(&mut self, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.record(&err);
                None
            }
        }
    }
}
