use std::error::Error;
use std::fmt;

/// A raw selector value outside the six defined operations.
/// Only the `TryFrom<u8>` conversion can produce this; typed callers
/// never see it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct InvalidOpcode(pub u8);

impl fmt::Display for InvalidOpcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid opcode: {} (expected 0-5)", self.0)
    }
}

impl Error for InvalidOpcode {}
