use core::fmt;

/// Errors reported by kernels that take slices.
///
/// Every check runs before the first write, so a caller's buffers are left
/// untouched whenever an error is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    /// A buffer that must hold at least one sample was empty.
    EmptyInput,
    /// Buffers that must agree in length did not.
    MismatchedLengths,
    /// An index range reached past the end of the buffer.
    IndexOutOfRange,
    /// An operator was given the wrong number of inlet or outlet blocks.
    ArityMismatch,
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::EmptyInput => write!(f, "input buffer is empty"),
            KernelError::MismatchedLengths => write!(f, "buffer lengths do not match"),
            KernelError::IndexOutOfRange => write!(f, "index range exceeds buffer length"),
            KernelError::ArityMismatch => {
                write!(f, "wrong number of blocks for operator signature")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for KernelError {}
