use std::error::Error;
use std::fmt;

/// Failures reported by the buffer boundary. No output is produced when one
/// of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// A buffer's extent along `axis` is not the compiled-in size.
    Shape {
        expected: usize,
        found: usize,
        axis: usize,
    },
    /// A flat buffer's length does not match the shape it was declared with.
    Layout {
        shape: (usize, usize),
        len: usize,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixError::Shape { expected, .. } => write!(f, "ref must have {} columns.", expected),
            MatrixError::Layout { shape, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                shape.0, shape.1, len
            ),
        }
    }
}

impl Error for MatrixError {}
