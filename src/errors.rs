use std::fmt::{Display, Formatter};

pub type Result<T> = std::result::Result<T, VectorError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorError
{
    /// Component count handed to a constructor is neither 1 (broadcast) nor the declared arity
    ArityMismatch
    {
        expected: usize, found: usize
    },
    /// Two sides of a runtime-arity operation disagree on component count
    DimensionMismatch
    {
        expected: usize, found: usize
    },
    UnknownComponent(char),
    InvalidSwizzle(String),
}

impl Display for VectorError
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        match *self {
            VectorError::ArityMismatch { expected, found } => {
                write!(f, "Expected 1 or {} components, got {}", expected, found)
            }
            VectorError::DimensionMismatch { expected, found } => {
                write!(f, "Expected {} components, got {}", expected, found)
            }
            VectorError::UnknownComponent(name) => write!(f, "No component named '{}'", name),
            VectorError::InvalidSwizzle(ref pattern) => write!(f, "'{}' is not a valid swizzle pattern", pattern),
        }
    }
}

impl std::error::Error for VectorError {}
