//! Strongly-typed identifiers for model tensors.

use std::fmt;

/// Identifies a tensor within a loaded model.
///
/// Tensors are listed in the model's tensor table; `TensorId(n)`
/// corresponds to the n-th entry. Operator definitions and the model's
/// designated input/output lists reference tensors by this index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TensorId(pub u32);

impl fmt::Display for TensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TensorId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
