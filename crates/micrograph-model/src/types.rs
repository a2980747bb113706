//! Data types stored in a model buffer.

use micrograph_core::TensorId;

/// Descriptive metadata stored in the model header.
///
/// Purely informational — nothing downstream branches on it. Useful
/// when diagnosing which converter emitted a buffer.
///
/// # Examples
///
/// ```
/// use micrograph_model::ModelMeta;
///
/// let meta = ModelMeta {
///     name: "palm_detection".into(),
///     producer: "micrograph 0.1.0".into(),
/// };
/// assert_eq!(meta.name, "palm_detection");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelMeta {
    /// Model name (e.g. `"palm_detection"`).
    pub name: String,
    /// Tool and version that produced the buffer.
    pub producer: String,
}

/// One operator in the model's graph.
///
/// Operators reference tensors by table index. The operation itself is
/// identified by its wire name; names are resolved against the kernel
/// registry at load time, so a buffer can mention operations this
/// build does not support (and fail cleanly then).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperatorDef {
    /// Wire name of the operation (e.g. `"conv_2d"`).
    pub op_name: String,
    /// Input tensors, in kernel-defined order.
    pub inputs: Vec<TensorId>,
    /// Output tensors.
    pub outputs: Vec<TensorId>,
}
