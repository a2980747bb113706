//! Programmatic model construction.
//!
//! [`ModelBuilder`] assembles a model description in memory and encodes
//! it into the binary container format. It performs no graph
//! validation; that is the parser's job, which keeps the builder usable
//! for constructing deliberately malformed buffers in tests.

use micrograph_core::{OpKind, TensorDef, TensorId};

use crate::codec::{
    encode_meta, encode_operator, encode_tensor_def, encode_tensor_ids, write_length_prefixed_bytes,
    write_u32_le,
};
use crate::error::ModelError;
use crate::types::{ModelMeta, OperatorDef};
use crate::{MAGIC, SCHEMA_VERSION};

/// Builds model buffers in memory.
///
/// Tensors are assigned IDs in insertion order, starting at zero.
/// Operators reference tensors by those IDs.
///
/// # Examples
///
/// ```
/// use micrograph_core::{ElementType, OpKind, TensorDef};
/// use micrograph_model::{Model, ModelBuilder};
///
/// let mut b = ModelBuilder::new("tiny");
/// let a = b.add_tensor(TensorDef::new("a", ElementType::F32, &[8]));
/// let out = b.add_tensor(TensorDef::new("out", ElementType::F32, &[8]));
/// b.add_op(OpKind::Add, &[a, a], &[out]);
/// b.mark_input(a);
/// b.mark_output(out);
///
/// let buf = b.encode().unwrap();
/// let model = Model::parse(&buf).unwrap();
/// assert_eq!(model.operators().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct ModelBuilder {
    meta: ModelMeta,
    schema_version: u32,
    tensors: Vec<TensorDef>,
    operators: Vec<OperatorDef>,
    inputs: Vec<TensorId>,
    outputs: Vec<TensorId>,
    weights: Vec<u8>,
}

impl ModelBuilder {
    /// Create a builder for a model with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            meta: ModelMeta {
                name: name.into(),
                producer: concat!("micrograph ", env!("CARGO_PKG_VERSION")).to_string(),
            },
            schema_version: SCHEMA_VERSION,
            tensors: Vec::new(),
            operators: Vec::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            weights: Vec::new(),
        }
    }

    /// Override the producer string stored in the header.
    pub fn producer(mut self, producer: impl Into<String>) -> Self {
        self.meta.producer = producer.into();
        self
    }

    /// Override the schema version written to the header.
    ///
    /// Only useful for producing buffers the parser will reject; the
    /// default is the supported [`SCHEMA_VERSION`].
    pub fn schema_version(mut self, version: u32) -> Self {
        self.schema_version = version;
        self
    }

    /// Add a tensor to the table, returning its ID.
    pub fn add_tensor(&mut self, def: TensorDef) -> TensorId {
        let id = TensorId(self.tensors.len() as u32);
        self.tensors.push(def);
        id
    }

    /// Append an operator by its wire name.
    ///
    /// The name is not checked against the supported operation set, so
    /// buffers mentioning unknown operations can be constructed.
    pub fn add_operator(&mut self, op_name: impl Into<String>, inputs: &[TensorId], outputs: &[TensorId]) {
        self.operators.push(OperatorDef {
            op_name: op_name.into(),
            inputs: inputs.to_vec(),
            outputs: outputs.to_vec(),
        });
    }

    /// Append an operator for a known operation kind.
    pub fn add_op(&mut self, op: OpKind, inputs: &[TensorId], outputs: &[TensorId]) {
        self.add_operator(op.name(), inputs, outputs);
    }

    /// Designate a tensor as a model input.
    pub fn mark_input(&mut self, id: TensorId) {
        self.inputs.push(id);
    }

    /// Designate a tensor as a model output.
    pub fn mark_output(&mut self, id: TensorId) {
        self.outputs.push(id);
    }

    /// Attach the opaque weight blob.
    pub fn set_weights(&mut self, weights: Vec<u8>) {
        self.weights = weights;
    }

    /// Encode the model into its binary container form.
    pub fn encode(&self) -> Result<Vec<u8>, ModelError> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&MAGIC);
        write_u32_le(&mut buf, self.schema_version)?;
        encode_meta(&mut buf, &self.meta)?;
        write_u32_le(&mut buf, self.tensors.len() as u32)?;
        for def in &self.tensors {
            encode_tensor_def(&mut buf, def)?;
        }
        write_u32_le(&mut buf, self.operators.len() as u32)?;
        for op in &self.operators {
            encode_operator(&mut buf, op)?;
        }
        encode_tensor_ids(&mut buf, &self.inputs)?;
        encode_tensor_ids(&mut buf, &self.outputs)?;
        write_length_prefixed_bytes(&mut buf, &self.weights)?;
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use micrograph_core::ElementType;

    #[test]
    fn ids_assigned_in_insertion_order() {
        let mut b = ModelBuilder::new("order");
        let t0 = b.add_tensor(TensorDef::new("a", ElementType::F32, &[1]));
        let t1 = b.add_tensor(TensorDef::new("b", ElementType::I8, &[1]));
        let t2 = b.add_tensor(TensorDef::new("c", ElementType::U8, &[1]));
        assert_eq!((t0, t1, t2), (TensorId(0), TensorId(1), TensorId(2)));
    }

    #[test]
    fn buffer_starts_with_magic_and_version() {
        let buf = ModelBuilder::new("m").encode().unwrap();
        assert_eq!(&buf[..4], &MAGIC);
        assert_eq!(
            u32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]),
            SCHEMA_VERSION
        );
    }

    #[test]
    fn default_producer_names_this_crate() {
        let b = ModelBuilder::new("m");
        assert!(b.meta.producer.starts_with("micrograph "));
    }

    #[test]
    fn producer_override() {
        let b = ModelBuilder::new("m").producer("converter 2.1");
        assert_eq!(b.meta.producer, "converter 2.1");
    }

    #[test]
    fn empty_model_encodes() {
        // No tensors, no operators: still a well-formed buffer.
        let buf = ModelBuilder::new("empty").encode().unwrap();
        assert!(buf.len() > 8);
    }
}
