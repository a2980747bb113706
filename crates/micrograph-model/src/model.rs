//! Parsed model view.
//!
//! [`Model::parse`] decodes a complete buffer, validating structure as
//! it goes: magic and schema version first, then the tensor table,
//! operator list, I/O designations, and weight blob. All tensor
//! references are checked against the table, so downstream code can
//! index tensors without re-validating.

use std::io::Read;

use micrograph_core::{OpSet, TensorDef, TensorId};

use crate::codec::{
    decode_meta, decode_operator, decode_tensor_def, decode_tensor_ids,
    read_length_prefixed_bytes, read_u32_le,
};
use crate::error::ModelError;
use crate::types::{ModelMeta, OperatorDef};
use crate::{MAGIC, SCHEMA_VERSION};

/// Read only the magic and schema-version field of a buffer.
///
/// This is the first check the loader performs; nothing beyond the
/// first eight bytes is touched, and no partial state is retained on
/// failure. Returns the version found, or an error if the magic is
/// wrong, the buffer is too short, or the version is unsupported.
pub fn schema_version(buf: &[u8]) -> Result<u32, ModelError> {
    let mut r = buf;
    let mut magic = [0u8; 4];
    r.read_exact(&mut magic)?;
    if magic != MAGIC {
        return Err(ModelError::InvalidMagic);
    }
    let found = read_u32_le(&mut r)?;
    if found != SCHEMA_VERSION {
        return Err(ModelError::UnsupportedSchemaVersion {
            found,
            supported: SCHEMA_VERSION,
        });
    }
    Ok(found)
}

/// A fully parsed model description.
///
/// Immutable after parsing. Construction goes through [`Model::parse`]
/// exclusively, which guarantees that every tensor reference (operator
/// inputs/outputs and the designated I/O lists) is within the tensor
/// table and that every tensor definition is structurally valid.
#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    meta: ModelMeta,
    tensors: Vec<TensorDef>,
    operators: Vec<OperatorDef>,
    inputs: Vec<TensorId>,
    outputs: Vec<TensorId>,
    weights: Vec<u8>,
}

impl Model {
    /// Parse a complete model buffer.
    ///
    /// The schema version is validated before anything else is read.
    pub fn parse(buf: &[u8]) -> Result<Self, ModelError> {
        schema_version(buf)?;
        let mut r = &buf[8..];

        let meta = decode_meta(&mut r)?;

        let tensor_count = read_u32_le(&mut r)? as usize;
        let mut tensors = Vec::with_capacity(tensor_count);
        for _ in 0..tensor_count {
            let def = decode_tensor_def(&mut r)?;
            def.validate()
                .map_err(|detail| ModelError::Malformed { detail })?;
            tensors.push(def);
        }

        let operator_count = read_u32_le(&mut r)? as usize;
        let mut operators = Vec::with_capacity(operator_count);
        for _ in 0..operator_count {
            operators.push(decode_operator(&mut r)?);
        }

        let inputs = decode_tensor_ids(&mut r)?;
        let outputs = decode_tensor_ids(&mut r)?;
        let weights = read_length_prefixed_bytes(&mut r)?;

        let model = Self {
            meta,
            tensors,
            operators,
            inputs,
            outputs,
            weights,
        };
        model.check_tensor_refs()?;
        Ok(model)
    }

    /// Validate that every tensor reference is within the table.
    fn check_tensor_refs(&self) -> Result<(), ModelError> {
        let count = self.tensors.len() as u32;
        let check = |id: TensorId| {
            if id.0 < count {
                Ok(())
            } else {
                Err(ModelError::TensorIndexOutOfRange {
                    index: id.0,
                    count,
                })
            }
        };
        for op in &self.operators {
            for &id in op.inputs.iter().chain(op.outputs.iter()) {
                check(id)?;
            }
        }
        for &id in self.inputs.iter().chain(self.outputs.iter()) {
            check(id)?;
        }
        Ok(())
    }

    /// Model metadata from the header.
    pub fn meta(&self) -> &ModelMeta {
        &self.meta
    }

    /// The tensor table.
    pub fn tensors(&self) -> &[TensorDef] {
        &self.tensors
    }

    /// Look up a tensor definition by ID.
    pub fn tensor(&self, id: TensorId) -> Option<&TensorDef> {
        self.tensors.get(id.0 as usize)
    }

    /// The operator list, in graph order.
    pub fn operators(&self) -> &[OperatorDef] {
        &self.operators
    }

    /// Designated input tensors.
    pub fn inputs(&self) -> &[TensorId] {
        &self.inputs
    }

    /// Designated output tensors.
    pub fn outputs(&self) -> &[TensorId] {
        &self.outputs
    }

    /// The opaque weight blob.
    pub fn weights(&self) -> &[u8] {
        &self.weights
    }

    /// The set of supported operations this model uses.
    ///
    /// Operator names that do not map to a supported operation are
    /// omitted — the interpreter reports those individually at bind
    /// time.
    pub fn op_set(&self) -> OpSet {
        self.operators
            .iter()
            .filter_map(|op| micrograph_core::OpKind::from_name(&op.op_name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ModelBuilder;
    use micrograph_core::{ElementType, OpKind};

    fn single_add_model() -> ModelBuilder {
        let mut b = ModelBuilder::new("adder");
        let a = b.add_tensor(TensorDef::new("a", ElementType::F32, &[4]));
        let c = b.add_tensor(TensorDef::new("c", ElementType::F32, &[4]));
        let out = b.add_tensor(TensorDef::new("out", ElementType::F32, &[4]));
        b.add_op(OpKind::Add, &[a, c], &[out]);
        b.mark_input(a);
        b.mark_output(out);
        b
    }

    #[test]
    fn parse_round_trips_builder_output() {
        let buf = single_add_model().encode().unwrap();
        let model = Model::parse(&buf).unwrap();
        assert_eq!(model.meta().name, "adder");
        assert_eq!(model.tensors().len(), 3);
        assert_eq!(model.operators().len(), 1);
        assert_eq!(model.operators()[0].op_name, "add");
        assert_eq!(model.inputs(), &[TensorId(0)]);
        assert_eq!(model.outputs(), &[TensorId(2)]);
    }

    #[test]
    fn schema_version_reads_only_header() {
        let buf = single_add_model().encode().unwrap();
        assert_eq!(schema_version(&buf).unwrap(), SCHEMA_VERSION);
        // Only the first 8 bytes matter for the version check.
        assert_eq!(schema_version(&buf[..8]).unwrap(), SCHEMA_VERSION);
    }

    #[test]
    fn bad_magic_rejected() {
        let mut buf = single_add_model().encode().unwrap();
        buf[0] = b'X';
        assert!(matches!(
            Model::parse(&buf),
            Err(ModelError::InvalidMagic)
        ));
    }

    #[test]
    fn version_mismatch_rejected_before_body() {
        let buf = single_add_model()
            .schema_version(SCHEMA_VERSION + 1)
            .encode()
            .unwrap();
        match Model::parse(&buf) {
            Err(ModelError::UnsupportedSchemaVersion { found, supported }) => {
                assert_eq!(found, SCHEMA_VERSION + 1);
                assert_eq!(supported, SCHEMA_VERSION);
            }
            other => panic!("expected UnsupportedSchemaVersion, got {other:?}"),
        }
        // The version check alone must also fail, with nothing else parsed.
        assert!(schema_version(
            &single_add_model()
                .schema_version(99)
                .encode()
                .unwrap()
        )
        .is_err());
    }

    #[test]
    fn truncated_buffer_errors() {
        let buf = single_add_model().encode().unwrap();
        let truncated = &buf[..buf.len() - 3];
        assert!(Model::parse(truncated).is_err());
    }

    #[test]
    fn out_of_range_operator_reference_rejected() {
        let mut b = ModelBuilder::new("bad");
        let a = b.add_tensor(TensorDef::new("a", ElementType::F32, &[4]));
        b.add_operator("add", &[a, TensorId(7)], &[a]);
        let buf = b.encode().unwrap();
        match Model::parse(&buf) {
            Err(ModelError::TensorIndexOutOfRange { index, count }) => {
                assert_eq!(index, 7);
                assert_eq!(count, 1);
            }
            other => panic!("expected TensorIndexOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn out_of_range_io_reference_rejected() {
        let mut b = ModelBuilder::new("bad");
        let a = b.add_tensor(TensorDef::new("a", ElementType::F32, &[4]));
        b.add_operator("reshape", &[a], &[a]);
        b.mark_input(TensorId(3));
        let buf = b.encode().unwrap();
        assert!(matches!(
            Model::parse(&buf),
            Err(ModelError::TensorIndexOutOfRange { index: 3, count: 1 })
        ));
    }

    #[test]
    fn invalid_tensor_def_rejected() {
        let mut b = ModelBuilder::new("bad");
        b.add_tensor(TensorDef::new("zero", ElementType::F32, &[1, 0, 3]));
        let buf = b.encode().unwrap();
        assert!(matches!(
            Model::parse(&buf),
            Err(ModelError::Malformed { .. })
        ));
    }

    #[test]
    fn op_set_skips_unknown_names() {
        let mut b = ModelBuilder::new("mixed");
        let a = b.add_tensor(TensorDef::new("a", ElementType::F32, &[4]));
        b.add_operator("add", &[a, a], &[a]);
        b.add_operator("softmax", &[a], &[a]);
        let model = Model::parse(&b.encode().unwrap()).unwrap();
        let ops = model.op_set();
        assert!(ops.contains(OpKind::Add));
        assert_eq!(ops.len(), 1);
    }

    #[test]
    fn weights_preserved() {
        let mut b = single_add_model();
        b.set_weights(vec![1, 2, 3, 4, 5]);
        let model = Model::parse(&b.encode().unwrap()).unwrap();
        assert_eq!(model.weights(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn empty_buffer_errors() {
        assert!(schema_version(&[]).is_err());
        assert!(Model::parse(&[]).is_err());
    }
}
