//! Binary encode/decode for the model container format.
//!
//! All integers are little-endian. Strings and byte arrays are
//! length-prefixed with a `u32` length. Composite records (tensor
//! definitions, operators) are built from the primitives below.

use std::io::{Read, Write};

use micrograph_core::{ElementType, Shape, TensorDef, TensorId};

use crate::error::ModelError;
use crate::types::{ModelMeta, OperatorDef};

/// Wire tag for [`ElementType::F32`].
pub const ELEM_F32: u8 = 0;
/// Wire tag for [`ElementType::I8`].
pub const ELEM_I8: u8 = 1;
/// Wire tag for [`ElementType::U8`].
pub const ELEM_U8: u8 = 2;
/// Wire tag for [`ElementType::I32`].
pub const ELEM_I32: u8 = 3;

// ── Primitive writers ───────────────────────────────────────────

/// Write a single byte.
pub fn write_u8(w: &mut dyn Write, v: u8) -> Result<(), ModelError> {
    w.write_all(&[v])?;
    Ok(())
}

/// Write a little-endian u32.
pub fn write_u32_le(w: &mut dyn Write, v: u32) -> Result<(), ModelError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a length-prefixed UTF-8 string (u32 length + bytes).
pub fn write_length_prefixed_str(w: &mut dyn Write, s: &str) -> Result<(), ModelError> {
    write_u32_le(w, s.len() as u32)?;
    w.write_all(s.as_bytes())?;
    Ok(())
}

/// Write a length-prefixed byte array (u32 length + bytes).
pub fn write_length_prefixed_bytes(w: &mut dyn Write, b: &[u8]) -> Result<(), ModelError> {
    write_u32_le(w, b.len() as u32)?;
    w.write_all(b)?;
    Ok(())
}

// ── Primitive readers ───────────────────────────────────────────

/// Read a single byte.
pub fn read_u8(r: &mut dyn Read) -> Result<u8, ModelError> {
    let mut buf = [0u8; 1];
    r.read_exact(&mut buf)?;
    Ok(buf[0])
}

/// Read a little-endian u32.
pub fn read_u32_le(r: &mut dyn Read) -> Result<u32, ModelError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

/// Read a length-prefixed UTF-8 string.
pub fn read_length_prefixed_str(r: &mut dyn Read) -> Result<String, ModelError> {
    let len = read_u32_le(r)? as usize;
    let mut buf = vec![0u8; len];
    r.read_exact(&mut buf)?;
    String::from_utf8(buf).map_err(|e| ModelError::Malformed {
        detail: format!("invalid UTF-8 string: {e}"),
    })
}

/// Read a length-prefixed byte array.
pub fn read_length_prefixed_bytes(r: &mut dyn Read) -> Result<Vec<u8>, ModelError> {
    let len = read_u32_le(r)? as usize;
    let mut buf = vec![0u8; len];
    r.read_exact(&mut buf)?;
    Ok(buf)
}

// ── Element types ───────────────────────────────────────────────

/// Encode an element type as its wire tag.
pub fn encode_element_type(w: &mut dyn Write, et: ElementType) -> Result<(), ModelError> {
    let tag = match et {
        ElementType::F32 => ELEM_F32,
        ElementType::I8 => ELEM_I8,
        ElementType::U8 => ELEM_U8,
        ElementType::I32 => ELEM_I32,
    };
    write_u8(w, tag)
}

/// Decode an element type from its wire tag.
pub fn decode_element_type(r: &mut dyn Read) -> Result<ElementType, ModelError> {
    match read_u8(r)? {
        ELEM_F32 => Ok(ElementType::F32),
        ELEM_I8 => Ok(ElementType::I8),
        ELEM_U8 => Ok(ElementType::U8),
        ELEM_I32 => Ok(ElementType::I32),
        tag => Err(ModelError::Malformed {
            detail: format!("unknown element type tag {tag}"),
        }),
    }
}

// ── Composite records ───────────────────────────────────────────

/// Encode model metadata.
pub fn encode_meta(w: &mut dyn Write, meta: &ModelMeta) -> Result<(), ModelError> {
    write_length_prefixed_str(w, &meta.name)?;
    write_length_prefixed_str(w, &meta.producer)
}

/// Decode model metadata.
pub fn decode_meta(r: &mut dyn Read) -> Result<ModelMeta, ModelError> {
    Ok(ModelMeta {
        name: read_length_prefixed_str(r)?,
        producer: read_length_prefixed_str(r)?,
    })
}

/// Encode a tensor definition: name, element type tag, rank, extents.
pub fn encode_tensor_def(w: &mut dyn Write, def: &TensorDef) -> Result<(), ModelError> {
    write_length_prefixed_str(w, &def.name)?;
    encode_element_type(w, def.element_type)?;
    write_u32_le(w, def.shape.len() as u32)?;
    for &d in &def.shape {
        write_u32_le(w, d)?;
    }
    Ok(())
}

/// Decode a tensor definition.
pub fn decode_tensor_def(r: &mut dyn Read) -> Result<TensorDef, ModelError> {
    let name = read_length_prefixed_str(r)?;
    let element_type = decode_element_type(r)?;
    let rank = read_u32_le(r)? as usize;
    let mut shape = Shape::new();
    for _ in 0..rank {
        shape.push(read_u32_le(r)?);
    }
    Ok(TensorDef {
        name,
        element_type,
        shape,
    })
}

/// Encode a list of tensor IDs (u32 count + u32 indices).
pub fn encode_tensor_ids(w: &mut dyn Write, ids: &[TensorId]) -> Result<(), ModelError> {
    write_u32_le(w, ids.len() as u32)?;
    for id in ids {
        write_u32_le(w, id.0)?;
    }
    Ok(())
}

/// Decode a list of tensor IDs.
pub fn decode_tensor_ids(r: &mut dyn Read) -> Result<Vec<TensorId>, ModelError> {
    let count = read_u32_le(r)? as usize;
    let mut ids = Vec::with_capacity(count);
    for _ in 0..count {
        ids.push(TensorId(read_u32_le(r)?));
    }
    Ok(ids)
}

/// Encode an operator: wire name plus input and output tensor IDs.
pub fn encode_operator(w: &mut dyn Write, op: &OperatorDef) -> Result<(), ModelError> {
    write_length_prefixed_str(w, &op.op_name)?;
    encode_tensor_ids(w, &op.inputs)?;
    encode_tensor_ids(w, &op.outputs)
}

/// Decode an operator.
pub fn decode_operator(r: &mut dyn Read) -> Result<OperatorDef, ModelError> {
    Ok(OperatorDef {
        op_name: read_length_prefixed_str(r)?,
        inputs: decode_tensor_ids(r)?,
        outputs: decode_tensor_ids(r)?,
    })
}
