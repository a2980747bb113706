//! Prebuilt model buffers for tests and examples.

use micrograph_core::{ElementType, OpKind, TensorDef};
use micrograph_model::ModelBuilder;

/// A palm-detection-shaped model exercising every builtin operation.
///
/// The graph follows the real network's silhouette: a 192x192x3 camera
/// frame runs through a narrow backbone (convolutions, PReLU
/// activations, a residual add, pooling, padding, a dequantized
/// constant branch and a bilinear upsample) into two detection heads
/// that reshape to the familiar `[1, 2016, 18]` anchor boxes and
/// `[1, 2016, 1]` scores. Channel counts are trimmed to 8 so the whole
/// layout fits comfortably inside the default 3.5 MB arena.
///
/// Inputs: the camera frame. Outputs: `detection_boxes`,
/// `detection_scores`.
pub fn palm_detection_model() -> Vec<u8> {
    let mut b = ModelBuilder::new("palm_detection").producer("micrograph-test-utils");
    let f32_t = |name: &str, dims: &[u32]| TensorDef::new(name, ElementType::F32, dims);

    let input = b.add_tensor(f32_t("input", &[1, 192, 192, 3]));

    // Backbone stem.
    let conv1_w = b.add_tensor(f32_t("conv1_w", &[8, 3, 3, 3]));
    let conv1_b = b.add_tensor(f32_t("conv1_b", &[8]));
    let conv1_out = b.add_tensor(f32_t("conv1_out", &[1, 96, 96, 8]));
    let alpha1 = b.add_tensor(f32_t("alpha1", &[8]));
    let prelu1_out = b.add_tensor(f32_t("prelu1_out", &[1, 96, 96, 8]));

    // Depthwise block with a residual join.
    let dw_w = b.add_tensor(f32_t("dw_w", &[1, 3, 3, 8]));
    let dw_b = b.add_tensor(f32_t("dw_b", &[8]));
    let dw_out = b.add_tensor(f32_t("dw_out", &[1, 96, 96, 8]));
    let res_out = b.add_tensor(f32_t("res_out", &[1, 96, 96, 8]));

    // Downsample, pad, second conv stage.
    let pool_out = b.add_tensor(f32_t("pool_out", &[1, 48, 48, 8]));
    let paddings = b.add_tensor(TensorDef::new("paddings", ElementType::I32, &[4, 2]));
    let pad_out = b.add_tensor(f32_t("pad_out", &[1, 49, 49, 8]));
    let conv2_w = b.add_tensor(f32_t("conv2_w", &[8, 3, 3, 8]));
    let conv2_b = b.add_tensor(f32_t("conv2_b", &[8]));
    let conv2_out = b.add_tensor(f32_t("conv2_out", &[1, 24, 24, 8]));

    // Upsample back and merge with a dequantized constant branch.
    let resize_size = b.add_tensor(TensorDef::new("resize_size", ElementType::I32, &[2]));
    let resize_out = b.add_tensor(f32_t("resize_out", &[1, 48, 48, 8]));
    let quant_skip = b.add_tensor(TensorDef::new("quant_skip", ElementType::I8, &[1, 48, 48, 8]));
    let deq_out = b.add_tensor(f32_t("deq_out", &[1, 48, 48, 8]));
    let merged = b.add_tensor(f32_t("merged", &[1, 48, 48, 8]));

    // Detection heads. 42 * 48 = 2016 anchors.
    let boxes_w = b.add_tensor(f32_t("boxes_w", &[18, 3, 3, 8]));
    let boxes_b = b.add_tensor(f32_t("boxes_b", &[18]));
    let boxes_raw = b.add_tensor(f32_t("boxes_raw", &[1, 42, 48, 18]));
    let detection_boxes = b.add_tensor(f32_t("detection_boxes", &[1, 2016, 18]));
    let scores_w = b.add_tensor(f32_t("scores_w", &[1, 3, 3, 8]));
    let scores_b = b.add_tensor(f32_t("scores_b", &[1]));
    let scores_raw = b.add_tensor(f32_t("scores_raw", &[1, 42, 48, 1]));
    let detection_scores = b.add_tensor(f32_t("detection_scores", &[1, 2016, 1]));

    b.add_op(OpKind::Conv2d, &[input, conv1_w, conv1_b], &[conv1_out]);
    b.add_op(OpKind::Prelu, &[conv1_out, alpha1], &[prelu1_out]);
    b.add_op(OpKind::DepthwiseConv2d, &[prelu1_out, dw_w, dw_b], &[dw_out]);
    b.add_op(OpKind::Add, &[prelu1_out, dw_out], &[res_out]);
    b.add_op(OpKind::MaxPool2d, &[res_out], &[pool_out]);
    b.add_op(OpKind::Pad, &[pool_out, paddings], &[pad_out]);
    b.add_op(OpKind::Conv2d, &[pad_out, conv2_w, conv2_b], &[conv2_out]);
    b.add_op(OpKind::ResizeBilinear, &[conv2_out, resize_size], &[resize_out]);
    b.add_op(OpKind::Dequantize, &[quant_skip], &[deq_out]);
    b.add_op(OpKind::Add, &[resize_out, deq_out], &[merged]);
    b.add_op(OpKind::Conv2d, &[merged, boxes_w, boxes_b], &[boxes_raw]);
    b.add_op(OpKind::Reshape, &[boxes_raw], &[detection_boxes]);
    b.add_op(OpKind::Conv2d, &[merged, scores_w, scores_b], &[scores_raw]);
    b.add_op(OpKind::Reshape, &[scores_raw], &[detection_scores]);

    b.mark_input(input);
    b.mark_output(detection_boxes);
    b.mark_output(detection_scores);
    b.set_weights(vec![0u8; 256]);

    // Fixture construction is infallible: Vec<u8> writes cannot error.
    b.encode().expect("fixture encodes")
}

/// The smallest loadable model: one reshape, one input, one output.
pub fn tiny_model() -> Vec<u8> {
    let mut b = ModelBuilder::new("tiny");
    let a = b.add_tensor(TensorDef::new("a", ElementType::F32, &[2, 3]));
    let out = b.add_tensor(TensorDef::new("out", ElementType::F32, &[6]));
    b.add_op(OpKind::Reshape, &[a], &[out]);
    b.mark_input(a);
    b.mark_output(out);
    b.encode().expect("fixture encodes")
}

/// A well-formed model whose single tensor exceeds the default arena.
pub fn oversized_model() -> Vec<u8> {
    let mut b = ModelBuilder::new("oversized");
    // 1024 * 1024 * 4 f32s = 16 MB, well past the 3.5 MB default.
    let a = b.add_tensor(TensorDef::new("huge", ElementType::F32, &[1024, 1024, 4]));
    let out = b.add_tensor(TensorDef::new("out", ElementType::F32, &[4, 1024, 1024]));
    b.add_op(OpKind::Reshape, &[a], &[out]);
    b.mark_input(a);
    b.mark_output(out);
    b.encode().expect("fixture encodes")
}

/// A tiny model whose header claims the given schema version.
pub fn model_with_schema_version(version: u32) -> Vec<u8> {
    let mut b = ModelBuilder::new("versioned").schema_version(version);
    let a = b.add_tensor(TensorDef::new("a", ElementType::F32, &[4]));
    b.add_op(OpKind::Reshape, &[a], &[a]);
    b.mark_input(a);
    b.mark_output(a);
    b.encode().expect("fixture encodes")
}

/// A single-operator model using an arbitrary wire name.
pub fn model_with_op(op_name: &str) -> Vec<u8> {
    let mut b = ModelBuilder::new("single_op");
    let a = b.add_tensor(TensorDef::new("a", ElementType::F32, &[4]));
    let out = b.add_tensor(TensorDef::new("out", ElementType::F32, &[4]));
    b.add_operator(op_name, &[a], &[out]);
    b.mark_input(a);
    b.mark_output(out);
    b.encode().expect("fixture encodes")
}
