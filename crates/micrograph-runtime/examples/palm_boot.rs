//! Palm-detection bootstrap example.
//!
//! Demonstrates: encode a palm-detection-shaped model → load it →
//! stage a camera frame into the input tensor → inspect the detection
//! head tensors and arena usage.

use micrograph_arena::ArenaConfig;
use micrograph_runtime::load_model;
use micrograph_test_utils::palm_detection_model;

fn main() {
    println!("=== Micrograph Palm Detection Bootstrap ===\n");

    let buf = palm_detection_model();
    println!("model buffer: {} bytes", buf.len());

    let config = ArenaConfig::default();
    let mut loaded = load_model(&buf, &config).unwrap();
    println!("registered ops: {}", loaded.registered_ops().len());

    {
        let interp = loaded.interpreter();
        println!(
            "graph bound: {} operators, {} tensors",
            interp.op_count(),
            interp.tensor_count()
        );
        println!(
            "arena: {} / {} bytes used",
            interp.arena_used_bytes(),
            interp.arena_capacity_bytes()
        );
    }

    // Stage a synthetic grey frame into the input tensor. A numeric
    // runtime would consume this; here it proves the storage is live.
    {
        let input = loaded.interpreter_mut().input_mut(0).unwrap();
        println!("\ninput:  {}", input.def);
        input.data.fill(0.5);
    }

    let interp = loaded.interpreter();
    for i in 0.. {
        let Some(output) = interp.output(i) else { break };
        println!("output: {} ({} values)", output.def, output.data.len());
    }

    println!("\nready for inference.");
}
