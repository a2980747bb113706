//! Builtin operation kernels for the Micrograph inference bootstrap.
//!
//! One kernel per supported operation, each validating the tensor
//! signatures its operation accepts. Kernels declare scratch needs but
//! never execute numeric math; see the `micrograph-kernel` crate docs
//! for the trait contract.
//!
//! [`register_builtins`] installs the full set into an [`OpResolver`]
//! and reports the outcome per kernel, so a caller can see exactly
//! which registration failed instead of a single aggregate verdict.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod checks;

pub mod add;
pub mod conv2d;
pub mod depthwise_conv2d;
pub mod dequantize;
pub mod max_pool2d;
pub mod pad;
pub mod prelu;
pub mod reshape;
pub mod resize_bilinear;

pub use add::AddKernel;
pub use conv2d::Conv2dKernel;
pub use depthwise_conv2d::DepthwiseConv2dKernel;
pub use dequantize::DequantizeKernel;
pub use max_pool2d::MaxPool2dKernel;
pub use pad::PadKernel;
pub use prelu::PreluKernel;
pub use reshape::ReshapeKernel;
pub use resize_bilinear::ResizeBilinearKernel;

use micrograph_core::OpKind;
use micrograph_kernel::{Kernel, OpResolver, RegistryError};

/// The full builtin kernel set, in wire-name order.
pub fn builtin_kernels() -> Vec<Box<dyn Kernel>> {
    vec![
        Box::new(PreluKernel),
        Box::new(DepthwiseConv2dKernel),
        Box::new(Conv2dKernel),
        Box::new(AddKernel),
        Box::new(DequantizeKernel),
        Box::new(MaxPool2dKernel),
        Box::new(PadKernel),
        Box::new(ResizeBilinearKernel),
        Box::new(ReshapeKernel),
    ]
}

/// Register every builtin kernel, reporting the outcome per kernel.
///
/// Registration continues past failures, so on a resolver that already
/// holds some kernels the result pinpoints each collision individually.
pub fn register_builtins(resolver: &mut OpResolver) -> Vec<(OpKind, Result<(), RegistryError>)> {
    builtin_kernels()
        .into_iter()
        .map(|kernel| {
            let op = kernel.op();
            (op, resolver.register(kernel))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_cover_every_op_kind() {
        let mut resolver = OpResolver::new();
        let results = register_builtins(&mut resolver);
        assert_eq!(results.len(), OpKind::ALL.len());
        assert!(results.iter().all(|(_, r)| r.is_ok()));
        assert_eq!(resolver.registered(), micrograph_core::OpSet::all());
    }

    #[test]
    fn collisions_are_reported_individually() {
        let mut resolver = OpResolver::new();
        resolver.register(Box::new(AddKernel)).unwrap();
        let results = register_builtins(&mut resolver);
        let failures: Vec<_> = results.iter().filter(|(_, r)| r.is_err()).collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, OpKind::Add);
        // Everything else still registered.
        assert_eq!(resolver.len(), OpKind::ALL.len());
    }

    #[test]
    fn kernels_report_their_op() {
        for kernel in builtin_kernels() {
            assert_eq!(kernel.name(), kernel.op().name());
        }
    }
}
