//! One-call model loading: parse, register builtins, bind, allocate.

use micrograph_arena::ArenaConfig;
use micrograph_core::OpSet;
use micrograph_kernel::OpResolver;
use micrograph_kernels::register_builtins;
use micrograph_model::{schema_version, Model};

use crate::error::LoadError;
use crate::interpreter::Interpreter;

/// The result of loading a model buffer end to end.
pub struct LoadedModel {
    interpreter: Interpreter,
    registered_ops: OpSet,
}

impl LoadedModel {
    /// The bound interpreter.
    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Mutable access to the interpreter, e.g. for staging input data.
    pub fn interpreter_mut(&mut self) -> &mut Interpreter {
        &mut self.interpreter
    }

    /// The operations that had kernels registered during loading.
    pub fn registered_ops(&self) -> OpSet {
        self.registered_ops
    }
}

/// Load a model buffer into a ready interpreter.
///
/// Steps run in a fixed order, each failing with its own
/// [`LoadError`] variant:
///
/// 1. Check the buffer's magic and schema version.
/// 2. Parse the full model description.
/// 3. Register the builtin kernels into a fresh resolver; any
///    registration failure aborts with the per-kernel failure list.
/// 4. Bind the graph and lay out tensor storage
///    ([`Interpreter::new`]).
///
/// The returned [`LoadedModel`] owns everything; no references into
/// `buf` survive the call.
pub fn load_model(buf: &[u8], config: &ArenaConfig) -> Result<LoadedModel, LoadError> {
    schema_version(buf)?;
    let model = Model::parse(buf)?;

    let mut resolver = OpResolver::new();
    let failures: Vec<_> = register_builtins(&mut resolver)
        .into_iter()
        .filter_map(|(op, result)| result.err().map(|e| (op, e)))
        .collect();
    if !failures.is_empty() {
        return Err(LoadError::Registry { failures });
    }
    let registered_ops = resolver.registered();

    let interpreter = Interpreter::new(model, &resolver, config)?;
    Ok(LoadedModel {
        interpreter,
        registered_ops,
    })
}
