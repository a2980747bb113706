//! The interpreter: binds a parsed model to kernels and lays out its
//! tensor storage.
//!
//! Construction is the whole job. [`Interpreter::new`] first proves the
//! graph bindable (every operator resolves to a kernel that accepts its
//! tensor signature), then lays every tensor out in a freshly allocated
//! arena and reserves the kernels' scratch space. A constructed
//! interpreter is therefore always fully bound and fully allocated;
//! there is no partially loaded state to observe.

use micrograph_arena::{ArenaConfig, TensorArena};
use micrograph_core::{OpKind, TensorDef, TensorId};
use micrograph_kernel::{OpInvocation, OpResolver};
use micrograph_model::{Model, ModelError};
use smallvec::SmallVec;

use crate::error::LoadError;

/// Read-only view of one tensor's definition and storage.
#[derive(Clone, Copy, Debug)]
pub struct TensorView<'a> {
    /// The tensor's definition from the model table.
    pub def: &'a TensorDef,
    /// The tensor's arena region.
    pub data: &'a [f32],
}

/// Mutable view of one tensor's definition and storage.
#[derive(Debug)]
pub struct TensorViewMut<'a> {
    /// The tensor's definition from the model table.
    pub def: &'a TensorDef,
    /// The tensor's arena region.
    pub data: &'a mut [f32],
}

/// A model bound to kernels with all tensor storage laid out.
///
/// Owns both the parsed model and the arena backing its tensors, so
/// views returned by [`Interpreter::input`] and friends stay valid for
/// as long as the interpreter itself.
pub struct Interpreter {
    model: Model,
    arena: TensorArena,
}

impl Interpreter {
    /// Bind a model against a kernel registry and lay out its tensors.
    ///
    /// Binding runs before any allocation: a model that fails
    /// validation costs no arena memory. The two phases are
    ///
    /// 1. **Bind.** Each operator's wire name is resolved to an
    ///    [`OpKind`] and a registered kernel, and the kernel validates
    ///    the operator's tensor signature. Scratch requirements are
    ///    gathered here.
    /// 2. **Allocate.** Every tensor in the table gets an arena region
    ///    in table order, then the largest kernel scratch requirement is
    ///    reserved once; operators run one at a time, so they share one
    ///    scratch region.
    ///
    /// Finally the model must designate at least one input and one
    /// output tensor, mirroring what a caller needs to feed and read a
    /// network.
    pub fn new(
        model: Model,
        resolver: &OpResolver,
        config: &ArenaConfig,
    ) -> Result<Self, LoadError> {
        if model.operators().is_empty() {
            return Err(LoadError::EmptyGraph);
        }

        // Bind phase.
        let mut scratch_needs: Vec<usize> = Vec::with_capacity(model.operators().len());
        for (index, operator) in model.operators().iter().enumerate() {
            let op = OpKind::from_name(&operator.op_name).ok_or_else(|| LoadError::UnknownOp {
                index,
                name: operator.op_name.clone(),
            })?;
            let kernel = resolver
                .resolve(op)
                .ok_or(LoadError::UnregisteredOp { index, op })?;

            let inputs = resolve_defs(&model, &operator.inputs)?;
            let outputs = resolve_defs(&model, &operator.outputs)?;
            let invocation = OpInvocation::new(index, &inputs, &outputs);
            kernel
                .validate(&invocation)
                .map_err(|reason| LoadError::Kernel { index, op, reason })?;
            scratch_needs.push(kernel.scratch_bytes(&invocation));
        }

        // Allocate phase.
        let mut arena = TensorArena::new(config);
        for (i, def) in model.tensors().iter().enumerate() {
            let bytes = def
                .byte_len()
                .and_then(|b| usize::try_from(b).ok())
                .ok_or_else(|| {
                    LoadError::Model(ModelError::Malformed {
                        detail: format!("tensor '{}' byte length is not addressable", def.name),
                    })
                })?;
            arena.allocate(TensorId(i as u32), bytes)?;
        }
        // Scratch is working memory reused between sequential operators,
        // so only the largest requirement is reserved.
        if let Some(&bytes) = scratch_needs.iter().max() {
            arena.reserve_scratch(bytes)?;
        }

        if model.inputs().is_empty() {
            return Err(LoadError::MissingInput);
        }
        if model.outputs().is_empty() {
            return Err(LoadError::MissingOutput);
        }

        Ok(Self { model, arena })
    }

    /// View the `i`-th designated input tensor.
    pub fn input(&self, i: usize) -> Option<TensorView<'_>> {
        let id = *self.model.inputs().get(i)?;
        self.view(id)
    }

    /// Mutably view the `i`-th designated input tensor, for staging
    /// data a later runtime would consume.
    pub fn input_mut(&mut self, i: usize) -> Option<TensorViewMut<'_>> {
        let id = *self.model.inputs().get(i)?;
        let def = self.model.tensor(id)?;
        let data = self.arena.region_mut(id)?;
        Some(TensorViewMut { def, data })
    }

    /// View the `i`-th designated output tensor.
    pub fn output(&self, i: usize) -> Option<TensorView<'_>> {
        let id = *self.model.outputs().get(i)?;
        self.view(id)
    }

    /// View any tensor by ID.
    pub fn view(&self, id: TensorId) -> Option<TensorView<'_>> {
        let def = self.model.tensor(id)?;
        let data = self.arena.region(id)?;
        Some(TensorView { def, data })
    }

    /// Bytes of arena actually consumed by tensors and scratch.
    pub fn arena_used_bytes(&self) -> usize {
        self.arena.used_bytes()
    }

    /// Total arena capacity in bytes.
    pub fn arena_capacity_bytes(&self) -> usize {
        self.arena.capacity_bytes()
    }

    /// Number of operators in the bound graph.
    pub fn op_count(&self) -> usize {
        self.model.operators().len()
    }

    /// Number of tensors with arena storage.
    pub fn tensor_count(&self) -> usize {
        self.arena.tensor_count()
    }

    /// The parsed model this interpreter is bound to.
    pub fn model(&self) -> &Model {
        &self.model
    }
}

/// Collect borrowed tensor definitions for an operator's ID list.
fn resolve_defs<'a>(
    model: &'a Model,
    ids: &[TensorId],
) -> Result<SmallVec<[&'a TensorDef; 3]>, LoadError> {
    ids.iter()
        .map(|&id| {
            model.tensor(id).ok_or_else(|| {
                LoadError::Model(ModelError::TensorIndexOutOfRange {
                    index: id.0,
                    count: model.tensors().len() as u32,
                })
            })
        })
        .collect()
}
