//! Artifact emission.
//!
//! Each artifact kind is a variant of [`Emitter`] backed by a struct
//! implementing [`Artifact`]. All of them read the same immutable
//! [`Api`] and never depend on one another's output.

mod banner;
mod config;
mod def_file;
mod dispatch_table;
mod emitter;
mod error;
mod icd;
mod layer_intercept;
mod loader_entrypoints;
mod loader_gpa;
mod lookup;

#[cfg(test)]
mod def_file_tests;
#[cfg(test)]
mod loader_entrypoints_tests;

use vkgen_core::{Api, Proto};

use crate::classify::GET_PROC_ADDR;

pub use banner::Banner;
pub use config::Config;
pub use def_file::{ExportProfile, WinDefFile};
pub use dispatch_table::DispatchTableOps;
pub use emitter::{Artifact, Emitter, EmitterKind, generate};
pub use error::EmitError;
pub use icd::{IcdDummyEntrypoints, IcdGetProcAddr, StubLinkage};
pub use layer_intercept::{Intercepted, LayerInterceptProc};
pub use loader_entrypoints::LoaderEntrypoints;
pub use loader_gpa::LoaderGetProcAddr;

/// The `GetProcAddr` prototype; resolvers take their signature from it.
pub fn get_proc_addr(api: &Api) -> Result<&Proto, EmitError> {
    api.proto(GET_PROC_ADDR)
        .ok_or(EmitError::MissingPrototype(GET_PROC_ADDR))
}
