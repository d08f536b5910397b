//! vkgen code generator: classification and artifact emission.
//!
//! This crate turns a [`vkgen_core::Api`] into C glue code:
//! - `classify` - per-prototype decisions (dispatchable? creates objects?
//!   handled outside the generic loader path?)
//! - `emit` - one emitter per artifact kind (dispatch tables, loader
//!   trampolines, ICD stubs, proc-address resolvers, export manifests)

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod classify;
pub mod emit;

#[cfg(test)]
pub mod test_utils;

pub use classify::{Classification, Classifier};
pub use emit::{Config, EmitError, Emitter, EmitterKind, generate};

/// Errors from loading a description and generating an artifact from it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] vkgen_core::ApiError),

    #[error(transparent)]
    Emit(#[from] EmitError),
}

/// Result type for generation runs.
pub type Result<T> = std::result::Result<T, Error>;
