#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for the vkgen prototype model.
//!
//! Two layers:
//! - **Deserialization layer**: 1:1 mapping to the JSON API description
//! - **Model layer**: name-indexed, order-preserving prototype set
//!
//! The model is built once per generation run and never mutated afterwards.
//! Emitters borrow it immutably.

pub mod colors;
mod model;
mod render;


pub use colors::Colors;
pub use model::{Api, Handles, Param, Proto};

// ============================================================================
// Deserialization Layer
// ============================================================================

/// Raw API description as found in the JSON input.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawApi {
    #[serde(default)]
    pub headers: Vec<String>,
    /// Type tokens that denote object handles.
    #[serde(default)]
    pub objects: Vec<String>,
    pub protos: Vec<RawProto>,
}

/// Raw function prototype.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawProto {
    pub name: String,
    pub ret: String,
    #[serde(default)]
    pub params: Vec<RawParam>,
}

/// Raw parameter: a type token and a name.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawParam {
    pub ty: String,
    pub name: String,
}

/// Parse a JSON API description into raw records.
pub fn parse_api(json: &str) -> Result<RawApi, ApiError> {
    Ok(serde_json::from_str(json)?)
}

impl TryFrom<RawApi> for Api {
    type Error = ApiError;

    fn try_from(raw: RawApi) -> Result<Self, Self::Error> {
        let mut api = Api::new(raw.headers, Handles::from_iter(raw.objects));
        for raw_proto in raw.protos {
            let proto = raw_proto
                .params
                .into_iter()
                .fold(Proto::new(raw_proto.ret, raw_proto.name), |proto, p| {
                    proto.param(p.ty, p.name)
                });
            api.push(proto)?;
        }
        Ok(api)
    }
}

impl Api {
    /// Load the model straight from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ApiError> {
        parse_api(json)?.try_into()
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Errors raised while loading an API description.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid API description: {0}")]
    Json(#[from] serde_json::Error),

    /// Prototype names must be unique; the name is the prototype's identity.
    #[error("duplicate prototype '{0}'")]
    DuplicatePrototype(String),
}
