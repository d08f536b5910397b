//! Layer proc-address resolver over the intercepted functions.

use indexmap::IndexSet;
use tracing::trace;
use vkgen_core::{Api, Proto};

use super::emitter::Artifact;
use super::lookup::{Cascade, VENDOR_PREFIX};
use super::{EmitError, get_proc_addr};
use crate::classify::ENUMERATE_PHYSICAL_DEVICES;

/// Which functions a layer intercepts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Intercepted {
    /// Everything except physical-device enumeration.
    #[default]
    Default,
    /// Exactly the named functions.
    Only(IndexSet<String>),
}

impl Intercepted {
    pub fn contains(&self, proto: &Proto) -> bool {
        match self {
            Intercepted::Default => proto.name() != ENUMERATE_PHYSICAL_DEVICES,
            Intercepted::Only(names) => names.contains(proto.name()),
        }
    }
}

/// `layer-intercept-proc [name]...`
#[derive(Clone, Debug, Default)]
pub struct LayerInterceptProc {
    intercepted: Intercepted,
}

impl LayerInterceptProc {
    pub fn new(intercepted: Intercepted) -> Self {
        Self { intercepted }
    }

    /// No arguments keep the default set; otherwise the arguments name the
    /// intercepted functions, with or without the `vk` prefix.
    pub(crate) fn from_args(args: &[String]) -> Self {
        if args.is_empty() {
            return Self::default();
        }
        let names = args
            .iter()
            .map(|arg| arg.strip_prefix(VENDOR_PREFIX).unwrap_or(arg).to_string())
            .collect();
        Self::new(Intercepted::Only(names))
    }
}

impl Artifact for LayerInterceptProc {
    fn header(&self, _api: &Api) -> Option<String> {
        Some("#include <string.h>\n#include \"vkLayer.h\"".to_string())
    }

    fn body(&self, api: &Api) -> Result<String, EmitError> {
        let gpa = get_proc_addr(api)?;

        let mut cascade = Cascade::new();
        for proto in api.protos() {
            if !self.intercepted.contains(proto) {
                trace!(proto = proto.name(), "not intercepted");
                cascade.skip(proto.name());
                continue;
            }
            let value = format!("({}) {VENDOR_PREFIX}{}", gpa.ret(), proto.name());
            cascade.branch("name", proto.name(), &value);
        }

        let signature = format!(
            "static inline {} layer_intercept_proc(const char *name)",
            gpa.ret()
        );
        Ok(cascade.into_function(&signature, "name"))
    }
}
