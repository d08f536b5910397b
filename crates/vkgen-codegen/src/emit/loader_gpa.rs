//! Loader-wide proc-address resolvers.

use vkgen_core::Api;

use super::emitter::Artifact;
use super::lookup::{Cascade, VENDOR_PREFIX};
use super::{EmitError, get_proc_addr};
use crate::classify::Classifier;

/// `loader-get-proc-addr`: takes no arguments.
///
/// Emits `globalGetProcAddr`, resolving every function, and
/// `loader_non_passthrough_gpa`, resolving only the functions the loader
/// cannot forward through the generic trampoline.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoaderGetProcAddr;

impl Artifact for LoaderGetProcAddr {
    fn header(&self, _api: &Api) -> Option<String> {
        Some("#include <string.h>".to_string())
    }

    fn body(&self, api: &Api) -> Result<String, EmitError> {
        let gpa = get_proc_addr(api)?;
        let classifier = Classifier::for_api(api);

        let mut global = Cascade::new();
        let mut non_passthrough = Cascade::new();
        for proto in api.protos() {
            let value = format!("({}) {VENDOR_PREFIX}{}", gpa.ret(), proto.name());
            global.branch("name", proto.name(), &value);
            if classifier.needs_loader_trampoline(proto) {
                non_passthrough.branch("name", proto.name(), &value);
            }
        }

        let global = global.into_function(
            &format!("static inline {} globalGetProcAddr(const char *name)", gpa.ret()),
            "name",
        );
        let non_passthrough = non_passthrough.into_function(
            "static inline void *loader_non_passthrough_gpa(const char *name)",
            "name",
        );
        Ok(format!("{global}\n\n{non_passthrough}"))
    }
}
