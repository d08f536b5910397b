//! Driver-side stubs and the proc-address resolver over them.

use vkgen_core::{Api, Proto};

use super::emitter::Artifact;
use super::lookup::Cascade;
use super::{EmitError, get_proc_addr};

/// Name prefix and linkage of generated driver entry points.
///
/// A single argument selects a `static` helper library with that prefix;
/// anything else falls back to exported `vk*` driver entry points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StubLinkage {
    prefix: String,
    qual: &'static str,
}

impl StubLinkage {
    pub fn exported() -> Self {
        Self {
            prefix: "vk".to_string(),
            qual: "ICD_EXPORT",
        }
    }

    pub fn static_with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            qual: "static",
        }
    }

    pub(crate) fn from_args(args: &[String]) -> Self {
        match args {
            [prefix] => Self::static_with_prefix(prefix.clone()),
            _ => Self::exported(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn qual(&self) -> &str {
        self.qual
    }

    fn stub_decl(&self, proto: &Proto) -> String {
        proto.c_pretty_decl(&format!("{}{}", self.prefix, proto.name()), "VKAPI")
    }
}

impl Default for StubLinkage {
    fn default() -> Self {
        Self::exported()
    }
}

/// `icd-dummy-entrypoints [prefix]`
#[derive(Clone, Debug, Default)]
pub struct IcdDummyEntrypoints {
    linkage: StubLinkage,
}

impl IcdDummyEntrypoints {
    pub fn new(linkage: StubLinkage) -> Self {
        Self { linkage }
    }

    pub(crate) fn from_args(args: &[String]) -> Self {
        Self::new(StubLinkage::from_args(args))
    }
}

impl Artifact for IcdDummyEntrypoints {
    fn header(&self, _api: &Api) -> Option<String> {
        Some("#include \"icd.h\"".to_string())
    }

    fn body(&self, api: &Api) -> Result<String, EmitError> {
        let stubs: Vec<String> = api
            .protos()
            .map(|proto| {
                let stmt = if proto.returns_void() {
                    ""
                } else {
                    "    return VK_ERROR_UNKNOWN;\n"
                };
                format!(
                    "{} {}\n{{\n{stmt}}}",
                    self.linkage.qual(),
                    self.linkage.stub_decl(proto)
                )
            })
            .collect();
        Ok(stubs.join("\n\n"))
    }
}

/// `icd-get-proc-addr [prefix]`
#[derive(Clone, Debug, Default)]
pub struct IcdGetProcAddr {
    linkage: StubLinkage,
}

impl IcdGetProcAddr {
    pub fn new(linkage: StubLinkage) -> Self {
        Self { linkage }
    }

    pub(crate) fn from_args(args: &[String]) -> Self {
        Self::new(StubLinkage::from_args(args))
    }
}

impl Artifact for IcdGetProcAddr {
    fn header(&self, _api: &Api) -> Option<String> {
        Some("#include <string.h>\n#include \"icd.h\"".to_string())
    }

    fn body(&self, api: &Api) -> Result<String, EmitError> {
        let gpa = get_proc_addr(api)?;
        let Some(name_param) = gpa.last_param() else {
            return Err(EmitError::MalformedPrototype {
                name: gpa.name().to_string(),
                reason: "has no name parameter",
            });
        };
        let var = name_param.name();

        let mut cascade = Cascade::new();
        for proto in api.protos() {
            let value = format!("({}) {}{}", gpa.ret(), self.linkage.prefix(), proto.name());
            cascade.branch(var, proto.name(), &value);
        }

        let signature = format!("{} {}", self.linkage.qual(), self.linkage.stub_decl(gpa));
        Ok(cascade.into_function(&signature, var))
    }
}
