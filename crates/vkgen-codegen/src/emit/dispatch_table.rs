//! Dispatch table initializer and name lookup.

use vkgen_core::Api;

use super::emitter::Artifact;
use super::lookup::Cascade;
use super::{EmitError, EmitterKind};
use crate::classify::{CREATE_INSTANCE, Classifier};

/// `dispatch-table-ops <prefix>`
#[derive(Clone, Debug)]
pub struct DispatchTableOps {
    prefix: String,
}

impl DispatchTableOps {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub(crate) fn from_args(args: &[String]) -> Result<Self, EmitError> {
        match args {
            [prefix] => Ok(Self::new(prefix.clone())),
            _ => Err(EmitError::usage(
                EmitterKind::DispatchTableOps,
                "<prefix> unspecified",
            )),
        }
    }

    fn initializer(&self, api: &Api) -> String {
        let classifier = Classifier::for_api(api);
        let stmts: Vec<String> = api
            .protos()
            .map(|proto| {
                let name = proto.name();
                if classifier.is_dispatchable_first_param(proto) || name == CREATE_INSTANCE {
                    format!("table->{name} = (PFN_vk{name}) gpa(gpu, \"vk{name}\");")
                } else {
                    format!("table->{name} = vk{name}; /* non-dispatchable */")
                }
            })
            .collect();

        let open = format!(
            "static inline void {}_initialize_dispatch_table(",
            self.prefix
        );
        let indent = " ".repeat(open.len());

        let mut func = vec![
            format!("{open}VkLayerDispatchTable *table,"),
            format!("{indent}PFN_vkGetProcAddr gpa,"),
            format!("{indent}VkPhysicalDevice gpu)"),
            "{".to_string(),
        ];
        func.extend(stmts.iter().map(|stmt| format!("    {stmt}")));
        func.push("}".to_string());
        func.join("\n")
    }

    fn lookup(&self, api: &Api) -> String {
        let classifier = Classifier::for_api(api);
        let mut cascade = Cascade::new();
        for proto in api
            .protos()
            .filter(|proto| classifier.is_dispatchable_first_param(proto))
        {
            let name = proto.name();
            cascade.branch("name", name, &format!("(void *) table->{name}"));
        }

        let open = format!("static inline void *{}_lookup_dispatch_table(", self.prefix);
        let indent = " ".repeat(open.len());
        let signature = format!(
            "{open}const VkLayerDispatchTable *table,\n{indent}const char *name)"
        );
        cascade.into_function(&signature, "name")
    }
}

impl Artifact for DispatchTableOps {
    fn header(&self, _api: &Api) -> Option<String> {
        Some(
            [
                "#include <vulkan.h>",
                "#include <vkLayer.h>",
                "#include <string.h>",
                "#include \"loader_platform.h\"",
            ]
            .join("\n"),
        )
    }

    fn body(&self, api: &Api) -> Result<String, EmitError> {
        Ok([self.initializer(api), self.lookup(api)].join("\n\n"))
    }
}
