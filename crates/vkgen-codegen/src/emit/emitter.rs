//! Emitter selection and the banner/header/body/footer contract.

use std::fmt;

use tracing::debug;
use vkgen_core::Api;

use super::def_file::WinDefFile;
use super::dispatch_table::DispatchTableOps;
use super::icd::{IcdDummyEntrypoints, IcdGetProcAddr};
use super::layer_intercept::LayerInterceptProc;
use super::loader_entrypoints::LoaderEntrypoints;
use super::loader_gpa::LoaderGetProcAddr;
use super::{Banner, Config, EmitError};

/// Sections every artifact is assembled from.
pub trait Artifact {
    fn banner(&self) -> Banner {
        Banner::C
    }

    /// Include block. Defaults to the description's own headers.
    fn header(&self, api: &Api) -> Option<String> {
        if api.headers().is_empty() {
            return None;
        }
        let includes: Vec<String> = api
            .headers()
            .iter()
            .map(|h| format!("#include <{h}>"))
            .collect();
        Some(includes.join("\n"))
    }

    fn body(&self, api: &Api) -> Result<String, EmitError>;

    fn footer(&self, _api: &Api) -> Option<String> {
        None
    }
}

/// Identifier of an artifact kind, as accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EmitterKind {
    LoaderEntrypoints,
    DispatchTableOps,
    IcdDummyEntrypoints,
    IcdGetProcAddr,
    LayerInterceptProc,
    WinDefFile,
    LoaderGetProcAddr,
}

impl EmitterKind {
    pub const ALL: [EmitterKind; 7] = [
        EmitterKind::LoaderEntrypoints,
        EmitterKind::DispatchTableOps,
        EmitterKind::IcdDummyEntrypoints,
        EmitterKind::IcdGetProcAddr,
        EmitterKind::LayerInterceptProc,
        EmitterKind::WinDefFile,
        EmitterKind::LoaderGetProcAddr,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EmitterKind::LoaderEntrypoints => "loader-entrypoints",
            EmitterKind::DispatchTableOps => "dispatch-table-ops",
            EmitterKind::IcdDummyEntrypoints => "icd-dummy-entrypoints",
            EmitterKind::IcdGetProcAddr => "icd-get-proc-addr",
            EmitterKind::LayerInterceptProc => "layer-intercept-proc",
            EmitterKind::WinDefFile => "win-def-file",
            EmitterKind::LoaderGetProcAddr => "loader-get-proc-addr",
        }
    }

    /// Positional arguments, as shown in usage messages.
    pub fn synopsis(self) -> &'static str {
        match self {
            EmitterKind::DispatchTableOps => "<prefix>",
            EmitterKind::IcdDummyEntrypoints | EmitterKind::IcdGetProcAddr => "[prefix]",
            EmitterKind::LayerInterceptProc => "[name]...",
            EmitterKind::WinDefFile => "<library-name> {all|icd|layer}",
            EmitterKind::LoaderEntrypoints | EmitterKind::LoaderGetProcAddr => "",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            EmitterKind::LoaderEntrypoints => "loader trampolines for dispatchable functions",
            EmitterKind::DispatchTableOps => "dispatch table initializer and lookup",
            EmitterKind::IcdDummyEntrypoints => "driver stubs returning VK_ERROR_UNKNOWN",
            EmitterKind::IcdGetProcAddr => "driver proc-address resolver over the stubs",
            EmitterKind::LayerInterceptProc => "layer proc-address resolver for intercepted calls",
            EmitterKind::WinDefFile => "Windows module-definition export list",
            EmitterKind::LoaderGetProcAddr => "loader global and non-passthrough resolvers",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Build the emitter from its positional arguments.
    pub fn configure(self, args: &[String]) -> Result<Emitter, EmitError> {
        debug!(emitter = %self, ?args, "configuring emitter");
        Ok(match self {
            EmitterKind::LoaderEntrypoints => Emitter::LoaderEntrypoints(LoaderEntrypoints),
            EmitterKind::DispatchTableOps => {
                Emitter::DispatchTableOps(DispatchTableOps::from_args(args)?)
            }
            EmitterKind::IcdDummyEntrypoints => {
                Emitter::IcdDummyEntrypoints(IcdDummyEntrypoints::from_args(args))
            }
            EmitterKind::IcdGetProcAddr => Emitter::IcdGetProcAddr(IcdGetProcAddr::from_args(args)),
            EmitterKind::LayerInterceptProc => {
                Emitter::LayerInterceptProc(LayerInterceptProc::from_args(args))
            }
            EmitterKind::WinDefFile => Emitter::WinDefFile(WinDefFile::from_args(args)?),
            EmitterKind::LoaderGetProcAddr => Emitter::LoaderGetProcAddr(LoaderGetProcAddr),
        })
    }
}

impl fmt::Display for EmitterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A configured emitter, one variant per artifact kind.
#[derive(Clone, Debug)]
pub enum Emitter {
    LoaderEntrypoints(LoaderEntrypoints),
    DispatchTableOps(DispatchTableOps),
    IcdDummyEntrypoints(IcdDummyEntrypoints),
    IcdGetProcAddr(IcdGetProcAddr),
    LayerInterceptProc(LayerInterceptProc),
    WinDefFile(WinDefFile),
    LoaderGetProcAddr(LoaderGetProcAddr),
}

impl Emitter {
    pub fn kind(&self) -> EmitterKind {
        match self {
            Emitter::LoaderEntrypoints(_) => EmitterKind::LoaderEntrypoints,
            Emitter::DispatchTableOps(_) => EmitterKind::DispatchTableOps,
            Emitter::IcdDummyEntrypoints(_) => EmitterKind::IcdDummyEntrypoints,
            Emitter::IcdGetProcAddr(_) => EmitterKind::IcdGetProcAddr,
            Emitter::LayerInterceptProc(_) => EmitterKind::LayerInterceptProc,
            Emitter::WinDefFile(_) => EmitterKind::WinDefFile,
            Emitter::LoaderGetProcAddr(_) => EmitterKind::LoaderGetProcAddr,
        }
    }

    fn artifact(&self) -> &dyn Artifact {
        match self {
            Emitter::LoaderEntrypoints(a) => a,
            Emitter::DispatchTableOps(a) => a,
            Emitter::IcdDummyEntrypoints(a) => a,
            Emitter::IcdGetProcAddr(a) => a,
            Emitter::LayerInterceptProc(a) => a,
            Emitter::WinDefFile(a) => a,
            Emitter::LoaderGetProcAddr(a) => a,
        }
    }
}

/// Assemble banner, header, body and footer, separated by blank lines.
/// Empty sections are left out.
pub fn generate(emitter: &Emitter, api: &Api, config: &Config) -> Result<String, EmitError> {
    debug!(emitter = %emitter.kind(), protos = api.len(), "generating artifact");
    assemble(emitter.artifact(), api, config)
}

pub(crate) fn assemble(
    artifact: &dyn Artifact,
    api: &Api,
    config: &Config,
) -> Result<String, EmitError> {
    let banner = match &config.banner {
        Some(text) => text.clone(),
        None => artifact.banner().render(),
    };
    let sections = [
        Some(banner),
        artifact.header(api),
        Some(artifact.body(api)?),
        artifact.footer(api),
    ];

    let sections: Vec<String> = sections
        .into_iter()
        .flatten()
        .filter(|section| !section.is_empty())
        .collect();
    Ok(sections.join("\n\n"))
}
