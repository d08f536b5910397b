//! Windows module-definition (`.def`) export lists.

use std::str::FromStr;

use vkgen_core::Api;

use super::emitter::Artifact;
use super::lookup::VENDOR_PREFIX;
use super::{Banner, EmitError, EmitterKind};

const EXPORT_NOTE: &str =
    "; The following is required on Windows, for exporting symbols from the DLL";

/// Which functions a library exports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportProfile {
    /// Every prototype, in input order.
    All,
    /// Driver entry points the loader looks up directly.
    Icd,
    /// Layer entry points the loader looks up directly.
    Layer,
}

impl ExportProfile {
    pub const ALL: [ExportProfile; 3] = [
        ExportProfile::All,
        ExportProfile::Icd,
        ExportProfile::Layer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ExportProfile::All => "all",
            ExportProfile::Icd => "icd",
            ExportProfile::Layer => "layer",
        }
    }

    /// Fixed allow-list, or `None` when every prototype is exported.
    pub fn allow_list(self) -> Option<&'static [&'static str]> {
        match self {
            ExportProfile::All => None,
            ExportProfile::Icd => Some(&[
                "EnumeratePhysicalDevices",
                "CreateInstance",
                "DestroyInstance",
                "GetProcAddr",
            ]),
            ExportProfile::Layer => Some(&[
                "GetProcAddr",
                "EnumerateLayers",
                "GetGlobalExtensionInfo",
            ]),
        }
    }
}

impl FromStr for ExportProfile {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|p| p.name() == s).ok_or(())
    }
}

/// `win-def-file <library-name> {all|icd|layer}`
#[derive(Clone, Debug)]
pub struct WinDefFile {
    library: String,
    profile: ExportProfile,
}

impl WinDefFile {
    pub fn new(library: impl Into<String>, profile: ExportProfile) -> Self {
        Self {
            library: library.into(),
            profile,
        }
    }

    pub(crate) fn from_args(args: &[String]) -> Result<Self, EmitError> {
        if let [library, profile] = args {
            if let Ok(profile) = profile.parse() {
                return Ok(Self::new(library.clone(), profile));
            }
        }

        let profiles: Vec<&str> = ExportProfile::ALL.iter().map(|p| p.name()).collect();
        Err(EmitError::usage(
            EmitterKind::WinDefFile,
            format!("<library-name> {{{}}}", profiles.join("|")),
        ))
    }

    fn exports<'a>(&self, api: &'a Api) -> Vec<&'a str> {
        match self.profile.allow_list() {
            Some(names) => names.to_vec(),
            None => api.protos().map(|proto| proto.name()).collect(),
        }
    }
}

impl Artifact for WinDefFile {
    fn banner(&self) -> Banner {
        Banner::Semicolon
    }

    fn header(&self, _api: &Api) -> Option<String> {
        Some(EXPORT_NOTE.to_string())
    }

    fn body(&self, api: &Api) -> Result<String, EmitError> {
        let mut body = vec![format!("LIBRARY {}", self.library), "EXPORTS".to_string()];
        body.extend(
            self.exports(api)
                .into_iter()
                .map(|name| format!("   {VENDOR_PREFIX}{name}")),
        );
        Ok(body.join("\n"))
    }
}
