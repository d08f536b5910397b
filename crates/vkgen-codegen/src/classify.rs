//! Prototype classification.
//!
//! Every named-function exception used by the emitters lives here. The
//! predicates are pure and recomputed on each call; none of them indexes
//! into a parameter list without checking it first.

use vkgen_core::{Api, Handles, Proto};

/// The proc-address lookup entry point every resolver is modeled on.
pub const GET_PROC_ADDR: &str = "GetProcAddr";

/// Top-level object construction; bound dynamically by dispatch tables.
pub const CREATE_INSTANCE: &str = "CreateInstance";

/// Left out of the default layer intercept set.
pub const ENUMERATE_PHYSICAL_DEVICES: &str = "EnumeratePhysicalDevices";

/// Returns handles through its last parameter without creating them.
pub const RESET_FENCES: &str = "ResetFences";

/// Functions the loader implements by hand instead of through the generic
/// "dispatch on the first handle" trampoline.
pub const LOADER_SPECIAL_CASES: &[&str] = &[
    GET_PROC_ADDR,
    ENUMERATE_PHYSICAL_DEVICES,
    "EnumerateLayers",
    "DbgRegisterMsgCallback",
    "DbgUnregisterMsgCallback",
    "DbgSetGlobalOption",
    "DestroyInstance",
];

/// Multi-object functions whose trampolines need more than object setup.
pub const CUSTOM_TRAMPOLINES: &[&str] = &["AllocDescriptorSets", "GetMultiDeviceCompatibility"];

/// Functions returning an array of new handles sized by a trailing count
/// pointer: `(..., handles*, count*)`.
const COUNTED_ARRAYS: &[&str] = &["AllocDescriptorSets"];

/// Info queries that write structs embedding handles into a byte buffer:
/// `(..., type, size*, data*)`.
const INFO_QUERIES: &[(&str, InfoQuery)] = &[
    (
        "GetPhysicalDeviceInfo",
        InfoQuery {
            discriminant: "VK_PHYSICAL_DEVICE_INFO_TYPE_DISPLAY_PROPERTIES_WSI",
            element: "VkDisplayPropertiesWSI",
            fields: &["display"],
        },
    ),
    (
        "GetSwapChainInfoWSI",
        InfoQuery {
            discriminant: "VK_SWAP_CHAIN_INFO_TYPE_PERSISTENT_IMAGES_WSI",
            element: "VkSwapChainImageInfoWSI",
            fields: &["image", "memory"],
        },
    ),
];

/// Handle-bearing struct array returned by an info query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoQuery {
    /// Info type value for which the buffer holds `element`s.
    pub discriminant: &'static str,
    pub element: &'static str,
    /// Handle members of `element` to register.
    pub fields: &'static [&'static str],
}

/// How the loader registers handles a call hands back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectSetup {
    /// One registration per object output parameter.
    OutParams,
    /// Loop over `*count` elements of the second-to-last parameter.
    CountedArray,
    /// Loop over the structs of an info-query buffer.
    InfoBuffer(InfoQuery),
    /// Nothing to register.
    Skip,
}

/// The three per-prototype decisions, bundled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Classification {
    pub dispatchable: bool,
    pub creates_object: bool,
    pub loader_special_case: bool,
}

/// Classifies prototypes against a set of handle types.
#[derive(Clone, Copy, Debug)]
pub struct Classifier<'a> {
    handles: &'a Handles,
}

impl<'a> Classifier<'a> {
    pub fn new(handles: &'a Handles) -> Self {
        Self { handles }
    }

    pub fn for_api(api: &'a Api) -> Self {
        Self::new(api.handles())
    }

    pub fn handles(&self) -> &'a Handles {
        self.handles
    }

    /// Whether calls route through the dispatch table of the first argument.
    ///
    /// True iff the first handle-typed input has the same type as the first
    /// parameter.
    pub fn is_dispatchable_first_param(&self, proto: &Proto) -> bool {
        let Some(first) = proto.first_param() else {
            return false;
        };
        proto
            .object_in_params(self.handles)
            .next()
            .is_some_and(|obj| obj.ty() == first.ty())
    }

    /// Whether the last parameter returns a newly created handle.
    pub fn creates_object(&self, proto: &Proto) -> bool {
        if proto.name() == RESET_FENCES {
            return false;
        }
        let last_out = proto.object_out_params(self.handles).last();
        match (last_out, proto.last_param()) {
            (Some(out), Some(last)) => out.index() == last.index(),
            _ => false,
        }
    }

    /// Whether the loader must implement this function outside the
    /// generic dispatch path.
    pub fn is_loader_special_case(&self, proto: &Proto) -> bool {
        LOADER_SPECIAL_CASES.contains(&proto.name()) || !self.is_dispatchable_first_param(proto)
    }

    /// Whether the loader needs a hand-written or object-tracking
    /// trampoline, i.e. cannot pass the call straight through.
    pub fn needs_loader_trampoline(&self, proto: &Proto) -> bool {
        self.is_loader_special_case(proto)
            || self.creates_object(proto)
            || CUSTOM_TRAMPOLINES.contains(&proto.name())
    }

    pub fn classify(&self, proto: &Proto) -> Classification {
        Classification {
            dispatchable: self.is_dispatchable_first_param(proto),
            creates_object: self.creates_object(proto),
            loader_special_case: self.is_loader_special_case(proto),
        }
    }

    /// Handle registration the loader performs after a successful call.
    pub fn object_setup(&self, proto: &Proto) -> ObjectSetup {
        let name = proto.name();
        if COUNTED_ARRAYS.contains(&name) {
            return ObjectSetup::CountedArray;
        }
        if let Some((_, query)) = INFO_QUERIES.iter().find(|(n, _)| *n == name) {
            return ObjectSetup::InfoBuffer(*query);
        }
        if name == RESET_FENCES {
            return ObjectSetup::Skip;
        }
        ObjectSetup::OutParams
    }
}

/// Whether handles returned by `proto` already exist and only need their
/// dispatch pointer copied, rather than a fresh dispatch slot.
pub fn returns_existing_objects(proto: &Proto) -> bool {
    proto.name().contains("Get")
}
