//! Test utilities: API fixtures and snapshot helpers.

use vkgen_core::{Api, Handles, Proto};

use crate::emit::{Config, EmitterKind, generate};

pub const HANDLES: &[&str] = &[
    "VkInstance",
    "VkPhysicalDevice",
    "VkDevice",
    "VkQueue",
    "VkCmdBuffer",
    "VkFence",
    "VkDescriptorPool",
    "VkDescriptorSetLayout",
    "VkDescriptorSet",
    "VkSwapChainWSI",
    "VkImage",
    "VkDeviceMemory",
];

/// Build an API over the fixture handle types.
pub fn api(protos: impl IntoIterator<Item = Proto>) -> Api {
    let handles = Handles::from_iter(HANDLES.iter().copied());
    let mut api = Api::new(vec!["vulkan.h".to_string()], handles);
    for proto in protos {
        api.push(proto).expect("fixture prototype names are unique");
    }
    api
}

pub fn create_instance() -> Proto {
    Proto::new("VkResult", "CreateInstance")
        .param("const VkInstanceCreateInfo*", "pCreateInfo")
        .param("VkInstance*", "pInstance")
}

pub fn destroy_instance() -> Proto {
    Proto::new("VkResult", "DestroyInstance").param("VkInstance", "instance")
}

pub fn enumerate_physical_devices() -> Proto {
    Proto::new("VkResult", "EnumeratePhysicalDevices")
        .param("VkInstance", "instance")
        .param("uint32_t*", "pPhysicalDeviceCount")
        .param("VkPhysicalDevice*", "pPhysicalDevices")
}

pub fn get_physical_device_info() -> Proto {
    Proto::new("VkResult", "GetPhysicalDeviceInfo")
        .param("VkPhysicalDevice", "gpu")
        .param("VkPhysicalDeviceInfoType", "infoType")
        .param("size_t*", "pDataSize")
        .param("void*", "pData")
}

pub fn get_proc_addr() -> Proto {
    Proto::new("void*", "GetProcAddr")
        .param("VkPhysicalDevice", "gpu")
        .param("const char*", "pName")
}

pub fn create_device() -> Proto {
    Proto::new("VkResult", "CreateDevice")
        .param("VkPhysicalDevice", "gpu")
        .param("const VkDeviceCreateInfo*", "pCreateInfo")
        .param("VkDevice*", "pDevice")
}

pub fn get_device_queue() -> Proto {
    Proto::new("VkResult", "GetDeviceQueue")
        .param("VkDevice", "device")
        .param("uint32_t", "queueNodeIndex")
        .param("uint32_t", "queueIndex")
        .param("VkQueue*", "pQueue")
}

pub fn queue_wait_idle() -> Proto {
    Proto::new("VkResult", "QueueWaitIdle").param("VkQueue", "queue")
}

pub fn reset_fences() -> Proto {
    Proto::new("VkResult", "ResetFences")
        .param("VkDevice", "device")
        .param("uint32_t", "fenceCount")
        .param("VkFence*", "pFences")
}

pub fn alloc_descriptor_sets() -> Proto {
    Proto::new("VkResult", "AllocDescriptorSets")
        .param("VkDevice", "device")
        .param("VkDescriptorPool", "descriptorPool")
        .param("uint32_t", "count")
        .param("const VkDescriptorSetLayout*", "pSetLayouts")
        .param("VkDescriptorSet*", "pDescriptorSets")
        .param("uint32_t*", "pCount")
}

pub fn cmd_draw() -> Proto {
    Proto::new("void", "CmdDraw")
        .param("VkCmdBuffer", "cmdBuffer")
        .param("uint32_t", "firstVertex")
        .param("uint32_t", "vertexCount")
}

pub fn get_swap_chain_info() -> Proto {
    Proto::new("VkResult", "GetSwapChainInfoWSI")
        .param("VkSwapChainWSI", "swapChain")
        .param("VkSwapChainInfoTypeWSI", "infoType")
        .param("size_t*", "pDataSize")
        .param("void*", "pData")
}

/// A function without parameters.
pub fn get_global_count() -> Proto {
    Proto::new("uint32_t", "GetGlobalCount")
}

/// Every fixture prototype, in a fixed order.
pub fn sample_api() -> Api {
    api([
        create_instance(),
        destroy_instance(),
        enumerate_physical_devices(),
        get_physical_device_info(),
        get_proc_addr(),
        create_device(),
        get_device_queue(),
        queue_wait_idle(),
        reset_fences(),
        alloc_descriptor_sets(),
        cmd_draw(),
        get_swap_chain_info(),
        get_global_count(),
    ])
}

/// Generate the body-bearing artifact for `kind`, with the default banner.
pub fn emit(kind: EmitterKind, args: &[&str], api: &Api) -> String {
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    let emitter = kind.configure(&args).expect("valid emitter arguments");
    generate(&emitter, api, &Config::new()).expect("generation succeeds")
}

/// Generate with an empty banner so snapshots show header and body only.
pub fn emit_sections(kind: EmitterKind, args: &[&str], api: &Api) -> String {
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    let emitter = kind.configure(&args).expect("valid emitter arguments");
    generate(&emitter, api, &Config::new().banner("")).expect("generation succeeds")
}
