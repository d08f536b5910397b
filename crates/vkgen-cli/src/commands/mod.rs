pub mod api_loader;
pub mod classify;
pub mod generate;
pub mod list;

#[cfg(test)]
mod generate_tests;

#[cfg(test)]
pub(crate) const SAMPLE_API: &str = r#"{
    "headers": ["vulkan.h"],
    "objects": ["VkInstance", "VkPhysicalDevice", "VkDevice", "VkQueue", "VkFence"],
    "protos": [
        { "name": "CreateInstance", "ret": "VkResult",
          "params": [ { "ty": "const VkInstanceCreateInfo*", "name": "pCreateInfo" },
                      { "ty": "VkInstance*", "name": "pInstance" } ] },
        { "name": "GetProcAddr", "ret": "void*",
          "params": [ { "ty": "VkPhysicalDevice", "name": "gpu" },
                      { "ty": "const char*", "name": "pName" } ] },
        { "name": "CreateDevice", "ret": "VkResult",
          "params": [ { "ty": "VkPhysicalDevice", "name": "gpu" },
                      { "ty": "const VkDeviceCreateInfo*", "name": "pCreateInfo" },
                      { "ty": "VkDevice*", "name": "pDevice" } ] },
        { "name": "GetDeviceQueue", "ret": "VkResult",
          "params": [ { "ty": "VkDevice", "name": "device" },
                      { "ty": "uint32_t", "name": "queueNodeIndex" },
                      { "ty": "uint32_t", "name": "queueIndex" },
                      { "ty": "VkQueue*", "name": "pQueue" } ] },
        { "name": "QueueWaitIdle", "ret": "VkResult",
          "params": [ { "ty": "VkQueue", "name": "queue" } ] },
        { "name": "ResetFences", "ret": "VkResult",
          "params": [ { "ty": "VkDevice", "name": "device" },
                      { "ty": "uint32_t", "name": "fenceCount" },
                      { "ty": "VkFence*", "name": "pFences" } ] }
    ]
}"#;
