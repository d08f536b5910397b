use vkgen_core::Proto;

use crate::emit::EmitterKind;
use crate::test_utils::{
    alloc_descriptor_sets, api, cmd_draw, create_device, create_instance, destroy_instance,
    emit_sections, get_device_queue, get_global_count, get_physical_device_info,
    get_swap_chain_info, queue_wait_idle, reset_fences,
};

fn entrypoints(protos: impl IntoIterator<Item = Proto>) -> String {
    emit_sections(EmitterKind::LoaderEntrypoints, &[], &api(protos))
}

#[test]
fn special_cases_and_parameterless_functions_are_skipped() {
    let out = entrypoints([
        get_global_count(),
        destroy_instance(),
        create_instance(),
        queue_wait_idle(),
        cmd_draw(),
    ]);
    insta::assert_snapshot!(out, @r#"
    #include "loader.h"

    LOADER_EXPORT VkResult VKAPI vkQueueWaitIdle(VkQueue queue)
    {
        const VkLayerDispatchTable *disp;

        disp = loader_get_dispatch(queue);

        return disp->QueueWaitIdle(queue);
    }

    LOADER_EXPORT void VKAPI vkCmdDraw(VkCmdBuffer cmdBuffer, uint32_t firstVertex, uint32_t vertexCount)
    {
        const VkLayerDispatchTable *disp;

        disp = loader_get_dispatch(cmdBuffer);

        disp->CmdDraw(cmdBuffer, firstVertex, vertexCount);
    }
    "#);
}

#[test]
fn out_params_register_new_objects() {
    let out = entrypoints([create_device(), get_device_queue(), reset_fences()]);
    insta::assert_snapshot!(out, @r#"
    #include "loader.h"

    LOADER_EXPORT VkResult VKAPI vkCreateDevice(VkPhysicalDevice gpu, const VkDeviceCreateInfo* pCreateInfo, VkDevice* pDevice)
    {
        const VkLayerDispatchTable *disp;
        VkResult res;

        disp = loader_get_dispatch(gpu);

        res = disp->CreateDevice(gpu, pCreateInfo, pDevice);
        if (res == VK_SUCCESS) {
            loader_init_dispatch(*pDevice, disp);
        }

        return res;
    }

    LOADER_EXPORT VkResult VKAPI vkGetDeviceQueue(VkDevice device, uint32_t queueNodeIndex, uint32_t queueIndex, VkQueue* pQueue)
    {
        const VkLayerDispatchTable *disp;
        VkResult res;

        disp = loader_get_dispatch(device);

        res = disp->GetDeviceQueue(device, queueNodeIndex, queueIndex, pQueue);
        if (res == VK_SUCCESS) {
            loader_set_dispatch(*pQueue, disp);
        }

        return res;
    }

    LOADER_EXPORT VkResult VKAPI vkResetFences(VkDevice device, uint32_t fenceCount, VkFence* pFences)
    {
        const VkLayerDispatchTable *disp;

        disp = loader_get_dispatch(device);

        return disp->ResetFences(device, fenceCount, pFences);
    }
    "#);
}

#[test]
fn counted_arrays_and_info_buffers() {
    let out = entrypoints([alloc_descriptor_sets(), get_swap_chain_info()]);
    insta::assert_snapshot!(out, @r#"
    #include "loader.h"

    LOADER_EXPORT VkResult VKAPI vkAllocDescriptorSets(VkDevice device, VkDescriptorPool descriptorPool, uint32_t count, const VkDescriptorSetLayout* pSetLayouts, VkDescriptorSet* pDescriptorSets, uint32_t* pCount)
    {
        const VkLayerDispatchTable *disp;
        VkResult res;

        disp = loader_get_dispatch(device);

        res = disp->AllocDescriptorSets(device, descriptorPool, count, pSetLayouts, pDescriptorSets, pCount);
        if (res == VK_SUCCESS) {
            uint32_t i;
            for (i = 0; i < *pCount; i++)
                loader_init_dispatch(pDescriptorSets[i], disp);
        }

        return res;
    }

    LOADER_EXPORT VkResult VKAPI vkGetSwapChainInfoWSI(VkSwapChainWSI swapChain, VkSwapChainInfoTypeWSI infoType, size_t* pDataSize, void* pData)
    {
        const VkLayerDispatchTable *disp;
        VkResult res;

        disp = loader_get_dispatch(swapChain);

        res = disp->GetSwapChainInfoWSI(swapChain, infoType, pDataSize, pData);
        if (infoType == VK_SWAP_CHAIN_INFO_TYPE_PERSISTENT_IMAGES_WSI && pData && res == VK_SUCCESS) {
            VkSwapChainImageInfoWSI *info = pData;
            size_t count = *pDataSize / sizeof(*info), i;
            for (i = 0; i < count; i++) {
                loader_set_dispatch(info[i].image, disp);
                loader_set_dispatch(info[i].memory, disp);
            }
        }

        return res;
    }
    "#);
}

#[test]
fn physical_device_info_registers_displays() {
    let out = entrypoints([get_physical_device_info()]);
    assert!(out.contains(
        "    if (infoType == VK_PHYSICAL_DEVICE_INFO_TYPE_DISPLAY_PROPERTIES_WSI && pData && res == VK_SUCCESS) {"
    ));
    assert!(out.contains("            loader_set_dispatch(info[i].display, disp);"));
}

#[test]
fn short_info_query_has_no_setup() {
    let proto = Proto::new("VkResult", "GetSwapChainInfoWSI").param("VkSwapChainWSI", "swapChain");
    let out = entrypoints([proto]);
    assert!(out.contains("    return disp->GetSwapChainInfoWSI(swapChain);"));
    assert!(!out.contains("VkResult res;"));
}

#[test]
fn empty_description_has_header_only() {
    let out = entrypoints(Vec::new());
    assert_eq!(out, "#include \"loader.h\"");
}
