use std::str::FromStr;

use crate::emit::{EmitterKind, ExportProfile};
use crate::test_utils::{
    api, create_instance, destroy_instance, emit, emit_sections, get_proc_addr, queue_wait_idle,
};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|a| a.to_string()).collect()
}

#[test]
fn icd_profile_exports_allow_list_in_order() {
    let api = api([get_proc_addr(), destroy_instance()]);
    let out = emit(EmitterKind::WinDefFile, &["VKstatic.0.dll", "icd"], &api);
    insta::assert_snapshot!(out, @r#"
    ; THIS FILE IS GENERATED.  DO NOT EDIT.

    ; Vulkan
    ;
    ; Generated by vkgen from the API description.
    ; Edit the description or the generator instead of this file.

    ; The following is required on Windows, for exporting symbols from the DLL

    LIBRARY VKstatic.0.dll
    EXPORTS
       vkEnumeratePhysicalDevices
       vkCreateInstance
       vkDestroyInstance
       vkGetProcAddr
    "#);
}

#[test]
fn all_profile_follows_input_order() {
    let api = api([create_instance(), queue_wait_idle()]);
    let out = emit_sections(EmitterKind::WinDefFile, &["vulkan", "all"], &api);
    insta::assert_snapshot!(out, @r#"
    ; The following is required on Windows, for exporting symbols from the DLL

    LIBRARY vulkan
    EXPORTS
       vkCreateInstance
       vkQueueWaitIdle
    "#);
}

#[test]
fn layer_profile_ignores_input() {
    let out = emit_sections(EmitterKind::WinDefFile, &["VKLayer", "layer"], &api(Vec::new()));
    assert!(out.ends_with(indoc::indoc! {"
        LIBRARY VKLayer
        EXPORTS
           vkGetProcAddr
           vkEnumerateLayers
           vkGetGlobalExtensionInfo"
    }));
}

#[test]
fn profile_names() {
    for profile in ExportProfile::ALL {
        assert_eq!(ExportProfile::from_str(profile.name()), Ok(profile));
    }
    assert_eq!(ExportProfile::from_str("driver"), Err(()));
    assert_eq!(ExportProfile::All.allow_list(), None);
}

#[test]
fn bad_configuration_is_a_usage_error() {
    for bad in [args(&[]), args(&["vulkan"]), args(&["vulkan", "driver"]), args(&["a", "all", "b"])] {
        let err = EmitterKind::WinDefFile.configure(&bad).unwrap_err();
        assert!(err.is_usage());
        assert_eq!(
            err.to_string(),
            "win-def-file: <library-name> {all|icd|layer}"
        );
    }
}
