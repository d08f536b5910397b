use vkgen_codegen::{Config, EmitError, EmitterKind, Error};
use vkgen_core::ApiError;

use super::SAMPLE_API;
use super::generate::render;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|a| a.to_string()).collect()
}

#[test]
fn renders_selected_artifact() {
    let out = render(
        EmitterKind::WinDefFile,
        &args(&["vulkan-1.dll", "all"]),
        SAMPLE_API,
        &Config::new().banner(""),
    )
    .unwrap();
    insta::assert_snapshot!(out, @r"
    ; The following is required on Windows, for exporting symbols from the DLL

    LIBRARY vulkan-1.dll
    EXPORTS
       vkCreateInstance
       vkGetProcAddr
       vkCreateDevice
       vkGetDeviceQueue
       vkQueueWaitIdle
       vkResetFences
    ");
}

#[test]
fn usage_error_wins_over_bad_description() {
    let err = render(EmitterKind::DispatchTableOps, &[], "not json", &Config::new()).unwrap_err();
    assert!(matches!(err, Error::Emit(ref e) if e.is_usage()));
    assert_eq!(err.to_string(), "dispatch-table-ops: <prefix> unspecified");
}

#[test]
fn malformed_description_is_reported() {
    let err = render(EmitterKind::LoaderEntrypoints, &[], "{", &Config::new()).unwrap_err();
    assert!(matches!(err, Error::Api(ApiError::Json(_))));
    assert!(err.to_string().starts_with("invalid API description: "));
}

#[test]
fn duplicate_prototypes_are_rejected() {
    let json = r#"{ "protos": [ { "name": "CmdDraw", "ret": "void" },
                                { "name": "CmdDraw", "ret": "void" } ] }"#;
    let err = render(EmitterKind::LoaderEntrypoints, &[], json, &Config::new()).unwrap_err();
    assert_eq!(err.to_string(), "duplicate prototype 'CmdDraw'");
}

#[test]
fn resolvers_need_get_proc_addr() {
    let json = r#"{ "protos": [ { "name": "CmdDraw", "ret": "void" } ] }"#;
    let err = render(EmitterKind::LoaderGetProcAddr, &[], json, &Config::new()).unwrap_err();
    assert!(matches!(
        err,
        Error::Emit(EmitError::MissingPrototype("GetProcAddr"))
    ));
}

#[test]
fn custom_banner_leads_the_artifact() {
    let out = render(
        EmitterKind::LayerInterceptProc,
        &[],
        SAMPLE_API,
        &Config::new().banner("/* layer */\n"),
    )
    .unwrap();
    assert!(out.starts_with("/* layer */\n\n#include <string.h>\n#include \"vkLayer.h\"\n\n"));
}
