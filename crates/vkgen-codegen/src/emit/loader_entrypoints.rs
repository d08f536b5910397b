//! Loader trampolines for functions dispatched through their first handle.

use tracing::trace;
use vkgen_core::{Api, Proto};

use super::EmitError;
use super::emitter::Artifact;
use crate::classify::{self, Classifier, InfoQuery, ObjectSetup};

const SUCCESS: &str = "res == VK_SUCCESS";

/// `loader-entrypoints`: takes no arguments.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoaderEntrypoints;

impl Artifact for LoaderEntrypoints {
    fn header(&self, _api: &Api) -> Option<String> {
        Some("#include \"loader.h\"".to_string())
    }

    fn body(&self, api: &Api) -> Result<String, EmitError> {
        let classifier = Classifier::for_api(api);
        let funcs: Vec<String> = api
            .protos()
            .filter(|proto| {
                let special = classifier.is_loader_special_case(proto);
                if special {
                    trace!(proto = proto.name(), "loader special case, no trampoline");
                }
                !special
            })
            .filter_map(|proto| trampoline(&classifier, proto))
            .collect();
        Ok(funcs.join("\n\n"))
    }
}

fn trampoline(classifier: &Classifier<'_>, proto: &Proto) -> Option<String> {
    let first = proto.first_param()?;
    let setup = object_setup(classifier, proto);
    let returns_void = proto.returns_void();

    let mut func = vec![
        format!("LOADER_EXPORT {}", proto.c_func("vk", "VKAPI")),
        "{".to_string(),
        "    const VkLayerDispatchTable *disp;".to_string(),
    ];
    if !returns_void && setup.is_some() {
        func.push("    VkResult res;".to_string());
    }
    func.push(String::new());
    func.push(format!("    disp = loader_get_dispatch({});", first.name()));
    func.push(String::new());

    let dispatch = format!("disp->{};", proto.c_call());
    match setup {
        _ if returns_void => func.push(format!("    {dispatch}")),
        None => func.push(format!("    return {dispatch}")),
        Some(setup) => {
            func.push(format!("    res = {dispatch}"));
            func.push(setup);
            func.push(String::new());
            func.push("    return res;".to_string());
        }
    }
    func.push("}".to_string());

    Some(func.join("\n"))
}

/// Post-call registration block for the handles `proto` hands back, or
/// `None` when there is nothing to register.
fn object_setup(classifier: &Classifier<'_>, proto: &Proto) -> Option<String> {
    let method = if classify::returns_existing_objects(proto) {
        "loader_set_dispatch"
    } else {
        "loader_init_dispatch"
    };

    let (cond, stmts) = match classifier.object_setup(proto) {
        ObjectSetup::Skip => return None,
        ObjectSetup::OutParams => {
            let stmts: Vec<String> = proto
                .object_out_params(classifier.handles())
                .map(|param| format!("{method}(*{}, disp);", param.name()))
                .collect();
            (SUCCESS.to_string(), stmts)
        }
        ObjectSetup::CountedArray => counted_array(proto, method)?,
        ObjectSetup::InfoBuffer(query) => info_buffer(proto, method, &query)?,
    };

    if stmts.is_empty() {
        return None;
    }

    Some(format!(
        "    if ({cond}) {{\n        {}\n    }}",
        stmts.join("\n        ")
    ))
}

/// `(..., handles*, count*)`: register `*count` elements.
fn counted_array(proto: &Proto, method: &str) -> Option<(String, Vec<String>)> {
    let sets = proto.param_from_end(2)?.name();
    let count = proto.param_from_end(1)?.name();
    let stmts = vec![
        "uint32_t i;".to_string(),
        format!("for (i = 0; i < *{count}; i++)"),
        format!("    {method}({sets}[i], disp);"),
    ];
    Some((SUCCESS.to_string(), stmts))
}

/// `(..., type, size*, data*)`: when `type` selects `query.element`, register
/// the handle members of every struct in the buffer.
fn info_buffer(proto: &Proto, method: &str, query: &InfoQuery) -> Option<(String, Vec<String>)> {
    let ty = proto.param_from_end(3)?.name();
    let size = proto.param_from_end(2)?.name();
    let data = proto.param_from_end(1)?.name();

    let cond = format!("{ty} == {} && {data} && {SUCCESS}", query.discriminant);
    let mut stmts = vec![
        format!("{} *info = {data};", query.element),
        format!("size_t count = *{size} / sizeof(*info), i;"),
        "for (i = 0; i < count; i++) {".to_string(),
    ];
    stmts.extend(
        query
            .fields
            .iter()
            .map(|field| format!("    {method}(info[i].{field}, disp);")),
    );
    stmts.push("}".to_string());
    Some((cond, stmts))
}
