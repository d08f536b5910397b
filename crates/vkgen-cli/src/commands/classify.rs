use std::path::PathBuf;

use tracing::debug;
use vkgen_codegen::Classifier;
use vkgen_core::{Api, Colors};

use super::api_loader::load_api_text;

pub struct ClassifyArgs {
    pub api: PathBuf,
    pub color: bool,
}

pub fn run(args: ClassifyArgs) {
    let text = load_api_text(&args.api).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });
    let api = Api::from_json(&text).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });
    print!("{}", render(&api, Colors::new(args.color)));
}

/// One line per prototype, in input order: name, then the dispatchable,
/// creates-object and loader-special-case flags.
pub fn render(api: &Api, c: Colors) -> String {
    let classifier = Classifier::for_api(api);
    let width = api.protos().map(|p| p.name().len()).max().unwrap_or(0);

    let mut out = String::new();
    for proto in api.protos() {
        let class = classifier.classify(proto);
        debug!(proto = proto.name(), ?class, "classified");
        out.push_str(&format!(
            "{}{:<width$}{}  {} {} {}\n",
            c.blue,
            proto.name(),
            c.reset,
            c.flag(class.dispatchable, "dispatchable"),
            c.flag(class.creates_object, "creates-object"),
            c.flag(class.loader_special_case, "loader-special"),
        ));
    }
    out
}
