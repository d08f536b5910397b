use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use vkgen_codegen::{Config, EmitterKind, generate};
use vkgen_core::Api;

use super::api_loader::load_api_text;

pub struct GenArgs {
    pub emitter: String,
    pub emitter_args: Vec<String>,
    pub api: PathBuf,
    pub output: Option<PathBuf>,
    pub banner: Option<PathBuf>,
}

pub fn run(args: GenArgs) {
    let Some(kind) = EmitterKind::from_name(&args.emitter) else {
        eprintln!("error: unknown emitter '{}'", args.emitter);
        eprintln!();
        eprintln!("Available emitters:");
        for kind in EmitterKind::ALL {
            eprintln!("  {}", kind.name());
        }
        std::process::exit(1);
    };

    let api_text = load_api_text(&args.api).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    let mut config = Config::new();
    if let Some(ref path) = args.banner {
        let banner = fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("error: failed to read banner '{}': {}", path.display(), e);
            std::process::exit(1);
        });
        config = config.banner(banner);
    }

    let output = render(kind, &args.emitter_args, &api_text, &config).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        if matches!(&e, vkgen_codegen::Error::Emit(err) if err.is_usage()) {
            eprintln!();
            eprintln!("usage: vkgen gen {} {} --api <FILE>", kind, kind.synopsis());
        }
        std::process::exit(1);
    });

    if let Some(ref path) = args.output {
        fs::write(path, format!("{output}\n")).unwrap_or_else(|e| {
            eprintln!("error: failed to write {}: {}", path.display(), e);
            std::process::exit(1);
        });
    } else {
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{output}") {
            eprintln!("error: failed to write output: {}", e);
            std::process::exit(1);
        }
    }
}

/// Configure the emitter before parsing the description, so usage errors
/// win over description errors.
pub fn render(
    kind: EmitterKind,
    emitter_args: &[String],
    api_text: &str,
    config: &Config,
) -> vkgen_codegen::Result<String> {
    let emitter = kind.configure(emitter_args)?;
    let api = Api::from_json(api_text)?;
    Ok(generate(&emitter, &api, config)?)
}
