//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("vkgen")
        .about("Generate Vulkan loader, layer and ICD glue code")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(gen_command())
        .subcommand(list_command())
        .subcommand(classify_command())
}

/// Generate one artifact.
pub fn gen_command() -> Command {
    Command::new("gen")
        .about("Generate an artifact from an API description")
        .override_usage(
            "\
  vkgen gen <EMITTER> [ARGS]... --api <FILE>
  vkgen gen <EMITTER> [ARGS]... --api <FILE> -o <FILE> [--banner <FILE>]",
        )
        .after_help(
            r#"EXAMPLES:
  vkgen gen loader-entrypoints --api vk.json                # loader trampolines
  vkgen gen dispatch-table-ops loader --api vk.json         # table ops with prefix
  vkgen gen icd-dummy-entrypoints nulldrv_ --api vk.json    # static stubs
  vkgen gen win-def-file vulkan-1.dll all --api vk.json     # module definition
  cat vk.json | vkgen gen loader-get-proc-addr --api -      # read stdin"#,
        )
        .arg(emitter_arg())
        .arg(emitter_args_arg())
        .arg(api_arg())
        .arg(output_file_arg())
        .arg(banner_arg())
        .arg(verbose_arg())
}

/// List emitters.
pub fn list_command() -> Command {
    Command::new("list")
        .about("List emitters with their arguments")
        .arg(color_arg())
}

/// Show per-prototype classification.
pub fn classify_command() -> Command {
    Command::new("classify")
        .about("Show how each prototype is classified")
        .after_help(
            r#"EXAMPLES:
  vkgen classify --api vk.json
  vkgen classify --api vk.json --color never -v"#,
        )
        .arg(api_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}
