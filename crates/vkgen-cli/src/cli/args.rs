//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Emitter identifier (positional).
pub fn emitter_arg() -> Arg {
    Arg::new("emitter")
        .value_name("EMITTER")
        .required(true)
        .help("Artifact to generate (see `vkgen list`)")
}

/// Emitter configuration (trailing positionals).
pub fn emitter_args_arg() -> Arg {
    Arg::new("emitter_args")
        .value_name("ARGS")
        .num_args(0..)
        .help("Positional configuration passed to the emitter")
}

/// API description (--api), `-` for stdin.
pub fn api_arg() -> Arg {
    Arg::new("api")
        .long("api")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("JSON API description, or - for stdin")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Banner replacement (--banner).
pub fn banner_arg() -> Arg {
    Arg::new("banner")
        .long("banner")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Use the file's contents instead of the generated-file notice")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for debug, -vv for trace; RUST_LOG overrides)")
}
