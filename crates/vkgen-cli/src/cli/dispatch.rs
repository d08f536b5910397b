//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::classify::ClassifyArgs;
use crate::commands::generate::GenArgs;
use crate::commands::list::ListArgs;

pub struct GenParams {
    pub emitter: String,
    pub emitter_args: Vec<String>,
    pub api: PathBuf,
    pub output: Option<PathBuf>,
    pub banner: Option<PathBuf>,
    pub verbose: u8,
}

impl GenParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            emitter: m.get_one::<String>("emitter").cloned().unwrap_or_default(),
            emitter_args: m
                .get_many::<String>("emitter_args")
                .map(|vals| vals.cloned().collect())
                .unwrap_or_default(),
            api: m.get_one::<PathBuf>("api").cloned().unwrap_or_default(),
            output: m.get_one::<PathBuf>("output").cloned(),
            banner: m.get_one::<PathBuf>("banner").cloned(),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<GenParams> for GenArgs {
    fn from(p: GenParams) -> Self {
        Self {
            emitter: p.emitter,
            emitter_args: p.emitter_args,
            api: p.api,
            output: p.output,
            banner: p.banner,
        }
    }
}

pub struct ListParams {
    pub color: ColorChoice,
}

impl ListParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            color: parse_color(m),
        }
    }
}

impl From<ListParams> for ListArgs {
    fn from(p: ListParams) -> Self {
        Self {
            color: p.color.should_colorize(),
        }
    }
}

pub struct ClassifyParams {
    pub api: PathBuf,
    pub color: ColorChoice,
    pub verbose: u8,
}

impl ClassifyParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            api: m.get_one::<PathBuf>("api").cloned().unwrap_or_default(),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<ClassifyParams> for ClassifyArgs {
    fn from(p: ClassifyParams) -> Self {
        Self {
            api: p.api,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
