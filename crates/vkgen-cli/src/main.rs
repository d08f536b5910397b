mod cli;
mod commands;
mod logging;

use cli::{ClassifyParams, GenParams, ListParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("gen", m)) => {
            let params = GenParams::from_matches(m);
            logging::init(params.verbose);
            commands::generate::run(params.into());
        }
        Some(("list", m)) => {
            let params = ListParams::from_matches(m);
            commands::list::run(params.into());
        }
        Some(("classify", m)) => {
            let params = ClassifyParams::from_matches(m);
            logging::init(params.verbose);
            commands::classify::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
