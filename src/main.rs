use anyhow::Result;

use metricconv::commands::{self, build_cli, GlobalOptions};
use metricconv::core::registry::kind;

fn main() {
    if let Err(e) = run() {
        metricconv::ui::error(&format!("Error: {:#}", e));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let matches = build_cli().get_matches();
    let options = GlobalOptions::from_matches(&matches);

    metricconv::init_logging(options.verbose);

    match matches.subcommand() {
        Some(("eval", sub_matches)) => commands::eval::execute(sub_matches, &options),
        Some(("cpu", sub_matches)) => commands::convert::execute_cpu(sub_matches, &options),
        Some(("memory", sub_matches)) => {
            commands::convert::execute_capacity(sub_matches, &options, kind::MEMORY)
        }
        Some(("disk", sub_matches)) => {
            commands::convert::execute_capacity(sub_matches, &options, kind::DISK)
        }
        Some(("capacity", sub_matches)) => commands::convert::execute_any(sub_matches, &options),
        Some(("registry", sub_matches)) => commands::registry::execute(sub_matches, &options),
        Some(("set", sub_matches)) => commands::config::handle_set(sub_matches),
        Some(("get", sub_matches)) => commands::config::handle_get(sub_matches, &options),
        Some(("completions", sub_matches)) => {
            let mut cli = build_cli();
            commands::completions::execute(sub_matches, &mut cli)
        }
        Some(("version", _)) => commands::version(),
        _ => {
            println!("Welcome to metricconv!");
            println!("Use 'metricconv --help' for more information.");
            Ok(())
        }
    }
}
