use clap::{Arg, ArgAction, Command};

fn sample_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .value_name("VALUE")
        .help(help)
        .required(true)
        .allow_hyphen_values(true)
}

fn capacity_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(sample_arg("used", "Used bytes (plain count or size such as 8GiB)"))
        .arg(sample_arg("total", "Total bytes (plain count or size such as 16GiB)"))
        .arg(sample_arg("free", "Free bytes (plain count or size such as 8GiB)"))
}

/// Build the command-line definition
pub fn build_cli() -> Command {
    Command::new("metricconv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert resource usage samples into display units using registry formulas")
        .arg(
            Arg::new("registry")
                .short('r')
                .long("registry")
                .value_name("FILE")
                .help("Metrics registry JSON file (overrides config and $METRICCONV_REGISTRY)")
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print results as JSON")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("eval")
                .about("Evaluate a formula with #VALUE and #TOTAL_VALUE substituted")
                .arg(
                    Arg::new("formula")
                        .help("Formula, e.g. \"(#VALUE / #TOTAL_VALUE) * 100\"")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("value")
                        .long("value")
                        .value_name("VALUE")
                        .help("Value substituted for #VALUE")
                        .value_parser(clap::value_parser!(f64))
                        .allow_hyphen_values(true)
                        .required(true),
                )
                .arg(
                    Arg::new("total")
                        .long("total")
                        .value_name("TOTAL")
                        .help("Value substituted for #TOTAL_VALUE")
                        .value_parser(clap::value_parser!(f64))
                        .allow_hyphen_values(true)
                        .default_value("0"),
                ),
        )
        .subcommand(
            Command::new("cpu")
                .about("Convert used vs total cores to a percentage")
                .arg(sample_arg("used", "Used cores"))
                .arg(sample_arg("total", "Total cores")),
        )
        .subcommand(capacity_command("memory", "Convert memory used/total/free bytes"))
        .subcommand(capacity_command("disk", "Convert disk used/total/free bytes"))
        .subcommand(
            capacity_command("capacity", "Convert used/total/free bytes for any metric kind").arg(
                Arg::new("kind")
                    .short('k')
                    .long("kind")
                    .value_name("KIND")
                    .help("Metric kind as named in the registry")
                    .required(true),
            ),
        )
        .subcommand(
            Command::new("registry")
                .about("Inspect and manage the metrics registry (use 'metricconv registry --help' for subcommands)")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(Command::new("list").about("List metric definitions in lookup order"))
                .subcommand(Command::new("check").about("Evaluate every formula at a few sample points"))
                .subcommand(
                    Command::new("init")
                        .about("Write the built-in registry to the config directory")
                        .arg(
                            Arg::new("force")
                                .short('f')
                                .long("force")
                                .help("Overwrite an existing registry file")
                                .action(ArgAction::SetTrue),
                        ),
                ),
        )
        .subcommand(
            Command::new("set")
                .about("Set configuration values (use 'metricconv set --help' for subcommands)")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("registry")
                        .about("Set the default registry file")
                        .arg(
                            Arg::new("path")
                                .help("Path to the registry JSON file")
                                .required(true)
                                .index(1),
                        ),
                ),
        )
        .subcommand(
            Command::new("get")
                .about("Get configuration values (use 'metricconv get --help' for subcommands)")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(Command::new("registry").about("Show the active registry source")),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Shell: bash, zsh, fish, powershell, elvish")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("version").about("Shows version information"))
}
