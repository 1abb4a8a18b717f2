pub mod commands;

use clap::{arg, Command};

pub fn cli() -> Command {
    Command::new("knap")
        .about("Solves 0-1 knapsack instances")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("solve")
                .about("Solves an instance, exactly when it is small enough")
                .arg(
                    arg!(<INSTANCE> "Path to an instance file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--strategy [STRATEGY] "Force a strategy instead of the automatic rule")
                        .value_parser(["auto", "exact", "greedy", "in-order"]),
                )
                .arg(
                    arg!(--threshold [N] "Largest item count solved exactly")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--"max-cells" [CELLS] "Largest exact table before falling back to greedy")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(--config [CONFIG] "Solver config json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(arg!(--json "Print the solution as json")),
        )
        .subcommand(
            Command::new("verify")
                .about("Checks a solution against an instance")
                .arg(
                    arg!(<INSTANCE> "Path to an instance file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<SOLUTION> "Path to a solution file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("generate")
                .about("Prints a seeded random instance")
                .arg(
                    arg!(<SEED> "A string used in seed generation")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<NUM_ITEMS> "Number of items")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--budget [PCT] "Capacity as a percentage of total weight")
                        .default_value("25")
                        .value_parser(clap::value_parser!(u32).range(0..=100)),
                ),
        )
}
