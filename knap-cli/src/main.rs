use anyhow::anyhow;
use knap_cli::{
    cli,
    commands::{generate_instance, solve_instance, verify_solution, SolveOptions},
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = cli().get_matches();

    let result = match matches.subcommand() {
        Some(("solve", sub_m)) => {
            let options = SolveOptions {
                strategy: sub_m.get_one::<String>("strategy").cloned(),
                threshold: sub_m.get_one::<usize>("threshold").cloned(),
                max_cells: sub_m.get_one::<u64>("max-cells").cloned(),
                config: sub_m.get_one::<String>("config").cloned(),
                json: sub_m.get_flag("json"),
            };
            solve_instance(&sub_m.get_one::<String>("INSTANCE").unwrap(), &options)
        }
        Some(("verify", sub_m)) => verify_solution(
            &sub_m.get_one::<String>("INSTANCE").unwrap(),
            &sub_m.get_one::<String>("SOLUTION").unwrap(),
        ),
        Some(("generate", sub_m)) => generate_instance(
            &sub_m.get_one::<String>("SEED").unwrap(),
            *sub_m.get_one::<usize>("NUM_ITEMS").unwrap(),
            *sub_m.get_one::<u32>("budget").unwrap(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    };

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
