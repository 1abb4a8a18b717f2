use anyhow::{anyhow, Result};
use knap_engine::{Dispatcher, ItemSet, SolverConfig, Strategy, Track};
use knap_io::{
    format_instance, format_solution, jsonify_pretty, load_config, parse_instance,
    parse_solution, read_source, seed_from_str,
};
use log::info;

#[derive(Debug, Clone, Default)]
pub struct SolveOptions {
    pub strategy: Option<String>,
    pub threshold: Option<usize>,
    pub max_cells: Option<u64>,
    pub config: Option<String>,
    pub json: bool,
}

fn parse_strategy(name: &str) -> Result<Strategy> {
    match name {
        "auto" => Ok(Strategy::Auto),
        "exact" => Ok(Strategy::Exact),
        "greedy" => Ok(Strategy::Greedy),
        "in-order" => Ok(Strategy::InOrder),
        _ => Err(anyhow!("Unknown strategy: {}", name)),
    }
}

/// Config file first, then individual flags on top.
pub fn solver_config(options: &SolveOptions) -> Result<SolverConfig> {
    let mut config = match &options.config {
        Some(config) => load_config(config)?,
        None => SolverConfig::default(),
    };
    if let Some(strategy) = &options.strategy {
        config.strategy = parse_strategy(strategy)?;
    }
    if let Some(threshold) = options.threshold {
        config.exact_item_threshold = threshold;
    }
    if let Some(max_cells) = options.max_cells {
        config.max_table_cells = Some(max_cells);
    }
    Ok(config)
}

pub fn solve_text(input: &str, options: &SolveOptions) -> Result<String> {
    let item_set = parse_instance(input)?;
    let config = solver_config(options)?;
    let solution = Dispatcher::new(config).solve(&item_set)?;
    if options.json {
        Ok(jsonify_pretty(&solution)?)
    } else {
        Ok(format_solution(&solution))
    }
}

pub fn solve_instance(instance: &str, options: &SolveOptions) -> Result<String> {
    solve_text(&read_source(instance)?, options)
}

pub fn verify_text(instance: &str, solution: &str) -> Result<String> {
    let item_set = parse_instance(instance)?;
    let solution = parse_solution(solution, &item_set)?;
    let total_value = item_set.verify_solution(&solution)?;
    Ok(format!(
        "Solution is valid: value {}, weight {}/{}",
        total_value,
        solution.total_weight,
        item_set.capacity()
    ))
}

pub fn verify_solution(instance: &str, solution: &str) -> Result<String> {
    if instance == "-" && solution == "-" {
        return Err(anyhow!("Only one of INSTANCE and SOLUTION can be read from stdin"));
    }
    verify_text(&read_source(instance)?, &read_source(solution)?)
}

pub fn generate_instance(seed: &str, num_items: usize, budget: u32) -> Result<String> {
    let track = Track { num_items, budget };
    let item_set = ItemSet::generate_instance(&seed_from_str(seed), &track)?;
    info!(
        "generated {} items with capacity {}",
        item_set.len(),
        item_set.capacity()
    );
    Ok(format_instance(&item_set))
}
