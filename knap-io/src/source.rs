use crate::{error::Result, json::dejsonify};
use knap_engine::SolverConfig;
use log::debug;
use std::{fs, io::Read};

/// Reads a whole input: `-` for stdin, anything else is a file path.
pub fn read_source(source: &str) -> Result<String> {
    if source == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        debug!("reading {}", source);
        Ok(fs::read_to_string(source)?)
    }
}

/// Loads a solver config from a `.json` path or an inline JSON string.
pub fn load_config(config: &str) -> Result<SolverConfig> {
    let config = if config.ends_with(".json") {
        fs::read_to_string(config)?
    } else {
        config.to_string()
    };
    Ok(dejsonify::<SolverConfig>(&config)?)
}
