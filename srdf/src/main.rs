use std::env;
use std::path::Path;
use std::process::ExitCode;

use srdf::data::config::SimulationConfig;
use srdf::sim::simulation::run;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let Some(config_path) = args.get(1) else {
        eprintln!("usage: {} <config.json>", args.first().map(String::as_str).unwrap_or("srdf"));
        return ExitCode::FAILURE;
    };

    let result = SimulationConfig::from_path(Path::new(config_path)).and_then(|config| run(&config));

    match result.and_then(|result| Ok(serde_json::to_string_pretty(&result)?)) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
