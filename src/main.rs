use std::process::ExitCode;

use exprgen::evolution::{EvolutionLauncher, EvolutionOptions};
use exprgen::Result;
use tracing::error;
use tracing_subscriber::EnvFilter;

const TARGET: f64 = 100.0;

fn run() -> Result<()> {
    let options = EvolutionOptions::default();
    let mut rng = options.make_rng();

    let result = EvolutionLauncher::for_target(TARGET).evolve(&options, &mut rng)?;
    let evaluation = result.expression.evaluate()?;

    println!("expression: {}", result.expression);
    println!("evaluation: {}", evaluation);
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
