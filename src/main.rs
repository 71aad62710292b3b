use anyhow::{Context, Result};
use planpage::Config;
use std::process::ExitCode;

fn run(config: &Config) -> Result<()> {
    config.validate().context("Invalid configuration")?;

    let written = planpage::generate_plan(config)?;
    for path in &written {
        println!("Wrote: {}", path.display());
    }

    if config.open
        && let Some(primary) = written.first()
    {
        open::that(primary)
            .with_context(|| format!("Failed to open {} in browser", primary.display()))?;
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::parse();
    log::debug!("Configuration: {:?}", config);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
