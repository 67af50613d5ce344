use anyhow::Context;
use tracing_subscriber::EnvFilter;
use yami_design_tokens_core::{generate, Config};

fn main() -> anyhow::Result<()> {
    let dir = std::env::current_dir().context("Cannot determine the working directory")?;
    let config = Config::load(&dir)?;

    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid log_level {:?}", config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let generated = generate(&config)?;
    println!("Generated:");
    for name in generated.file_names() {
        println!("- {name}");
    }
    Ok(())
}
