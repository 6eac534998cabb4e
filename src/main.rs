use clap::Parser;
use skillsort::config::toml_config::TomlConfig;
use skillsort::utils::{logger, validation::Validate};
use skillsort::{CliConfig, LocalStorage, Shell};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let toml = match &cli.config {
        Some(path) => Some(TomlConfig::from_file(path)?),
        None => None,
    };
    let settings = cli.resolve(toml.as_ref());

    logger::init_cli_logger(settings.verbose);

    tracing::info!("Starting skillsort");
    if settings.verbose {
        tracing::debug!("Settings: {:?}", settings);
    }

    if let Err(e) = settings.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(".".to_string());
    let mut shell = Shell::new(storage, settings);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    shell.run(stdin.lock(), stdout.lock())?;

    Ok(())
}
