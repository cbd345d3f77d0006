use clap::Parser;
use gatewarden::cli::{check, decide, list, show, submit, Cli, CheckCommand, Commands};
use gatewarden::config::Config;
use tracing::error;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match Config::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    config.init_logging();

    let result = match cli.command {
        Commands::Submit(args) => submit::execute(&config, args).await,
        Commands::Decide(args) => decide::execute(&config, args).await,
        Commands::List => list::execute(&config).await,
        Commands::Show(args) => show::execute(&config, args).await,
        Commands::Check(command) => match command {
            CheckCommand::Config => check::execute_config(&config),
            CheckCommand::Identity(args) => check::execute_identity(&config, args).await,
            CheckCommand::Console => check::execute_console(&config).await,
            CheckCommand::Store => check::execute_store(&config).await,
        },
    };

    if let Err(e) = result {
        error!(error = %e, "Command failed");
        gatewarden::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
