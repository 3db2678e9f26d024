use clap::Parser;
use codeguard_cli::errors::ErrorHandler;
use codeguard_cli::structs::cli::Cli;
use codeguard_cli::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new(cli.config);

    if let Err(error) = runner.run_command(cli.command).await {
        ErrorHandler::handle_error(&error);
        return Err(error.into());
    }

    Ok(())
}
