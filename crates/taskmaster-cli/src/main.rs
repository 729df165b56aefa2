mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;

fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TASKMASTER_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        // stdout carries the JSON responses
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            "taskmaster",
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    if let Commands::Settings(settings_cmd) = &cli.command {
        if let Err(e) = handlers::settings::confirm(&settings_cmd.action) {
            output::output_error(&e.to_string());
        }
    }

    let mut ctx = CliContext::open(cli.data_dir);

    let result = match cli.command {
        Commands::Task(task_cmd) => handlers::task::handle(&mut ctx, task_cmd.action),
        Commands::Category(category_cmd) => {
            handlers::category::handle(&mut ctx, category_cmd.action)
        }
        Commands::Settings(settings_cmd) => {
            handlers::settings::handle(&mut ctx, settings_cmd.action)
        }
        Commands::Dashboard(args) => handlers::dashboard::handle(&ctx, args),
        Commands::Completions { .. } => Ok(()),
    };

    if let Err(e) = result {
        tracing::debug!("Command failed: {:#}", e);
        output::output_error(&e.to_string());
    }

    Ok(())
}
