// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use clap::Parser;
use cli::{Cli, Commands};

mod cli;
mod commands;
mod console;
mod logging;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = run().await {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> Result<()> {
    let dotenv = dotenvy::dotenv();
    logging::init()?;
    if let Err(e) = dotenv
        && !e.not_found()
    {
        log::warn!("failed to load .env: {e}");
    }

    let args = Cli::parse();
    if let Commands::Version = args.command {
        println!(
            "{} {} (core {})",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            kconnect_core::version()
        );
        return Ok(());
    }

    let mut app = commands::App::new(&args)?;
    match args.command {
        Commands::Login { email, password } => {
            let route = app.login(&email, &password).await?;
            log::debug!("navigate to {route}");
        }
        Commands::Logout => {
            let route = app.logout();
            log::debug!("navigate to {route}");
        }
        Commands::Whoami => app.whoami()?,
        Commands::Dashboard => app.dashboard().await?,
        Commands::Departments { command } => app.departments(command).await?,
        Commands::Employees { command } => app.employees(command).await?,
        Commands::Reports { command } => app.reports(command).await?,
        Commands::Version => {}
    }

    Ok(())
}
