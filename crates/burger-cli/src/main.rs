use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use burger::{ApiUrl, SessionBuilder};
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;

mod config;
mod credential_storage;
mod sub_commands;

use crate::config::Settings;
use crate::credential_storage::FileCredentialStore;

const DEFAULT_WORK_DIR: &str = ".burger-cli";

/// Order burgers from the command line
#[derive(Parser)]
#[command(name = "burger-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to working dir
    #[arg(short, long)]
    work_dir: Option<PathBuf>,
    /// Config file, defaults to `config.toml` in the working dir
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Logging level, overrides `log.level`
    #[arg(short, long)]
    log_level: Option<Level>,
    /// API url, overrides `api.url`
    #[arg(short, long)]
    api_url: Option<ApiUrl>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the ingredient catalog
    Ingredients(sub_commands::ingredients::IngredientsSubCommand),
    /// Assemble a burger, price it and optionally order it
    Assemble(sub_commands::assemble::AssembleSubCommand),
    /// Show the public order feed
    Feed(sub_commands::feed::FeedSubCommand),
    /// Look up an order by number
    Order(sub_commands::order::OrderSubCommand),
    /// Order history of the logged in user
    Orders,
    /// Create an account
    Register(sub_commands::register::RegisterSubCommand),
    /// Log in
    Login(sub_commands::login::LoginSubCommand),
    /// Log out
    Logout,
    /// Show or update the profile
    Profile(sub_commands::profile::ProfileSubCommand),
    /// Request a password reset code
    ForgotPassword(sub_commands::forgot_password::ForgotPasswordSubCommand),
    /// Set a new password with the reset code
    ResetPassword(sub_commands::reset_password::ResetPasswordSubCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Cli = Cli::parse();

    let work_dir = match &args.work_dir {
        Some(work_dir) => work_dir.clone(),
        None => {
            let home_dir = home::home_dir().ok_or(anyhow!("Unknown home dir"))?;
            home_dir.join(DEFAULT_WORK_DIR)
        }
    };

    fs::create_dir_all(&work_dir)?;

    let loaded = Settings::load(&work_dir, args.config.as_deref());

    let log_level = match (&args.log_level, &loaded) {
        (Some(level), _) => level.to_string(),
        (None, Ok(settings)) => settings.log.level.clone(),
        (None, Err(_)) => Settings::default().log.level,
    };
    let env_filter = EnvFilter::new(format!("{log_level},hyper=warn,reqwest=warn"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let settings = loaded.unwrap_or_else(|e| {
        tracing::error!("Error reading config file, falling back to defaults. Error: {e:?}");
        Settings::default()
    });

    let api_url = args.api_url.clone().unwrap_or(settings.api.url);
    tracing::debug!("Using api {}", api_url);

    let credentials = Arc::new(FileCredentialStore::new(&work_dir, api_url.clone()));
    let session = SessionBuilder::new()
        .api_url(api_url)
        .credentials(credentials)
        .build()?;

    match &args.command {
        Commands::Ingredients(sub_command_args) => {
            sub_commands::ingredients::ingredients(&session, sub_command_args).await
        }
        Commands::Assemble(sub_command_args) => {
            sub_commands::assemble::assemble(&session, sub_command_args).await
        }
        Commands::Feed(sub_command_args) => {
            sub_commands::feed::feed(&session, sub_command_args).await
        }
        Commands::Order(sub_command_args) => {
            sub_commands::order::order(&session, sub_command_args).await
        }
        Commands::Orders => sub_commands::orders::orders(&session).await,
        Commands::Register(sub_command_args) => {
            sub_commands::register::register(&session, sub_command_args).await
        }
        Commands::Login(sub_command_args) => {
            sub_commands::login::login(&session, sub_command_args).await
        }
        Commands::Logout => sub_commands::logout::logout(&session).await,
        Commands::Profile(sub_command_args) => {
            sub_commands::profile::profile(&session, sub_command_args).await
        }
        Commands::ForgotPassword(sub_command_args) => {
            sub_commands::forgot_password::forgot_password(&session, sub_command_args).await
        }
        Commands::ResetPassword(sub_command_args) => {
            sub_commands::reset_password::reset_password(&session, sub_command_args).await
        }
    }
}
