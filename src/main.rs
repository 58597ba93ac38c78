//! Reddit Gallery - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use reddit_gallery::{
    api::RedditApi,
    cli::{Args, Viewer},
    config::{validate_config, Config},
    error::{exit_codes, Error, Result},
    output::{print_banner, print_error, print_info, print_success, print_warning},
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Remote { .. } | Error::Http(_) | Error::Parse(_) | Error::EmptyResult(_) => {
                    ExitCode::from(exit_codes::REMOTE_ERROR as u8)
                }
                Error::NoMediaFound | Error::Archive(_) | Error::Zip(_) => {
                    ExitCode::from(exit_codes::EXPORT_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    // Load configuration
    let mut config = match Config::resolve_path(&args.config) {
        Some(path) => {
            tracing::debug!("Loading configuration from {}", path.display());
            Config::load(&path)?
        }
        None => {
            tracing::debug!(
                "No configuration file at {}, using defaults",
                args.config.display()
            );
            Config::default()
        }
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    if args.save_config {
        config.save(&args.config)?;
        print_success(&format!("Configuration written to {}", args.config.display()));
        return Ok(());
    }

    let api = RedditApi::new(&config.client)?;
    let mut viewer = Viewer::new(&api, &config);

    if args.interactive {
        return viewer.run_interactive(args.user.as_deref()).await;
    }

    let user = args.user.as_deref().ok_or_else(|| Error::ConfigValidation {
        field: "user".to_string(),
        message: "A username is required (or pass --interactive)".to_string(),
    })?;

    viewer.run_once(user).await?;

    if args.export {
        viewer.export(true).await?;
    } else if !viewer.gallery().posts().is_empty() {
        print_info("Pass --export to save all fetched media to a ZIP archive");
    }

    if viewer.pipeline().cards().is_empty() && !viewer.gallery().posts().is_empty() {
        print_warning("No cards match the active filters");
    }

    Ok(())
}
