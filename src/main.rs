use crate::catalog::Catalog;
use crate::cli::{Cli, Command, ImageTask};
use crate::config::{ImageConfig, ServerConfig};
use crate::images::{city_jobs, fix_job, hero_jobs, retouch_jobs, run_batch, UnsplashClient};
use crate::responses::html_error_response;
use crate::router::{handle, AppState};
use astra::Server;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod assets;
mod catalog;
mod cli;
mod config;
mod domain;
mod errors;
mod images;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nomad_cities=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(),
        Command::Images { task } => fetch_images(task),
    }
}

fn serve() -> ExitCode {
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid server configuration");
            return ExitCode::FAILURE;
        }
    };

    // The catalog is compiled in; refuse to serve a broken one.
    let catalog = Catalog::builtin();
    if let Err(e) = catalog.validate() {
        tracing::error!(error = %e, "city catalog failed validation");
        return ExitCode::FAILURE;
    }

    let app = AppState::new(catalog, &config.public_dir);

    tracing::info!(
        addr = %config.addr,
        workers = config.max_workers,
        cities = catalog.len(),
        public_dir = %config.public_dir.display(),
        "starting server"
    );

    let server = Server::bind(&config.addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => html_error_response(err),
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
        return ExitCode::FAILURE;
    }

    tracing::info!("server shut down cleanly");
    ExitCode::SUCCESS
}

fn fetch_images(task: ImageTask) -> ExitCode {
    let config = match ImageConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid image configuration");
            return ExitCode::FAILURE;
        }
    };

    let catalog = Catalog::builtin();
    let cities_dir = config.cities_dir();

    let jobs = match task {
        ImageTask::Cities { skip_existing } => Ok(city_jobs(&catalog, &cities_dir, !skip_existing)),
        ImageTask::Hero => Ok(hero_jobs(&config.public_dir)),
        ImageTask::Retouch => retouch_jobs(&catalog, &cities_dir),
        ImageTask::Fix { id, query, page } => {
            fix_job(&catalog, &id, query, page, &cities_dir).map(|job| vec![job])
        }
    };

    let result = jobs.and_then(|jobs| {
        let client = UnsplashClient::new(config.access_key)?;
        Ok(run_batch(&client, &jobs, config.delay))
    });

    match result {
        Ok(report) if report.is_success() => ExitCode::SUCCESS,
        Ok(report) => {
            for (label, error) in &report.failed {
                tracing::warn!(%label, %error, "not downloaded");
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!(error = %e, "image batch could not start");
            ExitCode::FAILURE
        }
    }
}
