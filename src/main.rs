use crate::app::App;
use crate::config::AppConfig;
use crate::router::handle;
use astra::Server;
use tracing_subscriber::EnvFilter;

mod api;
mod app;
mod config;
mod directory;
mod domain;
mod errors;
mod media;
mod responses;
mod router;
mod routes;
mod session;
mod submission;
mod templates;

#[cfg(test)]
mod tests;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    init_tracing();

    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let app = match App::from_config(&cfg) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "could not build HTTP clients");
            std::process::exit(1);
        }
    };

    tracing::info!(
        addr = %cfg.bind_addr,
        projects = app.directory.all().len(),
        complaints_url = %cfg.complaints_url,
        "starting server at http://{}",
        cfg.bind_addr
    );

    let server = Server::bind(&cfg.bind_addr).max_workers(cfg.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => {
            tracing::debug!(error = %err, "request failed");
            templates::html_error_response(err)
        }
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("server shut down cleanly");
}
