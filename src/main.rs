#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
mod config;
mod probe;
mod render;
mod structures;

use crate::config::{Config, USAGE};

#[macro_use]
extern crate tracing;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    start_tracing();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = ?e, "Invalid configuration");
            println!("{e}");
            println!("{USAGE}");
            return;
        }
    };
    probe::check(&config, &mut std::io::stdout()).await;
}

pub const CONNECTION_MESSAGE: &str =
    "Could not connect to the server, make sure the JBCall service is running";

/// How a probe run went wrong. Either the service could not be reached at all,
/// or something else broke along the way.
#[derive(thiserror::Error, Debug)]
pub enum Failure {
    #[error("{}", CONNECTION_MESSAGE)]
    ConnectionFailed(#[source] reqwest::Error),
    #[error("Request failed: {0}")]
    Other(#[from] Cause),
}

#[derive(thiserror::Error, Debug)]
pub enum Cause {
    #[error("{0}")]
    Http(reqwest::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}

impl From<reqwest::Error> for Failure {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() {
            Self::ConnectionFailed(e)
        } else {
            Self::Other(Cause::Http(e))
        }
    }
}

impl From<serde_json::Error> for Failure {
    fn from(e: serde_json::Error) -> Self {
        Self::Other(e.into())
    }
}

impl From<std::io::Error> for Failure {
    fn from(e: std::io::Error) -> Self {
        Self::Other(e.into())
    }
}

// stdout belongs to the probe output, so logs go to stderr.
fn start_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(
            concat!(env!("CARGO_PKG_NAME"), "=info")
                .parse()
                .expect("default directive is valid"),
        )
        .with_env_var("LOG")
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}
