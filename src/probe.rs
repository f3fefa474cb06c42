use std::{io::Write, time::Duration};

use reqwest::{header::CONTENT_TYPE, Client};

use crate::{config::Config, render, Failure};

const CLASS_PARAM: &str = "class";

pub fn client(config: &Config) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

/// Send one error check request and render what comes back.
pub async fn run<W: Write>(client: &Client, config: &Config, out: &mut W) -> Result<(), Failure> {
    debug!(url = %config.url, class = %config.class, "Sending error check request");
    let response = client
        .get(config.url.clone())
        .query(&[(CLASS_PARAM, config.class.as_str())])
        .send()
        .await?;
    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    let body = response.text().await?;
    info!(status, content_type = %content_type, "Got error check response");
    render::response(out, status, &content_type, &body)
}

/// Like [`run`], but failures are reported to `out` instead of returned.
pub async fn check<W: Write>(config: &Config, out: &mut W) {
    let result = match client(config) {
        Ok(client) => run(&client, config, out).await,
        Err(e) => Err(e.into()),
    };
    if let Err(failure) = result {
        error!(error = ?failure, "Error check failed");
        if let Err(e) = writeln!(out, "{failure}") {
            error!(error = ?e, "Could not report failure");
        }
    }
}
