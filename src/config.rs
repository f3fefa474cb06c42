use std::time::Duration;

use reqwest::Url;

pub const DEFAULT_URL: &str = "http://localhost:8080/check-errors";
pub const DEFAULT_CLASS: &str = "TestErrorCheck";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const USAGE: &str = "usage: errprobe [CLASS]  (env: PROBE_URL, PROBE_TIMEOUT_SECS, LOG)";

#[derive(Debug, Clone)]
pub struct Config {
    pub url: Url,
    pub class: String,
    /// `None` waits for as long as the server takes.
    pub timeout: Option<Duration>,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid PROBE_URL: {0}")]
    InvalidUrl(String),
    #[error("Invalid PROBE_TIMEOUT_SECS `{0}`, expected a whole number of seconds")]
    InvalidTimeout(String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_parts(
            std::env::args().skip(1),
            std::env::var("PROBE_URL").ok(),
            std::env::var("PROBE_TIMEOUT_SECS").ok(),
        )
    }

    pub fn from_parts(
        args: impl IntoIterator<Item = String>,
        url: Option<String>,
        timeout: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut args = args.into_iter();
        let class = args.next().unwrap_or_else(|| DEFAULT_CLASS.to_owned());
        let ignored: Vec<String> = args.collect();
        if !ignored.is_empty() {
            warn!(?ignored, "Only the first argument is used as the class");
        }

        let url = url.as_deref().unwrap_or(DEFAULT_URL);
        let url = Url::parse(url).map_err(|e| ConfigError::InvalidUrl(format!("{e} for {url}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl(format!(
                "unsupported scheme `{}` in {url}",
                url.scheme()
            )));
        }

        let timeout = match timeout {
            None => Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(0) => None,
                Ok(secs) => Some(Duration::from_secs(secs)),
                Err(_) => return Err(ConfigError::InvalidTimeout(raw)),
            },
        };

        Ok(Self {
            url,
            class,
            timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn defaults() {
        let config = Config::from_parts(args(&[]), None, None).unwrap();
        assert_eq!(config.url.as_str(), DEFAULT_URL);
        assert_eq!(config.class, "TestErrorCheck");
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn overrides() {
        let config = Config::from_parts(
            args(&["com.example.Foo"]),
            Some("http://127.0.0.1:9000/check-errors".to_owned()),
            Some("5".to_owned()),
        )
        .unwrap();
        assert_eq!(config.class, "com.example.Foo");
        assert_eq!(config.url.port(), Some(9000));
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn zero_timeout_is_unbounded() {
        let config = Config::from_parts(args(&[]), None, Some("0".to_owned())).unwrap();
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn extra_arguments_are_ignored() {
        let config = Config::from_parts(args(&["A", "B", "--verbose"]), None, None).unwrap();
        assert_eq!(config.class, "A");
        assert_eq!(config.url.as_str(), DEFAULT_URL);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            Config::from_parts(args(&[]), Some("not a url".to_owned()), None),
            Err(ConfigError::InvalidUrl(_))
        ));
        assert!(matches!(
            Config::from_parts(args(&[]), Some("ftp://localhost/check-errors".to_owned()), None),
            Err(ConfigError::InvalidUrl(_))
        ));
        assert_eq!(
            Config::from_parts(args(&[]), None, Some("soon".to_owned())).unwrap_err(),
            ConfigError::InvalidTimeout("soon".to_owned())
        );
    }
}
