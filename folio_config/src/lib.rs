use std::{net::IpAddr, path::Path, path::PathBuf};

use anyhow::Context;
use config::{File, FileFormat};
use folio_models::{email_address::EmailAddress, Sensitive};
use serde::Deserialize;

pub use duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Environment variables layered on top of the config file(s).
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("EMAIL_HOST", "email.host"),
    ("EMAIL_PORT", "email.port"),
    ("EMAIL_USER", "email.user"),
    ("EMAIL_PASS", "email.pass"),
    ("EMAIL_TO", "email.to"),
    ("ARCHIVE_PATH", "archive.path"),
];

/// Loads the config file named by the `FOLIO_CONFIG` environment variable
/// (falling back to [`DEFAULT_CONFIG_PATH`]) and applies the environment
/// overrides.
pub fn load() -> anyhow::Result<Config> {
    let path = std::env::var("FOLIO_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    load_paths(&[path])
}

pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    let builder = paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?;

    ENV_OVERRIDES
        .iter()
        .try_fold(builder, |builder, (var, key)| match std::env::var(var) {
            Ok(value) => anyhow::Ok(builder.set_override(*key, value)?),
            Err(_) => anyhow::Ok(builder),
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub email: EmailConfig,
    pub archive: ArchiveConfig,
    pub health: HealthConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    /// SMTP relay to submit mail through, with a STARTTLS upgrade.
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    /// Authenticated account, also used as the `From` address.
    pub user: EmailAddress,
    pub pass: Sensitive<String>,
    /// Recipient of contact-form mail. Defaults to `user`.
    #[serde(default)]
    pub to: Option<EmailAddress>,
    #[serde(default = "default_send_timeout")]
    pub timeout: Duration,
}

impl EmailConfig {
    pub fn recipient(&self) -> EmailAddress {
        self.to.clone().unwrap_or_else(|| self.user.clone())
    }
}

fn default_smtp_port() -> u16 {
    587
}

fn default_send_timeout() -> Duration {
    Duration::from_secs(10)
}

#[derive(Debug, Deserialize)]
pub struct ArchiveConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct HealthConfig {
    pub cache_ttl: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let config = load_paths(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();
        assert_eq!(config.email.timeout, Duration::from_secs(10));
    }

    #[test]
    fn environment_overrides_apply() {
        std::env::set_var("EMAIL_PORT", "2626");
        let config = load_paths(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();
        std::env::remove_var("EMAIL_PORT");
        assert_eq!(config.email.port, 2626);
    }

    #[test]
    fn smtp_port_defaults_to_587() {
        let config: EmailConfig = toml_email_config("");
        assert_eq!(config.port, 587);
    }

    #[test]
    fn recipient_defaults_to_user() {
        let config: EmailConfig = toml_email_config("");
        assert_eq!(config.recipient().as_str(), "folio@example.com");
    }

    #[test]
    fn recipient_override() {
        let config = toml_email_config("to = \"inbox@example.com\"\n");
        assert_eq!(config.recipient().as_str(), "inbox@example.com");
    }

    fn toml_email_config(extra: &str) -> EmailConfig {
        let toml = format!(
            "host = \"smtp.example.com\"\nuser = \"folio@example.com\"\npass = \"secret\"\n{extra}"
        );
        config::Config::builder()
            .add_source(File::from_str(&toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }
}
