use anyhow::Context;
use folio_config::EmailConfig;
use folio_email_impl::EmailServiceImpl;

/// Build the SMTP transport for the configured relay
pub fn connect(config: &EmailConfig) -> anyhow::Result<EmailServiceImpl> {
    EmailServiceImpl::new(
        &config.host,
        config.port,
        config.user.clone(),
        config.pass.0.clone(),
        config.timeout.into(),
    )
    .context("Failed to configure smtp transport")
}
