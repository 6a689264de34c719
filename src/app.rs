//! Top-level orchestration: environment, classification, subject, body, output.

use crate::{
    cli::Cli,
    config::Config,
    core::{AlertType, NotificationContext},
    environment,
    formatting::{render_message, HandlebarsEngine},
    outputs::Email,
    subject::default_subject,
};
use std::io::Write;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that stop a notification from being emitted.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("no recipient address: pass --address or set {0}")]
    MissingRecipient(String),
    #[error("failed to write message: {0}")]
    Io(#[from] std::io::Error),
}

/// Resolves the recipient from the flag, then the contact variable.
///
/// Empty values count as unset.
fn recipient(cli: &Cli, config: &Config, vars: &[(String, String)]) -> Option<String> {
    cli.address
        .iter()
        .chain(
            vars.iter()
                .filter(|(name, _)| *name == config.contact_variable)
                .map(|(_, value)| value),
        )
        .find(|addr| !addr.is_empty())
        .cloned()
}

/// Builds the email for the given process environment.
pub fn build_email(cli: &Cli, config: &Config, vars: &[(String, String)]) -> Result<Email, AppError> {
    let to = recipient(cli, config, vars)
        .ok_or_else(|| AppError::MissingRecipient(config.contact_variable.clone()))?;

    let env = environment::snapshot(
        vars.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        &config.env_prefix,
    );
    let kind = AlertType::classify(&env);
    debug!(%kind, keys = env.len(), "Classified notification");

    let subject = match &cli.subject {
        Some(subject) => subject.clone(),
        None => default_subject(kind, &env),
    };

    let ctx = NotificationContext::new(cli.args.clone(), env);
    let body = render_message(
        &HandlebarsEngine::new(),
        config.template_dir.as_deref(),
        &config.template_extension,
        kind,
        &ctx,
    );

    Ok(Email { to, subject, body })
}

/// Formats the notification and writes it to `out`.
pub fn run<W: Write>(
    cli: &Cli,
    config: &Config,
    vars: &[(String, String)],
    out: &mut W,
) -> Result<(), AppError> {
    let email = build_email(cli, config, vars)?;
    info!(to = %email.to, subject = %email.subject, "Emitting notification");
    email.write_to(out)?;
    Ok(())
}
