//! Message body rendering.
//!
//! The body always starts as the inline JSON dump of the notification context.
//! It is replaced by the per-type template from the configured template
//! directory when that exists and renders cleanly, otherwise by the builtin
//! template compiled into the binary. Failures are logged and the best body
//! rendered so far is sent.

use crate::core::{AlertType, NotificationContext};
use handlebars::{handlebars_helper, Handlebars};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error, warn};

/// Inline body used when no per-type template is usable.
pub const FALLBACK_TEMPLATE: &str = "<html><body><pre>{{json this}}</pre></body></html>";

/// Errors from loading or rendering a template.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to read template {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to render template: {0}")]
    Template(String),
}

/// A trait for text-templating engines that can render a notification.
pub trait TemplateEngine {
    fn render(&self, template: &str, ctx: &NotificationContext) -> Result<String, RenderError>;
}

handlebars_helper!(json_pretty: |value: Json| {
    serde_json::to_string_pretty(value).unwrap_or_default()
});

/// Handlebars engine with a `json` helper registered.
///
/// Strict mode stays off so missing macros render as empty text.
pub struct HandlebarsEngine<'reg> {
    registry: Handlebars<'reg>,
}

impl<'reg> HandlebarsEngine<'reg> {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.register_helper("json", Box::new(json_pretty));
        Self { registry }
    }
}

impl Default for HandlebarsEngine<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for HandlebarsEngine<'_> {
    fn render(&self, template: &str, ctx: &NotificationContext) -> Result<String, RenderError> {
        self.registry
            .render_template(template, ctx)
            .map_err(|e| RenderError::Template(e.to_string()))
    }
}

/// The file consulted for a given alert type.
pub fn template_path(dir: &Path, kind: AlertType, extension: &str) -> PathBuf {
    dir.join(format!("{}.{}", kind, extension))
}

fn render_file<E: TemplateEngine + ?Sized>(
    engine: &E,
    path: &Path,
    ctx: &NotificationContext,
) -> Result<String, RenderError> {
    let template = std::fs::read_to_string(path).map_err(|source| RenderError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    engine.render(&template, ctx)
}

/// The template compiled into the binary for a given alert type.
pub fn builtin_template(kind: AlertType) -> &'static str {
    match kind {
        AlertType::Host => include_str!("../templates/host.html.hbs"),
        AlertType::Service => include_str!("../templates/service.html.hbs"),
        AlertType::Acknowledgement => include_str!("../templates/acknowledgement.html.hbs"),
    }
}

/// Renders the custom template when a directory is configured, else the builtin one.
fn render_typed<E: TemplateEngine + ?Sized>(
    engine: &E,
    template_dir: Option<&Path>,
    extension: &str,
    kind: AlertType,
    ctx: &NotificationContext,
) -> Result<String, RenderError> {
    if let Some(dir) = template_dir {
        let path = template_path(dir, kind, extension);
        match render_file(engine, &path, ctx) {
            Ok(body) => {
                debug!(path = %path.display(), "Rendered {} template", kind);
                return Ok(body);
            }
            Err(e) => warn!(error = %e, "Custom {} template unusable, trying builtin", kind),
        }
    }
    engine.render(builtin_template(kind), ctx)
}

/// Renders the message body. Never fails and never returns an unset body.
///
/// If even the inline template fails, the body is that error's message.
pub fn render_message<E: TemplateEngine + ?Sized>(
    engine: &E,
    template_dir: Option<&Path>,
    extension: &str,
    kind: AlertType,
    ctx: &NotificationContext,
) -> String {
    let mut message = match engine.render(FALLBACK_TEMPLATE, ctx) {
        Ok(body) => body,
        Err(e) => {
            error!(error = %e, "Inline fallback template failed");
            e.to_string()
        }
    };

    match render_typed(engine, template_dir, extension, kind, ctx) {
        Ok(body) => message = body,
        Err(e) => warn!(error = %e, "Using fallback body for {} notification", kind),
    }

    message
}
