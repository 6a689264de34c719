//! Core domain types for alertmail
//!
//! This module defines the alert classification and the context record that
//! is handed whole to the templates.

use crate::environment::{non_empty, EnvSnapshot};
use serde::Serialize;
use std::fmt;

/// Snapshot key present only for service notifications.
pub const SERVICE_ATTEMPT_KEY: &str = "SERVICEATTEMPT";
/// Snapshot key set when a contact acknowledged the problem.
pub const NOTIFICATION_AUTHOR_KEY: &str = "NOTIFICATIONAUTHOR";

/// The kind of notification being formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Host,
    Service,
    Acknowledgement,
}

impl AlertType {
    /// Classifies a notification from its environment snapshot.
    ///
    /// No service attempt means a host notification; otherwise an author marks
    /// an acknowledgement. Empty values count as missing.
    pub fn classify(env: &EnvSnapshot) -> Self {
        if non_empty(env, SERVICE_ATTEMPT_KEY).is_none() {
            AlertType::Host
        } else if non_empty(env, NOTIFICATION_AUTHOR_KEY).is_some() {
            AlertType::Acknowledgement
        } else {
            AlertType::Service
        }
    }

    /// The lowercase name, also used as the template file stem.
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::Host => "host",
            AlertType::Service => "service",
            AlertType::Acknowledgement => "acknowledgement",
        }
    }
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static metadata about this program.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageInfo {
    pub name: &'static str,
    pub version: &'static str,
}

impl PackageInfo {
    /// The running build.
    pub const fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Everything a template can see.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationContext {
    /// Positional command-line arguments, in order.
    pub args: Vec<String>,
    /// The prefix-stripped environment snapshot.
    pub env: EnvSnapshot,
    pub package: PackageInfo,
}

impl NotificationContext {
    pub fn new(args: Vec<String>, env: EnvSnapshot) -> Self {
        Self {
            args,
            env,
            package: PackageInfo::current(),
        }
    }
}
