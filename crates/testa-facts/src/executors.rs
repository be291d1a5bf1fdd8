//! Appointed executors of the estate.

use serde::{Deserialize, Serialize};

use crate::contact::ContactInfo;

/// The role an executor plays relative to the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutorKind {
    /// First in line to administer the estate.
    Primary,
    /// Steps in if the primary cannot serve.
    Alternate,
    /// Serves jointly with the primary.
    CoExecutor,
}

/// A person appointed to administer the estate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Executor {
    pub kind: ExecutorKind,
    pub name: String,
    pub relationship: String,
    #[serde(default)]
    pub contact: ContactInfo,
    /// Set for professional executors (attorneys, trust companies).
    #[serde(default)]
    pub is_professional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
}

impl Executor {
    /// The email on file, if any.
    pub fn email(&self) -> Option<&str> {
        self.contact.email.as_deref()
    }
}
