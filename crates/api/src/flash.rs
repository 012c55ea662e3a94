//! One-shot notices shown on the next rendered page.
//!
//! Notices are queued in the visitor's session under a single key and
//! removed when a page renders them. Admin handlers queue a notice before
//! redirecting (success) or before re-rendering a form (recoverable error).

use std::fmt;

use serde::{Deserialize, Serialize};
use tailbook_core::error::CoreError;
use tailbook_core::validation::invalid_selection_message;
use tower_sessions::Session;

const FLASH_KEY: &str = "flash.notices";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Error,
    Info,
    Success,
}

impl fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NoticeLevel::Error => "error",
            NoticeLevel::Info => "info",
            NoticeLevel::Success => "success",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    /// Translate a domain error into the notice shown on the admin form.
    ///
    /// Duplicates are informational; validation failures and unresolved
    /// parent references are errors.
    pub fn from_core_error(err: &CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => Self::error(msg.clone()),
            CoreError::Duplicate(msg) => Self::info(msg.clone()),
            CoreError::NotFound { entity, .. } => Self::error(invalid_selection_message(entity)),
        }
    }
}

/// Queue a notice for the next rendered page.
pub async fn push(session: &Session, notice: Notice) -> Result<(), tower_sessions::session::Error> {
    let mut pending: Vec<Notice> = session.get(FLASH_KEY).await?.unwrap_or_default();
    pending.push(notice);
    session.insert(FLASH_KEY, pending).await
}

/// Remove and return every queued notice, oldest first.
pub async fn take(session: &Session) -> Result<Vec<Notice>, tower_sessions::session::Error> {
    Ok(session
        .remove::<Vec<Notice>>(FLASH_KEY)
        .await?
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::MemoryStore;

    use super::*;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn take_drains_in_order() {
        let session = session();
        push(&session, Notice::success("first")).await.unwrap();
        push(&session, Notice::info("second")).await.unwrap();

        let notices = take(&session).await.unwrap();
        assert_eq!(
            notices,
            vec![Notice::success("first"), Notice::info("second")]
        );
        assert!(take(&session).await.unwrap().is_empty());
    }

    #[test]
    fn core_errors_map_to_levels() {
        let dup = Notice::from_core_error(&CoreError::Duplicate("Airline \"KLM\" already exists.".into()));
        assert_eq!(dup.level, NoticeLevel::Info);

        let missing = Notice::from_core_error(&CoreError::NotFound {
            entity: "airline",
            id: 9999,
        });
        assert_eq!(missing, Notice::error("Selected airline is invalid."));
    }

    #[test]
    fn level_displays_as_css_class() {
        assert_eq!(NoticeLevel::Success.to_string(), "success");
    }
}
