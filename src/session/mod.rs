use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::Result;

mod model;

pub use model::{ADMIN_ROLE, Role, SessionData, UserData};

/// Signed-in state shared by every request.
///
/// File-backed sessions are rewritten on every change; in-memory sessions
/// vanish with the process.
#[derive(Debug)]
pub struct Session {
    path: Option<PathBuf>,
    state: RwLock<SessionData>,
}

impl Session {
    pub fn in_memory() -> Self {
        Self {
            path: None,
            state: RwLock::new(SessionData::default()),
        }
    }

    /// Loads the session stored at `path`. A missing or unreadable file gives
    /// an empty session.
    pub async fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let data = match tokio::fs::read_to_string(&path).await {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
                tracing::warn!("Ignoring unreadable session file {}: {}", path.display(), e);
                SessionData::default()
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => SessionData::default(),
            Err(e) => {
                tracing::warn!("Failed to read session file {}: {}", path.display(), e);
                SessionData::default()
            }
        };

        Self {
            path: Some(path),
            state: RwLock::new(data),
        }
    }

    pub async fn access_token(&self) -> Option<String> {
        self.state.read().await.access_token.clone()
    }

    pub async fn set_access_token(&self, token: impl Into<String>) -> Result<()> {
        let mut state = self.state.write().await;
        state.access_token = Some(token.into());
        self.persist(&mut state).await
    }

    pub async fn user_data(&self) -> Option<UserData> {
        self.state.read().await.user_data.clone()
    }

    pub async fn set_user_data(&self, user: UserData) -> Result<()> {
        let mut state = self.state.write().await;
        state.user_data = Some(user);
        self.persist(&mut state).await
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.access_token.is_some()
    }

    pub async fn snapshot(&self) -> SessionData {
        self.state.read().await.clone()
    }

    /// Forgets the token and user, and removes the backing file.
    pub async fn clear(&self) -> Result<()> {
        let mut state = self.state.write().await;
        *state = SessionData::default();
        if let Some(path) = &self.path {
            match tokio::fs::remove_file(path).await {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    async fn persist(&self, state: &mut SessionData) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        state.saved_at = Some(Utc::now());
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir).await?;
        }
        let json = serde_json::to_string_pretty(state)?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}
