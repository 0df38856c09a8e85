// consensus-client/src/token.rs
// 凭证存储 - 会话 token 的内存 + JSON 文件存储

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Name of the persisted credential entry
pub const TOKEN_FILE_NAME: &str = "access_token.json";

/// Holds the current session credential.
///
/// At most one credential is live per client. Implementations never fail:
/// storage problems are logged and the in-memory value stays authoritative.
pub trait TokenStore: Send + Sync {
    /// Current credential, if any
    fn get(&self) -> Option<String>;

    /// Replace (`Some`) or remove (`None`) the credential. Idempotent.
    fn set(&self, token: Option<&str>);

    fn clear(&self) {
        self.set(None);
    }
}

/// In-memory token store (tests, ephemeral sessions)
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set(&self, token: Option<&str>) {
        *self
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = token.map(str::to_owned);
    }
}

/// On-disk shape of the credential entry
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredToken {
    access_token: String,
}

/// Persistent token store
///
/// The credential lives at `{dir}/access_token.json`; a missing file means
/// logged-out. The file is read once, at construction.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    token: RwLock<Option<String>>,
}

impl FileTokenStore {
    /// Open the store under `dir`, loading any saved token
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        let path = dir.into().join(TOKEN_FILE_NAME);
        let token = load(&path);
        if token.is_some() {
            tracing::debug!(path = %path.display(), "Restored session token");
        }
        Self {
            path,
            token: RwLock::new(token),
        }
    }

    /// Location of the credential file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a credential file is on disk
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn persist(&self, token: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&StoredToken {
            access_token: token.to_string(),
        })?;
        fs::write(&self.path, json)
    }

    fn remove(&self) -> std::io::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

fn load(path: &Path) -> Option<String> {
    if !path.exists() {
        return None;
    }
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!(path = %path.display(), "Failed to read session token: {}", e);
            return None;
        }
    };
    match serde_json::from_str::<StoredToken>(&json) {
        Ok(stored) => Some(stored.access_token),
        Err(e) => {
            tracing::warn!(path = %path.display(), "Ignoring corrupt session token: {}", e);
            None
        }
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set(&self, token: Option<&str>) {
        *self
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = token.map(str::to_owned);

        let result = match token {
            Some(token) => self.persist(token),
            None => self.remove(),
        };
        if let Err(e) = result {
            tracing::warn!(path = %self.path.display(), "Failed to update session token: {}", e);
        }
    }
}
