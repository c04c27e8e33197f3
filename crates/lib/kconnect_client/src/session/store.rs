//! Credential persistence.
//!
//! The credential lives in a cookie named `token` so it survives restarts.
//! [`CookieJar`] keeps cookies in a small file, one `Set-Cookie` style line
//! each.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use cookie::{Cookie, SameSite};

use crate::error::ClientResult;

/// Cookie name for the credential.
pub const TOKEN_COOKIE: &str = "token";

/// Where the session keeps its credential between runs.
pub trait CredentialStore: Send + Sync {
    /// The persisted credential, if any.
    fn load(&self) -> ClientResult<Option<String>>;
    /// Persist (or replace) the credential.
    fn save(&self, token: &str) -> ClientResult<()>;
    /// Forget the credential. Clearing an empty store is not an error.
    fn clear(&self) -> ClientResult<()>;
}

/// Build the session cookie holding the credential.
pub fn token_cookie(token: &str) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE.to_string(), token.to_string()))
        .same_site(SameSite::Lax)
        .path("/".to_string())
        .build()
}

/// File-backed cookie jar.
#[derive(Debug, Clone)]
pub struct CookieJar {
    path: PathBuf,
}

impl CookieJar {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_lines(&self) -> ClientResult<Vec<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(contents
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Every line except those holding the `token` cookie. Unparseable
    /// lines are kept as they are.
    fn other_cookies(&self) -> ClientResult<Vec<String>> {
        Ok(self
            .read_lines()?
            .into_iter()
            .filter(|line| {
                Cookie::parse(line.as_str())
                    .map(|c| c.name() != TOKEN_COOKIE)
                    .unwrap_or(true)
            })
            .collect())
    }

    fn write_lines(&self, lines: &[String]) -> ClientResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let mut contents = lines.join("\n");
        if !contents.is_empty() {
            contents.push('\n');
        }
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl CredentialStore for CookieJar {
    fn load(&self) -> ClientResult<Option<String>> {
        Ok(self.read_lines()?.iter().find_map(|line| {
            Cookie::parse(line.as_str())
                .ok()
                .filter(|c| c.name() == TOKEN_COOKIE && !c.value().is_empty())
                .map(|c| c.value().to_string())
        }))
    }

    fn save(&self, token: &str) -> ClientResult<()> {
        let mut lines = self.other_cookies()?;
        lines.push(token_cookie(token).to_string());
        self.write_lines(&lines)
    }

    fn clear(&self) -> ClientResult<()> {
        if !self.path.exists() {
            return Ok(());
        }
        let lines = self.other_cookies()?;
        self.write_lines(&lines)
    }
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    token: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        // A poisoned slot still holds a valid Option.
        self.token.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl CredentialStore for MemoryStore {
    fn load(&self) -> ClientResult<Option<String>> {
        Ok(self.slot().clone())
    }

    fn save(&self, token: &str) -> ClientResult<()> {
        *self.slot() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        *self.slot() = None;
        Ok(())
    }
}
