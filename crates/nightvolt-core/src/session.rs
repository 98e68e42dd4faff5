//! Session storage and retrieval.
//!
//! The signed-in user is kept in `<home>/nightvolt_user.json` with
//! restricted permissions (0600). This file is the only persistence the
//! client has: it is read once at startup, written on login and removed
//! on logout.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::paths;
use crate::user::User;

/// Who is currently signed in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn(User),
}

impl Session {
    pub fn user(&self) -> Option<&User> {
        match self {
            Session::LoggedOut => None,
            Session::LoggedIn(user) => Some(user),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, Session::LoggedIn(_))
    }
}

/// Owns the active session and its backing file.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    session: Session,
}

impl SessionStore {
    /// Binds a store to the default session path. Does not touch the disk.
    pub fn open_default() -> Self {
        Self::open(paths::session_path())
    }

    /// Binds a store to `path`. Does not touch the disk.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            session: Session::LoggedOut,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Reads the persisted user record, if any.
    ///
    /// A missing, unreadable or unparsable file yields `LoggedOut`; the
    /// failure is logged and never surfaced.
    pub fn restore(&mut self) -> &Session {
        self.session = match read_user(&self.path) {
            Ok(Some(user)) => {
                tracing::info!(email = %user.email, role = %user.role, "restored session");
                Session::LoggedIn(user)
            }
            Ok(None) => Session::LoggedOut,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), "ignoring stored session: {err:#}");
                Session::LoggedOut
            }
        };
        &self.session
    }

    /// Makes `user` the active session and persists it, replacing any
    /// previous record.
    ///
    /// The in-memory session is updated even when the write fails.
    pub fn login(&mut self, user: User) -> Result<()> {
        let result = write_user(&self.path, &user);
        tracing::info!(email = %user.email, role = %user.role, "session started");
        self.session = Session::LoggedIn(user);
        result
    }

    /// Clears the active session and removes the persisted record.
    ///
    /// Returns whether a record was on disk.
    pub fn logout(&mut self) -> Result<bool> {
        self.session = Session::LoggedOut;
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!("session cleared");
                Ok(true)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err)
                .with_context(|| format!("Failed to remove {}", self.path.display())),
        }
    }
}

fn read_user(path: &Path) -> Result<Option<User>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to read {}", path.display()));
        }
    };

    let user = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse session from {}", path.display()))?;
    Ok(Some(user))
}

/// Writes via temp file + rename so a crash never leaves half a record.
fn write_user(path: &Path, user: &User) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let contents = serde_json::to_string_pretty(user).context("Failed to serialize session")?;
    let tmp_path = path.with_extension("json.tmp");

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(&tmp_path)
            .with_context(|| format!("Failed to open {} for writing", tmp_path.display()))?;
        file.write_all(contents.as_bytes())
            .with_context(|| format!("Failed to write to {}", tmp_path.display()))?;
    }

    #[cfg(not(unix))]
    {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&tmp_path)
            .with_context(|| format!("Failed to open {} for writing", tmp_path.display()))?;
        file.write_all(contents.as_bytes())
            .with_context(|| format!("Failed to write to {}", tmp_path.display()))?;
    }

    fs::rename(&tmp_path, path).with_context(|| {
        format!(
            "Failed to rename {} to {}",
            tmp_path.display(),
            path.display()
        )
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    fn sample_user() -> User {
        User {
            uid: "a1b2c3".to_string(),
            email: "nova@nightvolt.app".to_string(),
            role: "artist".to_string(),
            label: "Volt Records".to_string(),
        }
    }

    #[test]
    fn test_restore_missing_file_is_logged_out() {
        let dir = tempdir().unwrap();
        let mut store = SessionStore::open(dir.path().join("nightvolt_user.json"));

        assert_eq!(store.restore(), &Session::LoggedOut);
    }

    #[test]
    fn test_restore_valid_record() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nightvolt_user.json");
        fs::write(&path, serde_json::to_string(&sample_user()).unwrap()).unwrap();

        let mut store = SessionStore::open(&path);
        assert_eq!(store.restore(), &Session::LoggedIn(sample_user()));
    }

    #[test]
    fn test_restore_corrupt_record_is_logged_out() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nightvolt_user.json");

        for contents in ["", "{not json", "[1, 2, 3]", r#"{"email": "x@y.z"}"#] {
            fs::write(&path, contents).unwrap();
            let mut store = SessionStore::open(&path);
            assert_eq!(store.restore(), &Session::LoggedOut, "contents: {contents:?}");
        }
    }

    #[test]
    fn test_login_then_fresh_restore_yields_user() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("nightvolt_user.json");

        let mut store = SessionStore::open(&path);
        store.login(sample_user()).unwrap();
        assert_eq!(store.session(), &Session::LoggedIn(sample_user()));

        let mut fresh = SessionStore::open(&path);
        assert_eq!(fresh.restore(), &Session::LoggedIn(sample_user()));
    }

    #[test]
    fn test_login_overwrites_previous_record() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nightvolt_user.json");

        let mut store = SessionStore::open(&path);
        store.login(sample_user()).unwrap();
        let admin = User {
            uid: "root".to_string(),
            email: "admin@nightvolt.app".to_string(),
            role: "admin".to_string(),
            label: "NIGHTVOLT".to_string(),
        };
        store.login(admin.clone()).unwrap();

        let mut fresh = SessionStore::open(&path);
        assert_eq!(fresh.restore(), &Session::LoggedIn(admin));
    }

    #[test]
    fn test_logout_then_restore_is_logged_out() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nightvolt_user.json");

        let mut store = SessionStore::open(&path);
        store.login(sample_user()).unwrap();
        assert!(store.logout().unwrap());
        assert_eq!(store.session(), &Session::LoggedOut);
        assert!(!path.exists());

        let mut fresh = SessionStore::open(&path);
        assert_eq!(fresh.restore(), &Session::LoggedOut);
    }

    #[test]
    fn test_logout_without_record_is_ok() {
        let dir = tempdir().unwrap();
        let mut store = SessionStore::open(dir.path().join("nightvolt_user.json"));

        assert!(!store.logout().unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_session_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("nightvolt_user.json");
        let mut store = SessionStore::open(&path);
        store.login(sample_user()).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
