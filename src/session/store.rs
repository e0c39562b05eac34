use std::path::Path;

use log::{info, warn};

use super::{Result, SessionState, User, TOKEN_KEY, USER_KEY};
use crate::storage::LocalStore;

/// Owns the persisted session. Pages read the current state through the
/// command layer; only `login` and `logout` mutate it.
#[derive(Debug)]
pub struct SessionStore {
    store: LocalStore,
    state: SessionState,
}

impl SessionStore {
    /// Open the backing store under `dir` and rehydrate the session from it.
    pub fn open(dir: &Path) -> Result<Self> {
        let store = LocalStore::open(dir)?;
        let mut session = Self {
            store,
            state: SessionState::Unauthenticated,
        };
        session.load();
        Ok(session)
    }

    /// Rehydrate from persistent storage. Authenticated only when both the
    /// token and a parsable user record are present; anything else is
    /// treated as Unauthenticated and leftover keys are cleared. Never fails
    /// the caller.
    pub fn load(&mut self) -> SessionState {
        let token = self.store.get(TOKEN_KEY).map(|t| t.to_string());
        let user_raw = self.store.get(USER_KEY).map(|u| u.to_string());

        self.state = match (token, user_raw) {
            (Some(token), Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    info!("🔐 Session restored for {}", user.username);
                    SessionState::Authenticated { user, token }
                }
                Err(e) => {
                    warn!("Stored user record is corrupt ({}), clearing session", e);
                    self.clear_persisted();
                    SessionState::Unauthenticated
                }
            },
            (None, None) => SessionState::Unauthenticated,
            _ => {
                warn!("Session keys are partially present, clearing session");
                self.clear_persisted();
                SessionState::Unauthenticated
            }
        };

        self.state.clone()
    }

    /// Persist a freshly issued session and transition to Authenticated.
    /// There is no credential verification at this layer; the transition
    /// itself always succeeds, only storage I/O can fail.
    pub fn login(&mut self, user: User, token: String) -> Result<()> {
        let serialized = serde_json::to_string(&user)?;
        self.store.set(TOKEN_KEY, &token)?;
        self.store.set(USER_KEY, &serialized)?;

        info!(
            "✅ Logged in as {} <{}> at {}",
            user.username,
            user.email,
            chrono::Utc::now().to_rfc3339()
        );
        self.state = SessionState::Authenticated { user, token };
        Ok(())
    }

    /// Drop the session. Calling this while already unauthenticated is a
    /// no-op.
    pub fn logout(&mut self) {
        let was_authenticated = self.state.is_authenticated();
        self.clear_persisted();
        self.state = SessionState::Unauthenticated;
        if was_authenticated {
            info!("👋 Logged out");
        }
    }

    pub fn current(&self) -> &SessionState {
        &self.state
    }

    fn clear_persisted(&mut self) {
        if let Err(e) = self.store.remove(TOKEN_KEY) {
            warn!("Failed to clear stored token: {}", e);
        }
        if let Err(e) = self.store.remove(USER_KEY) {
            warn!("Failed to clear stored user: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_user() -> User {
        User {
            id: 1,
            username: "Demo User".to_string(),
            email: "demo@example.com".to_string(),
        }
    }

    #[test]
    fn test_login_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = SessionStore::open(dir.path()).unwrap();
            assert_eq!(store.current(), &SessionState::Unauthenticated);
            store
                .login(demo_user(), "demo-token-42".to_string())
                .unwrap();
        }

        // Reopening simulates an app restart
        let store = SessionStore::open(dir.path()).unwrap();
        match store.current() {
            SessionState::Authenticated { user, token } => {
                assert_eq!(user, &demo_user());
                assert_eq!(token, "demo-token-42");
            }
            SessionState::Unauthenticated => panic!("session was not restored"),
        }
    }

    #[test]
    fn test_logout_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SessionStore::open(dir.path()).unwrap();
        store.login(demo_user(), "demo-token-1".to_string()).unwrap();

        store.logout();
        assert_eq!(store.current(), &SessionState::Unauthenticated);
        assert_eq!(store.load(), SessionState::Unauthenticated);

        // A second logout while unauthenticated is a no-op
        store.logout();
        assert_eq!(store.current(), &SessionState::Unauthenticated);
    }

    #[test]
    fn test_token_without_user_is_cleared() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut raw = LocalStore::open(dir.path()).unwrap();
            raw.set(TOKEN_KEY, "orphan-token").unwrap();
        }

        let store = SessionStore::open(dir.path()).unwrap();
        assert_eq!(store.current(), &SessionState::Unauthenticated);

        // The orphaned key must be gone after recovery
        let raw = LocalStore::open(dir.path()).unwrap();
        assert_eq!(raw.get(TOKEN_KEY), None);
        assert_eq!(raw.get(USER_KEY), None);
    }

    #[test]
    fn test_corrupt_user_record_is_cleared() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut raw = LocalStore::open(dir.path()).unwrap();
            raw.set(TOKEN_KEY, "demo-token-9").unwrap();
            raw.set(USER_KEY, "{this is not a user").unwrap();
        }

        let store = SessionStore::open(dir.path()).unwrap();
        assert_eq!(store.current(), &SessionState::Unauthenticated);

        let raw = LocalStore::open(dir.path()).unwrap();
        assert_eq!(raw.get(TOKEN_KEY), None);
        assert_eq!(raw.get(USER_KEY), None);
    }
}
