//! Explicit session objects and feed gating.
//!
//! The session is issued at login and cleared at logout; callers pass it to
//! whatever needs it instead of reaching into ambient storage.

use foundation::time::Time;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Command,
    Field,
}

impl Role {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "admin" => Some(Role::Admin),
            "command" => Some(Role::Command),
            "field" => Some(Role::Field),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Command => "command",
            Role::Field => "field",
        }
    }
}

/// Server feeds the client can ask for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Feed {
    Facilities,
    FloodZones,
    Rainfall,
    Resources,
}

impl Feed {
    /// Roles allowed to read this feed, mirroring the server's route guards.
    /// Field users only drive response actions, which have no feed here.
    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            Feed::Facilities | Feed::FloodZones | Feed::Rainfall | Feed::Resources => {
                &[Role::Command, Role::Admin]
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub username: String,
    pub role: Role,
    pub issued_at: Time,
}

impl Session {
    pub fn new(username: impl Into<String>, role: Role, issued_at: Time) -> Self {
        Self {
            username: username.into(),
            role,
            issued_at,
        }
    }

    pub fn can_read(&self, feed: Feed) -> bool {
        feed.allowed_roles().contains(&self.role)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    NotAuthenticated,
    Forbidden,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::NotAuthenticated => write!(f, "not logged in"),
            SessionError::Forbidden => write!(f, "insufficient role for this feed"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Gate helper for feed access.
pub fn require_access(session: Option<&Session>, feed: Feed) -> Result<(), SessionError> {
    let session = session.ok_or(SessionError::NotAuthenticated)?;
    if session.can_read(feed) {
        Ok(())
    } else {
        Err(SessionError::Forbidden)
    }
}

/// Where the one current session lives.
pub trait SessionStore {
    fn current(&self) -> Option<&Session>;
    fn login(&mut self, session: Session);
    fn logout(&mut self);
}

#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    current: Option<Session>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    fn login(&mut self, session: Session) {
        self.current = Some(session);
    }

    fn logout(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{
        Feed, InMemorySessionStore, Role, Session, SessionError, SessionStore, require_access,
    };
    use foundation::time::Time;

    fn session(role: Role) -> Session {
        Session::new("ops", role, Time::zero())
    }

    #[test]
    fn command_and_admin_can_read_rainfall() {
        assert!(session(Role::Command).can_read(Feed::Rainfall));
        assert!(session(Role::Admin).can_read(Feed::Rainfall));
        assert!(!session(Role::Field).can_read(Feed::Rainfall));
    }

    #[test]
    fn gating_distinguishes_missing_from_forbidden() {
        assert_eq!(
            require_access(None, Feed::Facilities),
            Err(SessionError::NotAuthenticated)
        );
        assert_eq!(
            require_access(Some(&session(Role::Field)), Feed::Facilities),
            Err(SessionError::Forbidden)
        );
        assert_eq!(require_access(Some(&session(Role::Command)), Feed::Facilities), Ok(()));
    }

    #[test]
    fn login_and_logout_scope_the_session() {
        let mut store = InMemorySessionStore::new();
        assert!(store.current().is_none());

        store.login(session(Role::Admin));
        assert_eq!(store.current().map(|s| s.role), Some(Role::Admin));

        store.logout();
        assert!(store.current().is_none());
    }

    #[test]
    fn parses_known_roles() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("command"), Some(Role::Command));
        assert_eq!(Role::parse("field"), Some(Role::Field));
        assert_eq!(Role::parse("guest"), None);
    }
}
