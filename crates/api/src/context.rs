use launchpad_auth::{Session, SessionStatus};

/// Session context for a request, attached by the guard middleware.
///
/// Present on every request the guard ran on, authenticated or not.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionContext {
    status: SessionStatus,
}

impl SessionContext {
    pub fn new(status: SessionStatus) -> Self {
        Self { status }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&Session> {
        self.status.session()
    }

    pub fn is_authenticated(&self) -> bool {
        self.status.is_authenticated()
    }

    /// Name to greet the user with (name, then e-mail, then user id).
    pub fn display_name(&self) -> Option<String> {
        self.session().map(|s| {
            s.name
                .clone()
                .or_else(|| s.email.clone())
                .unwrap_or_else(|| s.user_id.to_string())
        })
    }
}
