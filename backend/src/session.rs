// Admin login state kept in the signed session cookie
//

use crate::error::{ApiError, ApiResult};
use axum_sessions::async_session::Session;

static LOGGED_IN: &str = "logged_in";

/// Read access to the admin flag of a session.
pub trait AdminSession {
    fn is_authenticated(&self) -> bool;
}

/// Flips the admin flag of a session.
pub trait AdminSessionMut: AdminSession {
    fn sign_in(&mut self) -> anyhow::Result<()>;

    /// No-op for anonymous sessions.
    fn sign_out(&mut self);
}

impl AdminSession for Session {
    fn is_authenticated(&self) -> bool {
        self.get::<bool>(LOGGED_IN).unwrap_or(false)
    }
}

impl AdminSessionMut for Session {
    fn sign_in(&mut self) -> anyhow::Result<()> {
        self.insert(LOGGED_IN, true)?;
        Ok(())
    }

    fn sign_out(&mut self) {
        self.remove(LOGGED_IN);
    }
}

pub fn reject_anonymous_users(session: &impl AdminSession) -> ApiResult<()> {
    if session.is_authenticated() {
        Ok(())
    } else {
        Err(ApiError::AnonymousAdmin)
    }
}
