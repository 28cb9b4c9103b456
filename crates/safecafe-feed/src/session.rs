//! Login stub. Any non-empty identifier is accepted; nothing is verified.

use crate::error::AuthError;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Unauthenticated,
    Authenticated { identifier: String },
}

impl Session {
    pub fn login(&mut self, identifier: &str) -> Result<(), AuthError> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(AuthError::EmptyIdentifier);
        }
        info!(user = %identifier, "[SESSION] Logged in");
        *self = Session::Authenticated {
            identifier: identifier.to_string(),
        };
        Ok(())
    }

    pub fn logout(&mut self) {
        if let Session::Authenticated { identifier } = self {
            info!(user = %identifier, "[SESSION] Logged out");
        }
        *self = Session::Unauthenticated;
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn identifier(&self) -> Option<&str> {
        match self {
            Session::Authenticated { identifier } => Some(identifier),
            Session::Unauthenticated => None,
        }
    }

    /// Name used in the greeting: the identifier up to its first `@`.
    pub fn greeting_name(&self) -> Option<&str> {
        self.identifier()
            .map(|id| id.split('@').next().unwrap_or(id))
    }
}
