use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{ActiveSession, Store};
use crate::{
    error::{AppError, AppResult},
    models::{Role, Session, UserId},
};

const ADMIN_USER_ID: UserId = 1;
const CUSTOMER_USER_ID: UserId = 2;
const SIGNUP_USER_ID: UserId = 3;

/// A freshly opened session together with the token that identifies it.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SignedIn {
    pub session: Session,
    pub token: Uuid,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionOverview {
    pub session: Option<Session>,
    pub cart_item_count: i64,
    pub unread_notifications: usize,
}

impl Store {
    /// Opens a session for `email`. Passwords are not checked; the role comes
    /// from the configured policy. An existing session is replaced.
    pub fn login(&mut self, email: &str, _password: &str) -> SignedIn {
        let role = self.policy.role_for(email);
        let (user_id, name) = match role {
            Role::Admin => (ADMIN_USER_ID, "관리자"),
            Role::Customer => (CUSTOMER_USER_ID, "김고객"),
        };
        let session = Session {
            user_id,
            name: name.to_string(),
            email: email.to_string(),
            role,
        };
        tracing::info!(user_id, role = ?role, "session opened");
        self.open_session(session)
    }

    /// Registers a customer and signs them in.
    pub fn signup(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> AppResult<SignedIn> {
        if password != confirm_password {
            return Err(AppError::bad_request("password confirmation does not match"));
        }
        if name.trim().is_empty() {
            return Err(AppError::bad_request("name must not be empty"));
        }
        let session = Session {
            user_id: SIGNUP_USER_ID,
            name: name.trim().to_string(),
            email: email.to_string(),
            role: Role::Customer,
        };
        tracing::info!(user_id = SIGNUP_USER_ID, "customer signed up");
        Ok(self.open_session(session))
    }

    /// Ends the session and discards the cart.
    pub fn logout(&mut self) {
        match self.session.take() {
            Some(active) => {
                tracing::info!(user_id = active.session.user_id, "session closed");
            }
            None => tracing::debug!("logout without an active session"),
        }
        self.cart.clear();
    }

    /// Resolves a session token to the active session.
    pub fn authenticate(&self, token: &Uuid) -> AppResult<&Session> {
        match &self.session {
            Some(active) if active.token == *token => Ok(&active.session),
            _ => Err(AppError::AuthenticationRequired),
        }
    }

    pub fn session_overview(&self) -> SessionOverview {
        SessionOverview {
            session: self.session().cloned(),
            cart_item_count: self.cart.item_count(),
            unread_notifications: self.unread_notification_count(),
        }
    }

    fn open_session(&mut self, session: Session) -> SignedIn {
        let token = Uuid::new_v4();
        self.session = Some(ActiveSession {
            session: session.clone(),
            token,
        });
        SignedIn { session, token }
    }
}
