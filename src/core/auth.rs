//! Session/auth gate: credential check and the persisted logged-in marker.

use crate::config::Config;
use crate::db::repository::SessionStore;
use crate::errors::{AppError, AppResult};
use crate::models::user::{SessionUser, StaffUser};
use chrono::{DateTime, Local};

/// Checks a pair of credentials.
pub trait Authenticator {
    /// The matching staff member, or [`AppError::InvalidCredentials`].
    fn authenticate(&self, email: &str, password: &str) -> AppResult<StaffUser>;
}

/// Staff members allowed to log in, as listed in the configuration.
#[derive(Debug, Clone)]
pub struct StaffDirectory {
    users: Vec<StaffUser>,
}

impl StaffDirectory {
    pub fn new(users: Vec<StaffUser>) -> Self {
        Self { users }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.staff.clone())
    }
}

impl Authenticator for StaffDirectory {
    fn authenticate(&self, email: &str, password: &str) -> AppResult<StaffUser> {
        self.users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .cloned()
            .ok_or(AppError::InvalidCredentials)
    }
}

pub struct SessionLogic;

impl SessionLogic {
    /// Validate the credentials and persist the marker.
    /// A failed attempt leaves any existing session in place.
    pub fn login<S, A>(
        store: &mut S,
        auth: &A,
        email: &str,
        password: &str,
        now: DateTime<Local>,
    ) -> AppResult<SessionUser>
    where
        S: SessionStore,
        A: Authenticator + ?Sized,
    {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(AppError::InvalidEmail(email.to_string()));
        }

        let staff = auth.authenticate(email, password)?;
        let user = SessionUser::from_staff(&staff, now);
        store.set_current_user(&user)?;
        Ok(user)
    }

    /// Remove the marker; returns the user that was logged in, if any.
    pub fn logout<S: SessionStore>(store: &mut S) -> AppResult<Option<SessionUser>> {
        let current = store.current_user()?;
        store.clear_current_user()?;
        Ok(current)
    }

    /// The logged-in user, or [`AppError::NotLoggedIn`].
    pub fn require_user<S: SessionStore>(store: &S) -> AppResult<SessionUser> {
        store.current_user()?.ok_or(AppError::NotLoggedIn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use crate::db::pool::DbPool;
    use chrono::TimeZone;

    fn pool() -> DbPool {
        let pool = DbPool::in_memory().unwrap();
        init_db(&pool.conn).unwrap();
        pool
    }

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 6, 2, 8, 0, 0).unwrap()
    }

    fn directory() -> StaffDirectory {
        StaffDirectory::new(Config::default_staff())
    }

    #[test]
    fn valid_credentials_persist_the_marker() {
        let mut pool = pool();
        let user = SessionLogic::login(
            &mut pool,
            &directory(),
            "jane@example.com",
            "password2",
            now(),
        )
        .unwrap();

        assert_eq!(user.name, "Jane Doe");
        assert_eq!(SessionLogic::require_user(&pool).unwrap(), user);
    }

    #[test]
    fn wrong_password_keeps_previous_session() {
        let mut pool = pool();
        let dir = directory();
        SessionLogic::login(&mut pool, &dir, "john@example.com", "password1", now()).unwrap();

        let err = SessionLogic::login(&mut pool, &dir, "jane@example.com", "password1", now())
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
        assert_eq!(
            SessionLogic::require_user(&pool).unwrap().email,
            "john@example.com"
        );
    }

    #[test]
    fn credentials_are_case_sensitive() {
        let dir = directory();
        assert!(dir.authenticate("John@example.com", "password1").is_err());
        assert!(dir.authenticate("john@example.com", "Password1").is_err());
        assert!(dir.authenticate("john@example.com", "password1").is_ok());
    }

    #[test]
    fn logout_clears_the_marker() {
        let mut pool = pool();
        SessionLogic::login(&mut pool, &directory(), "mike@example.com", "password3", now())
            .unwrap();

        let prev = SessionLogic::logout(&mut pool).unwrap();
        assert_eq!(prev.map(|u| u.name), Some("Mike Johnson".to_string()));
        assert!(matches!(
            SessionLogic::require_user(&pool),
            Err(AppError::NotLoggedIn)
        ));
        assert!(SessionLogic::logout(&mut pool).unwrap().is_none());
    }

    #[test]
    fn malformed_email_is_rejected_before_lookup() {
        let mut pool = pool();
        let err = SessionLogic::login(&mut pool, &directory(), "  ", "x", now()).unwrap_err();
        assert!(matches!(err, AppError::InvalidEmail(_)));
    }
}
