//! Authentication forms, credential checks, and the route guard.
//!
//! There is no real identity backend here; the storefront's login sync
//! service owns that. This module covers what the admin UI itself must get
//! right: structured validation of the login/registration forms, login
//! bookkeeping, and the permission gate in front of admin routes.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{info, instrument, warn};

use jade_shopping_core::AdminStatus;

use crate::error::AppError;
use crate::models::AdminUser;
use crate::store::AdminStore;

/// Minimum password length accepted at registration.
const MIN_PASSWORD_LENGTH: usize = 8;

/// A submitted login form.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    /// Login name.
    pub username: String,
    /// Plaintext password, zeroized with the form.
    #[serde(skip)]
    pub password: SecretString,
}

/// A submitted registration form.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    /// Login name.
    pub username: String,
    /// Email address, unvalidated text as typed.
    pub email: String,
    /// Plaintext password.
    #[serde(skip)]
    pub password: SecretString,
    /// Password confirmation field.
    #[serde(skip)]
    pub confirm_password: SecretString,
}

/// Validate a registration form.
///
/// # Errors
///
/// Returns [`AppError::Validation`] with a user-facing message for the
/// first failed check: required fields, email shape, password length, and
/// password confirmation.
pub fn validate_registration(form: &RegisterForm) -> Result<(), AppError> {
    if form.username.trim().is_empty() {
        return Err(AppError::validation("username is required"));
    }
    jade_shopping_core::Email::parse(&form.email)
        .map_err(|e| AppError::validation(e.to_string()))?;
    if form.password.expose_secret().len() < MIN_PASSWORD_LENGTH {
        return Err(AppError::validation(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    if form.password.expose_secret() != form.confirm_password.expose_secret() {
        return Err(AppError::validation("passwords do not match"));
    }
    Ok(())
}

/// Verifies a username/password pair against whatever credential backing
/// is configured. Production wires this to the login sync service; tests
/// use [`StaticCredentials`].
pub trait CredentialVerifier {
    /// Whether the pair is valid.
    fn verify(&self, username: &str, password: &SecretString) -> bool;
}

/// Fixed credential table for tests and local development.
#[derive(Debug, Default)]
pub struct StaticCredentials {
    entries: Vec<(String, String)>,
}

impl StaticCredentials {
    /// Build a table from (username, password) pairs.
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &SecretString) -> bool {
        self.entries
            .iter()
            .any(|(u, p)| u == username && p == password.expose_secret())
    }
}

/// Authenticate a login form against the admin store.
///
/// On success the matched account's login counters are bumped and a clone
/// of the account is returned for the session.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for bad credentials (deliberately the
/// same message whether the username or the password was wrong) and
/// [`AppError::Forbidden`] for inactive or locked accounts.
#[instrument(skip_all, fields(username = %form.username))]
pub fn login<G, V: CredentialVerifier>(
    admins: &mut AdminStore<G>,
    verifier: &V,
    form: &LoginForm,
) -> Result<AdminUser, AppError> {
    if form.username.trim().is_empty() {
        return Err(AppError::validation("username is required"));
    }
    if !verifier.verify(&form.username, &form.password) {
        warn!("login rejected: bad credentials");
        return Err(AppError::validation("invalid username or password"));
    }

    // Resolve the account over the full collection, not the filtered list
    // view; an active screen filter must not hide accounts from login.
    let account = admins
        .find_by_username(&form.username)
        .cloned()
        .ok_or_else(|| AppError::validation("invalid username or password"))?;

    match account.status {
        AdminStatus::Active => {}
        AdminStatus::Inactive => {
            return Err(AppError::Forbidden("account is inactive".to_string()));
        }
        AdminStatus::Locked => {
            return Err(AppError::Forbidden(
                "account is locked; contact a super admin".to_string(),
            ));
        }
    }

    admins.record_login(account.id)?;
    info!(admin = %account.id, "login succeeded");
    Ok(account)
}

/// Outcome of a route-guard check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Render the protected view.
    Granted,
    /// Render the access-denied view.
    Denied {
        /// Permission keys the admin is missing.
        missing: Vec<String>,
    },
}

impl AccessDecision {
    /// Whether access was granted.
    #[must_use]
    pub const fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Evaluate the admin-route guard.
///
/// Super admins pass every check. Everyone else must be active and hold
/// all of `required_permissions`.
#[must_use]
pub fn check_access(admin: &AdminUser, required_permissions: &[&str]) -> AccessDecision {
    if admin.is_super_admin() {
        return AccessDecision::Granted;
    }
    if admin.status != AdminStatus::Active {
        return AccessDecision::Denied {
            missing: required_permissions
                .iter()
                .map(ToString::to_string)
                .collect(),
        };
    }

    let missing: Vec<String> = required_permissions
        .iter()
        .filter(|key| !admin.has_permission(key))
        .map(ToString::to_string)
        .collect();

    if missing.is_empty() {
        AccessDecision::Granted
    } else {
        AccessDecision::Denied { missing }
    }
}
