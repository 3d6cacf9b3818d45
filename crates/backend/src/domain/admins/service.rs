use anyhow::Result;
use contracts::auth::AdminUser;

use super::repository;
use crate::system::auth::password;

/// Outcome of a credential check. Distinguishes an unknown email from a
/// bad password so the login handler can answer 404 vs 401.
#[derive(Debug)]
pub enum CredentialCheck {
    UnknownEmail,
    WrongPassword,
    Valid(AdminUser),
}

pub async fn verify_credentials(email: &str, password_input: &str) -> Result<CredentialCheck> {
    let Some(stored) = repository::get_by_email(email).await? else {
        return Ok(CredentialCheck::UnknownEmail);
    };

    if !password::verify_password(password_input, &stored.password_hash)? {
        return Ok(CredentialCheck::WrongPassword);
    }

    Ok(CredentialCheck::Valid(stored.profile))
}

pub async fn exists(admin_id: &str) -> Result<bool> {
    Ok(repository::get_by_id(admin_id).await?.is_some())
}
