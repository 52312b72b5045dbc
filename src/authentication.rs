use secrecy::{ExposeSecret, Secret};
use sha3::Digest;

#[derive(thiserror::Error, Debug)]
pub enum AuthError {
    #[error("Authorization credential is missing")]
    MissingCredential,
    #[error("Authorization credential does not match")]
    InvalidCredential,
}

/// Checks a bearer token against the configured admin secret.
///
/// Both sides are hashed before comparison so the check runs over
/// fixed-length digests instead of the raw secret bytes.
pub fn validate_admin_token(
    provided: Option<&str>,
    expected: &Secret<String>,
) -> Result<(), AuthError> {
    let provided = provided.ok_or(AuthError::MissingCredential)?;

    let provided_hash = sha3::Sha3_256::digest(provided.as_bytes());
    let expected_hash = sha3::Sha3_256::digest(expected.expose_secret().as_bytes());

    if provided_hash != expected_hash {
        return Err(AuthError::InvalidCredential);
    }

    Ok(())
}
