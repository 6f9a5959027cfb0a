use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
        rand_core::OsRng,
    },
};

use crate::domain::error::DomainError;

/// Salted Argon2id hash in PHC string format.
pub(crate) fn hash_password(raw_password: &str) -> Result<String, DomainError> {
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = argon2()?
        .hash_password(raw_password.as_bytes(), &salt)
        .map_err(|err| DomainError::Unexpected(err.to_string()))?;
    Ok(password_hash.to_string())
}

/// `InvalidCredentials` on mismatch; anything else means the stored hash is unusable.
pub(crate) fn verify_password(raw_password: &str, password_hash: &str) -> Result<(), DomainError> {
    let parsed_hash =
        PasswordHash::new(password_hash).map_err(|err| DomainError::Unexpected(err.to_string()))?;
    argon2()?
        .verify_password(raw_password.as_bytes(), &parsed_hash)
        .map_err(|err| match err {
            PasswordHashError::Password => DomainError::InvalidCredentials,
            _ => DomainError::Unexpected(err.to_string()),
        })
}

fn argon2() -> Result<Argon2<'static>, DomainError> {
    let params = Params::new(19 * 1024, 2, 1, None)
        .map_err(|err| DomainError::Unexpected(err.to_string()))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}
