use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum JwtError {
    #[error("token encode failed")]
    Encode(#[source] jsonwebtoken::errors::Error),

    #[error("token decode/validation failed")]
    Decode(#[source] jsonwebtoken::errors::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct Claims {
    pub(crate) id: i64,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) iat: i64,
    pub(crate) exp: i64,
}

/// Identity carried inside a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TokenSubject<'a> {
    pub(crate) id: i64,
    pub(crate) first_name: &'a str,
    pub(crate) last_name: &'a str,
}

/// Issues and verifies HS256 identity tokens. Tokens live for exactly one hour
/// and are never stored server side.
pub(crate) struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub(crate) const TOKEN_TTL_SECONDS: i64 = 60 * 60;

    pub(crate) fn new(secret: &str) -> Self {
        JwtService {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub(crate) fn generate_token(&self, subject: TokenSubject<'_>) -> Result<String, JwtError> {
        self.generate_token_at(subject, Utc::now())
    }

    pub(crate) fn generate_token_at(
        &self,
        subject: TokenSubject<'_>,
        issued_at: DateTime<Utc>,
    ) -> Result<String, JwtError> {
        let claims = Claims {
            id: subject.id,
            first_name: subject.first_name.into(),
            last_name: subject.last_name.into(),
            iat: issued_at.timestamp(),
            exp: (issued_at + Duration::seconds(Self::TOKEN_TTL_SECONDS)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(JwtError::Encode)
    }

    pub(crate) fn verify_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(JwtError::Decode)?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use jsonwebtoken::errors::ErrorKind;

    use super::{JwtError, JwtService, TokenSubject};

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn subject() -> TokenSubject<'static> {
        TokenSubject {
            id: 42,
            first_name: "Ada",
            last_name: "Lovelace",
        }
    }

    #[test]
    fn issued_token_decodes_to_same_identity() {
        let jwt = JwtService::new(SECRET);
        let token = jwt.generate_token(subject()).expect("token must be issued");

        let claims = jwt.verify_token(&token).expect("token must verify");
        assert_eq!(claims.id, 42);
        assert_eq!(claims.first_name, "Ada");
        assert_eq!(claims.last_name, "Lovelace");
        assert_eq!(claims.exp - claims.iat, JwtService::TOKEN_TTL_SECONDS);
    }

    #[test]
    fn token_older_than_an_hour_is_rejected() {
        let jwt = JwtService::new(SECRET);
        let issued_at = Utc::now() - Duration::seconds(JwtService::TOKEN_TTL_SECONDS + 5);
        let token = jwt
            .generate_token_at(subject(), issued_at)
            .expect("token must be issued");

        match jwt.verify_token(&token) {
            Err(JwtError::Decode(err)) => {
                assert!(matches!(err.kind(), ErrorKind::ExpiredSignature))
            }
            other => panic!("expected expired signature, got {other:?}"),
        }
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let issuer = JwtService::new("another-secret-another-secret-xx");
        let token = issuer.generate_token(subject()).expect("token must be issued");

        let jwt = JwtService::new(SECRET);
        assert!(jwt.verify_token(&token).is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        let jwt = JwtService::new(SECRET);
        assert!(jwt.verify_token("not-a-token").is_err());
    }
}
