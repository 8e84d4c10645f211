//! JWT encoding and decoding with RS256 algorithm.
//!
//! Token issuance belongs to the external identity provider; labstore itself
//! only validates tokens. `encode_token` exists for tests and tooling.

use crate::claims::JwtClaims;
use crate::error::AuthError;
use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation,
};

/// Configuration for JWT validation.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Leeway in seconds for exp/iat validation (clock skew tolerance).
    pub leeway: u64,
    /// Expected issuer (if set, tokens with different issuer are rejected).
    pub issuer: Option<String>,
    /// Expected audience (if set, tokens without matching audience are rejected).
    pub audience: Option<Vec<String>>,
    /// Whether to validate expiration.
    pub validate_exp: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            leeway: 60, // 60 seconds clock skew tolerance
            issuer: None,
            audience: None,
            validate_exp: true,
        }
    }
}

impl ValidationConfig {
    /// Set the expected issuer.
    #[must_use]
    pub fn issuer(mut self, iss: impl Into<String>) -> Self {
        self.issuer = Some(iss.into());
        self
    }

    /// Set the expected audience.
    #[must_use]
    pub fn audience(mut self, aud: Vec<impl Into<String>>) -> Self {
        self.audience = Some(aud.into_iter().map(Into::into).collect());
        self
    }

    /// Disable expiration validation (use with caution).
    #[must_use]
    pub fn skip_exp_validation(mut self) -> Self {
        self.validate_exp = false;
        self
    }
}

/// Encode JWT claims into a signed token string using RS256.
///
/// # Arguments
///
/// * `claims` - The JWT claims to encode
/// * `private_key_pem` - PEM-encoded RSA private key
///
/// # Errors
///
/// Returns `AuthError::InvalidKey` if the private key is invalid.
pub fn encode_token(claims: &JwtClaims, private_key_pem: &[u8]) -> Result<String, AuthError> {
    let key = EncodingKey::from_rsa_pem(private_key_pem)
        .map_err(|e| AuthError::InvalidKey(format!("Invalid private key: {e}")))?;

    let header = Header::new(Algorithm::RS256);

    encode(&header, claims, &key)
        .map_err(|e| AuthError::InvalidToken(format!("Encoding failed: {e}")))
}

/// Decode and validate a JWT token with default validation config.
///
/// # Arguments
///
/// * `token` - The JWT token string
/// * `public_key_pem` - PEM-encoded RSA public key
///
/// # Errors
///
/// Returns `AuthError::TokenExpired`, `AuthError::InvalidSignature` or
/// `AuthError::InvalidToken` depending on the failure.
pub fn decode_token(token: &str, public_key_pem: &[u8]) -> Result<JwtClaims, AuthError> {
    decode_token_with_config(token, public_key_pem, &ValidationConfig::default())
}

/// Decode and validate a JWT token with custom validation config.
pub fn decode_token_with_config(
    token: &str,
    public_key_pem: &[u8],
    config: &ValidationConfig,
) -> Result<JwtClaims, AuthError> {
    let key = DecodingKey::from_rsa_pem(public_key_pem)
        .map_err(|e| AuthError::InvalidKey(format!("Invalid public key: {e}")))?;

    let mut validation = Validation::new(Algorithm::RS256);
    validation.leeway = config.leeway;
    validation.validate_exp = config.validate_exp;

    // Only accept RS256
    validation.algorithms = vec![Algorithm::RS256];

    if let Some(ref iss) = config.issuer {
        validation.set_issuer(&[iss]);
    }

    if let Some(ref aud) = config.audience {
        validation.set_audience(aud);
    } else {
        validation.validate_aud = false;
    }

    let token_data: TokenData<JwtClaims> =
        decode(token, &key, &validation).map_err(map_jwt_error)?;

    Ok(token_data.claims)
}

/// Map jsonwebtoken errors to AuthError.
fn map_jwt_error(err: jsonwebtoken::errors::Error) -> AuthError {
    use jsonwebtoken::errors::ErrorKind;

    match err.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        ErrorKind::InvalidAlgorithm => AuthError::InvalidAlgorithm,
        ErrorKind::InvalidToken => AuthError::InvalidToken("Malformed token".to_string()),
        ErrorKind::Base64(_) => AuthError::InvalidToken("Invalid base64 encoding".to_string()),
        ErrorKind::Json(_) => AuthError::InvalidToken("Invalid claims JSON".to_string()),
        ErrorKind::InvalidIssuer => AuthError::InvalidToken("Invalid issuer".to_string()),
        ErrorKind::InvalidAudience => AuthError::InvalidToken("Invalid audience".to_string()),
        _ => AuthError::InvalidToken(err.to_string()),
    }
}
