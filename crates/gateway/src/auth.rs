//! Session tokens (HS256 JWT).

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use common::{AppResult, JwtConfig};
use domain::{Session, UserRole, SECONDS_PER_HOUR, TOKEN_TYPE_BEARER};

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Issued session token
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    pub access_token: String,
    /// Token type (always "Bearer")
    pub token_type: String,
    /// Token expiration time in seconds
    pub expires_in: i64,
}

/// Signs and verifies session tokens.
#[derive(Clone)]
pub struct TokenCodec {
    secret: String,
    expiration_hours: i64,
}

impl TokenCodec {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            expiration_hours: config.expiration_hours,
        }
    }

    /// Issue a token carrying `session`.
    pub fn issue(&self, session: &Session) -> AppResult<TokenResponse> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.expiration_hours);

        let claims = Claims {
            sub: session.user_id,
            email: session.email.clone(),
            role: session.role.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;

        Ok(TokenResponse {
            access_token: token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: self.expiration_hours * SECONDS_PER_HOUR,
        })
    }

    /// Verify a token and rebuild its session.
    ///
    /// A role outside the known set is rejected rather than downgraded.
    pub fn verify(&self, token: &str) -> AppResult<Session> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )?;
        let claims = data.claims;
        let role: UserRole = claims.role.parse()?;

        Ok(Session::new(claims.sub, claims.email, role))
    }
}
