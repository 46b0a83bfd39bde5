//! Authentication service - Issues and verifies session tokens.
//!
//! Tokens are HS256 JWTs carrying the account id and role. Verification is
//! stateless: there is no revocation list.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::config::{Config, SECONDS_PER_HOUR, TOKEN_LIFETIME_HOURS, TOKEN_TYPE_BEARER};
use crate::domain::{Account, SecretHash, UserRole};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Account id
    pub sub: i32,
    pub role: UserRole,
    pub iat: i64,
    pub exp: i64,
}

/// Token response returned after successful authentication
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token lifetime in seconds
    #[schema(example = 86400)]
    pub expires_in: i64,
    pub role: UserRole,
    /// Name from the employee profile, absent when the account has none
    #[schema(example = "Jane Doe")]
    pub full_name: Option<String>,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check credentials and issue a session token.
    async fn issue_token(&self, email: &str, secret: &str) -> AppResult<TokenResponse>;

    /// Verify a session token and extract its claims.
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

fn generate_token(account: &Account, config: &Config) -> AppResult<(String, i64)> {
    let now = Utc::now();
    let lifetime = Duration::hours(TOKEN_LIFETIME_HOURS);

    let claims = Claims {
        sub: account.id,
        role: account.role,
        iat: now.timestamp(),
        exp: (now + lifetime).timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )?;

    Ok((token, TOKEN_LIFETIME_HOURS * SECONDS_PER_HOUR))
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    config: Config,
}

impl<U: UnitOfWork> Authenticator<U> {
    pub fn new(uow: Arc<U>, config: Config) -> Self {
        Self { uow, config }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn issue_token(&self, email: &str, secret: &str) -> AppResult<TokenResponse> {
        let account = self.uow.accounts().find_by_email(email).await?;

        // Verify against a stand-in hash when the email is unknown so both
        // failure paths take the same time.
        let stored = match &account {
            Some(account) => SecretHash::from_stored(account.secret_hash.clone()),
            None => SecretHash::dummy(),
        };
        let secret_valid = stored.verify(secret);

        let account = match account {
            Some(account) if secret_valid => account,
            _ => {
                tracing::debug!("Login rejected for {}", email);
                return Err(AppError::InvalidCredentials);
            }
        };

        let full_name = self
            .uow
            .employees()
            .find_by_account(account.id)
            .await?
            .map(|employee| employee.full_name);

        let (token, expires_in) = generate_token(&account, &self.config)?;
        tracing::info!(account_id = account.id, role = %account.role, "Session token issued");

        Ok(TokenResponse {
            token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in,
            role: account.role,
            full_name,
        })
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret_bytes()),
            &validation,
        )?;

        Ok(token_data.claims)
    }
}
