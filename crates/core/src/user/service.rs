//! User registration and login service

use std::sync::Arc;

use crate::auth::{hash_password, verify_password, TokenSigner};
use crate::{Error, Result};

use super::model::User;
use super::repository::UserRepository;

/// Issued login token plus its expiry timestamp
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token: String,
    pub expires_at: usize,
}

/// Service for user registration, login and token verification
pub struct UserService {
    repo: Arc<dyn UserRepository>,
    signer: TokenSigner,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>, signer: TokenSigner) -> Self {
        Self { repo, signer }
    }

    /// Register a new user.
    ///
    /// The email is normalized before the uniqueness check so `Ana@X` and
    /// `ana@x` count as the same account.
    pub async fn register(&self, email: &str, password: &str) -> Result<User> {
        let email = normalize_email(email)?;
        validate_password(password)?;

        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(Error::Conflict(format!(
                "email '{email}' already registered"
            )));
        }

        let user = User {
            id: 0,
            email,
            password_hash: hash_password(password),
        };
        self.repo.save(user).await
    }

    /// Authenticate and issue a signed access token.
    ///
    /// Unknown email and wrong password fail identically.
    pub async fn login(&self, email: &str, password: &str) -> Result<AccessToken> {
        let email = normalize_email(email).map_err(|_| Error::Authentication)?;
        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(Error::Authentication)?;
        if !verify_password(&user.password_hash, password) {
            return Err(Error::Authentication);
        }

        let (token, expires_at) = self.signer.issue(user.id, &user.email)?;
        Ok(AccessToken { token, expires_at })
    }

    /// Resolve the user behind a bearer token.
    ///
    /// Stateless check: signature and expiry only, no revocation list.
    pub async fn verify(&self, token: &str) -> Result<User> {
        let claims = self.signer.decode(token)?;
        let user_id: i64 = claims.sub.parse().map_err(|_| Error::Authentication)?;
        self.repo.get(user_id).await?.ok_or(Error::Authentication)
    }
}

fn normalize_email(email: &str) -> Result<String> {
    let normalized = email.trim().to_lowercase();
    if normalized.is_empty() || !normalized.contains('@') {
        return Err(Error::Validation("invalid email".to_string()));
    }
    Ok(normalized)
}

fn validate_password(password: &str) -> Result<()> {
    if password.len() < 8 {
        return Err(Error::Validation(
            "password must be at least 8 characters".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::InMemoryUserStore;

    fn build_service() -> UserService {
        UserService::new(
            Arc::new(InMemoryUserStore::new()),
            TokenSigner::new("test-secret", 3600),
        )
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let service = build_service();

        let user = service
            .register("ana@example.com", "verysecurepw")
            .await
            .unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.email, "ana@example.com");
        assert_ne!(user.password_hash, "verysecurepw");
        assert!(user.password_hash.starts_with("v1$"));
    }

    #[tokio::test]
    async fn test_register_normalizes_email() {
        let service = build_service();

        let user = service
            .register("  Ana@Example.COM ", "verysecurepw")
            .await
            .unwrap();
        assert_eq!(user.email, "ana@example.com");

        // Same account under a different casing
        let result = service.register("ANA@example.com", "verysecurepw").await;
        assert!(matches!(result, Err(Error::Conflict(_))));
    }

    #[tokio::test]
    async fn test_register_rejects_invalid_input() {
        let service = build_service();

        let result = service.register("not-an-email", "verysecurepw").await;
        assert!(matches!(result, Err(Error::Validation(_))));

        let result = service.register("ana@example.com", "short").await;
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn test_duplicate_registration_conflicts() {
        let service = build_service();

        service
            .register("ana@example.com", "verysecurepw")
            .await
            .unwrap();
        let result = service.register("ana@example.com", "otherpassword").await;
        assert!(matches!(result, Err(Error::Conflict(_))));
    }

    #[tokio::test]
    async fn test_login_and_verify_roundtrip() {
        let service = build_service();

        let registered = service
            .register("ana@example.com", "verysecurepw")
            .await
            .unwrap();

        let access = service.login("ana@example.com", "verysecurepw").await.unwrap();
        let verified = service.verify(&access.token).await.unwrap();

        assert_eq!(verified.id, registered.id);
        assert_eq!(verified.email, "ana@example.com");
    }

    #[tokio::test]
    async fn test_login_failures_are_uniform() {
        let service = build_service();

        service
            .register("ana@example.com", "verysecurepw")
            .await
            .unwrap();

        let wrong_password = service.login("ana@example.com", "wrongpassword").await;
        assert!(matches!(wrong_password, Err(Error::Authentication)));

        let unknown_email = service.login("nadie@example.com", "verysecurepw").await;
        assert!(matches!(unknown_email, Err(Error::Authentication)));
    }

    #[tokio::test]
    async fn test_verify_rejects_tampered_token() {
        let service = build_service();

        service
            .register("ana@example.com", "verysecurepw")
            .await
            .unwrap();
        let access = service.login("ana@example.com", "verysecurepw").await.unwrap();

        let tampered = format!("{}x", access.token);
        assert!(matches!(
            service.verify(&tampered).await,
            Err(Error::Authentication)
        ));
    }
}
