use std::sync::Arc;
use std::time::Duration;

use credentials::CredentialHasher;
use credentials::PasswordError;
use credentials::TokenSigner;

use crate::account::errors::AccountError;
use crate::account::models::Credentials;
use crate::account::models::NewUser;
use crate::account::models::Registration;
use crate::account::models::User;
use crate::account::ports::UserRepository;

/// Upper bound on any single repository call. The store is an external
/// collaborator; a hung connection should fail the request, not pin it.
const REPOSITORY_TIMEOUT: Duration = Duration::from_secs(5);

/// Authentication domain service.
///
/// Orchestrates registration and login over an injected repository and
/// token signer. Holds no per-request state; the signer is immutable after
/// startup, so the service is freely shared across request tasks.
pub struct AccountService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
    hasher: CredentialHasher,
    signer: Arc<TokenSigner>,
}

impl<R> AccountService<R>
where
    R: UserRepository,
{
    pub fn new(repository: Arc<R>, signer: Arc<TokenSigner>) -> Self {
        Self {
            repository,
            hasher: CredentialHasher::new(),
            signer,
        }
    }

    /// Register a new account.
    ///
    /// Hashes the password and hands everything else to the repository,
    /// which assigns the id. Fields are stored as given; uniqueness of the
    /// email is the repository's concern.
    pub async fn register(&self, registration: Registration) -> Result<User, AccountError> {
        let Registration {
            name,
            email,
            password,
        } = registration;

        let password_hash = self.hash_blocking(password).await?;

        let user = self
            .with_repository_timeout(self.repository.create(NewUser {
                name,
                email,
                password_hash,
            }))
            .await?;

        tracing::info!(user_id = %user.id, "Account registered");

        Ok(user)
    }

    /// Authenticate credentials and issue an access token.
    ///
    /// # Errors
    /// * `NotFound` - No account for this email; no hash comparison is made
    /// * `InvalidCredentials` - Password does not match the stored hash
    pub async fn login(&self, credentials: Credentials) -> Result<String, AccountError> {
        let Credentials { email, password } = credentials;

        let user = self
            .with_repository_timeout(self.repository.find_by_email(&email))
            .await?
            .ok_or_else(|| {
                tracing::debug!(%email, "Login attempt for unknown email");
                AccountError::NotFound(email.clone())
            })?;

        let matches = self
            .verify_blocking(password, user.password_hash.clone())
            .await?;

        if !matches {
            tracing::debug!(user_id = %user.id, "Login attempt with wrong password");
            return Err(AccountError::InvalidCredentials);
        }

        let token = self.signer.issue(&user.id.to_string())?;

        tracing::info!(user_id = %user.id, "Access token issued");

        Ok(token)
    }

    /// Run the work-factor-bound hash off the async workers.
    async fn hash_blocking(&self, password: String) -> Result<String, AccountError> {
        let hasher = self.hasher;

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| PasswordError::HashingFailed(format!("hashing task failed: {e}")))?
            .map_err(AccountError::from)
    }

    async fn verify_blocking(
        &self,
        password: String,
        stored_hash: String,
    ) -> Result<bool, AccountError> {
        let hasher = self.hasher;

        tokio::task::spawn_blocking(move || hasher.verify(&password, &stored_hash))
            .await
            .map_err(|e| PasswordError::HashingFailed(format!("verification task failed: {e}")))?
            .map_err(AccountError::from)
    }

    async fn with_repository_timeout<T>(
        &self,
        operation: impl std::future::Future<Output = Result<T, AccountError>>,
    ) -> Result<T, AccountError> {
        tokio::time::timeout(REPOSITORY_TIMEOUT, operation)
            .await
            .map_err(|_| AccountError::RepositoryUnavailable("repository call timed out".into()))?
    }
}
