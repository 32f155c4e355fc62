use async_trait::async_trait;

use crate::account::errors::AccountError;
use crate::account::models::NewUser;
use crate::account::models::User;

/// Persistence port for user accounts.
///
/// The store is an external collaborator; this is its whole surface. Email
/// uniqueness is the implementation's responsibility, not the service's.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user, assigning its id and creation timestamp.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Unique constraint violation on email
    /// * `RepositoryUnavailable` - Storage operation failed
    async fn create(&self, new_user: NewUser) -> Result<User, AccountError>;

    /// Look up a user by email. `None` means not found, not an error.
    ///
    /// # Errors
    /// * `RepositoryUnavailable` - Storage operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AccountError>;
}
