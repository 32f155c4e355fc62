use std::sync::Arc;
use std::sync::Mutex;

use account_service::account::errors::AccountError;
use account_service::account::models::NewUser;
use account_service::account::models::User;
use account_service::account::models::UserId;
use account_service::account::ports::UserRepository;
use account_service::account::service::AccountService;
use account_service::inbound::http::router::create_router;
use async_trait::async_trait;
use chrono::Utc;
use credentials::TokenSigner;
use serde_json::json;
use uuid::Uuid;

pub const TEST_SECRET: &[u8] = b"integration_test_secret_32_bytes!!";

/// In-memory stand-in for the Postgres repository. Enforces the same email
/// uniqueness the migration does.
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
        }
    }

    pub fn snapshot(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AccountError> {
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|u| u.email == new_user.email) {
            return Err(AccountError::EmailAlreadyExists(new_user.email));
        }

        let user = User {
            id: UserId(Uuid::new_v4()),
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: Utc::now(),
        };
        users.push(user.clone());

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AccountError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }
}

/// Test application serving the real router on a random local port.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub users: Arc<InMemoryUserRepository>,
    pub token_signer: Arc<TokenSigner>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let users = Arc::new(InMemoryUserRepository::new());
        let token_signer = Arc::new(TokenSigner::new(TEST_SECRET));
        let account_service = Arc::new(AccountService::new(
            Arc::clone(&users),
            Arc::clone(&token_signer),
        ));

        let application = create_router(account_service, Arc::clone(&token_signer));
        tokio::spawn(async move {
            axum::serve(listener, application)
                .await
                .expect("Server failed");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            users,
            token_signer,
        }
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> reqwest::Response {
        self.api_client
            .post(format!("{}/register", self.address))
            .json(&json!({ "name": name, "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.api_client
            .post(format!("{}/login", self.address))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub fn get_restricted(&self) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}/restricted", self.address))
    }
}
