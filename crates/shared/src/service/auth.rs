use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

use crate::{
    abstract_trait::{AuthServiceTrait, DynHashing, DynJwtService, DynUserRepository},
    domain::{
        request::{CreateUserRequest, LoginRequest, RegisterRequest},
        response::{ApiResponse, LoginResponse, UserResponse},
    },
    utils::AppError,
};

#[derive(Clone)]
pub struct AuthService {
    repository: DynUserRepository,
    hashing: DynHashing,
    jwt_config: DynJwtService,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("repository", &"DynUserRepository")
            .field("hashing", &"DynHashing")
            .field("jwt_config", &"DynJwtService")
            .finish()
    }
}

impl AuthService {
    pub fn new(repository: DynUserRepository, hashing: DynHashing, jwt_config: DynJwtService) -> Self {
        Self {
            repository,
            hashing,
            jwt_config,
        }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn register_user(
        &self,
        input: &RegisterRequest,
    ) -> Result<ApiResponse<UserResponse>, AppError> {
        info!("Registering user with email: {}", input.email);

        if self.repository.find_by_email_exists(&input.email).await? {
            error!("User with email {} already exists", input.email);
            return Err(AppError::UserAlreadyExists);
        }

        let hashed_password = match self.hashing.hash_password(&input.password).await {
            Ok(hashed) => hashed,
            Err(e) => {
                error!("Password hashing failed: {e}");
                return Err(AppError::HashingError(e));
            }
        };

        let create_user_request = CreateUserRequest {
            name: input.name.clone(),
            email: input.email.clone(),
            password: hashed_password,
        };

        let user = self.repository.create_user(&create_user_request).await?;

        info!("User registered with id: {}", user.user_id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "User registered successfully".to_string(),
            data: UserResponse::from(user),
        })
    }

    async fn login_user(
        &self,
        input: &LoginRequest,
    ) -> Result<ApiResponse<LoginResponse>, AppError> {
        info!("Login attempt for email: {}", input.email);

        // Unknown email and wrong password deliberately collapse into the
        // same error so the response never reveals which one it was.
        let user = match self.repository.find_by_email(&input.email).await? {
            Some(user) => user,
            None => {
                error!("Login failed for {}: unknown email", input.email);
                return Err(AppError::InvalidCredentials);
            }
        };

        if self
            .hashing
            .compare_password(&user.password, &input.password)
            .await
            .is_err()
        {
            error!("Login failed for {}: password mismatch", input.email);
            return Err(AppError::InvalidCredentials);
        }

        let token = self.jwt_config.generate_token(user.user_id)?;

        info!("User {} logged in", user.user_id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Login successful".to_string(),
            data: LoginResponse {
                user: UserResponse::from(user),
                token,
            },
        })
    }

    async fn get_me(&self, id: Uuid) -> Result<ApiResponse<UserResponse>, AppError> {
        info!("Fetching profile for user: {id}");

        let user = match self.repository.find_by_id(id).await? {
            Some(user) => user,
            None => {
                error!("User with id {id} not found");
                return Err(AppError::NotFound("User not found".to_string()));
            }
        };

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "User profile retrieved successfully".to_string(),
            data: UserResponse::from(user),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::user::UserRepositoryTrait;
    use crate::config::{Hashing, JwtConfig};
    use crate::model::user::User;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct InMemoryUserRepository {
        users: Mutex<HashMap<Uuid, User>>,
    }

    impl InMemoryUserRepository {
        fn remove(&self, id: Uuid) {
            self.users.lock().unwrap().remove(&id);
        }
    }

    #[async_trait]
    impl crate::abstract_trait::UserRepositoryTrait for InMemoryUserRepository {
        async fn find_by_email_exists(&self, email: &str) -> Result<bool, AppError> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .values()
                .any(|u| u.email == email))
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .values()
                .find(|u| u.email == email)
                .cloned())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
            Ok(self.users.lock().unwrap().get(&id).cloned())
        }

        async fn create_user(&self, input: &CreateUserRequest) -> Result<User, AppError> {
            let now = Utc::now();
            let user = User {
                user_id: Uuid::new_v4(),
                name: input.name.clone(),
                email: input.email.clone(),
                password: input.password.clone(),
                created_at: now,
                updated_at: now,
            };
            self.users
                .lock()
                .unwrap()
                .insert(user.user_id, user.clone());
            Ok(user)
        }
    }

    fn service() -> (AuthService, Arc<InMemoryUserRepository>) {
        let repository = Arc::new(InMemoryUserRepository::default());
        let service = AuthService::new(
            repository.clone(),
            Arc::new(Hashing::new()),
            Arc::new(JwtConfig::new("test-secret")),
        );
        (service, repository)
    }

    fn register_request() -> RegisterRequest {
        RegisterRequest {
            name: "Guilherme".to_string(),
            email: "guilherme@email.com.br".to_string(),
            password: "12344321".to_string(),
        }
    }

    #[tokio::test]
    async fn register_creates_user_without_leaking_password() {
        let (service, _) = service();

        let response = service.register_user(&register_request()).await.unwrap();

        assert_eq!(response.status, "success");
        assert_eq!(response.data.email, "guilherme@email.com.br");
        assert_eq!(response.data.name, "Guilherme");
    }

    #[tokio::test]
    async fn register_stores_hash_not_plaintext() {
        let (service, repository) = service();

        service.register_user(&register_request()).await.unwrap();

        let stored = repository
            .find_by_email("guilherme@email.com.br")
            .await
            .unwrap()
            .unwrap();
        assert_ne!(stored.password, "12344321");
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let (service, _) = service();

        service.register_user(&register_request()).await.unwrap();
        let err = service.register_user(&register_request()).await.unwrap_err();

        assert!(matches!(err, AppError::UserAlreadyExists));
    }

    #[tokio::test]
    async fn login_returns_user_and_token() {
        let (service, _) = service();
        service.register_user(&register_request()).await.unwrap();

        let response = service
            .login_user(&LoginRequest {
                email: "guilherme@email.com.br".to_string(),
                password: "12344321".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.data.user.email, "guilherme@email.com.br");
        assert!(!response.data.token.is_empty());
    }

    #[tokio::test]
    async fn login_with_unknown_email_is_invalid_credentials() {
        let (service, _) = service();

        let err = service
            .login_user(&LoginRequest {
                email: "nobody@email.com.br".to_string(),
                password: "12344321".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn login_with_wrong_password_is_invalid_credentials() {
        let (service, _) = service();
        service.register_user(&register_request()).await.unwrap();

        let err = service
            .login_user(&LoginRequest {
                email: "guilherme@email.com.br".to_string(),
                password: "wrong-password".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn profile_of_deleted_user_is_not_found() {
        let (service, repository) = service();
        let registered = service.register_user(&register_request()).await.unwrap();

        repository.remove(registered.data.id);

        let err = service.get_me(registered.data.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "User not found"));
    }
}
