use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

use crate::{
    abstract_trait::{DynStatementRepository, DynUserRepository, StatementServiceTrait},
    domain::{
        request::CreateStatementRequest,
        response::{ApiResponse, BalanceResponse, StatementResponse},
    },
    model::statement::{OperationType, Statement},
    utils::AppError,
};

/// Sum of deposits minus sum of withdrawals. The balance is never stored,
/// it is recomputed from the full statement history on every call.
pub fn balance_of(statements: &[Statement]) -> f64 {
    statements
        .iter()
        .fold(0.0, |balance, statement| {
            match statement.statement_type.parse::<OperationType>() {
                Ok(OperationType::Deposit) => balance + statement.amount,
                Ok(OperationType::Withdraw) => balance - statement.amount,
                Err(()) => balance,
            }
        })
}

#[derive(Clone)]
pub struct StatementService {
    statement_repository: DynStatementRepository,
    user_repository: DynUserRepository,
}

impl std::fmt::Debug for StatementService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatementService")
            .field("statement_repository", &"DynStatementRepository")
            .field("user_repository", &"DynUserRepository")
            .finish()
    }
}

impl StatementService {
    pub fn new(
        statement_repository: DynStatementRepository,
        user_repository: DynUserRepository,
    ) -> Self {
        Self {
            statement_repository,
            user_repository,
        }
    }

    async fn ensure_user_exists(&self, user_id: Uuid) -> Result<(), AppError> {
        match self.user_repository.find_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => {
                error!("User with id {user_id} not found");
                Err(AppError::NotFound("User not found".to_string()))
            }
        }
    }
}

#[async_trait]
impl StatementServiceTrait for StatementService {
    async fn create_statement(
        &self,
        user_id: Uuid,
        input: &CreateStatementRequest,
        statement_type: OperationType,
    ) -> Result<ApiResponse<StatementResponse>, AppError> {
        info!(
            "Creating {statement_type} statement of {} for user {user_id}",
            input.amount
        );

        self.ensure_user_exists(user_id).await?;

        if statement_type == OperationType::Withdraw {
            let statements = self.statement_repository.find_by_user(user_id).await?;
            let balance = balance_of(&statements);

            if input.amount > balance {
                error!(
                    "Withdraw of {} rejected for user {user_id}: balance is {balance}",
                    input.amount
                );
                return Err(AppError::InsufficientFunds);
            }
        }

        let statement = self
            .statement_repository
            .create(user_id, input, statement_type)
            .await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Statement created successfully".to_string(),
            data: StatementResponse::from(statement),
        })
    }

    async fn get_balance(&self, user_id: Uuid) -> Result<ApiResponse<BalanceResponse>, AppError> {
        info!("Getting balance for user {user_id}");

        self.ensure_user_exists(user_id).await?;

        let statements = self.statement_repository.find_by_user(user_id).await?;
        let balance = balance_of(&statements);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Balance retrieved successfully".to_string(),
            data: BalanceResponse {
                statement: statements.into_iter().map(StatementResponse::from).collect(),
                balance,
            },
        })
    }

    async fn get_statement(
        &self,
        user_id: Uuid,
        statement_id: Uuid,
    ) -> Result<ApiResponse<StatementResponse>, AppError> {
        info!("Getting statement {statement_id} for user {user_id}");

        self.ensure_user_exists(user_id).await?;

        let statement = match self
            .statement_repository
            .find_by_id_and_user(statement_id, user_id)
            .await?
        {
            Some(statement) => statement,
            None => {
                error!("Statement {statement_id} not found for user {user_id}");
                return Err(AppError::NotFound("Statement not found".to_string()));
            }
        };

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Statement retrieved successfully".to_string(),
            data: StatementResponse::from(statement),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::{StatementRepositoryTrait, UserRepositoryTrait};
    use crate::domain::request::CreateUserRequest;
    use crate::model::user::User;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct InMemoryUserRepository {
        users: Mutex<HashMap<Uuid, User>>,
    }

    impl InMemoryUserRepository {
        fn insert(&self) -> Uuid {
            let now = Utc::now();
            let user = User {
                user_id: Uuid::new_v4(),
                name: "Guilherme".to_string(),
                email: "guilherme@email.com.br".to_string(),
                password: "hashed".to_string(),
                created_at: now,
                updated_at: now,
            };
            let id = user.user_id;
            self.users.lock().unwrap().insert(id, user);
            id
        }

        fn remove(&self, id: Uuid) {
            self.users.lock().unwrap().remove(&id);
        }
    }

    #[async_trait]
    impl UserRepositoryTrait for InMemoryUserRepository {
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

    #[derive(Default)]
    struct InMemoryStatementRepository {
        statements: Mutex<Vec<Statement>>,
    }

    impl InMemoryStatementRepository {
        fn len(&self) -> usize {
            self.statements.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl StatementRepositoryTrait for InMemoryStatementRepository {
        async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Statement>, AppError> {
            Ok(self
                .statements
                .lock()
                .unwrap()
                .iter()
                .filter(|s| s.user_id == user_id)
                .cloned()
                .collect())
        }

        async fn find_by_id_and_user(
            &self,
            statement_id: Uuid,
            user_id: Uuid,
        ) -> Result<Option<Statement>, AppError> {
            Ok(self
                .statements
                .lock()
                .unwrap()
                .iter()
                .find(|s| s.statement_id == statement_id && s.user_id == user_id)
                .cloned())
        }

        async fn create(
            &self,
            user_id: Uuid,
            input: &CreateStatementRequest,
            statement_type: OperationType,
        ) -> Result<Statement, AppError> {
            let now = Utc::now();
            let statement = Statement {
                statement_id: Uuid::new_v4(),
                user_id,
                amount: input.amount,
                description: input.description.clone(),
                statement_type: statement_type.as_str().to_string(),
                created_at: now,
                updated_at: now,
            };
            self.statements.lock().unwrap().push(statement.clone());
            Ok(statement)
        }
    }

    struct Fixture {
        service: StatementService,
        users: Arc<InMemoryUserRepository>,
        statements: Arc<InMemoryStatementRepository>,
        user_id: Uuid,
    }

    fn fixture() -> Fixture {
        let users = Arc::new(InMemoryUserRepository::default());
        let statements = Arc::new(InMemoryStatementRepository::default());
        let user_id = users.insert();
        let service = StatementService::new(statements.clone(), users.clone());
        Fixture {
            service,
            users,
            statements,
            user_id,
        }
    }

    fn request(amount: f64, description: &str) -> CreateStatementRequest {
        CreateStatementRequest {
            amount,
            description: description.to_string(),
        }
    }

    #[test]
    fn balance_of_empty_history_is_zero() {
        assert_eq!(balance_of(&[]), 0.0);
    }

    #[tokio::test]
    async fn deposit_creates_statement() {
        let f = fixture();

        let response = f
            .service
            .create_statement(f.user_id, &request(100.0, "Deposito de R$100"), OperationType::Deposit)
            .await
            .unwrap();

        assert_eq!(response.data.statement_type, "deposit");
        assert_eq!(response.data.amount, 100.0);
        assert_eq!(response.data.user_id, f.user_id);
    }

    #[tokio::test]
    async fn balance_is_deposits_minus_withdrawals() {
        let f = fixture();

        f.service
            .create_statement(f.user_id, &request(100.0, "Deposito de R$100"), OperationType::Deposit)
            .await
            .unwrap();
        f.service
            .create_statement(f.user_id, &request(50.0, "Saque de R$50"), OperationType::Withdraw)
            .await
            .unwrap();

        let response = f.service.get_balance(f.user_id).await.unwrap();

        assert_eq!(response.data.balance, 50.0);
        assert_eq!(response.data.statement.len(), 2);
        assert_eq!(response.data.statement[0].statement_type, "deposit");
        assert_eq!(response.data.statement[1].statement_type, "withdraw");
    }

    #[tokio::test]
    async fn balance_of_empty_statement_history_is_zero_over_api() {
        let f = fixture();

        let response = f.service.get_balance(f.user_id).await.unwrap();

        assert_eq!(response.data.balance, 0.0);
        assert!(response.data.statement.is_empty());
    }

    #[tokio::test]
    async fn overdraw_is_rejected_and_creates_no_statement() {
        let f = fixture();

        f.service
            .create_statement(f.user_id, &request(100.0, "Deposito de R$100"), OperationType::Deposit)
            .await
            .unwrap();

        let err = f
            .service
            .create_statement(f.user_id, &request(110.0, "Saque de R$110"), OperationType::Withdraw)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InsufficientFunds));
        assert_eq!(f.statements.len(), 1);
    }

    #[tokio::test]
    async fn withdraw_of_exact_balance_is_allowed() {
        let f = fixture();

        f.service
            .create_statement(f.user_id, &request(100.0, "Deposito de R$100"), OperationType::Deposit)
            .await
            .unwrap();

        let response = f
            .service
            .create_statement(f.user_id, &request(100.0, "Saque de R$100"), OperationType::Withdraw)
            .await
            .unwrap();

        assert_eq!(response.data.statement_type, "withdraw");

        let balance = f.service.get_balance(f.user_id).await.unwrap();
        assert_eq!(balance.data.balance, 0.0);
    }

    #[tokio::test]
    async fn operations_against_deleted_user_are_not_found() {
        let f = fixture();
        f.users.remove(f.user_id);

        let err = f
            .service
            .create_statement(f.user_id, &request(100.0, "Deposito de R$100"), OperationType::Deposit)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "User not found"));

        let err = f.service.get_balance(f.user_id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "User not found"));

        let err = f
            .service
            .get_statement(f.user_id, Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "User not found"));
    }

    #[tokio::test]
    async fn statement_lookup_returns_owned_statement() {
        let f = fixture();

        let created = f
            .service
            .create_statement(f.user_id, &request(100.0, "Deposito de R$100"), OperationType::Deposit)
            .await
            .unwrap();

        let response = f
            .service
            .get_statement(f.user_id, created.data.id)
            .await
            .unwrap();

        assert_eq!(response.data.id, created.data.id);
        assert_eq!(response.data.description, "Deposito de R$100");
    }

    #[tokio::test]
    async fn unknown_statement_id_is_not_found() {
        let f = fixture();

        let err = f
            .service
            .get_statement(f.user_id, Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Statement not found"));
    }
}
