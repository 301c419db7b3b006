use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        request::CreateStatementRequest,
        response::{ApiResponse, BalanceResponse, StatementResponse},
    },
    model::statement::{OperationType, Statement},
    utils::AppError,
};

pub type DynStatementRepository = Arc<dyn StatementRepositoryTrait + Send + Sync>;
pub type DynStatementService = Arc<dyn StatementServiceTrait + Send + Sync>;

#[async_trait]
pub trait StatementRepositoryTrait {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Statement>, AppError>;
    async fn find_by_id_and_user(
        &self,
        statement_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Statement>, AppError>;
    async fn create(
        &self,
        user_id: Uuid,
        input: &CreateStatementRequest,
        statement_type: OperationType,
    ) -> Result<Statement, AppError>;
}

#[async_trait]
pub trait StatementServiceTrait {
    async fn create_statement(
        &self,
        user_id: Uuid,
        input: &CreateStatementRequest,
        statement_type: OperationType,
    ) -> Result<ApiResponse<StatementResponse>, AppError>;
    async fn get_balance(&self, user_id: Uuid) -> Result<ApiResponse<BalanceResponse>, AppError>;
    async fn get_statement(
        &self,
        user_id: Uuid,
        statement_id: Uuid,
    ) -> Result<ApiResponse<StatementResponse>, AppError>;
}
