use async_trait::async_trait;
use chrono::Utc;
use sea_query::{Expr, Order, PostgresQueryBuilder, Query};
use sea_query_binder::SqlxBinder;
use tracing::{error, info};
use uuid::Uuid;

use crate::abstract_trait::StatementRepositoryTrait;
use crate::config::ConnectionPool;
use crate::domain::request::CreateStatementRequest;
use crate::model::statement::{OperationType, Statement};
use crate::schema::statement::Statements;
use crate::utils::AppError;

pub struct StatementRepository {
    db_pool: ConnectionPool,
}

impl StatementRepository {
    pub fn new(db_pool: ConnectionPool) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl StatementRepositoryTrait for StatementRepository {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Statement>, AppError> {
        info!("Getting statements for user: {user_id}");

        let (sql, values) = Query::select()
            .columns([
                Statements::StatementId,
                Statements::UserId,
                Statements::Amount,
                Statements::Description,
                Statements::StatementType,
                Statements::CreatedAt,
                Statements::UpdatedAt,
            ])
            .from(Statements::Table)
            .and_where(Expr::col(Statements::UserId).eq(user_id))
            .order_by(Statements::CreatedAt, Order::Asc)
            .build_sqlx(PostgresQueryBuilder);

        let statements = sqlx::query_as_with::<_, Statement, _>(&sql, values)
            .fetch_all(&self.db_pool)
            .await;

        match statements {
            Ok(statements) => {
                info!("Found {} statements for user {user_id}", statements.len());
                Ok(statements)
            }
            Err(e) => {
                error!("Error fetching statements for user {user_id}: {e}");
                Err(AppError::SqlxError(e))
            }
        }
    }

    async fn find_by_id_and_user(
        &self,
        statement_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Statement>, AppError> {
        info!("Finding statement {statement_id} for user {user_id}");

        let (sql, values) = Query::select()
            .columns([
                Statements::StatementId,
                Statements::UserId,
                Statements::Amount,
                Statements::Description,
                Statements::StatementType,
                Statements::CreatedAt,
                Statements::UpdatedAt,
            ])
            .from(Statements::Table)
            .and_where(Expr::col(Statements::StatementId).eq(statement_id))
            .and_where(Expr::col(Statements::UserId).eq(user_id))
            .build_sqlx(PostgresQueryBuilder);

        let statement = sqlx::query_as_with::<_, Statement, _>(&sql, values)
            .fetch_optional(&self.db_pool)
            .await?;

        Ok(statement)
    }

    async fn create(
        &self,
        user_id: Uuid,
        input: &CreateStatementRequest,
        statement_type: OperationType,
    ) -> Result<Statement, AppError> {
        let now = Utc::now();

        let (sql, values) = Query::insert()
            .into_table(Statements::Table)
            .columns([
                Statements::StatementId,
                Statements::UserId,
                Statements::Amount,
                Statements::Description,
                Statements::StatementType,
                Statements::CreatedAt,
                Statements::UpdatedAt,
            ])
            .values_panic([
                Uuid::new_v4().into(),
                user_id.into(),
                input.amount.into(),
                input.description.clone().into(),
                statement_type.as_str().into(),
                now.into(),
                now.into(),
            ])
            .returning_all()
            .build_sqlx(PostgresQueryBuilder);

        let result = sqlx::query_as_with::<_, Statement, _>(&sql, values)
            .fetch_one(&self.db_pool)
            .await;

        match result {
            Ok(statement) => {
                info!(
                    "Statement {} created for user {user_id}",
                    statement.statement_id
                );
                Ok(statement)
            }
            Err(e) => {
                error!("Error creating statement for user {user_id}: {e}");
                Err(AppError::SqlxError(e))
            }
        }
    }
}
