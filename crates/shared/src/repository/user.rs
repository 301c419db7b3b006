use async_trait::async_trait;
use chrono::Utc;
use sea_query::{Expr, PostgresQueryBuilder, Query};
use sea_query_binder::SqlxBinder;
use tracing::{error, info};
use uuid::Uuid;

use crate::abstract_trait::UserRepositoryTrait;
use crate::config::ConnectionPool;
use crate::domain::request::CreateUserRequest;
use crate::model::user::User;
use crate::schema::user::Users;
use crate::utils::AppError;

pub struct UserRepository {
    db_pool: ConnectionPool,
}

impl UserRepository {
    pub fn new(db_pool: ConnectionPool) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn find_by_email_exists(&self, email: &str) -> Result<bool, AppError> {
        let (sql, values) = Query::select()
            .expr(Expr::col(Users::UserId).count())
            .from(Users::Table)
            .and_where(Expr::col(Users::Email).eq(email))
            .build_sqlx(PostgresQueryBuilder);

        let count: i64 = sqlx::query_scalar_with(&sql, values)
            .fetch_one(&self.db_pool)
            .await?;

        Ok(count > 0)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        info!("Finding user by email: {email}");

        let (sql, values) = Query::select()
            .columns([
                Users::UserId,
                Users::Name,
                Users::Email,
                Users::Password,
                Users::CreatedAt,
                Users::UpdatedAt,
            ])
            .from(Users::Table)
            .and_where(Expr::col(Users::Email).eq(email))
            .build_sqlx(PostgresQueryBuilder);

        let user = sqlx::query_as_with::<_, User, _>(&sql, values)
            .fetch_optional(&self.db_pool)
            .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        info!("Finding user by id: {id}");

        let (sql, values) = Query::select()
            .columns([
                Users::UserId,
                Users::Name,
                Users::Email,
                Users::Password,
                Users::CreatedAt,
                Users::UpdatedAt,
            ])
            .from(Users::Table)
            .and_where(Expr::col(Users::UserId).eq(id))
            .build_sqlx(PostgresQueryBuilder);

        let user = sqlx::query_as_with::<_, User, _>(&sql, values)
            .fetch_optional(&self.db_pool)
            .await?;

        Ok(user)
    }

    async fn create_user(&self, input: &CreateUserRequest) -> Result<User, AppError> {
        let now = Utc::now();

        let (sql, values) = Query::insert()
            .into_table(Users::Table)
            .columns([
                Users::UserId,
                Users::Name,
                Users::Email,
                Users::Password,
                Users::CreatedAt,
                Users::UpdatedAt,
            ])
            .values_panic([
                Uuid::new_v4().into(),
                input.name.clone().into(),
                input.email.clone().into(),
                input.password.clone().into(),
                now.into(),
                now.into(),
            ])
            .returning_all()
            .build_sqlx(PostgresQueryBuilder);

        let result = sqlx::query_as_with::<_, User, _>(&sql, values)
            .fetch_one(&self.db_pool)
            .await;

        match result {
            Ok(user) => {
                info!("User created with id: {}", user.user_id);
                Ok(user)
            }
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                // Lost the race against a concurrent registration for the
                // same email; the pre-insert existence check cannot see it.
                error!("Unique violation creating user: {db_err}");
                Err(AppError::UserAlreadyExists)
            }
            Err(e) => {
                error!("Error creating user: {e}");
                Err(AppError::SqlxError(e))
            }
        }
    }
}
