use crate::model::statement::Statement;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, Serialize, ToSchema, Clone)]
pub struct StatementResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: f64,
    pub description: String,
    #[serde(rename = "type")]
    pub statement_type: String,
    #[schema(format = "date-time")]
    pub created_at: DateTime<Utc>,
    #[schema(format = "date-time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Statement> for StatementResponse {
    fn from(value: Statement) -> Self {
        StatementResponse {
            id: value.statement_id,
            user_id: value.user_id,
            amount: value.amount,
            description: value.description,
            statement_type: value.statement_type,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// Balance is always derived from the statement history, never stored.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct BalanceResponse {
    pub statement: Vec<StatementResponse>,
    pub balance: f64,
}
