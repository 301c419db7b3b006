use sea_query::Iden;

#[derive(Debug, Iden)]
pub enum Statements {
    Table,
    StatementId,
    UserId,
    Amount,
    Description,
    StatementType,
    CreatedAt,
    UpdatedAt,
}
