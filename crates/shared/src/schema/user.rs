use sea_query::Iden;

#[derive(Debug, Iden)]
pub enum Users {
    Table,
    UserId,
    Name,
    Email,
    Password,
    CreatedAt,
    UpdatedAt,
}
