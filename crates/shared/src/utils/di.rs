use std::sync::Arc;

use crate::{
    abstract_trait::{
        DynAuthService, DynHashing, DynJwtService, DynStatementRepository, DynStatementService,
        DynUserRepository,
    },
    config::ConnectionPool,
    repository::{statement::StatementRepository, user::UserRepository},
    service::{auth::AuthService, statement::StatementService},
};

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub statement_service: DynStatementService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"DynAuthService")
            .field("statement_service", &"DynStatementService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, hashing: DynHashing, jwt_config: DynJwtService) -> Self {
        let user_repository = Arc::new(UserRepository::new(pool.clone())) as DynUserRepository;

        let statement_repository =
            Arc::new(StatementRepository::new(pool.clone())) as DynStatementRepository;

        let auth_service = Arc::new(AuthService::new(
            user_repository.clone(),
            hashing,
            jwt_config,
        )) as DynAuthService;

        let statement_service = Arc::new(StatementService::new(
            statement_repository,
            user_repository,
        )) as DynStatementService;

        Self {
            auth_service,
            statement_service,
        }
    }
}
