use std::sync::Arc;

use crate::{
    abstract_trait::{DynHashing, DynJwtService},
    config::{ConnectionPool, Hashing, JwtConfig},
    utils::DependenciesInject,
};

#[derive(Clone, Debug)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub jwt_config: DynJwtService,
}

impl AppState {
    pub fn new(pool: ConnectionPool, jwt_secret: &str) -> Self {
        let jwt_config = Arc::new(JwtConfig::new(jwt_secret)) as DynJwtService;
        let hashing = Arc::new(Hashing::new()) as DynHashing;

        let di_container = DependenciesInject::new(pool, hashing, jwt_config.clone());

        Self {
            di_container,
            jwt_config,
        }
    }
}
