mod auth;
mod statement;
mod user;

use anyhow::Result;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use shared::state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::openapi::security::SecurityScheme;
use utoipa::{Modify, OpenApi};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::auth::auth_routes;
pub use self::statement::statements_routes;
pub use self::user::users_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        user::register_user_handler,
        auth::login_user_handler,
        auth::get_profile_handler,
        statement::deposit_statement_handler,
        statement::withdraw_statement_handler,
        statement::get_balance_handler,
        statement::get_statement_handler
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "User", description = "User registration endpoints"),
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Statement", description = "Deposit, withdrawal and balance endpoints")
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(utoipa::openapi::security::Http::new(
                utoipa::openapi::security::HttpAuthScheme::Bearer,
            )),
        );
    }
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(shared_state: Arc<AppState>) -> Router {
        let mut router = OpenApiRouter::with_openapi(ApiDoc::openapi());

        router = router.merge(users_routes(shared_state.clone()));
        router = router.merge(auth_routes(shared_state.clone()));
        router = router.merge(statements_routes(shared_state.clone()));

        let router = router
            .layer(TraceLayer::new_for_http())
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(1024 * 1024));

        let (router, api) = router.split_for_parts();

        router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(Arc::new(app_state));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("Server running on http://{}", listener.local_addr()?);
        info!("Swagger UI available at http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Received ctrl-c, shutting down");
    }
}
