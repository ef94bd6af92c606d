//! API Router with Swagger UI

use std::sync::Arc;

use axum::{
    http::HeaderValue,
    middleware,
    routing::{get, MethodRouter},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::UsuarioService;
use crate::config::CorsConfig;
use crate::interfaces::http::common::ErrorBody;
use crate::interfaces::http::modules::health::{self, HealthState};
use crate::interfaces::http::modules::request_id::request_id_middleware;
use crate::interfaces::http::modules::usuarios::{self, UsuarioHandlerState};

/// Collection path of the Usuario endpoint set
pub const USUARIOS_PATH: &str = "/api/usuario";

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::handlers::health_check,
        usuarios::handlers::list_usuarios,
        usuarios::handlers::get_usuario,
        usuarios::handlers::create_usuario,
        usuarios::handlers::update_usuario,
        usuarios::handlers::partial_update_usuario,
        usuarios::handlers::delete_usuario,
    ),
    components(
        schemas(
            ErrorBody,
            health::HealthResponse,
            health::ComponentHealth,
            usuarios::UsuarioDto,
            usuarios::UsuarioRequest,
            usuarios::PatchUsuarioRequest,
        )
    ),
    tags(
        (name = "Health", description = "Service health check endpoints"),
        (name = "Usuarios", description = "Usuario CRUD: list, retrieve, create, update, delete"),
    ),
    info(
        title = "Usuarios API",
        version = "1.0.0",
        description = "REST API for managing usuarios",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    usuario_service: Arc<UsuarioService>,
    db: DatabaseConnection,
    cors_config: &CorsConfig,
) -> Router {
    let usuario_state = UsuarioHandlerState { usuario_service };

    let collection: MethodRouter<UsuarioHandlerState> =
        get(usuarios::list_usuarios).post(usuarios::create_usuario);
    let item: MethodRouter<UsuarioHandlerState> = get(usuarios::get_usuario)
        .put(usuarios::update_usuario)
        .patch(usuarios::partial_update_usuario)
        .delete(usuarios::delete_usuario);

    // Served with and without the trailing slash
    let usuario_routes = Router::new()
        .route(USUARIOS_PATH, collection.clone())
        .route(&format!("{}/", USUARIOS_PATH), collection)
        .route(&format!("{}/{{id}}", USUARIOS_PATH), item.clone())
        .route(&format!("{}/{{id}}/", USUARIOS_PATH), item)
        .with_state(usuario_state);

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(HealthState::new(db));

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .merge(health_routes)
        .merge(usuario_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors_layer(cors_config))
        .layer(TraceLayer::new_for_http())
}

/// Any origin when none are configured, otherwise exactly the listed ones.
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.allowed_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}
