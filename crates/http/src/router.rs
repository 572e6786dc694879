//! Router builder for the bookshelf HTTP server

use axum::{
    extract::Request,
    http::HeaderValue,
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use uuid::{Timestamp, Uuid};

use bookshelf_kernel::{settings::ServerSettings, ModuleRegistry};

use crate::error::AppError;

/// Builder for constructing the main HTTP router
pub struct RouterBuilder {
    router: Router,
}

impl RouterBuilder {
    /// Create a new router builder
    pub fn new() -> Self {
        Self {
            router: Router::new(),
        }
    }

    /// Add a route to the router
    pub fn route(mut self, path: &str, route: axum::routing::MethodRouter) -> Self {
        self.router = self.router.route(path, route);
        self
    }

    /// Mount a module's router under `mount_path`
    pub fn mount_module(mut self, mount_path: &str, module_router: Router) -> Self {
        self.router = self.router.nest(mount_path, module_router);
        self
    }

    /// Handler for requests no route matched
    pub fn with_fallback(mut self) -> Self {
        self.router = self.router.fallback(not_found);
        self
    }

    /// Add tracing middleware
    pub fn with_tracing(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().include_headers(true))
                .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
                .on_response(DefaultOnResponse::new().level(tracing::Level::INFO)),
        );
        self
    }

    /// Add CORS middleware
    pub fn with_cors(mut self) -> Self {
        self.router = self.router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
        self
    }

    /// Add request ID middleware; the id is echoed back on the response
    pub fn with_request_id(mut self) -> Self {
        self.router = self
            .router
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7));
        self
    }

    /// Add timeout middleware
    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.router = self
            .router
            .layer(TimeoutLayer::new(Duration::from_millis(timeout_ms)));
        self
    }

    /// Serve the merged OpenAPI document raw and through Swagger UI
    pub fn with_openapi(mut self, registry: &ModuleRegistry, server: &ServerSettings) -> Self {
        let openapi_spec = openapi_document(registry, server);

        let openapi_obj: utoipa::openapi::OpenApi = serde_json::from_value(openapi_spec.clone())
            .unwrap_or_else(|err| {
                tracing::warn!(error = %err, "merged OpenAPI document rejected by utoipa");
                utoipa::openapi::OpenApiBuilder::new()
                    .info(
                        utoipa::openapi::InfoBuilder::new()
                            .title("Bookshelf API")
                            .version(env!("CARGO_PKG_VERSION"))
                            .build(),
                    )
                    .build()
            });

        self.router = self.router.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", openapi_obj),
        );

        self.router = self.router.route(
            "/docs/openapi.json",
            get(move || async move { axum::Json(openapi_spec.clone()) }),
        );

        self
    }

    /// Build the final router
    pub fn build(self) -> Router {
        self.router
    }
}

impl Default for RouterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Merge every module's OpenAPI fragment into one document, prefixing
/// module paths with their mount path.
pub fn openapi_document(registry: &ModuleRegistry, server: &ServerSettings) -> serde_json::Value {
    let mut openapi_spec = serde_json::json!({
        "openapi": "3.1.0",
        "info": {
            "title": "Bookshelf API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "In-memory bookshelf management API"
        },
        "paths": {},
        "components": {
            "schemas": {}
        }
    });

    openapi_spec["components"]["schemas"]["ErrorResponse"] = serde_json::json!({
        "type": "object",
        "properties": {
            "status": {
                "type": "string",
                "enum": ["fail", "error"]
            },
            "message": {
                "type": "string"
            },
            "code": {
                "type": "string"
            }
        },
        "required": ["status", "message", "code"]
    });

    openapi_spec["paths"]["/healthz"] = serde_json::json!({
        "get": {
            "summary": "Health check",
            "responses": {
                "200": {
                    "description": "OK",
                    "content": {
                        "text/plain": {
                            "schema": {
                                "type": "string"
                            }
                        }
                    }
                }
            }
        }
    });

    for module in registry.modules() {
        let Some(module_spec) = module.openapi() else {
            continue;
        };
        let mount_path = server.module_path(module.name());

        if let Some(paths) = module_spec.get("paths").and_then(|p| p.as_object()) {
            for (path, path_item) in paths {
                let prefixed_path = if path == "/" {
                    mount_path.clone()
                } else {
                    format!("{}{}", mount_path, path)
                };
                openapi_spec["paths"][prefixed_path] = path_item.clone();
            }
        }

        if let Some(schemas) = module_spec
            .get("components")
            .and_then(|c| c.get("schemas"))
            .and_then(|s| s.as_object())
        {
            for (schema_name, schema_def) in schemas {
                openapi_spec["components"]["schemas"][schema_name] = schema_def.clone();
            }
        }
    }

    openapi_spec
}

/// Time-ordered request ids
#[derive(Clone, Copy)]
struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let timestamp = Timestamp::now(uuid::NoContext);
        let request_id = Uuid::new_v7(timestamp)
            .to_string()
            .parse::<HeaderValue>()
            .ok()?;
        Some(RequestId::new(request_id))
    }
}

/// Fallback for unmatched routes, rendered as a `fail` envelope
async fn not_found() -> AppError {
    AppError::not_found("Route not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    struct FragmentModule;

    #[async_trait::async_trait]
    impl bookshelf_kernel::Module for FragmentModule {
        fn name(&self) -> &'static str {
            "shelf"
        }

        fn openapi(&self) -> Option<serde_json::Value> {
            Some(serde_json::json!({
                "paths": {
                    "/": { "get": { "summary": "root" } },
                    "/{id}": { "get": { "summary": "item" } }
                },
                "components": { "schemas": { "Shelf": { "type": "object" } } }
            }))
        }
    }

    #[tokio::test]
    async fn test_module_mounting() {
        let module_router = Router::new().route("/", get(|| async { "module" }));

        let router = RouterBuilder::new()
            .mount_module("/test", module_router)
            .build();

        let response = router
            .oneshot(Request::get("/test").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_request_id_is_echoed() {
        let router = RouterBuilder::new()
            .route("/health", get(|| async { "ok" }))
            .with_tracing()
            .with_cors()
            .with_request_id()
            .with_timeout(5000)
            .build();

        let response = router
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let id = response.headers().get("x-request-id").unwrap();
        assert!(Uuid::parse_str(id.to_str().unwrap()).is_ok());
    }

    #[test]
    fn test_openapi_paths_are_prefixed() {
        let mut registry = ModuleRegistry::new();
        registry.register(std::sync::Arc::new(FragmentModule));

        let server = ServerSettings {
            api_prefix: "/api".to_string(),
            ..ServerSettings::default()
        };
        let doc = openapi_document(&registry, &server);

        assert!(doc["paths"]["/api/shelf"].is_object());
        assert!(doc["paths"]["/api/shelf/{id}"].is_object());
        assert!(doc["paths"]["/healthz"].is_object());
        assert!(doc["components"]["schemas"]["Shelf"].is_object());
        assert!(doc["components"]["schemas"]["ErrorResponse"].is_object());
    }
}
