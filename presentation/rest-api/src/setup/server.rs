use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing,
};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    /// All routes plus the OpenAPI docs, without transport middleware.
    pub fn endpoint(container: DependencyContainer, server_url: &str) -> impl Endpoint + use<> {
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.menu_api,
                container.cart_api,
                container.auth_api,
                container.dashboard_api,
                container.order_api,
            ),
            "Campus Eats API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(server_url);
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .data(container.verifier)
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let server_url = format!("http://{}", addr);
        let app = Self::endpoint(container, &server_url)
            .with(config.cors)
            .with(Tracing);

        tracing::info!("Server running at {}", server_url);
        tracing::info!("Swagger UI at {}/docs", server_url);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
