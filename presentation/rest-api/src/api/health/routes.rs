use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};

use crate::api::tags::ApiTags;

#[derive(Debug, Clone, Object)]
pub struct HealthCheckResponse {
    /// "healthy" while the process serves requests
    pub status: String,
    /// Current server time, RFC 3339
    pub timestamp: String,
    pub version: String,
}

pub struct HealthApi;

#[OpenApi]
impl HealthApi {
    /// Liveness probe
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}
