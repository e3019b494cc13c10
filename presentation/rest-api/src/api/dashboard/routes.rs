use std::sync::Arc;

use poem_openapi::{OpenApi, param::Header, payload::Json};

use business::domain::auth::viewer::Viewer;

use crate::api::dashboard::dto::DashboardResponse;
use crate::api::security::JwtVerifier;
use crate::api::tags::ApiTags;

pub struct DashboardApi {
    verifier: Arc<JwtVerifier>,
}

impl DashboardApi {
    pub fn new(verifier: Arc<JwtVerifier>) -> Self {
        Self { verifier }
    }
}

#[OpenApi]
impl DashboardApi {
    /// Role-aware dashboard
    ///
    /// Students and staff get different quick actions; anonymous callers
    /// get the "Not Authenticated" view.
    #[oai(path = "/dashboard", method = "get", tag = "ApiTags::Dashboard")]
    async fn dashboard(
        &self,
        #[oai(name = "Authorization")] authorization: Header<Option<String>>,
    ) -> Json<DashboardResponse> {
        let auth = self.verifier.resolve(authorization.0.as_deref());
        Json(Viewer::from(&auth).dashboard().into())
    }
}
