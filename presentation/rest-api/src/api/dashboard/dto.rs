use poem_openapi::Object;

use business::domain::auth::viewer::{Dashboard, DashboardAction};

use crate::api::auth::dto::IdentityResponse;

#[derive(Debug, Clone, Object)]
pub struct DashboardActionResponse {
    pub title: String,
    pub description: String,
}

impl From<DashboardAction> for DashboardActionResponse {
    fn from(action: DashboardAction) -> Self {
        Self {
            title: action.title.to_string(),
            description: action.description.to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct DashboardResponse {
    pub title: String,
    pub role_label: String,
    pub authenticated: bool,
    #[oai(skip_serializing_if_is_none)]
    pub user: Option<IdentityResponse>,
    pub actions: Vec<DashboardActionResponse>,
}

impl From<Dashboard> for DashboardResponse {
    fn from(dashboard: Dashboard) -> Self {
        Self {
            title: dashboard.title.to_string(),
            role_label: dashboard.role_label.to_string(),
            authenticated: dashboard.identity.is_some(),
            user: dashboard.identity.map(Into::into),
            actions: dashboard.actions.into_iter().map(Into::into).collect(),
        }
    }
}
