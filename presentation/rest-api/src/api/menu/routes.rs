use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::menu::model::OutletId;
use business::domain::menu::use_cases::browse::{BrowseMenuParams, BrowseMenuUseCase};
use business::domain::menu::use_cases::list_outlets::ListOutletsUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::menu::dto::{MenuPageResponse, OutletResponse};
use crate::api::tags::ApiTags;

pub struct MenuApi {
    list_outlets_use_case: Arc<dyn ListOutletsUseCase>,
    browse_use_case: Arc<dyn BrowseMenuUseCase>,
}

impl MenuApi {
    pub fn new(
        list_outlets_use_case: Arc<dyn ListOutletsUseCase>,
        browse_use_case: Arc<dyn BrowseMenuUseCase>,
    ) -> Self {
        Self {
            list_outlets_use_case,
            browse_use_case,
        }
    }
}

/// Outlets and their menus
#[OpenApi]
impl MenuApi {
    /// List outlets
    ///
    /// Every campus outlet, including the ones that are not open yet.
    #[oai(path = "/outlets", method = "get", tag = "ApiTags::Menu")]
    async fn list_outlets(&self) -> ListOutletsResponse {
        match self.list_outlets_use_case.execute().await {
            Ok(outlets) => {
                ListOutletsResponse::Ok(Json(outlets.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListOutletsResponse::InternalError(json)
            }
        }
    }

    /// Browse a menu
    ///
    /// Returns one outlet's items filtered by category. Defaults to
    /// Kathi Junction and the "all" category.
    #[oai(path = "/menu", method = "get", tag = "ApiTags::Menu")]
    async fn browse(
        &self,
        outlet: Query<Option<String>>,
        category: Query<Option<String>>,
    ) -> BrowseMenuResponse {
        let params = BrowseMenuParams {
            outlet: outlet
                .0
                .filter(|o| !o.trim().is_empty())
                .map(|o| OutletId::new(o.trim())),
            category: category.0,
        };

        match self.browse_use_case.execute(params).await {
            Ok(page) => BrowseMenuResponse::Ok(Json(page.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => BrowseMenuResponse::NotFound(json),
                    409 => BrowseMenuResponse::ComingSoon(json),
                    _ => BrowseMenuResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListOutletsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OutletResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum BrowseMenuResponse {
    #[oai(status = 200)]
    Ok(Json<MenuPageResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    ComingSoon(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
