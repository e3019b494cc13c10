use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Header, Path},
    payload::Json,
};
use uuid::Uuid;

use business::domain::cart::checkout::CheckoutOutcome;
use business::domain::cart::model::CartId;
use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::cart::use_cases::checkout::{CheckoutParams, CheckoutUseCase};
use business::domain::cart::use_cases::create::{CreateCartParams, CreateCartUseCase};
use business::domain::cart::use_cases::delete::{DeleteCartParams, DeleteCartUseCase};
use business::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use business::domain::cart::use_cases::remove_item::{
    RemoveCartItemParams, RemoveCartItemUseCase,
};
use business::domain::cart::use_cases::reset::{ResetCartParams, ResetCartUseCase};
use business::domain::cart::value_objects::PaymentMethod;
use business::domain::menu::model::MenuItemId;

use crate::api::cart::dto::{
    AddCartItemRequest, CartResponse, CheckoutRequest, OrderConfirmationResponse,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::JwtVerifier;
use crate::api::tags::ApiTags;

pub struct CartApi {
    create_use_case: Arc<dyn CreateCartUseCase>,
    get_use_case: Arc<dyn GetCartUseCase>,
    add_item_use_case: Arc<dyn AddCartItemUseCase>,
    remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
    reset_use_case: Arc<dyn ResetCartUseCase>,
    delete_use_case: Arc<dyn DeleteCartUseCase>,
    checkout_use_case: Arc<dyn CheckoutUseCase>,
    verifier: Arc<JwtVerifier>,
}

impl CartApi {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        create_use_case: Arc<dyn CreateCartUseCase>,
        get_use_case: Arc<dyn GetCartUseCase>,
        add_item_use_case: Arc<dyn AddCartItemUseCase>,
        remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
        reset_use_case: Arc<dyn ResetCartUseCase>,
        delete_use_case: Arc<dyn DeleteCartUseCase>,
        checkout_use_case: Arc<dyn CheckoutUseCase>,
        verifier: Arc<JwtVerifier>,
    ) -> Self {
        Self {
            create_use_case,
            get_use_case,
            add_item_use_case,
            remove_item_use_case,
            reset_use_case,
            delete_use_case,
            checkout_use_case,
            verifier,
        }
    }
}

fn parse_cart_id(raw: &str) -> Result<CartId, Json<ErrorResponse>> {
    Uuid::parse_str(raw)
        .map(CartId::from)
        .map_err(|_| ErrorResponse::new("ValidationError", "cart.invalid_id"))
}

/// Shopping carts, one per browsing session
#[OpenApi]
impl CartApi {
    /// Start a cart
    ///
    /// Signed-in callers own the new cart; anonymous carts are claimed at
    /// checkout.
    #[oai(path = "/carts", method = "post", tag = "ApiTags::Carts")]
    async fn create(
        &self,
        #[oai(name = "Authorization")] authorization: Header<Option<String>>,
    ) -> CreateCartResponse {
        let auth = self.verifier.resolve(authorization.0.as_deref());
        let params = CreateCartParams {
            owner: auth.identity().map(|i| i.user_id.clone()),
        };

        match self.create_use_case.execute(params).await {
            Ok(cart) => CreateCartResponse::Created(Json(cart.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CreateCartResponse::InternalError(json)
            }
        }
    }

    /// Get a cart
    #[oai(path = "/carts/:id", method = "get", tag = "ApiTags::Carts")]
    async fn get(&self, id: Path<String>) -> CartResult {
        let cart_id = match parse_cart_id(&id.0) {
            Ok(cart_id) => cart_id,
            Err(json) => return CartResult::BadRequest(json),
        };

        match self.get_use_case.execute(GetCartParams { cart_id }).await {
            Ok(cart) => CartResult::Ok(Json(cart.into())),
            Err(err) => CartResult::from_error(err.into_error_response()),
        }
    }

    /// End a cart's session
    ///
    /// Discards the cart and everything in it.
    #[oai(path = "/carts/:id", method = "delete", tag = "ApiTags::Carts")]
    async fn delete(&self, id: Path<String>) -> DeleteCartResponse {
        let cart_id = match parse_cart_id(&id.0) {
            Ok(cart_id) => cart_id,
            Err(json) => return DeleteCartResponse::BadRequest(json),
        };

        match self
            .delete_use_case
            .execute(DeleteCartParams { cart_id })
            .await
        {
            Ok(()) => DeleteCartResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteCartResponse::NotFound(json),
                    _ => DeleteCartResponse::InternalError(json),
                }
            }
        }
    }

    /// Add one of an item
    ///
    /// Increments the quantity when the item is already in the cart.
    #[oai(path = "/carts/:id/items", method = "post", tag = "ApiTags::Carts")]
    async fn add_item(&self, id: Path<String>, body: Json<AddCartItemRequest>) -> CartResult {
        let cart_id = match parse_cart_id(&id.0) {
            Ok(cart_id) => cart_id,
            Err(json) => return CartResult::BadRequest(json),
        };
        let params = AddCartItemParams {
            cart_id,
            item_id: MenuItemId::new(body.0.item_id.trim()),
        };

        match self.add_item_use_case.execute(params).await {
            Ok(cart) => CartResult::Ok(Json(cart.into())),
            Err(err) => CartResult::from_error(err.into_error_response()),
        }
    }

    /// Remove one of an item
    ///
    /// Drops the line when its quantity reaches zero. Removing an item that
    /// is not in the cart changes nothing.
    #[oai(
        path = "/carts/:id/items/:item_id",
        method = "delete",
        tag = "ApiTags::Carts"
    )]
    async fn remove_item(&self, id: Path<String>, item_id: Path<String>) -> CartResult {
        let cart_id = match parse_cart_id(&id.0) {
            Ok(cart_id) => cart_id,
            Err(json) => return CartResult::BadRequest(json),
        };
        let params = RemoveCartItemParams {
            cart_id,
            item_id: MenuItemId::new(item_id.0),
        };

        match self.remove_item_use_case.execute(params).await {
            Ok(cart) => CartResult::Ok(Json(cart.into())),
            Err(err) => CartResult::from_error(err.into_error_response()),
        }
    }

    /// Empty a cart
    #[oai(path = "/carts/:id/items", method = "delete", tag = "ApiTags::Carts")]
    async fn reset(&self, id: Path<String>) -> CartResult {
        let cart_id = match parse_cart_id(&id.0) {
            Ok(cart_id) => cart_id,
            Err(json) => return CartResult::BadRequest(json),
        };

        match self.reset_use_case.execute(ResetCartParams { cart_id }).await {
            Ok(cart) => CartResult::Ok(Json(cart.into())),
            Err(err) => CartResult::from_error(err.into_error_response()),
        }
    }

    /// Check out
    ///
    /// Prices the cart with the delivery fee and empties it. Anonymous
    /// callers get 401 and keep their cart; another user's cart is 403.
    #[oai(
        path = "/carts/:id/checkout",
        method = "post",
        tag = "ApiTags::Carts"
    )]
    async fn checkout(
        &self,
        id: Path<String>,
        #[oai(name = "Authorization")] authorization: Header<Option<String>>,
        body: Json<CheckoutRequest>,
    ) -> CheckoutResponse {
        let cart_id = match parse_cart_id(&id.0) {
            Ok(cart_id) => cart_id,
            Err(json) => return CheckoutResponse::BadRequest(json),
        };
        let requested = body.0.payment_method.as_deref().map(str::parse::<PaymentMethod>);
        let payment_method = match requested {
            None => PaymentMethod::default(),
            Some(Ok(method)) => method,
            Some(Err(_)) => {
                return CheckoutResponse::BadRequest(ErrorResponse::new(
                    "ValidationError",
                    "cart.invalid_payment_method",
                ));
            }
        };
        let params = CheckoutParams {
            cart_id,
            payment_method,
            auth: self.verifier.resolve(authorization.0.as_deref()),
        };

        match self.checkout_use_case.execute(params).await {
            Ok(CheckoutOutcome::Confirmed(confirmation)) => {
                CheckoutResponse::Ok(Json(confirmation.into()))
            }
            Ok(CheckoutOutcome::LoginRequired) => CheckoutResponse::LoginRequired(
                ErrorResponse::new("Unauthorized", "cart.login_required"),
            ),
            Ok(CheckoutOutcome::Forbidden) => CheckoutResponse::Forbidden(ErrorResponse::new(
                "Forbidden",
                "cart.not_owner",
            )),
            Ok(CheckoutOutcome::Empty) => {
                CheckoutResponse::Empty(ErrorResponse::new("ValidationError", "cart.empty"))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => CheckoutResponse::NotFound(json),
                    _ => CheckoutResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateCartResponse {
    #[oai(status = 201)]
    Created(Json<CartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartResult {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl CartResult {
    fn from_error((status, json): (poem::http::StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            404 => CartResult::NotFound(json),
            409 => CartResult::Conflict(json),
            _ => CartResult::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteCartResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CheckoutResponse {
    #[oai(status = 200)]
    Ok(Json<OrderConfirmationResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    LoginRequired(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    Empty(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
