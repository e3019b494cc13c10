use async_trait::async_trait;

use crate::domain::auth::model::AuthState;
use crate::domain::cart::checkout::CheckoutOutcome;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartId;
use crate::domain::cart::value_objects::PaymentMethod;

pub struct CheckoutParams {
    pub cart_id: CartId,
    pub payment_method: PaymentMethod,
    pub auth: AuthState,
}

#[async_trait]
pub trait CheckoutUseCase: Send + Sync {
    async fn execute(&self, params: CheckoutParams) -> Result<CheckoutOutcome, CartError>;
}
