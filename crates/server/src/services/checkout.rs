//! Cart validation, PSP routing, and order creation.
//!
//! All validation happens before any state mutation; the first failing
//! field is reported. No payment is initiated here — checkout persists the
//! order and returns the label of the provider that would be charged, with
//! the real PSP integration living behind the webhook port.

use findeasy_core::{CountryCode, Email, OrderId, OrderStatus, Psp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{Customer, Order, OrderItem};
use crate::services::generators::Generator;
use crate::store::JsonStore;

/// Checkout request body. Unknown fields are rejected at deserialization;
/// per-field constraints are checked in [`checkout`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckoutRequest {
    #[serde(default)]
    pub items: Vec<CheckoutItem>,
    #[serde(default)]
    pub currency: Option<String>,
    pub customer: CustomerInput,
}

/// One cart line as submitted by the client.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckoutItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub seller: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Customer fields as submitted by the client.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomerInput {
    pub email: String,
    pub country: String,
}

/// Order summary returned to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutSummary {
    pub ok: bool,
    #[serde(rename = "orderId")]
    pub order_id: OrderId,
    pub amount: Decimal,
    pub currency: String,
    pub psp: Psp,
}

/// Currency used when the cart does not name one.
const DEFAULT_CURRENCY: &str = "TRY";

/// Validate the request into persistable parts.
fn validate(request: CheckoutRequest) -> Result<(Vec<OrderItem>, String, Customer)> {
    if request.items.is_empty() {
        return Err(AppError::Validation(
            "items must contain at least 1 item".to_string(),
        ));
    }

    let mut items = Vec::with_capacity(request.items.len());
    for (index, item) in request.items.into_iter().enumerate() {
        let title = item
            .title
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::Validation(format!("items[{index}].title is required")))?;
        let price = item
            .price
            .ok_or_else(|| AppError::Validation(format!("items[{index}].price must be a number")))?;
        let seller = item
            .seller
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::Validation(format!("items[{index}].seller is required")))?;

        items.push(OrderItem {
            id: item.id,
            title,
            price,
            seller,
            image: item.image,
        });
    }

    let currency = match request.currency {
        Some(currency) if currency.is_empty() => {
            return Err(AppError::Validation(
                "currency is not allowed to be empty".to_string(),
            ));
        }
        Some(currency) => currency,
        None => DEFAULT_CURRENCY.to_string(),
    };

    let email = Email::parse(&request.customer.email)
        .map_err(|e| AppError::Validation(format!("customer.email: {e}")))?;
    let country = CountryCode::parse(&request.customer.country)
        .map_err(|e| AppError::Validation(format!("customer.country: {e}")))?;

    Ok((items, currency, Customer { email, country }))
}

/// Validate the cart, route the PSP by customer country, persist the order,
/// and return its summary.
///
/// # Errors
///
/// Returns `AppError::Validation` naming the first failing field, or a
/// store error if the save fails. No order is persisted on validation
/// failure.
pub async fn checkout(
    store: &JsonStore,
    generator: &dyn Generator,
    request: CheckoutRequest,
) -> Result<CheckoutSummary> {
    let (items, currency, customer) = validate(request)?;

    // Missing prices were rejected above; sum is total cart value.
    let amount: Decimal = items.iter().map(|item| item.price).sum();
    let psp = Psp::for_country(&customer.country);

    let order = Order {
        id: OrderId::new(format!("ord_{}", generator.suffix(10))),
        items,
        amount,
        currency: currency.clone(),
        customer,
        psp,
        status: OrderStatus::Created,
    };

    let summary = CheckoutSummary {
        ok: true,
        order_id: order.id.clone(),
        amount,
        currency,
        psp,
    };

    store.update(move |doc| doc.orders.push(order)).await?;

    tracing::info!(order = %summary.order_id, psp = %psp, %amount, "order created");
    Ok(summary)
}
