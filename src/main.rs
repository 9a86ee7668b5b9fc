//! Demo: walks an in-memory storefront through every workflow.

use checkout_recipe::config::StorefrontConfig;
use checkout_recipe::lifecycle::{setup_tracing, StorefrontSystem};
use checkout_recipe::model::{Cart, PaymentCredentials};
use checkout_recipe::storefront::calculate_discount;
use serde_json::json;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting storefront demo");

    let system = StorefrontSystem::in_memory(StorefrontConfig::from_env()).map_err(|e| e.to_string())?;
    let storefront = &system.storefront;

    let page = storefront.render_page().await;
    info!(%page, "Home page rendered");

    let span = tracing::info_span!("pricing");
    async {
        let price = storefront
            .price_in_currency(10.0, "EUR")
            .await
            .map_err(|e| e.to_string())?;
        info!(%price, "Converted price");

        let coupon_price = calculate_discount(120.0, "SAVE10").map_err(|e| e.to_string())?;
        info!(coupon_price, "Coupon applied");

        for destination in ["Tehran", "Atlantis"] {
            let shipping = storefront
                .shipping_info(destination)
                .await
                .map_err(|e| e.to_string())?;
            info!(destination, %shipping, "Shipping");
        }
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("checkout");
    async {
        let credentials = PaymentCredentials::new(json!({ "creditCardNumber": "4242424242424242" }));
        for total in [120.0, 5_000.0] {
            let result = storefront
                .submit_order(&Cart::new(total), &credentials)
                .await
                .map_err(|e| e.to_string())?;
            info!(total, ?result, "Order submitted");
        }
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("accounts");
    async {
        for email in ["alice@example.com", "not-an-email"] {
            let signed_up = storefront.sign_up(email).await.map_err(|e| e.to_string())?;
            info!(email, signed_up, "Signup attempted");
        }
        storefront
            .login("alice@example.com")
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(
        online = storefront.is_online(),
        discount = storefront.discount(),
        "Store status"
    );

    Ok(())
}
