//! A visitor signs in, fills a cart, sees it rendered and pays.

use ayurcare::prelude::*;
use ayurcare::store::MockTransport;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

fn auth_client() -> (AuthClient, Arc<MockTransport>) {
    let transport = Arc::new(MockTransport::new());
    let store = StoreClient::with_transport(
        StoreConfig::new("https://project.example.co", "anon-key"),
        transport.clone(),
    );
    (AuthClient::new(store), transport)
}

#[tokio::test]
async fn test_sign_in_shop_and_pay() {
    let (auth, transport) = auth_client();
    transport.respond(
        200,
        json!({
            "access_token": "user-jwt",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "refresh-1",
            "user": {
                "id": "0d6f4c1e-8a3b-4c1d-9e2f-3a4b5c6d7e8f",
                "email": "priya@example.com",
                "user_metadata": { "full_name": "Priya Sharma" },
            },
        }),
    );
    auth.sign_in_with_password("priya@example.com", "pw")
        .await
        .unwrap();

    let catalog = Catalog::default_catalog();
    let mut cart = Cart::new();
    for product in catalog.query(&CatalogQuery::new().with_category("Immunity")) {
        cart.add_item(product.to_cart_item()).unwrap();
    }
    cart.add_item(treatment_programs()[3].to_cart_item()).unwrap();

    let home = render(Route::Home, &ViewContext::new(auth.state().context(), &cart, &catalog));
    assert!(home.html.contains("Priya Sharma"));
    assert!(home.html.contains(r#"href="/marketplace">Explore Marketplace"#));

    let payment = render(
        Route::Payment,
        &ViewContext::new(auth.state().context(), &cart, &catalog),
    );
    // 349 + 2,799 = 3,148; tax 566.64 rounds to 567
    assert!(payment.html.contains("Pay ₹3,715"));

    let receipt = CheckoutSimulator::new()
        .with_delay(Duration::from_millis(1))
        .pay(
            &mut cart,
            &PaymentMethod::NetBanking { bank: Bank::Icici },
            &BillingAddress::new("Priya Sharma", "12 Marine Drive", "Mumbai", "400001", "Maharashtra"),
        )
        .await
        .unwrap();
    assert_eq!(receipt.summary.total, Money::inr(3715));
    assert!(cart.is_empty());

    let after = render(Route::Cart, &ViewContext::new(auth.state().context(), &cart, &catalog));
    assert!(after.html.contains("Your cart is empty"));
}

#[tokio::test]
async fn test_signed_out_home_sends_ctas_to_auth() {
    let (auth, _transport) = auth_client();
    let catalog = Catalog::default_catalog();
    let cart = Cart::new();
    let page = render_path("/", &ViewContext::new(auth.state().context(), &cart, &catalog));
    assert!(page.html.contains(r#"href="/auth">Explore Marketplace"#));
}
