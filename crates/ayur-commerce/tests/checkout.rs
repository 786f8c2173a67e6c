use ayur_commerce::prelude::*;
use ayur_commerce::checkout::PAYMENT_SUCCESS_MESSAGE;
use ayur_commerce::programs::find_bookable;
use std::time::Duration;

fn filled_cart() -> Cart {
    let catalog = Catalog::default_catalog();
    let mut cart = Cart::new();
    cart.add_item(catalog.get(&ItemId::new("herb-1")).unwrap().to_cart_item())
        .unwrap();
    cart.add_item(find_bookable(&ItemId::new("program-1")).unwrap())
        .unwrap();
    cart
}

fn billing() -> BillingAddress {
    BillingAddress::new("Priya Sharma", "12 Marine Drive", "Mumbai", "400001", "Maharashtra")
}

#[tokio::test]
async fn test_payment_clears_cart_and_issues_receipt() {
    let mut cart = filled_cart();
    let simulator = CheckoutSimulator::new().with_delay(Duration::from_millis(5));
    let method = PaymentMethod::Upi {
        vpa: "priya@upi".into(),
    };

    let receipt = simulator.pay(&mut cart, &method, &billing()).await.unwrap();

    assert!(cart.is_empty());
    assert_eq!(receipt.items.len(), 2);
    // 299 + 2,999 = 3,298; tax 593.64 rounds to 594
    assert_eq!(receipt.summary.subtotal, Money::inr(3298));
    assert_eq!(receipt.summary.tax, Money::inr(594));
    assert_eq!(receipt.summary.total.to_string(), "₹3,892");
    assert_eq!(receipt.method, "UPI (priya@upi)");
    assert!(receipt.order_id.as_str().starts_with("order_"));
    assert!(!PAYMENT_SUCCESS_MESSAGE.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_payment_waits_for_delay() {
    let mut cart = filled_cart();
    let simulator = CheckoutSimulator::new();
    let started = tokio::time::Instant::now();
    simulator
        .pay(&mut cart, &PaymentMethod::default(), &billing())
        .await
        .unwrap();
    assert!(started.elapsed() >= Duration::from_secs(2));
}

#[tokio::test]
async fn test_empty_cart_is_not_charged() {
    let mut cart = Cart::new();
    let err = CheckoutSimulator::new()
        .with_delay(Duration::ZERO)
        .pay(&mut cart, &PaymentMethod::NetBanking { bank: Bank::Hdfc }, &billing())
        .await
        .unwrap_err();
    assert_eq!(err, CommerceError::EmptyCart);
}

#[test]
fn test_marketplace_to_summary() {
    let catalog = Catalog::default_catalog();
    let mut cart = Cart::new();
    let query = CatalogQuery::new()
        .with_category("Heart Health")
        .with_sort(SortOption::PriceHighToLow);
    for product in catalog.query(&query) {
        cart.add_item(product.to_cart_item().with_quantity(2)).unwrap();
    }
    let summary = OrderSummary::for_cart(&cart).unwrap();
    assert_eq!(summary.subtotal, Money::inr(498));
    // 89.64
    assert_eq!(summary.tax, Money::inr(90));
    assert_eq!(summary.total, Money::inr(588));
}
