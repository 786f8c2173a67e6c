//! Simulated checkout.

use std::time::Duration;

use anyhow::Result;
use ayur_commerce::catalog::Catalog;
use ayur_commerce::checkout::{
    Bank, BillingAddress, CheckoutSimulator, PaymentMethod, PaymentMethodKind, PAYMENT_SUCCESS_MESSAGE,
};

use super::{cart_from_ids, CheckoutArgs};
use crate::context::Context;

fn payment_method(args: &CheckoutArgs) -> Result<PaymentMethod> {
    let method = match args.method.parse::<PaymentMethodKind>()? {
        PaymentMethodKind::Card => PaymentMethod::Card {
            number: "4111 1111 1111 1111".to_string(),
            expiry: "12/30".to_string(),
            cvv: "123".to_string(),
            name_on_card: "Demo Customer".to_string(),
        },
        PaymentMethodKind::Upi => PaymentMethod::Upi {
            vpa: args.vpa.clone().unwrap_or_else(|| "demo@upi".to_string()),
        },
        PaymentMethodKind::NetBanking => PaymentMethod::NetBanking {
            bank: args.bank.as_deref().map(str::parse::<Bank>).transpose()?.unwrap_or_default(),
        },
    };
    Ok(method)
}

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let catalog = Catalog::default_catalog();
    let mut cart = cart_from_ids(&catalog, &args.items)?;
    let method = payment_method(&args)?;
    let billing = BillingAddress::new("Demo Customer", "123 Main Street", "Mumbai", "400001", "Maharashtra");

    let delay = args
        .delay_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| ctx.config.checkout.delay());
    let simulator = CheckoutSimulator::new()
        .with_delay(delay)
        .with_tax_percent(ctx.config.checkout.tax_percent);

    ctx.output.debug(&format!("paying with {} after {:?}", method.summary(), delay));
    let spinner = ctx.output.spinner("Processing...");
    let result = simulator.pay(&mut cart, &method, &billing).await;
    spinner.finish_and_clear();
    let receipt = result?;

    if ctx.output.is_json() {
        ctx.output.json(&receipt);
        return Ok(());
    }

    ctx.output.success(PAYMENT_SUCCESS_MESSAGE);
    ctx.output.kv("order", receipt.order_id.as_str());
    ctx.output.kv("items", &receipt.summary.total_items.to_string());
    ctx.output.kv("subtotal", &receipt.summary.subtotal.display());
    ctx.output.kv("tax", &receipt.summary.tax.display());
    ctx.output.kv("total", &receipt.summary.total.display());
    ctx.output.kv("paid with", &receipt.method);
    ctx.output.kv("billing", &receipt.billing.one_line());
    Ok(())
}
