use girocode::assemble::{
    OrderSnapshot, PaymentConfigBuilder, ReferenceType, build_payload, check_prerequisites,
};
use rust_decimal_macros::dec;

fn main() {
    env_logger::init();

    let config = PaymentConfigBuilder::new("ACME GmbH", "AT61 1904 3002 3457 3201")
        .reference_type(ReferenceType::Payment)
        .payment_reference("Order %orderNumber% by %firstName% %lastName%")
        .bic("GIBAATWWXXX")
        .customer_hint("Scan with your banking app")
        .build();

    // A qualifying order, a free order, and one past the amount cap
    let orders = [
        OrderSnapshot::new("100000001", dec!(1299.90)).customer("John", "Doe"),
        OrderSnapshot::new("100000002", dec!(0)),
        OrderSnapshot::new("100000003", dec!(1000000000)),
    ];

    for order in &orders {
        print!("Order #{} (total {}): ", order.increment_id, order.grand_total);
        match check_prerequisites(&config, order) {
            Ok(()) => println!("renderable"),
            Err(reason) => println!("skipped ({})", reason),
        }
    }

    let payload = build_payload(&config, &orders[0]).expect("payload should build");
    println!("---");
    println!("{}", payload);
}
