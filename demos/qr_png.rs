use std::fs;

use girocode::assemble::{OrderSnapshot, PaymentConfigBuilder, ReferenceType};
use girocode::qr;
use rust_decimal_macros::dec;

fn main() {
    env_logger::init();

    let config = PaymentConfigBuilder::new("ACME GmbH", "AT61 1904 3002 3457 3201")
        .reference_type(ReferenceType::Creditor)
        .bic("GIBAATWWXXX")
        .code_color("#1a1a2e")
        .background_color("#ffffff")
        .build();
    let order = OrderSnapshot::new("100000001", dec!(1299.90)).customer("John", "Doe");

    match qr::order_qr_png(&config, &order) {
        Some(png) => {
            fs::write("girocode.png", &png).expect("write girocode.png");
            println!("Wrote girocode.png ({} bytes)", png.len());
        }
        None => println!("Order does not qualify for an EPC QR code"),
    }

    if let Some(uri) = qr::order_qr_data_uri(&config, &order) {
        println!("Data URI ({} chars): {}...", uri.len(), &uri[..48]);
    }
}
