use girocode::epc::{CharacterSet, EpcPayloadBuilder};
use girocode::iban;
use rust_decimal_macros::dec;

fn main() {
    // Assemble an EPC QR payload for a SEPA credit transfer
    let iban = iban::normalize("at61 1904 3002 3457 3201").expect("IBAN should be valid");
    let payload = EpcPayloadBuilder::new("ACME GmbH", iban, dec!(1299.90))
        .bic("GIBAATWWXXX")
        .character_set(CharacterSet::Utf8)
        .remittance_text("Order 100000001 by John Doe")
        .information("Scan with your banking app")
        .build()
        .expect("payload should be valid");

    println!("Beneficiary: {}", payload.beneficiary_name());
    println!("IBAN:        {}", payload.iban());
    println!("Amount:      EUR {}", payload.amount());
    println!("---");
    println!("{}", payload);
}
