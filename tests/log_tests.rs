//! Log output of the rendering pipeline.
//!
//! The logger is process-global, so these assertions live in their own
//! test binary and in a single test function; parallel tests elsewhere
//! would interleave records.

use std::sync::{Mutex, OnceLock};

use girocode::assemble::*;
use log::{Level, LevelFilter, Log, Metadata, Record};
use rust_decimal_macros::dec;

static CAPTURED: OnceLock<Mutex<Vec<(Level, String)>>> = OnceLock::new();

struct CapturingLogger;

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        CAPTURED
            .get_or_init(|| Mutex::new(Vec::new()))
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

fn install_logger() {
    static LOGGER: CapturingLogger = CapturingLogger;
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Trace);
}

fn captured() -> Vec<(Level, String)> {
    CAPTURED
        .get_or_init(|| Mutex::new(Vec::new()))
        .lock()
        .unwrap()
        .clone()
}

fn base_config() -> PaymentConfig {
    PaymentConfigBuilder::new("ACME GmbH", "AT61 1904 3002 3457 3201")
        .reference_type(ReferenceType::Creditor)
        .build()
}

fn order(increment_id: &str) -> OrderSnapshot {
    OrderSnapshot::new(increment_id, dec!(100))
}

#[test]
fn pipeline_log_severities() {
    install_logger();

    // An out-of-range amount is an everyday event and logs at info level.
    let zero = OrderSnapshot::new("900000001", dec!(0));
    assert!(!can_render(&base_config(), &zero));

    // An invalid IBAN is a configuration defect and logs at error level.
    let config = PaymentConfig {
        iban: Some("AT61190430023457320".into()),
        ..base_config()
    };
    assert!(!can_render(&config, &order("900000002")));

    // So does a missing payment reference template.
    let config = PaymentConfig {
        reference_type: Some("PR".into()),
        payment_reference: None,
        ..base_config()
    };
    assert!(!can_render(&config, &order("900000003")));

    // And an unknown store scope.
    let scoped = ScopedConfig::new(base_config());
    assert!(!can_render(&scoped, &order("900000004").store(77)));

    // Disabled configuration and a missing beneficiary name stay silent.
    let disabled = PaymentConfig {
        enabled: false,
        ..base_config()
    };
    assert!(!can_render(&disabled, &order("900000005")));

    let nameless = PaymentConfig {
        beneficiary_name: None,
        ..base_config()
    };
    assert!(!can_render(&nameless, &order("900000006")));

    let records = captured();
    assert_eq!(records.len(), 4);
    assert_eq!(
        records[0],
        (
            Level::Info,
            "Grand total of 0 is out of supported range for EPC QR code. Order #900000001".into()
        )
    );
    assert_eq!(
        records[1],
        (
            Level::Error,
            "Error rendering EPC QR code: invalid IBAN length (19), an IBAN for AT has to be 20 \
             characters long"
                .into()
        )
    );
    assert_eq!(
        records[2],
        (
            Level::Error,
            "Error rendering EPC QR code: payment reference should be used, but is not configured"
                .into()
        )
    );
    assert_eq!(
        records[3],
        (
            Level::Error,
            "Error rendering EPC QR code: store scope 77 not found".into()
        )
    );
}
