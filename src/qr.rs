//! QR code rendering for EPC payloads.
//!
//! Encodes the payload text at error correction level M, as the EPC069-12
//! guidelines require, and produces PNG bytes or a base64 data URI ready
//! for an `img` tag. The `order_qr_*` functions run the whole pipeline
//! for an order: prerequisite check, payload assembly, configured colors,
//! rendering.
//!
//! # Example
//!
//! ```
//! use girocode::assemble::*;
//! use girocode::qr;
//! use rust_decimal_macros::dec;
//!
//! let config = PaymentConfigBuilder::new("ACME GmbH", "AT61 1904 3002 3457 3201")
//!     .reference_type(ReferenceType::Creditor)
//!     .build();
//! let order = OrderSnapshot::new("100000001", dec!(100));
//!
//! let uri = qr::order_qr_data_uri(&config, &order).unwrap();
//! assert!(uri.starts_with("data:image/png;base64,"));
//! ```

use std::io::Cursor;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use log::{error, warn};
use qrcode::{EcLevel, QrCode};

use crate::assemble::{
    ConfigReader, ERROR_LOG_PREFIX, OrderSnapshot, StoreId, build_payload, can_render,
};
use crate::epc::EpcPayload;
use crate::error::EpcError;

/// Rendering options for the QR image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrOptions {
    /// Pixel width and height of one QR module.
    pub module_size: u32,
    /// Whether to draw the quiet zone around the code.
    pub quiet_zone: bool,
    /// Foreground RGB color.
    pub dark: [u8; 3],
    /// Background RGB color.
    pub light: [u8; 3],
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            module_size: 4,
            quiet_zone: true,
            dark: [0, 0, 0],
            light: [255, 255, 255],
        }
    }
}

/// Render a payload to PNG bytes.
pub fn render_png(payload: &EpcPayload, options: &QrOptions) -> Result<Vec<u8>, EpcError> {
    let code = QrCode::with_error_correction_level(payload.to_text(), EcLevel::M)
        .map_err(|err| EpcError::Render(err.to_string()))?;

    let image: RgbImage = code
        .render::<Rgb<u8>>()
        .quiet_zone(options.quiet_zone)
        .module_dimensions(options.module_size, options.module_size)
        .dark_color(Rgb(options.dark))
        .light_color(Rgb(options.light))
        .build();

    let mut png = Vec::new();
    DynamicImage::ImageRgb8(image)
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|err| EpcError::Render(err.to_string()))?;

    Ok(png)
}

/// Render a payload to a base64 PNG data URI.
pub fn render_data_uri(payload: &EpcPayload, options: &QrOptions) -> Result<String, EpcError> {
    let png = render_png(payload, options)?;
    Ok(png_data_uri(&png))
}

/// Render the EPC QR code for an order, or `None` when the order does not
/// qualify or rendering fails. Failures are logged, matching [`can_render`].
pub fn order_qr_png(config: &impl ConfigReader, order: &OrderSnapshot) -> Option<Vec<u8>> {
    if !can_render(config, order) {
        return None;
    }

    let payload = match build_payload(config, order) {
        Ok(payload) => payload,
        Err(err) => {
            error!("{}{}", ERROR_LOG_PREFIX, err);
            return None;
        }
    };

    let options = themed_options(config, order.store_id);
    match render_png(&payload, &options) {
        Ok(png) => Some(png),
        Err(err) => {
            error!("{}{}", ERROR_LOG_PREFIX, err);
            None
        }
    }
}

/// Like [`order_qr_png`], as a base64 PNG data URI.
pub fn order_qr_data_uri(config: &impl ConfigReader, order: &OrderSnapshot) -> Option<String> {
    order_qr_png(config, order).map(|png| png_data_uri(&png))
}

fn png_data_uri(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", BASE64.encode(png))
}

/// Default options with the configured colors applied. A missing scope
/// keeps the defaults, a malformed color string keeps that channel's
/// default; both are logged as warnings.
fn themed_options(config: &impl ConfigReader, store_id: Option<StoreId>) -> QrOptions {
    let mut options = QrOptions::default();

    let colors = config
        .code_color(store_id)
        .and_then(|code| Ok((code, config.background_color(store_id)?)));
    match colors {
        Ok((code, background)) => {
            if let Some(raw) = code {
                apply_color(&raw, &mut options.dark);
            }
            if let Some(raw) = background {
                apply_color(&raw, &mut options.light);
            }
        }
        Err(_) => {
            warn!("EPC QR code color configuration not found. Using default colors.");
        }
    }

    options
}

fn apply_color(raw: &str, channel: &mut [u8; 3]) {
    match parse_hex_color(raw) {
        Some(rgb) => *channel = rgb,
        None => warn!("Ignoring invalid QR color {:?}", raw),
    }
}

/// Parse "#RRGGBB" (the "#" is optional) into an RGB triple.
fn parse_hex_color(raw: &str) -> Option<[u8; 3]> {
    let hex = raw.strip_prefix('#').unwrap_or(raw);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([r, g, b])
}
