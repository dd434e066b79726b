#![doc(test(attr(deny(warnings))))]

//! VentureFlow guides a business owner through listing a venture: pick a
//! category and subcategory, fill the multi-step form generated from the
//! field catalog, choose a package and submit to the backend.

pub mod api;
pub mod cli;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("VentureFlow tracing initialized.");
    });
}
