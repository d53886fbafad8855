#![doc(test(attr(deny(warnings))))]

//! Subtrack tracks recurring subscriptions and answers three questions:
//! total monthly spend, what is due soon, and how spending is distributed
//! by category. The billing engine at the center is a pure computation;
//! storage, configuration, and the CLI live at the edges.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Subtrack tracing initialized.");
    });
}
