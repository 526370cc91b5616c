#![doc = include_str!(concat!("../", std::env!("CARGO_PKG_README")))]
#[cfg(feature = "cli")]
pub mod app;
pub mod core;
