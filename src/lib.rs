#[cfg(not(feature = "server"))]
mod client;

pub mod common;

#[cfg(feature = "server")]
pub mod server;

#[cfg(not(feature = "server"))]
pub use client::run_app;
