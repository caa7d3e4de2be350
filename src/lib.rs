//! Server-rendered category catalog page for a library management API.
//!
//! The [`page`] module holds the page's state machine and loader, [`render`]
//! turns state into HTML, and [`server`] exposes it over HTTP.

pub mod client;
pub mod config;
pub mod page;
pub mod render;
pub mod server;
pub mod state;
