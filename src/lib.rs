pub mod client;
pub mod config;
pub mod encoding;
pub mod error;
pub mod handler;
pub mod listener;
pub mod logging;
pub mod mime;
pub mod request;
pub mod response;
pub mod server;

pub use client::WebClient;
pub use config::{ClientConfig, ServerConfig};
pub use error::{Error, Result};
pub use server::Server;
