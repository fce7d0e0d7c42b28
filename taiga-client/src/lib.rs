//! Network layer for the Taiga storefront
//!
//! Fetches the catalog over HTTP and defines the host-dialog seam the
//! storefront renders blocking messages through. The engine itself lives in
//! `taiga-core` and never touches the network.

mod config;
mod error;
mod host;
mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use host::{AlertHost, StderrHost};
pub use http::CatalogClient;
