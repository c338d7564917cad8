//! Stateless JSON API for anime content.
//!
//! Maps GET requests to independent data-fetching handlers through an ordered
//! route table, wraps every outcome in a uniform JSON envelope, and resolves
//! handlers lazily to keep cold starts cheap.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod handlers;
pub mod http;
pub mod routing;

pub use config::ApiConfig;
pub use dispatch::Dispatcher;
pub use http::HttpServer;
