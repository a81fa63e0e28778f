//! Transport layer for the Rocketlane SDK.

pub mod http;

pub use http::HttpTransport;
