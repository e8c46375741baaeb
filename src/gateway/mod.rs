//! Remote gateway module for REST communication

mod client;
mod error;
mod traits;

pub use client::HttpGateway;
pub use error::GatewayError;
pub use traits::RemoteGateway;

#[cfg(test)]
pub use traits::MockRemoteGateway;
