//! Portal API client module

mod client;
mod traits;

pub use client::{PortalClient, SubmitAck};
pub use traits::PortalApi;

#[cfg(test)]
pub use traits::MockPortalApi;
