//! IPv4/IPv6 address and prefix calculations.
//!
//! - [`models`] - address, prefix and MAC value types
//! - [`processing`] - the algorithms: netmasks, PTR names, NAT64, interface
//!   identifiers, summarization and address-space classification
//! - [`functions`] - text in, text out wrappers around [`processing`]
//! - [`output`] - terminal rendering for the `ipnetwork` binary

pub mod functions;
pub mod models;
pub mod output;
pub mod processing;

// Re-export commonly used types
pub use models::{Address, MacAddress, Prefix};
