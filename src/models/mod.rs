//! Value types shared by every operation.
//!
//! - [`Address`] - IPv4 or IPv6 address as raw bytes
//! - [`Prefix`] - address plus prefix length, compared in masked form
//! - [`MacAddress`] - EUI-48 hardware address

mod address;
mod mac;
mod prefix;

// Re-export public types
pub use address::{Address, V4_BITS, V6_BITS};
pub use mac::MacAddress;
pub use prefix::Prefix;
