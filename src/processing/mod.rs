//! Address and prefix algorithms.
//!
//! Pure functions over the [`crate::models`] types:
//! - [`netmask`] - IPv4 shorthand completion and dotted netmasks
//! - [`ptr`] - reverse-DNS names
//! - [`nat64`] - IPv4-embedded IPv6 addresses (RFC 6052)
//! - [`iid`] - EUI-64 and opaque interface identifiers
//! - [`summarize`] - prefix list summarization
//! - [`classify`] - private/public address-space checks

pub mod classify;
mod iid;
mod nat64;
mod netmask;
mod ptr;
mod summarize;

// Re-export public functions
pub use classify::{
    is_private, is_private_prefix, is_private_rfc1918, is_private_rfc1918_prefix,
    is_private_rfc4193, is_private_rfc4193_prefix, is_private_rfc6598,
    is_private_rfc6598_prefix, is_public, is_public_prefix,
};
pub use iid::{generate_eui64, generate_opaque, MIN_SECRET_KEY_LEN};
pub use nat64::{translate_4to6, translate_6to4};
pub use netmask::{complete_ipv4, netmask_to_bits};
pub use ptr::ptr_name;
pub use summarize::summarize;
