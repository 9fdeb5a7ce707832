//! Text function layer.
//!
//! Each function takes free-form text, parses it into model types, runs
//! one [`crate::processing`] operation and renders the result back to text.
//! Failures are descriptive `Box<dyn Error>` messages naming the bad
//! argument.
//!
//! - [`address`] - canonical forms, masks, containment and equality
//! - [`translate`] - NAT64 translation
//! - [`generate`] - EUI-64 and opaque IPv6 address generation
//! - [`classify`] - private/public checks
//! - [`summarize`] - prefix list summarization
//! - [`dispatch`] - call any of the above by name

mod address;
mod classify;
mod dispatch;
mod generate;
mod parse;
mod summarize;
mod translate;

// Re-export public functions
pub use address::{
    address, address_port, bits, cidr, contain, equal_address, equal_prefix, expand6, is4, is6,
    prefix, ptr,
};
pub use classify::{
    is_private, is_private_rfc1918, is_private_rfc4193, is_private_rfc6598, is_public,
};
pub use dispatch::{dispatch, FUNCTIONS};
pub use generate::{generate6_eui64, generate6_opaque};
pub use parse::AddressOrPrefix;
pub use summarize::summarize;
pub use translate::{translate_4to6, translate_6to4};
