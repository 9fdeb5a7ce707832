//! NAT64 text functions.

use super::parse::{parse_address, parse_v6_prefix, strip_mask};
use crate::processing;
use std::error::Error;

/// Bare IPv6 input means the well-known /96 layout.
const DEFAULT_NAT64_BITS: u8 = 96;

/// Embed an IPv4 address in an IPv6 prefix.
///
/// # Examples
/// ```
/// use ipnetwork_calc::functions::translate_4to6;
/// assert_eq!(translate_4to6("192.0.2.33", "64:ff9b::").unwrap(), "64:ff9b::c000:221");
/// ```
pub fn translate_4to6(address: &str, prefix: &str) -> Result<String, Box<dyn Error>> {
    log::debug!("translate_4to6({address:?}, {prefix:?})");
    let addr = parse_address(strip_mask(address), "address")?;
    if !addr.is_v4() {
        return Err("Invalid address: must be an IPv4 address".into());
    }
    let prefix = parse_v6_prefix(prefix, "prefix address", DEFAULT_NAT64_BITS)?;
    let output = processing::translate_4to6(&addr, &prefix)
        .ok_or_else(|| format!("Internal error translating {addr} into {prefix}"))?;
    Ok(output.to_string())
}

/// Extract the IPv4 address embedded in an IPv6 address or prefix.
pub fn translate_6to4(input: &str) -> Result<String, Box<dyn Error>> {
    log::debug!("translate_6to4({input:?})");
    let prefix = parse_v6_prefix(input, "address", DEFAULT_NAT64_BITS)?;
    let output = processing::translate_6to4(&prefix)
        .ok_or_else(|| format!("Internal error extracting IPv4 from {prefix}"))?;
    Ok(output.to_string())
}
