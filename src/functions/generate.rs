//! IPv6 address generation text functions.

use super::parse::{parse_address, strip_mask};
use crate::models::{Address, MacAddress};
use crate::processing::{self, MIN_SECRET_KEY_LEN};
use std::error::Error;

/// Parse the prefix argument; only its first 64 bits are used.
fn parse_v6_base(input: &str, what: &str) -> Result<Address, Box<dyn Error>> {
    let addr = parse_address(strip_mask(input), what)?;
    if !addr.is_v6() {
        return Err(format!("Invalid {what}: prefix address must be an IPv6 address").into());
    }
    Ok(addr)
}

/// Address from a prefix and a modified EUI-64 identifier.
///
/// The MAC may use `-`, `:` or `.` notation.
pub fn generate6_eui64(prefix: &str, mac: &str) -> Result<String, Box<dyn Error>> {
    log::debug!("generate6_eui64({prefix:?}, {mac:?})");
    let base = parse_v6_base(prefix, "prefix")?;
    let mac: MacAddress = mac
        .parse()
        .map_err(|e| format!("Invalid MAC: unable to parse MAC address input: {e}"))?;
    let output = processing::generate_eui64(&base, &mac)
        .ok_or_else(|| format!("Internal error generating EUI-64 address in {base}"))?;
    Ok(output.to_string())
}

/// Address from a prefix and an RFC 7217 opaque identifier.
///
/// `network_id` and `dad_counter` are optional; a missing counter is 0.
pub fn generate6_opaque(
    prefix: &str,
    net_iface: &str,
    network_id: Option<&str>,
    dad_counter: Option<i64>,
    secret_key: &str,
) -> Result<String, Box<dyn Error>> {
    log::debug!("generate6_opaque({prefix:?}, {net_iface:?}, {network_id:?}, {dad_counter:?})");
    let base = parse_v6_base(prefix, "Prefix")?;
    if net_iface.is_empty() {
        return Err("Invalid Net_Iface: value is empty".into());
    }
    let dad_counter = dad_counter.unwrap_or(0);
    if dad_counter < 0 {
        return Err("Invalid DAD_Counter: must be at least 0".into());
    }
    let dad_counter = i32::try_from(dad_counter)
        .map_err(|_| format!("Invalid DAD_Counter: must be at most {}", i32::MAX))?;
    if secret_key.len() < MIN_SECRET_KEY_LEN {
        return Err(format!(
            "Invalid secret_key: value is too small, must be at least {} bits in UTF8 encoding",
            MIN_SECRET_KEY_LEN * 8
        )
        .into());
    }

    let output = processing::generate_opaque(
        &base,
        net_iface.as_bytes(),
        network_id.unwrap_or_default().as_bytes(),
        dad_counter.unsigned_abs(),
        secret_key.as_bytes(),
    )
    .ok_or_else(|| format!("Internal error generating opaque address in {base}"))?;
    Ok(output.to_string())
}
