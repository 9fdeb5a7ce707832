//! Address and prefix text functions: canonical forms, masks, equality.

use super::parse::{
    parse_address, parse_address_or_prefix, parse_prefix, strip_mask, strip_zone,
    AddressOrPrefix,
};
use crate::models::{Address, Prefix};
use crate::processing::{complete_ipv4, netmask_to_bits, ptr_name};
use std::error::Error;
use std::net::{IpAddr, SocketAddr};

/// Trim, strip zone and complete short IPv4 text before parsing.
fn clean_address(input: &str) -> Result<String, Box<dyn Error>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("String only with space character(s)".into());
    }
    let trimmed = strip_zone(trimmed);
    if trimmed.contains(':') {
        Ok(trimmed.to_string())
    } else {
        Ok(complete_ipv4(trimmed))
    }
}

fn is_unspecified(addr: &Address) -> bool {
    addr.as_bytes().iter().all(|&byte| byte == 0)
}

/// Canonical text of an address, e.g. `"10.1"` -> `"10.1.0.0"`,
/// `"2001:0DB8::1/64"` -> `"2001:db8::1"`.
pub fn address(input: &str) -> Result<String, Box<dyn Error>> {
    log::debug!("address({input:?})");
    let cleaned = clean_address(strip_mask(input))?;
    let addr = parse_address(&cleaned, "address")?;
    Ok(addr.to_string())
}

/// Canonical CIDR text. The mask may be a length or, for IPv4, a dotted
/// netmask. Without a mask the result is a host prefix, except for the
/// unspecified address which becomes `/0`.
pub fn cidr(input: &str) -> Result<String, Box<dyn Error>> {
    log::debug!("cidr({input:?})");
    let (addr_text, mask) = input.split_once('/').unwrap_or((input, ""));
    let mask = mask.trim();
    let cleaned = clean_address(addr_text)?;
    let addr: Address = cleaned
        .parse()
        .map_err(|e| format!("Invalid CIDR address: unable to parse address field: {e}"))?;

    let prefix = if mask.is_empty() {
        let bits = if is_unspecified(&addr) { 0 } else { addr.bit_len() };
        Prefix::new(addr, bits)?
    } else if addr.is_v4() && mask.matches('.').count() == 3 {
        let mask_addr: Address = mask.parse().map_err(|e| {
            format!("Invalid CIDR address: unable to parse mask field in decimal format: {e}")
        })?;
        let bits = netmask_to_bits(&mask_addr).ok_or(
            "Invalid CIDR address: unable to parse mask field in decimal format: invalid octet",
        )?;
        Prefix::new(addr, bits)?
    } else {
        format!("{addr}/{mask}").parse::<Prefix>().map_err(|e| {
            format!("Invalid CIDR address: unable to parse CIDR address due to mask field: {e}")
        })?
    };
    log::trace!("cidr({input:?}) = {prefix}");
    Ok(prefix.to_string())
}

/// Network text of a prefix, host bits cleared.
pub fn prefix(input: &str) -> Result<String, Box<dyn Error>> {
    log::debug!("prefix({input:?})");
    Ok(parse_prefix(input, "CIDR address")?.masked().to_string())
}

/// Prefix length of `addr/len` text.
pub fn bits(input: &str) -> Result<u8, Box<dyn Error>> {
    log::debug!("bits({input:?})");
    Ok(parse_prefix(input, "CIDR address")?.bits())
}

/// Fully expanded form, keeping a `/len` suffix when present.
pub fn expand6(input: &str) -> Result<String, Box<dyn Error>> {
    log::debug!("expand6({input:?})");
    Ok(match parse_address_or_prefix(input)? {
        AddressOrPrefix::Address(addr) => addr.to_expanded_string(),
        AddressOrPrefix::Prefix(prefix) => {
            format!("{}/{}", prefix.addr().to_expanded_string(), prefix.bits())
        }
    })
}

/// `addr:port`, or `[addr]:port` for IPv6.
pub fn address_port(input: &str, port: i64) -> Result<String, Box<dyn Error>> {
    log::debug!("address_port({input:?}, {port})");
    let port = u16::try_from(port)
        .map_err(|_| format!("Invalid port: port must be between 0 and {}", u16::MAX))?;
    let addr = parse_address(strip_mask(input), "address")?;
    Ok(SocketAddr::new(IpAddr::from(addr), port).to_string())
}

pub fn is4(input: &str) -> Result<bool, Box<dyn Error>> {
    log::debug!("is4({input:?})");
    Ok(parse_address(strip_mask(input), "address")?.is_v4())
}

pub fn is6(input: &str) -> Result<bool, Box<dyn Error>> {
    log::debug!("is6({input:?})");
    Ok(parse_address(strip_mask(input), "address")?.is_v6())
}

/// Whether `container` holds an address, or the whole of a prefix.
/// Different families never contain each other.
pub fn contain(container: &str, input: &str) -> Result<bool, Box<dyn Error>> {
    log::debug!("contain({container:?}, {input:?})");
    let container = parse_prefix(container, "CIDR address")?;
    Ok(match parse_address_or_prefix(input)? {
        AddressOrPrefix::Address(addr) => container.contains(&addr),
        AddressOrPrefix::Prefix(prefix) => container.contains_prefix(&prefix),
    })
}

/// Byte equality of two addresses, ignoring `/len` and `%zone` suffixes.
pub fn equal_address(x: &str, y: &str) -> Result<bool, Box<dyn Error>> {
    log::debug!("equal_address({x:?}, {y:?})");
    let x = parse_address(strip_mask(x), "address")?;
    let y = parse_address(strip_mask(y), "address")?;
    Ok(x == y)
}

/// Equality of the network forms of two prefixes.
pub fn equal_prefix(x: &str, y: &str) -> Result<bool, Box<dyn Error>> {
    log::debug!("equal_prefix({x:?}, {y:?})");
    let x = parse_prefix(x, "CIDR address")?;
    let y = parse_prefix(y, "CIDR address")?;
    Ok(x == y)
}

pub fn ptr(input: &str) -> Result<String, Box<dyn Error>> {
    log::debug!("ptr({input:?})");
    Ok(ptr_name(&parse_address(strip_mask(input), "address")?))
}
