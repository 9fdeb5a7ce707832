//! Reverse-DNS (PTR) owner names, RFC 1035 section 3.5 and RFC 3596 section 2.5.

use crate::models::Address;
use itertools::Itertools;

/// Build the PTR name for an address.
///
/// IPv4 octets are emitted in reverse order under `in-addr.arpa.`; IPv6
/// bytes are reversed and each one split into its low then high nibble
/// under `ip6.arpa.`.
pub fn ptr_name(addr: &Address) -> String {
    match addr {
        Address::V4(octets) => format!("{}.in-addr.arpa.", octets.iter().rev().join(".")),
        Address::V6(octets) => format!(
            "{}.ip6.arpa.",
            octets
                .iter()
                .rev()
                .flat_map(|&byte| [byte & 0x0f, byte >> 4])
                .map(|nibble| format!("{nibble:x}"))
                .join(".")
        ),
    }
}
