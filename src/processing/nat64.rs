//! IPv4-embedded IPv6 addresses, RFC 6052 section 2.2.
//!
//! The IPv4 address sits right after the IPv6 prefix, except that bits
//! 64-71 (byte 8, the "u" octet) are always zero and skipped:
//!
//! ```text
//! | PL  | 0-------32--40--48--56--64--72--80--88--96--104---------|
//! | 32  |     prefix    |v4(32)         | u | suffix                |
//! | 40  |     prefix        |v4(24)     | u |(8)| suffix            |
//! | 48  |     prefix            |v4(16) | u | (16)  | suffix        |
//! | 56  |     prefix                |(8)| u |  v4(24)   | suffix    |
//! | 64  |     prefix                    | u |   v4(32)      | suffix|
//! | 96  |     prefix                                    |    v4(32) |
//! ```
//!
//! Prefix lengths are bucketed by range, so /33../40 all use the /40 layout
//! and anything above /64 uses the /96 layout.

use crate::models::{Address, Prefix};

/// Index of the reserved "u" octet.
const U_OCTET: usize = 8;

/// Byte offset where the embedded IPv4 address starts for a prefix length.
fn embed_offset(bits: u8) -> usize {
    match bits {
        0..=32 => 4,
        33..=40 => 5,
        41..=48 => 6,
        49..=56 => 7,
        57..=64 => 8,
        _ => 12,
    }
}

/// Positions of the four IPv4 bytes inside the IPv6 buffer.
fn embed_positions(bits: u8) -> [usize; 4] {
    let mut positions = [0usize; 4];
    let mut index = embed_offset(bits);
    for position in positions.iter_mut() {
        if index == U_OCTET {
            index += 1;
        }
        *position = index;
        index += 1;
    }
    positions
}

/// Embed an IPv4 address in an IPv6 prefix.
///
/// Prefix bytes come from the masked prefix, the bytes after the IPv4
/// address are zero. Returns `None` unless `address` is IPv4 and `prefix`
/// is IPv6.
pub fn translate_4to6(address: &Address, prefix: &Prefix) -> Option<Address> {
    let Address::V4(v4) = address else {
        return None;
    };
    let Address::V6(network) = prefix.masked().addr() else {
        return None;
    };

    let offset = embed_offset(prefix.bits());
    let mut result = [0u8; 16];
    result[..offset].copy_from_slice(&network[..offset]);
    for (byte, position) in v4.iter().zip(embed_positions(prefix.bits())) {
        result[position] = *byte;
    }
    Some(Address::V6(result))
}

/// Extract the IPv4 address embedded in an IPv6 address.
///
/// `prefix.bits()` selects the layout; the bytes are read from the address
/// as given, not the masked one. Returns `None` unless the address is IPv6.
pub fn translate_6to4(prefix: &Prefix) -> Option<Address> {
    let Address::V6(bytes) = prefix.addr() else {
        return None;
    };
    let positions = embed_positions(prefix.bits());
    Some(Address::V4(positions.map(|position| bytes[position])))
}
