//! IPv6 interface identifiers: modified EUI-64 (RFC 4291 appendix A) and
//! semantically opaque identifiers (RFC 7217 section 5).

use crate::models::{Address, MacAddress};
use sha2::{Digest, Sha256};

/// Shortest accepted secret key, 128 bits.
pub const MIN_SECRET_KEY_LEN: usize = 16;

/// Reserved interface identifiers (RFC 5453, IANA registry), inclusive.
const RESERVED_IIDS: [(u64, u64); 5] = [
    // Subnet-Router Anycast
    (0x0000_0000_0000_0000, 0x0000_0000_0000_0000),
    // Reserved IPv6 Interface Identifiers corresponding to the IANA Ethernet Block
    (0x0200_5eff_fe00_0000, 0x0200_5eff_fe00_5212),
    // Proxy Mobile IPv6
    (0x0200_5eff_fe00_5213, 0x0200_5eff_fe00_5213),
    (0x0200_5eff_fe00_5214, 0x0200_5eff_feff_ffff),
    // Subnet Anycast Addresses
    (0xfdff_ffff_ffff_ff80, 0xfdff_ffff_ffff_ffff),
];

fn is_reserved_iid(iid: u64) -> bool {
    RESERVED_IIDS
        .iter()
        .any(|&(first, last)| (first..=last).contains(&iid))
}

/// Build an address from the first 64 bits of `prefix` and a modified
/// EUI-64 identifier derived from `mac`.
///
/// Returns `None` if the prefix is not IPv6.
pub fn generate_eui64(prefix: &Address, mac: &MacAddress) -> Option<Address> {
    let Address::V6(mut bytes) = *prefix else {
        return None;
    };
    let mac = mac.octets();
    bytes[8..11].copy_from_slice(&mac[0..3]);
    // flip the universal/local bit
    bytes[8] ^= 0x02;
    bytes[11] = 0xff;
    bytes[12] = 0xfe;
    bytes[13..16].copy_from_slice(&mac[3..6]);
    Some(Address::V6(bytes))
}

/// Build an address from the first 64 bits of `prefix` and an opaque
/// identifier: the first 8 bytes of
/// `SHA-256(prefix[0..8] || net_iface || network_id || dad_counter (LE u32) || secret_key)`.
///
/// A result that falls in a reserved identifier range is regenerated with
/// the next counter value. Returns `None` if the prefix is not IPv6,
/// `net_iface` is empty or the key is shorter than [`MIN_SECRET_KEY_LEN`].
pub fn generate_opaque(
    prefix: &Address,
    net_iface: &[u8],
    network_id: &[u8],
    dad_counter: u32,
    secret_key: &[u8],
) -> Option<Address> {
    let Address::V6(mut bytes) = *prefix else {
        return None;
    };
    if net_iface.is_empty() || secret_key.len() < MIN_SECRET_KEY_LEN {
        return None;
    }

    let mut counter = dad_counter;
    let iid = loop {
        let digest = Sha256::new()
            .chain_update(&bytes[0..8])
            .chain_update(net_iface)
            .chain_update(network_id)
            .chain_update(counter.to_le_bytes())
            .chain_update(secret_key)
            .finalize();
        let mut iid = [0u8; 8];
        iid.copy_from_slice(&digest[0..8]);
        if !is_reserved_iid(u64::from_be_bytes(iid)) {
            break iid;
        }
        counter = counter.wrapping_add(1);
    };

    bytes[8..16].copy_from_slice(&iid);
    Some(Address::V6(bytes))
}
