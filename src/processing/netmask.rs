//! IPv4 shorthand completion and dotted-netmask conversion.

use crate::models::Address;

/// Pad a short dotted IPv4 string with `.0` groups up to four octets.
///
/// Input that already has three (or more) dots is returned unchanged. No
/// validation happens here; the result still has to be parsed.
///
/// # Examples
/// ```
/// use ipnetwork_calc::processing::complete_ipv4;
/// assert_eq!(complete_ipv4("10"), "10.0.0.0");
/// assert_eq!(complete_ipv4("10.20"), "10.20.0.0");
/// ```
pub fn complete_ipv4(input: &str) -> String {
    match input.matches('.').count() {
        0 => format!("{input}.0.0.0"),
        1 => format!("{input}.0.0"),
        2 => format!("{input}.0"),
        _ => input.to_string(),
    }
}

/// Convert a dotted IPv4 netmask to its prefix length.
///
/// The one-bits must be contiguous and left-justified. Returns `None` for a
/// non-contiguous mask or an IPv6 address.
pub fn netmask_to_bits(mask: &Address) -> Option<u8> {
    let Address::V4(octets) = mask else {
        return None;
    };
    let value = u32::from_be_bytes(*octets);
    let ones = value.leading_ones();
    if ones + value.trailing_zeros() != 32 {
        return None;
    }
    Some(ones as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(mask: &str) -> Option<u8> {
        netmask_to_bits(&mask.parse().unwrap())
    }

    #[test]
    fn test_complete_ipv4() {
        assert_eq!(complete_ipv4("10"), "10.0.0.0");
        assert_eq!(complete_ipv4("10.20"), "10.20.0.0");
        assert_eq!(complete_ipv4("10.20.30"), "10.20.30.0");
        assert_eq!(complete_ipv4("10.20.30.40"), "10.20.30.40");
        assert_eq!(complete_ipv4("1.2.3.4.5"), "1.2.3.4.5");
        assert_eq!(complete_ipv4(""), ".0.0.0");
    }

    #[test]
    fn test_netmask_to_bits_valid() {
        assert_eq!(bits("0.0.0.0"), Some(0));
        assert_eq!(bits("255.0.0.0"), Some(8));
        assert_eq!(bits("255.254.0.0"), Some(15));
        assert_eq!(bits("255.255.0.0"), Some(16));
        assert_eq!(bits("255.255.254.0"), Some(23));
        assert_eq!(bits("255.255.255.0"), Some(24));
        assert_eq!(bits("255.255.255.240"), Some(28));
        assert_eq!(bits("255.255.255.248"), Some(29));
        assert_eq!(bits("255.255.255.255"), Some(32));
    }

    #[test]
    fn test_netmask_to_bits_invalid() {
        assert_eq!(bits("253.0.0.0"), None);
        assert_eq!(bits("255.64.0.0"), None);
        assert_eq!(bits("254.254.0.0"), None);
        assert_eq!(bits("254.255.0.0"), None);
        assert_eq!(bits("255.255.200.0"), None);
        assert_eq!(bits("255.0.255.0"), None);
        assert_eq!(bits("255.255.128.248"), None);
        assert_eq!(bits("255.255.255.251"), None);
        assert_eq!(bits("255.128.255.255"), None);
        assert_eq!(bits("0.0.0.255"), None);
    }

    #[test]
    fn test_netmask_to_bits_v6() {
        assert_eq!(bits("ffff:ffff::"), None);
        assert_eq!(bits("::ffff:255.255.255.0"), None);
    }
}
