use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv6Addr;

lazy_static! {
    // Dotted-quad with each octet 0-255
    static ref IPV4_REGEX: Regex = Regex::new(
        r"^(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])(\.(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])){3}$"
    )
    .unwrap();
}

pub fn is_ipv4_address<S: Into<String>>(name: S) -> bool {
    IPV4_REGEX.is_match(&name.into())
}

pub fn is_ipv6_address<S: Into<String>>(name: S) -> bool {
    let name: String = name.into();
    // The host platform stores IPv6 user names uppercased; accept either
    name.contains(':') && name.to_lowercase().parse::<Ipv6Addr>().is_ok()
}

/// Whether a user-name string is a raw network address, i.e. the identity of
/// an unauthenticated editor rather than a registered account.
pub fn is_ip_address<S: Into<String>>(name: S) -> bool {
    let name: String = name.into();
    is_ipv4_address(&name) || is_ipv6_address(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ipv4() {
        assert!(is_ipv4_address("127.0.0.1"));
        assert!(is_ipv4_address("0.0.0.0"));
        assert!(is_ipv4_address("255.255.255.255"));
        assert!(is_ipv4_address("192.168.1.10"));
    }

    #[test]
    fn test_invalid_ipv4() {
        assert!(!is_ipv4_address("256.0.0.1")); // octet out of range
        assert!(!is_ipv4_address("1.2.3")); // too few octets
        assert!(!is_ipv4_address("1.2.3.4.5")); // too many octets
        assert!(!is_ipv4_address("01.2.3.4")); // leading zero
        assert!(!is_ipv4_address("1.2.3.x"));
        assert!(!is_ipv4_address(""));
    }

    #[test]
    fn test_valid_ipv6() {
        assert!(is_ipv6_address("::1"));
        assert!(is_ipv6_address("2001:db8::ff00:42:8329"));
        assert!(is_ipv6_address("2001:DB8:0:0:0:FF00:42:8329"));
        assert!(is_ipv6_address("fe80::1"));
    }

    #[test]
    fn test_invalid_ipv6() {
        assert!(!is_ipv6_address("2001:db8::g1")); // bad hex digit
        assert!(!is_ipv6_address("12345::1")); // group too long
        assert!(!is_ipv6_address("Example"));
        assert!(!is_ipv6_address(""));
    }

    #[test]
    fn test_user_names_are_not_addresses() {
        assert!(!is_ip_address("Example"));
        assert!(!is_ip_address("Jack Phoenix"));
        assert!(!is_ip_address("127.0.0.1 fan club"));
    }

    #[test]
    fn test_addresses_are_detected() {
        assert!(is_ip_address("10.0.0.1"));
        assert!(is_ip_address("::1"));
    }
}
