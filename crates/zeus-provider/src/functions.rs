//! IPv4 conversion helpers.
//!
//! The pool resource's `start`/`gateway` attributes take the 32-bit
//! integer form of an address; these convert between that and the
//! dotted-decimal form.

use std::net::Ipv4Addr;

use crate::error::Error;

/// Dotted-decimal form of a 32-bit address carried as `i64`.
pub fn ipv4_long2ip(long: i64) -> Result<String, Error> {
    let value = u32::try_from(long).map_err(|_| Error::Ipv4LongOutOfRange)?;
    Ok(Ipv4Addr::from(value).to_string())
}

/// Big-endian integer form of a dotted-decimal IPv4 address.
pub fn ipv4_ip2long(ip: &str) -> Result<i64, Error> {
    let addr: Ipv4Addr = ip.parse().map_err(|_| Error::Ipv4Invalid)?;
    Ok(i64::from(u32::from(addr)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long2ip() {
        assert_eq!(ipv4_long2ip(3_232_235_777).unwrap(), "192.168.1.1");
        assert_eq!(ipv4_long2ip(0).unwrap(), "0.0.0.0");
        assert_eq!(ipv4_long2ip(4_294_967_295).unwrap(), "255.255.255.255");
    }

    #[test]
    fn test_long2ip_out_of_range() {
        for long in [-1, 4_294_967_296] {
            let err = ipv4_long2ip(long).unwrap_err();
            assert_eq!(
                err.to_string(),
                "ipv4_long must be between 0 and 4294967295"
            );
        }
    }

    #[test]
    fn test_ip2long() {
        assert_eq!(ipv4_ip2long("192.168.1.1").unwrap(), 3_232_235_777);
        assert_eq!(ipv4_ip2long("0.0.0.0").unwrap(), 0);
        assert_eq!(ipv4_ip2long("255.255.255.255").unwrap(), 4_294_967_295);
    }

    #[test]
    fn test_ip2long_rejects_invalid_input() {
        for ip in ["not-an-ip", "::1", "300.0.0.1", ""] {
            let err = ipv4_ip2long(ip).unwrap_err();
            assert_eq!(err.to_string(), "ipv4_ip must be a valid IPv4 address");
        }
    }

    #[test]
    fn test_round_trip() {
        let long = ipv4_ip2long("10.42.7.255").unwrap();
        assert_eq!(ipv4_long2ip(long).unwrap(), "10.42.7.255");
    }
}
