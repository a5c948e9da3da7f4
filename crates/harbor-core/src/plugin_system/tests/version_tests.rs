use std::str::FromStr;

use super::super::version::{Version, VersionError};

#[test]
fn test_parse_valid_version() {
    let version = Version::from_str("1.2.3").unwrap();
    assert_eq!(version, Version::new(1, 2, 3));
}

#[test]
fn test_parse_rejects_wrong_arity() {
    assert_eq!(Version::from_str("1.2").unwrap_err(), VersionError::InvalidFormat);
    assert_eq!(Version::from_str("1.2.3.4").unwrap_err(), VersionError::InvalidFormat);
    assert_eq!(Version::from_str("").unwrap_err(), VersionError::InvalidFormat);
}

#[test]
fn test_parse_rejects_non_numeric() {
    assert!(matches!(
        Version::from_str("1.x.3"),
        Err(VersionError::ParseError(_))
    ));
}

#[test]
fn test_display_round_trips() {
    let version = Version::new(2, 10, 0);
    assert_eq!(version.to_string(), "2.10.0");
    assert_eq!(Version::from_str(&version.to_string()).unwrap(), version);
}

#[test]
fn test_compatibility_is_major_equality() {
    let host = Version::new(1, 0, 0);
    assert!(Version::new(1, 9, 9).is_compatible_with(&host));
    assert!(Version::new(1, 0, 1).is_compatible_with(&host));
    assert!(!Version::new(2, 0, 0).is_compatible_with(&host));
    assert!(!Version::new(0, 9, 9).is_compatible_with(&host));
}

#[test]
fn test_ordering() {
    assert!(Version::new(1, 2, 3) < Version::new(1, 3, 0));
    assert!(Version::new(2, 0, 0) > Version::new(1, 9, 9));
}
