//! Custom field validators

use std::net::SocketAddr;
use validator::ValidationError;

/// Validate that a bind address is a literal socket address
pub fn validate_bind_address(address: &str) -> Result<(), ValidationError> {
    if address.is_empty() {
        return Err(ValidationError::new("empty_bind_address"));
    }

    match address.parse::<SocketAddr>() {
        Ok(_) => Ok(()),
        Err(_) => Err(ValidationError::new("invalid_bind_address")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_bind_address() {
        assert!(validate_bind_address("127.0.0.1:3000").is_ok());
        assert!(validate_bind_address("0.0.0.0:80").is_ok());
        assert!(validate_bind_address("[::1]:8080").is_ok());

        assert!(validate_bind_address("").is_err());
        assert!(validate_bind_address("127.0.0.1").is_err());
        assert!(validate_bind_address("example.com:80").is_err());
    }
}
