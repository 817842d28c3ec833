//! Phone/OTP login rules
//!
//! The login gate is a demo: any ten-digit number is accepted and the OTP is the
//! configured literal. The frontend keeps the resulting `Session` in memory only.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const PHONE_DIGITS: usize = 10;
pub const OTP_DIGITS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Please enter a valid 10-digit phone number.")]
    InvalidPhone,

    #[error("Invalid OTP. Please try again.")]
    InvalidOtp,
}

/// Step of the two-step login form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginStep {
    #[default]
    Phone,
    Otp,
}

/// Logged-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub country_code: String,
    /// Ten digits, no separators
    pub phone: String,
}

impl Session {
    /// `+91 987-654-3210`
    pub fn display_phone(&self) -> String {
        format!("{} {}", self.country_code, mask_phone_input(&self.phone))
    }
}

pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Mask phone input as `XXX-XXX-XXXX`, dropping non-digits and anything past ten digits
pub fn mask_phone_input(value: &str) -> String {
    let digits: String = digits_only(value).chars().take(PHONE_DIGITS).collect();
    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("{}-{}", &digits[..3], &digits[3..]),
        _ => format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

/// Mask OTP input as `XXX-XXX`
pub fn mask_otp_input(value: &str) -> String {
    let digits: String = digits_only(value).chars().take(OTP_DIGITS).collect();
    if digits.len() <= 3 {
        digits
    } else {
        format!("{}-{}", &digits[..3], &digits[3..])
    }
}

/// Check the phone step; returns the bare digits
pub fn validate_phone(value: &str) -> Result<String, AuthError> {
    let digits = digits_only(value);
    if digits.len() != PHONE_DIGITS {
        return Err(AuthError::InvalidPhone);
    }
    Ok(digits)
}

/// Check the OTP step against the expected code
pub fn verify_otp(value: &str, expected: &str) -> Result<(), AuthError> {
    if digits_only(value) == expected {
        Ok(())
    } else {
        Err(AuthError::InvalidOtp)
    }
}

/// Run both steps and build the session
pub fn login(
    country_code: &str,
    phone: &str,
    otp: &str,
    expected_otp: &str,
) -> Result<Session, AuthError> {
    let phone = validate_phone(phone)?;
    verify_otp(otp, expected_otp)?;
    Ok(Session {
        country_code: country_code.to_string(),
        phone,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_mask() {
        assert_eq!(mask_phone_input("98"), "98");
        assert_eq!(mask_phone_input("98765"), "987-65");
        assert_eq!(mask_phone_input("9876543210"), "987-654-3210");
        assert_eq!(mask_phone_input("(987) 654-3210 99"), "987-654-3210");
        assert_eq!(mask_phone_input("abc"), "");
    }

    #[test]
    fn test_otp_mask() {
        assert_eq!(mask_otp_input("12"), "12");
        assert_eq!(mask_otp_input("1234"), "123-4");
        assert_eq!(mask_otp_input("1234567"), "123-456");
    }

    #[test]
    fn test_phone_needs_ten_digits() {
        assert_eq!(validate_phone("987-654-3210"), Ok("9876543210".to_string()));
        assert_eq!(
            validate_phone("987-654").unwrap_err().to_string(),
            "Please enter a valid 10-digit phone number."
        );
    }

    #[test]
    fn test_otp_check() {
        assert_eq!(verify_otp("123-456", "123456"), Ok(()));
        assert_eq!(
            verify_otp("123-457", "123456").unwrap_err().to_string(),
            "Invalid OTP. Please try again."
        );
    }

    #[test]
    fn test_login_builds_session() {
        let session = login("+91", "987-654-3210", "123-456", "123456").unwrap();
        assert_eq!(session.phone, "9876543210");
        assert_eq!(session.display_phone(), "+91 987-654-3210");
        assert_eq!(
            login("+1", "987", "123456", "123456"),
            Err(AuthError::InvalidPhone)
        );
    }
}
