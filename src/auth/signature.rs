//! HMAC request signatures for the Shopee partner API.
//!
//! Every request sent to the partner API carries an `Authorization` header
//! holding an HMAC-SHA256 digest of the *canonical string*: the final request
//! URL, a `|` separator and the serialized request body. Push notifications
//! sent by Shopee to the partner's callback URL are signed the same way.
//!
//! # Security
//!
//! [`verify_signature`] compares signatures in constant time. The comparison
//! never short-circuits on a length mismatch.
//!
//! # Example
//!
//! ```rust
//! use shopee_api::auth::signature::{compute_signature, verify_signature};
//!
//! let url = "https://partner.shopeemobile.com/api/v1/shop/get";
//! let body = br#"{"partner_id":1,"shopid":2,"timestamp":1600000000}"#;
//!
//! let signature = compute_signature(url, body, "partner-key");
//! assert_eq!(signature.len(), 64);
//! assert!(verify_signature(url, body, "partner-key", &signature));
//! ```

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Separator between the URL and the body in the canonical string.
pub const CANONICAL_SEPARATOR: u8 = b'|';

/// Builds the canonical byte string `url + "|" + body` that gets signed.
#[must_use]
pub fn canonical_string(url: &str, body: &[u8]) -> Vec<u8> {
    let mut canonical = Vec::with_capacity(url.len() + 1 + body.len());
    canonical.extend_from_slice(url.as_bytes());
    canonical.push(CANONICAL_SEPARATOR);
    canonical.extend_from_slice(body);
    canonical
}

/// Computes the request signature for `url` and `body`.
///
/// Returns the lowercase hexadecimal HMAC-SHA256 of the canonical string,
/// keyed with `secret`.
///
/// # Example
///
/// ```rust
/// use shopee_api::auth::signature::compute_signature;
///
/// let a = compute_signature("https://example.com/api/v1/items/get", b"{}", "key");
/// let b = compute_signature("https://example.com/api/v1/items/get", b"{}", "key");
/// assert_eq!(a, b);
/// assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
/// ```
#[must_use]
#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
pub fn compute_signature(url: &str, body: &[u8], secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(&canonical_string(url, body));
    hex::encode(mac.finalize().into_bytes())
}

/// Verifies a candidate signature for `url` and `body`.
///
/// Returns `true` only if `candidate` equals the signature computed with
/// `secret`. The comparison runs in constant time.
#[must_use]
pub fn verify_signature(url: &str, body: &[u8], secret: &str, candidate: &str) -> bool {
    let expected = compute_signature(url, body, secret);
    constant_time_compare(&expected, candidate)
}

/// Performs constant-time comparison of two strings.
///
/// Strings of different lengths compare unequal without leaking where they
/// differ.
#[must_use]
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://partner.shopeemobile.com/api/v1/items/get";
    const BODY: &[u8] = br#"{"partner_id":845053,"timestamp":1600000000}"#;

    // printf 'a|b' | openssl dgst -sha256 -hmac key
    #[test]
    fn test_known_vector() {
        assert_eq!(
            compute_signature("a", b"b", "key"),
            "8bbc27fa3bd74d7c55f7eda2400213ce30b3434b54909557dc7115aa8f454214"
        );
        assert_eq!(
            compute_signature(URL, BODY, "secret"),
            "14613ac14687c10faef1c5fdaa3a727e5a401fc850347eaea237a448d2e9efbf"
        );
    }

    #[test]
    fn test_canonical_string_layout() {
        assert_eq!(canonical_string("https://x/y", b"{}"), b"https://x/y|{}".to_vec());
        assert_eq!(canonical_string("https://x/y", b""), b"https://x/y|".to_vec());
    }

    #[test]
    fn test_signature_is_lowercase_hex_of_sha256_length() {
        let sig = compute_signature(URL, BODY, "secret");
        assert_eq!(sig.len(), 64);
        assert!(sig
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_signature_is_deterministic() {
        assert_eq!(
            compute_signature(URL, BODY, "secret"),
            compute_signature(URL, BODY, "secret")
        );
    }

    #[test]
    fn test_changing_any_input_changes_signature() {
        let base = compute_signature(URL, BODY, "secret");
        assert_ne!(base, compute_signature("https://other/api/v1/items/get", BODY, "secret"));
        assert_ne!(base, compute_signature(URL, b"{}", "secret"));
        assert_ne!(base, compute_signature(URL, BODY, "other-secret"));
    }

    #[test]
    fn test_verify_accepts_own_signature() {
        let sig = compute_signature(URL, BODY, "secret");
        assert!(verify_signature(URL, BODY, "secret", &sig));
    }

    #[test]
    fn test_verify_rejects_tampered_signature() {
        let mut sig = compute_signature(URL, BODY, "secret");
        let last = sig.pop().unwrap();
        sig.push(if last == '0' { '1' } else { '0' });
        assert!(!verify_signature(URL, BODY, "secret", &sig));
    }

    #[test]
    fn test_verify_rejects_different_length_and_uppercase() {
        let sig = compute_signature(URL, BODY, "secret");
        assert!(!verify_signature(URL, BODY, "secret", &sig[..10]));
        assert!(!verify_signature(URL, BODY, "secret", ""));
        assert!(!verify_signature(URL, BODY, "secret", &sig.to_uppercase()));
    }

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare("abc", "abc"));
        assert!(!constant_time_compare("abc", "abd"));
        assert!(!constant_time_compare("abc", "abcd"));
    }
}
