/// Format-only decoding of structured (JWT-shaped) session tokens.
///
/// A structured token is three dot-separated segments: header, payload and
/// signature, each base64-encoded, with the payload carrying a JSON object of
/// claims. This module only checks the token's shape and decodes the claims.
/// It never verifies the signature segment, so a successfully decoded token
/// says nothing about who minted it.
use base64::engine::general_purpose::{
    STANDARD as B64_STD, URL_SAFE as B64_URL_PAD, URL_SAFE_NO_PAD as B64_URL,
};
use base64::Engine;
use serde_json::Value;
use thiserror::Error;

/// Decoded claims: the JSON object carried in the payload segment.
pub type Claims = serde_json::Map<String, Value>;

/// A structurally valid token: the three raw segments plus the decoded claims.
#[derive(Debug, Clone)]
pub struct RawToken {
    pub header: String,
    pub payload: String,
    pub signature: String,
    pub claims: Claims,
}

#[derive(Error, Debug)]
pub enum TokenFormatError {
    #[error("expected 3 dot-separated segments, got {0}")]
    SegmentCount(usize),
    #[error("payload segment is not valid base64")]
    PayloadBase64,
    #[error("payload segment is not valid JSON")]
    PayloadJson,
    #[error("payload JSON is not an object")]
    PayloadNotObject,
}

/// Parse a token's structure and decode its claims, reporting what went wrong
/// on malformed input. Signature bytes are carried through untouched and
/// unverified.
pub fn parse_unverified(token: &str) -> Result<RawToken, TokenFormatError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(TokenFormatError::SegmentCount(segments.len()));
    }
    let (header, payload, signature) = (segments[0], segments[1], segments[2]);

    let raw = decode_b64_any(payload).map_err(|_| TokenFormatError::PayloadBase64)?;
    let value: Value = serde_json::from_slice(&raw).map_err(|_| TokenFormatError::PayloadJson)?;

    let Value::Object(claims) = value else {
        return Err(TokenFormatError::PayloadNotObject);
    };

    Ok(RawToken {
        header: header.to_owned(),
        payload: payload.to_owned(),
        signature: signature.to_owned(),
        claims,
    })
}

/// Decode a token's claims without verifying its signature.
///
/// Returns `None` for anything that is not a three-segment token with a
/// base64-decodable, JSON-object payload. Callers treat `None` as "not a
/// valid token".
pub fn decode_claims_unverified(token: &str) -> Option<Claims> {
    parse_unverified(token).ok().map(|parsed| parsed.claims)
}

fn decode_b64_any(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    // Well-formed tokens use URL-safe base64 without padding; fall back to
    // the padded URL-safe and standard alphabets for tokens minted by laxer
    // encoders.
    B64_URL
        .decode(s)
        .or_else(|_| B64_URL_PAD.decode(s))
        .or_else(|_| B64_STD.decode(s))
}
