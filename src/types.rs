//! Request model, reference rule, and the binary wire codec.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::TransportError;

/// Modulus of the session validation rule.
pub const VALIDATION_MODULUS: u32 = 23;

/// Lower bound (inclusive) sampled when a request parameter is left unset.
pub const PARAM_MIN: u32 = 1;

/// Upper bound (inclusive) sampled when a request parameter is left unset.
pub const PARAM_MAX: u32 = 1000;

/// A single validation request: two integers, sent to the server as
/// `user_id` and `session_id`.
///
/// Requests are independent and stateless. One is built per call and never
/// mutated afterwards; there are no uniqueness or ordering constraints
/// between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRequest {
    pub user_id: u32,
    pub session_id: u32,
}

impl ValidationRequest {
    pub fn new(user_id: u32, session_id: u32) -> Self {
        Self {
            user_id,
            session_id,
        }
    }

    /// Build a request, drawing each unset parameter uniformly at random
    /// from `[PARAM_MIN, PARAM_MAX]` at call time.
    pub fn sampled(user_id: Option<u32>, session_id: Option<u32>) -> Self {
        let mut rng = rand::thread_rng();
        Self {
            user_id: user_id.unwrap_or_else(|| rng.gen_range(PARAM_MIN..=PARAM_MAX)),
            session_id: session_id.unwrap_or_else(|| rng.gen_range(PARAM_MIN..=PARAM_MAX)),
        }
    }

    /// Reference value a correctly behaving server must return for this
    /// request: `(user_id XOR session_id) mod 23 == 0`.
    pub fn expected(&self) -> bool {
        (self.user_id ^ self.session_id) % VALIDATION_MODULUS == 0
    }

    /// Encode as the 8-byte WebSocket request frame: `user_id` in bytes
    /// 0..4, `session_id` in bytes 4..8, each u32 little-endian.
    pub fn to_frame(&self) -> [u8; 8] {
        let mut frame = [0u8; 8];
        frame[..4].copy_from_slice(&self.user_id.to_le_bytes());
        frame[4..].copy_from_slice(&self.session_id.to_le_bytes());
        frame
    }
}

/// Decode the 4-byte WebSocket result frame: one u32 little-endian,
/// nonzero meaning the session is valid.
pub fn decode_result_frame(data: &[u8]) -> Result<bool, TransportError> {
    let bytes: [u8; 4] = data.try_into().map_err(|_| {
        TransportError::Decode(format!(
            "expected 4-byte result frame, got {} bytes",
            data.len()
        ))
    })?;
    Ok(u32::from_le_bytes(bytes) != 0)
}
