//! Name validation logic.
//!
//! Names are raw UTF-8 bytes. The registry only rejects names it could
//! never price or display sensibly:
//! - Length: 1-64 bytes
//! - No ASCII control characters

use soroban_sdk::Bytes;

/// Minimum name length in bytes.
pub const MIN_NAME_LENGTH: u32 = 1;

/// Maximum name length in bytes.
pub const MAX_NAME_LENGTH: u32 = 64;

/// Validate a name.
///
/// Returns true if the name is valid, false otherwise.
pub fn validate_name(name: &Bytes) -> bool {
    let len = name.len();

    if len < MIN_NAME_LENGTH || len > MAX_NAME_LENGTH {
        return false;
    }

    name.iter().all(|b| !is_control(b))
}

/// Check if a byte is an ASCII control character.
#[inline]
fn is_control(b: u8) -> bool {
    b < 0x20 || b == 0x7f
}
