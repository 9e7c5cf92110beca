//! Registry configuration and pricing arithmetic.

use soroban_sdk::contracttype;

/// Pricing and timing parameters fixed at initialization.
///
/// Only `fee_per_character` may change afterwards, through the admin setter.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryConfig {
    /// Seconds a reservation stays valid.
    pub reservation_period: u64,

    /// Seconds of registration bought by `unit_scale` units of locked value.
    pub seconds_per_unit: u64,

    /// Value denominator for `seconds_per_unit`. Must be at least 1.
    pub unit_scale: i128,

    /// Fee charged per byte of the registered name.
    pub fee_per_character: i128,
}

impl RegistryConfig {
    /// Check the parameters accepted by `init`.
    pub fn is_valid(&self) -> bool {
        self.reservation_period > 0 && self.unit_scale >= 1 && self.fee_per_character >= 0
    }

    /// Fee for a name of `name_len` bytes, `None` on overflow.
    pub fn fee_for(&self, name_len: u32) -> Option<i128> {
        self.fee_per_character.checked_mul(name_len as i128)
    }

    /// Registration duration in seconds bought by `locked` units of value.
    ///
    /// Rounds toward zero. Returns `None` if the product overflows or the
    /// result does not fit a ledger timestamp.
    pub fn duration_for(&self, locked: i128) -> Option<u64> {
        let seconds = locked
            .checked_mul(self.seconds_per_unit as i128)?
            .checked_div(self.unit_scale)?;
        u64::try_from(seconds).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(seconds_per_unit: u64, unit_scale: i128) -> RegistryConfig {
        RegistryConfig {
            reservation_period: 60,
            seconds_per_unit,
            unit_scale,
            fee_per_character: 2,
        }
    }

    #[test]
    fn test_fee_scales_with_length() {
        let cfg = config(1, 1);
        assert_eq!(cfg.fee_for(0), Some(0));
        assert_eq!(cfg.fee_for(4), Some(8));
    }

    #[test]
    fn test_duration_rounds_down() {
        // 25 seconds per 1e9 units, like seconds-per-gwei pricing
        let cfg = config(25, 1_000_000_000);
        assert_eq!(cfg.duration_for(1_000_000_000_000_000_000), Some(25_000_000_000));
        assert_eq!(cfg.duration_for(1_999_999_999), Some(49));
        assert_eq!(cfg.duration_for(0), Some(0));
    }

    #[test]
    fn test_duration_overflow_is_rejected() {
        let cfg = config(u64::MAX, 1);
        assert_eq!(cfg.duration_for(i128::MAX), None);
        // Fits i128 but not a u64 timestamp
        assert_eq!(cfg.duration_for(2), None);
    }

    #[test]
    fn test_invalid_configs() {
        assert!(config(1, 1).is_valid());
        assert!(!config(1, 0).is_valid());

        let mut cfg = config(1, 1);
        cfg.reservation_period = 0;
        assert!(!cfg.is_valid());

        let mut cfg = config(1, 1);
        cfg.fee_per_character = -1;
        assert!(!cfg.is_valid());
    }
}
