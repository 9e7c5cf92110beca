//! Record struct and its time-based predicates.

use soroban_sdk::{contracttype, Address};

/// State held against a single commitment.
///
/// A record is never removed from storage. Reservation and registration
/// overwrite it, and a claim resets it to the empty record.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    /// Current claimant, `None` when the commitment is unowned.
    pub owner: Option<Address>,

    /// Ledger timestamp at which the reservation lapses.
    pub reservation_expiry: u64,

    /// Ledger timestamp at which the registration lapses. Zero until the
    /// reservation is redeemed; a value not after `now` means lapsed.
    pub registration_expiry: u64,

    /// Funds escrowed by the last registration, claimable by `owner`
    /// once the registration has expired.
    pub locked_amount: i128,
}

impl Record {
    /// The unowned, all-zero record.
    pub fn empty() -> Self {
        Self {
            owner: None,
            reservation_expiry: 0,
            registration_expiry: 0,
            locked_amount: 0,
        }
    }

    /// A fresh reservation held by `owner` until `reservation_expiry`.
    pub fn reserved(owner: Address, reservation_expiry: u64) -> Self {
        Self {
            owner: Some(owner),
            reservation_expiry,
            registration_expiry: 0,
            locked_amount: 0,
        }
    }

    /// True while the registration is live.
    pub fn is_registered(&self, now: u64) -> bool {
        now < self.registration_expiry
    }

    /// True while a reservation is live and no live registration supersedes it.
    ///
    /// A registration that has already lapsed inside the window leaves the
    /// reservation with its holder, who may register again.
    pub fn is_reservation_pending(&self, now: u64) -> bool {
        now < self.reservation_expiry && !self.is_registered(now)
    }

    /// True when `caller` holds a live reservation on this record.
    pub fn is_reserved_by(&self, caller: &Address, now: u64) -> bool {
        now < self.reservation_expiry && self.owner.as_ref() == Some(caller)
    }

    /// Owner the name resolves to at `now`, if any.
    pub fn resolved_owner(&self, now: u64) -> Option<Address> {
        if self.is_registered(now) {
            self.owner.clone()
        } else {
            None
        }
    }
}
