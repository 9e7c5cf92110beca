//! Storage key definitions for the vanity registry contract.

use soroban_sdk::{contracttype, Address, BytesN};

/// Storage keys for the vanity registry contract.
///
/// Configuration lives in instance storage; records and balances are
/// persistent entries keyed by commitment and identity respectively.
#[contracttype]
#[derive(Clone, Debug)]
pub enum RegistryKey {
    /// Contract administrator address.
    Admin,

    /// Address of the token contract used for deposits and withdrawals.
    Token,

    /// Registry configuration (`RegistryConfig`).
    Config,

    /// Fees accumulated by registrations and not yet collected by the admin.
    CollectedFees,

    /// Maps a commitment to its `Record`.
    Record(BytesN<32>),

    /// Maps an identity to its unlocked, withdrawable balance.
    Balance(Address),
}

/// Time-to-live for records and balances in ledger entries.
pub const RECORD_TTL_THRESHOLD: u32 = 518400; // ~30 days
pub const RECORD_TTL_EXTEND: u32 = 2592000; // ~150 days

/// Time-to-live for the contract instance (configuration, fees).
pub const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
pub const INSTANCE_TTL_EXTEND: u32 = 518400;
