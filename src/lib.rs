//! # Soroban Vanity Registry
//!
//! Commit-reveal name registry with escrowed, time-leased registrations.
//!
//! Names are claimed in two steps so that a name cannot be front-run while
//! it is being claimed:
//!
//! - **Reserve** a commitment (`keccak256(name)`) for a fixed window. The
//!   name itself is not revealed and nothing is paid.
//! - **Register** the revealed name before the reservation lapses, depositing
//!   tokens. A per-character fee is skimmed and the remainder is locked in
//!   escrow, buying registration time proportional to its size.
//!
//! While registered, the name resolves to its owner. After expiry the owner
//! claims the escrow back into a withdrawable balance, or anyone may reserve
//! the name again, which releases the stranded escrow to the prior owner.
//! Funds only ever leave the contract through `withdraw_balance` and
//! `collect_fees`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let commitment = client.commitment_of(&name);
//! client.reserve(&commitment, &caller);
//! client.register(&name, &caller, &deposit);
//!
//! assert_eq!(client.owner_of(&name), Some(caller));
//! ```

#![no_std]

mod config;
mod events;
mod record;
mod storage;
mod validation;

pub use config::RegistryConfig;
pub use record::Record;
pub use storage::RegistryKey;
pub use validation::{validate_name, MAX_NAME_LENGTH, MIN_NAME_LENGTH};

use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, token::TokenClient, Address, Bytes, BytesN,
    Env,
};

use crate::events::*;
use crate::storage::{
    INSTANCE_TTL_EXTEND, INSTANCE_TTL_THRESHOLD, RECORD_TTL_EXTEND, RECORD_TTL_THRESHOLD,
};

/// Error codes for the vanity registry contract.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum RegistryError {
    /// Contract has already been initialized.
    AlreadyInitialized = 1,
    /// Contract has not been initialized.
    NotInitialized = 2,
    /// Commitment carries a live reservation not superseded by a live registration.
    AlreadyReserved = 3,
    /// Commitment carries a live registration.
    AlreadyRegistered = 4,
    /// Caller does not hold a live reservation for this name.
    NotReservedByCaller = 5,
    /// Name is registered and the registration has not expired.
    AlreadyRegisteredTwice = 6,
    /// Deposit does not cover the name fee.
    InsufficientDeposit = 7,
    /// Arithmetic on amounts or timestamps overflowed.
    Overflow = 8,
    /// Registration has not expired yet.
    RegistrationStillActive = 9,
    /// Caller is not the owner of this record.
    NotRecordOwner = 10,
    /// Caller has no unlocked balance.
    NothingToWithdraw = 11,
    /// Caller is not the admin.
    NotAdmin = 12,
    /// Name format is invalid.
    InvalidName = 13,
    /// Amount is negative.
    InvalidAmount = 14,
    /// Configuration parameters are out of range.
    InvalidConfig = 15,
}

impl From<RegistryError> for soroban_sdk::Error {
    fn from(e: RegistryError) -> Self {
        soroban_sdk::Error::from_contract_error(e as u32)
    }
}

#[contract]
pub struct VanityRegistryContract;

#[contractimpl]
impl VanityRegistryContract {
    // ========== Initialization ==========

    /// Initialize the registry.
    ///
    /// This must be called once before any other operations.
    ///
    /// # Arguments
    /// * `admin` - Address allowed to change the fee and collect fees
    /// * `token` - Token contract used for deposits and withdrawals
    /// * `reservation_period` - Seconds a reservation stays valid
    /// * `seconds_per_unit` - Seconds of registration per `unit_scale` of locked value
    /// * `unit_scale` - Value denominator for `seconds_per_unit`
    /// * `fee_per_character` - Fee per byte of a registered name
    pub fn init(
        env: Env,
        admin: Address,
        token: Address,
        reservation_period: u64,
        seconds_per_unit: u64,
        unit_scale: i128,
        fee_per_character: i128,
    ) {
        if env.storage().instance().has(&RegistryKey::Admin) {
            panic_with_error!(&env, RegistryError::AlreadyInitialized);
        }

        admin.require_auth();

        let config = RegistryConfig {
            reservation_period,
            seconds_per_unit,
            unit_scale,
            fee_per_character,
        };
        if !config.is_valid() {
            panic_with_error!(&env, RegistryError::InvalidConfig);
        }

        let instance = env.storage().instance();
        instance.set(&RegistryKey::Admin, &admin);
        instance.set(&RegistryKey::Token, &token);
        instance.set(&RegistryKey::Config, &config);
        instance.set(&RegistryKey::CollectedFees, &0i128);
        Self::bump_instance(&env);
    }

    /// Get the admin address.
    pub fn admin(env: Env) -> Address {
        env.storage()
            .instance()
            .get(&RegistryKey::Admin)
            .unwrap_or_else(|| panic_with_error!(&env, RegistryError::NotInitialized))
    }

    /// Get the address of the deposit token.
    pub fn token(env: Env) -> Address {
        Self::token_address(&env)
    }

    /// Get the registry configuration.
    pub fn get_config(env: Env) -> RegistryConfig {
        Self::load_config(&env)
    }

    // ========== Reservation & Registration ==========

    /// Compute the commitment for a name.
    ///
    /// The commitment is `keccak256` over the raw name bytes, with no
    /// length prefix or salt.
    pub fn commitment_of(env: Env, name: Bytes) -> BytesN<32> {
        env.crypto().keccak256(&name).to_bytes()
    }

    /// Reserve a commitment for `reservation_period` seconds.
    ///
    /// Reserving is free. If the commitment still holds escrow from an
    /// expired registration, that escrow is credited to its prior owner.
    ///
    /// # Panics
    /// - If the commitment has a live reservation and no live registration
    /// - If the commitment has a live registration
    pub fn reserve(env: Env, commitment: BytesN<32>, caller: Address) {
        caller.require_auth();

        let config = Self::load_config(&env);
        let now = env.ledger().timestamp();
        let record = Self::load_record(&env, &commitment);

        if record.is_reservation_pending(now) {
            panic_with_error!(&env, RegistryError::AlreadyReserved);
        }

        if record.is_registered(now) {
            panic_with_error!(&env, RegistryError::AlreadyRegistered);
        }

        let expiry = now
            .checked_add(config.reservation_period)
            .unwrap_or_else(|| panic_with_error!(&env, RegistryError::Overflow));

        // Release stranded escrow before the record changes hands
        Self::release_escrow(&env, &commitment, &record);

        Self::save_record(&env, &commitment, &Record::reserved(caller.clone(), expiry));
        Self::bump_instance(&env);

        log!(&env, "reserved", commitment, caller, expiry);
        emit_name_reserved(&env, &commitment, &caller, expiry);
    }

    /// Register a reserved name by depositing tokens.
    ///
    /// # Arguments
    /// * `name` - The revealed name; its commitment must be reserved by `caller`
    /// * `caller` - Address holding the reservation
    /// * `deposit` - Amount of tokens to pull from `caller`
    ///
    /// # Returns
    /// Ledger timestamp at which the registration expires
    ///
    /// # Panics
    /// - If the name is invalid or the deposit negative
    /// - If `caller` does not hold a live reservation on the name
    /// - If the name is already registered
    /// - If the deposit does not cover the fee
    /// - If the duration or expiry overflows
    pub fn register(env: Env, name: Bytes, caller: Address, deposit: i128) -> u64 {
        caller.require_auth();

        if !validation::validate_name(&name) {
            panic_with_error!(&env, RegistryError::InvalidName);
        }
        if deposit < 0 {
            panic_with_error!(&env, RegistryError::InvalidAmount);
        }

        let config = Self::load_config(&env);
        let now = env.ledger().timestamp();
        let commitment = Self::commitment_of(env.clone(), name.clone());
        let mut record = Self::load_record(&env, &commitment);

        if !record.is_reserved_by(&caller, now) {
            panic_with_error!(&env, RegistryError::NotReservedByCaller);
        }

        if record.is_registered(now) {
            panic_with_error!(&env, RegistryError::AlreadyRegisteredTwice);
        }

        let fee = config
            .fee_for(name.len())
            .unwrap_or_else(|| panic_with_error!(&env, RegistryError::Overflow));
        if deposit < fee {
            panic_with_error!(&env, RegistryError::InsufficientDeposit);
        }

        let locked = deposit - fee;
        let expiry = config
            .duration_for(locked)
            .and_then(|duration| now.checked_add(duration))
            .unwrap_or_else(|| panic_with_error!(&env, RegistryError::Overflow));
        let collected = Self::collected_fees(env.clone())
            .checked_add(fee)
            .unwrap_or_else(|| panic_with_error!(&env, RegistryError::Overflow));

        if deposit > 0 {
            Self::token_client(&env).transfer(&caller, &env.current_contract_address(), &deposit);
        }

        // An earlier registration inside the same reservation may have left escrow behind
        Self::release_escrow(&env, &commitment, &record);

        record.registration_expiry = expiry;
        record.locked_amount = locked;
        Self::save_record(&env, &commitment, &record);

        env.storage()
            .instance()
            .set(&RegistryKey::CollectedFees, &collected);
        Self::bump_instance(&env);

        log!(&env, "registered", commitment, caller, locked, fee, expiry);
        emit_name_registered(&env, &commitment, &caller, locked, fee, expiry);

        expiry
    }

    // ========== Queries ==========

    /// Resolve a name to its owner.
    ///
    /// Returns `None` unless the name has a live registration. A reservation
    /// alone never resolves, and a name that could never be registered
    /// resolves to nobody.
    pub fn owner_of(env: Env, name: Bytes) -> Option<Address> {
        if !validation::validate_name(&name) {
            return None;
        }

        let commitment = Self::commitment_of(env.clone(), name);
        Self::load_record(&env, &commitment).resolved_owner(env.ledger().timestamp())
    }

    /// Get the record stored for a commitment.
    pub fn get_record(env: Env, commitment: BytesN<32>) -> Record {
        Self::load_record(&env, &commitment)
    }

    /// Get the unlocked, withdrawable balance of an address.
    pub fn unlocked_balance(env: Env, owner: Address) -> i128 {
        env.storage()
            .persistent()
            .get(&RegistryKey::Balance(owner))
            .unwrap_or(0)
    }

    /// Get the fees accumulated and not yet collected.
    pub fn collected_fees(env: Env) -> i128 {
        env.storage()
            .instance()
            .get(&RegistryKey::CollectedFees)
            .unwrap_or(0)
    }

    // ========== Escrow & Balances ==========

    /// Move the escrow of an expired registration into the owner's balance.
    ///
    /// The record is reset, so the name is free for anyone to reserve.
    ///
    /// # Returns
    /// The amount credited to `caller`
    ///
    /// # Panics
    /// - If the registration has not expired
    /// - If `caller` is not the record owner
    pub fn claim_locked_balance(env: Env, commitment: BytesN<32>, caller: Address) -> i128 {
        caller.require_auth();

        Self::load_config(&env);
        let now = env.ledger().timestamp();
        let record = Self::load_record(&env, &commitment);

        if record.is_registered(now) {
            panic_with_error!(&env, RegistryError::RegistrationStillActive);
        }

        if record.owner.as_ref() != Some(&caller) {
            panic_with_error!(&env, RegistryError::NotRecordOwner);
        }

        let amount = record.locked_amount;
        Self::release_escrow(&env, &commitment, &record);
        Self::save_record(&env, &commitment, &Record::empty());
        Self::bump_instance(&env);

        log!(&env, "claimed", commitment, caller, amount);
        emit_record_released(&env, &commitment, &caller, amount);

        amount
    }

    /// Withdraw the caller's entire unlocked balance.
    ///
    /// # Returns
    /// The amount transferred to `caller`
    ///
    /// # Panics
    /// - If the caller's balance is zero
    pub fn withdraw_balance(env: Env, caller: Address) -> i128 {
        caller.require_auth();

        Self::load_config(&env);
        let amount = Self::unlocked_balance(env.clone(), caller.clone());
        if amount <= 0 {
            panic_with_error!(&env, RegistryError::NothingToWithdraw);
        }

        env.storage()
            .persistent()
            .remove(&RegistryKey::Balance(caller.clone()));

        Self::token_client(&env).transfer(&env.current_contract_address(), &caller, &amount);
        Self::bump_instance(&env);

        log!(&env, "withdrawn", caller, amount);
        emit_balance_withdrawn(&env, &caller, amount);

        amount
    }

    // ========== Admin Functions ==========

    /// Transfer all collected fees to the admin (admin only).
    ///
    /// # Returns
    /// The amount transferred
    pub fn collect_fees(env: Env, caller: Address) -> i128 {
        Self::require_admin(&env, &caller);

        let amount = Self::collected_fees(env.clone());
        if amount == 0 {
            return 0;
        }

        env.storage()
            .instance()
            .set(&RegistryKey::CollectedFees, &0i128);

        Self::token_client(&env).transfer(&env.current_contract_address(), &caller, &amount);
        Self::bump_instance(&env);

        emit_fees_collected(&env, &caller, amount);

        amount
    }

    /// Set the fee charged per name byte (admin only).
    pub fn set_fee_per_character(env: Env, caller: Address, fee: i128) {
        Self::require_admin(&env, &caller);

        if fee < 0 {
            panic_with_error!(&env, RegistryError::InvalidAmount);
        }

        let mut config = Self::load_config(&env);
        config.fee_per_character = fee;
        env.storage().instance().set(&RegistryKey::Config, &config);
        Self::bump_instance(&env);

        emit_fee_updated(&env, fee);
    }

    // ========== Internal Helpers ==========

    fn require_admin(env: &Env, caller: &Address) {
        let admin: Address = env
            .storage()
            .instance()
            .get(&RegistryKey::Admin)
            .unwrap_or_else(|| panic_with_error!(env, RegistryError::NotInitialized));

        if *caller != admin {
            panic_with_error!(env, RegistryError::NotAdmin);
        }

        caller.require_auth();
    }

    fn load_config(env: &Env) -> RegistryConfig {
        env.storage()
            .instance()
            .get(&RegistryKey::Config)
            .unwrap_or_else(|| panic_with_error!(env, RegistryError::NotInitialized))
    }

    fn token_address(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&RegistryKey::Token)
            .unwrap_or_else(|| panic_with_error!(env, RegistryError::NotInitialized))
    }

    fn token_client(env: &Env) -> TokenClient<'_> {
        TokenClient::new(env, &Self::token_address(env))
    }

    fn load_record(env: &Env, commitment: &BytesN<32>) -> Record {
        env.storage()
            .persistent()
            .get(&RegistryKey::Record(commitment.clone()))
            .unwrap_or_else(Record::empty)
    }

    fn save_record(env: &Env, commitment: &BytesN<32>, record: &Record) {
        let key = RegistryKey::Record(commitment.clone());
        env.storage().persistent().set(&key, record);
        env.storage()
            .persistent()
            .extend_ttl(&key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND);
    }

    /// Credit a record's escrow to its owner's unlocked balance.
    ///
    /// Does not touch the record; callers overwrite it afterwards.
    fn release_escrow(env: &Env, commitment: &BytesN<32>, record: &Record) {
        let owner = match &record.owner {
            Some(owner) if record.locked_amount > 0 => owner,
            _ => return,
        };

        let key = RegistryKey::Balance(owner.clone());
        let balance = Self::unlocked_balance(env.clone(), owner.clone())
            .checked_add(record.locked_amount)
            .unwrap_or_else(|| panic_with_error!(env, RegistryError::Overflow));

        env.storage().persistent().set(&key, &balance);
        env.storage()
            .persistent()
            .extend_ttl(&key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND);

        emit_escrow_released(env, commitment, owner, record.locked_amount);
    }

    fn bump_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
    }
}
