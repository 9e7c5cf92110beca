//! Event emission helpers for the vanity registry contract.

use soroban_sdk::{Address, BytesN, Env, Symbol};

/// Emit an event when a commitment is reserved.
pub fn emit_name_reserved(env: &Env, commitment: &BytesN<32>, owner: &Address, expiry: u64) {
    let topics = (Symbol::new(env, "name_reserved"), commitment.clone());
    env.events().publish(topics, (owner.clone(), expiry));
}

/// Emit an event when a name is registered and its deposit locked.
pub fn emit_name_registered(
    env: &Env,
    commitment: &BytesN<32>,
    owner: &Address,
    locked: i128,
    fee: i128,
    expiry: u64,
) {
    let topics = (Symbol::new(env, "name_registered"), commitment.clone());
    env.events()
        .publish(topics, (owner.clone(), locked, fee, expiry));
}

/// Emit an event when escrow moves from a record into an unlocked balance.
pub fn emit_escrow_released(env: &Env, commitment: &BytesN<32>, owner: &Address, amount: i128) {
    let topics = (Symbol::new(env, "escrow_released"), commitment.clone());
    env.events().publish(topics, (owner.clone(), amount));
}

/// Emit an event when an owner claims a record back and frees the commitment.
pub fn emit_record_released(env: &Env, commitment: &BytesN<32>, owner: &Address, amount: i128) {
    let topics = (Symbol::new(env, "record_released"), commitment.clone());
    env.events().publish(topics, (owner.clone(), amount));
}

/// Emit an event when an owner withdraws their unlocked balance.
pub fn emit_balance_withdrawn(env: &Env, owner: &Address, amount: i128) {
    let topics = (Symbol::new(env, "balance_withdrawn"),);
    env.events().publish(topics, (owner.clone(), amount));
}

/// Emit an event when the admin collects accumulated fees.
pub fn emit_fees_collected(env: &Env, admin: &Address, amount: i128) {
    let topics = (Symbol::new(env, "fees_collected"),);
    env.events().publish(topics, (admin.clone(), amount));
}

/// Emit an event when the per-character fee changes.
pub fn emit_fee_updated(env: &Env, fee_per_character: i128) {
    let topics = (Symbol::new(env, "fee_updated"),);
    env.events().publish(topics, fee_per_character);
}
