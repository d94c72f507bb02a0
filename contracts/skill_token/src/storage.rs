//! Balance, allowance and metadata storage.
//!
//! Balances live in persistent storage with TTL bumps on access. Allowances
//! live in temporary storage whose lifetime is tied to the approval's
//! expiration ledger, so expired grants simply vanish.

use soroban_sdk::{contracttype, panic_with_error, Address, Env, String};

use crate::Error;

const BALANCE_TTL_THRESHOLD: u32 = 518_400;
const BALANCE_TTL_EXTEND: u32 = 2_592_000;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceDataKey {
    pub from: Address,
    pub spender: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub decimal: u32,
    pub name: String,
    pub symbol: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    Metadata,
    Balance(Address),
    Allowance(AllowanceDataKey),
}

// ───────────────────────────────────────────────────────────────────
// Admin & metadata
// ───────────────────────────────────────────────────────────────────

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

pub fn set_metadata(env: &Env, metadata: &TokenMetadata) {
    env.storage().instance().set(&DataKey::Metadata, metadata);
}

pub fn metadata(env: &Env) -> TokenMetadata {
    match env.storage().instance().get(&DataKey::Metadata) {
        Some(metadata) => metadata,
        None => panic_with_error!(env, Error::NotInitialized),
    }
}

// ───────────────────────────────────────────────────────────────────
// Balances
// ───────────────────────────────────────────────────────────────────

pub fn read_balance(env: &Env, address: &Address) -> i128 {
    let key = DataKey::Balance(address.clone());
    match env.storage().persistent().get::<_, i128>(&key) {
        Some(balance) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, BALANCE_TTL_THRESHOLD, BALANCE_TTL_EXTEND);
            balance
        }
        None => 0,
    }
}

fn write_balance(env: &Env, address: &Address, amount: i128) {
    let key = DataKey::Balance(address.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_TTL_THRESHOLD, BALANCE_TTL_EXTEND);
}

pub fn receive_balance(env: &Env, address: &Address, amount: i128) {
    let balance = read_balance(env, address);
    write_balance(env, address, balance + amount);
}

pub fn spend_balance(env: &Env, address: &Address, amount: i128) {
    let balance = read_balance(env, address);
    if balance < amount {
        panic_with_error!(env, Error::InsufficientBalance);
    }
    write_balance(env, address, balance - amount);
}

// ───────────────────────────────────────────────────────────────────
// Allowances
// ───────────────────────────────────────────────────────────────────

pub fn read_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = DataKey::Allowance(AllowanceDataKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    match env.storage().temporary().get::<_, AllowanceValue>(&key) {
        Some(allowance) if allowance.expiration_ledger >= env.ledger().sequence() => allowance,
        // Absent or past its expiration ledger: nothing left to spend.
        _ => AllowanceValue {
            amount: 0,
            expiration_ledger: 0,
        },
    }
}

pub fn write_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) {
    let key = DataKey::Allowance(AllowanceDataKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    let allowance = AllowanceValue {
        amount,
        expiration_ledger,
    };
    env.storage().temporary().set(&key, &allowance);

    if amount > 0 {
        // Keep the entry alive exactly until it expires.
        let live_for = expiration_ledger - env.ledger().sequence();
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
}

pub fn spend_allowance(env: &Env, from: &Address, spender: &Address, amount: i128) {
    let allowance = read_allowance(env, from, spender);
    if allowance.amount < amount {
        panic_with_error!(env, Error::InsufficientAllowance);
    }
    if amount > 0 {
        write_allowance(
            env,
            from,
            spender,
            allowance.amount - amount,
            allowance.expiration_ledger,
        );
    }
}
