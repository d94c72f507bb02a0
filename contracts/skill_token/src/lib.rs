//! # SkillQuest Token Contract
//!
//! The platform's unit of payment and reward: a fungible token implementing
//! the standard Soroban [`TokenInterface`], plus an admin-gated `mint` used
//! to seed the reward pool. The platform contract never touches balances
//! directly: every fee, payment and reward moves through this interface.
//!
//! The `TokenInterface` signatures are fixed and cannot return `Result`, so
//! failures surface through `panic_with_error!` with the typed codes in
//! [`Error`]; the host rolls back the whole transaction either way.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, token::TokenInterface, Address, Env,
    String,
};

mod events;
mod storage;


use storage::TokenMetadata;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NegativeAmount = 3,
    InsufficientBalance = 4,
    InsufficientAllowance = 5,
    ExpirationInPast = 6,
}

fn check_nonnegative_amount(env: &Env, amount: i128) {
    if amount < 0 {
        panic_with_error!(env, Error::NegativeAmount);
    }
}

#[contract]
pub struct SkillToken;

#[contractimpl]
impl SkillToken {
    /// Set the admin and token metadata. Callable exactly once.
    pub fn initialize(
        env: Env,
        admin: Address,
        decimal: u32,
        name: String,
        symbol: String,
    ) -> Result<(), Error> {
        if storage::has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }
        storage::set_admin(&env, &admin);
        storage::set_metadata(
            &env,
            &TokenMetadata {
                decimal,
                name,
                symbol,
            },
        );
        Ok(())
    }

    /// Mint `amount` new tokens to `to`. Admin-only.
    pub fn mint(env: Env, to: Address, amount: i128) -> Result<(), Error> {
        check_nonnegative_amount(&env, amount);
        let admin = storage::admin(&env)?;
        admin.require_auth();

        storage::receive_balance(&env, &to, amount);
        events::emit_mint(&env, admin, to, amount);
        Ok(())
    }

    pub fn admin(env: Env) -> Result<Address, Error> {
        storage::admin(&env)
    }
}

#[contractimpl]
impl TokenInterface for SkillToken {
    fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        storage::read_allowance(&env, &from, &spender).amount
    }

    fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();
        check_nonnegative_amount(&env, amount);

        if amount > 0 && expiration_ledger < env.ledger().sequence() {
            panic_with_error!(&env, Error::ExpirationInPast);
        }
        storage::write_allowance(&env, &from, &spender, amount, expiration_ledger);
        events::emit_approve(&env, from, spender, amount, expiration_ledger);
    }

    fn balance(env: Env, id: Address) -> i128 {
        storage::read_balance(&env, &id)
    }

    fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        check_nonnegative_amount(&env, amount);

        storage::spend_balance(&env, &from, amount);
        storage::receive_balance(&env, &to, amount);
        events::emit_transfer(&env, from, to, amount);
    }

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        check_nonnegative_amount(&env, amount);

        storage::spend_allowance(&env, &from, &spender, amount);
        storage::spend_balance(&env, &from, amount);
        storage::receive_balance(&env, &to, amount);
        events::emit_transfer(&env, from, to, amount);
    }

    fn burn(env: Env, from: Address, amount: i128) {
        from.require_auth();
        check_nonnegative_amount(&env, amount);

        storage::spend_balance(&env, &from, amount);
        events::emit_burn(&env, from, amount);
    }

    fn burn_from(env: Env, spender: Address, from: Address, amount: i128) {
        spender.require_auth();
        check_nonnegative_amount(&env, amount);

        storage::spend_allowance(&env, &from, &spender, amount);
        storage::spend_balance(&env, &from, amount);
        events::emit_burn(&env, from, amount);
    }

    fn decimals(env: Env) -> u32 {
        storage::metadata(&env).decimal
    }

    fn name(env: Env) -> String {
        storage::metadata(&env).name
    }

    fn symbol(env: Env) -> String {
        storage::metadata(&env).symbol
    }
}
