use soroban_sdk::{symbol_short, Address, Env};

pub fn emit_mint(env: &Env, admin: Address, to: Address, amount: i128) {
    let topics = (symbol_short!("mint"), admin, to);
    env.events().publish(topics, amount);
}

pub fn emit_transfer(env: &Env, from: Address, to: Address, amount: i128) {
    let topics = (symbol_short!("transfer"), from, to);
    env.events().publish(topics, amount);
}

pub fn emit_approve(env: &Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
    let topics = (symbol_short!("approve"), from, spender);
    env.events().publish(topics, (amount, expiration_ledger));
}

pub fn emit_burn(env: &Env, from: Address, amount: i128) {
    let topics = (symbol_short!("burn"), from);
    env.events().publish(topics, amount);
}
