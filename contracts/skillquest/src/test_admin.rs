extern crate std;

use crate::{test_utils::TestContext, Error, TOKEN_UNIT};

// ─── Fee withdrawal ──────────────────────────────────────

fn collect_some_fees(ctx: &TestContext) -> i128 {
    let course_id = ctx.create_course(100 * TOKEN_UNIT, 0, 10, 0);
    ctx.enroll_paying(&ctx.student, course_id);
    ctx.client.collected_fees()
}

#[test]
fn test_withdraw_platform_fees() {
    let ctx = TestContext::new();
    let fees = collect_some_fees(&ctx);
    assert_eq!(fees, 5 * TOKEN_UNIT);

    let owner_before = ctx.balance(&ctx.owner);
    ctx.client.withdraw_platform_fees(&ctx.owner, &(2 * TOKEN_UNIT));

    assert_eq!(ctx.balance(&ctx.owner), owner_before + 2 * TOKEN_UNIT);
    assert_eq!(ctx.client.collected_fees(), 3 * TOKEN_UNIT);
}

#[test]
fn test_withdraw_more_than_collected_fails() {
    let ctx = TestContext::new();
    let fees = collect_some_fees(&ctx);

    // The reward pool shares the balance but is not withdrawable as fees.
    let result = ctx
        .client
        .try_withdraw_platform_fees(&ctx.owner, &(fees + 1));
    assert_eq!(result, Err(Ok(Error::InsufficientFees)));
    assert_eq!(ctx.client.collected_fees(), fees);
}

#[test]
fn test_withdraw_nonpositive_amount_fails() {
    let ctx = TestContext::new();
    collect_some_fees(&ctx);

    assert_eq!(
        ctx.client.try_withdraw_platform_fees(&ctx.owner, &0),
        Err(Ok(Error::InvalidAmount))
    );
    assert_eq!(
        ctx.client.try_withdraw_platform_fees(&ctx.owner, &-5),
        Err(Ok(Error::InvalidAmount))
    );
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #5)")]
fn test_withdraw_fees_non_owner_panics() {
    let ctx = TestContext::new();
    collect_some_fees(&ctx);
    ctx.client.withdraw_platform_fees(&ctx.instructor, &TOKEN_UNIT);
}

#[test]
fn test_withdraw_fees_works_while_paused() {
    let ctx = TestContext::new();
    let fees = collect_some_fees(&ctx);
    ctx.client.pause(&ctx.owner);

    // The circuit breaker halts user traffic, not owner admin.
    ctx.client.withdraw_platform_fees(&ctx.owner, &fees);
    assert_eq!(ctx.client.collected_fees(), 0);
}

// ─── Reward pool top-up ──────────────────────────────────

#[test]
fn test_top_up_reward_pool() {
    let ctx = TestContext::new();
    let sponsor = ctx.generate_address();
    ctx.sac.mint(&sponsor, &(500 * TOKEN_UNIT));

    let pool_before = ctx.balance(&ctx.client.address);
    ctx.client.top_up_reward_pool(&sponsor, &(500 * TOKEN_UNIT));

    assert_eq!(ctx.balance(&sponsor), 0);
    assert_eq!(ctx.balance(&ctx.client.address), pool_before + 500 * TOKEN_UNIT);
    // Top-ups replenish the pool, never the withdrawable fees.
    assert_eq!(ctx.client.collected_fees(), 0);
}

#[test]
fn test_top_up_nonpositive_amount_fails() {
    let ctx = TestContext::new();
    assert_eq!(
        ctx.client.try_top_up_reward_pool(&ctx.student, &0),
        Err(Ok(Error::InvalidAmount))
    );
}

// ─── Emergency withdrawal ────────────────────────────────

#[test]
fn test_emergency_withdraw_drains_everything() {
    let ctx = TestContext::new();
    collect_some_fees(&ctx);
    let treasury = ctx.generate_address();
    let total = ctx.balance(&ctx.client.address);

    ctx.client.emergency_withdraw(&ctx.owner, &treasury);

    assert_eq!(ctx.balance(&treasury), total);
    assert_eq!(ctx.balance(&ctx.client.address), 0);
    assert_eq!(ctx.client.collected_fees(), 0);
}

#[test]
fn test_emergency_withdraw_empty_balance_is_noop() {
    let ctx = TestContext::new();
    let treasury = ctx.generate_address();
    ctx.client.emergency_withdraw(&ctx.owner, &treasury);

    // Second drain with nothing left.
    ctx.client.emergency_withdraw(&ctx.owner, &treasury);
    assert_eq!(ctx.balance(&ctx.client.address), 0);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #5)")]
fn test_emergency_withdraw_non_owner_panics() {
    let ctx = TestContext::new();
    let attacker = ctx.generate_address();
    ctx.client.emergency_withdraw(&attacker, &attacker);
}

// ─── Token contract migration ────────────────────────────

#[test]
fn test_set_token_contract() {
    let ctx = TestContext::new();
    let new_admin = ctx.generate_address();
    let new_sac = ctx.env.register_stellar_asset_contract_v2(new_admin);

    ctx.client.set_token_contract(&ctx.owner, &new_sac.address());
    assert_eq!(ctx.client.token_contract(), new_sac.address());
}

#[test]
fn test_set_token_contract_non_owner_fails() {
    let ctx = TestContext::new();
    let result = ctx
        .client
        .try_set_token_contract(&ctx.instructor, &ctx.token.address);
    assert_eq!(result, Err(Ok(Error::NotAuthorized)));
}

// ─── Ownership transfer ──────────────────────────────────

#[test]
fn test_transfer_ownership() {
    let ctx = TestContext::new();
    let successor = ctx.generate_address();

    ctx.client.transfer_ownership(&ctx.owner, &successor);
    assert_eq!(ctx.client.owner(), successor);

    // The successor has admin authority; the old owner lost it.
    ctx.client.pause(&successor);
    assert!(ctx.client.is_paused());
    assert_eq!(
        ctx.client.try_unpause(&ctx.owner),
        Err(Ok(Error::NotAuthorized))
    );
}
