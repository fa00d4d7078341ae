#![cfg(test)]

use super::{EscrowTest, AMOUNT, INITIAL_BALANCE};
use common::escrow::types::{Escrow, EscrowError as Error, EscrowStatus};
use soroban_sdk::testutils::{Events, Ledger};
use soroban_sdk::{vec, IntoVal, Val, Vec};

#[test]
fn test_seller_cancels_and_buyer_is_refunded() {
    let test: EscrowTest = EscrowTest::setup();
    let escrow_id: u64 = test.create_default();
    assert_eq!(test.token_client.balance(&test.buyer), INITIAL_BALANCE - AMOUNT);

    assert!(test.escrow_client.cancel(&test.seller, &escrow_id));

    assert_eq!(
        test.escrow_client.get_status(&escrow_id),
        EscrowStatus::Cancelled
    );
    assert_eq!(test.token_client.balance(&test.buyer), INITIAL_BALANCE);
    assert_eq!(test.token_client.balance(&test.seller), INITIAL_BALANCE);
    assert_eq!(test.custody_balance(), 0);
    assert_eq!(test.escrow_client.get_total_locked(), 0);

    let result = test.escrow_client.try_approve(&test.buyer, &escrow_id);
    assert_eq!(result, Err(Ok(Error::InvalidStatus)));
}

#[test]
fn test_buyer_cancels_after_partial_approval() {
    let test: EscrowTest = EscrowTest::setup();
    let escrow_id: u64 = test.create_default();

    test.escrow_client.approve(&test.seller, &escrow_id);
    assert!(test.escrow_client.cancel(&test.buyer, &escrow_id));

    // Flags stay as they were when the escrow was cancelled
    let escrow: Escrow = test.escrow_client.get_escrow(&escrow_id);
    assert_eq!(escrow.status, EscrowStatus::Cancelled);
    assert!(!escrow.buyer_approved);
    assert!(escrow.seller_approved);
    assert_eq!(test.token_client.balance(&test.buyer), INITIAL_BALANCE);
}

#[test]
fn test_cancel_twice() {
    let test: EscrowTest = EscrowTest::setup();
    let escrow_id: u64 = test.create_default();

    test.escrow_client.cancel(&test.buyer, &escrow_id);
    let result = test.escrow_client.try_cancel(&test.seller, &escrow_id);
    assert_eq!(result, Err(Ok(Error::InvalidStatus)));

    // Refunded exactly once
    assert_eq!(test.token_client.balance(&test.buyer), INITIAL_BALANCE);
    assert_eq!(test.custody_balance(), 0);
}

#[test]
fn test_cancel_by_stranger() {
    let test: EscrowTest = EscrowTest::setup();
    let escrow_id: u64 = test.create_default();

    let result = test.escrow_client.try_cancel(&test.stranger, &escrow_id);
    assert_eq!(result, Err(Ok(Error::NotAuthorized)));
    assert_eq!(test.escrow_client.get_status(&escrow_id), EscrowStatus::Pending);
    assert_eq!(test.custody_balance(), AMOUNT);
}

#[test]
fn test_cancel_requires_caller_auth() {
    let test: EscrowTest = EscrowTest::setup();
    let escrow_id: u64 = test.create_default();

    // Drop the blanket auth mock so the caller signature is actually checked
    test.env.set_auths(&[]);

    assert!(test.escrow_client.try_cancel(&test.buyer, &escrow_id).is_err());
    assert!(test.escrow_client.try_cancel(&test.seller, &escrow_id).is_err());

    assert_eq!(test.escrow_client.get_status(&escrow_id), EscrowStatus::Pending);
    assert_eq!(test.custody_balance(), AMOUNT);
    assert_eq!(test.token_client.balance(&test.buyer), INITIAL_BALANCE - AMOUNT);
    assert_eq!(test.escrow_client.get_total_locked(), AMOUNT);
}

#[test]
fn test_cancel_missing_escrow() {
    let test: EscrowTest = EscrowTest::setup();

    let result = test.escrow_client.try_cancel(&test.seller, &3);
    assert_eq!(result, Err(Ok(Error::NotFound)));
}

#[test]
fn test_cancel_publishes_event() {
    let test: EscrowTest = EscrowTest::setup();
    let escrow_id: u64 = test.create_default();
    test.env.ledger().set_sequence_number(55);

    test.escrow_client.cancel(&test.seller, &escrow_id);

    let (contract, topics, data) = test.env.events().all().last().unwrap();
    let expected_topics: Vec<Val> = ("Cancelled",).into_val(&test.env);
    let expected_data: Vec<Val> = vec![
        &test.env,
        escrow_id.into_val(&test.env),
        test.seller.into_val(&test.env),
        test.buyer.into_val(&test.env),
        test.seller.into_val(&test.env),
        AMOUNT.into_val(&test.env),
        55u32.into_val(&test.env),
    ];
    let data: Vec<Val> = data.into_val(&test.env);

    assert_eq!(contract, test.escrow_client.address);
    assert_eq!(topics, expected_topics);
    assert_eq!(data, expected_data);
}
