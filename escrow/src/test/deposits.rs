#![cfg(test)]

use super::{EscrowTest, DOWN_PAYMENT, PURCHASE_AMOUNT, STARTING_FUNDS};
use common::escrow::types::{EscrowError as Error, Sale};

#[test]
fn test_deposits_accumulate_into_one_balance() {
    let test: EscrowTest = EscrowTest::setup();
    let sale_id: u64 = test.open_sale();

    assert_eq!(test.escrow.deposit_remaining_amount(&sale_id, &test.lender, &30), 30);
    assert_eq!(test.escrow.deposit_down_payment(&sale_id, &test.buyer, &15), 45);
    assert_eq!(test.escrow.deposit_down_payment(&sale_id, &test.buyer, &5), 50);

    let sale: Sale = test.escrow.get_sale(&sale_id);
    assert_eq!(sale.held_balance, 50);
    assert_eq!(sale.buyer_deposited, 20);
    assert_eq!(sale.lender_deposited, 30);

    assert_eq!(test.token.balance(&test.escrow.address), 50);
    assert_eq!(test.escrow.get_balance_of(&test.buyer), STARTING_FUNDS - 20);
    assert_eq!(test.escrow.get_balance_of(&test.lender), STARTING_FUNDS - 30);
}

#[test]
fn test_left_payment_amount_tracks_deposits() {
    let test: EscrowTest = EscrowTest::setup();
    let sale_id: u64 = test.open_sale();

    test.escrow
        .deposit_down_payment(&sale_id, &test.buyer, &DOWN_PAYMENT);
    assert_eq!(test.escrow.left_payment_amount(&sale_id), 80);

    test.escrow
        .deposit_remaining_amount(&sale_id, &test.lender, &(PURCHASE_AMOUNT - DOWN_PAYMENT));
    assert_eq!(test.escrow.left_payment_amount(&sale_id), 0);
    assert_eq!(test.escrow.get_balance(&sale_id), PURCHASE_AMOUNT);
}

#[test]
fn test_over_deposit_stays_visible() {
    let test: EscrowTest = EscrowTest::setup();
    let sale_id: u64 = test.open_sale();

    test.escrow.deposit_down_payment(&sale_id, &test.buyer, &150);

    assert_eq!(test.escrow.get_balance(&sale_id), 150);
    assert_eq!(test.escrow.left_payment_amount(&sale_id), 0);
}

#[test]
fn test_zero_deposit_is_a_no_op() {
    let test: EscrowTest = EscrowTest::setup();
    let sale_id: u64 = test.open_sale();

    assert_eq!(test.escrow.deposit_down_payment(&sale_id, &test.buyer, &0), 0);
    assert_eq!(test.token.balance(&test.buyer), STARTING_FUNDS);
}

#[test]
fn test_negative_deposit_is_rejected() {
    let test: EscrowTest = EscrowTest::setup();
    let sale_id: u64 = test.open_sale();
    let before: Sale = test.escrow.get_sale(&sale_id);

    assert_eq!(
        test.escrow.try_deposit_down_payment(&sale_id, &test.buyer, &-10),
        Err(Ok(Error::InvalidAmount))
    );
    assert_eq!(
        test.escrow.try_deposit_remaining_amount(&sale_id, &test.lender, &-1),
        Err(Ok(Error::InvalidAmount))
    );
    assert_eq!(test.escrow.get_sale(&sale_id), before);
}

#[test]
fn test_deposits_are_role_restricted() {
    let test: EscrowTest = EscrowTest::setup();
    let sale_id: u64 = test.open_sale();
    let before: Sale = test.escrow.get_sale(&sale_id);

    assert_eq!(
        test.escrow.try_deposit_down_payment(&sale_id, &test.seller, &DOWN_PAYMENT),
        Err(Ok(Error::Unauthorized))
    );
    assert_eq!(
        test.escrow.try_deposit_down_payment(&sale_id, &test.lender, &DOWN_PAYMENT),
        Err(Ok(Error::Unauthorized))
    );
    assert_eq!(
        test.escrow.try_deposit_remaining_amount(&sale_id, &test.buyer, &80),
        Err(Ok(Error::Unauthorized))
    );

    assert_eq!(test.escrow.get_sale(&sale_id), before);
    assert_eq!(test.token.balance(&test.escrow.address), 0);
}

#[test]
fn test_deposit_beyond_wallet_balance_fails_cleanly() {
    let test: EscrowTest = EscrowTest::setup();
    let sale_id: u64 = test.open_sale();

    assert_eq!(
        test.escrow
            .try_deposit_down_payment(&sale_id, &test.buyer, &(STARTING_FUNDS + 1)),
        Err(Ok(Error::PaymentTransferFailed))
    );
    assert_eq!(test.escrow.get_balance(&sale_id), 0);
    assert_eq!(test.token.balance(&test.buyer), STARTING_FUNDS);
}
