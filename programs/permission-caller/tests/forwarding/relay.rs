//! Relay transfers between two locked accounts

use permission_core::Operation;
use solana_sdk::{pubkey::Pubkey, signer::Signer};
use spl_token_2022::state::AccountState;

use crate::common::{
    accounts::{
        create_token_account, get_lock_depth, get_token_account, setup_engine_fixture,
        INITIAL_BALANCE,
    },
    instructions::{
        build_forward_lock_ix, build_relay_transfer_ix, build_relay_transfer_ix_with, resolve,
    },
    setup::{
        assert_permission_error, derive_control_authority, send_ix, setup_litesvm,
        PermissionError, NESTED_ENGINE_ID, SIMPLE_ENGINE_ID,
    },
};

#[test]
fn test_relay_transfer_moves_lock_to_destination() {
    let mut svm = setup_litesvm();
    let fx = setup_engine_fixture(&mut svm, SIMPLE_ENGINE_ID);

    send_ix(&mut svm, build_forward_lock_ix(&fx), &fx.owner, &[&fx.owner])
        .expect("Forwarded lock should succeed");

    let dest = Pubkey::new_unique();
    create_token_account(&mut svm, &dest, &fx.mint, &fx.owner.pubkey(), 0);

    let ix = build_relay_transfer_ix(&fx, &dest, 3);
    let result = send_ix(&mut svm, ix, &fx.owner, &[&fx.owner]);
    assert!(result.is_ok(), "Relay transfer should succeed: {:?}", result.err());

    let source = get_token_account(&svm, &fx.token);
    assert_eq!(source.amount, INITIAL_BALANCE - 3);
    assert_eq!(source.state, AccountState::Initialized);

    let dest = get_token_account(&svm, &dest);
    assert_eq!(dest.amount, 3);
    assert_eq!(dest.state, AccountState::Frozen);
    assert_eq!(
        dest.delegate,
        Some(derive_control_authority(&SIMPLE_ENGINE_ID).0).into()
    );
    assert_eq!(dest.delegated_amount, 3);
}

#[test]
fn test_relay_transfer_needs_destination_lock_accounts() {
    let mut svm = setup_litesvm();
    let fx = setup_engine_fixture(&mut svm, SIMPLE_ENGINE_ID);

    send_ix(&mut svm, build_forward_lock_ix(&fx), &fx.owner, &[&fx.owner])
        .expect("Forwarded lock should succeed");

    let dest = Pubkey::new_unique();
    create_token_account(&mut svm, &dest, &fx.mint, &fx.owner.pubkey(), 0);

    // Only the source's unlock set: the destination record is missing
    let remaining = resolve(&fx, Operation::Unlock).to_account_metas();
    let ix = build_relay_transfer_ix_with(&fx, &dest, 3, remaining);

    let result = send_ix(&mut svm, ix, &fx.owner, &[&fx.owner]);
    assert_permission_error(result, PermissionError::MissingRemainingAccount);
    assert_eq!(get_token_account(&svm, &fx.token).amount, INITIAL_BALANCE);
}

#[test]
fn test_relay_transfer_through_nested_engine() {
    let mut svm = setup_litesvm();
    let fx = setup_engine_fixture(&mut svm, NESTED_ENGINE_ID);

    send_ix(&mut svm, build_forward_lock_ix(&fx), &fx.owner, &[&fx.owner])
        .expect("Forwarded lock should succeed");

    let dest = Pubkey::new_unique();
    create_token_account(&mut svm, &dest, &fx.mint, &fx.owner.pubkey(), 0);

    let result = send_ix(&mut svm, build_relay_transfer_ix(&fx, &dest, 4), &fx.owner, &[&fx.owner]);
    assert!(result.is_ok(), "Relay from depth 1 should succeed: {:?}", result.err());

    assert_eq!(get_lock_depth(&svm, &NESTED_ENGINE_ID, &fx.token), Some(0));
    assert_eq!(get_lock_depth(&svm, &NESTED_ENGINE_ID, &dest), Some(1));
    assert_eq!(get_token_account(&svm, &fx.token).amount, INITIAL_BALANCE - 4);

    let dest = get_token_account(&svm, &dest);
    assert_eq!(dest.amount, 4);
    assert_eq!(dest.state, AccountState::Frozen);
}

#[test]
fn test_relay_transfer_from_doubly_locked_source_fails() {
    let mut svm = setup_litesvm();
    let fx = setup_engine_fixture(&mut svm, NESTED_ENGINE_ID);

    for _ in 0..2 {
        send_ix(&mut svm, build_forward_lock_ix(&fx), &fx.owner, &[&fx.owner])
            .expect("Forwarded lock should succeed");
    }

    let dest = Pubkey::new_unique();
    create_token_account(&mut svm, &dest, &fx.mint, &fx.owner.pubkey(), 0);

    // One unlock leaves the source at depth 1, still frozen
    let result = send_ix(&mut svm, build_relay_transfer_ix(&fx, &dest, 3), &fx.owner, &[&fx.owner]);
    assert!(result.is_err(), "Relay from depth 2 should fail");

    assert_eq!(get_lock_depth(&svm, &NESTED_ENGINE_ID, &fx.token), Some(2));
    assert_eq!(get_lock_depth(&svm, &NESTED_ENGINE_ID, &dest), None);

    let source = get_token_account(&svm, &fx.token);
    assert_eq!(source.amount, INITIAL_BALANCE);
    assert_eq!(source.state, AccountState::Frozen);
    assert_eq!(
        source.delegate,
        Some(derive_control_authority(&NESTED_ENGINE_ID).0).into()
    );

    let dest = get_token_account(&svm, &dest);
    assert_eq!(dest.amount, 0);
    assert_eq!(dest.state, AccountState::Initialized);
}
