//! Forwarding to the two-level engine

use solana_sdk::pubkey::Pubkey;

use crate::common::{
    accounts::{create_token_account, get_token_account, setup_engine_fixture},
    instructions::{build_forward_lock_ix, build_forward_unlock_ix, build_transfer_ix},
    setup::{
        assert_permission_error, send_ix, setup_litesvm, PermissionError, NESTED_ENGINE_ID,
    },
};

#[test]
fn test_forward_nested_locks() {
    let mut svm = setup_litesvm();
    let fx = setup_engine_fixture(&mut svm, NESTED_ENGINE_ID);

    for _ in 0..2 {
        send_ix(&mut svm, build_forward_lock_ix(&fx), &fx.owner, &[&fx.owner])
            .expect("Forwarded lock should succeed");
    }
    let result = send_ix(&mut svm, build_transfer_ix(&fx, &fx.destination, 1), &fx.owner, &[&fx.owner]);
    assert!(result.is_err(), "Transfer at depth 2 should fail");

    send_ix(&mut svm, build_forward_unlock_ix(&fx), &fx.owner, &[&fx.owner])
        .expect("Forwarded unlock should succeed");
    let result = send_ix(&mut svm, build_transfer_ix(&fx, &fx.destination, 1), &fx.owner, &[&fx.owner]);
    assert!(result.is_err(), "Transfer at depth 1 should fail");

    send_ix(&mut svm, build_forward_unlock_ix(&fx), &fx.owner, &[&fx.owner])
        .expect("Forwarded unlock should succeed");

    let fresh = Pubkey::new_unique();
    create_token_account(&mut svm, &fresh, &fx.mint, &Pubkey::new_unique(), 0);
    send_ix(&mut svm, build_transfer_ix(&fx, &fresh, 1), &fx.owner, &[&fx.owner])
        .expect("Transfer at depth 0 should succeed");
    assert_eq!(get_token_account(&svm, &fresh).amount, 1);
}

#[test]
fn test_forward_third_lock_is_rejected() {
    let mut svm = setup_litesvm();
    let fx = setup_engine_fixture(&mut svm, NESTED_ENGINE_ID);

    for _ in 0..2 {
        send_ix(&mut svm, build_forward_lock_ix(&fx), &fx.owner, &[&fx.owner])
            .expect("Forwarded lock should succeed");
    }

    // Engine errors pass through the caller unchanged
    let result = send_ix(&mut svm, build_forward_lock_ix(&fx), &fx.owner, &[&fx.owner]);
    assert_permission_error(result, PermissionError::AlreadyAtMaxDepth);
}

#[test]
fn test_forward_unlock_at_zero_fails() {
    let mut svm = setup_litesvm();
    let fx = setup_engine_fixture(&mut svm, NESTED_ENGINE_ID);

    send_ix(&mut svm, build_forward_lock_ix(&fx), &fx.owner, &[&fx.owner])
        .expect("Forwarded lock should succeed");
    send_ix(&mut svm, build_forward_unlock_ix(&fx), &fx.owner, &[&fx.owner])
        .expect("Forwarded unlock should succeed");

    let result = send_ix(&mut svm, build_forward_unlock_ix(&fx), &fx.owner, &[&fx.owner]);
    assert_permission_error(result, PermissionError::NotLocked);
}
