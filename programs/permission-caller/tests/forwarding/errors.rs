//! Caller failure modes

use permission_core::Operation;

use crate::common::{
    accounts::setup_engine_fixture,
    instructions::{
        build_forward_lock_ix_with, build_forward_unlock_ix, resolve,
    },
    setup::{
        assert_permission_error, derive_token_record, send_ix, setup_litesvm, PermissionError,
        CALLER_PROGRAM_ID, SIMPLE_ENGINE_ID,
    },
};

#[test]
fn test_missing_remaining_account_fails() {
    let mut svm = setup_litesvm();
    let fx = setup_engine_fixture(&mut svm, SIMPLE_ENGINE_ID);

    let record = derive_token_record(&SIMPLE_ENGINE_ID, &fx.token).0;
    let remaining = resolve(&fx, Operation::Lock)
        .to_account_metas()
        .into_iter()
        .filter(|meta| meta.pubkey != record)
        .collect();
    let ix = build_forward_lock_ix_with(&fx, &fx.engine, remaining);

    let result = send_ix(&mut svm, ix, &fx.owner, &[&fx.owner]);
    assert_permission_error(result, PermissionError::MissingRemainingAccount);
}

#[test]
fn test_self_target_fails() {
    let mut svm = setup_litesvm();
    let fx = setup_engine_fixture(&mut svm, SIMPLE_ENGINE_ID);

    let remaining = resolve(&fx, Operation::Lock).to_account_metas();
    let ix = build_forward_lock_ix_with(&fx, &CALLER_PROGRAM_ID, remaining);

    let result = send_ix(&mut svm, ix, &fx.owner, &[&fx.owner]);
    assert_permission_error(result, PermissionError::ResolutionFailed);
}

#[test]
fn test_non_executable_target_fails() {
    let mut svm = setup_litesvm();
    let fx = setup_engine_fixture(&mut svm, SIMPLE_ENGINE_ID);

    let remaining = resolve(&fx, Operation::Lock).to_account_metas();
    let ix = build_forward_lock_ix_with(&fx, &fx.mint, remaining);

    let result = send_ix(&mut svm, ix, &fx.owner, &[&fx.owner]);
    assert_permission_error(result, PermissionError::UnknownTargetProgram);
}

#[test]
fn test_forward_unlock_without_record_fails() {
    let mut svm = setup_litesvm();
    let fx = setup_engine_fixture(&mut svm, SIMPLE_ENGINE_ID);

    let result = send_ix(&mut svm, build_forward_unlock_ix(&fx), &fx.owner, &[&fx.owner]);
    assert_permission_error(result, PermissionError::RecordNotFound);
}
