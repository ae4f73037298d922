//! Token program CPIs that move a token account in and out of the locked state.
//!
//! Delegation alone does not stop the owner from transferring, so a locked
//! account is also frozen. The control authority is the mint's freeze
//! authority and signs freeze/thaw; the owner signs approve/revoke.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    approve, freeze_account, revoke, thaw_account, Approve, FreezeAccount, Revoke, ThawAccount,
};

use crate::authority::ControlAuthority;

/// Accounts touched by the lock CPIs
pub struct LockTarget<'info> {
    pub token: AccountInfo<'info>,
    pub mint: AccountInfo<'info>,
    /// Token owner, signer of the outer instruction
    pub owner: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
}

/// Hand the token account to the control authority.
///
/// A frozen account cannot be approved, so an already locked account is
/// thawed first and refrozen after the delegate is re-assigned.
pub fn delegate_and_freeze<'info>(
    authority: &ControlAuthority<'info>,
    target: &LockTarget<'info>,
    amount: u64,
    frozen: bool,
) -> Result<()> {
    if frozen {
        thaw(authority, target)?;
    }

    approve(
        CpiContext::new(
            target.token_program.clone(),
            Approve {
                to: target.token.clone(),
                delegate: authority.account_info(),
                authority: target.owner.clone(),
            },
        ),
        amount,
    )?;

    freeze(authority, target)
}

/// Give the token account back to its owner
pub fn thaw_and_revoke<'info>(
    authority: &ControlAuthority<'info>,
    target: &LockTarget<'info>,
    frozen: bool,
) -> Result<()> {
    if frozen {
        thaw(authority, target)?;
    }

    revoke(CpiContext::new(
        target.token_program.clone(),
        Revoke {
            source: target.token.clone(),
            authority: target.owner.clone(),
        },
    ))
}

fn freeze<'info>(authority: &ControlAuthority<'info>, target: &LockTarget<'info>) -> Result<()> {
    let seeds = authority.signer_seeds();
    let signer_seeds = [&seeds[..]];

    freeze_account(CpiContext::new_with_signer(
        target.token_program.clone(),
        FreezeAccount {
            account: target.token.clone(),
            mint: target.mint.clone(),
            authority: authority.account_info(),
        },
        &signer_seeds,
    ))
}

fn thaw<'info>(authority: &ControlAuthority<'info>, target: &LockTarget<'info>) -> Result<()> {
    let seeds = authority.signer_seeds();
    let signer_seeds = [&seeds[..]];

    thaw_account(CpiContext::new_with_signer(
        target.token_program.clone(),
        ThawAccount {
            account: target.token.clone(),
            mint: target.mint.clone(),
            authority: authority.account_info(),
        },
        &signer_seeds,
    ))
}
