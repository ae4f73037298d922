//! Read-only instructions publishing the extra accounts of `lock` and `unlock`.
//!
//! Accounts arrive in base context order with no privileges; only their keys
//! are used. The resolved set is returned through return data.

use anchor_lang::prelude::*;
use permission_core::{BaseContext, Operation, RemainingAccountSet};

use crate::schema::PROGRAM_SCHEMA;

#[derive(Accounts)]
pub struct PreflightLock<'info> {
    /// CHECK: key only
    pub token: UncheckedAccount<'info>,
    /// CHECK: key only
    pub mint: UncheckedAccount<'info>,
    /// CHECK: key only
    pub delegate: UncheckedAccount<'info>,
    /// CHECK: key only
    pub payer: UncheckedAccount<'info>,
    /// CHECK: key only
    pub token_program: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct PreflightUnlock<'info> {
    /// CHECK: key only
    pub token: UncheckedAccount<'info>,
    /// CHECK: key only
    pub mint: UncheckedAccount<'info>,
    /// CHECK: key only
    pub delegate: UncheckedAccount<'info>,
    /// CHECK: key only
    pub token_program: UncheckedAccount<'info>,
}

pub fn lock_handler(ctx: Context<PreflightLock>) -> Result<RemainingAccountSet> {
    let accounts = &ctx.accounts;
    let base = BaseContext::for_lock(
        accounts.token.key(),
        accounts.mint.key(),
        accounts.delegate.key(),
        accounts.payer.key(),
        accounts.token_program.key(),
    );

    publish(Operation::Lock, &base)
}

pub fn unlock_handler(ctx: Context<PreflightUnlock>) -> Result<RemainingAccountSet> {
    let accounts = &ctx.accounts;
    let base = BaseContext::for_unlock(
        accounts.token.key(),
        accounts.mint.key(),
        accounts.delegate.key(),
        accounts.token_program.key(),
    );

    publish(Operation::Unlock, &base)
}

fn publish(operation: Operation, base: &BaseContext) -> Result<RemainingAccountSet> {
    let published = PROGRAM_SCHEMA.resolve(&crate::ID, operation, base)?;
    msg!("Preflight {}: {} extra accounts", operation, published.len());
    Ok(published)
}
