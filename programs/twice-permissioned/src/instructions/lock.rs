use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use permission_core::constants::{CONTROL_AUTHORITY_SEED, TOKEN_RECORD_SEED};
use permission_core::{engine, ControlAuthority, LockRequest, PermissionError};

use crate::constants::{MAX_LOCK_DEPTH, SATURATION_POLICY};
use crate::events::TokenLocked;
use crate::state::TokenRecord;

#[derive(Accounts)]
pub struct Lock<'info> {
    #[account(mut)]
    pub token: InterfaceAccount<'info, TokenAccount>,

    /// Mint of `token`; its freeze authority must be `control_authority`
    pub mint: InterfaceAccount<'info, Mint>,

    /// Token owner, or the control authority while it holds the delegate
    pub delegate: Signer<'info>,

    /// Pays for the token record on first lock
    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,

    /// CHECK: PDA verified by seeds, signs freeze/thaw
    #[account(seeds = [CONTROL_AUTHORITY_SEED], bump)]
    pub control_authority: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = payer,
        space = TokenRecord::SIZE,
        seeds = [token.key().as_ref(), TOKEN_RECORD_SEED],
        bump
    )]
    pub token_record: Account<'info, TokenRecord>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Lock>) -> Result<()> {
    let authority = ControlAuthority::verify(
        &crate::ID,
        ctx.accounts.control_authority.to_account_info(),
        ctx.bumps.control_authority,
    )?;

    let token = ctx.accounts.token.key();
    let mint = ctx.accounts.mint.key();
    let delegate = ctx.accounts.delegate.key();

    let fresh = ctx.accounts.token_record.is_fresh();
    if !fresh {
        require_keys_eq!(
            ctx.accounts.token_record.mint,
            mint,
            PermissionError::RecordMismatch
        );
    }

    let request = LockRequest {
        token: &ctx.accounts.token,
        mint: &ctx.accounts.mint,
        delegate: &ctx.accounts.delegate,
        token_program: &ctx.accounts.token_program,
    };
    let (transition, depth) = engine::lock::<MAX_LOCK_DEPTH>(
        &authority,
        &request,
        ctx.accounts.token_record.lock_depth,
        SATURATION_POLICY,
    )?;

    let record = &mut ctx.accounts.token_record;
    if fresh {
        record.token_account = token;
        record.mint = mint;
        record.control_authority = authority.key();
        record.bump = ctx.bumps.token_record;
    }
    record.lock_depth = depth.get();

    msg!(
        "Lock level {}/{} on {} ({:?})",
        record.lock_depth,
        MAX_LOCK_DEPTH,
        token,
        transition
    );

    emit!(TokenLocked {
        token,
        mint,
        delegate,
        lock_depth: record.lock_depth,
    });

    Ok(())
}
