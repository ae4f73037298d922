use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use permission_core::constants::{CONTROL_AUTHORITY_SEED, TOKEN_RECORD_SEED};
use permission_core::{engine, ControlAuthority, LockRequest, PermissionError, Transition};

use crate::constants::MAX_LOCK_DEPTH;
use crate::events::TokenUnlocked;
use crate::state::TokenRecord;

#[derive(Accounts)]
pub struct Unlock<'info> {
    /// Token account to unlock
    #[account(mut)]
    pub token: InterfaceAccount<'info, TokenAccount>,

    pub mint: InterfaceAccount<'info, Mint>,

    /// Token owner
    pub delegate: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,

    /// CHECK: PDA verified by seeds, signs freeze/thaw
    #[account(seeds = [CONTROL_AUTHORITY_SEED], bump)]
    pub control_authority: UncheckedAccount<'info>,

    /// CHECK: Deserialized in the handler so a missing record maps to RecordNotFound
    #[account(
        mut,
        seeds = [token.key().as_ref(), TOKEN_RECORD_SEED],
        bump
    )]
    pub token_record: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<Unlock>) -> Result<()> {
    let authority = ControlAuthority::verify(
        &crate::ID,
        ctx.accounts.control_authority.to_account_info(),
        ctx.bumps.control_authority,
    )?;

    let token = ctx.accounts.token.key();
    let mint = ctx.accounts.mint.key();
    let record_info = ctx.accounts.token_record.to_account_info();
    let mut record = load_record(&record_info)?;

    require_keys_eq!(record.token_account, token, PermissionError::RecordMismatch);
    require_keys_eq!(record.mint, mint, PermissionError::RecordMismatch);
    require_keys_eq!(
        record.control_authority,
        authority.key(),
        PermissionError::RecordMismatch
    );

    let request = LockRequest {
        token: &ctx.accounts.token,
        mint: &ctx.accounts.mint,
        delegate: &ctx.accounts.delegate,
        token_program: &ctx.accounts.token_program,
    };
    let (transition, depth) =
        engine::unlock::<MAX_LOCK_DEPTH>(&authority, &request, record.lock_depth)?;

    record.lock_depth = depth.get();
    {
        let mut data = record_info.try_borrow_mut_data()?;
        let mut dst: &mut [u8] = &mut data[..];
        record.try_serialize(&mut dst)?;
    }

    msg!("Unlock {}: {:?}, depth {}", token, transition, record.lock_depth);

    emit!(TokenUnlocked {
        token,
        mint,
        delegate: ctx.accounts.delegate.key(),
        lock_depth: record.lock_depth,
        released: transition == Transition::Released,
    });

    Ok(())
}

fn load_record(info: &AccountInfo) -> Result<TokenRecord> {
    if info.owner != &crate::ID || info.data_is_empty() {
        msg!("No token record at {}", info.key);
        return err!(PermissionError::RecordNotFound);
    }

    let data = info.try_borrow_data()?;
    TokenRecord::try_deserialize(&mut &data[..])
        .map_err(|_| error!(PermissionError::RecordNotFound))
}
