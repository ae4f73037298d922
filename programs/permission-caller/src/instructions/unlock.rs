use anchor_lang::prelude::*;
use permission_core::{BaseContext, Operation, PermissionCpi, PermissionError};

use super::forward;

#[derive(Accounts)]
pub struct ForwardUnlock<'info> {
    /// CHECK: Validated by the target engine
    #[account(mut)]
    pub token: UncheckedAccount<'info>,

    /// CHECK: Validated by the target engine
    pub mint: UncheckedAccount<'info>,

    pub delegate: Signer<'info>,

    /// CHECK: Validated by the target engine
    pub token_program: UncheckedAccount<'info>,

    /// CHECK: Any executable permission engine except this program
    #[account(
        constraint = perm_program.executable @ PermissionError::UnknownTargetProgram,
        constraint = perm_program.key() != crate::ID @ PermissionError::ResolutionFailed
    )]
    pub perm_program: UncheckedAccount<'info>,
}

pub fn handler<'info>(ctx: Context<'_, '_, 'info, 'info, ForwardUnlock<'info>>) -> Result<()> {
    let accounts = &ctx.accounts;
    let program = accounts.perm_program.to_account_info();

    // No payer: unlock never creates accounts
    let cpi = PermissionCpi {
        program: &program,
        operation: Operation::Unlock,
        base: BaseContext::for_unlock(
            accounts.token.key(),
            accounts.mint.key(),
            accounts.delegate.key(),
            accounts.token_program.key(),
        ),
        base_infos: vec![
            accounts.token.to_account_info(),
            accounts.mint.to_account_info(),
            accounts.delegate.to_account_info(),
            accounts.token_program.to_account_info(),
        ],
    };

    forward(cpi, ctx.remaining_accounts)?;

    Ok(())
}
