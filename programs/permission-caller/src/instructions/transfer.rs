use anchor_lang::prelude::*;
use anchor_spl::token_interface::{transfer_checked, Mint, TokenInterface, TransferChecked};
use permission_core::{BaseContext, Operation, PermissionCpi, PermissionError};

use super::forward;

#[derive(Accounts)]
pub struct RelayTransfer<'info> {
    /// CHECK: Validated by the target engine and the token program
    #[account(mut)]
    pub source: UncheckedAccount<'info>,

    /// CHECK: Validated by the target engine and the token program
    #[account(mut)]
    pub dest: UncheckedAccount<'info>,

    pub mint: InterfaceAccount<'info, Mint>,

    /// Owner of both token accounts
    pub delegate: Signer<'info>,

    /// Pays for the destination's record if it has none yet
    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,

    /// CHECK: Any executable permission engine except this program
    #[account(
        constraint = perm_program.executable @ PermissionError::UnknownTargetProgram,
        constraint = perm_program.key() != crate::ID @ PermissionError::ResolutionFailed
    )]
    pub perm_program: UncheckedAccount<'info>,
}

pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, RelayTransfer<'info>>,
    amount: u64,
) -> Result<()> {
    let accounts = &ctx.accounts;
    let program = accounts.perm_program.to_account_info();
    let mint = accounts.mint.key();
    let delegate = accounts.delegate.key();
    let token_program = accounts.token_program.key();

    forward(
        PermissionCpi {
            program: &program,
            operation: Operation::Unlock,
            base: BaseContext::for_unlock(accounts.source.key(), mint, delegate, token_program),
            base_infos: vec![
                accounts.source.to_account_info(),
                accounts.mint.to_account_info(),
                accounts.delegate.to_account_info(),
                accounts.token_program.to_account_info(),
            ],
        },
        ctx.remaining_accounts,
    )?;

    transfer_checked(
        CpiContext::new(
            accounts.token_program.to_account_info(),
            TransferChecked {
                from: accounts.source.to_account_info(),
                mint: accounts.mint.to_account_info(),
                to: accounts.dest.to_account_info(),
                authority: accounts.delegate.to_account_info(),
            },
        ),
        amount,
        accounts.mint.decimals,
    )?;

    forward(
        PermissionCpi {
            program: &program,
            operation: Operation::Lock,
            base: BaseContext::for_lock(
                accounts.dest.key(),
                mint,
                delegate,
                accounts.payer.key(),
                token_program,
            ),
            base_infos: vec![
                accounts.dest.to_account_info(),
                accounts.mint.to_account_info(),
                accounts.delegate.to_account_info(),
                accounts.payer.to_account_info(),
                accounts.token_program.to_account_info(),
            ],
        },
        ctx.remaining_accounts,
    )?;

    msg!("Relayed {} from {} to {}", amount, accounts.source.key(), accounts.dest.key());

    Ok(())
}
