use anchor_lang::prelude::*;

pub mod events;
pub mod instructions;

use instructions::*;

declare_id!("ruNRQbjgsehSJax7kc3t4osMwTqEHAiP5DzfBbApASe");

#[program]
pub mod permission_caller {
    use super::*;

    /// Lock a token account through `perm_program`.
    ///
    /// The target's extra accounts are resolved through its `preflight_lock`
    /// and picked out of the remaining accounts by key.
    pub fn lock<'info>(ctx: Context<'_, '_, 'info, 'info, ForwardLock<'info>>) -> Result<()> {
        instructions::lock::handler(ctx)
    }

    /// Unlock a token account through `perm_program`
    pub fn unlock<'info>(ctx: Context<'_, '_, 'info, 'info, ForwardUnlock<'info>>) -> Result<()> {
        instructions::unlock::handler(ctx)
    }

    /// Move tokens between two accounts held by the same engine:
    /// unlock `source`, transfer, lock `dest`.
    ///
    /// Remaining accounts must cover the source's unlock set and the
    /// destination's lock set, in any order.
    pub fn transfer<'info>(
        ctx: Context<'_, '_, 'info, 'info, RelayTransfer<'info>>,
        amount: u64,
    ) -> Result<()> {
        instructions::transfer::handler(ctx, amount)
    }
}
