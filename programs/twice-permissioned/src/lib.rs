use anchor_lang::prelude::*;
use permission_core::RemainingAccountSet;

pub mod constants;
pub mod events;
pub mod instructions;
pub mod schema;
pub mod state;

use instructions::*;

declare_id!("4VYE2oTZACYKd8Pdk6PQ9LPLaxvZS1P9R2314m972LR6");

#[program]
pub mod twice_permissioned {
    use super::*;

    // =========================================================================
    // Account Resolution
    // =========================================================================

    /// Publish the accounts `lock` needs beyond the base context
    pub fn preflight_lock(ctx: Context<PreflightLock>) -> Result<RemainingAccountSet> {
        instructions::preflight::lock_handler(ctx)
    }

    /// Publish the accounts `unlock` needs beyond the base context
    pub fn preflight_unlock(ctx: Context<PreflightUnlock>) -> Result<RemainingAccountSet> {
        instructions::preflight::unlock_handler(ctx)
    }

    // =========================================================================
    // Lock State
    // =========================================================================

    /// Add a lock level. The first level delegates the account to the control
    /// authority and freezes it; a third level fails with `AlreadyAtMaxDepth`.
    pub fn lock(ctx: Context<Lock>) -> Result<()> {
        instructions::lock::handler(ctx)
    }

    /// Remove a lock level. The account thaws only when the last level is gone.
    pub fn unlock(ctx: Context<Unlock>) -> Result<()> {
        instructions::unlock::handler(ctx)
    }
}
