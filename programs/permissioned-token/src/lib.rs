use anchor_lang::prelude::*;
use permission_core::RemainingAccountSet;

pub mod constants;
pub mod events;
pub mod instructions;
pub mod schema;
pub mod state;

use instructions::*;

declare_id!("6u3fHUEhEN5ASVuHN1XX84NovcfjvoLQqrWh9Uu65ajU");

#[program]
pub mod permissioned_token {
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

    /// Lock a token account: delegate it to the control authority and freeze it.
    /// Creates the token record on first use.
    pub fn lock(ctx: Context<Lock>) -> Result<()> {
        instructions::lock::handler(ctx)
    }

    /// Unlock a token account: thaw it and revoke the delegate.
    pub fn unlock(ctx: Context<Unlock>) -> Result<()> {
        instructions::unlock::handler(ctx)
    }
}
