//! Lock/unlock state machine shared by the engine programs.
//!
//! Handlers pass in the stored depth and get back the transition plus the
//! new depth to persist. All token CPIs happen here; the record is written by
//! the caller only after this returns `Ok`.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::authority::{is_authorized, ControlAuthority};
use crate::depth::{LockDepth, SaturationPolicy, Transition};
use crate::errors::PermissionError;
use crate::token::{delegate_and_freeze, thaw_and_revoke, LockTarget};

/// Validated accounts of a lock or unlock request
pub struct LockRequest<'a, 'info> {
    pub token: &'a InterfaceAccount<'info, TokenAccount>,
    pub mint: &'a InterfaceAccount<'info, Mint>,
    pub delegate: &'a Signer<'info>,
    pub token_program: &'a Interface<'info, TokenInterface>,
}

impl<'a, 'info> LockRequest<'a, 'info> {
    fn authorize(&self, authority: &ControlAuthority<'info>) -> Result<()> {
        require_keys_eq!(self.token.mint, self.mint.key(), PermissionError::MintMismatch);
        require!(
            authority.is_freeze_authority_of(self.mint.freeze_authority.into()),
            PermissionError::InvalidControlAuthority
        );
        require!(
            is_authorized(
                &self.token.owner,
                self.token.delegate.into(),
                &self.delegate.key(),
                &authority.key(),
            ),
            PermissionError::Unauthorized
        );
        Ok(())
    }

    fn target(&self) -> LockTarget<'info> {
        LockTarget {
            token: self.token.to_account_info(),
            mint: self.mint.to_account_info(),
            owner: self.delegate.to_account_info(),
            token_program: self.token_program.to_account_info(),
        }
    }
}

/// Increase the lock depth and hand the account to the control authority
pub fn lock<'info, const MAX: u8>(
    authority: &ControlAuthority<'info>,
    request: &LockRequest<'_, 'info>,
    stored_depth: u8,
    policy: SaturationPolicy,
) -> Result<(Transition, LockDepth<MAX>)> {
    request.authorize(authority)?;

    let mut depth = LockDepth::<MAX>::new(stored_depth)?;
    let transition = depth.lock(policy)?;

    if transition.asserts_delegate() {
        delegate_and_freeze(
            authority,
            &request.target(),
            request.token.amount,
            request.token.is_frozen(),
        )?;
    }

    Ok((transition, depth))
}

/// Decrease the lock depth, returning the account to its owner at zero
pub fn unlock<'info, const MAX: u8>(
    authority: &ControlAuthority<'info>,
    request: &LockRequest<'_, 'info>,
    stored_depth: u8,
) -> Result<(Transition, LockDepth<MAX>)> {
    request.authorize(authority)?;

    let mut depth = LockDepth::<MAX>::new(stored_depth)?;
    let transition = depth.unlock()?;

    if transition == Transition::Released {
        thaw_and_revoke(authority, &request.target(), request.token.is_frozen())?;
    }

    Ok((transition, depth))
}
