#![allow(ambiguous_glob_reexports)]

pub mod lock;
pub mod transfer;
pub mod unlock;

pub use lock::*;
pub use transfer::*;
pub use unlock::*;

use anchor_lang::prelude::*;
use permission_core::{PermissionCpi, RemainingAccountSet};

use crate::events::PermissionForwarded;

/// Relay `cpi` and report what the target asked for
fn forward<'info>(
    cpi: PermissionCpi<'_, 'info>,
    remaining_accounts: &[AccountInfo<'info>],
) -> Result<RemainingAccountSet> {
    let published = cpi.forward(remaining_accounts)?;

    msg!(
        "Forwarded {} to {} with {} extra accounts",
        cpi.operation,
        cpi.program.key,
        published.len()
    );

    emit!(PermissionForwarded {
        target_program: cpi.program.key(),
        operation: cpi.operation,
        token: cpi.base.token,
        extra_accounts: published.keys(),
    });

    Ok(published)
}
