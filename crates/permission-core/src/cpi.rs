//! Forwarding an operation to an arbitrary permission engine.
//!
//! The target publishes the extra accounts it needs through its
//! `preflight_<operation>` instruction; the forwarder matches them against
//! the remaining accounts it received and relays `<operation>`.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::{
    instruction::Instruction,
    program::{get_return_data, invoke},
};

use crate::constants::MAX_REMAINING_ACCOUNTS;
use crate::errors::PermissionError;
use crate::schema::{BaseContext, Operation, RemainingAccountSet};

/// One forwarded call: the target, the operation and its base accounts
pub struct PermissionCpi<'a, 'info> {
    pub program: &'a AccountInfo<'info>,
    pub operation: Operation,
    pub base: BaseContext,
    /// Base account infos in `operation.base_fields()` order
    pub base_infos: Vec<AccountInfo<'info>>,
}

impl<'a, 'info> PermissionCpi<'a, 'info> {
    /// Resolve the target's accounts for this operation and invoke it.
    /// Returns the accounts the target published.
    pub fn forward(&self, remaining_accounts: &[AccountInfo<'info>]) -> Result<RemainingAccountSet> {
        self.preflight()?;
        let published = read_published_accounts(self.program.key)?;
        msg!(
            "{} on {} needs {} extra accounts",
            self.operation,
            self.program.key,
            published.len()
        );

        let mut account_infos = self.base_infos.clone();
        account_infos.extend(published.match_accounts(remaining_accounts)?);
        account_infos.push(self.program.clone());

        let mut accounts = self.base.account_metas(self.operation)?;
        accounts.extend(published.to_account_metas());

        let ix = Instruction {
            program_id: *self.program.key,
            accounts,
            data: self.operation.discriminator().to_vec(),
        };
        invoke(&ix, &account_infos)?;

        Ok(published)
    }

    fn preflight(&self) -> Result<()> {
        let ix = Instruction {
            program_id: *self.program.key,
            accounts: self.base.preflight_metas(self.operation)?,
            data: self.operation.preflight_discriminator().to_vec(),
        };

        let mut account_infos = self.base_infos.clone();
        account_infos.push(self.program.clone());
        invoke(&ix, &account_infos)?;
        Ok(())
    }
}

/// Decode the `RemainingAccountSet` a target's preflight left in return data
pub fn read_published_accounts(program_id: &Pubkey) -> Result<RemainingAccountSet> {
    let (returned_by, data) =
        get_return_data().ok_or_else(|| error!(PermissionError::ResolutionFailed))?;
    require_keys_eq!(returned_by, *program_id, PermissionError::ResolutionFailed);

    decode_published_accounts(&data)
}

/// Decode a published `RemainingAccountSet`, rejecting oversized sets
pub fn decode_published_accounts(data: &[u8]) -> Result<RemainingAccountSet> {
    let published = RemainingAccountSet::try_from_slice(data)
        .map_err(|_| error!(PermissionError::ResolutionFailed))?;
    require!(
        published.len() <= MAX_REMAINING_ACCOUNTS,
        PermissionError::TooManyRemainingAccounts
    );
    Ok(published)
}
