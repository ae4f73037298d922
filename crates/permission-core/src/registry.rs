//! Client-side view of known engine programs.

use std::collections::HashMap;

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};

use crate::errors::PermissionError;
use crate::schema::{BaseContext, Operation, ProgramSchema, RemainingAccountSet};

/// Published schemas keyed by engine program id
#[derive(Clone, Debug, Default)]
pub struct SchemaRegistry {
    programs: HashMap<Pubkey, ProgramSchema>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or upgrade) the schema of an engine deployment.
    /// Returns the schema it replaced.
    pub fn register(&mut self, program_id: Pubkey, schema: ProgramSchema) -> Option<ProgramSchema> {
        self.programs.insert(program_id, schema)
    }

    pub fn schema(&self, program_id: &Pubkey) -> Result<&ProgramSchema> {
        self.programs
            .get(program_id)
            .ok_or_else(|| error!(PermissionError::UnknownTargetProgram))
    }

    /// Remaining accounts to pass when calling `operation` on `program_id`
    pub fn resolve(
        &self,
        program_id: &Pubkey,
        operation: Operation,
        base: &BaseContext,
    ) -> Result<RemainingAccountSet> {
        self.schema(program_id)?
            .resolve(program_id, operation, base)
    }

    /// Full engine instruction: base accounts, published extras, discriminator
    pub fn materialize(
        &self,
        program_id: &Pubkey,
        operation: Operation,
        base: &BaseContext,
    ) -> Result<Instruction> {
        let mut accounts = base.account_metas(operation)?;
        accounts.extend(self.resolve(program_id, operation, base)?.to_account_metas());

        Ok(Instruction {
            program_id: *program_id,
            accounts,
            data: operation.discriminator().to_vec(),
        })
    }
}

/// Accounts of a materialized instruction beyond its base context.
///
/// The instruction must start with exactly the base accounts.
pub fn diff_remaining_accounts(
    instruction: &Instruction,
    base: &[AccountMeta],
) -> Result<RemainingAccountSet> {
    require!(
        instruction.accounts.len() >= base.len(),
        PermissionError::IncompleteInstruction
    );

    let (prefix, extra) = instruction.accounts.split_at(base.len());
    let prefix_matches = prefix
        .iter()
        .zip(base.iter())
        .all(|(have, want)| have.pubkey == want.pubkey);
    require!(prefix_matches, PermissionError::ResolutionFailed);

    Ok(RemainingAccountSet::from_account_metas(extra))
}
