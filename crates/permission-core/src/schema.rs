//! Statically typed account schema of permission engines.
//!
//! Every engine instruction starts with the same base context (token, mint,
//! delegate, payer for `lock`, token program). Whatever an engine needs on
//! top of that is described by an [`InstructionSchema`], so the extra
//! accounts can be computed from the base context alone.

use std::fmt;
use std::str::FromStr;

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::AccountMeta;
use sha2::{Digest, Sha256};

use crate::constants::{INSTRUCTION_NAMESPACE, MAX_REMAINING_ACCOUNTS, PREFLIGHT_PREFIX};
use crate::errors::PermissionError;

// ============================================================================
// Operations
// ============================================================================

/// A state change every permission engine exposes
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Lock,
    Unlock,
}

const LOCK_BASE: &[BaseField] = &[
    BaseField::Token,
    BaseField::Mint,
    BaseField::Delegate,
    BaseField::Payer,
    BaseField::TokenProgram,
];

const UNLOCK_BASE: &[BaseField] = &[
    BaseField::Token,
    BaseField::Mint,
    BaseField::Delegate,
    BaseField::TokenProgram,
];

impl Operation {
    pub const ALL: [Operation; 2] = [Operation::Lock, Operation::Unlock];

    /// Instruction name in the engine program
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Lock => "lock",
            Operation::Unlock => "unlock",
        }
    }

    /// Base accounts in instruction order
    pub fn base_fields(&self) -> &'static [BaseField] {
        match self {
            Operation::Lock => LOCK_BASE,
            Operation::Unlock => UNLOCK_BASE,
        }
    }

    /// Anchor discriminator of the engine instruction
    pub fn discriminator(&self) -> [u8; 8] {
        sighash(self.name())
    }

    /// Anchor discriminator of the matching `preflight_*` instruction
    pub fn preflight_discriminator(&self) -> [u8; 8] {
        sighash(&format!("{}{}", PREFLIGHT_PREFIX, self.name()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = anchor_lang::error::Error;

    fn from_str(name: &str) -> std::result::Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == name)
            .ok_or_else(|| error!(PermissionError::OperationNotPublished))
    }
}

/// First 8 bytes of `sha256("global:<name>")`
pub fn sighash(name: &str) -> [u8; 8] {
    let preimage = format!("{}:{}", INSTRUCTION_NAMESPACE, name);
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&Sha256::digest(preimage.as_bytes())[..8]);
    discriminator
}

// ============================================================================
// Base Context
// ============================================================================

/// Accounts every engine instruction begins with
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BaseField {
    Token,
    Mint,
    Delegate,
    Payer,
    TokenProgram,
}

impl BaseField {
    pub fn is_signer(self) -> bool {
        matches!(self, BaseField::Delegate | BaseField::Payer)
    }

    pub fn is_writable(self) -> bool {
        matches!(self, BaseField::Token | BaseField::Payer)
    }
}

/// Keys of the base context for one call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BaseContext {
    pub token: Pubkey,
    pub mint: Pubkey,
    pub delegate: Pubkey,
    /// Only `lock` takes a payer (record creation)
    pub payer: Option<Pubkey>,
    pub token_program: Pubkey,
}

impl BaseContext {
    pub fn for_lock(
        token: Pubkey,
        mint: Pubkey,
        delegate: Pubkey,
        payer: Pubkey,
        token_program: Pubkey,
    ) -> Self {
        Self {
            token,
            mint,
            delegate,
            payer: Some(payer),
            token_program,
        }
    }

    pub fn for_unlock(token: Pubkey, mint: Pubkey, delegate: Pubkey, token_program: Pubkey) -> Self {
        Self {
            token,
            mint,
            delegate,
            payer: None,
            token_program,
        }
    }

    pub fn key(&self, field: BaseField) -> Result<Pubkey> {
        match field {
            BaseField::Token => Ok(self.token),
            BaseField::Mint => Ok(self.mint),
            BaseField::Delegate => Ok(self.delegate),
            BaseField::Payer => self
                .payer
                .ok_or_else(|| error!(PermissionError::IncompleteBaseContext)),
            BaseField::TokenProgram => Ok(self.token_program),
        }
    }

    /// Base accounts with the signer/writable flags the engine instruction expects
    pub fn account_metas(&self, operation: Operation) -> Result<Vec<AccountMeta>> {
        operation
            .base_fields()
            .iter()
            .map(|field| {
                let pubkey = self.key(*field)?;
                Ok(AccountMeta {
                    pubkey,
                    is_signer: field.is_signer(),
                    is_writable: field.is_writable(),
                })
            })
            .collect()
    }

    /// Base accounts for a `preflight_*` call: keys only, no privileges
    pub fn preflight_metas(&self, operation: Operation) -> Result<Vec<AccountMeta>> {
        operation
            .base_fields()
            .iter()
            .map(|field| Ok(AccountMeta::new_readonly(self.key(*field)?, false)))
            .collect()
    }
}

// ============================================================================
// Schema
// ============================================================================

/// One component of a PDA derivation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Seed {
    Literal(&'static [u8]),
    Base(BaseField),
}

/// Where an extra account's address comes from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountSource {
    /// PDA of the target program
    ProgramAddress(&'static [Seed]),
    /// A well-known address (system program, sysvars)
    Fixed(Pubkey),
}

impl AccountSource {
    pub fn address(&self, program_id: &Pubkey, base: &BaseContext) -> Result<Pubkey> {
        match self {
            AccountSource::Fixed(address) => Ok(*address),
            AccountSource::ProgramAddress(seeds) => {
                let mut resolved: Vec<Vec<u8>> = Vec::with_capacity(seeds.len());
                for seed in seeds.iter() {
                    resolved.push(match seed {
                        Seed::Literal(bytes) => bytes.to_vec(),
                        Seed::Base(field) => base.key(*field)?.to_bytes().to_vec(),
                    });
                }
                let slices: Vec<&[u8]> = resolved.iter().map(Vec::as_slice).collect();
                Ok(Pubkey::find_program_address(&slices, program_id).0)
            }
        }
    }
}

/// An account an engine instruction needs beyond the base context
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtraAccount {
    /// Field name in the engine's accounts struct
    pub name: &'static str,
    pub source: AccountSource,
    pub is_signer: bool,
    pub is_writable: bool,
}

impl ExtraAccount {
    pub fn resolve(&self, program_id: &Pubkey, base: &BaseContext) -> Result<RemainingAccountMeta> {
        Ok(RemainingAccountMeta {
            pubkey: self.source.address(program_id, base)?,
            is_signer: self.is_signer,
            is_writable: self.is_writable,
        })
    }
}

/// Extra accounts of one engine instruction, in instruction order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstructionSchema {
    pub operation: Operation,
    pub accounts: &'static [ExtraAccount],
}

impl InstructionSchema {
    pub fn resolve(&self, program_id: &Pubkey, base: &BaseContext) -> Result<RemainingAccountSet> {
        require!(
            self.accounts.len() <= MAX_REMAINING_ACCOUNTS,
            PermissionError::TooManyRemainingAccounts
        );

        let accounts = self
            .accounts
            .iter()
            .map(|account| account.resolve(program_id, base))
            .collect::<Result<Vec<_>>>()?;

        Ok(RemainingAccountSet { accounts })
    }
}

/// Everything an engine version publishes about its instructions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgramSchema {
    pub version: u16,
    pub instructions: &'static [InstructionSchema],
}

impl ProgramSchema {
    pub fn instruction(&self, operation: Operation) -> Result<&InstructionSchema> {
        self.instructions
            .iter()
            .find(|ix| ix.operation == operation)
            .ok_or_else(|| error!(PermissionError::OperationNotPublished))
    }

    /// Extra accounts `operation` needs for `base`, without touching the ledger
    pub fn resolve(
        &self,
        program_id: &Pubkey,
        operation: Operation,
        base: &BaseContext,
    ) -> Result<RemainingAccountSet> {
        self.instruction(operation)?.resolve(program_id, base)
    }
}

// ============================================================================
// Remaining Accounts
// ============================================================================

/// Borsh-friendly `AccountMeta`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RemainingAccountMeta {
    pub pubkey: Pubkey,
    pub is_signer: bool,
    pub is_writable: bool,
}

impl From<RemainingAccountMeta> for AccountMeta {
    fn from(meta: RemainingAccountMeta) -> Self {
        AccountMeta {
            pubkey: meta.pubkey,
            is_signer: meta.is_signer,
            is_writable: meta.is_writable,
        }
    }
}

impl From<&AccountMeta> for RemainingAccountMeta {
    fn from(meta: &AccountMeta) -> Self {
        Self {
            pubkey: meta.pubkey,
            is_signer: meta.is_signer,
            is_writable: meta.is_writable,
        }
    }
}

/// Accounts appended after the base context of an engine instruction.
/// Returned by the engines' `preflight_*` instructions.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RemainingAccountSet {
    pub accounts: Vec<RemainingAccountMeta>,
}

impl RemainingAccountSet {
    pub fn from_account_metas(metas: &[AccountMeta]) -> Self {
        Self {
            accounts: metas.iter().map(RemainingAccountMeta::from).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn contains(&self, key: &Pubkey) -> bool {
        self.accounts.iter().any(|meta| meta.pubkey == *key)
    }

    pub fn keys(&self) -> Vec<Pubkey> {
        self.accounts.iter().map(|meta| meta.pubkey).collect()
    }

    pub fn to_account_metas(&self) -> Vec<AccountMeta> {
        self.accounts.iter().copied().map(AccountMeta::from).collect()
    }

    /// Pick the infos for each published account out of `available`, by key.
    ///
    /// `available` may hold more accounts than needed and in any order, so one
    /// remaining-accounts list can serve several resolutions.
    pub fn match_accounts<'info>(
        &self,
        available: &[AccountInfo<'info>],
    ) -> Result<Vec<AccountInfo<'info>>> {
        self.accounts
            .iter()
            .map(|meta| {
                available
                    .iter()
                    .find(|info| info.key() == meta.pubkey)
                    .cloned()
                    .ok_or_else(|| {
                        msg!("Remaining account not supplied: {}", meta.pubkey);
                        error!(PermissionError::MissingRemainingAccount)
                    })
            })
            .collect()
    }
}
