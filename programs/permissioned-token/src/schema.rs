//! Extra accounts this program expects after the base context.
//!
//! Must stay in step with the `Lock` and `Unlock` account structs; the
//! consistency tests below compare the two.

use permission_core::constants::{CONTROL_AUTHORITY_SEED, TOKEN_RECORD_SEED};
use permission_core::{
    AccountSource, BaseField, ExtraAccount, InstructionSchema, Operation, ProgramSchema, Seed,
};

use crate::constants::SCHEMA_VERSION;

const CONTROL_AUTHORITY: ExtraAccount = ExtraAccount {
    name: "control_authority",
    source: AccountSource::ProgramAddress(&[Seed::Literal(CONTROL_AUTHORITY_SEED)]),
    is_signer: false,
    is_writable: false,
};

const TOKEN_RECORD: ExtraAccount = ExtraAccount {
    name: "token_record",
    source: AccountSource::ProgramAddress(&[
        Seed::Base(BaseField::Token),
        Seed::Literal(TOKEN_RECORD_SEED),
    ]),
    is_signer: false,
    is_writable: true,
};

const SYSTEM_PROGRAM: ExtraAccount = ExtraAccount {
    name: "system_program",
    source: AccountSource::Fixed(anchor_lang::system_program::ID),
    is_signer: false,
    is_writable: false,
};

pub const LOCK_ACCOUNTS: InstructionSchema = InstructionSchema {
    operation: Operation::Lock,
    accounts: &[CONTROL_AUTHORITY, TOKEN_RECORD, SYSTEM_PROGRAM],
};

pub const UNLOCK_ACCOUNTS: InstructionSchema = InstructionSchema {
    operation: Operation::Unlock,
    accounts: &[CONTROL_AUTHORITY, TOKEN_RECORD],
};

pub const PROGRAM_SCHEMA: ProgramSchema = ProgramSchema {
    version: SCHEMA_VERSION,
    instructions: &[LOCK_ACCOUNTS, UNLOCK_ACCOUNTS],
};
