//! Shared building blocks for token permission programs.
//!
//! Engines (`permissioned_token`, `twice_permissioned`) use the lock-depth
//! counter, the control-authority capability and the token CPI helpers.
//! The caller program and off-chain clients use the account schema, the
//! schema registry and the forwarding helpers to reach any engine without
//! knowing its internal accounts.

pub mod authority;
pub mod constants;
pub mod cpi;
pub mod depth;
pub mod engine;
pub mod errors;
pub mod registry;
pub mod schema;
pub mod token;

pub use authority::{is_authorized, ControlAuthority};
pub use cpi::PermissionCpi;
pub use depth::{LockDepth, SaturationPolicy, Transition};
pub use engine::LockRequest;
pub use errors::PermissionError;
pub use registry::{diff_remaining_accounts, SchemaRegistry};
pub use schema::{
    AccountSource, BaseContext, BaseField, ExtraAccount, InstructionSchema, Operation,
    ProgramSchema, RemainingAccountMeta, RemainingAccountSet, Seed,
};
