use anchor_lang::prelude::*;
use permission_core::Operation;

#[event]
pub struct PermissionForwarded {
    pub target_program: Pubkey,
    pub operation: Operation,
    pub token: Pubkey,
    /// Accounts the target published for this call, in instruction order
    pub extra_accounts: Vec<Pubkey>,
}
