use anchor_lang::prelude::*;

/// Nested lock state of one token account
/// PDA seeds: [token_account, b"token_record"]
#[account]
pub struct TokenRecord {
    pub token_account: Pubkey,
    pub mint: Pubkey,
    pub control_authority: Pubkey,

    /// Outstanding locks, 0..=MAX_LOCK_DEPTH. Transferable only at 0.
    pub lock_depth: u8,

    pub bump: u8,
}

impl TokenRecord {
    pub const SIZE: usize = 8 + 32 + 32 + 32 + 1 + 1; // 106 bytes

    pub fn is_fresh(&self) -> bool {
        self.token_account == Pubkey::default()
    }

    /// Locks still held after this one is released
    pub fn remaining_locks(&self) -> u8 {
        self.lock_depth.saturating_sub(1)
    }
}
