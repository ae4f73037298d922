use anchor_lang::prelude::*;

/// Lock state of one token account
/// PDA seeds: [token_account, b"token_record"]
#[account]
pub struct TokenRecord {
    /// Token account this record governs
    pub token_account: Pubkey,

    /// Mint of the token account (immutable)
    pub mint: Pubkey,

    /// Program PDA holding the delegate while locked
    pub control_authority: Pubkey,

    /// 0 = transferable, 1 = locked
    pub lock_depth: u8,

    /// PDA bump seed
    pub bump: u8,
}

impl TokenRecord {
    /// Account discriminator (8) + token_account (32) + mint (32) + control_authority (32)
    /// + lock_depth (1) + bump (1)
    pub const SIZE: usize = 8 + 32 + 32 + 32 + 1 + 1; // 106 bytes

    /// Whether `init_if_needed` just created this record
    pub fn is_fresh(&self) -> bool {
        self.token_account == Pubkey::default()
    }
}
