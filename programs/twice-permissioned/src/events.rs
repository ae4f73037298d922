use anchor_lang::prelude::*;

/// A lock level was added
#[event]
pub struct TokenLocked {
    pub token: Pubkey,
    pub mint: Pubkey,
    pub delegate: Pubkey,
    pub lock_depth: u8,
}

/// A lock level was removed
#[event]
pub struct TokenUnlocked {
    pub token: Pubkey,
    pub mint: Pubkey,
    pub delegate: Pubkey,
    pub lock_depth: u8,
    /// Last level removed, token transferable again
    pub released: bool,
}
