use anchor_lang::prelude::*;

#[event]
pub struct TokenLocked {
    pub token: Pubkey,
    pub mint: Pubkey,
    pub delegate: Pubkey,
    pub lock_depth: u8,
}

#[event]
pub struct TokenUnlocked {
    pub token: Pubkey,
    pub mint: Pubkey,
    pub delegate: Pubkey,
    pub lock_depth: u8,
    /// Delegate revoked, token transferable again
    pub released: bool,
}
