use anchor_lang::prelude::*;

use crate::constants::CONTROL_AUTHORITY_SEED;
use crate::errors::PermissionError;

/// Whether `signer` may request a lock state change on a token account.
///
/// The owner always may. Otherwise the signer must be the current delegate
/// and that delegate must be the engine's control authority.
pub fn is_authorized(
    owner: &Pubkey,
    delegate: Option<Pubkey>,
    signer: &Pubkey,
    control_authority: &Pubkey,
) -> bool {
    signer == owner || (delegate == Some(*signer) && signer == control_authority)
}

/// Proof that an account is the engine's control authority PDA.
///
/// Only obtainable through [`ControlAuthority::verify`], and handed to every
/// token CPI that needs the PDA to sign.
pub struct ControlAuthority<'info> {
    info: AccountInfo<'info>,
    bump: [u8; 1],
}

impl<'info> ControlAuthority<'info> {
    /// Check `info` against the PDA recreated from `bump` and wrap it
    pub fn verify(program_id: &Pubkey, info: AccountInfo<'info>, bump: u8) -> Result<Self> {
        let expected = Pubkey::create_program_address(&[CONTROL_AUTHORITY_SEED, &[bump]], program_id)
            .map_err(|_| error!(PermissionError::InvalidControlAuthority))?;
        require_keys_eq!(
            info.key(),
            expected,
            PermissionError::InvalidControlAuthority
        );

        Ok(Self { info, bump: [bump] })
    }

    pub fn key(&self) -> Pubkey {
        self.info.key()
    }

    pub fn account_info(&self) -> AccountInfo<'info> {
        self.info.clone()
    }

    /// Seeds for `CpiContext::new_with_signer`
    pub fn signer_seeds(&self) -> [&[u8]; 2] {
        [CONTROL_AUTHORITY_SEED, &self.bump]
    }

    /// Whether this authority is the freeze authority stored on a mint
    pub fn is_freeze_authority_of(&self, freeze_authority: Option<Pubkey>) -> bool {
        freeze_authority == Some(self.key())
    }
}
