//! Account creation helpers for LiteSVM tests
//!
//! Mints and token accounts are mocked with Token-2022's own state types;
//! token records are only ever created by the program.

#![allow(dead_code)]

use anchor_lang::AccountDeserialize;
use litesvm::LiteSVM;
use permissioned_token::state::TokenRecord;
use solana_sdk::{
    account::Account, program_option::COption, pubkey::Pubkey, signature::Keypair,
    signer::Signer,
};
use spl_token_2022::{
    extension::{StateWithExtensions, StateWithExtensionsMut},
    state::{Account as TokenAccount, AccountState, Mint},
};

use crate::common::setup::{derive_control_authority, TOKEN_2022_PROGRAM_ID};

/// Mint size without extensions
pub const MINT_SIZE: usize = 82;

/// Token account size without extensions
pub const TOKEN_ACCOUNT_SIZE: usize = 165;

pub const DECIMALS: u8 = 9;
pub const INITIAL_BALANCE: u64 = 10;

/// Airdrop SOL to an account
pub fn airdrop(svm: &mut LiteSVM, pubkey: &Pubkey, lamports: u64) {
    svm.airdrop(pubkey, lamports).expect("Airdrop failed");
}

/// Create a new keypair and airdrop SOL to it
pub fn create_funded_keypair(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    airdrop(svm, &keypair.pubkey(), lamports);
    keypair
}

/// Create a Token-2022 mint (no extensions) with the given freeze authority
pub fn create_mock_mint(
    svm: &mut LiteSVM,
    mint: &Pubkey,
    mint_authority: &Pubkey,
    freeze_authority: Option<Pubkey>,
) {
    let space = MINT_SIZE;
    let mut data = vec![0u8; space];
    let lamports = svm.minimum_balance_for_rent_exemption(space);

    let mut state = StateWithExtensionsMut::<Mint>::unpack_uninitialized(&mut data).unwrap();
    state.base.mint_authority = COption::Some(*mint_authority);
    state.base.supply = 1_000 * INITIAL_BALANCE;
    state.base.decimals = DECIMALS;
    state.base.is_initialized = true;
    state.base.freeze_authority = freeze_authority.into();
    state.pack_base();

    let account = Account {
        lamports,
        data,
        owner: TOKEN_2022_PROGRAM_ID,
        executable: false,
        rent_epoch: 0,
    };

    svm.set_account(*mint, account)
        .expect("Failed to set mock mint");
}

/// Create an initialized Token-2022 account holding `amount`
pub fn create_mock_token_account(
    svm: &mut LiteSVM,
    address: &Pubkey,
    mint: &Pubkey,
    owner: &Pubkey,
    amount: u64,
) {
    let space = TOKEN_ACCOUNT_SIZE;
    let mut data = vec![0u8; space];
    let lamports = svm.minimum_balance_for_rent_exemption(space);

    let mut state =
        StateWithExtensionsMut::<TokenAccount>::unpack_uninitialized(&mut data).unwrap();
    state.base.mint = *mint;
    state.base.owner = *owner;
    state.base.amount = amount;
    state.base.delegate = COption::None;
    state.base.state = AccountState::Initialized;
    state.base.is_native = COption::None;
    state.base.delegated_amount = 0;
    state.base.close_authority = COption::None;
    state.pack_base();

    let account = Account {
        lamports,
        data,
        owner: TOKEN_2022_PROGRAM_ID,
        executable: false,
        rent_epoch: 0,
    };

    svm.set_account(*address, account)
        .expect("Failed to set mock token account");
}

/// Read back a token account's state
pub fn get_token_account(svm: &LiteSVM, address: &Pubkey) -> TokenAccount {
    let account = svm.get_account(address).expect("Token account should exist");
    StateWithExtensions::<TokenAccount>::unpack(&account.data)
        .expect("Valid token account")
        .base
}

/// Compute Anchor account discriminator: sha256("account:AccountName")[..8]
pub fn compute_anchor_account_discriminator(account_name: &str) -> [u8; 8] {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(format!("account:{}", account_name));
    let result = hasher.finalize();
    result[..8].try_into().unwrap()
}

/// Read back a token record, if the program created one
pub fn get_token_record(svm: &LiteSVM, address: &Pubkey) -> Option<TokenRecord> {
    let account = svm.get_account(address)?;
    if account.data.is_empty() {
        return None;
    }
    Some(TokenRecord::try_deserialize(&mut account.data.as_slice()).expect("Valid token record"))
}

/// A mint controlled by the program plus a funded owner and two token accounts
pub struct LockFixture {
    pub owner: Keypair,
    pub mint: Pubkey,
    pub token: Pubkey,
    pub destination: Pubkey,
}

/// Set up a lockable token account holding `INITIAL_BALANCE`
pub fn setup_lock_fixture(svm: &mut LiteSVM) -> LockFixture {
    let owner = create_funded_keypair(svm, 10_000_000_000);
    let (control_authority, _) = derive_control_authority();

    let mint = Pubkey::new_unique();
    create_mock_mint(svm, &mint, &owner.pubkey(), Some(control_authority));

    let token = Pubkey::new_unique();
    create_mock_token_account(svm, &token, &mint, &owner.pubkey(), INITIAL_BALANCE);

    let destination = Pubkey::new_unique();
    create_mock_token_account(svm, &destination, &mint, &Pubkey::new_unique(), 0);

    LockFixture {
        owner,
        mint,
        token,
        destination,
    }
}
