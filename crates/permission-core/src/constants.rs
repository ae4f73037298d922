// ============================================================================
// PDA Seeds
// ============================================================================

/// Seed of the engine-wide control authority PDA.
/// The PDA is the mint's freeze authority and the delegate of every locked account.
pub const CONTROL_AUTHORITY_SEED: &[u8] = b"static";

/// Seed suffix of a TokenRecord PDA: `[token_account, TOKEN_RECORD_SEED]`
pub const TOKEN_RECORD_SEED: &[u8] = b"token_record";

// ============================================================================
// Instruction Discriminators
// ============================================================================

/// Anchor namespace for program instructions (`sha256("global:<name>")[..8]`)
pub const INSTRUCTION_NAMESPACE: &str = "global";

/// Name prefix of the read-only instructions publishing an operation's accounts
pub const PREFLIGHT_PREFIX: &str = "preflight_";

// ============================================================================
// Resolution Limits
// ============================================================================

/// Maximum number of accounts a target may publish for one operation.
///
/// Keeps the borsh-encoded `RemainingAccountSet` (4 + 34 bytes per entry)
/// well below the 1024-byte return data limit.
pub const MAX_REMAINING_ACCOUNTS: usize = 16;
