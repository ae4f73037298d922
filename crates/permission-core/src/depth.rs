use anchor_lang::prelude::*;

use crate::errors::PermissionError;

/// What `lock` does once the counter is already at its maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaturationPolicy {
    /// Succeed without changing the depth (the delegate is still re-asserted)
    Clamp,
    /// Fail with `AlreadyAtMaxDepth`
    Reject,
}

/// Outcome of one counter step, telling the engine which token CPIs to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// 0 -> 1: delegate and freeze the token account
    Engaged,
    /// n -> n+1 with n >= 1
    Deepened,
    /// Lock at maximum under `SaturationPolicy::Clamp`
    Saturated,
    /// n -> n-1 with n-1 >= 1: token account stays locked
    Relaxed,
    /// 1 -> 0: thaw and revoke the delegate
    Released,
}

impl Transition {
    /// Whether the engine must (re)assign the delegate to the control authority
    pub fn asserts_delegate(&self) -> bool {
        matches!(
            self,
            Transition::Engaged | Transition::Deepened | Transition::Saturated
        )
    }
}

/// Lock depth bounded by `MAX`.
///
/// Depth never wraps: `lock` at `MAX` clamps or rejects per policy and
/// `unlock` at zero fails with `NotLocked`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct LockDepth<const MAX: u8>(u8);

impl<const MAX: u8> LockDepth<MAX> {
    const NON_ZERO_MAX: () = assert!(MAX > 0, "lock depth maximum must be at least 1");

    pub const ZERO: Self = Self(0);

    /// Load a stored depth, rejecting values the engine could never have written
    pub fn new(raw: u8) -> Result<Self> {
        let () = Self::NON_ZERO_MAX;
        require!(raw <= MAX, PermissionError::InvalidLockDepth);
        Ok(Self(raw))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn is_locked(self) -> bool {
        self.0 > 0
    }

    pub fn is_saturated(self) -> bool {
        self.0 == MAX
    }

    pub fn lock(&mut self, policy: SaturationPolicy) -> Result<Transition> {
        if self.is_saturated() {
            return match policy {
                SaturationPolicy::Clamp => Ok(Transition::Saturated),
                SaturationPolicy::Reject => err!(PermissionError::AlreadyAtMaxDepth),
            };
        }

        let transition = if self.is_locked() {
            Transition::Deepened
        } else {
            Transition::Engaged
        };
        self.0 += 1;
        Ok(transition)
    }

    pub fn unlock(&mut self) -> Result<Transition> {
        require!(self.is_locked(), PermissionError::NotLocked);

        self.0 -= 1;
        Ok(if self.is_locked() {
            Transition::Relaxed
        } else {
            Transition::Released
        })
    }
}
