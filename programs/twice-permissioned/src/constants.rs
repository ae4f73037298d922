use permission_core::SaturationPolicy;

/// Two independent holders may lock the same token account
pub const MAX_LOCK_DEPTH: u8 = 2;

/// A third lock fails instead of silently stacking
pub const SATURATION_POLICY: SaturationPolicy = SaturationPolicy::Reject;

/// Version of the published account schema
pub const SCHEMA_VERSION: u16 = 1;
