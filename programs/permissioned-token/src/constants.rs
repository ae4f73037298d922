use permission_core::SaturationPolicy;

/// A token account is either locked or not
pub const MAX_LOCK_DEPTH: u8 = 1;

/// Locking an already locked account succeeds and re-asserts the delegate
pub const SATURATION_POLICY: SaturationPolicy = SaturationPolicy::Clamp;

/// Version of the published account schema
pub const SCHEMA_VERSION: u16 = 1;
