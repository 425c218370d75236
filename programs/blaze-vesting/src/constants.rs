//! Program-wide constants.

/// Max beneficiaries stored on-chain in the registry PDA (bounds account space).
pub const MAX_BENEFICIARIES: usize = 64;
