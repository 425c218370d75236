use anchor_lang::prelude::*;

/// Custom error codes for the vesting program.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: owner signature required")]
    Unauthorized,

    #[msg("The default address cannot be a beneficiary")]
    NullAddress,

    #[msg("Address is already a beneficiary")]
    AlreadyBeneficiary,

    #[msg("Address is not a registered beneficiary")]
    NotFound,

    #[msg("Vesting has started; beneficiaries can no longer be added")]
    VestingStarted,

    #[msg("Vesting has already started")]
    AlreadyStarted,

    #[msg("Vesting has not started yet")]
    NotStarted,

    #[msg("Vesting is in the cliff period; no tokens are released")]
    InCliff,

    #[msg("Nothing to claim")]
    NothingToClaim,

    #[msg("Caller is not a registered beneficiary")]
    NotBeneficiary,

    #[msg("Beneficiary list is full")]
    BeneficiaryListFull,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Math overflow")]
    MathOverflow,
}
