use anchor_lang::prelude::*;

/// Beneficiary category. Each role vests out of its own fixed budget.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Advisor,
    Partner,
    Mentor,
}

/// A single beneficiary entry stored in the registry PDA.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BeneficiaryEntry {
    pub wallet: Pubkey,
    pub role: Role,
    pub claimed_amount: u64,
}

impl BeneficiaryEntry {
    pub const SIZE: usize =
        32 + // wallet
        1 +  // role
        8;   // claimed_amount
}

/// PDA holding the beneficiary registry. A wallet appears at most once,
/// regardless of role.
#[account]
pub struct Beneficiaries {
    pub entries: Vec<BeneficiaryEntry>,
}

impl Beneficiaries {
    /// Space for discriminator + vec length prefix + `max` entries.
    pub const fn space(max: usize) -> usize {
        8 + 4 + max * BeneficiaryEntry::SIZE
    }

    /// Index of `wallet` in the registry, whatever its role.
    pub fn position(&self, wallet: &Pubkey) -> Option<usize> {
        self.entries.iter().position(|e| e.wallet == *wallet)
    }
}
