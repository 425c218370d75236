use anchor_lang::prelude::*;

use crate::state::{Role, VestingState};

/// Current per-head share for `role`, surfaced as instruction return data.
/// 0 while the role has no beneficiaries.
pub fn per_beneficiary_share_handler(
    ctx: Context<PerBeneficiaryShare>,
    role: Role,
) -> Result<u64> {
    Ok(ctx.accounts.vesting_state.per_beneficiary_share(role))
}

#[derive(Accounts)]
pub struct PerBeneficiaryShare<'info> {
    #[account(seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,
}
