use anchor_lang::prelude::*;

use crate::state::{Role, VestingState};

/// Live beneficiary count for `role`, surfaced as instruction return data.
pub fn beneficiaries_with_role_handler(
    ctx: Context<BeneficiariesWithRole>,
    role: Role,
) -> Result<u32> {
    Ok(ctx.accounts.vesting_state.count(role))
}

#[derive(Accounts)]
pub struct BeneficiariesWithRole<'info> {
    #[account(seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,
}
