use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::{Beneficiaries, Role, VestingState};

pub fn add_beneficiary_handler(
    ctx: Context<AddBeneficiary>,
    wallet: Pubkey,
    role: Role,
) -> Result<()> {
    let st = &mut ctx.accounts.vesting_state;
    require_keys_eq!(ctx.accounts.owner.key(), st.owner, VestingError::Unauthorized);

    let registry = &mut ctx.accounts.beneficiaries;
    st.register(registry, wallet, role)?;

    emit!(BeneficiaryAdded { wallet, role });

    Ok(())
}

#[derive(Accounts)]
pub struct AddBeneficiary<'info> {
    #[account(mut, seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        mut,
        seeds = [b"beneficiaries", vesting_state.key().as_ref()],
        bump
    )]
    pub beneficiaries: Box<Account<'info, Beneficiaries>>,

    pub owner: Signer<'info>,
}

#[event]
pub struct BeneficiaryAdded {
    pub wallet: Pubkey,
    pub role: Role,
}
