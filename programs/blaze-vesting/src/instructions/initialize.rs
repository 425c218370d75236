use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::MAX_BENEFICIARIES;
use crate::error::VestingError;
use crate::state::{Beneficiaries, VestingState};

pub fn initialize_handler(
    ctx: Context<Initialize>,
    cliff_seconds: u64,
    vesting_seconds: u64,
    advisor_budget: u64,
    partner_budget: u64,
    mentor_budget: u64,
) -> Result<()> {
    require!(vesting_seconds > 0, VestingError::InvalidConfig);

    let st = &mut ctx.accounts.vesting_state;
    st.owner = ctx.accounts.owner.key();
    st.mint = ctx.accounts.mint.key();
    st.advisor_budget = advisor_budget;
    st.partner_budget = partner_budget;
    st.mentor_budget = mentor_budget;
    st.cliff_seconds = cliff_seconds;
    st.vesting_seconds = vesting_seconds;
    st.started = false;
    st.start_ts = 0;
    st.advisor_count = 0;
    st.partner_count = 0;
    st.mentor_count = 0;
    st.total_claimed = 0;

    let registry = &mut ctx.accounts.beneficiaries;
    registry.entries = Vec::new();

    emit!(VestingInitialized {
        owner: st.owner,
        mint: st.mint,
        cliff_seconds,
        vesting_seconds,
        advisor_budget,
        partner_budget,
        mentor_budget,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + VestingState::SIZE,
        seeds = [b"vesting_state"],
        bump
    )]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        init,
        payer = owner,
        space = Beneficiaries::space(MAX_BENEFICIARIES),
        seeds = [b"beneficiaries", vesting_state.key().as_ref()],
        bump
    )]
    pub beneficiaries: Account<'info, Beneficiaries>,

    #[account(
        init,
        payer = owner,
        token::mint = mint,
        token::authority = vesting_state,
        seeds = [b"vault", vesting_state.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct VestingInitialized {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub cliff_seconds: u64,
    pub vesting_seconds: u64,
    pub advisor_budget: u64,
    pub partner_budget: u64,
    pub mentor_budget: u64,
}
