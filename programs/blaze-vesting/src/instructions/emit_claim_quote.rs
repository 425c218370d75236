use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::{Beneficiaries, Role, VestingState};

/// Read-only breakdown of a beneficiary's position, emitted for off-chain
/// consumers. Before start or inside the cliff the vested amount quotes as 0.
pub fn emit_claim_quote_handler(ctx: Context<EmitClaimQuote>, wallet: Pubkey) -> Result<()> {
    let st = &ctx.accounts.vesting_state;
    let now = Clock::get()?.unix_timestamp;

    let registry = &ctx.accounts.beneficiaries;
    let index = registry.position(&wallet).ok_or(VestingError::NotFound)?;
    let entry = registry.entries[index];

    let vested = st.vested_entitlement(entry.role, now);
    let claimable = vested.saturating_sub(entry.claimed_amount);

    emit!(ClaimQuote {
        wallet,
        role: entry.role,
        vested_amount: vested,
        claimed_amount: entry.claimed_amount,
        claimable,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitClaimQuote<'info> {
    #[account(seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        seeds = [b"beneficiaries", vesting_state.key().as_ref()],
        bump
    )]
    pub beneficiaries: Box<Account<'info, Beneficiaries>>,
}

#[event]
pub struct ClaimQuote {
    pub wallet: Pubkey,
    pub role: Role,
    pub vested_amount: u64,
    pub claimed_amount: u64,
    pub claimable: u64,
}
