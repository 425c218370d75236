use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::VestingError;
use crate::state::{Beneficiaries, VestingState};

pub fn claim_tokens_handler(ctx: Context<ClaimTokens>) -> Result<()> {
    // Capture AccountInfo and bump before taking mutable borrows.
    let vesting_state_ai = ctx.accounts.vesting_state.to_account_info();
    let vesting_state_bump = ctx.bumps.vesting_state;
    let wallet = ctx.accounts.beneficiary.key();

    let now = Clock::get()?.unix_timestamp;
    let st = &mut ctx.accounts.vesting_state;
    let registry = &mut ctx.accounts.beneficiaries;

    // Ledger first, transfer last.
    let amount = st.settle_claim(registry, &wallet, now)?;

    require!(
        ctx.accounts.vault.amount >= amount,
        VestingError::InsufficientVaultBalance
    );

    // CPI transfer from the vault to the claimer, signed by the vesting_state PDA.
    let signer_seeds: &[&[&[u8]]] = &[&[b"vesting_state", &[vesting_state_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.beneficiary_token_account.to_account_info(),
                authority: vesting_state_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(Claimed { wallet, amount });

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimTokens<'info> {
    #[account(mut, seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        mut,
        seeds = [b"beneficiaries", vesting_state.key().as_ref()],
        bump
    )]
    pub beneficiaries: Box<Account<'info, Beneficiaries>>,

    #[account(
        mut,
        seeds = [b"vault", vesting_state.key().as_ref()],
        bump,
        constraint = vault.mint == vesting_state.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = beneficiary_token_account.mint == vesting_state.mint @ VestingError::InvalidTokenMint,
        constraint = beneficiary_token_account.owner == beneficiary.key() @ VestingError::InvalidTokenAccount,
    )]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct Claimed {
    pub wallet: Pubkey,
    pub amount: u64,
}
