use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::VestingError;
use crate::state::{Beneficiaries, Role, VestingState};

pub fn remove_beneficiary_handler(ctx: Context<RemoveBeneficiary>, wallet: Pubkey) -> Result<()> {
    let vesting_state_ai = ctx.accounts.vesting_state.to_account_info();
    let vesting_state_bump = ctx.bumps.vesting_state;

    let st = &mut ctx.accounts.vesting_state;
    require_keys_eq!(ctx.accounts.owner.key(), st.owner, VestingError::Unauthorized);

    let now = Clock::get()?.unix_timestamp;
    let registry = &mut ctx.accounts.beneficiaries;
    let (role, forfeited) = st.settle_removal(registry, &wallet, now)?;

    // The entry is gone before any tokens move; a vested remainder is
    // forfeited to the owner, never to the removed wallet.
    if forfeited > 0 {
        require!(
            ctx.accounts.vault.amount >= forfeited,
            VestingError::InsufficientVaultBalance
        );
        let signer_seeds: &[&[&[u8]]] = &[&[b"vesting_state", &[vesting_state_bump]]];
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: ctx.accounts.owner_token_account.to_account_info(),
                    authority: vesting_state_ai,
                },
                signer_seeds,
            ),
            forfeited,
        )?;
    }

    emit!(BeneficiaryRemoved { wallet, role });

    Ok(())
}

#[derive(Accounts)]
pub struct RemoveBeneficiary<'info> {
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
        constraint = owner_token_account.mint == vesting_state.mint @ VestingError::InvalidTokenMint,
        constraint = owner_token_account.owner == vesting_state.owner @ VestingError::InvalidTokenAccount,
    )]
    pub owner_token_account: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct BeneficiaryRemoved {
    pub wallet: Pubkey,
    pub role: Role,
}
