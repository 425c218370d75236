#![allow(unexpected_cfgs)]

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;

pub use constants::*;
pub use error::*;
pub use instructions::*;
pub use state::*;

declare_id!("9cASiPPvqzd3DBUe48RUShzxktz2YwHveiHL7aWemz7W");

#[program]
pub mod blaze_vesting {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        cliff_seconds: u64,
        vesting_seconds: u64,
        advisor_budget: u64,
        partner_budget: u64,
        mentor_budget: u64,
    ) -> Result<()> {
        initialize::initialize_handler(
            ctx,
            cliff_seconds,
            vesting_seconds,
            advisor_budget,
            partner_budget,
            mentor_budget,
        )
    }

    pub fn add_beneficiary(
        ctx: Context<AddBeneficiary>,
        wallet: Pubkey,
        role: Role,
    ) -> Result<()> {
        add_beneficiary::add_beneficiary_handler(ctx, wallet, role)
    }

    pub fn remove_beneficiary(ctx: Context<RemoveBeneficiary>, wallet: Pubkey) -> Result<()> {
        remove_beneficiary::remove_beneficiary_handler(ctx, wallet)
    }

    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        deposit_tokens::deposit_tokens_handler(ctx, amount)
    }

    pub fn start_vesting(ctx: Context<StartVesting>) -> Result<()> {
        start_vesting::start_vesting_handler(ctx)
    }

    pub fn claim_tokens(ctx: Context<ClaimTokens>) -> Result<()> {
        claim_tokens::claim_tokens_handler(ctx)
    }

    pub fn beneficiaries_with_role(
        ctx: Context<BeneficiariesWithRole>,
        role: Role,
    ) -> Result<u32> {
        beneficiaries_with_role::beneficiaries_with_role_handler(ctx, role)
    }

    pub fn per_beneficiary_share(ctx: Context<PerBeneficiaryShare>, role: Role) -> Result<u64> {
        per_beneficiary_share::per_beneficiary_share_handler(ctx, role)
    }

    pub fn emit_claim_quote(ctx: Context<EmitClaimQuote>, wallet: Pubkey) -> Result<()> {
        emit_claim_quote::emit_claim_quote_handler(ctx, wallet)
    }
}
