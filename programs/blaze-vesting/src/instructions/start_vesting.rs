use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::VestingState;

pub fn start_vesting_handler(ctx: Context<StartVesting>) -> Result<()> {
    let st = &mut ctx.accounts.vesting_state;
    require_keys_eq!(ctx.accounts.owner.key(), st.owner, VestingError::Unauthorized);

    let now = Clock::get()?.unix_timestamp;
    st.start(now)?;

    emit!(VestingStarted { timestamp: now });

    Ok(())
}

#[derive(Accounts)]
pub struct StartVesting<'info> {
    #[account(mut, seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,

    pub owner: Signer<'info>,
}

#[event]
pub struct VestingStarted {
    pub timestamp: i64,
}
