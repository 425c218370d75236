pub mod beneficiaries;
pub mod vesting_state;

pub use beneficiaries::*;
pub use vesting_state::*;
