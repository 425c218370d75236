pub mod initialize;
pub mod add_beneficiary;
pub mod remove_beneficiary;
pub mod deposit_tokens;
pub mod start_vesting;
pub mod claim_tokens;
pub mod beneficiaries_with_role;
pub mod per_beneficiary_share;
pub mod emit_claim_quote;

pub use initialize::*;
pub use add_beneficiary::*;
pub use remove_beneficiary::*;
pub use deposit_tokens::*;
pub use start_vesting::*;
pub use claim_tokens::*;
pub use beneficiaries_with_role::*;
pub use per_beneficiary_share::*;
pub use emit_claim_quote::*;
