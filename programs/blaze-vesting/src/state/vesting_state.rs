//! Global vesting state and the transitions over it.
//! Registry and ledger mutations are plain methods on in-memory accounts so
//! the lifecycle is testable without a runtime; handlers add signature
//! checks and token movement on top.

use anchor_lang::prelude::*;

use super::beneficiaries::{Beneficiaries, BeneficiaryEntry, Role};
use crate::constants::MAX_BENEFICIARIES;
use crate::error::VestingError;
use crate::utils::curve;

/// Singleton vesting state PDA.
#[account]
pub struct VestingState {
    /// Authority allowed to manage beneficiaries and start vesting.
    pub owner: Pubkey,
    /// Token mint being vested.
    pub mint: Pubkey,
    /// Fixed budget split across all advisors, token base units.
    pub advisor_budget: u64,
    /// Fixed budget split across all partners.
    pub partner_budget: u64,
    /// Fixed budget split across all mentors.
    pub mentor_budget: u64,
    /// Cliff length in seconds from start.
    pub cliff_seconds: u64,
    /// Linear release window in seconds after the cliff.
    pub vesting_seconds: u64,
    /// One-way launch flag.
    pub started: bool,
    /// Unix timestamp recorded by `start`; 0 until then.
    pub start_ts: i64,
    /// Live registry count per role (mirrors the registry entries).
    pub advisor_count: u32,
    pub partner_count: u32,
    pub mentor_count: u32,
    /// Lifetime sum of claim payouts.
    pub total_claimed: u64,
}

impl VestingState {
    pub const SIZE: usize =
        32 + // owner
        32 + // mint
        8 +  // advisor_budget
        8 +  // partner_budget
        8 +  // mentor_budget
        8 +  // cliff_seconds
        8 +  // vesting_seconds
        1 +  // started
        8 +  // start_ts
        4 +  // advisor_count
        4 +  // partner_count
        4 +  // mentor_count
        8;   // total_claimed

    pub fn budget(&self, role: Role) -> u64 {
        match role {
            Role::Advisor => self.advisor_budget,
            Role::Partner => self.partner_budget,
            Role::Mentor => self.mentor_budget,
        }
    }

    pub fn count(&self, role: Role) -> u32 {
        match role {
            Role::Advisor => self.advisor_count,
            Role::Partner => self.partner_count,
            Role::Mentor => self.mentor_count,
        }
    }

    fn count_mut(&mut self, role: Role) -> &mut u32 {
        match role {
            Role::Advisor => &mut self.advisor_count,
            Role::Partner => &mut self.partner_count,
            Role::Mentor => &mut self.mentor_count,
        }
    }

    /// Live per-head share for `role`: floor(budget / count), 0 while the
    /// role is empty. Never stored; it moves whenever the role count does.
    pub fn per_beneficiary_share(&self, role: Role) -> u64 {
        let count = self.count(role) as u64;
        if count == 0 {
            return 0;
        }
        self.budget(role) / count
    }

    /// Tokens vested out of one `role` share at `now`; 0 before launch.
    pub fn vested_entitlement(&self, role: Role, now: i64) -> u64 {
        if !self.started {
            return 0;
        }
        curve::vested_amount(
            self.per_beneficiary_share(role),
            self.cliff_seconds,
            self.vesting_seconds,
            self.start_ts,
            now,
        )
    }

    /// Pre-launch registry insert. The owner check stays with the handler.
    pub fn register(
        &mut self,
        registry: &mut Beneficiaries,
        wallet: Pubkey,
        role: Role,
    ) -> std::result::Result<(), VestingError> {
        if self.started {
            return Err(VestingError::VestingStarted);
        }
        if wallet == Pubkey::default() {
            return Err(VestingError::NullAddress);
        }
        if registry.position(&wallet).is_some() {
            return Err(VestingError::AlreadyBeneficiary);
        }
        if registry.entries.len() >= MAX_BENEFICIARIES {
            return Err(VestingError::BeneficiaryListFull);
        }
        registry.entries.push(BeneficiaryEntry {
            wallet,
            role,
            claimed_amount: 0,
        });
        let count = self.count_mut(role);
        *count = count.checked_add(1).ok_or(VestingError::MathOverflow)?;
        Ok(())
    }

    /// Remove `wallet`, settling the outstanding entitlement at the share in
    /// force while the leaver still counts. Returns the role and the
    /// vested-but-unclaimed amount owed to the owner.
    pub fn settle_removal(
        &mut self,
        registry: &mut Beneficiaries,
        wallet: &Pubkey,
        now: i64,
    ) -> std::result::Result<(Role, u64), VestingError> {
        let index = registry.position(wallet).ok_or(VestingError::NotFound)?;
        let entry = registry.entries[index];
        let forfeited = self
            .vested_entitlement(entry.role, now)
            .saturating_sub(entry.claimed_amount);
        registry.entries.remove(index);
        let count = self.count_mut(entry.role);
        *count = count.saturating_sub(1);
        Ok((entry.role, forfeited))
    }

    /// One-way lifecycle transition; records the launch timestamp.
    pub fn start(&mut self, now: i64) -> std::result::Result<(), VestingError> {
        if self.started {
            return Err(VestingError::AlreadyStarted);
        }
        self.started = true;
        self.start_ts = now;
        Ok(())
    }

    /// Move the caller's vested-but-unclaimed balance onto the ledger and
    /// return it. Lifecycle gates fire before the membership lookup.
    pub fn settle_claim(
        &mut self,
        registry: &mut Beneficiaries,
        wallet: &Pubkey,
        now: i64,
    ) -> std::result::Result<u64, VestingError> {
        if !self.started {
            return Err(VestingError::NotStarted);
        }
        if curve::elapsed_since(self.start_ts, now) < self.cliff_seconds {
            return Err(VestingError::InCliff);
        }
        let index = registry
            .position(wallet)
            .ok_or(VestingError::NotBeneficiary)?;
        let role = registry.entries[index].role;
        let entitled = self.vested_entitlement(role, now);
        let entry = &mut registry.entries[index];
        let claimable = entitled.saturating_sub(entry.claimed_amount);
        if claimable == 0 {
            return Err(VestingError::NothingToClaim);
        }
        entry.claimed_amount = entry
            .claimed_amount
            .checked_add(claimable)
            .ok_or(VestingError::MathOverflow)?;
        self.total_claimed = self
            .total_claimed
            .checked_add(claimable)
            .ok_or(VestingError::MathOverflow)?;
        Ok(claimable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLIFF: u64 = 1_000;
    const VESTING: u64 = 10_000;
    const ADVISOR_BUDGET: u64 = 525_000_000;
    const PARTNER_BUDGET: u64 = 750_000_000;
    const MENTOR_BUDGET: u64 = 225_000_000;
    const START: i64 = 1_700_000_000;

    fn state() -> VestingState {
        VestingState {
            owner: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            advisor_budget: ADVISOR_BUDGET,
            partner_budget: PARTNER_BUDGET,
            mentor_budget: MENTOR_BUDGET,
            cliff_seconds: CLIFF,
            vesting_seconds: VESTING,
            started: false,
            start_ts: 0,
            advisor_count: 0,
            partner_count: 0,
            mentor_count: 0,
            total_claimed: 0,
        }
    }

    fn registry() -> Beneficiaries {
        Beneficiaries {
            entries: Vec::new(),
        }
    }

    /// Timestamp `pct` percent through the linear window, cliff included.
    fn vesting_pct(pct: u64) -> i64 {
        START + (CLIFF + VESTING * pct / 100) as i64
    }

    #[test]
    fn add_rejects_null_and_duplicate_wallets() {
        let mut st = state();
        let mut reg = registry();
        let wallet = Pubkey::new_unique();

        assert!(matches!(
            st.register(&mut reg, Pubkey::default(), Role::Partner),
            Err(VestingError::NullAddress)
        ));

        st.register(&mut reg, wallet, Role::Partner).unwrap();
        assert_eq!(st.partner_count, 1);

        // The same wallet is rejected under every role.
        for role in [Role::Advisor, Role::Partner, Role::Mentor] {
            assert!(matches!(
                st.register(&mut reg, wallet, role),
                Err(VestingError::AlreadyBeneficiary)
            ));
        }
        assert_eq!(reg.entries.len(), 1);
    }

    #[test]
    fn add_locks_out_after_start() {
        let mut st = state();
        let mut reg = registry();
        st.start(START).unwrap();

        assert!(matches!(
            st.register(&mut reg, Pubkey::new_unique(), Role::Advisor),
            Err(VestingError::VestingStarted)
        ));
        // Lifecycle wins over address validity once started.
        assert!(matches!(
            st.register(&mut reg, Pubkey::default(), Role::Advisor),
            Err(VestingError::VestingStarted)
        ));
    }

    #[test]
    fn registry_capacity_is_enforced() {
        let mut st = state();
        let mut reg = registry();
        for _ in 0..MAX_BENEFICIARIES {
            st.register(&mut reg, Pubkey::new_unique(), Role::Mentor)
                .unwrap();
        }
        assert!(matches!(
            st.register(&mut reg, Pubkey::new_unique(), Role::Mentor),
            Err(VestingError::BeneficiaryListFull)
        ));
        assert_eq!(st.mentor_count, MAX_BENEFICIARIES as u32);
    }

    #[test]
    fn share_is_floor_of_budget_over_count() {
        let mut st = state();
        let mut reg = registry();
        assert_eq!(st.per_beneficiary_share(Role::Advisor), 0);

        for _ in 0..3 {
            st.register(&mut reg, Pubkey::new_unique(), Role::Advisor)
                .unwrap();
        }
        assert_eq!(st.per_beneficiary_share(Role::Advisor), 175_000_000);

        for _ in 0..7 {
            st.register(&mut reg, Pubkey::new_unique(), Role::Mentor)
                .unwrap();
        }
        // 225_000_000 / 7 leaves remainder 1 unassigned.
        assert_eq!(st.per_beneficiary_share(Role::Mentor), 32_142_857);
    }

    #[test]
    fn shares_never_exceed_role_budget() {
        let mut st = state();
        let mut reg = registry();
        for i in 1..=9u64 {
            st.register(&mut reg, Pubkey::new_unique(), Role::Mentor)
                .unwrap();
            let share = st.per_beneficiary_share(Role::Mentor);
            assert!(share * i <= MENTOR_BUDGET);
        }
    }

    #[test]
    fn removal_before_start_recomputes_shares() {
        let mut st = state();
        let mut reg = registry();
        let stays = Pubkey::new_unique();
        let leaves = Pubkey::new_unique();
        st.register(&mut reg, stays, Role::Advisor).unwrap();
        st.register(&mut reg, leaves, Role::Advisor).unwrap();
        assert_eq!(st.per_beneficiary_share(Role::Advisor), ADVISOR_BUDGET / 2);

        let (role, forfeited) = st.settle_removal(&mut reg, &leaves, START).unwrap();
        assert_eq!(role, Role::Advisor);
        assert_eq!(forfeited, 0);
        assert_eq!(st.advisor_count, 1);
        assert!(reg.position(&leaves).is_none());
        // The survivor's share grows to the whole budget.
        assert_eq!(st.per_beneficiary_share(Role::Advisor), ADVISOR_BUDGET);
    }

    #[test]
    fn removal_of_unknown_wallet_fails() {
        let mut st = state();
        let mut reg = registry();
        assert!(matches!(
            st.settle_removal(&mut reg, &Pubkey::new_unique(), START),
            Err(VestingError::NotFound)
        ));
    }

    #[test]
    fn removal_inside_cliff_settles_at_zero() {
        let mut st = state();
        let mut reg = registry();
        let wallet = Pubkey::new_unique();
        st.register(&mut reg, wallet, Role::Mentor).unwrap();
        st.start(START).unwrap();

        let (_, forfeited) = st
            .settle_removal(&mut reg, &wallet, START + CLIFF as i64 / 2)
            .unwrap();
        assert_eq!(forfeited, 0);
        assert_eq!(st.mentor_count, 0);
    }

    #[test]
    fn start_is_one_way() {
        let mut st = state();
        st.start(START).unwrap();
        assert!(st.started);
        assert_eq!(st.start_ts, START);

        assert!(matches!(
            st.start(START + 5),
            Err(VestingError::AlreadyStarted)
        ));
        assert_eq!(st.start_ts, START);
    }

    #[test]
    fn claim_requires_started_then_cliff_passed() {
        let mut st = state();
        let mut reg = registry();
        let wallet = Pubkey::new_unique();
        st.register(&mut reg, wallet, Role::Partner).unwrap();

        // Lifecycle gates fire before membership is even consulted.
        assert!(matches!(
            st.settle_claim(&mut reg, &Pubkey::new_unique(), START),
            Err(VestingError::NotStarted)
        ));

        st.start(START).unwrap();
        assert!(matches!(
            st.settle_claim(&mut reg, &wallet, START),
            Err(VestingError::InCliff)
        ));
        assert!(matches!(
            st.settle_claim(&mut reg, &wallet, START + CLIFF as i64 - 1),
            Err(VestingError::InCliff)
        ));
        // The cliff edge itself is past the gate but vests nothing yet.
        assert!(matches!(
            st.settle_claim(&mut reg, &wallet, START + CLIFF as i64),
            Err(VestingError::NothingToClaim)
        ));
    }

    #[test]
    fn claim_by_stranger_fails_after_cliff() {
        let mut st = state();
        let mut reg = registry();
        st.register(&mut reg, Pubkey::new_unique(), Role::Partner)
            .unwrap();
        st.start(START).unwrap();

        assert!(matches!(
            st.settle_claim(&mut reg, &Pubkey::new_unique(), vesting_pct(50)),
            Err(VestingError::NotBeneficiary)
        ));
    }

    #[test]
    fn claims_accrue_linearly_and_stop_at_share() {
        let mut st = state();
        let mut reg = registry();
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        st.register(&mut reg, a, Role::Partner).unwrap();
        st.register(&mut reg, b, Role::Partner).unwrap();
        st.start(START).unwrap();

        // share = 750M / 2 = 375M
        assert_eq!(
            st.settle_claim(&mut reg, &a, vesting_pct(25)).unwrap(),
            93_750_000
        );
        assert_eq!(
            st.settle_claim(&mut reg, &a, vesting_pct(50)).unwrap(),
            93_750_000
        );
        assert_eq!(
            st.settle_claim(&mut reg, &a, vesting_pct(100)).unwrap(),
            187_500_000
        );
        assert!(matches!(
            st.settle_claim(&mut reg, &a, vesting_pct(100)),
            Err(VestingError::NothingToClaim)
        ));
        assert_eq!(reg.entries[0].claimed_amount, 375_000_000);
        assert_eq!(st.total_claimed, 375_000_000);
    }

    #[test]
    fn two_partners_split_the_partner_budget() {
        let mut st = state();
        let mut reg = registry();
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        st.register(&mut reg, a, Role::Partner).unwrap();
        st.register(&mut reg, b, Role::Partner).unwrap();
        st.start(START).unwrap();

        let end = START + (CLIFF + VESTING) as i64;
        assert_eq!(st.settle_claim(&mut reg, &a, end).unwrap(), 375_000_000);
        assert_eq!(st.settle_claim(&mut reg, &b, end).unwrap(), 375_000_000);
        assert!(matches!(
            st.settle_claim(&mut reg, &a, end + 1_000_000),
            Err(VestingError::NothingToClaim)
        ));
        assert_eq!(st.total_claimed, PARTNER_BUDGET);
    }

    #[test]
    fn removal_forfeits_only_the_unclaimed_vested_part() {
        let mut st = state();
        let mut reg = registry();
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        st.register(&mut reg, a, Role::Partner).unwrap();
        st.register(&mut reg, b, Role::Partner).unwrap();
        st.start(START).unwrap();

        assert_eq!(
            st.settle_claim(&mut reg, &b, vesting_pct(25)).unwrap(),
            93_750_000
        );
        let (_, forfeited) = st.settle_removal(&mut reg, &b, vesting_pct(50)).unwrap();
        assert_eq!(forfeited, 93_750_000);
    }

    #[test]
    fn removal_after_start_raises_survivor_share() {
        let mut st = state();
        let mut reg = registry();
        let survivor = Pubkey::new_unique();
        let leaver = Pubkey::new_unique();
        st.register(&mut reg, survivor, Role::Partner).unwrap();
        st.register(&mut reg, leaver, Role::Partner).unwrap();
        st.start(START).unwrap();

        let halfway = vesting_pct(50);
        assert_eq!(
            st.settle_claim(&mut reg, &survivor, halfway).unwrap(),
            187_500_000
        );

        // The leaver is settled at the pre-removal share.
        let (role, forfeited) = st.settle_removal(&mut reg, &leaver, halfway).unwrap();
        assert_eq!(role, Role::Partner);
        assert_eq!(forfeited, 187_500_000);
        assert_eq!(st.partner_count, 1);

        // Live recomputation: the survivor's share becomes the whole budget,
        // so role outflow can end up above it once a leaver was settled.
        assert_eq!(st.per_beneficiary_share(Role::Partner), PARTNER_BUDGET);
        let end = START + (CLIFF + VESTING) as i64;
        assert_eq!(
            st.settle_claim(&mut reg, &survivor, end).unwrap(),
            562_500_000
        );
        assert_eq!(st.total_claimed, 750_000_000);
        assert_eq!(st.total_claimed + forfeited, 937_500_000);
    }
}
