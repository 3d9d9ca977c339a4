#![no_std]

multiversx_sc::imports!();

pub mod access_control;
pub mod airlines;
pub mod errors;
pub mod events;
pub mod flights;
pub mod insurance;
pub mod oracles;
pub mod treasury;
pub mod types;

// ============================================================
// Constants
// ============================================================

/// 1 EGLD in its smallest denomination.
pub const ONE_EGLD: u64 = 1_000_000_000_000_000_000;

/// Contribution an airline needs before it may sponsor airlines or register flights, in EGLD
pub const FUNDING_THRESHOLD_EGLD: u64 = 10;

/// Largest premium a passenger may pay for one flight: 1 EGLD
pub const MAX_INSURANCE_CAP: u64 = ONE_EGLD;

/// Exact payment required to register an oracle: 1 EGLD
pub const ORACLE_REGISTRATION_FEE: u64 = ONE_EGLD;

/// Airlines admitted directly before voting kicks in
pub const MULTIPARTY_CONSENSUS_THRESHOLD: usize = 4;

/// Matching oracle responses needed to settle a request
pub const MIN_RESPONSES: usize = 3;

/// Oracle indexes are drawn from [0, ORACLE_INDEX_RANGE)
pub const ORACLE_INDEX_RANGE: u64 = 10;

/// Payout = premium * 3 / 2
pub const PAYOUT_NUMERATOR: u64 = 3;
pub const PAYOUT_DENOMINATOR: u64 = 2;

/// FUNDING_THRESHOLD_EGLD in the smallest denomination. Exceeds i64, so it
/// only exists as a managed BigUint; never compare it against a raw u64.
pub fn funding_threshold<M: ManagedTypeApi>() -> BigUint<M> {
    BigUint::from(ONE_EGLD) * FUNDING_THRESHOLD_EGLD
}

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait FlightSurety:
    access_control::AccessControlModule
    + airlines::AirlinesModule
    + flights::FlightsModule
    + insurance::InsuranceModule
    + oracles::OraclesModule
    + treasury::TreasuryModule
    + events::EventsModule
{
    /// The deployer becomes admin and the genesis airline.
    #[init]
    fn init(&self) {
        let caller = self.blockchain().get_caller();
        self.init_access_control(&caller);
        self.register_genesis_airline(&caller);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue6<BigUint, BigUint, BigUint, usize, usize, u64> {
        (
            funding_threshold::<Self::Api>(),
            BigUint::from(MAX_INSURANCE_CAP),
            BigUint::from(ORACLE_REGISTRATION_FEE),
            MULTIPARTY_CONSENSUS_THRESHOLD,
            MIN_RESPONSES,
            ORACLE_INDEX_RANGE,
        )
            .into()
    }
}
