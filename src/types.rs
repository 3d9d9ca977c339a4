multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Flight status codes reported by oracles
// ============================================================

pub const STATUS_CODE_UNKNOWN: u8 = 0;
pub const STATUS_CODE_ON_TIME: u8 = 10;
pub const STATUS_CODE_LATE_AIRLINE: u8 = 20;
pub const STATUS_CODE_LATE_WEATHER: u8 = 30;
pub const STATUS_CODE_LATE_TECHNICAL: u8 = 40;
pub const STATUS_CODE_LATE_OTHER: u8 = 50;

// ============================================================
// Airline — member of the consortium
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Airline<M: ManagedTypeApi> {
    pub address: ManagedAddress<M>,
    /// Total EGLD contributed through addFunds.
    pub funds: BigUint<M>,
    /// Set once `funds` reaches the funding threshold. Never cleared.
    pub funded: bool,
    pub registered: bool,
}

impl<M: ManagedTypeApi> Airline<M> {
    pub fn new(address: ManagedAddress<M>) -> Self {
        Airline {
            address,
            funds: BigUint::zero(),
            funded: false,
            registered: false,
        }
    }

    pub fn can_participate(&self) -> bool {
        self.registered && self.funded
    }
}

// ============================================================
// Flight — keyed by its code, owned by one airline
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Flight<M: ManagedTypeApi> {
    pub airline: ManagedAddress<M>,
    pub code: ManagedBuffer<M>,
    pub registered_at: u64,
    pub status_code: u8,
}

// ============================================================
// Oracle — three assigned indexes, repeats allowed
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub struct OracleIndexes {
    pub first: u8,
    pub second: u8,
    pub third: u8,
}

impl OracleIndexes {
    pub fn contains(&self, index: u8) -> bool {
        self.first == index || self.second == index || self.third == index
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Oracle<M: ManagedTypeApi> {
    pub address: ManagedAddress<M>,
    pub indexes: OracleIndexes,
}

// ============================================================
// Oracle request — keyed by (airline, flight, timestamp)
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct OracleRequest<M: ManagedTypeApi> {
    pub requester: ManagedAddress<M>,
    /// Only oracles holding this index may answer.
    pub index: u8,
    /// Terminal once true; payout evaluation already happened.
    pub settled: bool,
    /// Status code that reached quorum (0 while open).
    pub status_code: u8,
}

// ============================================================
// Insurance record — one active per (flight, passenger)
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct InsuranceRecord<M: ManagedTypeApi> {
    pub passenger: ManagedAddress<M>,
    pub flight: ManagedBuffer<M>,
    pub amount: BigUint<M>,
    pub claimed: bool,
}
