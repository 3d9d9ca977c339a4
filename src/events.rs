multiversx_sc::imports!();

/// Notification surface consumed by the dapp and the oracle reporter process.
#[multiversx_sc::module]
pub trait EventsModule {
    #[event("operatingStatusChanged")]
    fn operating_status_changed_event(&self, #[indexed] operational: bool);

    // ── Airlines ──

    #[event("airlineRegistered")]
    fn airline_registered_event(&self, #[indexed] airline: &ManagedAddress);

    #[event("airlineVoted")]
    fn airline_voted_event(
        &self,
        #[indexed] candidate: &ManagedAddress,
        #[indexed] voter: &ManagedAddress,
        in_favor: bool,
    );

    #[event("fundsAdded")]
    fn funds_added_event(&self, #[indexed] airline: &ManagedAddress, total_funds: &BigUint);

    // ── Flights ──

    #[event("flightRegistered")]
    fn flight_registered_event(
        &self,
        #[indexed] airline: &ManagedAddress,
        #[indexed] flight: &ManagedBuffer,
    );

    // ── Insurance / treasury ──

    #[event("insuranceBought")]
    fn insurance_bought_event(
        &self,
        #[indexed] passenger: &ManagedAddress,
        #[indexed] flight: &ManagedBuffer,
        amount: &BigUint,
    );

    #[event("insurancePaid")]
    fn insurance_paid_event(
        &self,
        #[indexed] passenger: &ManagedAddress,
        #[indexed] flight: &ManagedBuffer,
        payout: &BigUint,
    );

    #[event("fundsWithdrawn")]
    fn funds_withdrawn_event(&self, #[indexed] passenger: &ManagedAddress, amount: &BigUint);

    // ── Oracles ──

    #[event("oracleRegistered")]
    fn oracle_registered_event(
        &self,
        #[indexed] oracle: &ManagedAddress,
        #[indexed] first_index: u8,
        #[indexed] second_index: u8,
        #[indexed] third_index: u8,
    );

    #[event("oracleRequestOpened")]
    fn oracle_request_opened_event(
        &self,
        #[indexed] index: u8,
        #[indexed] airline: &ManagedAddress,
        #[indexed] flight: &ManagedBuffer,
        #[indexed] timestamp: u64,
    );

    #[event("oracleResponseRecorded")]
    fn oracle_response_recorded_event(
        &self,
        #[indexed] oracle: &ManagedAddress,
        #[indexed] index: u8,
        #[indexed] status_code: u8,
    );

    #[event("flightStatusSettled")]
    fn flight_status_settled_event(
        &self,
        #[indexed] airline: &ManagedAddress,
        #[indexed] flight: &ManagedBuffer,
        #[indexed] timestamp: u64,
        #[indexed] status_code: u8,
    );
}
