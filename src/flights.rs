multiversx_sc::imports!();

use crate::errors::{ERR_FLIGHT_EXISTS, ERR_UNKNOWN_FLIGHT};
use crate::types::{Flight, STATUS_CODE_UNKNOWN};

#[multiversx_sc::module]
pub trait FlightsModule:
    crate::access_control::AccessControlModule
    + crate::airlines::AirlinesModule
    + crate::treasury::TreasuryModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: registerFlight
    // Only a registered and funded airline. The owning airline
    // may re-register its own code, which resets the status.
    // ========================================================

    #[endpoint(registerFlight)]
    fn register_flight(&self, code: ManagedBuffer) {
        self.require_operational();

        let caller = self.blockchain().get_caller();
        self.require_participating_airline(&caller);

        let mapper = self.flights(&code);
        if !mapper.is_empty() {
            require!(mapper.get().airline == caller, ERR_FLIGHT_EXISTS);
        }

        let flight = Flight {
            airline: caller.clone(),
            code: code.clone(),
            registered_at: self.blockchain().get_block_timestamp(),
            status_code: STATUS_CODE_UNKNOWN,
        };
        mapper.set(&flight);

        self.flight_registered_event(&caller, &code);
    }

    fn require_flight_exists(&self, code: &ManagedBuffer) {
        require!(!self.flights(code).is_empty(), ERR_UNKNOWN_FLIGHT);
    }

    fn require_flight_of(&self, airline: &ManagedAddress, code: &ManagedBuffer) {
        let mapper = self.flights(code);
        require!(
            !mapper.is_empty() && mapper.get().airline == *airline,
            ERR_UNKNOWN_FLIGHT
        );
    }

    fn update_flight_status(
        &self,
        airline: &ManagedAddress,
        code: &ManagedBuffer,
        status_code: u8,
    ) {
        let mapper = self.flights(code);
        if mapper.is_empty() {
            return;
        }
        mapper.update(|flight| {
            if flight.airline == *airline {
                flight.status_code = status_code;
            }
        });
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Returns (airline, registration timestamp, status code).
    #[view(getFlightInformation)]
    fn get_flight_information(
        &self,
        code: &ManagedBuffer,
    ) -> MultiValue3<ManagedAddress, u64, u8> {
        let mapper = self.flights(code);
        if mapper.is_empty() {
            return (ManagedAddress::zero(), 0u64, STATUS_CODE_UNKNOWN).into();
        }
        let flight = mapper.get();
        (flight.airline, flight.registered_at, flight.status_code).into()
    }

    #[storage_mapper("flights")]
    fn flights(&self, code: &ManagedBuffer) -> SingleValueMapper<Flight<Self::Api>>;
}
