multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_REGISTERED, ERR_ORACLE_NOT_REGISTERED, ERR_UNAUTHORIZED, ERR_UNKNOWN_ORACLE_INDEX,
    ERR_UNKNOWN_REQUEST,
};
use crate::types::{Oracle, OracleIndexes, OracleRequest};
use crate::{MIN_RESPONSES, ORACLE_INDEX_RANGE, ORACLE_REGISTRATION_FEE};

// ============================================================
// Oracle consensus
// Reporters register for a fee and receive three indexes. A
// status request is routed to one index; the first status code
// reported by MIN_RESPONSES distinct oracles settles it.
// ============================================================

#[multiversx_sc::module]
pub trait OraclesModule:
    crate::access_control::AccessControlModule
    + crate::airlines::AirlinesModule
    + crate::flights::FlightsModule
    + crate::insurance::InsuranceModule
    + crate::treasury::TreasuryModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: registerOracle
    // ========================================================

    #[endpoint(registerOracle)]
    #[payable("EGLD")]
    fn register_oracle(&self) {
        self.require_operational();

        let caller = self.blockchain().get_caller();
        let payment_amount = self.call_value().egld_value().clone_value();
        require!(payment_amount == ORACLE_REGISTRATION_FEE, ERR_UNAUTHORIZED);
        require!(self.oracles(&caller).is_empty(), ERR_ALREADY_REGISTERED);

        let indexes = OracleIndexes {
            first: self.next_oracle_index(&caller),
            second: self.next_oracle_index(&caller),
            third: self.next_oracle_index(&caller),
        };
        self.oracles(&caller).set(&Oracle {
            address: caller.clone(),
            indexes,
        });
        self.oracle_fees().update(|fees| *fees += &payment_amount);

        self.oracle_registered_event(&caller, indexes.first, indexes.second, indexes.third);
    }

    // ========================================================
    // ENDPOINT: fetchFlightStatus
    // Opens a request, or returns the index of an existing one.
    // Open requests re-announce themselves for late reporters.
    // ========================================================

    #[endpoint(fetchFlightStatus)]
    fn fetch_flight_status(
        &self,
        airline: ManagedAddress,
        flight: ManagedBuffer,
        timestamp: u64,
    ) -> u8 {
        self.require_operational();
        self.require_flight_of(&airline, &flight);

        let mapper = self.oracle_request(&airline, &flight, timestamp);
        if !mapper.is_empty() {
            let request = mapper.get();
            if !request.settled {
                self.oracle_request_opened_event(request.index, &airline, &flight, timestamp);
            }
            return request.index;
        }

        let index = self.request_index(&airline, &flight, timestamp);
        mapper.set(&OracleRequest {
            requester: self.blockchain().get_caller(),
            index,
            settled: false,
            status_code: 0,
        });

        self.oracle_request_opened_event(index, &airline, &flight, timestamp);
        index
    }

    // ========================================================
    // ENDPOINT: submitOracleResponse
    // Responses after settlement are still recorded but never
    // settle the request a second time.
    // ========================================================

    #[endpoint(submitOracleResponse)]
    fn submit_oracle_response(
        &self,
        index: u8,
        airline: ManagedAddress,
        flight: ManagedBuffer,
        timestamp: u64,
        status_code: u8,
    ) {
        self.require_operational();

        let caller = self.blockchain().get_caller();
        let oracle_mapper = self.oracles(&caller);
        require!(!oracle_mapper.is_empty(), ERR_ORACLE_NOT_REGISTERED);
        require!(
            oracle_mapper.get().indexes.contains(index),
            ERR_UNKNOWN_ORACLE_INDEX
        );

        let request_mapper = self.oracle_request(&airline, &flight, timestamp);
        require!(!request_mapper.is_empty(), ERR_UNKNOWN_REQUEST);
        let mut request = request_mapper.get();
        require!(request.index == index, ERR_UNKNOWN_REQUEST);

        let mut responders = self.oracle_responders(&airline, &flight, timestamp, status_code);
        responders.insert(caller.clone());
        self.oracle_response_recorded_event(&caller, index, status_code);

        if request.settled || responders.len() < MIN_RESPONSES {
            return;
        }

        request.settled = true;
        request.status_code = status_code;
        request_mapper.set(&request);

        self.flight_status_settled_event(&airline, &flight, timestamp, status_code);
        self.process_flight_status(&airline, &flight, timestamp, status_code);
    }

    // ========================================================
    // INTERNAL: index derivation
    // ========================================================

    /// keccak256(oracle ‖ nonce ‖ block random seed), reduced to
    /// the index range. The nonce advances on every draw.
    fn next_oracle_index(&self, oracle: &ManagedAddress) -> u8 {
        let nonce = self.oracle_nonce().update(|nonce| {
            *nonce += 1;
            *nonce
        });
        let seed = self.blockchain().get_block_random_seed();

        let mut data = ManagedBuffer::new();
        data.append(oracle.as_managed_buffer());
        data.append_bytes(&nonce.to_be_bytes());
        data.append(seed.as_managed_buffer());

        self.reduce_to_index(&data)
    }

    /// Depends only on the request key, so every caller asking
    /// about the same flight instance gets the same index.
    fn request_index(
        &self,
        airline: &ManagedAddress,
        flight: &ManagedBuffer,
        timestamp: u64,
    ) -> u8 {
        let mut data = ManagedBuffer::new();
        data.append(airline.as_managed_buffer());
        data.append(flight);
        data.append_bytes(&timestamp.to_be_bytes());

        self.reduce_to_index(&data)
    }

    fn reduce_to_index(&self, data: &ManagedBuffer) -> u8 {
        let hash = self.crypto().keccak256(data).to_byte_array();
        let mut word = [0u8; 8];
        word.copy_from_slice(&hash[24..]);
        (u64::from_be_bytes(word) % ORACLE_INDEX_RANGE) as u8
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getMyIndexes)]
    fn get_my_indexes(&self) -> MultiValue3<u8, u8, u8> {
        let caller = self.blockchain().get_caller();
        self.get_oracle_indexes(&caller)
    }

    #[view(getOracleIndexes)]
    fn get_oracle_indexes(&self, oracle: &ManagedAddress) -> MultiValue3<u8, u8, u8> {
        let mapper = self.oracles(oracle);
        require!(!mapper.is_empty(), ERR_ORACLE_NOT_REGISTERED);
        let indexes = mapper.get().indexes;
        (indexes.first, indexes.second, indexes.third).into()
    }

    #[view(isOracleRegistered)]
    fn is_oracle_registered(&self, oracle: &ManagedAddress) -> bool {
        !self.oracles(oracle).is_empty()
    }

    /// Returns (index, settled, settled status code).
    #[view(getOracleRequest)]
    fn get_oracle_request(
        &self,
        airline: &ManagedAddress,
        flight: &ManagedBuffer,
        timestamp: u64,
    ) -> MultiValue3<u8, bool, u8> {
        let mapper = self.oracle_request(airline, flight, timestamp);
        require!(!mapper.is_empty(), ERR_UNKNOWN_REQUEST);
        let request = mapper.get();
        (request.index, request.settled, request.status_code).into()
    }

    #[view(getResponseCount)]
    fn get_response_count(
        &self,
        airline: &ManagedAddress,
        flight: &ManagedBuffer,
        timestamp: u64,
        status_code: u8,
    ) -> usize {
        self.oracle_responders(airline, flight, timestamp, status_code).len()
    }

    #[view(getOracleFees)]
    #[storage_mapper("oracleFees")]
    fn oracle_fees(&self) -> SingleValueMapper<BigUint>;

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("oracles")]
    fn oracles(&self, oracle: &ManagedAddress) -> SingleValueMapper<Oracle<Self::Api>>;

    #[storage_mapper("oracleNonce")]
    fn oracle_nonce(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("oracleRequest")]
    fn oracle_request(
        &self,
        airline: &ManagedAddress,
        flight: &ManagedBuffer,
        timestamp: u64,
    ) -> SingleValueMapper<OracleRequest<Self::Api>>;

    /// Distinct oracles that reported `status_code` for the request.
    #[storage_mapper("oracleResponders")]
    fn oracle_responders(
        &self,
        airline: &ManagedAddress,
        flight: &ManagedBuffer,
        timestamp: u64,
        status_code: u8,
    ) -> UnorderedSetMapper<ManagedAddress>;
}
