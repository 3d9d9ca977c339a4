multiversx_sc::imports!();

use crate::errors::{ERR_DUPLICATE_POLICY, ERR_INSURANCE_CAP_EXCEEDED};
use crate::types::{InsuranceRecord, STATUS_CODE_LATE_AIRLINE};
use crate::{MAX_INSURANCE_CAP, PAYOUT_DENOMINATOR, PAYOUT_NUMERATOR};

#[multiversx_sc::module]
pub trait InsuranceModule:
    crate::access_control::AccessControlModule
    + crate::airlines::AirlinesModule
    + crate::flights::FlightsModule
    + crate::treasury::TreasuryModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: buyInsurance
    // The attached EGLD is the premium. A claimed record may be
    // replaced by a new purchase; an active one may not.
    // ========================================================

    #[endpoint(buyInsurance)]
    #[payable("EGLD")]
    fn buy_insurance(&self, flight: ManagedBuffer) {
        self.require_operational();
        self.require_flight_exists(&flight);

        let passenger = self.blockchain().get_caller();
        let premium = self.call_value().egld_value().clone_value();
        require!(
            premium > 0u64 && premium <= MAX_INSURANCE_CAP,
            ERR_INSURANCE_CAP_EXCEEDED
        );

        let mapper = self.insurance(&flight, &passenger);
        require!(
            mapper.is_empty() || mapper.get().claimed,
            ERR_DUPLICATE_POLICY
        );

        let record = InsuranceRecord {
            passenger: passenger.clone(),
            flight: flight.clone(),
            amount: premium.clone(),
            claimed: false,
        };
        mapper.set(&record);
        self.flight_insurees(&flight).insert(passenger.clone());
        self.deposit_to_treasury(&premium);

        self.insurance_bought_event(&passenger, &flight, &premium);
    }

    // ========================================================
    // INTERNAL: settlement
    // Invoked once per settled oracle request. Only a delay
    // caused by the airline pays out: premium * 3 / 2, rounded
    // down, credited once per record.
    // ========================================================

    fn process_flight_status(
        &self,
        airline: &ManagedAddress,
        flight: &ManagedBuffer,
        _timestamp: u64,
        status_code: u8,
    ) {
        self.update_flight_status(airline, flight, status_code);

        if status_code != STATUS_CODE_LATE_AIRLINE {
            return;
        }

        for passenger in self.flight_insurees(flight).iter() {
            let mapper = self.insurance(flight, &passenger);
            let mut record = mapper.get();
            if record.claimed {
                continue;
            }

            let payout = (&record.amount * PAYOUT_NUMERATOR) / PAYOUT_DENOMINATOR;
            record.claimed = true;
            mapper.set(&record);
            self.credit_passenger(&passenger, &payout);

            self.insurance_paid_event(&passenger, flight, &payout);
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Returns (premium, claimed); zeros when the passenger never
    /// insured the flight.
    #[view(getInsurance)]
    fn get_insurance(
        &self,
        flight: &ManagedBuffer,
        passenger: &ManagedAddress,
    ) -> MultiValue2<BigUint, bool> {
        let mapper = self.insurance(flight, passenger);
        if mapper.is_empty() {
            return (BigUint::zero(), false).into();
        }
        let record = mapper.get();
        (record.amount, record.claimed).into()
    }

    #[view(getFlightInsurees)]
    fn get_flight_insurees(&self, flight: &ManagedBuffer) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for passenger in self.flight_insurees(flight).iter() {
            result.push(passenger);
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("insurance")]
    fn insurance(
        &self,
        flight: &ManagedBuffer,
        passenger: &ManagedAddress,
    ) -> SingleValueMapper<InsuranceRecord<Self::Api>>;

    #[storage_mapper("flightInsurees")]
    fn flight_insurees(&self, flight: &ManagedBuffer) -> UnorderedSetMapper<ManagedAddress>;
}
