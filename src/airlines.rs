multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_REGISTERED, ERR_DUPLICATE_VOTE, ERR_UNAUTHORIZED, ERR_ZERO_AMOUNT,
};
use crate::types::Airline;
use crate::{funding_threshold, MULTIPARTY_CONSENSUS_THRESHOLD};

#[multiversx_sc::module]
pub trait AirlinesModule:
    crate::access_control::AccessControlModule
    + crate::treasury::TreasuryModule
    + crate::events::EventsModule
{
    /// The deployer becomes the first airline: registered, not yet funded.
    fn register_genesis_airline(&self, address: &ManagedAddress) {
        let mut airline = Airline::new(address.clone());
        airline.registered = true;
        self.airlines(address).set(&airline);
        self.registered_airlines().insert(address.clone());

        self.airline_registered_event(address);
    }

    // ========================================================
    // ENDPOINT: addFunds
    // Contributions accumulate without cap; the airline becomes
    // funded once the total reaches the funding threshold.
    // ========================================================

    #[endpoint(addFunds)]
    #[payable("EGLD")]
    fn add_funds(&self) {
        self.require_operational();

        let caller = self.blockchain().get_caller();
        let payment_amount = self.call_value().egld_value().clone_value();
        require!(payment_amount > 0u64, ERR_ZERO_AMOUNT);

        let mut airline = self.load_airline(&caller);
        airline.funds += &payment_amount;
        if airline.funds >= funding_threshold::<Self::Api>() {
            airline.funded = true;
        }
        self.airlines(&caller).set(&airline);
        self.deposit_to_treasury(&payment_amount);

        self.funds_added_event(&caller, &airline.funds);
    }

    // ========================================================
    // ENDPOINT: registerAirline
    // The first MULTIPARTY_CONSENSUS_THRESHOLD airlines are added
    // directly by any funded member. After that each member casts
    // one vote and the candidate joins once yes * 2 >= members.
    // ========================================================

    #[endpoint(registerAirline)]
    fn register_airline(&self, candidate: ManagedAddress, vote_in_favor: bool) {
        self.require_operational();

        let sponsor = self.blockchain().get_caller();
        self.require_participating_airline(&sponsor);

        let mut airline = self.load_airline(&candidate);
        require!(!airline.registered, ERR_ALREADY_REGISTERED);

        let registered_count = self.registered_airlines().len();
        if registered_count < MULTIPARTY_CONSENSUS_THRESHOLD {
            self.admit_airline(&mut airline);
            return;
        }

        require!(
            self.airline_voters(&candidate).insert(sponsor.clone()),
            ERR_DUPLICATE_VOTE
        );
        self.airline_voted_event(&candidate, &sponsor, vote_in_favor);

        if !vote_in_favor {
            return;
        }

        let yes_votes = self.airline_yes_votes(&candidate).update(|votes| {
            *votes += 1;
            *votes
        });
        if yes_votes * 2 >= registered_count as u64 {
            self.admit_airline(&mut airline);
        }
    }

    fn admit_airline(&self, airline: &mut Airline<Self::Api>) {
        airline.registered = true;
        self.airlines(&airline.address).set(&*airline);
        self.registered_airlines().insert(airline.address.clone());

        self.airline_registered_event(&airline.address);
    }

    fn load_airline(&self, address: &ManagedAddress) -> Airline<Self::Api> {
        let mapper = self.airlines(address);
        if mapper.is_empty() {
            Airline::new(address.clone())
        } else {
            mapper.get()
        }
    }

    fn require_participating_airline(&self, address: &ManagedAddress) {
        require!(
            self.load_airline(address).can_participate(),
            ERR_UNAUTHORIZED
        );
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Returns (address, funds, registered). Unknown airlines
    /// report the zero address.
    #[view(getAirlineInfo)]
    fn get_airline_info(
        &self,
        address: &ManagedAddress,
    ) -> MultiValue3<ManagedAddress, BigUint, bool> {
        let mapper = self.airlines(address);
        if mapper.is_empty() {
            return (ManagedAddress::zero(), BigUint::zero(), false).into();
        }
        let airline = mapper.get();
        (airline.address, airline.funds, airline.registered).into()
    }

    #[view(getAirlineVotes)]
    fn get_airline_votes(&self, candidate: &ManagedAddress) -> u64 {
        self.airline_yes_votes(candidate).get()
    }

    #[view(isAirline)]
    fn is_airline(&self, address: &ManagedAddress) -> bool {
        self.registered_airlines().contains(address)
    }

    #[view(isAirlineFunded)]
    fn is_airline_funded(&self, address: &ManagedAddress) -> bool {
        self.load_airline(address).funded
    }

    #[view(getRegisteredAirlinesCount)]
    fn get_registered_airlines_count(&self) -> usize {
        self.registered_airlines().len()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("airlines")]
    fn airlines(&self, address: &ManagedAddress) -> SingleValueMapper<Airline<Self::Api>>;

    #[storage_mapper("registeredAirlines")]
    fn registered_airlines(&self) -> UnorderedSetMapper<ManagedAddress>;

    /// Every airline that voted on the candidate, yes or no.
    #[storage_mapper("airlineVoters")]
    fn airline_voters(&self, candidate: &ManagedAddress) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("airlineYesVotes")]
    fn airline_yes_votes(&self, candidate: &ManagedAddress) -> SingleValueMapper<u64>;
}
