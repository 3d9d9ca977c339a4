multiversx_sc::imports!();

use crate::errors::ERR_TRANSFER_FAILED;

// ============================================================
// Treasury: pooled airline funds and premiums, plus the
// per-passenger balances credited by insurance payouts.
// ============================================================

#[multiversx_sc::module]
pub trait TreasuryModule:
    crate::access_control::AccessControlModule + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: initiateWithdrawal
    // Drains the caller's whole balance. The balance is cleared
    // before the transfer so a re-entrant call sees zero.
    // ========================================================

    #[endpoint(initiateWithdrawal)]
    fn initiate_withdrawal(&self) {
        self.require_operational();

        let caller = self.blockchain().get_caller();
        let amount = self.passenger_balance(&caller).take();
        if amount == 0u64 {
            return;
        }

        require!(self.treasury_balance().get() >= amount, ERR_TRANSFER_FAILED);
        self.treasury_balance().update(|balance| *balance -= &amount);

        self.send().direct_egld(&caller, &amount);
        self.funds_withdrawn_event(&caller, &amount);
    }

    fn deposit_to_treasury(&self, amount: &BigUint) {
        self.treasury_balance().update(|balance| *balance += amount);
    }

    fn credit_passenger(&self, passenger: &ManagedAddress, amount: &BigUint) {
        self.passenger_balance(passenger)
            .update(|balance| *balance += amount);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Airline contributions + premiums − withdrawals.
    #[view(contractBalance)]
    fn contract_balance(&self) -> BigUint {
        self.treasury_balance().get()
    }

    #[view(getPassengerFunds)]
    fn get_passenger_funds(&self, passenger: &ManagedAddress) -> BigUint {
        self.passenger_balance(passenger).get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("treasuryBalance")]
    fn treasury_balance(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("passengerBalance")]
    fn passenger_balance(&self, passenger: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
