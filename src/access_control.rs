multiversx_sc::imports!();

use crate::errors::{ERR_NOT_OPERATIONAL, ERR_UNAUTHORIZED};

// ============================================================
// Circuit breaker: admin-controlled flag gating every
// mutating endpoint. Views stay available while halted.
// ============================================================

#[multiversx_sc::module]
pub trait AccessControlModule: crate::events::EventsModule {
    fn init_access_control(&self, admin: &ManagedAddress) {
        self.admin().set(admin);
        self.operational().set(true);
    }

    /// Works while halted so the admin can always resume operations.
    #[endpoint(setOperatingStatus)]
    fn set_operating_status(&self, operational: bool) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.admin().get(), ERR_UNAUTHORIZED);

        self.operational().set(operational);
        self.operating_status_changed_event(operational);
    }

    fn require_operational(&self) {
        require!(self.operational().get(), ERR_NOT_OPERATIONAL);
    }

    #[view(isOperational)]
    fn is_operational(&self) -> bool {
        self.operational().get()
    }

    #[view(getAdmin)]
    #[storage_mapper("admin")]
    fn admin(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("operational")]
    fn operational(&self) -> SingleValueMapper<bool>;
}
