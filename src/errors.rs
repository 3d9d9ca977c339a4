// ============================================================
// Error messages
// Every failure aborts the whole transaction; the VM reverts
// all storage writes made before the failing check.
// ============================================================

pub const ERR_NOT_OPERATIONAL: &str = "Contract is currently not operational";
pub const ERR_UNAUTHORIZED: &str = "Caller is not authorized";
pub const ERR_DUPLICATE_VOTE: &str = "Airline already voted for this candidate";
pub const ERR_FLIGHT_EXISTS: &str = "Flight already registered by another airline";
pub const ERR_ALREADY_REGISTERED: &str = "Already registered";
pub const ERR_ORACLE_NOT_REGISTERED: &str = "Oracle is not registered";
pub const ERR_UNKNOWN_ORACLE_INDEX: &str = "Index does not match oracle request";
pub const ERR_UNKNOWN_REQUEST: &str = "Flight or timestamp do not match oracle request";
pub const ERR_INSURANCE_CAP_EXCEEDED: &str = "Insurance amount must be positive and within the cap";
pub const ERR_DUPLICATE_POLICY: &str = "Passenger already insured for this flight";
pub const ERR_TRANSFER_FAILED: &str = "Treasury cannot cover the withdrawal";
pub const ERR_UNKNOWN_FLIGHT: &str = "Flight is not registered";
pub const ERR_ZERO_AMOUNT: &str = "Amount must be positive";
