use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum EscrowError {
    InvalidAmount = 1,
    NotFound = 2,
    NotAuthorized = 3,
    InvalidStatus = 4,
    AlreadyApproved = 5,
    SelfEscrow = 6,
    TransferFailed = 7,
    AlreadyInitialized = 8,
    NotInitialized = 9,
}

/// Two-party escrow record. Parties, amount and `created_at` never change
/// after creation; only the approval flags and the status move.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Escrow {
    pub buyer: Address,
    pub seller: Address,
    pub amount: i128,
    pub buyer_approved: bool,
    pub seller_approved: bool,
    pub status: EscrowStatus,
    pub created_at: u32, // ledger sequence at creation
}

// Partial approval is carried by the two flags on `Escrow`, so there is
// no "buyer approved" / "seller approved" status.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum EscrowStatus {
    Pending = 1,
    Completed = 2,
    Cancelled = 3,
}

#[derive(Clone)]
#[contracttype]
pub enum EscrowDataKey {
    Escrow(u64),               // Escrow struct mapping
    NextId,                    // Id handed to the next created escrow
    TotalLocked,               // Sum of amounts held for pending escrows
    PartyEscrow(Address, u32), // n-th escrow id where the address is buyer or seller
    PartyEscrowCount(Address), // Number of PartyEscrow entries for the address
}

/// Upper bound on the page size returned by `get_party_escrows`.
pub const MAX_PAGE_SIZE: u32 = 100;

pub const ADMIN: Symbol = symbol_short!("ADMIN");
pub const TOKEN: Symbol = symbol_short!("TOKEN");
