use soroban_sdk::{contracterror, contracttype, symbol_short, Address, String, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    TokenNotFound = 3,
    NotOwner = 4,
    NotApproved = 5,
    StateNotAlreadySet = 6,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    TokenCount,           // Next token id to mint
    Token(u64),           // Owner and metadata of a token
    Approval(u64),        // Operator allowed to move a token on the owner's behalf
    Balance(Address),     // Number of tokens held by an address
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Property {
    pub id: u64,
    pub owner: Address,
    pub token_uri: String,
}

pub const ADMIN: Symbol = symbol_short!("ADMIN");
