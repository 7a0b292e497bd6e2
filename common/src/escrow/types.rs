use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum EscrowError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    StateNotAlreadySet = 3,
    SaleNotFound = 4,
    Unauthorized = 5,
    InvalidAmount = 6,
    InvalidTermConfiguration = 7,
    InvalidParty = 8,
    InvalidInspectionStatus = 9,
    PropertyNotOwnedBySeller = 10,
    PropertyAlreadyInEscrow = 11,
    AlreadySettled = 12,
    SaleCancelled = 13,
    // Settlement preconditions
    InspectionNotPassed = 20,
    BuyerApprovalMissing = 21,
    SellerApprovalMissing = 22,
    LenderApprovalMissing = 23,
    InsufficientFunds = 24,
    TransferNotApproved = 25,
    RegistryTransferRejected = 30,
    PaymentTransferFailed = 31,
}

impl EscrowError {
    /// True for the errors returned when settlement is attempted before the
    /// sale is ready. Each one names the condition that is still unmet.
    pub fn is_unmet_precondition(&self) -> bool {
        matches!(
            self,
            EscrowError::InspectionNotPassed
                | EscrowError::BuyerApprovalMissing
                | EscrowError::SellerApprovalMissing
                | EscrowError::LenderApprovalMissing
                | EscrowError::InsufficientFunds
                | EscrowError::TransferNotApproved
        )
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum InspectionStatus {
    Pending,
    Passed,
    Failed,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum SaleStatus {
    Open,
    Settled,
    Cancelled,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum Party {
    Buyer,
    Seller,
    Lender,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Sale {
    pub id: u64,
    // Registry and payment token are pinned when the sale opens so later
    // config changes never strand its funds or rebind its property.
    pub registry: Address,
    pub token_id: u64,
    pub payment_token: Address,
    pub seller: Address,
    pub buyer: Address,
    pub lender: Address,
    pub verifier: Address,
    pub purchase_amount: i128,
    pub down_payment_amount: i128,
    pub held_balance: i128,
    // Refund bookkeeping only; settlement looks at held_balance alone.
    pub buyer_deposited: i128,
    pub lender_deposited: i128,
    pub inspection: InspectionStatus,
    pub buyer_approved: bool,
    pub seller_approved: bool,
    pub lender_approved: bool,
    pub status: SaleStatus,
}

impl Sale {
    pub fn approval(&self, party: Party) -> bool {
        match party {
            Party::Buyer => self.buyer_approved,
            Party::Seller => self.seller_approved,
            Party::Lender => self.lender_approved,
        }
    }

    pub fn party_of(&self, caller: &Address) -> Option<Party> {
        if *caller == self.buyer {
            Some(Party::Buyer)
        } else if *caller == self.seller {
            Some(Party::Seller)
        } else if *caller == self.lender {
            Some(Party::Lender)
        } else {
            None
        }
    }

    pub fn left_payment_amount(&self) -> i128 {
        if self.held_balance >= self.purchase_amount {
            0
        } else {
            self.purchase_amount - self.held_balance
        }
    }
}

#[derive(Clone)]
#[contracttype]
pub enum EscrowDataKey {
    SaleCount,        // Number of sales created so far
    Sale(u64),        // Sale state by sale id
    ActiveSale(Address, u64), // Open sale bound to a (registry, token id) pair
}

pub const ADMIN: Symbol = symbol_short!("ADMIN");
pub const REGISTRY: Symbol = symbol_short!("REGISTRY");
pub const PAYMENT_TOKEN: Symbol = symbol_short!("PAY_TOKEN");
