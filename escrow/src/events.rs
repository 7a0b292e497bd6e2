use common::escrow::types::{InspectionStatus, Party};
use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

pub enum EscrowEvent {
    Initialized,
    Upgraded(u32),
    SaleCreated(u64, u64, Address, Address),
    FundsDeposited(u64, Address, i128, i128),
    InspectionUpdated(u64, InspectionStatus),
    ApprovalRecorded(u64, Party, bool),
    Settled(u64, u64, Address, Address, i128),
    Refunded(u64, i128, i128),
    DirectTransfer(u64, Address, Address),
}

impl EscrowEvent {
    pub fn name(&self) -> &'static str {
        match self {
            EscrowEvent::Initialized => stringify!(Initialized),
            EscrowEvent::Upgraded(..) => stringify!(Upgraded),
            EscrowEvent::SaleCreated(..) => stringify!(SaleCreated),
            EscrowEvent::FundsDeposited(..) => stringify!(FundsDeposited),
            EscrowEvent::InspectionUpdated(..) => stringify!(InspectionUpdated),
            EscrowEvent::ApprovalRecorded(..) => stringify!(ApprovalRecorded),
            EscrowEvent::Settled(..) => stringify!(Settled),
            EscrowEvent::Refunded(..) => stringify!(Refunded),
            EscrowEvent::DirectTransfer(..) => stringify!(DirectTransfer),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(env);

        match self {
            EscrowEvent::Initialized => {}
            EscrowEvent::Upgraded(version) => {
                v.push_back(version.into_val(env));
            }
            EscrowEvent::SaleCreated(sale_id, token_id, seller, buyer) => {
                v.push_back(sale_id.into_val(env));
                v.push_back(token_id.into_val(env));
                v.push_back(seller.into_val(env));
                v.push_back(buyer.into_val(env));
            }
            EscrowEvent::FundsDeposited(sale_id, depositor, amount, held_balance) => {
                v.push_back(sale_id.into_val(env));
                v.push_back(depositor.into_val(env));
                v.push_back(amount.into_val(env));
                v.push_back(held_balance.into_val(env));
            }
            EscrowEvent::InspectionUpdated(sale_id, status) => {
                v.push_back(sale_id.into_val(env));
                v.push_back((*status).into_val(env));
            }
            EscrowEvent::ApprovalRecorded(sale_id, party, decision) => {
                v.push_back(sale_id.into_val(env));
                v.push_back((*party).into_val(env));
                v.push_back(decision.into_val(env));
            }
            EscrowEvent::Settled(sale_id, token_id, seller, buyer, amount) => {
                v.push_back(sale_id.into_val(env));
                v.push_back(token_id.into_val(env));
                v.push_back(seller.into_val(env));
                v.push_back(buyer.into_val(env));
                v.push_back(amount.into_val(env));
            }
            EscrowEvent::Refunded(sale_id, to_buyer, to_lender) => {
                v.push_back(sale_id.into_val(env));
                v.push_back(to_buyer.into_val(env));
                v.push_back(to_lender.into_val(env));
            }
            EscrowEvent::DirectTransfer(token_id, seller, buyer) => {
                v.push_back(token_id.into_val(env));
                v.push_back(seller.into_val(env));
                v.push_back(buyer.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
