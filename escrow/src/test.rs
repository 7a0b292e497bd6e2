#![cfg(test)]
extern crate std;

use crate::EscrowContract;
use common::escrow::interface::EscrowContractClient;
use common::escrow::types::InspectionStatus;
use common::property::interface::PropertyRegistryClient;
use property::PropertyRegistry;
use soroban_sdk::testutils::{Address as _, StellarAssetContract};
use soroban_sdk::{token, Address, Env, String};

pub const STARTING_FUNDS: i128 = 1_000;
pub const PURCHASE_AMOUNT: i128 = 100;
pub const DOWN_PAYMENT: i128 = 20;

const HOUSE_URI: &str =
    "https://ipfs.io/ipfs/QmP8Ug8aTcr4pBRJ223HGJ6ynYceuFjqUyC5j1LtkkUcRJ?filename=puducherryHouse.json";

fn create_escrow_contract<'a>(env: &Env) -> EscrowContractClient<'a> {
    let contract_id: Address = env.register(EscrowContract, ());
    EscrowContractClient::new(env, &contract_id)
}

fn create_registry_contract<'a>(env: &Env) -> PropertyRegistryClient<'a> {
    let contract_id: Address = env.register(PropertyRegistry, ());
    PropertyRegistryClient::new(env, &contract_id)
}

fn create_token_contract<'a>(
    e: &Env,
    admin: &Address,
) -> (token::Client<'a>, token::StellarAssetClient<'a>) {
    let sac: StellarAssetContract = e.register_stellar_asset_contract_v2(admin.clone());
    (
        token::Client::new(e, &sac.address()),
        token::StellarAssetClient::new(e, &sac.address()),
    )
}

pub struct EscrowTest {
    env: Env,
    escrow: EscrowContractClient<'static>,
    registry: PropertyRegistryClient<'static>,
    token: token::Client<'static>,
    admin: Address,
    seller: Address,
    buyer: Address,
    lender: Address,
    verifier: Address,
    token_id: u64,
}

impl EscrowTest {
    // Registry and escrow are initialized, the seller owns one minted house and
    // has approved the escrow contract to move it. No sale is open yet.
    fn setup() -> Self {
        let env: Env = Env::default();
        env.mock_all_auths();

        let escrow: EscrowContractClient<'_> = create_escrow_contract(&env);
        let registry: PropertyRegistryClient<'_> = create_registry_contract(&env);

        let admin: Address = Address::generate(&env);
        let seller: Address = Address::generate(&env);
        let buyer: Address = Address::generate(&env);
        let lender: Address = Address::generate(&env);
        let verifier: Address = Address::generate(&env);

        let (token, token_admin) = create_token_contract(&env, &admin);
        token_admin.mint(&buyer, &STARTING_FUNDS);
        token_admin.mint(&lender, &STARTING_FUNDS);

        registry.initialize(&admin);
        escrow.initialize(&admin, &registry.address, &token.address);

        let token_id: u64 = registry.mint(&seller, &String::from_str(&env, HOUSE_URI));
        registry.approve(&seller, &escrow.address, &token_id);

        EscrowTest {
            env,
            escrow,
            registry,
            token,
            admin,
            seller,
            buyer,
            lender,
            verifier,
            token_id,
        }
    }

    fn open_sale(&self) -> u64 {
        self.open_sale_with_terms(PURCHASE_AMOUNT, DOWN_PAYMENT)
    }

    fn open_sale_with_terms(&self, purchase_amount: i128, down_payment: i128) -> u64 {
        self.escrow.create_sale(
            &self.token_id,
            &self.seller,
            &self.buyer,
            &self.lender,
            &self.verifier,
            &purchase_amount,
            &down_payment,
        )
    }

    fn fund_in_full(&self, sale_id: u64) {
        self.escrow
            .deposit_down_payment(&sale_id, &self.buyer, &DOWN_PAYMENT);
        self.escrow
            .deposit_remaining_amount(&sale_id, &self.lender, &(PURCHASE_AMOUNT - DOWN_PAYMENT));
    }

    fn approve_all(&self, sale_id: u64) {
        self.escrow.provide_approval(&sale_id, &self.buyer, &true);
        self.escrow.provide_approval(&sale_id, &self.seller, &true);
        self.escrow.provide_approval(&sale_id, &self.lender, &true);
    }

    fn pass_inspection(&self, sale_id: u64) {
        self.escrow
            .update_inspection_status(&sale_id, &self.verifier, &InspectionStatus::Passed);
    }

    // Sale that satisfies every settlement condition.
    fn ready_sale(&self) -> u64 {
        let sale_id: u64 = self.open_sale();
        self.fund_in_full(sale_id);
        self.pass_inspection(sale_id);
        self.approve_all(sale_id);
        sale_id
    }

    // Second escrow instance wired to another registry contract.
    fn escrow_with_registry(&self, registry: &Address) -> EscrowContractClient<'static> {
        let escrow: EscrowContractClient<'_> = create_escrow_contract(&self.env);
        escrow.initialize(&self.admin, registry, &self.token.address);
        escrow
    }
}

mod deposits;
