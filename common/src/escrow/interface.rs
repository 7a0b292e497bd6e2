use soroban_sdk::{contractclient, Address, BytesN, Env, Symbol};
use super::types::{EscrowError as Error, InspectionStatus, Party, Sale, SaleStatus};

#[contractclient(name = "EscrowContractClient")]
pub trait EscrowContractTrait {
    fn initialize(
        env: Env,
        admin: Address,
        registry: Address,
        payment_token: Address,
    ) -> Result<(), Error>;
    fn version() -> u32;
    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), Error>;
    fn update_state(env: Env, state_key: Symbol, state_value: Address) -> Result<(), Error>;
    fn create_sale(
        env: Env,
        token_id: u64,
        seller: Address,
        buyer: Address,
        lender: Address,
        verifier: Address,
        purchase_amount: i128,
        down_payment_amount: i128,
    ) -> Result<u64, Error>;
    fn deposit_down_payment(env: Env, sale_id: u64, buyer: Address, amount: i128)
        -> Result<i128, Error>;
    fn deposit_remaining_amount(
        env: Env,
        sale_id: u64,
        lender: Address,
        amount: i128,
    ) -> Result<i128, Error>;
    fn update_inspection_status(
        env: Env,
        sale_id: u64,
        verifier: Address,
        status: InspectionStatus,
    ) -> Result<(), Error>;
    fn provide_approval(env: Env, sale_id: u64, party: Address, decision: bool)
        -> Result<(), Error>;
    fn check_settlement(env: Env, sale_id: u64) -> Result<(), Error>;
    fn transfer_real_estate_property(env: Env, sale_id: u64) -> Result<i128, Error>;
    fn cancel_and_refund(env: Env, sale_id: u64, caller: Address) -> Result<(), Error>;
    fn transfer_without_escrow(
        env: Env,
        token_id: u64,
        seller: Address,
        buyer: Address,
    ) -> Result<(), Error>;
    fn get_sale(env: Env, sale_id: u64) -> Result<Sale, Error>;
    fn status(env: Env, sale_id: u64) -> Result<SaleStatus, Error>;
    fn inspection_status(env: Env, sale_id: u64) -> Result<InspectionStatus, Error>;
    fn approval_of(env: Env, sale_id: u64, party: Party) -> Result<bool, Error>;
    fn get_balance(env: Env, sale_id: u64) -> Result<i128, Error>;
    fn left_payment_amount(env: Env, sale_id: u64) -> Result<i128, Error>;
    fn get_balance_of(env: Env, identity: Address) -> Result<i128, Error>;
    fn active_sale_for(env: Env, token_id: u64) -> Option<u64>;
    fn sale_count(env: Env) -> u64;
}
