use soroban_sdk::{contractclient, Address, BytesN, Env, String, Symbol};
use super::types::Error;

#[contractclient(name = "PropertyRegistryClient")]
pub trait PropertyRegistryInterface {
    fn initialize(env: Env, admin: Address) -> Result<(), Error>;
    fn version() -> u32;
    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), Error>;
    fn update_state(env: Env, state_key: Symbol, state_value: Address) -> Result<(), Error>;
    fn name(env: Env) -> String;
    fn symbol(env: Env) -> String;
    fn mint(env: Env, to: Address, token_uri: String) -> Result<u64, Error>;
    fn owner_of(env: Env, token_id: u64) -> Result<Address, Error>;
    fn balance_of(env: Env, owner: Address) -> u64;
    fn total_supply(env: Env) -> u64;
    fn exists(env: Env, token_id: u64) -> bool;
    fn token_uri(env: Env, token_id: u64) -> Result<String, Error>;
    fn approve(env: Env, owner: Address, operator: Address, token_id: u64) -> Result<(), Error>;
    fn revoke_approval(env: Env, owner: Address, token_id: u64) -> Result<(), Error>;
    fn get_approved(env: Env, token_id: u64) -> Option<Address>;
    fn transfer(env: Env, from: Address, to: Address, token_id: u64) -> Result<(), Error>;
    fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u64,
    ) -> Result<(), Error>;
}
