use common::{
    escrow::types::{EscrowError as Error, Sale, PAYMENT_TOKEN, REGISTRY},
    property::interface::PropertyRegistryClient,
    storage::get_data,
};
use soroban_sdk::{token, Address, Env};

// Configured defaults, used when a sale is opened and for the ungated path.
pub fn configured_registry(env: &Env) -> Result<Address, Error> {
    get_data(env, &REGISTRY).ok_or(Error::NotInitialized)
}

pub fn configured_payment_token(env: &Env) -> Result<Address, Error> {
    get_data(env, &PAYMENT_TOKEN).ok_or(Error::NotInitialized)
}

// Clients for an open sale always come from the addresses pinned on it.
pub fn sale_registry_client<'a>(env: &Env, sale: &Sale) -> PropertyRegistryClient<'a> {
    PropertyRegistryClient::new(env, &sale.registry)
}

pub fn sale_payment_client<'a>(env: &Env, sale: &Sale) -> token::Client<'a> {
    token::Client::new(env, &sale.payment_token)
}

/// Current owner of `token_id` as reported by the registry, or `None` when
/// the registry cannot answer (unknown token, failing contract).
pub fn registry_owner(registry: &PropertyRegistryClient<'_>, token_id: u64) -> Option<Address> {
    match registry.try_owner_of(&token_id) {
        Ok(Ok(owner)) => Some(owner),
        _ => None,
    }
}

/// Whether the registry currently lets this contract move `token_id`.
pub fn holds_transfer_approval(env: &Env, registry: &PropertyRegistryClient<'_>, token_id: u64) -> bool {
    match registry.try_get_approved(&token_id) {
        Ok(Ok(Some(operator))) => operator == env.current_contract_address(),
        _ => false,
    }
}
