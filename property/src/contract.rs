use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Symbol};

use crate::events::PropertyEvent;
use common::{
    property::{
        interface::PropertyRegistryInterface,
        types::{DataKey, Error, Property, ADMIN},
    },
    storage::{
        get_data, get_persistent, has_data, remove_persistent, store_data, store_persistent,
    },
};

const NAME: &str = "Tokenized Real Estate";
const SYMBOL: &str = "TRE";

#[contract]
pub struct PropertyRegistry;

#[contractimpl]
impl PropertyRegistryInterface for PropertyRegistry {
    fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        admin.require_auth();
        if has_data::<Symbol>(&env, &ADMIN) {
            return Err(Error::AlreadyInitialized);
        }
        store_data(&env, &ADMIN, &admin);
        store_data(&env, &DataKey::TokenCount, &0u64);
        PropertyEvent::Initialized.publish(&env);
        Ok(())
    }

    fn version() -> u32 {
        1
    }

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), Error> {
        require_admin(&env)?;
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        PropertyEvent::Upgraded(Self::version()).publish(&env);
        Ok(())
    }

    fn update_state(env: Env, state_key: Symbol, state_value: Address) -> Result<(), Error> {
        require_admin(&env)?;

        if !has_data::<Symbol>(&env, &state_key) {
            return Err(Error::StateNotAlreadySet);
        }

        store_data(&env, &state_key, &state_value);
        env.events()
            .publish(("state_updated", state_key), state_value);

        Ok(())
    }

    fn name(env: Env) -> String {
        String::from_str(&env, NAME)
    }

    fn symbol(env: Env) -> String {
        String::from_str(&env, SYMBOL)
    }

    // Token ids are handed out sequentially from zero.
    fn mint(env: Env, to: Address, token_uri: String) -> Result<u64, Error> {
        require_admin(&env)?;

        let token_id: u64 = get_data(&env, &DataKey::TokenCount).unwrap_or(0);
        let property: Property = Property {
            id: token_id,
            owner: to.clone(),
            token_uri,
        };
        store_persistent(&env, &DataKey::Token(token_id), &property);
        store_data(&env, &DataKey::TokenCount, &(token_id + 1));
        adjust_balance(&env, &to, 1);

        PropertyEvent::Mint(token_id, to).publish(&env);
        Ok(token_id)
    }

    fn owner_of(env: Env, token_id: u64) -> Result<Address, Error> {
        Ok(load_property(&env, token_id)?.owner)
    }

    fn balance_of(env: Env, owner: Address) -> u64 {
        get_persistent(&env, &DataKey::Balance(owner)).unwrap_or(0)
    }

    fn total_supply(env: Env) -> u64 {
        get_data(&env, &DataKey::TokenCount).unwrap_or(0)
    }

    fn exists(env: Env, token_id: u64) -> bool {
        env.storage().persistent().has(&DataKey::Token(token_id))
    }

    fn token_uri(env: Env, token_id: u64) -> Result<String, Error> {
        Ok(load_property(&env, token_id)?.token_uri)
    }

    // A token carries at most one approved operator; approving again replaces it.
    fn approve(env: Env, owner: Address, operator: Address, token_id: u64) -> Result<(), Error> {
        owner.require_auth();
        let property: Property = load_property(&env, token_id)?;
        if property.owner != owner {
            return Err(Error::NotOwner);
        }

        store_persistent(&env, &DataKey::Approval(token_id), &operator);
        PropertyEvent::Approval(token_id, owner, operator).publish(&env);
        Ok(())
    }

    fn revoke_approval(env: Env, owner: Address, token_id: u64) -> Result<(), Error> {
        owner.require_auth();
        let property: Property = load_property(&env, token_id)?;
        if property.owner != owner {
            return Err(Error::NotOwner);
        }

        remove_persistent(&env, &DataKey::Approval(token_id));
        PropertyEvent::ApprovalRevoked(token_id, owner).publish(&env);
        Ok(())
    }

    fn get_approved(env: Env, token_id: u64) -> Option<Address> {
        get_persistent(&env, &DataKey::Approval(token_id))
    }

    fn transfer(env: Env, from: Address, to: Address, token_id: u64) -> Result<(), Error> {
        from.require_auth();
        move_token(&env, from, to, token_id)
    }

    fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u64,
    ) -> Result<(), Error> {
        spender.require_auth();

        let approved: Option<Address> = get_persistent(&env, &DataKey::Approval(token_id));
        if approved != Some(spender) {
            return Err(Error::NotApproved);
        }

        move_token(&env, from, to, token_id)
    }
}

fn require_admin(env: &Env) -> Result<Address, Error> {
    let admin: Address = get_data(env, &ADMIN).ok_or(Error::NotInitialized)?;
    admin.require_auth();
    Ok(admin)
}

fn load_property(env: &Env, token_id: u64) -> Result<Property, Error> {
    get_persistent(env, &DataKey::Token(token_id)).ok_or(Error::TokenNotFound)
}

fn adjust_balance(env: &Env, owner: &Address, delta: i64) {
    let key = DataKey::Balance(owner.clone());
    let held: u64 = get_persistent(env, &key).unwrap_or(0);
    let updated: u64 = held.saturating_add_signed(delta);
    if updated == 0 {
        remove_persistent(env, &key);
    } else {
        store_persistent(env, &key, &updated);
    }
}

// Ownership change shared by both transfer paths. Any pending approval is
// cleared so the new owner starts without operators.
fn move_token(env: &Env, from: Address, to: Address, token_id: u64) -> Result<(), Error> {
    let mut property: Property = load_property(env, token_id)?;
    if property.owner != from {
        return Err(Error::NotOwner);
    }

    property.owner = to.clone();
    store_persistent(env, &DataKey::Token(token_id), &property);
    remove_persistent(env, &DataKey::Approval(token_id));
    adjust_balance(env, &from, -1);
    adjust_balance(env, &to, 1);

    PropertyEvent::Transfer(token_id, from, to).publish(env);
    Ok(())
}
