#![no_std]

mod clients;
mod events;
mod test;

use clients::{
    configured_payment_token, configured_registry, holds_transfer_approval, registry_owner,
    sale_payment_client, sale_registry_client,
};
use common::{
    escrow::{
        interface::EscrowContractTrait,
        types::{
            EscrowDataKey as DataKey, EscrowError as Error, InspectionStatus, Party, Sale,
            SaleStatus, ADMIN, PAYMENT_TOKEN, REGISTRY,
        },
    },
    property::interface::PropertyRegistryClient,
    storage::{get_data, get_persistent, has_data, remove_persistent, store_data, store_persistent},
};
use events::EscrowEvent;
use soroban_sdk::{contract, contractimpl, log, token, Address, BytesN, Env, Symbol};

#[contract]
pub struct EscrowContract;

#[contractimpl]
impl EscrowContractTrait for EscrowContract {
    fn initialize(
        env: Env,
        admin: Address,
        registry: Address,
        payment_token: Address,
    ) -> Result<(), Error> {
        admin.require_auth();
        if has_data::<Symbol>(&env, &ADMIN) {
            return Err(Error::AlreadyInitialized);
        }

        store_data(&env, &ADMIN, &admin);
        store_data(&env, &REGISTRY, &registry);
        store_data(&env, &PAYMENT_TOKEN, &payment_token);
        store_data(&env, &DataKey::SaleCount, &0u64);
        EscrowEvent::Initialized.publish(&env);
        Ok(())
    }

    fn version() -> u32 {
        1
    }

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), Error> {
        require_admin(&env)?;
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        EscrowEvent::Upgraded(Self::version()).publish(&env);
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

    // Bind a property token and its parties to a new sale.
    // The seller must own the token when the sale is opened; the transfer
    // approval itself is only required at settlement time.
    fn create_sale(
        env: Env,
        token_id: u64,
        seller: Address,
        buyer: Address,
        lender: Address,
        verifier: Address,
        purchase_amount: i128,
        down_payment_amount: i128,
    ) -> Result<u64, Error> {
        require_admin(&env)?;

        if purchase_amount < 0 || down_payment_amount < 0 || down_payment_amount > purchase_amount
        {
            return Err(Error::InvalidTermConfiguration);
        }

        let parties: [&Address; 4] = [&seller, &buyer, &lender, &verifier];
        for (i, party) in parties.iter().enumerate() {
            if parties[i + 1..].contains(party) {
                return Err(Error::InvalidParty);
            }
        }

        let registry_ca: Address = configured_registry(&env)?;
        let payment_token: Address = configured_payment_token(&env)?;
        let binding = DataKey::ActiveSale(registry_ca.clone(), token_id);
        if get_persistent::<_, u64>(&env, &binding).is_some() {
            return Err(Error::PropertyAlreadyInEscrow);
        }

        let registry: PropertyRegistryClient<'_> = PropertyRegistryClient::new(&env, &registry_ca);
        if registry_owner(&registry, token_id).as_ref() != Some(&seller) {
            return Err(Error::PropertyNotOwnedBySeller);
        }

        let sale_count: u64 = get_data(&env, &DataKey::SaleCount).unwrap_or(0);
        let sale_id: u64 = sale_count + 1;

        let sale: Sale = Sale {
            id: sale_id,
            registry: registry_ca,
            token_id,
            payment_token,
            seller: seller.clone(),
            buyer: buyer.clone(),
            lender,
            verifier,
            purchase_amount,
            down_payment_amount,
            held_balance: 0,
            buyer_deposited: 0,
            lender_deposited: 0,
            inspection: InspectionStatus::Pending,
            buyer_approved: false,
            seller_approved: false,
            lender_approved: false,
            status: SaleStatus::Open,
        };

        store_persistent(&env, &DataKey::Sale(sale_id), &sale);
        store_persistent(&env, &binding, &sale_id);
        store_data(&env, &DataKey::SaleCount, &sale_id);

        EscrowEvent::SaleCreated(sale_id, token_id, seller, buyer).publish(&env);
        Ok(sale_id)
    }

    fn deposit_down_payment(
        env: Env,
        sale_id: u64,
        buyer: Address,
        amount: i128,
    ) -> Result<i128, Error> {
        buyer.require_auth();
        let mut sale: Sale = load_open_sale(&env, sale_id)?;
        if buyer != sale.buyer {
            return Err(Error::Unauthorized);
        }

        accept_deposit(&env, &mut sale, Party::Buyer, amount)
    }

    fn deposit_remaining_amount(
        env: Env,
        sale_id: u64,
        lender: Address,
        amount: i128,
    ) -> Result<i128, Error> {
        lender.require_auth();
        let mut sale: Sale = load_open_sale(&env, sale_id)?;
        if lender != sale.lender {
            return Err(Error::Unauthorized);
        }

        accept_deposit(&env, &mut sale, Party::Lender, amount)
    }

    // Last write wins: a verifier may revise an earlier outcome while the
    // sale is still open.
    fn update_inspection_status(
        env: Env,
        sale_id: u64,
        verifier: Address,
        status: InspectionStatus,
    ) -> Result<(), Error> {
        verifier.require_auth();
        let mut sale: Sale = load_open_sale(&env, sale_id)?;
        if verifier != sale.verifier {
            return Err(Error::Unauthorized);
        }
        if status == InspectionStatus::Pending {
            return Err(Error::InvalidInspectionStatus);
        }

        sale.inspection = status;
        store_persistent(&env, &DataKey::Sale(sale_id), &sale);

        EscrowEvent::InspectionUpdated(sale_id, status).publish(&env);
        Ok(())
    }

    fn provide_approval(
        env: Env,
        sale_id: u64,
        party: Address,
        decision: bool,
    ) -> Result<(), Error> {
        party.require_auth();
        let mut sale: Sale = load_open_sale(&env, sale_id)?;
        let role: Party = sale.party_of(&party).ok_or(Error::Unauthorized)?;

        match role {
            Party::Buyer => sale.buyer_approved = decision,
            Party::Seller => sale.seller_approved = decision,
            Party::Lender => sale.lender_approved = decision,
        }
        store_persistent(&env, &DataKey::Sale(sale_id), &sale);

        EscrowEvent::ApprovalRecorded(sale_id, role, decision).publish(&env);
        Ok(())
    }

    fn check_settlement(env: Env, sale_id: u64) -> Result<(), Error> {
        let sale: Sale = load_sale(&env, sale_id)?;
        let registry: PropertyRegistryClient<'_> = sale_registry_client(&env, &sale);
        ensure_settleable(&env, &sale, &registry)
    }

    // Settlement runs as check -> registry transfer -> payout -> local commit.
    // Nothing is written locally until the registry has moved the token, so a
    // rejected transfer leaves the sale and its funds exactly as they were.
    fn transfer_real_estate_property(env: Env, sale_id: u64) -> Result<i128, Error> {
        let mut sale: Sale = load_sale(&env, sale_id)?;
        let registry: PropertyRegistryClient<'_> = sale_registry_client(&env, &sale);
        let payment: token::Client<'_> = sale_payment_client(&env, &sale);

        if let Err(err) = ensure_settleable(&env, &sale, &registry) {
            log!(&env, "settlement of sale {} blocked: {}", sale_id, err as u32);
            return Err(err);
        }

        let escrow: Address = env.current_contract_address();
        match registry.try_transfer_from(&escrow, &sale.seller, &sale.buyer, &sale.token_id) {
            Ok(Ok(())) => {}
            _ => {
                log!(&env, "registry refused transfer of token {}", sale.token_id);
                return Err(Error::RegistryTransferRejected);
            }
        }

        let payout: i128 = sale.held_balance;
        if payout > 0 {
            payment.transfer(&escrow, &sale.seller, &payout);
        }

        sale.held_balance = 0;
        sale.status = SaleStatus::Settled;
        store_persistent(&env, &DataKey::Sale(sale_id), &sale);
        remove_persistent(&env, &DataKey::ActiveSale(sale.registry.clone(), sale.token_id));

        EscrowEvent::Settled(sale_id, sale.token_id, sale.seller, sale.buyer, payout).publish(&env);
        Ok(payout)
    }

    // Each depositor gets back what it paid in. Open to the admin and to the
    // three transacting parties; the verifier only records inspections.
    fn cancel_and_refund(env: Env, sale_id: u64, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        let mut sale: Sale = load_open_sale(&env, sale_id)?;
        let admin: Address = get_data(&env, &ADMIN).ok_or(Error::NotInitialized)?;
        if caller != admin && sale.party_of(&caller).is_none() {
            return Err(Error::Unauthorized);
        }

        let payment: token::Client<'_> = sale_payment_client(&env, &sale);
        let escrow: Address = env.current_contract_address();
        let to_buyer: i128 = sale.buyer_deposited;
        let to_lender: i128 = sale.lender_deposited;
        if to_buyer > 0 {
            payment.transfer(&escrow, &sale.buyer, &to_buyer);
        }
        if to_lender > 0 {
            payment.transfer(&escrow, &sale.lender, &to_lender);
        }

        sale.held_balance = 0;
        sale.buyer_deposited = 0;
        sale.lender_deposited = 0;
        sale.status = SaleStatus::Cancelled;
        store_persistent(&env, &DataKey::Sale(sale_id), &sale);
        remove_persistent(&env, &DataKey::ActiveSale(sale.registry.clone(), sale.token_id));

        EscrowEvent::Refunded(sale_id, to_buyer, to_lender).publish(&env);
        Ok(())
    }

    // Ungated hand-over driven by the admin. No funds move and no sale is
    // involved, but a token bound to an open sale cannot be moved this way.
    fn transfer_without_escrow(
        env: Env,
        token_id: u64,
        seller: Address,
        buyer: Address,
    ) -> Result<(), Error> {
        require_admin(&env)?;

        let registry_ca: Address = configured_registry(&env)?;
        if get_persistent::<_, u64>(&env, &DataKey::ActiveSale(registry_ca.clone(), token_id))
            .is_some()
        {
            return Err(Error::PropertyAlreadyInEscrow);
        }

        let registry: PropertyRegistryClient<'_> = PropertyRegistryClient::new(&env, &registry_ca);
        if registry_owner(&registry, token_id).as_ref() != Some(&seller) {
            return Err(Error::PropertyNotOwnedBySeller);
        }
        if !holds_transfer_approval(&env, &registry, token_id) {
            return Err(Error::TransferNotApproved);
        }

        let escrow: Address = env.current_contract_address();
        match registry.try_transfer_from(&escrow, &seller, &buyer, &token_id) {
            Ok(Ok(())) => {}
            _ => {
                log!(&env, "registry refused transfer of token {}", token_id);
                return Err(Error::RegistryTransferRejected);
            }
        }

        EscrowEvent::DirectTransfer(token_id, seller, buyer).publish(&env);
        Ok(())
    }

    fn get_sale(env: Env, sale_id: u64) -> Result<Sale, Error> {
        load_sale(&env, sale_id)
    }

    fn status(env: Env, sale_id: u64) -> Result<SaleStatus, Error> {
        Ok(load_sale(&env, sale_id)?.status)
    }

    fn inspection_status(env: Env, sale_id: u64) -> Result<InspectionStatus, Error> {
        Ok(load_sale(&env, sale_id)?.inspection)
    }

    fn approval_of(env: Env, sale_id: u64, party: Party) -> Result<bool, Error> {
        Ok(load_sale(&env, sale_id)?.approval(party))
    }

    fn get_balance(env: Env, sale_id: u64) -> Result<i128, Error> {
        Ok(load_sale(&env, sale_id)?.held_balance)
    }

    fn left_payment_amount(env: Env, sale_id: u64) -> Result<i128, Error> {
        Ok(load_sale(&env, sale_id)?.left_payment_amount())
    }

    // Balance in the payment token, held outside this contract.
    fn get_balance_of(env: Env, identity: Address) -> Result<i128, Error> {
        let payment_token: Address = configured_payment_token(&env)?;
        Ok(token::Client::new(&env, &payment_token).balance(&identity))
    }

    // Looks the token up in the currently configured registry.
    fn active_sale_for(env: Env, token_id: u64) -> Option<u64> {
        let registry_ca: Address = get_data(&env, &REGISTRY)?;
        get_persistent(&env, &DataKey::ActiveSale(registry_ca, token_id))
    }

    fn sale_count(env: Env) -> u64 {
        get_data(&env, &DataKey::SaleCount).unwrap_or(0)
    }
}

fn require_admin(env: &Env) -> Result<Address, Error> {
    let admin: Address = get_data(env, &ADMIN).ok_or(Error::NotInitialized)?;
    admin.require_auth();
    Ok(admin)
}

fn load_sale(env: &Env, sale_id: u64) -> Result<Sale, Error> {
    get_persistent(env, &DataKey::Sale(sale_id)).ok_or(Error::SaleNotFound)
}

fn load_open_sale(env: &Env, sale_id: u64) -> Result<Sale, Error> {
    let sale: Sale = load_sale(env, sale_id)?;
    match sale.status {
        SaleStatus::Open => Ok(sale),
        SaleStatus::Settled => Err(Error::AlreadySettled),
        SaleStatus::Cancelled => Err(Error::SaleCancelled),
    }
}

// Deposits are fungible: both payers feed the same held balance. The
// per-payer totals exist only so a cancellation can refund each of them.
fn accept_deposit(env: &Env, sale: &mut Sale, payer: Party, amount: i128) -> Result<i128, Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    let held_balance: i128 = sale
        .held_balance
        .checked_add(amount)
        .ok_or(Error::InvalidAmount)?;

    let depositor: Address = match payer {
        Party::Buyer => sale.buyer.clone(),
        Party::Lender => sale.lender.clone(),
        Party::Seller => return Err(Error::Unauthorized),
    };

    if amount > 0 {
        let payment: token::Client<'_> = sale_payment_client(env, sale);
        match payment.try_transfer(&depositor, &env.current_contract_address(), &amount) {
            Ok(Ok(())) => {}
            _ => {
                log!(env, "payment transfer of {} failed for sale {}", amount, sale.id);
                return Err(Error::PaymentTransferFailed);
            }
        }
    }

    sale.held_balance = held_balance;
    match payer {
        Party::Buyer => sale.buyer_deposited += amount,
        Party::Lender => sale.lender_deposited += amount,
        Party::Seller => {}
    }
    store_persistent(env, &DataKey::Sale(sale.id), &*sale);

    EscrowEvent::FundsDeposited(sale.id, depositor, amount, held_balance).publish(env);
    Ok(held_balance)
}

// Settlement preconditions, checked in a fixed order so the first unmet
// condition is the one reported.
fn ensure_settleable(
    env: &Env,
    sale: &Sale,
    registry: &PropertyRegistryClient<'_>,
) -> Result<(), Error> {
    match sale.status {
        SaleStatus::Open => {}
        SaleStatus::Settled => return Err(Error::AlreadySettled),
        SaleStatus::Cancelled => return Err(Error::SaleCancelled),
    }
    if sale.inspection != InspectionStatus::Passed {
        return Err(Error::InspectionNotPassed);
    }
    if !sale.buyer_approved {
        return Err(Error::BuyerApprovalMissing);
    }
    if !sale.seller_approved {
        return Err(Error::SellerApprovalMissing);
    }
    if !sale.lender_approved {
        return Err(Error::LenderApprovalMissing);
    }
    if sale.held_balance < sale.purchase_amount {
        return Err(Error::InsufficientFunds);
    }
    if registry_owner(registry, sale.token_id).as_ref() != Some(&sale.seller)
        || !holds_transfer_approval(env, registry, sale.token_id)
    {
        return Err(Error::TransferNotApproved);
    }
    Ok(())
}
