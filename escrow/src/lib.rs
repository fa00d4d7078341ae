#![no_std]

mod custody;
mod events;
mod storage;

use common::escrow::{
    interface::EscrowContractTrait,
    types::{
        Escrow, EscrowDataKey as DataKey, EscrowError as Error, EscrowStatus, ADMIN,
        MAX_PAGE_SIZE, TOKEN,
    },
};
use custody::{custody_address, transfer};
use events::EscrowEvent;
use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, Vec};
use storage::{
    adjust_total_locked, get_data, has_data, has_escrow, push_party_escrow, read_escrow,
    read_party_count, read_party_escrows, read_total_locked, store_data, write_escrow,
};

#[contract]
pub struct EscrowContract;

#[contractimpl]
impl EscrowContractTrait for EscrowContract {
    // Initialize escrow
    fn initialize(env: Env, admin: Address, token: Address) -> Result<(), Error> {
        admin.require_auth();
        if has_data(&env, &ADMIN) {
            return Err(Error::AlreadyInitialized);
        }

        store_data(&env, &ADMIN, &admin);
        store_data(&env, &TOKEN, &token);
        store_data(&env, &DataKey::NextId, &0u64);
        store_data(&env, &DataKey::TotalLocked, &0i128);
        EscrowEvent::Initialized(token).publish(&env);
        Ok(())
    }

    fn version() -> u32 {
        1
    }

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), Error> {
        let admin: Address = get_data(&env, &ADMIN).ok_or(Error::NotInitialized)?;
        admin.require_auth();
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        EscrowEvent::Upgraded(Self::version()).publish(&env);
        Ok(())
    }

    fn token(env: Env) -> Result<Address, Error> {
        custody::get_token(&env)
    }

    // Lock `amount` from the buyer until both parties approve or one of them cancels.
    fn create(env: Env, buyer: Address, seller: Address, amount: i128) -> Result<u64, Error> {
        buyer.require_auth();

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        if buyer == seller {
            return Err(Error::SelfEscrow);
        }

        let escrow_id: u64 = get_data(&env, &DataKey::NextId).ok_or(Error::NotInitialized)?;

        // Nothing has been written yet, so a failed deposit leaves the allocator untouched.
        transfer(&env, &buyer, &custody_address(&env), amount)?;

        let height: u32 = env.ledger().sequence();
        let escrow: Escrow = Escrow {
            buyer: buyer.clone(),
            seller: seller.clone(),
            amount,
            buyer_approved: false,
            seller_approved: false,
            status: EscrowStatus::Pending,
            created_at: height,
        };
        write_escrow(&env, escrow_id, &escrow);
        store_data(&env, &DataKey::NextId, &(escrow_id + 1));
        adjust_total_locked(&env, amount);
        push_party_escrow(&env, &buyer, escrow_id);
        push_party_escrow(&env, &seller, escrow_id);

        EscrowEvent::Created(escrow_id, buyer, seller, amount, height).publish(&env);

        Ok(escrow_id)
    }

    fn approve(env: Env, caller: Address, escrow_id: u64) -> Result<bool, Error> {
        caller.require_auth();
        let mut escrow: Escrow = Self::get_escrow(env.clone(), escrow_id)?;

        let is_buyer: bool = caller == escrow.buyer;
        if !is_buyer && caller != escrow.seller {
            return Err(Error::NotAuthorized);
        }

        if escrow.status != EscrowStatus::Pending {
            return Err(Error::InvalidStatus);
        }

        if is_buyer {
            if escrow.buyer_approved {
                return Err(Error::AlreadyApproved);
            }
            escrow.buyer_approved = true;
        } else {
            if escrow.seller_approved {
                return Err(Error::AlreadyApproved);
            }
            escrow.seller_approved = true;
        }

        if !(escrow.buyer_approved && escrow.seller_approved) {
            write_escrow(&env, escrow_id, &escrow);
            EscrowEvent::Approved(
                escrow_id,
                caller,
                escrow.buyer_approved,
                escrow.seller_approved,
            )
            .publish(&env);
            return Ok(true);
        }

        // The terminal status must be stored before any value leaves custody,
        // so a re-entrant approve or cancel sees Completed and is rejected.
        escrow.status = EscrowStatus::Completed;
        write_escrow(&env, escrow_id, &escrow);
        adjust_total_locked(&env, -escrow.amount);
        log!(&env, "escrow {} completed, releasing {}", escrow_id, escrow.amount);

        transfer(&env, &custody_address(&env), &escrow.seller, escrow.amount)?;

        EscrowEvent::Completed(
            escrow_id,
            escrow.buyer,
            escrow.seller,
            escrow.amount,
            env.ledger().sequence(),
        )
        .publish(&env);

        Ok(true)
    }

    // Either party may withdraw consent while the escrow is pending; the buyer is refunded.
    fn cancel(env: Env, caller: Address, escrow_id: u64) -> Result<bool, Error> {
        caller.require_auth();
        let mut escrow: Escrow = Self::get_escrow(env.clone(), escrow_id)?;

        if caller != escrow.buyer && caller != escrow.seller {
            return Err(Error::NotAuthorized);
        }

        if escrow.status != EscrowStatus::Pending {
            return Err(Error::InvalidStatus);
        }

        // Same ordering as completion: terminal status first, refund second.
        escrow.status = EscrowStatus::Cancelled;
        write_escrow(&env, escrow_id, &escrow);
        adjust_total_locked(&env, -escrow.amount);
        log!(&env, "escrow {} cancelled, refunding {}", escrow_id, escrow.amount);

        transfer(&env, &custody_address(&env), &escrow.buyer, escrow.amount)?;

        EscrowEvent::Cancelled(
            escrow_id,
            caller,
            escrow.buyer,
            escrow.seller,
            escrow.amount,
            env.ledger().sequence(),
        )
        .publish(&env);

        Ok(true)
    }

    fn get_escrow(env: Env, escrow_id: u64) -> Result<Escrow, Error> {
        read_escrow(&env, escrow_id).ok_or(Error::NotFound)
    }

    // Get the current status of the escrow
    fn get_status(env: Env, escrow_id: u64) -> Result<EscrowStatus, Error> {
        let escrow: Escrow = Self::get_escrow(env, escrow_id)?;
        Ok(escrow.status)
    }

    fn get_next_id(env: Env) -> u64 {
        get_data(&env, &DataKey::NextId).unwrap_or(0)
    }

    fn exists(env: Env, escrow_id: u64) -> bool {
        has_escrow(&env, escrow_id)
    }

    fn get_party_escrow_count(env: Env, party: Address) -> u32 {
        read_party_count(&env, &party)
    }

    // Page through the escrows a party is in, oldest first.
    fn get_party_escrows(env: Env, party: Address, start: u32, limit: u32) -> Vec<u64> {
        read_party_escrows(&env, &party, start, limit.min(MAX_PAGE_SIZE))
    }

    fn get_total_locked(env: Env) -> i128 {
        read_total_locked(&env)
    }
}
