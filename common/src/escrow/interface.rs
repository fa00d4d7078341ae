use soroban_sdk::{contractclient, Address, BytesN, Env, Vec};
use super::types::{EscrowError as Error, Escrow, EscrowStatus};

#[contractclient(name = "EscrowContractClient")]
pub trait EscrowContractTrait {
    fn initialize(env: Env, admin: Address, token: Address) -> Result<(), Error>;
    fn version() -> u32;
    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), Error>;
    fn token(env: Env) -> Result<Address, Error>;
    fn create(env: Env, buyer: Address, seller: Address, amount: i128) -> Result<u64, Error>;
    fn approve(env: Env, caller: Address, escrow_id: u64) -> Result<bool, Error>;
    fn cancel(env: Env, caller: Address, escrow_id: u64) -> Result<bool, Error>;
    fn get_escrow(env: Env, escrow_id: u64) -> Result<Escrow, Error>;
    fn get_status(env: Env, escrow_id: u64) -> Result<EscrowStatus, Error>;
    fn get_next_id(env: Env) -> u64;
    fn exists(env: Env, escrow_id: u64) -> bool;
    fn get_party_escrow_count(env: Env, party: Address) -> u32;
    fn get_party_escrows(env: Env, party: Address, start: u32, limit: u32) -> Vec<u64>;
    fn get_total_locked(env: Env) -> i128;
}
