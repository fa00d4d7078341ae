use common::escrow::types::{EscrowError as Error, TOKEN};
use soroban_sdk::{log, token, Address, Env};

use crate::storage::get_data;

pub fn get_token(env: &Env) -> Result<Address, Error> {
    get_data(env, &TOKEN).ok_or(Error::NotInitialized)
}

/// Moves `amount` of the configured token. A rejected or panicking token call
/// surfaces as `TransferFailed` instead of aborting the invocation.
pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    let token_addr: Address = get_token(env)?;
    let token_client: token::Client<'_> = token::Client::new(env, &token_addr);

    match token_client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "token transfer of {} rejected", amount);
            Err(Error::TransferFailed)
        }
    }
}

pub fn custody_address(env: &Env) -> Address {
    env.current_contract_address()
}
