use common::escrow::types::{Escrow, EscrowDataKey as DataKey};
use soroban_sdk::{Address, Env, IntoVal, TryFromVal, Val, Vec};

const WEEK_OF_LEDGERS: u32 = 60 * 60 * 24 / 5 * 7;

pub fn extend_instance(env: &Env) {
    let max_ttl = env.storage().max_ttl();
    env.storage()
        .instance()
        .extend_ttl(max_ttl - WEEK_OF_LEDGERS, max_ttl);
}

pub fn extend_persistent<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    let max_ttl: u32 = env.storage().max_ttl();

    env.storage()
        .persistent()
        .extend_ttl::<K>(key, max_ttl - WEEK_OF_LEDGERS, max_ttl);
}

// INSTANCE STORAGE
pub fn store_data<K, V>(env: &Env, key: &K, val: &V)
where
    K: IntoVal<Env, Val>,
    V: IntoVal<Env, Val>,
{
    env.storage().instance().set(key, val);
    extend_instance(env);
}

pub fn get_data<K, V>(env: &Env, key: &K) -> Option<V>
where
    K: IntoVal<Env, Val>,
    V: TryFromVal<Env, Val>,
{
    env.storage().instance().get(key)
}

pub fn has_data<K>(env: &Env, key: &K) -> bool
where
    K: IntoVal<Env, Val>,
{
    env.storage().instance().has(key)
}

// ESCROW RECORDS
// Records are never removed. Reading one keeps it alive as well, so terminal
// escrows stay queryable as long as anyone looks at them.
pub fn write_escrow(env: &Env, escrow_id: u64, escrow: &Escrow) {
    let key = DataKey::Escrow(escrow_id);
    env.storage().persistent().set(&key, escrow);
    extend_persistent(env, &key);
}

pub fn read_escrow(env: &Env, escrow_id: u64) -> Option<Escrow> {
    let key = DataKey::Escrow(escrow_id);
    let escrow: Option<Escrow> = env.storage().persistent().get(&key);
    if escrow.is_some() {
        extend_persistent(env, &key);
    }
    escrow
}

pub fn has_escrow(env: &Env, escrow_id: u64) -> bool {
    env.storage().persistent().has(&DataKey::Escrow(escrow_id))
}

// TOTAL LOCKED
pub fn read_total_locked(env: &Env) -> i128 {
    get_data(env, &DataKey::TotalLocked).unwrap_or(0)
}

pub fn adjust_total_locked(env: &Env, delta: i128) {
    let locked: i128 = read_total_locked(env);
    store_data(env, &DataKey::TotalLocked, &(locked + delta));
}

// PARTY INDEX
// One entry per (party, position) so appending costs the same however many
// escrows a party is already in.
pub fn read_party_count(env: &Env, party: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::PartyEscrowCount(party.clone()))
        .unwrap_or(0)
}

pub fn push_party_escrow(env: &Env, party: &Address, escrow_id: u64) {
    let count: u32 = read_party_count(env, party);

    let entry_key = DataKey::PartyEscrow(party.clone(), count);
    env.storage().persistent().set(&entry_key, &escrow_id);
    extend_persistent(env, &entry_key);

    let count_key = DataKey::PartyEscrowCount(party.clone());
    env.storage().persistent().set(&count_key, &(count + 1));
    extend_persistent(env, &count_key);
}

pub fn read_party_escrows(env: &Env, party: &Address, start: u32, limit: u32) -> Vec<u64> {
    let count: u32 = read_party_count(env, party);
    let end: u32 = start.saturating_add(limit).min(count);

    let mut escrows: Vec<u64> = Vec::new(env);
    for position in start..end {
        if let Some(escrow_id) = env
            .storage()
            .persistent()
            .get::<_, u64>(&DataKey::PartyEscrow(party.clone(), position))
        {
            escrows.push_back(escrow_id);
        }
    }
    escrows
}
