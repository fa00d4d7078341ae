use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

pub enum EscrowEvent {
    Initialized(Address),
    Upgraded(u32),
    Created(u64, Address, Address, i128, u32),
    Approved(u64, Address, bool, bool),
    Completed(u64, Address, Address, i128, u32),
    Cancelled(u64, Address, Address, Address, i128, u32),
}

impl EscrowEvent {
    pub fn name(&self) -> &'static str {
        match self {
            EscrowEvent::Initialized(..) => stringify!(Initialized),
            EscrowEvent::Upgraded(..) => stringify!(Upgraded),
            EscrowEvent::Created(..) => stringify!(Created),
            EscrowEvent::Approved(..) => stringify!(Approved),
            EscrowEvent::Completed(..) => stringify!(Completed),
            EscrowEvent::Cancelled(..) => stringify!(Cancelled),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(&env);

        match self {
            EscrowEvent::Initialized(token) => {
                v.push_back(token.into_val(env));
            }
            EscrowEvent::Upgraded(version) => {
                v.push_back(version.into_val(env));
            }
            EscrowEvent::Created(escrow_id, buyer, seller, amount, height) => {
                v.push_back(escrow_id.into_val(env));
                v.push_back(buyer.into_val(env));
                v.push_back(seller.into_val(env));
                v.push_back(amount.into_val(env));
                v.push_back(height.into_val(env));
            }
            EscrowEvent::Approved(escrow_id, approver, buyer_approved, seller_approved) => {
                v.push_back(escrow_id.into_val(env));
                v.push_back(approver.into_val(env));
                v.push_back(buyer_approved.into_val(env));
                v.push_back(seller_approved.into_val(env));
            }
            EscrowEvent::Completed(escrow_id, buyer, seller, amount, height) => {
                v.push_back(escrow_id.into_val(env));
                v.push_back(buyer.into_val(env));
                v.push_back(seller.into_val(env));
                v.push_back(amount.into_val(env));
                v.push_back(height.into_val(env));
            }
            EscrowEvent::Cancelled(escrow_id, cancelled_by, buyer, seller, amount, height) => {
                v.push_back(escrow_id.into_val(env));
                v.push_back(cancelled_by.into_val(env));
                v.push_back(buyer.into_val(env));
                v.push_back(seller.into_val(env));
                v.push_back(amount.into_val(env));
                v.push_back(height.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
