use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

pub enum PropertyEvent {
    Initialized,
    Upgraded(u32),
    Mint(u64, Address),
    Approval(u64, Address, Address),
    ApprovalRevoked(u64, Address),
    Transfer(u64, Address, Address),
}

impl PropertyEvent {
    pub fn name(&self) -> &'static str {
        match self {
            PropertyEvent::Initialized => stringify!(Initialized),
            PropertyEvent::Upgraded(..) => stringify!(Upgraded),
            PropertyEvent::Mint(..) => stringify!(Mint),
            PropertyEvent::Approval(..) => stringify!(Approval),
            PropertyEvent::ApprovalRevoked(..) => stringify!(ApprovalRevoked),
            PropertyEvent::Transfer(..) => stringify!(Transfer),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(env);

        match self {
            PropertyEvent::Initialized => {}
            PropertyEvent::Upgraded(version) => {
                v.push_back(version.into_val(env));
            }
            PropertyEvent::Mint(token_id, owner) => {
                v.push_back(token_id.into_val(env));
                v.push_back(owner.into_val(env));
            }
            PropertyEvent::Approval(token_id, owner, operator) => {
                v.push_back(token_id.into_val(env));
                v.push_back(owner.into_val(env));
                v.push_back(operator.into_val(env));
            }
            PropertyEvent::ApprovalRevoked(token_id, owner) => {
                v.push_back(token_id.into_val(env));
                v.push_back(owner.into_val(env));
            }
            PropertyEvent::Transfer(token_id, from, to) => {
                v.push_back(token_id.into_val(env));
                v.push_back(from.into_val(env));
                v.push_back(to.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
