use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Empty, Order, StdResult, Storage, Uint128};
use cw_storage_plus::{Item, Map};

use approval_registry::Status;

#[cw_serde]
pub struct Config {
    pub threshold: u64,
    /// native denom moved by executed actions
    pub denom: String,
    /// approvers in the order they were configured
    pub approvers: Vec<Addr>,
}

#[cw_serde]
pub struct Action {
    pub target: Addr,
    pub value: Uint128,
    pub payload: Binary,
    pub executed: bool,
    /// number of approvers currently backing this action, kept equal to the
    /// number of CONFIRMATIONS entries under this action id
    pub confirmations: u64,
}

impl Action {
    pub fn new(target: Addr, value: Uint128, payload: Binary) -> Self {
        Action {
            target,
            value,
            payload,
            executed: false,
            confirmations: 0,
        }
    }

    pub fn has_quorum(&self, threshold: u64) -> bool {
        self.confirmations >= threshold
    }

    pub fn status(&self, threshold: u64) -> Status {
        if self.executed {
            Status::Executed
        } else if self.has_quorum(threshold) {
            Status::Executable
        } else {
            Status::Pending
        }
    }
}

pub const CONFIG: Item<Config> = Item::new("config");
// membership index for O(1) approver checks
pub const APPROVERS: Map<&Addr, Empty> = Map::new("approvers");
pub const ACTION_COUNT: Item<u64> = Item::new("action_count");
pub const ACTIONS: Map<u64, Action> = Map::new("actions");
// presence means the approver currently confirms the action
pub const CONFIRMATIONS: Map<(u64, &Addr), Empty> = Map::new("confirmations");

/// Returns the id for a new action and bumps the counter. Ids start at 0.
pub fn next_id(store: &mut dyn Storage) -> StdResult<u64> {
    let id = ACTION_COUNT.may_load(store)?.unwrap_or_default();
    ACTION_COUNT.save(store, &(id + 1))?;
    Ok(id)
}

pub fn is_approver(store: &dyn Storage, addr: &Addr) -> bool {
    APPROVERS.has(store, addr)
}

/// Counts ledger entries for an action. Must always match `Action::confirmations`.
pub fn ledger_confirmations(store: &dyn Storage, action_id: u64) -> u64 {
    CONFIRMATIONS
        .prefix(action_id)
        .keys_raw(store, None, None, Order::Ascending)
        .count() as u64
}

#[cfg(test)]
mod test {
    use super::*;

    use cosmwasm_std::testing::MockStorage;

    fn action() -> Action {
        Action::new(
            Addr::unchecked("target"),
            Uint128::new(5),
            Binary::default(),
        )
    }

    #[test]
    fn ids_are_sequential_from_zero() {
        let mut store = MockStorage::new();
        assert_eq!(0, next_id(&mut store).unwrap());
        assert_eq!(1, next_id(&mut store).unwrap());
        assert_eq!(2, next_id(&mut store).unwrap());
        assert_eq!(3, ACTION_COUNT.load(&store).unwrap());
    }

    #[test]
    fn status_follows_confirmations() {
        let mut act = action();
        assert_eq!(Status::Pending, act.status(2));
        assert!(!act.has_quorum(2));

        act.confirmations = 2;
        assert_eq!(Status::Executable, act.status(2));
        assert!(act.has_quorum(2));

        // more than needed is still executable
        act.confirmations = 3;
        assert_eq!(Status::Executable, act.status(2));

        act.executed = true;
        assert_eq!(Status::Executed, act.status(2));
    }

    #[test]
    fn ledger_counts_per_action() {
        let mut store = MockStorage::new();
        let alice = Addr::unchecked("alice");
        let bob = Addr::unchecked("bob");

        CONFIRMATIONS.save(&mut store, (0, &alice), &Empty {}).unwrap();
        CONFIRMATIONS.save(&mut store, (0, &bob), &Empty {}).unwrap();
        CONFIRMATIONS.save(&mut store, (1, &bob), &Empty {}).unwrap();

        assert_eq!(2, ledger_confirmations(&store, 0));
        assert_eq!(1, ledger_confirmations(&store, 1));
        assert_eq!(0, ledger_confirmations(&store, 2));

        CONFIRMATIONS.remove(&mut store, (0, &alice));
        assert_eq!(1, ledger_confirmations(&store, 0));
    }
}
