use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, Uint128};

#[cw_serde]
pub enum ApprovalExecuteMsg {
    /// Propose a new action. Only approvers may submit. Submitting does not
    /// count as a confirmation.
    Submit {
        target: String,
        value: Uint128,
        payload: Binary,
    },
    /// Back a pending action. Fails if the sender already confirmed it.
    Confirm { action_id: u64 },
    /// Withdraw a previous confirmation on a pending action.
    Revoke { action_id: u64 },
    /// Dispatch an action that reached the threshold. Open to any sender.
    Execute { action_id: u64 },
    /// Fund the registry. Accepts any coins.
    Deposit {},
}
