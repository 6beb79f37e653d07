use cosmwasm_schema::cw_serde;

pub use approval_registry::{ApprovalExecuteMsg as ExecuteMsg, ApprovalQueryMsg as QueryMsg};

#[cw_serde]
pub struct InstantiateMsg {
    /// Addresses allowed to submit, confirm and revoke. Fixed for the
    /// lifetime of the contract.
    pub approvers: Vec<String>,
    /// Confirmations needed before an action can be executed
    pub threshold: u64,
    /// Native denom moved when an action carries a value
    pub denom: String,
}
