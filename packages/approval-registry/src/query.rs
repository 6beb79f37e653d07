use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

#[cw_serde]
#[derive(QueryResponses)]
pub enum ApprovalQueryMsg {
    #[returns(ThresholdResponse)]
    Threshold {},
    /// All approvers, in the order they were configured
    #[returns(ApproverListResponse)]
    ListApprovers {},
    #[returns(ApproverResponse)]
    Approver { address: String },
    #[returns(ActionCountResponse)]
    ActionCount {},
    #[returns(ActionResponse)]
    Action { action_id: u64 },
    #[returns(ActionListResponse)]
    ListActions {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(ActionListResponse)]
    ReverseActions {
        start_before: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(ConfirmationResponse)]
    Confirmation { action_id: u64, approver: String },
    /// Approvers currently backing the action
    #[returns(ConfirmationListResponse)]
    ListConfirmations {
        action_id: u64,
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
#[derive(Copy)]
pub enum Status {
    /// Still collecting confirmations
    Pending,
    /// Reached the threshold, waiting for someone to execute it
    Executable,
    /// Dispatched. Terminal.
    Executed,
}

#[cw_serde]
pub struct ThresholdResponse {
    pub threshold: u64,
    pub total_approvers: u64,
}

#[cw_serde]
pub struct ApproverListResponse {
    pub approvers: Vec<String>,
}

#[cw_serde]
pub struct ApproverResponse {
    pub address: String,
    pub is_approver: bool,
}

#[cw_serde]
pub struct ActionCountResponse {
    pub count: u64,
}

#[cw_serde]
pub struct ActionResponse {
    pub id: u64,
    pub target: Addr,
    pub value: Uint128,
    pub denom: String,
    pub payload: Binary,
    pub executed: bool,
    pub confirmations: u64,
    pub status: Status,
}

#[cw_serde]
pub struct ActionListResponse {
    pub actions: Vec<ActionResponse>,
}

#[cw_serde]
pub struct ConfirmationResponse {
    pub confirmed: bool,
}

#[cw_serde]
pub struct ConfirmationListResponse {
    pub approvers: Vec<String>,
}
