/*!
Interface types for an approval multisig.

A registry holds a fixed set of approvers and a confirmation threshold.
Approvers submit actions (a target, a native value and an opaque payload),
then confirm or revoke their backing. Once an action has gathered at least
`threshold` confirmations anyone may execute it, exactly once.

This crate only carries the messages, query responses and a small helper for
calling a deployed registry. The reference implementation lives in the
`approval-multisig` contract.
*/

mod helpers;
mod msg;
mod query;

pub use crate::helpers::ApprovalRegistryContract;
pub use crate::msg::ApprovalExecuteMsg;
pub use crate::query::{
    ActionCountResponse, ActionListResponse, ActionResponse, ApprovalQueryMsg,
    ApproverListResponse, ApproverResponse, ConfirmationListResponse, ConfirmationResponse,
    Status, ThresholdResponse,
};
