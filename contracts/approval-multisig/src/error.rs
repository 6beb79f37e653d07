use cosmwasm_std::StdError;
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("No approvers")]
    NoApprovers {},

    #[error("Threshold cannot be zero")]
    ZeroThreshold {},

    #[error("Threshold {threshold} cannot be reached by {approvers} approvers")]
    UnreachableThreshold { threshold: u64, approvers: u64 },

    #[error("Denom cannot be empty")]
    EmptyDenom {},

    #[error("Invalid approver address: {addr}")]
    InvalidApprover { addr: String },

    #[error("Approver listed more than once: {addr}")]
    DuplicateApprover { addr: String },

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Action {action_id} does not exist")]
    ActionNotFound { action_id: u64 },

    #[error("Action {action_id} was already executed")]
    AlreadyExecuted { action_id: u64 },

    #[error("Action {action_id} is already confirmed by sender")]
    AlreadyConfirmed { action_id: u64 },

    #[error("Action {action_id} is not confirmed by sender")]
    NotConfirmed { action_id: u64 },

    #[error("Action {action_id} has {confirmations} of {required} required confirmations")]
    InsufficientConfirmations {
        action_id: u64,
        confirmations: u64,
        required: u64,
    },

    #[error("Execution of action {action_id} failed: {reason}")]
    ExecutionFailed { action_id: u64, reason: String },
}

impl ContractError {
    /// true for errors raised while validating the instantiate message
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            ContractError::NoApprovers {}
                | ContractError::ZeroThreshold {}
                | ContractError::UnreachableThreshold { .. }
                | ContractError::EmptyDenom {}
                | ContractError::InvalidApprover { .. }
                | ContractError::DuplicateApprover { .. }
        )
    }
}
