/*!
A multisig with a fixed set of approvers created upon instantiation.

Any approver may submit an action: a target address, an amount of the native
denom and an opaque payload. Approvers then confirm (or revoke) their backing,
one confirmation each. As soon as the number of confirmations reaches the
threshold, anybody may execute the action. Execution marks the action as done
before dispatching it, and a failed dispatch aborts the whole transaction, so
an action takes effect at most once.

If the payload is empty the value is sent with a bank transfer, otherwise the
payload is delivered to the target as a contract call carrying the value.
*/

pub mod contract;
mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
