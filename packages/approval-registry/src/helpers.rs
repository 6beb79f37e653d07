use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Coin, CosmosMsg, QuerierWrapper, StdResult, Uint128, WasmMsg,
};

use crate::msg::ApprovalExecuteMsg;
use crate::query::{
    ActionCountResponse, ActionResponse, ApprovalQueryMsg, ApproverResponse,
    ConfirmationResponse, ThresholdResponse,
};

/// ApprovalRegistryContract is a wrapper around Addr that provides a lot of helpers
/// for working with approval multisig contracts.
#[cw_serde]
pub struct ApprovalRegistryContract(pub Addr);

impl ApprovalRegistryContract {
    pub fn new(addr: Addr) -> Self {
        ApprovalRegistryContract(addr)
    }

    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn encode_msg(&self, msg: ApprovalExecuteMsg, funds: Vec<Coin>) -> StdResult<CosmosMsg> {
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg: to_json_binary(&msg)?,
            funds,
        }
        .into())
    }

    pub fn submit<T: Into<String>>(
        &self,
        target: T,
        value: Uint128,
        payload: Binary,
    ) -> StdResult<CosmosMsg> {
        let msg = ApprovalExecuteMsg::Submit {
            target: target.into(),
            value,
            payload,
        };
        self.encode_msg(msg, vec![])
    }

    pub fn confirm(&self, action_id: u64) -> StdResult<CosmosMsg> {
        self.encode_msg(ApprovalExecuteMsg::Confirm { action_id }, vec![])
    }

    pub fn revoke(&self, action_id: u64) -> StdResult<CosmosMsg> {
        self.encode_msg(ApprovalExecuteMsg::Revoke { action_id }, vec![])
    }

    pub fn execute(&self, action_id: u64) -> StdResult<CosmosMsg> {
        self.encode_msg(ApprovalExecuteMsg::Execute { action_id }, vec![])
    }

    pub fn deposit(&self, funds: Vec<Coin>) -> StdResult<CosmosMsg> {
        self.encode_msg(ApprovalExecuteMsg::Deposit {}, funds)
    }

    pub fn threshold(&self, querier: &QuerierWrapper) -> StdResult<ThresholdResponse> {
        querier.query_wasm_smart(self.addr(), &ApprovalQueryMsg::Threshold {})
    }

    pub fn action_count(&self, querier: &QuerierWrapper) -> StdResult<u64> {
        let res: ActionCountResponse =
            querier.query_wasm_smart(self.addr(), &ApprovalQueryMsg::ActionCount {})?;
        Ok(res.count)
    }

    pub fn action(&self, querier: &QuerierWrapper, action_id: u64) -> StdResult<ActionResponse> {
        querier.query_wasm_smart(self.addr(), &ApprovalQueryMsg::Action { action_id })
    }

    pub fn is_approver<T: Into<String>>(
        &self,
        querier: &QuerierWrapper,
        address: T,
    ) -> StdResult<bool> {
        let query = ApprovalQueryMsg::Approver {
            address: address.into(),
        };
        let res: ApproverResponse = querier.query_wasm_smart(self.addr(), &query)?;
        Ok(res.is_approver)
    }

    pub fn is_confirmed<T: Into<String>>(
        &self,
        querier: &QuerierWrapper,
        action_id: u64,
        approver: T,
    ) -> StdResult<bool> {
        let query = ApprovalQueryMsg::Confirmation {
            action_id,
            approver: approver.into(),
        };
        let res: ConfirmationResponse = querier.query_wasm_smart(self.addr(), &query)?;
        Ok(res.confirmed)
    }
}
