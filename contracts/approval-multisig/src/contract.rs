#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    coins, to_json_binary, Addr, BankMsg, Binary, Coin, CosmosMsg, Deps, DepsMut, Empty, Env,
    MessageInfo, Order, Reply, Response, StdResult, Storage, SubMsg, SubMsgResult, Uint128,
    WasmMsg,
};

use approval_registry::{
    ActionCountResponse, ActionListResponse, ActionResponse, ApproverListResponse,
    ApproverResponse, ConfirmationListResponse, ConfirmationResponse, ThresholdResponse,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;
use cw_utils::{maybe_addr, nonpayable};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{
    is_approver, next_id, Action, Config, ACTIONS, ACTION_COUNT, APPROVERS, CONFIG, CONFIRMATIONS,
};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:approval-multisig";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    if msg.approvers.is_empty() {
        return Err(ContractError::NoApprovers {});
    }
    if msg.threshold == 0 {
        return Err(ContractError::ZeroThreshold {});
    }
    let total = msg.approvers.len() as u64;
    if msg.threshold > total {
        return Err(ContractError::UnreachableThreshold {
            threshold: msg.threshold,
            approvers: total,
        });
    }
    if msg.denom.is_empty() {
        return Err(ContractError::EmptyDenom {});
    }

    // validate every approver before the first write
    let mut approvers: Vec<Addr> = Vec::with_capacity(msg.approvers.len());
    for addr in msg.approvers {
        let approver = deps
            .api
            .addr_validate(&addr)
            .map_err(|_| ContractError::InvalidApprover { addr: addr.clone() })?;
        if approvers.contains(&approver) {
            return Err(ContractError::DuplicateApprover { addr });
        }
        approvers.push(approver);
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    for approver in approvers.iter() {
        APPROVERS.save(deps.storage, approver, &Empty {})?;
    }
    ACTION_COUNT.save(deps.storage, &0)?;
    let cfg = Config {
        threshold: msg.threshold,
        denom: msg.denom,
        approvers,
    };
    CONFIG.save(deps.storage, &cfg)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("sender", info.sender)
        .add_attribute("threshold", cfg.threshold.to_string())
        .add_attribute("approvers", total.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Submit {
            target,
            value,
            payload,
        } => execute_submit(deps, env, info, target, value, payload),
        ExecuteMsg::Confirm { action_id } => execute_confirm(deps, env, info, action_id),
        ExecuteMsg::Revoke { action_id } => execute_revoke(deps, env, info, action_id),
        ExecuteMsg::Execute { action_id } => execute_execute(deps, env, info, action_id),
        ExecuteMsg::Deposit {} => execute_deposit(deps, env, info),
    }
}

pub fn execute_submit(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    target: String,
    value: Uint128,
    payload: Binary,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    // only approvers can submit, and submitting is not a confirmation
    assert_approver(deps.storage, &info.sender)?;
    let target = deps.api.addr_validate(&target)?;

    let id = next_id(deps.storage)?;
    let action = Action::new(target, value, payload);
    ACTIONS.save(deps.storage, id, &action)?;

    Ok(Response::new()
        .add_attribute("action", "submit")
        .add_attribute("sender", info.sender)
        .add_attribute("action_id", id.to_string())
        .add_attribute("target", action.target)
        .add_attribute("value", action.value.to_string()))
}

pub fn execute_confirm(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    action_id: u64,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    assert_approver(deps.storage, &info.sender)?;
    let mut action = load_pending(deps.storage, action_id)?;

    // confirming twice is an error, not a no-op
    let key = (action_id, &info.sender);
    if CONFIRMATIONS.has(deps.storage, key) {
        return Err(ContractError::AlreadyConfirmed { action_id });
    }
    CONFIRMATIONS.save(deps.storage, key, &Empty {})?;
    action.confirmations += 1;
    ACTIONS.save(deps.storage, action_id, &action)?;

    Ok(Response::new()
        .add_attribute("action", "confirm")
        .add_attribute("sender", info.sender)
        .add_attribute("action_id", action_id.to_string())
        .add_attribute("confirmations", action.confirmations.to_string()))
}

pub fn execute_revoke(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    action_id: u64,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    assert_approver(deps.storage, &info.sender)?;
    let mut action = load_pending(deps.storage, action_id)?;

    let key = (action_id, &info.sender);
    if !CONFIRMATIONS.has(deps.storage, key) {
        return Err(ContractError::NotConfirmed { action_id });
    }
    CONFIRMATIONS.remove(deps.storage, key);
    action.confirmations -= 1;
    ACTIONS.save(deps.storage, action_id, &action)?;

    Ok(Response::new()
        .add_attribute("action", "revoke")
        .add_attribute("sender", info.sender)
        .add_attribute("action_id", action_id.to_string())
        .add_attribute("confirmations", action.confirmations.to_string()))
}

pub fn execute_execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    action_id: u64,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    // anyone can trigger this once the threshold is met
    let mut action = load_pending(deps.storage, action_id)?;
    let cfg = CONFIG.load(deps.storage)?;
    if !action.has_quorum(cfg.threshold) {
        return Err(ContractError::InsufficientConfirmations {
            action_id,
            confirmations: action.confirmations,
            required: cfg.threshold,
        });
    }

    // must be persisted before anything is dispatched, so a call back into
    // this contract sees the action as executed
    action.executed = true;
    ACTIONS.save(deps.storage, action_id, &action)?;

    let mut res = Response::new()
        .add_attribute("action", "execute")
        .add_attribute("sender", info.sender)
        .add_attribute("action_id", action_id.to_string())
        .add_attribute("target", action.target.as_str())
        .add_attribute("value", action.value.to_string());
    if let Some(msg) = dispatch_msg(&action, &cfg.denom) {
        // failures come back through reply, which aborts the whole transaction
        res = res.add_submessage(SubMsg::reply_on_error(msg, action_id));
    }
    Ok(res)
}

pub fn execute_deposit(
    _deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let amount = if info.funds.is_empty() {
        "none".to_string()
    } else {
        info.funds
            .iter()
            .map(Coin::to_string)
            .collect::<Vec<_>>()
            .join(",")
    };

    Ok(Response::new()
        .add_attribute("action", "deposit")
        .add_attribute("sender", info.sender)
        .add_attribute("amount", amount))
}

/// Sub-messages are dispatched with the action id as reply id. Only errors
/// come back here.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(_deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.result {
        SubMsgResult::Err(reason) => Err(ContractError::ExecutionFailed {
            action_id: msg.id,
            reason,
        }),
        SubMsgResult::Ok(_) => Ok(Response::new()),
    }
}

fn assert_approver(store: &dyn Storage, sender: &Addr) -> Result<(), ContractError> {
    if is_approver(store, sender) {
        Ok(())
    } else {
        Err(ContractError::Unauthorized {})
    }
}

fn load_action(store: &dyn Storage, action_id: u64) -> Result<Action, ContractError> {
    ACTIONS
        .may_load(store, action_id)?
        .ok_or(ContractError::ActionNotFound { action_id })
}

fn load_pending(store: &dyn Storage, action_id: u64) -> Result<Action, ContractError> {
    let action = load_action(store, action_id)?;
    if action.executed {
        return Err(ContractError::AlreadyExecuted { action_id });
    }
    Ok(action)
}

// payload present: call the target with it. otherwise a plain transfer, if there is any value
fn dispatch_msg(action: &Action, denom: &str) -> Option<CosmosMsg> {
    let funds = if action.value.is_zero() {
        vec![]
    } else {
        coins(action.value.u128(), denom)
    };

    if !action.payload.is_empty() {
        Some(
            WasmMsg::Execute {
                contract_addr: action.target.to_string(),
                msg: action.payload.clone(),
                funds,
            }
            .into(),
        )
    } else if !funds.is_empty() {
        Some(
            BankMsg::Send {
                to_address: action.target.to_string(),
                amount: funds,
            }
            .into(),
        )
    } else {
        None
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Threshold {} => to_json_binary(&query_threshold(deps)?),
        QueryMsg::ListApprovers {} => to_json_binary(&list_approvers(deps)?),
        QueryMsg::Approver { address } => to_json_binary(&query_approver(deps, address)?),
        QueryMsg::ActionCount {} => to_json_binary(&query_action_count(deps)?),
        QueryMsg::Action { action_id } => to_json_binary(&query_action(deps, action_id)?),
        QueryMsg::ListActions { start_after, limit } => {
            to_json_binary(&list_actions(deps, start_after, limit)?)
        }
        QueryMsg::ReverseActions {
            start_before,
            limit,
        } => to_json_binary(&reverse_actions(deps, start_before, limit)?),
        QueryMsg::Confirmation {
            action_id,
            approver,
        } => to_json_binary(&query_confirmation(deps, action_id, approver)?),
        QueryMsg::ListConfirmations {
            action_id,
            start_after,
            limit,
        } => to_json_binary(&list_confirmations(deps, action_id, start_after, limit)?),
    }
}

fn query_threshold(deps: Deps) -> StdResult<ThresholdResponse> {
    let cfg = CONFIG.load(deps.storage)?;
    Ok(ThresholdResponse {
        threshold: cfg.threshold,
        total_approvers: cfg.approvers.len() as u64,
    })
}

fn list_approvers(deps: Deps) -> StdResult<ApproverListResponse> {
    let cfg = CONFIG.load(deps.storage)?;
    Ok(ApproverListResponse {
        approvers: cfg.approvers.into_iter().map(String::from).collect(),
    })
}

fn query_approver(deps: Deps, address: String) -> StdResult<ApproverResponse> {
    let addr = deps.api.addr_validate(&address)?;
    Ok(ApproverResponse {
        is_approver: is_approver(deps.storage, &addr),
        address,
    })
}

fn query_action_count(deps: Deps) -> StdResult<ActionCountResponse> {
    let count = ACTION_COUNT.load(deps.storage)?;
    Ok(ActionCountResponse { count })
}

fn query_action(deps: Deps, action_id: u64) -> StdResult<ActionResponse> {
    let cfg = CONFIG.load(deps.storage)?;
    let action = ACTIONS.load(deps.storage, action_id)?;
    Ok(map_action(action_id, action, &cfg))
}

// settings for pagination
const MAX_LIMIT: u32 = 30;
const DEFAULT_LIMIT: u32 = 10;

fn list_actions(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<ActionListResponse> {
    let cfg = CONFIG.load(deps.storage)?;
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);
    let actions = ACTIONS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(id, action)| map_action(id, action, &cfg)))
        .collect::<StdResult<_>>()?;

    Ok(ActionListResponse { actions })
}

fn reverse_actions(
    deps: Deps,
    start_before: Option<u64>,
    limit: Option<u32>,
) -> StdResult<ActionListResponse> {
    let cfg = CONFIG.load(deps.storage)?;
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let end = start_before.map(Bound::exclusive);
    let actions = ACTIONS
        .range(deps.storage, None, end, Order::Descending)
        .take(limit)
        .map(|item| item.map(|(id, action)| map_action(id, action, &cfg)))
        .collect::<StdResult<_>>()?;

    Ok(ActionListResponse { actions })
}

fn map_action(id: u64, action: Action, cfg: &Config) -> ActionResponse {
    let status = action.status(cfg.threshold);
    ActionResponse {
        id,
        target: action.target,
        value: action.value,
        denom: cfg.denom.clone(),
        payload: action.payload,
        executed: action.executed,
        confirmations: action.confirmations,
        status,
    }
}

fn query_confirmation(
    deps: Deps,
    action_id: u64,
    approver: String,
) -> StdResult<ConfirmationResponse> {
    let approver = deps.api.addr_validate(&approver)?;
    let confirmed = CONFIRMATIONS.has(deps.storage, (action_id, &approver));
    Ok(ConfirmationResponse { confirmed })
}

fn list_confirmations(
    deps: Deps,
    action_id: u64,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<ConfirmationListResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let addr = maybe_addr(deps.api, start_after)?;
    let start = addr.as_ref().map(Bound::exclusive);

    let approvers = CONFIRMATIONS
        .prefix(action_id)
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(String::from))
        .collect::<StdResult<_>>()?;

    Ok(ConfirmationListResponse { approvers })
}
