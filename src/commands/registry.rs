use crate::modules::mall::commands::*;
use crate::modules::store::commands::*;
use crate::shared::errors::{AppError, AppResult};
use crate::AppContext;
use crate::log_warn;
use crate::shared::utils::{LogContext, TimedOperation};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Single source of truth for every command the application accepts.
///
/// Wire form: `{"command": "create_mall", "request": {"name": "...", ...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "command", content = "request", rename_all = "snake_case")]
pub enum Command {
    // Mall commands
    CreateMall(CreateMallRequest),
    GetMall(GetMallRequest),
    GetAllMalls,
    UpdateMall(UpdateMallRequest),
    DestroyMall(DestroyMallRequest),
    ListMallStores(ListMallStoresRequest),
    IncreaseMallRevenue(IncreaseMallRevenueRequest),
    // Store commands
    CreateStore(CreateStoreRequest),
    GetStore(GetStoreRequest),
    UpdateStore(UpdateStoreRequest),
    DestroyStore(DestroyStoreRequest),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::CreateMall(_) => "create_mall",
            Command::GetMall(_) => "get_mall",
            Command::GetAllMalls => "get_all_malls",
            Command::UpdateMall(_) => "update_mall",
            Command::DestroyMall(_) => "destroy_mall",
            Command::ListMallStores(_) => "list_mall_stores",
            Command::IncreaseMallRevenue(_) => "increase_mall_revenue",
            Command::CreateStore(_) => "create_store",
            Command::GetStore(_) => "get_store",
            Command::UpdateStore(_) => "update_store",
            Command::DestroyStore(_) => "destroy_store",
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CommandResponse {
    Ok { data: Value },
    Error { error: AppError },
}

impl From<AppResult<Value>> for CommandResponse {
    fn from(result: AppResult<Value>) -> Self {
        match result {
            Ok(data) => CommandResponse::Ok { data },
            Err(error) => CommandResponse::Error { error },
        }
    }
}

/// Route a command to its handler and serialize the result
pub async fn dispatch(command: Command, context: &AppContext) -> AppResult<Value> {
    let name = command.name();
    let timer = TimedOperation::new(name);

    let result = route(command, context).await;

    LogContext::command(name, result.is_ok(), timer.elapsed_ms());
    result
}

async fn route(command: Command, context: &AppContext) -> AppResult<Value> {
    let malls = context.mall_service.as_ref();
    let stores = context.store_service.as_ref();

    let value = match command {
        Command::CreateMall(request) => serde_json::to_value(create_mall(request, malls).await?)?,
        Command::GetMall(request) => serde_json::to_value(get_mall(request, malls).await?)?,
        Command::GetAllMalls => serde_json::to_value(get_all_malls(malls).await?)?,
        Command::UpdateMall(request) => serde_json::to_value(update_mall(request, malls).await?)?,
        Command::DestroyMall(request) => serde_json::to_value(destroy_mall(request, malls).await?)?,
        Command::ListMallStores(request) => {
            serde_json::to_value(list_mall_stores(request, malls).await?)?
        }
        Command::IncreaseMallRevenue(request) => {
            serde_json::to_value(increase_mall_revenue(request, malls).await?)?
        }
        Command::CreateStore(request) => serde_json::to_value(create_store(request, stores).await?)?,
        Command::GetStore(request) => serde_json::to_value(get_store(request, stores).await?)?,
        Command::UpdateStore(request) => serde_json::to_value(update_store(request, stores).await?)?,
        Command::DestroyStore(request) => {
            destroy_store(request, stores).await?;
            Value::Null
        }
    };

    Ok(value)
}

/// Parse one JSON command line and run it
pub async fn handle_line(line: &str, context: &AppContext) -> CommandResponse {
    let command: Command = match serde_json::from_str(line) {
        Ok(command) => command,
        Err(e) => {
            log_warn!("Rejected malformed command: {}", e);
            return CommandResponse::Error {
                error: AppError::InvalidInput(format!("Malformed command: {}", e)),
            };
        }
    };

    dispatch(command, context).await.into()
}
