//! Message dispatch: text in, reply text out.
//!
//! The handler never fails; every error path maps to a localized
//! reply. A chat transport only has to relay strings both ways.

use kadastr_core::render;
use tracing::{error, info};

use crate::api::{ApiClient, ApiError};
use crate::command::Command;

pub const START_REPLY: &str =
    "Привет! Отправь кадастровый номер в формате XX:XX:XXXXXX:XX (например, 77:03:0001001:1).";
pub const STOP_REPLY: &str = "Бот остановлен. Для возобновления работы отправьте /start";

const NOT_FOUND_REPLY: &str = "Объект не найден.";
const NETWORK_REPLY: &str = "Ошибка соединения с сервером. Попробуйте позже.";
const DATA_REPLY: &str = "Ошибка в данных. Проверьте номер.";

pub struct BotHandler {
    api: ApiClient,
}

impl BotHandler {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// One incoming message, one reply. The `/stop` reply is purely
    /// informational; no session state exists to terminate.
    pub async fn handle_message(&self, text: &str) -> String {
        match Command::parse(text) {
            Command::Start => START_REPLY.to_string(),
            Command::Stop => STOP_REPLY.to_string(),
            Command::Lookup(number) => self.lookup_reply(&number).await,
        }
    }

    async fn lookup_reply(&self, number: &str) -> String {
        match self.api.fetch(number).await {
            Ok(record) => {
                info!(number = %number, "lookup succeeded");
                render::render_with_map_link(&record)
            }
            Err(ApiError::BadRequest(detail)) => detail,
            Err(ApiError::NotFound) => NOT_FOUND_REPLY.to_string(),
            Err(ApiError::Status(status)) => {
                error!(status, "unexpected API status");
                DATA_REPLY.to_string()
            }
            Err(ApiError::Network(err)) => {
                error!(error = %err, "API request failed");
                NETWORK_REPLY.to_string()
            }
        }
    }
}
