//! SaveUs MCP Server Implementation
//!
//! Implements the MCP server with all SaveUs tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::db::Database;
use crate::nutrition_api::FoodNutritionClient;
use crate::tools::foods;
use crate::tools::status::StatusTracker;

/// SaveUs MCP Service
#[derive(Clone)]
pub struct SaveUsService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    database: Database,
    /// None when no API key is configured
    nutrition_client: Option<FoodNutritionClient>,
    tool_router: ToolRouter<SaveUsService>,
}

impl SaveUsService {
    pub fn new(config: &Config, database: Database) -> Self {
        let nutrition_client = match FoodNutritionClient::from_config(config) {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::warn!(error = %e, "nutrition api disabled");
                None
            }
        };

        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(
                config.database_path.clone(),
                nutrition_client.is_some(),
            ))),
            database,
            nutrition_client,
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Food Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetFoodNutritionParams {
    /// Food name; spaces are ignored
    pub food_name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ImportFoodNutritionParams {
    /// Food name to store the result under; spaces are removed
    pub food_name: String,
    /// Product report number (ITEM_REPORT_NO) used to query the nutrition API
    pub report_no: String,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl SaveUsService {
    // --- Status ---

    #[tool(description = "Get the current status of the SaveUs service including build info, database status, and process information")]
    async fn saveus_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status(&self.database);
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Food Nutrition ---

    #[tool(description = "Get stored nutrition facts for a food by name")]
    fn get_food_nutrition(&self, Parameters(p): Parameters<GetFoodNutritionParams>) -> Result<CallToolResult, McpError> {
        let result = foods::get_food_nutrition(&self.database, &p.food_name).map_err(|e| McpError::internal_error(e, None))?;
        let json = match result {
            Some(food) => serde_json::to_string_pretty(&food),
            None => serde_json::to_string_pretty(&serde_json::json!({
                "error": "Food not found",
                "food_name": p.food_name,
            })),
        }.map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Import nutrition facts for a packaged food by its product report number. Returns the stored row if the food is already known; otherwise queries the public nutrition database and stores the result.")]
    async fn import_food_nutrition(&self, Parameters(p): Parameters<ImportFoodNutritionParams>) -> Result<CallToolResult, McpError> {
        let result = foods::import_food_nutrition(&self.database, self.nutrition_client.as_ref(), &p.food_name, &p.report_no)
            .await
            .map_err(|e| McpError::internal_error(e, None))?;
        let json = match result {
            Some(food) => serde_json::to_string_pretty(&food),
            None => serde_json::to_string_pretty(&serde_json::json!({
                "error": "No nutrition data for report number",
                "report_no": p.report_no,
            })),
        }.map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for SaveUsService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "saveus".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("SaveUs".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "SaveUs - food nutrition facts. \
                 Status: saveus_status. \
                 Food: get_food_nutrition looks up a stored food by name; \
                 import_food_nutrition fetches a packaged food by product report number and caches it."
                    .into(),
            ),
        }
    }
}
