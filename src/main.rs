//! SaveUs
//!
//! An MCP server for the SaveUs food nutrition cache.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use saveus::build_info;
use saveus::config::Config;
use saveus::db;
use saveus::mcp::SaveUsService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr; stdout carries the MCP stdio transport
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("saveus=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    // A missing .env file is fine; the real environment still applies
    dotenvy::dotenv().ok();
    let config = Config::from_env();
    tracing::info!(path = %config.database_path.display(), "opening database");

    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let database = db::Database::new(&config.database_path)?;

    database.with_conn(|conn| {
        if db::migrations::needs_migration(conn)? {
            tracing::info!("applying database migrations");
        }
        db::migrations::run_migrations(conn)?;
        let version = db::migrations::get_schema_version(conn)?;
        tracing::info!(version, "database schema ready");
        Ok(())
    })?;

    let service = SaveUsService::new(&config, database);

    tracing::info!("starting MCP server on stdio");
    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
