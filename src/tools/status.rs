//! SaveUs Status Tool
//!
//! Provides runtime status information about the SaveUs service.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::db::Database;
use crate::models::Food;

/// Service status
#[derive(Debug, Clone, Serialize)]
pub struct SaveUsStatus {
    pub version: &'static str,
    pub git_sha: Option<&'static str>,
    pub database_path: String,
    pub database_size_bytes: Option<u64>,
    /// None when the database cannot be read
    pub stored_foods: Option<i64>,
    pub nutrition_api_configured: bool,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    database_path: PathBuf,
    nutrition_api_configured: bool,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new(database_path: PathBuf, nutrition_api_configured: bool) -> Self {
        Self {
            start_time: Instant::now(),
            database_path,
            nutrition_api_configured,
        }
    }

    /// Get the current status
    pub fn get_status(&self, db: &Database) -> SaveUsStatus {
        let build_info = BuildInfo::current();

        let database_size_bytes = std::fs::metadata(&self.database_path)
            .ok()
            .map(|m| m.len());

        let stored_foods = db.with_conn(|conn| Food::count(conn)).ok();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        SaveUsStatus {
            version: build_info.version,
            git_sha: build_info.git_sha,
            database_path: self.database_path.display().to_string(),
            database_size_bytes,
            stored_foods,
            nutrition_api_configured: self.nutrition_api_configured,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
