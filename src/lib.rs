//! SaveUs Library
//!
//! Data contracts shared with the SaveUs web service (meal records and
//! exercise recommendations), diet risk scoring, and the food nutrition
//! cache with its MCP tools.

pub mod build_info;
pub mod config;
pub mod db;
pub mod mcp;
pub mod models;
pub mod nutrition_api;
pub mod scoring;
pub mod tools;
