//! SaveUs Tools module
//!
//! MCP tool implementations for the SaveUs service.

pub mod foods;
pub mod status;
