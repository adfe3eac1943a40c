//! MCP server
//!
//! Exposes the SaveUs tools over the Model Context Protocol.

mod server;

pub use server::SaveUsService;
