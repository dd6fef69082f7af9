//! Remote tool server access: catalogue discovery and tool invocation.

mod error;
mod http;
mod interface;

pub use error::ToolServerError;
pub use http::{HttpToolServer, parse_catalog};
pub use interface::{ToolInvoker, ToolOutput, ToolRegistry, ToolServer};
