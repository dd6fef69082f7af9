pub mod types;

pub use types::{RpcRequest, RpcResponse};
