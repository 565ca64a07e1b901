//! Application State

use crate::application::{ProviderCredentials, RequestGateway};

/// 应用状态
///
/// 只包含不可变的网关；请求之间不共享可变状态。
#[derive(Debug)]
pub struct AppState {
    pub gateway: RequestGateway,
}

impl AppState {
    pub fn new(credentials: ProviderCredentials) -> Self {
        Self {
            gateway: RequestGateway::new(credentials),
        }
    }
}
