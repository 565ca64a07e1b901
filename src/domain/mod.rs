//! Domain Layer - 领域层
//!
//! 包含一个限界上下文:
//! - Dubbing Context: 配音请求与流水线步骤

pub mod dubbing;
