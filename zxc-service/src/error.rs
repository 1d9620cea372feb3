//! 服务层统一错误定义
//!
//! 三类失败：
//! - 配置错误：具体服务未实现 `call`，任何模式下都直接返回；
//! - 校验错误：必填输入缺失，宽松模式下收集，严格模式下聚合返回；
//! - 执行错误：`call` 自身失败，宽松模式下收集消息，严格模式下原样返回。
//!
use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ServiceError {
    // --- 配置 ---
    #[error("{service}#call not implemented")]
    NotImplemented { service: &'static str },

    // --- 校验 ---
    #[error("{}", .errors.join("; "))]
    InvocationFailed { errors: Vec<String> },

    // --- 执行 ---
    #[error(transparent)]
    Execution(#[from] anyhow::Error),
    #[error("input {name} has unexpected type: {reason}")]
    InputType { name: String, reason: String },

    // --- 参数 ---
    #[error("invalid arguments: expected an object, found {found}")]
    InvalidArguments { found: &'static str },
}

impl ServiceError {
    /// 以任意消息构造执行错误，`Display` 与原消息保持一致
    pub fn execution<M>(message: M) -> Self
    where
        M: std::fmt::Display + std::fmt::Debug + Send + Sync + 'static,
    {
        Self::Execution(anyhow::Error::msg(message))
    }

    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented { .. })
    }
}

/// 统一 Result 类型别名
pub type ServiceResult<T> = Result<T, ServiceError>;
