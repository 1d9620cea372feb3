//! 调用结果（Outcome）
//!
//! 一次宽松调用的完整记录：原始参数、已解析输入、错误列表与结果。
//! 返回给调用方后不再变化。
//!
use crate::arguments::Arguments;
use crate::error::{ServiceError, ServiceResult};
use crate::inputs::Inputs;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// 调用的终止状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeStatus {
    /// 必填输入缺失，`call` 未执行
    ValidationFailed,
    /// `call` 正常返回
    Succeeded,
    /// `call` 返回了错误
    ExecutionFailed,
}

#[derive(Debug, Clone)]
pub struct Outcome<T> {
    arguments: Arguments,
    inputs: Inputs,
    errors: Vec<String>,
    result: Option<T>,
    status: OutcomeStatus,
}

impl<T> Outcome<T> {
    pub(crate) fn validation_failed(arguments: Arguments, inputs: Inputs, errors: Vec<String>) -> Self {
        Self {
            arguments,
            inputs,
            errors,
            result: None,
            status: OutcomeStatus::ValidationFailed,
        }
    }

    pub(crate) fn succeeded(arguments: Arguments, inputs: Inputs, result: T) -> Self {
        Self {
            arguments,
            inputs,
            errors: Vec::new(),
            result: Some(result),
            status: OutcomeStatus::Succeeded,
        }
    }

    pub(crate) fn execution_failed(arguments: Arguments, inputs: Inputs, message: String) -> Self {
        Self {
            arguments,
            inputs,
            errors: vec![message],
            result: None,
            status: OutcomeStatus::ExecutionFailed,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    pub fn status(&self) -> OutcomeStatus {
        self.status
    }

    /// 调用方传入的原始参数
    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    pub fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    /// 按名称读取已解析输入；校验失败的必填输入没有值
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.inputs.get(name)
    }

    pub fn value<V: DeserializeOwned>(&self, name: &str) -> ServiceResult<V> {
        self.inputs.value(name)
    }

    /// 转换为 `Result`：有效时返回结果，否则把全部错误聚合为 `InvocationFailed`
    pub fn into_result(self) -> ServiceResult<T> {
        match self.result {
            Some(result) if self.errors.is_empty() => Ok(result),
            _ => Err(ServiceError::InvocationFailed {
                errors: self.errors,
            }),
        }
    }
}
