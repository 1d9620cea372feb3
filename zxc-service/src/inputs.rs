//! 已解析输入（Inputs）
//!
//! 每个声明的输入对应一个槽位，由解析阶段填充，`Service::call` 只读取该映射。
//!
use crate::error::{ServiceError, ServiceResult};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inputs(Map<String, Value>);

impl Inputs {
    pub(crate) fn set(&mut self, name: &str, value: Value) {
        self.0.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// 按目标类型读取输入
    ///
    /// 未解析的名称按 `null` 处理，因此 `Option<T>` 总能读取成功。
    /// 类型不匹配返回 `ServiceError::InputType`，在 `call` 中用 `?` 传播即成为执行错误。
    pub fn value<T: DeserializeOwned>(&self, name: &str) -> ServiceResult<T> {
        let value = self.0.get(name).cloned().unwrap_or(Value::Null);
        serde_json::from_value(value).map_err(|e| ServiceError::InputType {
            name: name.to_string(),
            reason: e.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}
