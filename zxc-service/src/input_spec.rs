//! 输入声明（InputSpec）
//!
//! 服务定义中每个具名输入对应一条声明：
//! - 无默认值：必填，调用时缺失该键即校验失败；
//! - 字面量默认值：调用方省略该键时使用；
//! - 计算默认值：调用方省略该键时，每次调用重新计算（如当前时间）。
//!
use bon::Builder;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// 零参数的默认值计算函数
pub type DefaultFn = Arc<dyn Fn() -> Value + Send + Sync>;

/// 默认值：字面量或惰性计算
#[derive(Clone)]
pub enum InputDefault {
    Literal(Value),
    Computed(DefaultFn),
}

impl InputDefault {
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }

    pub fn computed<F, V>(f: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
        V: Into<Value>,
    {
        Self::Computed(Arc::new(move || f().into()))
    }

    /// 求值；计算默认值每次调用都会重新执行
    pub fn resolve(&self) -> Value {
        match self {
            Self::Literal(value) => value.clone(),
            Self::Computed(f) => f(),
        }
    }
}

impl fmt::Debug for InputDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl From<Value> for InputDefault {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}

/// 声明输入时的选项
///
/// ```rust
/// use zxc_service::input_spec::{InputDefault, InputOptions};
///
/// let required = InputOptions::required();
/// assert!(required.default_value().is_none());
///
/// let opts = InputOptions::builder()
///     .default_value(InputDefault::literal(1))
///     .build();
/// assert!(opts.default_value().is_some());
/// ```
#[derive(Builder, Clone, Debug, Default)]
pub struct InputOptions {
    #[builder(into)]
    default_value: Option<InputDefault>,
}

impl InputOptions {
    /// 必填输入（无默认值）
    pub fn required() -> Self {
        Self::default()
    }

    pub fn with_default(value: impl Into<Value>) -> Self {
        Self {
            default_value: Some(InputDefault::literal(value)),
        }
    }

    pub fn with_computed_default<F, V>(f: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
        V: Into<Value>,
    {
        Self {
            default_value: Some(InputDefault::computed(f)),
        }
    }

    pub fn default_value(&self) -> Option<&InputDefault> {
        self.default_value.as_ref()
    }
}

/// 单个输入的声明，构建后不可变
#[derive(Clone, Debug)]
pub struct InputSpec {
    name: String,
    default_value: Option<InputDefault>,
}

impl InputSpec {
    pub fn new(name: impl Into<String>, options: InputOptions) -> Self {
        Self {
            name: name.into(),
            default_value: options.default_value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_default(&self) -> bool {
        self.default_value.is_some()
    }

    pub fn is_required(&self) -> bool {
        !self.has_default()
    }

    pub fn default_value(&self) -> Option<&InputDefault> {
        self.default_value.as_ref()
    }
}
