//! 服务输入模式（ServiceSchema）
//!
//! 每个服务类型构建一次、构建后冻结的输入声明列表。
//! 通过 `SchemaBuilder` 声明输入，`build()` 之后只读，可在多线程间共享。
//!
use crate::arguments::Arguments;
use crate::input_spec::{InputOptions, InputSpec};
use crate::inputs::Inputs;

#[derive(Debug, Clone)]
pub struct ServiceSchema {
    service: &'static str,
    inputs: Vec<InputSpec>,
    warn_empty: Vec<String>,
}

impl ServiceSchema {
    pub fn builder(service: &'static str) -> SchemaBuilder {
        SchemaBuilder {
            service,
            inputs: Vec::new(),
            warn_empty: Vec::new(),
        }
    }

    /// 所属服务名称
    pub fn service(&self) -> &'static str {
        self.service
    }

    /// 按声明顺序排列的输入
    pub fn inputs(&self) -> &[InputSpec] {
        &self.inputs
    }

    pub fn input(&self, name: &str) -> Option<&InputSpec> {
        self.inputs.iter().find(|spec| spec.name() == name)
    }

    pub fn warn_empty_inputs(&self) -> &[String] {
        &self.warn_empty
    }

    /// 按声明顺序解析参数，返回已解析输入与校验错误
    ///
    /// - 键存在（即使值为 `null`）：原样使用；
    /// - 键缺失且有默认值：求值默认值；
    /// - 键缺失且无默认值：记录 `"<name> is required"` 并继续解析后续输入。
    pub(crate) fn resolve(&self, arguments: &Arguments) -> (Inputs, Vec<String>) {
        for name in &self.warn_empty {
            if arguments.get(name).is_none_or(|v| v.is_null()) {
                tracing::warn!(service = self.service, input = %name, "input is empty");
            }
        }

        let mut inputs = Inputs::default();
        let mut errors = Vec::new();

        for spec in &self.inputs {
            let name = spec.name();
            match (arguments.get(name), spec.default_value()) {
                (Some(value), _) => inputs.set(name, value.clone()),
                (None, Some(default)) => inputs.set(name, default.resolve()),
                (None, None) => errors.push(format!("{name} is required")),
            }
        }

        (inputs, errors)
    }
}

/// 模式构建器
///
/// ```rust
/// use zxc_service::{InputOptions, ServiceSchema};
///
/// let schema = ServiceSchema::builder("MultiplyService")
///     .declare_input("multiplier", InputOptions::with_default(1))
///     .declare_inputs(["num1", "num2"], InputOptions::with_default(0))
///     .warn_empty_inputs(["multiplier"])
///     .build();
///
/// assert_eq!(schema.inputs().len(), 3);
/// ```
#[derive(Debug)]
pub struct SchemaBuilder {
    service: &'static str,
    inputs: Vec<InputSpec>,
    warn_empty: Vec<String>,
}

impl SchemaBuilder {
    /// 声明一个输入；同名重复声明时后者覆盖前者，并保留首次声明的位置
    pub fn declare_input(mut self, name: impl Into<String>, options: InputOptions) -> Self {
        let spec = InputSpec::new(name, options);
        match self.inputs.iter_mut().find(|s| s.name() == spec.name()) {
            Some(existing) => *existing = spec,
            None => self.inputs.push(spec),
        }
        self
    }

    /// 以相同选项声明多个输入
    pub fn declare_inputs<I, N>(self, names: I, options: InputOptions) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        names
            .into_iter()
            .fold(self, |builder, name| builder.declare_input(name, options.clone()))
    }

    /// 调用时这些输入缺失或为 `null` 则输出警告日志，不影响校验结果
    pub fn warn_empty_inputs<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        for name in names {
            let name = name.into();
            if !self.warn_empty.contains(&name) {
                self.warn_empty.push(name);
            }
        }
        self
    }

    pub fn build(self) -> ServiceSchema {
        ServiceSchema {
            service: self.service,
            inputs: self.inputs,
            warn_empty: self.warn_empty,
        }
    }
}
