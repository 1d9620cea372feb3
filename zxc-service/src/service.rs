use crate::error::{ServiceError, ServiceResult};
use crate::inputs::Inputs;
use crate::schema::{SchemaBuilder, ServiceSchema};

/// 服务对象（Service）
///
/// 表达一次具名的业务操作：先声明输入，再实现唯一的 `call`。
/// - `NAME`：服务的稳定名称，用于日志与错误信息。避免依赖 `type_name::<T>()`。
/// - `declare`：声明输入，仅在构建 `ServiceSchema` 时调用一次；
/// - `call`：读取已解析的输入并返回结果，失败以 `Err` 表达。
///
/// 未覆盖 `call` 时返回 `ServiceError::NotImplemented`，调用方在任何模式下都会收到该错误。
///
/// ```rust
/// use zxc_service::{
///     Arguments, InputOptions, Inputs, SchemaBuilder, Service, ServiceInvoker, ServiceResult,
/// };
///
/// struct Greet;
///
/// impl Service for Greet {
///     const NAME: &'static str = "Greet";
///     type Output = String;
///
///     fn declare(schema: SchemaBuilder) -> SchemaBuilder {
///         schema.declare_input("name", InputOptions::with_default("world"))
///     }
///
///     fn call(&self, inputs: &Inputs) -> ServiceResult<String> {
///         Ok(format!("hello, {}", inputs.value::<String>("name")?))
///     }
/// }
///
/// let invoker = ServiceInvoker::new(Greet);
/// assert_eq!(invoker.invoke_strict(Arguments::new()).unwrap(), "hello, world");
/// ```
pub trait Service: Send + Sync + 'static {
    /// 服务的稳定名称（建议常量字符串，不随重构变化）
    const NAME: &'static str;

    type Output;

    fn declare(schema: SchemaBuilder) -> SchemaBuilder {
        schema
    }

    fn call(&self, inputs: &Inputs) -> ServiceResult<Self::Output> {
        let _ = inputs;
        Err(ServiceError::NotImplemented { service: Self::NAME })
    }

    /// 构建该服务的输入模式
    fn schema() -> ServiceSchema
    where
        Self: Sized,
    {
        Self::declare(ServiceSchema::builder(Self::NAME)).build()
    }
}
