use crate::{
    arguments::Arguments,
    error::{ServiceError, ServiceResult},
    outcome::Outcome,
    schema::ServiceSchema,
    service::Service,
};
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// 执行错误收集到 `Outcome::errors`
    Lenient,
    /// 执行错误原样返回
    Strict,
}

/// 服务调用器
/// - 持有服务实例与构建一次后冻结的 `ServiceSchema`
/// - 每次调用独立分配 `Outcome`，可跨线程共享调用器本身
///
/// 单次调用的状态流转：
/// `Created → Resolving → {ValidationFailed | Resolved}`，
/// `Resolved → Executing → {Succeeded | ExecutionFailed}`。
pub struct ServiceInvoker<S: Service> {
    service: Arc<S>,
    schema: Arc<ServiceSchema>,
}

impl<S: Service> Clone for ServiceInvoker<S> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            schema: self.schema.clone(),
        }
    }
}

impl<S: Service + Default> Default for ServiceInvoker<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: Service> ServiceInvoker<S> {
    pub fn new(service: S) -> Self {
        Self::from_arc(Arc::new(service))
    }

    pub fn from_arc(service: Arc<S>) -> Self {
        let schema = Arc::new(S::schema());
        tracing::debug!(
            service = S::NAME,
            inputs = schema.inputs().len(),
            "service schema declared"
        );
        Self { service, schema }
    }

    pub fn schema(&self) -> &ServiceSchema {
        &self.schema
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// 宽松调用：校验与执行错误都收集到返回的 `Outcome` 中
    ///
    /// 仅当服务未实现 `call` 时返回 `Err(ServiceError::NotImplemented)`。
    pub fn invoke(&self, args: impl Into<Arguments>) -> ServiceResult<Outcome<S::Output>> {
        self.run(args.into(), Mode::Lenient)
    }

    /// 严格调用：成功时直接返回结果
    ///
    /// - 必填输入缺失：返回 `ServiceError::InvocationFailed`，消息为全部错误以 `"; "` 连接；
    /// - `call` 失败：原样返回该错误，不做包装。
    pub fn invoke_strict(&self, args: impl Into<Arguments>) -> ServiceResult<S::Output> {
        self.run(args.into(), Mode::Strict)?.into_result()
    }

    fn run(&self, arguments: Arguments, mode: Mode) -> ServiceResult<Outcome<S::Output>> {
        tracing::debug!(service = S::NAME, ?mode, "resolving inputs");
        let (inputs, errors) = self.schema.resolve(&arguments);

        if !errors.is_empty() {
            tracing::debug!(service = S::NAME, ?errors, "validation failed");
            return Ok(Outcome::validation_failed(arguments, inputs, errors));
        }

        tracing::debug!(service = S::NAME, "executing");
        match self.service.call(&inputs) {
            Ok(result) => {
                tracing::debug!(service = S::NAME, "succeeded");
                Ok(Outcome::succeeded(arguments, inputs, result))
            }
            Err(err @ ServiceError::NotImplemented { .. }) => Err(err),
            Err(err) if mode == Mode::Strict => Err(err),
            Err(err) => {
                let message = err.to_string();
                tracing::debug!(service = S::NAME, error = %message, "execution failed");
                Ok(Outcome::execution_failed(arguments, inputs, message))
            }
        }
    }
}
