//! 服务对象调用框架（zxc-service）
//!
//! 以“命令对象”方式封装一次业务操作：
//! - 通过 `ServiceSchema` 声明具名输入及其默认值（字面量或惰性计算）
//! - 调用前按声明顺序解析输入，只校验“是否提供”，不校验类型
//! - 执行唯一的 `Service::call`，收集结果或错误信息
//!
//! 提供两种调用入口：
//! 1. `ServiceInvoker::invoke`：宽松模式，错误收集到 `Outcome::errors`；
//! 2. `ServiceInvoker::invoke_strict`：严格模式，执行错误原样返回，
//!    校验错误聚合为 `ServiceError::InvocationFailed`。
//!
//! 未实现 `call` 属于框架误用，两种模式下都会直接返回 `ServiceError::NotImplemented`。
//!
pub mod arguments;
pub mod error;
pub mod input_spec;
pub mod inputs;
pub mod invoker;
pub mod outcome;
pub mod schema;
pub mod service;

pub use arguments::Arguments;
pub use error::{ServiceError, ServiceResult};
pub use input_spec::{InputDefault, InputOptions, InputSpec};
pub use inputs::Inputs;
pub use invoker::ServiceInvoker;
pub use outcome::{Outcome, OutcomeStatus};
pub use schema::{SchemaBuilder, ServiceSchema};
pub use service::Service;
