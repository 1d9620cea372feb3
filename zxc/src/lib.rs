//! zxc 门面 crate
//!
//! 按特性聚合工作区中的各个组件：
//! - `service`（默认开启）：服务对象调用框架，见 [`service`]
//! - `formatters`（默认开启）：日期/姓名格式化工具，见 [`formatters`]
//!
//! 常用类型在根模块重新导出，典型用法：
//! ```rust
//! # #[cfg(all(feature = "service", feature = "formatters"))]
//! # {
//! use zxc::{Arguments, Inputs, Service, ServiceInvoker, ServiceResult, SchemaBuilder, InputOptions};
//!
//! struct FormatPerson;
//!
//! impl Service for FormatPerson {
//!     const NAME: &'static str = "FormatPerson";
//!     type Output = String;
//!
//!     fn declare(schema: SchemaBuilder) -> SchemaBuilder {
//!         schema.declare_input("query", InputOptions::required())
//!     }
//!
//!     fn call(&self, inputs: &Inputs) -> ServiceResult<String> {
//!         let query: Option<String> = inputs.value("query")?;
//!         Ok(zxc::formatters::reformat_name_and_dob(query.as_deref()))
//!     }
//! }
//!
//! let invoker = ServiceInvoker::new(FormatPerson);
//! let out = invoker
//!     .invoke_strict(Arguments::new().with("query", "doe john 01.01.2000"))
//!     .unwrap();
//! assert_eq!(out, "Doe John 01.01.2000");
//! # }
//! ```
//!
#[cfg(feature = "formatters")]
pub use zxc_formatters as formatters;
#[cfg(feature = "service")]
pub use zxc_service as service;

#[cfg(feature = "service")]
pub use zxc_service::{
    Arguments, InputDefault, InputOptions, Inputs, Outcome, OutcomeStatus, SchemaBuilder, Service,
    ServiceError, ServiceInvoker, ServiceResult, ServiceSchema,
};
