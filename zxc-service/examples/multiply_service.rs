//! MultiplyService 使用示例
//!
//! 展示输入声明、默认值、空输入告警以及两种调用模式。
//!
//! 运行示例：
//! ```bash
//! cargo run -p zxc-service --example multiply_service
//! ```

use zxc_service::{
    Arguments, InputOptions, Inputs, SchemaBuilder, Service, ServiceInvoker, ServiceResult,
};

struct MultiplyService;

impl Service for MultiplyService {
    const NAME: &'static str = "MultiplyService";
    type Output = i64;

    fn declare(schema: SchemaBuilder) -> SchemaBuilder {
        schema
            .declare_input("multiplier", InputOptions::with_default(1))
            .declare_inputs(["num1", "num2"], InputOptions::with_default(0))
            .warn_empty_inputs(["multiplier"])
    }

    fn call(&self, inputs: &Inputs) -> ServiceResult<i64> {
        let multiplier: i64 = inputs.value("multiplier")?;
        let num1: i64 = inputs.value("num1")?;
        let num2: i64 = inputs.value("num2")?;
        Ok(num1 * num2 * multiplier)
    }
}

fn main() {
    println!("=== MultiplyService 示例 ===\n");
    let invoker = ServiceInvoker::new(MultiplyService);

    // 1. 宽松调用
    println!("1. 宽松调用");
    let args = Arguments::new()
        .with("multiplier", 2)
        .with("num1", 3)
        .with("num2", 4);
    match invoker.invoke(args) {
        Ok(outcome) => {
            println!("   valid: {}", outcome.is_valid());
            println!("   result: {:?}\n", outcome.result());
        }
        Err(err) => println!("   error: {err}\n"),
    }

    // 2. 显式 null 不会被默认值替换，call 读取失败后错误被收集
    println!("2. 显式 null");
    let args = Arguments::new().with("multiplier", serde_json::Value::Null);
    match invoker.invoke(args) {
        Ok(outcome) => {
            println!("   valid: {}", outcome.is_valid());
            println!("   errors: {:?}\n", outcome.errors());
        }
        Err(err) => println!("   error: {err}\n"),
    }

    // 3. 严格调用
    println!("3. 严格调用");
    match invoker.invoke_strict(Arguments::new().with("num1", 5).with("num2", 6)) {
        Ok(result) => println!("   result: {result}"),
        Err(err) => println!("   error: {err}"),
    }
}
