//! 套件执行的通用辅助。

use std::fmt::Write;
use std::panic;

/// 在附加上下文的情况下重新抛出 panic。
///
/// # 教案式说明
/// - **意图 (Why)**：`case::run_suite` 捕获 panic 后，需要在原始 payload 之上追加“套件/用例”描述，
///   帮助调试者快速定位失败来源。
/// - **逻辑 (How)**：尝试将 payload 解析为 `&str` / `String` / 任意 `Any`，在格式化文本后通过
///   [`panic::resume_unwind`] 保留原始栈信息。
/// - **契约 (What)**：
///   - **输入**：`suite`、`case` 均为人类可读名称；`payload` 为原始 panic 载荷；
///   - **前置条件**：调用前必须处于 `catch_unwind` 的错误分支中；
///   - **后置条件**：函数不会正常返回，而是带上下文的 panic。
pub fn panic_with_context(suite: &str, case: &str, payload: Box<dyn std::any::Any + Send>) -> ! {
    let mut message = String::new();
    let _ = write!(&mut message, "[prism-tck::{suite}::{case}] 测试失败：");

    if let Some(text) = payload.downcast_ref::<&str>() {
        let _ = write!(&mut message, "{text}");
    } else if let Some(text) = payload.downcast_ref::<String>() {
        let _ = write!(&mut message, "{text}");
    } else {
        let _ = write!(&mut message, "<未知 panic 类型>");
    }

    panic::resume_unwind(Box::new(message));
}
