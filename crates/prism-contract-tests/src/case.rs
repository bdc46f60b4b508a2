//! 测试用例与套件的元信息结构体，以及统一的执行辅助函数。

use crate::support;
use std::panic;

/// 表示单个 TCK 用例的元信息。
///
/// # 教案式说明
/// - **意图 (Why)**：以结构体封装测试函数与名称，便于统一遍历、打印上下文信息，避免入口函数硬编码字符串。
/// - **逻辑 (How)**：`name` 采用 `'static` 字符串，`test` 为零参数函数指针；通过组合使得 `const` 数组定义成为可能。
/// - **契约 (What)**：`test` 必须在失败时 `panic`，不可返回 `Result` 后忽略；名称会用于错误提示。
#[derive(Clone, Copy)]
pub struct TckCase {
    /// 用例的人类可读名称。
    pub name: &'static str,
    /// 实际执行的断言逻辑。
    pub test: fn(),
}

/// 代表同一主题的一组 TCK 用例。
///
/// # 教案式说明
/// - **意图 (Why)**：入口函数需要一次性执行多个用例，因此把每个主题的用例聚合为 `TckSuite`。
/// - **逻辑 (How)**：包含一个名称和 `TckCase` 切片，所有数据均使用 `'static` 生命周期以支持编译期构造。
/// - **契约 (What)**：`cases` 不允许为空，名称与 `run_*` 函数之间保持一一对应关系。
#[derive(Clone, Copy)]
pub struct TckSuite {
    /// 套件名称，供日志与错误上下文使用。
    pub name: &'static str,
    /// 归属该套件的用例集合。
    pub cases: &'static [TckCase],
}

/// 在捕获 panic 的前提下执行整个套件。
///
/// # 教案式说明
/// - **意图 (Why)**：为外部入口提供统一执行路径，一旦用例失败即可附加“套件/用例”上下文后重新 panic。
/// - **逻辑 (How)**：遍历 `cases`，借助 [`panic::catch_unwind`] 捕获 panic，将 payload 交给
///   `support::panic_with_context` 二次抛出。
/// - **契约 (What)**：调用前确保 `suite.cases` 非空；若所有用例均成功，函数不会返回任何值；若失败则 panic。
pub fn run_suite(suite: &TckSuite) {
    assert!(!suite.cases.is_empty(), "TCK 套件不应为空");
    for case in suite.cases {
        let outcome = panic::catch_unwind(panic::AssertUnwindSafe(|| (case.test)()));
        if let Err(payload) = outcome {
            support::panic_with_context(suite.name, case.name, payload);
        }
    }
}
