//! prism 值强制转换契约测试套件（TCK）入口。
//!
//! # 教案式综述（Why / How / What）
//! - **为什么存在**：值强制转换契约（同一性、枚举擦除、空值分流、可选收窄、聚合跨表示）
//!   是编解码实现必须满足的行为准绳；将矩阵下沉为独立 crate，任何实现都能按统一标准自测。
//! - **如何集成**：在实现仓库的 `tests` 目录下直接调用 `run_all`（或按主题调用 `run_*`
//!   入口函数），即可将完整矩阵编译为标准的 Rust 测试。
//! - **测试对象**：所有用例均以 `prism-core` 暴露的边界（`ObjectEncoder`/`ObjectDecoder`）
//!   为准绳，由往返执行器驱动 `prism-codec-bin` 完成“编码一次、独立解码两次”的试验，
//!   并与期望求解器（[`prism_core::erased_expectation`]）及字面期望常量比对。
//!
//! # 契约说明（What）
//! - **输入要求**：调用方仅需在构建时依赖本 crate；用例自带夹具与传输，无环境前置。
//! - **输出保证**：若全部用例通过，可确信实现满足规则表 1–6 的全部显式约束，
//!   包括三个具体场景（根位置枚举擦除为数值 0、字符字段到可选整数缺席、
//!   空字段到非可选整数落零）。
//!
//! # 风险提示（Trade-offs）
//! - 套件使用 `futures` 的本地执行器驱动异步边界；实现方若绑定特定运行时，
//!   需自行确认两者行为一致。
//!
//! # 模块结构
//! - `case` 模块：定义测试用例与套件的元信息结构体，以及统一的执行辅助函数。
//! - `executor` 模块：往返执行器；`fixtures` 模块：矩阵夹具。
//! - 子模块 `identity`、`erasure`、`nullability`、`optionals`、`aggregates`
//!   分别实现五大主题的实际断言逻辑。

mod aggregates;
mod case;
mod erasure;
mod executor;
mod fixtures;
mod identity;
mod nullability;
mod optionals;
mod support;

pub use executor::{round_trip, round_trip_value};
pub use fixtures::{
    ACTION_SHAPE, Action, DocBlock, DocRecord, OFFSET_SHAPE, Offset, PRIORITY_SHAPE, Priority,
    WITNESS_MILLIS,
};

use case::{TckSuite, run_suite};

const ALL_SUITES: [&TckSuite; 5] = [
    identity::suite(),
    erasure::suite(),
    nullability::suite(),
    optionals::suite(),
    aggregates::suite(),
];

/// 顺序执行全部主题套件；任一用例失败即带上下文 panic。
pub fn run_all() {
    for suite in ALL_SUITES {
        run_suite(suite);
    }
}

/// 执行“同一性”主题套件。
pub fn run_identity() {
    run_suite(identity::suite());
}

/// 执行“枚举擦除”主题套件。
pub fn run_erasure() {
    run_suite(erasure::suite());
}

/// 执行“空值分流”主题套件。
pub fn run_nullability() {
    run_suite(nullability::suite());
}

/// 执行“可选目标”主题套件。
pub fn run_optionals() {
    run_suite(optionals::suite());
}

/// 执行“聚合体”主题套件。
pub fn run_aggregates() {
    run_suite(aggregates::suite());
}
