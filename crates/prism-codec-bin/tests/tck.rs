//! 使用 `prism-contract-tests` 对二进制实现做值强制转换契约回归。
//!
//! # 教案式说明
//! - **Why**：确保 `prism-codec-bin` 在同一性、枚举擦除、空值分流、可选收窄与聚合跨表示
//!   五大主题上的行为不会被回归。
//! - **How**：直接调用 TCK 暴露的 `run_*` 入口函数，由套件维护详细校验逻辑。
//! - **What**：若断言失败，将 panic 并给出“套件/用例”上下文，提示实现者修复。

/// 同类别往返必须保持值不变，且满足幂等律。
#[test]
fn tck_identity() {
    prism_contract_tests::run_identity();
}

/// 枚举擦除为底层数值、具型解码还原符号成员。
#[test]
fn tck_erasure() {
    prism_contract_tests::run_erasure();
}

/// 空/缺席按值语义或引用/可选语义分流。
#[test]
fn tck_nullability() {
    prism_contract_tests::run_nullability();
}

/// 可选目标下定义良好的转换产出值，未定义的转换产出缺席。
#[test]
fn tck_optionals() {
    prism_contract_tests::run_optionals();
}

/// 聚合体跨表示解码、嵌套与缺席语义。
#[test]
fn tck_aggregates() {
    prism_contract_tests::run_aggregates();
}
