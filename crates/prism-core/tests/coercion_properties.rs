//! 强制转换规则表的性质验证。
//!
//! # 教案级注释概览
//!
//! - **核心目标 (Why)**：同一性律、嵌入无损性与求解器幂等性是规则表的三条全称性质，
//!   枚举式用例只能覆盖有限样本；此处用 Proptest 对随机值空间做性质断言，
//!   防止新表项破坏既有格结构。
//! - **设计手法 (How)**：生成器直接产出标量 [`Value`]；每条性质映射规则表的一条契约：
//!   1. 同类别 `coerce` 恒等（规则 1）；
//!   2. 凡 [`scalar_cast`] 返回 `Some`，数值在 `i128`/`f64` 视角下保持不变（规则 5 的无损性）;
//!   3. [`erased_expectation`] 幂等——擦除后的值再擦除一次不再变化。
//! - **合同 (What)**：性质失败即规则表违约，Proptest 会给出最小反例值。

use proptest::prelude::*;

use prism_core::{
    IntKind, IntScalar, ScalarKind, Shape, Value, coerce, erased_expectation, scalar_cast,
};

fn scalar_values() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        any::<i8>().prop_map(Value::I8),
        any::<i16>().prop_map(Value::I16),
        any::<i32>().prop_map(Value::I32),
        any::<i64>().prop_map(Value::I64),
        any::<u8>().prop_map(Value::U8),
        any::<u16>().prop_map(Value::U16),
        any::<u32>().prop_map(Value::U32),
        any::<u64>().prop_map(Value::U64),
        any::<char>().prop_map(Value::Char),
        "[a-z]{0,12}".prop_map(Value::Str),
    ]
}

fn scalar_kind_of(value: &Value) -> ScalarKind {
    match value {
        Value::Bool(_) => ScalarKind::Bool,
        Value::I8(_) => ScalarKind::I8,
        Value::I16(_) => ScalarKind::I16,
        Value::I32(_) => ScalarKind::I32,
        Value::I64(_) => ScalarKind::I64,
        Value::U8(_) => ScalarKind::U8,
        Value::U16(_) => ScalarKind::U16,
        Value::U32(_) => ScalarKind::U32,
        Value::U64(_) => ScalarKind::U64,
        Value::F32(_) => ScalarKind::F32,
        Value::F64(_) => ScalarKind::F64,
        Value::Char(_) => ScalarKind::Char,
        Value::Str(_) => ScalarKind::Str,
        other => panic!("生成器不应产出 {other:?}"),
    }
}

fn numeric_view(value: &Value) -> Option<f64> {
    match value {
        Value::I8(v) => Some(f64::from(*v)),
        Value::I16(v) => Some(f64::from(*v)),
        Value::I32(v) => Some(f64::from(*v)),
        Value::U8(v) => Some(f64::from(*v)),
        Value::U16(v) => Some(f64::from(*v)),
        Value::U32(v) => Some(f64::from(*v)),
        Value::F32(v) => Some(f64::from(*v)),
        Value::F64(v) => Some(*v),
        _ => None,
    }
}

fn wide_int_view(value: &Value) -> Option<i128> {
    match value {
        Value::I8(v) => Some(i128::from(*v)),
        Value::I16(v) => Some(i128::from(*v)),
        Value::I32(v) => Some(i128::from(*v)),
        Value::I64(v) => Some(i128::from(*v)),
        Value::U8(v) => Some(i128::from(*v)),
        Value::U16(v) => Some(i128::from(*v)),
        Value::U32(v) => Some(i128::from(*v)),
        Value::U64(v) => Some(i128::from(*v)),
        _ => None,
    }
}

const ALL_KINDS: [ScalarKind; 13] = [
    ScalarKind::Bool,
    ScalarKind::I8,
    ScalarKind::I16,
    ScalarKind::I32,
    ScalarKind::I64,
    ScalarKind::U8,
    ScalarKind::U16,
    ScalarKind::U32,
    ScalarKind::U64,
    ScalarKind::F32,
    ScalarKind::F64,
    ScalarKind::Char,
    ScalarKind::Str,
];

proptest! {
    /// 规则 1：同类别目标下值保持不变。
    #[test]
    fn identity_law_over_random_scalars(value in scalar_values()) {
        let shape = Shape::Scalar(scalar_kind_of(&value));
        prop_assert_eq!(coerce(&value, &shape).unwrap(), value);
    }

    /// 规则 5：凡转换表宣称定义良好，数值必须无损。
    #[test]
    fn defined_casts_are_lossless(value in scalar_values()) {
        for kind in ALL_KINDS {
            if let Some(cast) = scalar_cast(&value, kind) {
                match (wide_int_view(&value), wide_int_view(&cast)) {
                    (Some(before), Some(after)) => prop_assert_eq!(before, after),
                    _ => {
                        if let (Some(before), Some(after)) =
                            (numeric_view(&value), numeric_view(&cast))
                        {
                            prop_assert_eq!(before, after);
                        } else {
                            // 非数值类别只允许恒等表项。
                            prop_assert_eq!(&cast, &value);
                        }
                    }
                }
            }
        }
    }

    /// 擦除求解器幂等：已擦除的值再求解一次不再变化。
    #[test]
    fn resolver_is_idempotent_over_scalars(value in scalar_values()) {
        let once = erased_expectation(&value);
        prop_assert_eq!(erased_expectation(&once), once);
    }

    /// 枚举擦除值与底层数值逐类别一致。
    #[test]
    fn enum_erasure_matches_underlying(raw in any::<i8>()) {
        let repr = IntScalar::from_raw(IntKind::I8, i128::from(raw));
        prop_assert_eq!(prism_core::erase_enum(repr), Value::I8(raw));
    }
}
