//! 类型擦除往返的期望求解器。
//!
//! ## 模块目的（Why）
//! - 给定源值及其静态类型信息，纯函数地计算“完全类型擦除的往返必须产出什么”；
//!   测试矩阵以它为预言机，与擦除解码结果做相等性比较。
//!
//! ## 契约说明（What）
//! - 只应用擦除规则：枚举走 [`erase_enum`]（规则 2），其余走同一性（规则 1）；
//!   规则 3–6 与此无关，因为擦除目标没有任何声明形状可言。
//! - 嵌套位置与根位置的解析完全一致：聚合字段中的值按独立根值同样求解，
//!   外层聚合自身的身份与形状绝不改变。

use crate::coerce::erase_enum;
use crate::value::{Record, Value};

/// 计算源值在完全类型擦除往返后的期望值。
pub fn erased_expectation(source: &Value) -> Value {
    match source {
        Value::Enum(member) => erase_enum(member.repr()),
        Value::Optional(None) => Value::Null,
        Value::Optional(Some(inner)) => erased_expectation(inner),
        Value::Record(record) => {
            let mut fields = Record::new();
            for (name, value) in record.fields() {
                fields.insert(name.clone(), erased_expectation(value));
            }
            Value::Record(fields)
        }
        other => other.clone(),
    }
}
