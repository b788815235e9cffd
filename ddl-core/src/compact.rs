//! 通用的 JSON 树压缩
//!
//! 递归删除空值（空字符串、`null`、空数组、空对象），
//! 与 DDL 语义无关，只处理 `serde_json::Value`。
//!
//! 返回值约定：
//! - `None` 表示“不存在”，和 `Value::Null` 不是一回事
//! - `Some(Cow::Borrowed(v))` 表示没有任何变化，`v` 就是传入的同一个引用
//! - `Some(Cow::Owned(v))` 表示生成了新的值

use serde_json::{Map, Value};
use std::borrow::Cow;

/// 压缩任意 JSON 值
///
/// 非容器的值原样返回（包括顶层的 `null` 和空字符串）。
/// 容器里的空值会被删除，删空的容器本身也变成 `None`。
pub fn compress(value: &Value) -> Option<Cow<'_, Value>> {
    match value {
        Value::Array(items) => compress_array(value, items),
        Value::Object(map) => compress_object(value, map),
        _ => Some(Cow::Borrowed(value)),
    }
}

/// 对拥有所有权的值进行压缩，没有变化时直接返回原值，不做拷贝
pub fn compress_owned(value: Value) -> Option<Value> {
    let replaced = match compress(&value)? {
        Cow::Borrowed(_) => None,
        Cow::Owned(compressed) => Some(compressed),
    };
    Some(replaced.unwrap_or(value))
}

/// 容器内部的单个成员：标量空值直接丢弃，其余递归压缩
fn compress_member(value: &Value) -> Option<Cow<'_, Value>> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        _ => compress(value),
    }
}

fn compress_array<'a>(original: &'a Value, items: &'a [Value]) -> Option<Cow<'a, Value>> {
    if items.is_empty() {
        return None;
    }

    let mut changed = false;
    let mut kept = Vec::with_capacity(items.len());
    for item in items {
        match compress_member(item) {
            Some(Cow::Borrowed(same)) => kept.push(Cow::Borrowed(same)),
            Some(replaced) => {
                changed = true;
                kept.push(replaced);
            }
            None => changed = true,
        }
    }

    if !changed {
        return Some(Cow::Borrowed(original));
    }
    if kept.is_empty() {
        return None;
    }
    Some(Cow::Owned(Value::Array(
        kept.into_iter().map(Cow::into_owned).collect(),
    )))
}

fn compress_object<'a>(original: &'a Value, map: &'a Map<String, Value>) -> Option<Cow<'a, Value>> {
    if map.is_empty() {
        return None;
    }

    let mut changed = false;
    let mut kept = Vec::with_capacity(map.len());
    for (key, item) in map {
        match compress_member(item) {
            Some(Cow::Borrowed(same)) => kept.push((key, Cow::Borrowed(same))),
            Some(replaced) => {
                changed = true;
                kept.push((key, replaced));
            }
            None => changed = true,
        }
    }

    if !changed {
        return Some(Cow::Borrowed(original));
    }
    if kept.is_empty() {
        return None;
    }
    let compressed: Map<String, Value> = kept
        .into_iter()
        .map(|(key, item)| (key.clone(), item.into_owned()))
        .collect();
    Some(Cow::Owned(Value::Object(compressed)))
}
