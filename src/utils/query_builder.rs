//! 参数化 SQL 构建
//!
//! 列名只能来自实体的 `Column` 枚举，表名来自实体定义；
//! 所有值都以位置参数绑定，绝不拼接进 SQL 文本。

use sea_orm::{DbBackend, EntityTrait, IdenStatic, Statement, Value};
use std::fmt::Write;

/// 第 `index` 个（从 1 开始）位置参数的占位符
pub fn placeholder(backend: DbBackend, index: usize) -> String {
    match backend {
        DbBackend::Postgres => format!("${index}"),
        _ => "?".to_string(),
    }
}

fn table_name<E: EntityTrait>() -> String {
    E::default().table_name().to_string()
}

/// 列表查询构建器
///
/// 从恒真条件 `WHERE 1=1` 开始，按调用顺序为每个提供了值的过滤条件追加
/// `AND <column> = <placeholder>`，最后按 `created_at` 倒序。
pub struct FilterQuery<E: EntityTrait> {
    conditions: Vec<(E::Column, Value)>,
    order_by: E::Column,
}

impl<E: EntityTrait> FilterQuery<E> {
    pub fn new(order_by: E::Column) -> Self {
        Self {
            conditions: Vec::new(),
            order_by,
        }
    }

    /// 值为 `None` 时跳过该条件
    pub fn eq<V: Into<Value>>(mut self, column: E::Column, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.conditions.push((column, value.into()));
        }
        self
    }

    pub fn build(self, backend: DbBackend) -> Statement {
        let mut sql = format!("SELECT * FROM {} WHERE 1=1", table_name::<E>());
        let mut values = Vec::with_capacity(self.conditions.len());

        for (column, value) in self.conditions {
            values.push(value);
            let _ = write!(
                sql,
                " AND {} = {}",
                column.as_str(),
                placeholder(backend, values.len())
            );
        }

        let _ = write!(sql, " ORDER BY {} DESC", self.order_by.as_str());

        Statement::from_sql_and_values(backend, sql, values)
    }
}

enum Assignment<C> {
    // <column> = COALESCE(<placeholder>, <column>)
    KeepUnlessSet(C, Value),
    // <column> = <placeholder>
    Overwrite(C, Value),
}

/// 部分更新构建器
///
/// 每个可更新列都会出现在 SET 子句中；传入 null 时 COALESCE 回退到原值，
/// 因此“未提供”和“显式 null”的效果相同，都是保留原值。
/// 生成的语句以 `RETURNING *` 结尾，命中 0 行即表示记录不存在。
pub struct UpdateQuery<E: EntityTrait> {
    assignments: Vec<Assignment<E::Column>>,
    key: (E::Column, Value),
}

impl<E: EntityTrait> UpdateQuery<E> {
    pub fn new<V: Into<Value>>(key_column: E::Column, key: V) -> Self {
        Self {
            assignments: Vec::new(),
            key: (key_column, key.into()),
        }
    }

    pub fn coalesce<V: Into<Value>>(mut self, column: E::Column, value: V) -> Self {
        self.assignments
            .push(Assignment::KeepUnlessSet(column, value.into()));
        self
    }

    pub fn set<V: Into<Value>>(mut self, column: E::Column, value: V) -> Self {
        self.assignments
            .push(Assignment::Overwrite(column, value.into()));
        self
    }

    pub fn build(self, backend: DbBackend) -> Statement {
        let mut values = Vec::with_capacity(self.assignments.len() + 1);
        let mut clauses = Vec::with_capacity(self.assignments.len());

        for assignment in self.assignments {
            match assignment {
                Assignment::KeepUnlessSet(column, value) => {
                    values.push(value);
                    clauses.push(format!(
                        "{col} = COALESCE({}, {col})",
                        placeholder(backend, values.len()),
                        col = column.as_str()
                    ));
                }
                Assignment::Overwrite(column, value) => {
                    values.push(value);
                    clauses.push(format!(
                        "{} = {}",
                        column.as_str(),
                        placeholder(backend, values.len())
                    ));
                }
            }
        }

        let (key_column, key) = self.key;
        values.push(key);
        let sql = format!(
            "UPDATE {} SET {} WHERE {} = {} RETURNING *",
            table_name::<E>(),
            clauses.join(", "),
            key_column.as_str(),
            placeholder(backend, values.len())
        );

        Statement::from_sql_and_values(backend, sql, values)
    }
}
