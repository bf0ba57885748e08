//! 请求参数反序列化辅助函数

use serde::{Deserialize, Deserializer};

/// 查询字符串中的可选整数：缺省或空字符串都视为未提供
pub fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{Error, Unexpected, Visitor};
    use std::fmt;

    struct OptionalI64Visitor;

    impl<'de> Visitor<'de> for OptionalI64Visitor {
        type Value = Option<i64>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or a string containing an integer")
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(None)
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(Some(value))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            if value <= i64::MAX as u64 {
                Ok(Some(value as i64))
            } else {
                Err(Error::invalid_value(Unexpected::Unsigned(value), &self))
            }
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse()
                .map(Some)
                .map_err(|_| Error::invalid_value(Unexpected::Str(value), &self))
        }
    }

    deserializer.deserialize_any(OptionalI64Visitor)
}

/// 查询字符串中的可选文本：空字符串视为未提供
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// 区分“字段缺失”与“字段为 null”：
/// 配合 `#[serde(default)]` 使用，缺失得到 `None`，显式 null 得到 `Some(None)`
pub fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Filters {
        #[serde(default, deserialize_with = "deserialize_optional_i64")]
        student_id: Option<i64>,
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        term: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(default, deserialize_with = "deserialize_present")]
        score: Option<Option<f64>>,
    }

    #[test]
    fn test_empty_query_values_are_absent() {
        let filters: Filters = serde_json::from_str(r#"{"student_id": "", "term": ""}"#).unwrap();
        assert_eq!(filters.student_id, None);
        assert_eq!(filters.term, None);
    }

    #[test]
    fn test_query_integer_from_string() {
        let filters: Filters = serde_json::from_str(r#"{"student_id": "42"}"#).unwrap();
        assert_eq!(filters.student_id, Some(42));
        assert_eq!(filters.term, None);
    }

    #[test]
    fn test_query_integer_rejects_garbage() {
        assert!(serde_json::from_str::<Filters>(r#"{"student_id": "abc"}"#).is_err());
    }

    #[test]
    fn test_missing_and_null_are_distinct() {
        let missing: Body = serde_json::from_str("{}").unwrap();
        let null: Body = serde_json::from_str(r#"{"score": null}"#).unwrap();
        let zero: Body = serde_json::from_str(r#"{"score": 0}"#).unwrap();
        assert_eq!(missing.score, None);
        assert_eq!(null.score, Some(None));
        assert_eq!(zero.score, Some(Some(0.0)));
    }
}
