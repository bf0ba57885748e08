use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// 保留两位小数（四舍五入，远离零）
///
/// 按浮点数的最短十进制表示取整，与数据库对 numeric 的 ROUND 一致。
/// NaN 与无穷大原样返回。
pub fn round_to_hundredths(value: f64) -> f64 {
    Decimal::from_str(&value.to_string())
        .ok()
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}
