//! 金额与文本字段的存储约束
//!
//! 与 migrations 中的 `NUMERIC(19, 2)`、`VARCHAR(255)` 列保持一致

use rust_decimal::{Decimal, RoundingStrategy};

/// 金额小数位数
pub const MONEY_SCALE: u32 = 2;

/// 金额绝对值上限（不含），`NUMERIC(19, 2)` 的整数部分最多 17 位
pub const MONEY_LIMIT: i64 = 100_000_000_000_000_000;

/// `VARCHAR(255)` 列的最大字符数
pub const MAX_TEXT_LEN: usize = 255;

/// 按存储精度规整金额
///
/// 四舍五入（远离零）到两位小数，与 PostgreSQL 写入 NUMERIC 时的舍入一致；
/// 超出 `MONEY_LIMIT` 返回 None
pub fn normalize_money(amount: Decimal) -> Option<Decimal> {
    let rounded = amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    (rounded.abs() < Decimal::from(MONEY_LIMIT)).then_some(rounded)
}

/// 按字符数判断是否超出 `VARCHAR(255)`
pub fn exceeds_text_limit(value: &str) -> bool {
    value.chars().count() > MAX_TEXT_LEN
}
