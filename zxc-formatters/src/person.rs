//! 姓名与出生日期
//!
//! 查询串形如 `"Doe John Michael 01.01.2000"`：姓、名、可选父名（不含数字才算），
//! 最后一个 token 若能解析为日期则作为出生日期。
//!
use crate::date::parse_date;
use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 年龄估算使用的固定年长（365 天），不考虑闰年
const SECONDS_IN_A_YEAR: i64 = 31_536_000;

/// 拆分后的姓名与出生日期
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameAndDob {
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub dob: Option<NaiveDate>,
}

/// 依次输出非空的姓、名、父名与 `dd.mm.yyyy` 格式的出生日期，以单个空格分隔
impl fmt::Display for NameAndDob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dob = self.dob.map(|d| d.format("%d.%m.%Y").to_string());
        let parts: Vec<&str> = [
            self.last_name.as_deref(),
            self.first_name.as_deref(),
            self.middle_name.as_deref(),
            dob.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect();
        f.write_str(&parts.join(" "))
    }
}

/// 首字母大写，其余小写
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// `"john doe"` → `"John Doe"`；连续空白折叠为单个空格
pub fn capitalize_each_word(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// 以当前本地时间估算年龄，见 [`estimate_person_age_at`]
pub fn estimate_person_age(person: &str) -> Option<String> {
    estimate_person_age_at(person, Local::now().naive_local())
}

/// 取最后一个 token 作为出生日期，返回 `"<N> y.o."`
///
/// 年龄 = 自出生当日零点起经过的秒数 / 365 天，向下取整。
/// 无 token 或日期无法解析时返回 `None`。
pub fn estimate_person_age_at(person: &str, now: NaiveDateTime) -> Option<String> {
    let dob = parse_date(person.split_whitespace().last()?)?;
    let elapsed = now - dob.and_hms_opt(0, 0, 0)?;
    let age = elapsed.num_seconds().div_euclid(SECONDS_IN_A_YEAR);
    Some(format!("{age} y.o."))
}

pub fn parse_name_and_dob(query: Option<&str>) -> NameAndDob {
    let tokens: Vec<&str> = query.unwrap_or_default().split_whitespace().collect();

    let middle_name = tokens
        .get(2)
        .filter(|token| !token.chars().any(|c| c.is_ascii_digit()))
        .map(|token| capitalize(token));

    NameAndDob {
        last_name: tokens.first().map(|token| capitalize(token)),
        first_name: tokens.get(1).map(|token| capitalize(token)),
        middle_name,
        dob: tokens.last().and_then(|token| parse_date(token)),
    }
}

/// 拼接为查询串；`None` 返回空串
pub fn format_name_and_dob(record: Option<&NameAndDob>) -> String {
    record.map(ToString::to_string).unwrap_or_default()
}

/// 先拆分再拼接，统一大小写与日期格式
pub fn reformat_name_and_dob(query: Option<&str>) -> String {
    format_name_and_dob(Some(&parse_name_and_dob(query)))
}
