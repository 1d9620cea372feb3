use chrono::{NaiveDate, NaiveDateTime};

/// 值缺失时的占位文本
pub const NO_DATA: &str = "No data";

/// 出生日期等查询串中接受的日期格式，按顺序尝试
const DATE_FORMATS: &[&str] = &["%d.%m.%Y", "%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%Y.%m.%d"];

/// `05 Oct 2023`
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%d %b %Y").to_string(),
        None => NO_DATA.to_string(),
    }
}

/// `October 05, 2023 14:30:00`
pub fn format_date_time(time: Option<NaiveDateTime>) -> String {
    match time {
        Some(time) => time.format("%B %d, %Y %H:%M:%S").to_string(),
        None => NO_DATA.to_string(),
    }
}

/// 解析单个日期 token，无法识别时返回 `None`
pub fn parse_date(token: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(token, fmt).ok())
}
