//! 格式化工具（zxc-formatters）
//!
//! 与服务框架相互独立的一组纯函数：
//! - `date`：日期/时间展示格式，缺失时输出 `"No data"`
//! - `person`：姓名首字母大写、按出生日期估算年龄、“姓 名 父名 出生日期”查询串的拆分与拼接
//!
pub mod date;
pub mod person;

pub use date::{NO_DATA, format_date, format_date_time, parse_date};
pub use person::{
    NameAndDob, capitalize_each_word, estimate_person_age, estimate_person_age_at,
    format_name_and_dob, parse_name_and_dob, reformat_name_and_dob,
};
