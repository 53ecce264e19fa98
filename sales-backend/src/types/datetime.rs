use chrono::{Datelike, Local, NaiveDate};

/// 画面・レスポンスで使う日付書式
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// サーバーのローカルタイムゾーンにおける今日の日付
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// 指定日と同じ年の1月1日
pub fn first_day_of_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
