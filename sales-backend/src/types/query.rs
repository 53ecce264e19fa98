use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::datetime::{first_day_of_year, DATE_FORMAT};

/// 空文字列を None として扱う日付のデシリアライズ
/// （検索フォームは未入力の項目を `min_date=` として送ってくる）
fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("Invalid date '{}', expected YYYY-MM-DD", s))),
    }
}

/// 売上検索の期間クエリパラメータ
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DateRangeQuery {
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub min_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub max_date: Option<NaiveDate>,
}

impl DateRangeQuery {
    /// 未指定の境界を既定値で補う
    ///
    /// 下限は今年の1月1日、上限は今日。
    pub fn resolve(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let min_date = self.min_date.unwrap_or_else(|| first_day_of_year(today));
        let max_date = self.max_date.unwrap_or(today);
        (min_date, max_date)
    }
}
