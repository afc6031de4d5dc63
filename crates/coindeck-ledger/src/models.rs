use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use sqlx::FromRow;

/// One completed CSV export, immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct DownloadRecord {
    /// Storage rowid, ascending with insertion order.
    pub id: i64,
    /// UUID v4 assigned at insert time.
    pub download_id: String,
    pub filename: String,
    #[serde(serialize_with = "serialize_download_time")]
    pub download_time: DateTime<Utc>,
    /// Byte length of the produced CSV body.
    pub file_size: i64,
    /// Number of price records in the export that produced this row.
    pub crypto_count: i64,
}

/// History API wire format: `"YYYY-MM-DD HH:MM:SS UTC"`.
fn serialize_download_time<S>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("{} UTC", time.format("%Y-%m-%d %H:%M:%S")))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn download_time_serializes_with_utc_suffix() {
        let record = DownloadRecord {
            id: 1,
            download_id: String::from("3e2f8a4c-0000-4000-8000-000000000000"),
            filename: String::from("crypto_prices_20260314_092653.csv"),
            download_time: Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap(),
            file_size: 812,
            crypto_count: 10,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["download_time"], "2026-03-14 09:26:53 UTC");
        assert_eq!(json["file_size"], 812);
        assert_eq!(json["crypto_count"], 10);
    }
}
