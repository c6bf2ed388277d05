//! Step 3: assemble the markdown report.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::model::{ReportDocument, WeatherSnapshot};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render the report for one snapshot at `generated_at`.
pub fn build_document(
    snapshot: &WeatherSnapshot,
    city_label: &str,
    generated_at: NaiveDateTime,
    zone_label: &str,
) -> ReportDocument {
    let summary = snapshot.summary(city_label);
    let content = render_report(city_label, &summary, generated_at, zone_label);
    debug!(%content, "rendered report");

    ReportDocument { content, generated_at }
}

pub fn render_report(
    city_label: &str,
    summary: &str,
    generated_at: NaiveDateTime,
    zone_label: &str,
) -> String {
    let now = generated_at.format(TIMESTAMP_FORMAT);

    format!(
        "
# Weather API Status

이 리포지토리는 OpenWeather API를 사용하여 {city_label}의 날씨 정보를 자동으로 업데이트합니다.

## 현재 {city_label} 날씨
> {summary}

⏳ 업데이트 시간: {now} ({zone_label})

---
자동 업데이트 봇에 의해 관리됩니다.
"
    )
}
