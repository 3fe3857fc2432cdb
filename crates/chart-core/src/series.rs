// File: crates/chart-core/src/series.rs
// Summary: Dated rows and the line/band series descriptors that select values from them.
// Notes:
// - Rows keep an open key -> value mapping; absent keys, nulls and
//   non-finite numbers all read back as "missing".

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate};
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::theme::Color;

/// One dated observation with any number of named numeric fields.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "RawRow")]
pub struct Row {
    pub date: NaiveDate,
    pub values: BTreeMap<String, Option<f64>>,
}

impl Row {
    pub fn new(date: NaiveDate) -> Self {
        Self { date, values: BTreeMap::new() }
    }

    /// Builder-style setter; `None` records an explicit missing value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Option<f64>>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Finite value under `key`, if any.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied().flatten().filter(|v| v.is_finite())
    }

    /// Horizontal coordinate: day number since the common era.
    pub fn day(&self) -> f64 {
        f64::from(self.date.num_days_from_ce())
    }
}

/// Parse a calendar day from `YYYY-MM-DD` or an RFC 3339 timestamp (UTC day).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_utc().date())
}

/// Parse a CSV/JSON cell into a value; anything non-numeric is missing.
pub fn parse_cell(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCell {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

impl RawCell {
    fn value(self) -> Option<f64> {
        match self {
            RawCell::Number(v) => Some(v).filter(|v| v.is_finite()),
            RawCell::Text(s) => parse_cell(&s),
            RawCell::Other(_) => None,
        }
    }
}

#[derive(Deserialize)]
struct RawRow {
    date: String,
    #[serde(flatten)]
    fields: BTreeMap<String, RawCell>,
}

impl TryFrom<RawRow> for Row {
    type Error = String;

    fn try_from(raw: RawRow) -> std::result::Result<Self, Self::Error> {
        let date = parse_date(&raw.date).ok_or_else(|| format!("unparseable date '{}'", raw.date))?;
        let values = raw.fields.into_iter().map(|(k, v)| (k, v.value())).collect();
        Ok(Self { date, values })
    }
}

/// What a line represents; drives its default styling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesRole {
    Actual,
    Forecast,
    #[default]
    Other,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    pub key: String,
    #[serde(default, alias = "kind")]
    pub role: SeriesRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashed: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BandSeries {
    #[serde(alias = "lowKey")]
    pub low_key: String,
    #[serde(alias = "highKey")]
    pub high_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

/// How to draw one series of a chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SeriesDescriptor {
    Line(LineSeries),
    Band(BandSeries),
}

impl SeriesDescriptor {
    pub fn line(key: impl Into<String>, role: SeriesRole) -> Self {
        Self::Line(LineSeries { key: key.into(), role, color: None, dashed: None })
    }

    pub fn actual(key: impl Into<String>) -> Self {
        Self::line(key, SeriesRole::Actual)
    }

    pub fn forecast(key: impl Into<String>) -> Self {
        Self::line(key, SeriesRole::Forecast)
    }

    pub fn band(low_key: impl Into<String>, high_key: impl Into<String>) -> Self {
        Self::Band(BandSeries { low_key: low_key.into(), high_key: high_key.into(), color: None })
    }

    pub fn with_color(mut self, c: Color) -> Self {
        match &mut self {
            Self::Line(l) => l.color = Some(c),
            Self::Band(b) => b.color = Some(c),
        }
        self
    }

    /// Only meaningful for lines; bands are never stroked.
    pub fn with_dashed(mut self, dashed: bool) -> Self {
        if let Self::Line(l) = &mut self {
            l.dashed = Some(dashed);
        }
        self
    }

    /// Row keys this descriptor reads.
    pub fn keys(&self) -> Vec<&str> {
        match self {
            Self::Line(l) => vec![l.key.as_str()],
            Self::Band(b) => vec![b.low_key.as_str(), b.high_key.as_str()],
        }
    }

    /// Reject descriptors that do not name the row fields they draw.
    pub fn validate(&self, index: usize) -> Result<()> {
        match self {
            Self::Line(l) if l.key.trim().is_empty() => {
                Err(ChartError::descriptor(index, "line series needs a non-empty key"))
            }
            Self::Band(b) if b.low_key.trim().is_empty() || b.high_key.trim().is_empty() => {
                Err(ChartError::descriptor(index, "band series needs both low and high keys"))
            }
            Self::Band(b) if b.low_key == b.high_key => Err(ChartError::descriptor(
                index,
                format!("band low and high keys are both '{}'", b.low_key),
            )),
            _ => Ok(()),
        }
    }
}
