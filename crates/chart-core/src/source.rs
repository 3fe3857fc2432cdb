// File: crates/chart-core/src/source.rs
// Summary: Row sources (CSV, JSON view documents, in-memory) behind one query interface.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, Result};
use crate::series::{parse_cell, parse_date, Row};

/// Filter and paging parameters for a forecast view.
///
/// `scope`, `model` and `forecast_id` address a remote view and are passed
/// through untouched; file sources ignore them. `series` selects rows whose
/// `series` column matches, when the source has one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewQuery {
    pub scope: String,
    pub model: String,
    pub series: String,
    pub forecast_id: Option<i64>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    /// 1-based page number.
    pub page: usize,
    pub page_size: usize,
}

impl Default for ViewQuery {
    fn default() -> Self {
        Self {
            scope: "global".into(),
            model: String::new(),
            series: String::new(),
            forecast_id: None,
            date_from: None,
            date_to: None,
            page: 1,
            page_size: 20_000,
        }
    }
}

impl ViewQuery {
    pub fn between(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.date_from = from;
        self.date_to = to;
        self
    }

    /// A row tagged `tag` belongs to the view; untagged rows always do.
    pub fn selects_series(&self, tag: Option<&str>) -> bool {
        self.series.is_empty() || tag.map_or(true, |t| t.trim() == self.series)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.date_from.map_or(true, |f| date >= f) && self.date_to.map_or(true, |t| date <= t)
    }

    /// Keep rows inside the date window, then cut out the requested page.
    /// Paging follows source order; the composer sorts afterwards.
    pub fn apply(&self, rows: Vec<Row>) -> Vec<Row> {
        let skip = self.page.saturating_sub(1).saturating_mul(self.page_size);
        rows.into_iter()
            .filter(|r| self.contains(r.date))
            .skip(skip)
            .take(self.page_size)
            .collect()
    }
}

/// Supplies rows already shaped as date + numeric fields.
pub trait RowSource {
    fn query(&self, q: &ViewQuery) -> Result<Vec<Row>>;
}

/// Fixed rows, e.g. test fixtures or caller-supplied data.
#[derive(Clone, Debug, Default)]
pub struct InMemoryRowSource {
    pub rows: Vec<Row>,
}

impl InMemoryRowSource {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }
}

impl RowSource for InMemoryRowSource {
    fn query(&self, q: &ViewQuery) -> Result<Vec<Row>> {
        Ok(q.apply(self.rows.clone()))
    }
}

/// CSV with a header row. A `date` column is required (`time`, `timestamp`
/// and `day` are accepted too); every other column becomes a series key.
#[derive(Clone, Debug)]
pub struct CsvRowSource {
    path: PathBuf,
}

impl CsvRowSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RowSource for CsvRowSource {
    fn query(&self, q: &ViewQuery) -> Result<Vec<Row>> {
        let rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_path(&self.path)?;
        let rows = read_csv_for(rdr, q)?;
        debug!(path = %self.path.display(), rows = rows.len(), "loaded csv rows");
        Ok(q.apply(rows))
    }
}

/// Column naming the series a row belongs to.
const SERIES_COLUMN: &str = "series";

/// Parse rows from any CSV reader.
pub fn read_csv<R: std::io::Read>(rdr: csv::Reader<R>) -> Result<Vec<Row>> {
    read_csv_for(rdr, &ViewQuery::default())
}

/// Parse rows, keeping only those in `q`'s series (date window and paging
/// are left to [`ViewQuery::apply`]).
pub fn read_csv_for<R: std::io::Read>(mut rdr: csv::Reader<R>, q: &ViewQuery) -> Result<Vec<Row>> {
    let headers = rdr.headers()?.iter().map(str::to_string).collect::<Vec<_>>();
    let series_idx = headers.iter().position(|h| h.eq_ignore_ascii_case(SERIES_COLUMN));
    let date_idx = headers
        .iter()
        .position(|h| ["date", "time", "timestamp", "day"].contains(&h.to_lowercase().as_str()))
        .ok_or_else(|| ChartError::InvalidRow { line: 1, reason: "no date column in header".into() })?;

    let mut out = Vec::new();
    for (i, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let line = i + 2;
        if !q.selects_series(series_idx.and_then(|ix| rec.get(ix))) {
            continue;
        }
        let raw = rec.get(date_idx).unwrap_or_default();
        let date = parse_date(raw)
            .ok_or_else(|| ChartError::InvalidRow { line, reason: format!("unparseable date '{raw}'") })?;
        let mut row = Row::new(date);
        for (ix, h) in headers.iter().enumerate() {
            if ix == date_idx || Some(ix) == series_idx { continue; }
            row.values.insert(h.clone(), rec.get(ix).and_then(parse_cell));
        }
        out.push(row);
    }
    Ok(out)
}

/// A view response: `{ "rows": [...] }` or a bare array of rows.
#[derive(Deserialize)]
#[serde(untagged)]
enum ViewDocument<T> {
    Wrapped { rows: Vec<T> },
    Bare(Vec<T>),
}

impl<T> ViewDocument<T> {
    fn into_rows(self) -> Vec<T> {
        match self {
            ViewDocument::Wrapped { rows } | ViewDocument::Bare(rows) => rows,
        }
    }
}

/// Parse a JSON view document.
pub fn read_json(text: &str) -> Result<Vec<Row>> {
    read_json_for(text, &ViewQuery::default())
}

/// Parse a JSON view document, keeping only rows in `q`'s series.
pub fn read_json_for(text: &str, q: &ViewQuery) -> Result<Vec<Row>> {
    if q.series.is_empty() {
        let doc: ViewDocument<Row> = serde_json::from_str(text)?;
        return Ok(doc.into_rows());
    }
    let doc: ViewDocument<serde_json::Map<String, serde_json::Value>> = serde_json::from_str(text)?;
    doc.into_rows()
        .into_iter()
        .filter(|obj| q.selects_series(obj.get(SERIES_COLUMN).and_then(|v| v.as_str())))
        .map(|mut obj| -> Result<Row> {
            obj.remove(SERIES_COLUMN);
            Ok(serde_json::from_value(serde_json::Value::Object(obj))?)
        })
        .collect()
}

#[derive(Clone, Debug)]
pub struct JsonRowSource {
    path: PathBuf,
}

impl JsonRowSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RowSource for JsonRowSource {
    fn query(&self, q: &ViewQuery) -> Result<Vec<Row>> {
        let text = std::fs::read_to_string(&self.path)?;
        let rows = read_json_for(&text, q)?;
        debug!(path = %self.path.display(), rows = rows.len(), "loaded json rows");
        Ok(q.apply(rows))
    }
}

/// Pick a source by file extension (`.json` → JSON, anything else → CSV).
pub fn source_for_path(path: impl Into<PathBuf>) -> Box<dyn RowSource> {
    let path = path.into();
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    if is_json {
        Box::new(JsonRowSource::new(path))
    } else {
        Box::new(CsvRowSource::new(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    #[test]
    fn csv_rows_keep_blanks_as_missing() {
        let data = "date,actual,TSF\n2025-01-02,12,\n2025-01-01,10,9.5\n";
        let rows = read_csv(csv::Reader::from_reader(data.as_bytes())).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, day(2));
        assert_eq!(rows[0].get("actual"), Some(12.0));
        assert_eq!(rows[0].get("TSF"), None);
        assert!(rows[0].values.contains_key("TSF"));
        assert_eq!(rows[1].get("TSF"), Some(9.5));
    }

    #[test]
    fn csv_without_date_column_is_rejected() {
        let data = "actual\n1\n";
        let err = read_csv(csv::Reader::from_reader(data.as_bytes())).unwrap_err();
        assert!(matches!(err, ChartError::InvalidRow { line: 1, .. }));
    }

    #[test]
    fn csv_bad_date_reports_line() {
        let data = "date,v\n2025-01-01,1\nsoon,2\n";
        let err = read_csv(csv::Reader::from_reader(data.as_bytes())).unwrap_err();
        assert!(matches!(err, ChartError::InvalidRow { line: 3, .. }));
    }

    #[test]
    fn json_accepts_wrapped_and_bare_documents() {
        let wrapped = read_json(r#"{"rows":[{"date":"2025-01-01","actual":1}]}"#).unwrap();
        let bare = read_json(r#"[{"date":"2025-01-01","actual":1}]"#).unwrap();
        assert_eq!(wrapped, bare);
        assert!(read_json(r#"{"rows":"nope"}"#).is_err());
    }

    #[test]
    fn series_column_selects_rows() {
        let q = ViewQuery { series: "SKU-1".into(), ..ViewQuery::default() };

        let data = "date,series,actual\n2025-01-01,SKU-1,1\n2025-01-01,SKU-2,9\n2025-01-02,SKU-1,2\n";
        let rows = read_csv_for(csv::Reader::from_reader(data.as_bytes()), &q).unwrap();
        let got: Vec<f64> = rows.iter().filter_map(|r| r.get("actual")).collect();
        assert_eq!(got, vec![1.0, 2.0]);
        assert!(!rows[0].values.contains_key("series"));

        let json = r#"{"rows":[
            {"date":"2025-01-01","series":"SKU-2","actual":9},
            {"date":"2025-01-02","series":"SKU-1","actual":2}
        ]}"#;
        let rows = read_json_for(json, &q).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("actual"), Some(2.0));
        assert!(!rows[0].values.contains_key("series"));

        // no series column: nothing to filter on
        let plain = read_csv_for(csv::Reader::from_reader("date,actual\n2025-01-01,1\n".as_bytes()), &q).unwrap();
        assert_eq!(plain.len(), 1);
    }

    #[test]
    fn query_filters_dates_and_pages() {
        let rows: Vec<Row> = (1..=10).map(|d| Row::new(day(d)).with("v", d as f64)).collect();
        let src = InMemoryRowSource::new(rows);

        let q = ViewQuery::default().between(Some(day(3)), Some(day(8)));
        assert_eq!(src.query(&q).unwrap().len(), 6);

        let paged = ViewQuery { page: 2, page_size: 4, ..ViewQuery::default() };
        let got: Vec<f64> = src.query(&paged).unwrap().iter().filter_map(|r| r.get("v")).collect();
        assert_eq!(got, vec![5.0, 6.0, 7.0, 8.0]);
    }
}
