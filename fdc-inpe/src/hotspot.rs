use chrono::{DateTime, NaiveDateTime};
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use serde::Deserialize;

use crate::error::{FeedError, Result};

/// Columns the loader needs from an INPE "focos abertos" CSV.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "data_hora_gmt",
    "lat",
    "lon",
    "pais",
    "estado",
    "municipio",
];

/// Layouts seen for `data_hora_gmt` in INPE feeds (all GMT). `%.f` also
/// matches a value without fractional seconds.
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Layouts carrying an explicit UTC offset, converted to GMT.
const OFFSET_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// A single detected thermal anomaly.
#[derive(Debug, Clone, PartialEq)]
pub struct HotspotRecord {
    /// Detection time in GMT
    pub timestamp: NaiveDateTime,
    pub latitude: f64,
    pub longitude: f64,
    pub country: String,
    /// State (`estado`)
    pub region: String,
    pub municipality: String,
}

/// Raw CSV row. Only the columns we use; everything else is ignored.
#[derive(Debug, Deserialize)]
struct RawHotspot {
    data_hora_gmt: String,
    lat: f64,
    lon: f64,
    pais: String,
    estado: String,
    municipio: String,
}

/// Parse a `data_hora_gmt` value.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    let naive = value.trim_end_matches('Z');
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(naive, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .or_else(|| {
                    OFFSET_TIMESTAMP_FORMATS
                        .iter()
                        .find_map(|fmt| DateTime::parse_from_str(value, fmt).ok())
                })
                .map(|dt| dt.naive_utc())
        })
}

impl TryFrom<RawHotspot> for HotspotRecord {
    type Error = String;

    fn try_from(raw: RawHotspot) -> std::result::Result<Self, Self::Error> {
        let timestamp = parse_timestamp(&raw.data_hora_gmt)
            .ok_or_else(|| format!("bad data_hora_gmt '{}'", raw.data_hora_gmt))?;
        if !raw.lat.is_finite() || !raw.lon.is_finite() {
            return Err(format!("bad coordinates {},{}", raw.lat, raw.lon));
        }
        Ok(HotspotRecord {
            timestamp,
            latitude: raw.lat,
            longitude: raw.lon,
            country: raw.pais,
            region: raw.estado,
            municipality: raw.municipio,
        })
    }
}

impl HotspotRecord {
    /// Parse an INPE CSV body into records, in feed order.
    ///
    /// Structural CSV problems and missing required columns fail the whole
    /// body. Rows whose timestamp or coordinates do not parse are skipped and
    /// reported with a single warning.
    pub fn request_to_records(request_body: &str) -> Result<Vec<HotspotRecord>> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(request_body.as_bytes());

        let headers = rdr.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(FeedError::MissingColumn(column.to_string()));
            }
        }

        let mut records = Vec::new();
        let mut skipped = 0usize;
        for (idx, row) in rdr.deserialize::<RawHotspot>().enumerate() {
            let raw = match row {
                Ok(raw) => raw,
                Err(e) if matches!(e.kind(), csv::ErrorKind::Deserialize { .. }) => {
                    debug!("skipping row {}: {}", idx + 1, e);
                    skipped += 1;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };
            match HotspotRecord::try_from(raw) {
                Ok(record) => records.push(record),
                Err(reason) => {
                    debug!("skipping row {}: {}", idx + 1, reason);
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            warn!("Skipped {} malformed hotspot rows", skipped);
        }
        Ok(records)
    }
}
