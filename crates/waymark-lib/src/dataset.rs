//! Ingestion of the two flat text tables that describe the road atlas.
//!
//! `city-gps.txt` maps a location name to a latitude/longitude pair, one
//! record per line. `road-segments.txt` lists undirected road segments as
//! `from to length speed_limit road_name`. Both are space-delimited with no
//! header row. Loading happens once per process; searches borrow the
//! resulting [`RoadAtlas`] read-only.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, warn};

use crate::atlas::{Coordinate, RoadAtlas, SegmentRecord};
use crate::error::{Error, Result};

/// Load the geocoding table and the segment table into a [`RoadAtlas`].
///
/// Locations that only appear in the segment table (highway junctions) are
/// interned without a coordinate. Segments with a non-positive or
/// unparsable length or speed limit are rejected.
pub fn load_atlas(gps_path: &Path, segments_path: &Path) -> Result<RoadAtlas> {
    let mut atlas = RoadAtlas::new();
    read_locations(&mut atlas, gps_path)?;
    read_segments(&mut atlas, segments_path)?;
    debug!(
        locations = atlas.locations().len(),
        segments = atlas.segments().len(),
        "loaded road atlas"
    );
    Ok(atlas)
}

fn table_reader(path: &Path) -> Result<csv::Reader<File>> {
    Ok(ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_path(path)?)
}

fn record_line(record: &StringRecord) -> u64 {
    record.position().map(|pos| pos.line()).unwrap_or(0)
}

fn read_locations(atlas: &mut RoadAtlas, path: &Path) -> Result<()> {
    let mut reader = table_reader(path)?;
    for record in reader.records() {
        let record = record?;
        let line = record_line(&record);
        if record.len() != 3 {
            return Err(Error::MalformedLocation {
                line,
                reason: format!("expected 3 fields, found {}", record.len()),
            });
        }

        let name = &record[0];
        let latitude = parse_coordinate_field(&record, 1, "latitude")?;
        let longitude = parse_coordinate_field(&record, 2, "longitude")?;

        let id = atlas.intern(name);
        let coordinate = Coordinate {
            latitude,
            longitude,
        };
        if atlas.set_coordinate(id, coordinate).is_some() {
            warn!(location = name, "duplicate coordinate record, keeping the later one");
        }
    }
    Ok(())
}

fn read_segments(atlas: &mut RoadAtlas, path: &Path) -> Result<()> {
    let mut reader = table_reader(path)?;
    for record in reader.records() {
        let record = record?;
        let line = record_line(&record);
        if record.len() != 5 {
            return Err(Error::MalformedSegment {
                line,
                reason: format!("expected 5 fields, found {}", record.len()),
            });
        }

        let length = parse_segment_field(&record, 2, "length")?;
        let speed_limit = parse_segment_field(&record, 3, "speed limit")?;

        let from = atlas.intern(&record[0]);
        let to = atlas.intern(&record[1]);
        atlas.push_segment(SegmentRecord {
            from,
            to,
            length,
            speed_limit,
            road_name: Arc::from(&record[4]),
        });
    }
    Ok(())
}

fn parse_coordinate_field(record: &StringRecord, index: usize, field: &str) -> Result<f64> {
    record[index].parse::<f64>().map_err(|_| Error::MalformedLocation {
        line: record_line(record),
        reason: format!("{field} '{}' is not a number", &record[index]),
    })
}

fn parse_segment_field(record: &StringRecord, index: usize, field: &str) -> Result<f64> {
    let value: f64 = record[index].parse().map_err(|_| Error::MalformedSegment {
        line: record_line(record),
        reason: format!("{field} '{}' is not a number", &record[index]),
    })?;
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::MalformedSegment {
            line: record_line(record),
            reason: format!("{field} must be positive, found {value}"),
        });
    }
    Ok(value)
}
