//! Common test utilities: write the two atlas tables into a temp directory
//! and load them through the public dataset API.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use waymark_lib::{build_network, load_atlas, RoadAtlas, RoadNetwork};

/// Temporary on-disk atlas fixture.
#[allow(dead_code)]
pub struct AtlasFixture {
    _temp_dir: TempDir,
    pub gps_path: PathBuf,
    pub segments_path: PathBuf,
}

impl AtlasFixture {
    /// Write `city-gps.txt` and `road-segments.txt` with the given contents.
    pub fn write(gps: &str, segments: &str) -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let gps_path = temp_dir.path().join("city-gps.txt");
        let segments_path = temp_dir.path().join("road-segments.txt");
        fs::write(&gps_path, gps).expect("write gps table");
        fs::write(&segments_path, segments).expect("write segments table");
        Self {
            _temp_dir: temp_dir,
            gps_path,
            segments_path,
        }
    }

    pub fn load(&self) -> waymark_lib::Result<RoadAtlas> {
        load_atlas(&self.gps_path, &self.segments_path)
    }
}

/// Write, load, and build the network in one go for tests that only care
/// about well-formed inputs.
#[allow(dead_code)]
pub fn load_fixture(gps: &str, segments: &str) -> (RoadAtlas, RoadNetwork) {
    let fixture = AtlasFixture::write(gps, segments);
    let atlas = fixture.load().expect("fixture loads");
    let network = build_network(&atlas);
    (atlas, network)
}
