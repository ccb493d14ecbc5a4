//! Test helpers for trip request fixtures on disk.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use roadlog_core::TripRequest;
use roadlog_core::test_support::fixed_trip;
use tempfile::TempDir;

/// Temporary directory with a UTF-8 path.
pub(super) fn utf8_tempdir() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    let mut file = std::fs::File::create(path.as_std_path()).expect("create fixture");
    file.write_all(contents).expect("write fixture");
}

/// Complete request for a haul of `miles` between pickup and dropoff.
pub(super) fn trip_request(miles: f64) -> TripRequest {
    let (current, pickup, dropoff) = fixed_trip(miles);
    TripRequest::new(current, pickup, dropoff, 0.0)
}

pub(super) fn write_request(path: &Utf8Path, request: &TripRequest) {
    let payload = serde_json::to_string_pretty(request).expect("serialise request");
    write_utf8(path, payload.as_bytes());
}
