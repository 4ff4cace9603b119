use footing_draw::{FootingResult, SolverRecord};

/// The reference scenario used across the suite:
/// 1.8 m footing, 450 mm thick, 400 mm square column, 6 bars ϕ16 @ 150,
/// 40 mm cover.
pub fn sample_record_json() -> &'static str {
    r#"{
        "b": 1800.0, "d": 450.0,
        "colx": 400.0, "coly": 400.0,
        "N": 6, "s": 150.0, "bar": 16.0,
        "covr": "40",
        "As": 1206.4, "qa": 150.0, "fs": 3
    }"#
}

pub fn record(b: f64, d: f64, colx: f64, coly: f64, n: u32, s: f64, bar: f64, covr: f64) -> SolverRecord {
    serde_json::from_value(serde_json::json!({
        "b": b, "d": d, "colx": colx, "coly": coly,
        "N": n, "s": s, "bar": bar, "covr": covr,
    }))
    .expect("valid record json")
}

pub fn sample_footing() -> FootingResult {
    FootingResult::from_record(&record(1800.0, 450.0, 400.0, 400.0, 6, 150.0, 16.0, 40.0))
        .expect("sample geometry is valid")
}

pub fn footing_with_width(b_mm: f64) -> FootingResult {
    FootingResult::from_record(&record(b_mm, 450.0, 400.0, 400.0, 6, 150.0, 16.0, 40.0))
        .expect("geometry is valid")
}
