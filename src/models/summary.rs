use serde::{Serialize, Serializer};

/// Final per-station statistics, rounded to tenths
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationSummary {
    pub name: String,

    #[serde(serialize_with = "serialize_tenths")]
    pub min: i64,

    #[serde(serialize_with = "serialize_tenths")]
    pub mean: i64,

    #[serde(serialize_with = "serialize_tenths")]
    pub max: i64,
}

impl StationSummary {
    pub fn new(name: String, min: i64, mean: i64, max: i64) -> Self {
        Self {
            name,
            min,
            mean,
            max,
        }
    }
}

fn serialize_tenths<S: Serializer>(tenths: &i64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(*tenths as f64 / 10.0)
}
