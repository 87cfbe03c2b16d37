use clap::ValueEnum;

use crate::error::Result;
use crate::models::{AccumulatorTable, StationRegistry, StationSummary};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `{name=min/mean/max, ...}` on one line
    #[default]
    Text,
    /// JSON array of `{name, min, mean, max}` objects
    Json,
}

pub struct ReportWriter {
    format: OutputFormat,
}

impl ReportWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn write(&self, summaries: &[StationSummary]) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(render_summaries(summaries)),
            OutputFormat::Json => render_json(summaries),
        }
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new(OutputFormat::Text)
    }
}

/// Mean in tenths, rounded half toward positive infinity.
///
/// Computed as `floor((2 * sum + count) / (2 * count))`, which is
/// `floor(sum / count + 0.5)` without floating point.
pub fn round_mean_tenths(sum: i64, count: u64) -> i64 {
    debug_assert!(count > 0);
    let count = count as i64;
    (2 * sum + count).div_euclid(2 * count)
}

/// Observed stations sorted by byte-wise name order
pub fn summaries(registry: &StationRegistry, stations: &AccumulatorTable) -> Vec<StationSummary> {
    let mut observed: Vec<(&str, usize)> = registry
        .names()
        .map(|(id, name)| (name, id as usize))
        .filter(|&(_, id)| !stations[id].is_empty())
        .collect();
    observed.sort_unstable_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

    observed
        .into_iter()
        .map(|(name, id)| {
            let acc = &stations[id];
            StationSummary::new(
                name.to_string(),
                acc.min as i64,
                round_mean_tenths(acc.sum, acc.count),
                acc.max as i64,
            )
        })
        .collect()
}

pub fn render(registry: &StationRegistry, stations: &AccumulatorTable) -> String {
    render_summaries(&summaries(registry, stations))
}

pub fn render_summaries(summaries: &[StationSummary]) -> String {
    let mut output = String::with_capacity(summaries.len() * 32 + 3);
    output.push('{');
    for (i, summary) in summaries.iter().enumerate() {
        if i != 0 {
            output.push_str(", ");
        }
        output.push_str(&summary.name);
        output.push('=');
        push_tenths(&mut output, summary.min);
        output.push('/');
        push_tenths(&mut output, summary.mean);
        output.push('/');
        push_tenths(&mut output, summary.max);
    }
    output.push_str("}\n");
    output
}

pub fn render_json(summaries: &[StationSummary]) -> Result<String> {
    let mut output = serde_json::to_string(summaries)?;
    output.push('\n');
    Ok(output)
}

/// Append `tenths / 10` with exactly one fractional digit
fn push_tenths(output: &mut String, tenths: i64) {
    if tenths < 0 {
        output.push('-');
    }
    let magnitude = tenths.unsigned_abs();
    output.push_str(&(magnitude / 10).to_string());
    output.push('.');
    output.push(char::from(b'0' + (magnitude % 10) as u8));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{new_table, Accumulator};

    fn format_tenths(tenths: i64) -> String {
        let mut s = String::new();
        push_tenths(&mut s, tenths);
        s
    }

    fn build(readings: &[(&str, &[i32])]) -> (StationRegistry, AccumulatorTable) {
        let mut registry = StationRegistry::new();
        for (name, _) in readings {
            registry.register(name.as_bytes()).unwrap();
        }
        let mut table = new_table(registry.len());
        for (name, values) in readings {
            let id = registry.lookup(name.as_bytes()).unwrap() as usize;
            for &v in *values {
                table[id].record(v);
            }
        }
        (registry, table)
    }

    #[test]
    fn test_rounding_ties_toward_positive_infinity() {
        // 2.25 and -2.25 expressed as mean tenths 22.5 and -22.5
        assert_eq!(round_mean_tenths(45, 2), 23);
        assert_eq!(round_mean_tenths(-45, 2), -22);
        assert_eq!(format_tenths(round_mean_tenths(45, 2)), "2.3");
        assert_eq!(format_tenths(round_mean_tenths(-45, 2)), "-2.2");
    }

    #[test]
    fn test_rounding_non_ties() {
        assert_eq!(round_mean_tenths(10, 3), 3); // 3.33
        assert_eq!(round_mean_tenths(20, 3), 7); // 6.67
        assert_eq!(round_mean_tenths(-10, 3), -3); // -3.33
        assert_eq!(round_mean_tenths(-20, 3), -7); // -6.67
        assert_eq!(round_mean_tenths(-1, 2), 0); // -0.5 ties up to 0
        assert_eq!(round_mean_tenths(84, 2), 42);
    }

    #[test]
    fn test_format_tenths() {
        assert_eq!(format_tenths(0), "0.0");
        assert_eq!(format_tenths(5), "0.5");
        assert_eq!(format_tenths(-5), "-0.5");
        assert_eq!(format_tenths(-123), "-12.3");
        assert_eq!(format_tenths(999), "99.9");
        assert_eq!(format_tenths(-1000), "-100.0");
    }

    #[test]
    fn test_names_sorted_bytewise() {
        let (registry, table) = build(&[
            ("b", &[1]),
            ("Zagreb", &[2]),
            ("Ürümqi", &[3]),
            ("Abéché", &[4]),
            ("Abha", &[5]),
        ]);

        let names: Vec<String> = summaries(&registry, &table)
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Abha", "Abéché", "Zagreb", "b", "Ürümqi"]);
        for pair in names.windows(2) {
            assert!(pair[0].as_bytes() < pair[1].as_bytes());
        }
    }

    #[test]
    fn test_unobserved_station_omitted() {
        let (registry, table) = build(&[("Seen", &[12]), ("Unseen", &[])]);

        assert_eq!(render(&registry, &table), "{Seen=1.2/1.2/1.2}\n");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&StationRegistry::new(), &Vec::<Accumulator>::new()), "{}\n");
    }

    #[test]
    fn test_json_output() {
        let summaries = vec![StationSummary::new("Oslo".to_string(), -34, 42, 50)];
        let json = ReportWriter::new(OutputFormat::Json)
            .write(&summaries)
            .unwrap();

        assert_eq!(
            json,
            "[{\"name\":\"Oslo\",\"min\":-3.4,\"mean\":4.2,\"max\":5.0}]\n"
        );
    }
}
