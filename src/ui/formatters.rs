/// Kibibytes in one gibibyte
const KIB_PER_GIB: f64 = 1024.0 * 1024.0;

/// Bytes in one gibibyte
const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Free space at or above this many GiB is shown without decimals
const WIDE_DISK_GIB: f64 = 100.0;

/// Unit-switching rule for throughput rates
#[derive(Debug, Clone, PartialEq)]
pub struct RateUnits<'a> {
    pub small: &'a str,
    pub large: &'a str,
    /// Rates above this value (in the small unit) are divided by it and shown in the large unit
    pub threshold: f64,
    pub large_precision: usize,
}

impl Default for RateUnits<'_> {
    fn default() -> Self {
        Self {
            small: "KiB/s",
            large: "MiB/s",
            threshold: 1024.0,
            large_precision: 1,
        }
    }
}

/// Format a rate given in the small unit (e.g. 900 -> "900KiB/s", 1500 -> "1.5MiB/s")
pub fn format_rate(rate: f64, units: &RateUnits) -> String {
    if rate > units.threshold {
        format!(
            "{:.*}{}",
            units.large_precision,
            rate / units.threshold,
            units.large
        )
    } else {
        format!("{:.0}{}", rate, units.small)
    }
}

/// Convert kibibytes to gibibytes
pub fn kib_to_gib(kib: u64) -> f64 {
    kib as f64 / KIB_PER_GIB
}

/// Format free disk space, keeping the field roughly constant in width
pub fn format_free_space(bytes: u64) -> String {
    let gib = bytes as f64 / BYTES_PER_GIB;
    if gib < WIDE_DISK_GIB {
        format!("{:4.1} GiB", gib)
    } else {
        format!("{:.0} GiB", gib)
    }
}

/// Format a whole number of minutes as H:MM
pub fn format_hours_minutes(hours: i64, minutes: i64) -> String {
    format!("{}:{:02}", hours, minutes)
}
