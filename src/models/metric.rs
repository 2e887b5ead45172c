use super::comparison::Metrics;

/// The metric columns of the comparison table, in display order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Metric {
    Ops,
    NsPerOp,
    BytesPerOp,
    MbPerSec,
    AllocsPerOp,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::Ops,
        Metric::NsPerOp,
        Metric::BytesPerOp,
        Metric::MbPerSec,
        Metric::AllocsPerOp,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Metric::Ops => "Number of Iterations",
            Metric::NsPerOp => "Time",
            Metric::BytesPerOp => "Bytes",
            Metric::MbPerSec => "Megabytes",
            Metric::AllocsPerOp => "Allocations/op",
        }
    }

    /// Minimum absolute diff percentage that counts as a change.
    pub fn threshold(&self) -> f64 {
        match self {
            Metric::Ops => 5.0,
            _ => 10.0,
        }
    }

    pub fn value(&self, metrics: &Metrics) -> f64 {
        match self {
            Metric::Ops => metrics.ops,
            Metric::NsPerOp => metrics.ns_per_op,
            Metric::BytesPerOp => metrics.bytes_per_op,
            Metric::MbPerSec => metrics.mb_per_sec,
            Metric::AllocsPerOp => metrics.allocs_per_op,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Highlight {
    Regressed,
    Improved,
    Neutral,
}

impl Highlight {
    pub fn class(&self) -> &'static str {
        match self {
            Highlight::Regressed => "text-red-500",
            Highlight::Improved => "text-green-500",
            Highlight::Neutral => "",
        }
    }

    /// Outcome label, `None` when the change is below the threshold.
    pub fn status_text(&self) -> Option<&'static str> {
        match self {
            Highlight::Regressed => Some("REGRESSED"),
            Highlight::Improved => Some("IMPROVED"),
            Highlight::Neutral => None,
        }
    }
}

/// Classifies a diff percentage. Both boundaries are inclusive.
pub fn dynamic_color_number(value: f64, threshold: f64) -> Highlight {
    if value <= -threshold {
        Highlight::Regressed
    } else if value >= threshold {
        Highlight::Improved
    } else {
        Highlight::Neutral
    }
}

/// Fractional digits needed to print any finite `f64` exactly.
const EXACT_DIGITS: usize = 1074;

/// Formats with `digits` decimals, rounding the exact binary value and
/// breaking ties away from zero.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(digits))
        .collect();

    if frac_part.as_bytes().get(digits).is_some_and(|next| *next >= b'5') {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let (int_digits, frac_digits) = kept.split_at(kept.len() - digits);
    let mut text = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        text.push('-');
    }
    text.extend(int_digits.iter().map(|digit| *digit as char));
    if digits > 0 {
        text.push('.');
        text.extend(frac_digits.iter().map(|digit| *digit as char));
    }
    text
}

/// A single metric of one benchmark row, ready for display.
#[derive(Clone, PartialEq, Debug)]
pub struct MetricCell {
    pub metric: Metric,
    pub last: f64,
    pub current: f64,
    pub diff: f64,
}

impl MetricCell {
    pub fn new(metric: Metric, last: &Metrics, current: &Metrics, diff: &Metrics) -> Self {
        Self {
            metric,
            last: metric.value(last),
            current: metric.value(current),
            diff: metric.value(diff),
        }
    }

    /// Classification of the diff as displayed, i.e. after rounding to two decimals.
    pub fn highlight(&self) -> Highlight {
        let shown = self.diff_text().parse().unwrap_or(self.diff);
        dynamic_color_number(shown, self.metric.threshold())
    }

    pub fn last_text(&self) -> String {
        to_fixed(self.last, 0)
    }

    pub fn current_text(&self) -> String {
        to_fixed(self.current, 0)
    }

    pub fn diff_text(&self) -> String {
        to_fixed(self.diff, 2)
    }
}
