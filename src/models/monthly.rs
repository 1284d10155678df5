use chrono::NaiveDate;

/// One charted metric extracted from a record type.
pub struct Metric<R> {
    pub label: &'static str,
    pub color: &'static str,
    pub value: fn(&R) -> f64,
}

/// A record the dashboards can bucket by calendar month.
pub trait MonthlyRecord: Sized + 'static {
    /// Metrics charted for this record type, in display order.
    const METRICS: &'static [Metric<Self>];

    /// Measurement date, the sole input to bucket assignment.
    fn date(&self) -> NaiveDate;
}

/// Averages for one calendar month; `means[i]` pairs with `METRICS[i]`.
#[derive(Clone, Debug, PartialEq)]
pub struct MonthlyBucket {
    pub month: String,
    pub means: Vec<f64>,
}

/// One bar series ready for the chart component.
#[derive(Clone, Debug, PartialEq)]
pub struct BarSeries {
    pub label: &'static str,
    pub color: &'static str,
    pub values: Vec<f64>,
}

fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Groups records by the calendar month of their date and averages every
/// metric across each group.
///
/// Buckets come out in the order each month is first encountered while
/// scanning left to right, not chronologically sorted. A record whose
/// optional field is absent contributes NaN and the month's mean propagates
/// it; nothing is skipped or guarded.
pub fn monthly_means<R: MonthlyRecord>(records: &[R]) -> Vec<MonthlyBucket> {
    // (month, per-metric sums, record count); linear scan is fine at the
    // handful of distinct months a page of results can span.
    let mut groups: Vec<(String, Vec<f64>, u32)> = Vec::new();

    for record in records {
        let key = month_key(record.date());
        let idx = match groups.iter().position(|(month, ..)| *month == key) {
            Some(idx) => idx,
            None => {
                groups.push((key, vec![0.0; R::METRICS.len()], 0));
                groups.len() - 1
            }
        };

        let (_, sums, count) = &mut groups[idx];
        for (sum, metric) in sums.iter_mut().zip(R::METRICS) {
            *sum += (metric.value)(record);
        }
        *count += 1;
    }

    groups
        .into_iter()
        .map(|(month, sums, count)| MonthlyBucket {
            month,
            means: sums.iter().map(|sum| sum / f64::from(count)).collect(),
        })
        .collect()
}

/// Splits buckets into the per-metric series the chart component renders.
pub fn chart_series<R: MonthlyRecord>(buckets: &[MonthlyBucket]) -> Vec<BarSeries> {
    R::METRICS
        .iter()
        .enumerate()
        .map(|(i, metric)| BarSeries {
            label: metric.label,
            color: metric.color,
            values: buckets.iter().map(|bucket| bucket.means[i]).collect(),
        })
        .collect()
}

/// X-axis labels for the chart, one per bucket.
pub fn month_labels(buckets: &[MonthlyBucket]) -> Vec<String> {
    buckets.iter().map(|bucket| bucket.month.clone()).collect()
}
