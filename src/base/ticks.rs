use std::collections::BTreeMap;
use std::collections::BTreeSet;

use crate::base;

/// Labels in a full-month chart land on multiples of this day-of-month.
const FULL_MONTH_LABEL_EVERY: u8 = 5;

/// A plan with this many labels or fewer is replaced by evenly spaced ticks.
const SPARSE_LABEL_COUNT: usize = 2;
const SYNTHETIC_POINTS_PER_LABEL: usize = 10;
const SYNTHETIC_MIN: usize = 3;
const SYNTHETIC_MAX: usize = 7;

/// Axis layout for a chart. Positions refer to indices of the series the plan
/// was built from.
///
/// Every position in `indices` gets a gridline. The ones in `major_indices`
/// also get the text in `labels`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickPlan {
    pub resolution: base::Resolution,
    pub indices: Vec<usize>,
    pub labels: BTreeMap<usize, String>,
    pub major_indices: BTreeSet<usize>,
}

impl TickPlan {
    pub fn new(range: base::Range, points: &[base::ChartDataPoint]) -> Self {
        let resolution = base::Resolution::for_range(range);
        let mut gridlines = BTreeSet::<usize>::new();
        let mut labels = BTreeMap::<usize, String>::new();

        if range.is_full_month() {
            // One gridline per point, but only a handful of labels.
            let last = points.len().saturating_sub(1);
            for (i, p) in points.iter().enumerate() {
                gridlines.insert(i);
                let dt = label_date(range, p);
                if i == 0 || i == last || dt.day() % FULL_MONTH_LABEL_EVERY == 0 {
                    labels.insert(i, base::label::format(dt, resolution));
                }
            }
        } else {
            for dt in candidates(range, resolution) {
                if let Some(i) = bucket_index(points, dt) {
                    labels
                        .entry(i)
                        .or_insert_with(|| base::label::format(dt, resolution));
                }
            }
        }

        if labels.len() <= SPARSE_LABEL_COUNT && points.len() > SPARSE_LABEL_COUNT {
            tracing::debug!(
                labels = labels.len(),
                points = points.len(),
                "too few ticks for {}, spacing them evenly",
                range
            );
            labels = evenly_spaced(range, points, resolution);
        }

        let major_indices = labels.keys().copied().collect::<BTreeSet<_>>();
        gridlines.extend(major_indices.iter().copied());
        Self {
            resolution,
            indices: gridlines.into_iter().collect(),
            labels,
            major_indices,
        }
    }

    pub fn is_gridline(&self, i: usize) -> bool {
        self.indices.binary_search(&i).is_ok()
    }

    pub fn label(&self, i: usize) -> Option<&str> {
        self.labels.get(&i).map(String::as_str)
    }
}

/// Dates that deserve a tick at the given resolution, in ascending order.
fn candidates(range: base::Range, resolution: base::Resolution) -> Vec<base::Date> {
    match resolution {
        base::Resolution::Day => range.steps(base::Datepart::Day).collect(),
        base::Resolution::Week => {
            let mut dts = range.steps(base::Datepart::Week).collect::<Vec<_>>();
            if dts.last() != Some(&range.end()) {
                dts.push(range.end());
            }
            dts
        }
        base::Resolution::Month => range.buckets(base::Datepart::Month).collect(),
        base::Resolution::Year => range.buckets(base::Datepart::Year).collect(),
    }
}

/// Index of the point whose bucket contains `dt`, given points sorted by
/// bucket start. `None` if `dt` precedes every point.
fn bucket_index(points: &[base::ChartDataPoint], dt: base::Date) -> Option<usize> {
    points.partition_point(|p| p.date <= dt).checked_sub(1)
}

/// Date a point is labelled with. A bucket starting before the range, like
/// the first week of a month, is labelled with the range start.
fn label_date(range: base::Range, point: &base::ChartDataPoint) -> base::Date {
    point.date.max(range.start())
}

/// Labels spread over `[0, len - 1]`, roughly one per ten points. Week
/// resolution is relabelled at day level since the ticks no longer fall on
/// week boundaries.
fn evenly_spaced(
    range: base::Range,
    points: &[base::ChartDataPoint],
    resolution: base::Resolution,
) -> BTreeMap<usize, String> {
    let resolution = match resolution {
        base::Resolution::Week => base::Resolution::Day,
        r => r,
    };
    let last = points.len() - 1;
    let count = ((points.len() + SYNTHETIC_POINTS_PER_LABEL / 2) / SYNTHETIC_POINTS_PER_LABEL + 2)
        .clamp(SYNTHETIC_MIN, SYNTHETIC_MAX);
    let gaps = count - 1;
    (0..count)
        .map(|i| (2 * i * last + gaps) / (2 * gaps))
        .map(|i| (i, base::label::format(label_date(range, &points[i]), resolution)))
        .collect()
}
