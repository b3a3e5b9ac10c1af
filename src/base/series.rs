use crate::base;

/// Total spent within one bucket. `date` is the bucket's first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataPoint {
    pub date: base::Date,
    pub amount: base::Cents,
}

/// Zero-filled, chronologically ordered bucket totals for a range.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Series {
    pub points: Vec<ChartDataPoint>,
    pub total: base::Cents,
}

impl Series {
    /// Sums purchase amounts into `period` buckets spanning `range`.
    ///
    /// There is one point per `period` unit overlapping `range`, even when no
    /// purchase falls into it. Purchases without a usable date or dated
    /// outside `range` are skipped, even when their bucket is partly inside.
    pub fn aggregate(
        purchases: &[base::Purchase],
        range: base::Range,
        period: base::Period,
    ) -> Self {
        let buckets = range.buckets(period.datepart());
        let mut agg = base::Aggregate::<base::Date, base::Cents>::with_keys(buckets);
        for p in purchases {
            let Some(dt) = p.date() else {
                tracing::debug!(id = ?p.id(), "skipping purchase without a usable date");
                continue;
            };
            if !range.contains(dt) || !agg.add(period.normalize(dt), p.total_amount()) {
                tracing::debug!(id = ?p.id(), date = %dt, "skipping purchase outside {}", range);
            }
        }
        Self {
            points: agg
                .iter()
                .map(|(date, amount)| ChartDataPoint { date, amount })
                .collect(),
            total: agg.sum(),
        }
    }

    /// A series with every bucket at zero.
    pub fn zeroed(range: base::Range, period: base::Period) -> Self {
        Self::aggregate(&[], range, period)
    }
}
