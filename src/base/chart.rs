use crate::base;

/// Everything a renderer needs: bucket totals and an axis plan aligned with
/// them by index.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    pub period: base::Period,
    pub range: base::Range,
    pub total: base::Cents,
    pub points: Vec<base::ChartDataPoint>,
    pub ticks: base::TickPlan,
}

impl Chart {
    pub fn build(purchases: &[base::Purchase], range: base::Range, period: base::Period) -> Self {
        let series = base::Series::aggregate(purchases, range, period);
        let ticks = base::TickPlan::new(range, &series.points);
        Self {
            period,
            range,
            total: series.total,
            points: series.points,
            ticks,
        }
    }

    /// Like [`Chart::build`] with no purchases at all.
    pub fn zeroed(range: base::Range, period: base::Period) -> Self {
        Self::build(&[], range, period)
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    fn purchases() -> Vec<base::Purchase> {
        [
            r#"{"purchaseDate":"2015-03-02","totalAmount":1250}"#,
            r#"{"purchaseDate":"2015-03-02T18:30:00.000Z","totalAmount":250}"#,
            r#"{"purchaseDate":"2015-03-31","totalAmount":900}"#,
            r#"{"purchaseDate":null,"totalAmount":700}"#,
            r#"{"purchaseDate":"2015-04-01","totalAmount":300}"#,
        ]
        .into_iter()
        .map(|s| s.parse().unwrap())
        .collect()
    }

    #[test]
    fn test_build() {
        let range = "2015-03-01:2015-03-31".parse().unwrap();
        let chart = Chart::build(&purchases(), range, base::Period::Daily);
        assert_eq!(chart.points.len(), 31);
        assert_eq!(chart.total, base::Cents(2400));
        assert_eq!(chart.points[1].amount, base::Cents(1500));
        assert_eq!(chart.points[30].amount, base::Cents(900));
        assert_eq!(chart.ticks.indices.len(), 31);
        assert!(chart.ticks.major_indices.contains(&30));
    }

    #[test]
    fn test_to_json() {
        let range = "2015-01-01:2015-03-31".parse().unwrap();
        let chart = Chart::build(&purchases(), range, base::Period::Monthly);
        let got = serde_json::to_string_pretty(&chart).unwrap();
        let want = indoc! {r#"
            {
              "period": "monthly",
              "range": {
                "start": "2015-01-01",
                "end": "2015-03-31"
              },
              "total": 2400,
              "points": [
                {
                  "date": "2015-01-01",
                  "amount": 0
                },
                {
                  "date": "2015-02-01",
                  "amount": 0
                },
                {
                  "date": "2015-03-01",
                  "amount": 2400
                }
              ],
              "ticks": {
                "resolution": "month",
                "indices": [
                  0,
                  1,
                  2
                ],
                "labels": {
                  "0": "Jan",
                  "1": "Feb",
                  "2": "Mar"
                },
                "majorIndices": [
                  0,
                  1,
                  2
                ]
              }
            }"#};
        assert_eq!(got, want);
    }
}
