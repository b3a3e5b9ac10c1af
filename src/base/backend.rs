use crate::base;

/// Largest page size the backend honors.
pub const MAX_PER_PAGE: u32 = 100;

/// Only purchases with this status are charted.
pub const CONFIRMED: &str = "confirmed";

/// Read-only source of purchases.
pub trait Backend {
    /// Fetches one page of purchases.
    fn purchases(
        &self,
        query: &PurchaseQuery,
    ) -> impl std::future::Future<Output = Result<Page<base::Purchase>, Error>> + Send;

    /// Fetches the dates of the earliest and latest purchase.
    fn date_range(&self) -> impl std::future::Future<Output = Result<DateRange, Error>> + Send;
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("backend responded with status {0}")]
    Status(u16),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseQuery {
    pub date_from: base::Date,
    pub date_to: base::Date,
    pub per_page: u32,
    pub page: u32,
    pub status: &'static str,
}

impl PurchaseQuery {
    /// Query for the given page of confirmed purchases within `range`. Page
    /// size is clamped to `[1, MAX_PER_PAGE]`.
    pub fn confirmed(range: base::Range, per_page: u32, page: u32) -> Self {
        Self {
            date_from: range.start(),
            date_to: range.end(),
            per_page: per_page.clamp(1, MAX_PER_PAGE),
            page,
            status: CONFIRMED,
        }
    }

    /// Query string pairs, in the order they are sent.
    pub fn pairs(&self) -> [(&'static str, String); 5] {
        [
            ("dateFrom", self.date_from.to_string()),
            ("dateTo", self.date_to.to_string()),
            ("perPage", self.per_page.to_string()),
            ("page", self.page.to_string()),
            ("status", self.status.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Option<PageMeta>,
}

/// Pagination metadata. Fields other than `lastPage` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageMeta {
    pub last_page: Option<u32>,
}

impl<T> Page<T> {
    /// Number of the final page. Missing metadata means there is only one.
    pub fn last_page(&self) -> u32 {
        self.meta
            .as_ref()
            .and_then(|m| m.last_page)
            .unwrap_or(1)
            .max(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct DateRange {
    pub data: DateRangeData,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DateRangeData {
    pub earliest_date: Option<String>,
    pub latest_date: Option<String>,
    pub total_count: u64,
}

impl DateRange {
    /// The span between the earliest and latest purchase, or `None` if there
    /// are no purchases or either date is unusable.
    pub fn to_range(&self) -> Option<base::Range> {
        if self.data.total_count == 0 {
            return None;
        }
        let date = |s: &Option<String>| {
            s.as_deref()
                .and_then(|s| s.get(..10))
                .and_then(|s| base::Date::parse_iso(s).ok())
        };
        let start = date(&self.data.earliest_date)?;
        let end = date(&self.data.latest_date)?;
        base::Range::new(start, end).ok()
    }
}
