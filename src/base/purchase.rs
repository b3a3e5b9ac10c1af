use crate::base;

/// A purchase as returned by the backend. Only the fields the chart needs are
/// kept; everything else in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<u64>,
    #[serde(default)]
    purchase_date: Option<String>,
    total_amount: base::Cents,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<String>,
}

impl Purchase {
    pub fn id(&self) -> Option<u64> {
        self.id
    }

    pub fn total_amount(&self) -> base::Cents {
        self.total_amount
    }

    /// Calendar date of the purchase. Accepts `yyyy-mm-dd` optionally followed
    /// by a time part (e.g. RFC 3339). Returns `None` for a missing or unusable
    /// date.
    pub fn date(&self) -> Option<base::Date> {
        let s = self.purchase_date.as_deref()?;
        let head = s.get(..10)?;
        if s.len() > 10 && !s[10..].starts_with(['T', 't', ' ']) {
            return None;
        }
        base::Date::parse_iso(head).ok()
    }
}

impl std::fmt::Display for Purchase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl std::str::FromStr for Purchase {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl TryFrom<&str> for Purchase {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
