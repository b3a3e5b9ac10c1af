use crate::base;
use crate::base::backend;

/// Message shown in place of a chart when loading fails.
pub const LOAD_FAILED: &str = "unable to load data";

/// Handle for one chart request. Only the most recently issued ticket may
/// change the session's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    id: u64,
    pub period: base::Period,
    pub range: base::Range,
}

impl Ticket {
    /// Fetches the ticket's purchases and builds its chart.
    pub async fn load<B>(&self, backend: &B, per_page: u32) -> Result<base::Chart, backend::Error>
    where
        B: backend::Backend,
    {
        tracing::debug!(id = self.id, period = %self.period, "loading chart for {}", self.range);
        let purchases = base::fetch::confirmed_purchases(backend, self.range, per_page).await?;
        Ok(base::Chart::build(&purchases, self.range, self.period))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum State {
    #[default]
    Idle,
    Loading,
    Ready(base::Chart),
    Failed(String),
}

/// What [`Session::complete`] did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// A newer request was issued after this one; the result was dropped.
    Stale,
}

/// The current chart and the bookkeeping needed to ignore superseded
/// requests. The state is always replaced as a whole.
#[derive(Debug, Default)]
pub struct Session {
    issued: u64,
    state: State,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Starts a request for `period` over `range`, superseding any request
    /// still in flight.
    pub fn begin(&mut self, period: base::Period, range: base::Range) -> Ticket {
        self.issued += 1;
        self.state = State::Loading;
        Ticket {
            id: self.issued,
            period,
            range,
        }
    }

    pub fn is_latest(&self, ticket: &Ticket) -> bool {
        ticket.id == self.issued
    }

    /// Stores the result of `ticket`'s request unless a newer request has
    /// been issued since.
    pub fn complete(
        &mut self,
        ticket: &Ticket,
        result: Result<base::Chart, backend::Error>,
    ) -> Outcome {
        if !self.is_latest(ticket) {
            tracing::debug!(
                id = ticket.id,
                latest = self.issued,
                "discarding stale response for {}",
                ticket.range
            );
            return Outcome::Stale;
        }
        self.state = match result {
            Ok(chart) => State::Ready(chart),
            Err(e) => {
                tracing::warn!(error = %e, "failed to load chart for {}", ticket.range);
                State::Failed(LOAD_FAILED.to_string())
            }
        };
        Outcome::Applied
    }
}
