//! Editable query text and the state of the outbound request

use serde::{Deserialize, Serialize};

/// Outcome of the most recent send
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RequestOutcome {
    #[default]
    Idle,
    Loading,
    Success(String),
    Failure(String),
}

/// How a recomputed query interacts with text the user typed by hand
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComposePolicy {
    /// Every structured change overwrites the query field.
    #[default]
    LastChangeWins,
    /// Manual edits stick until the user rebuilds from filters or clears the field.
    KeepManualEdits,
}

/// Handed out by [`RequestLifecycle::begin`]; only the newest ticket may resolve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestTicket {
    pub generation: u64,
    pub query: String,
}

#[derive(Clone, Debug, Default)]
pub struct RequestLifecycle {
    query: String,
    edited: bool,
    outcome: RequestOutcome,
    generation: u64,
}

impl RequestLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn outcome(&self) -> &RequestOutcome {
        &self.outcome
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.outcome, RequestOutcome::Loading)
    }

    pub fn is_edited(&self) -> bool {
        self.edited
    }

    pub fn can_send(&self) -> bool {
        !self.query.is_empty()
    }

    // ========================================================================
    // Query text
    // ========================================================================

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.edited = true;
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.edited = true;
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
        self.edited = true;
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
        self.edited = false;
    }

    /// Apply a freshly composed query. Empty compositions never overwrite.
    /// Returns whether the query text changed hands.
    pub fn apply_composed(&mut self, composed: &str, policy: ComposePolicy) -> bool {
        if composed.is_empty() {
            return false;
        }
        if policy == ComposePolicy::KeepManualEdits && self.edited {
            return false;
        }
        self.query = composed.to_string();
        self.edited = false;
        true
    }

    /// Force the query back to the composed text regardless of policy.
    pub fn rebuild(&mut self, composed: &str) {
        self.query = composed.to_string();
        self.edited = false;
    }

    // ========================================================================
    // Request state
    // ========================================================================

    /// Enter `Loading` for `query_text`. An empty query is a no-op.
    pub fn begin(&mut self, query_text: &str) -> Option<RequestTicket> {
        if query_text.is_empty() {
            return None;
        }
        self.generation += 1;
        self.outcome = RequestOutcome::Loading;
        Some(RequestTicket {
            generation: self.generation,
            query: query_text.to_string(),
        })
    }

    /// Record the result for `ticket`. Results for superseded tickets are dropped
    /// and `false` is returned.
    pub fn resolve(&mut self, ticket: &RequestTicket, result: Result<String, String>) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.outcome = match result {
            Ok(text) => RequestOutcome::Success(text),
            Err(message) => RequestOutcome::Failure(message),
        };
        true
    }
}
