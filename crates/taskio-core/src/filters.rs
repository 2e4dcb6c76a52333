use time::Date;

use crate::date;
use crate::status::TaskStatus;

/// Query descriptor for the server-side search endpoint.
///
/// Every field is optional; blank strings count as absent. The server treats
/// an empty filter set as "match all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    /// Free text matched against title and description.
    pub search_term: Option<String>,
    /// Restrict to a single workflow status.
    pub status: Option<TaskStatus>,
    /// Restrict to a single category label.
    pub category: Option<String>,
    /// Inclusive lower bound on the due date.
    pub start_date: Option<Date>,
    /// Inclusive upper bound on the due date.
    pub end_date: Option<Date>,
}

impl SearchFilters {
    /// True when no field would contribute a query parameter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }

    /// Named query parameters for the populated fields, in wire order.
    ///
    /// Search terms are trimmed; absent and blank fields are omitted
    /// entirely.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(term) = normalized(self.search_term.as_deref()) {
            pairs.push(("q", term));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_owned()));
        }
        if let Some(category) = normalized(self.category.as_deref()) {
            pairs.push(("category", category));
        }
        if let Some(start) = self.start_date {
            pairs.push(("startDate", date::format(start)));
        }
        if let Some(end) = self.end_date {
            pairs.push(("endDate", date::format(end)));
        }
        pairs
    }
}

fn normalized(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned)
}
