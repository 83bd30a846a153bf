use thiserror::Error;

/// Convenient result alias for the Skyroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an origin, destination, or avoided code is not present in
    /// the network.
    #[error("unknown waypoint code: {code}{}", format_suggestions(.suggestions))]
    UnknownNode {
        code: String,
        suggestions: Vec<String>,
    },

    /// Raised when two waypoints share the same code during network
    /// construction.
    #[error("duplicate waypoint code: {code}")]
    DuplicateNode { code: String },

    /// Raised when a waypoint carries a coordinate outside geographic range.
    #[error("invalid coordinate for waypoint {code}: {message}")]
    InvalidCoordinate { code: String, message: String },

    /// Raised when an aircraft profile fails validation.
    #[error("invalid aircraft profile: {message}")]
    InvalidProfile { message: String },

    /// Raised when two catalog profiles share the same name.
    #[error("duplicate aircraft name: {name}")]
    DuplicateAircraft { name: String },

    /// Raised when the search exhausted the reachable state space without
    /// finding the destination. A legitimate planning outcome, not a fault.
    #[error("no feasible itinerary from {origin} to {destination}")]
    Infeasible { origin: String, destination: String },

    /// Raised when the search budget was exceeded before the state space was
    /// exhausted. Distinct from [`Error::Infeasible`] so callers can tell
    /// "no plan exists" from "search gave up".
    #[error("search aborted after {expansions} state expansions")]
    SearchAborted { expansions: usize },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
