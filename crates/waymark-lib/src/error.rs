use thiserror::Error;

/// Convenient result alias for the Waymark library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a location name could not be found in the atlas.
    #[error("unknown location name: {name}{}", format_suggestions(.suggestions))]
    UnknownLocation {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a cost function name is outside the supported set.
    #[error("unknown cost function: {name} (expected segments, distance, time, or delivery)")]
    UnknownCostKind { name: String },

    /// Raised when the frontier empties before the destination is reached.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when an uncoordinated endpoint has no coordinated neighbour to
    /// anchor the heuristic on.
    #[error("no heuristic anchor available for {name}: no direct neighbour has a coordinate")]
    NoHeuristicAnchor { name: String },

    /// Raised when a line of the location table cannot be parsed.
    #[error("malformed location record on line {line}: {reason}")]
    MalformedLocation { line: u64, reason: String },

    /// Raised when a line of the segment table cannot be parsed or carries a
    /// non-positive length or speed limit.
    #[error("malformed road segment on line {line}: {reason}")]
    MalformedSegment { line: u64, reason: String },

    /// Wrapper for CSV reader errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
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
