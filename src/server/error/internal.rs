use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enum column holds a value the application doesn't know.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown value '{value}' stored in column {column}")]
    InvalidStoredValue {
        /// Table and column the value was read from
        column: &'static str,
        /// The stored value
        value: String,
    },

    /// A row that was just written could not be read back.
    #[error("{entity} {id} missing after write")]
    MissingAfterWrite {
        /// Kind of record
        entity: &'static str,
        /// Identifier of the record
        id: String,
    },
}
