//! Constants used throughout the asker library

/// Suffix appended to a confirmation question before it is displayed
pub const CONFIRMATION_SUFFIX: &str = " [y/n]:";

/// Hint displayed after an unrecognized confirmation answer
pub const CONFIRMATION_HINT: &str = "y,n,yes,no?";
