//! Joke personalization.
//!
//! Upstream jokes star a fixed protagonist. Personalization swaps every
//! literal occurrence of that name for the caller-supplied one — plain
//! substring replacement, case-sensitive, no regex.

/// Protagonist name embedded in upstream joke text.
pub const PLACEHOLDER: &str = "Chuck Norris";

/// Substituted when the caller supplies no name. Personalization always
/// runs; an absent name still triggers replacement with this placeholder.
pub const NO_NAME: &str = "NO NAME SUPPLIED";

/// Replace every occurrence of [`PLACEHOLDER`] in `joke` with `name`
/// (or [`NO_NAME`] when absent). Text without the placeholder passes
/// through unchanged.
pub fn personalize(joke: &str, name: Option<&str>) -> String {
    joke.replace(PLACEHOLDER, name.unwrap_or(NO_NAME))
}
