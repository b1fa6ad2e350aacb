/// Contract-violation taxonomy surfaced by input normalisation.
///
/// `NoRouteFound` is deliberately not a variant here: it is an expected
/// outcome, not an error, and is surfaced as `Ok(None)` / a best-effort
/// `Ok(vec![..])` instead (see [`crate::search::stochastic_search`] and
/// [`crate::robust::robust_search`]).
#[derive(thiserror::Error, Debug)]
pub enum RouteError {
    #[error("unknown stop name: {0}")]
    UnknownName(String),
    #[error("invalid time string: {0}")]
    InvalidTime(String),
}
