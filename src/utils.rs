use crate::error::RouteError;
use crate::network::{NameIndex, StopId, Timestamp};

/// How a start/end stop is given to the public entry points.
pub enum StopQuery<'a> {
    Id(StopId),
    Name(&'a str),
}

/// How an arrival-time target is given to the public entry points.
pub enum ArrivalTarget<'a> {
    Seconds(Timestamp),
    /// An `"HH:MM:SS"` string, parsed relative to a fixed midnight epoch.
    Clock(&'a str),
}

pub(crate) fn resolve_stop(query: StopQuery, names: &NameIndex) -> Result<StopId, RouteError> {
    match query {
        StopQuery::Id(id) => Ok(id),
        StopQuery::Name(name) => names
            .get(name)
            .copied()
            .ok_or_else(|| RouteError::UnknownName(name.to_owned())),
    }
}

pub(crate) fn resolve_time(target: ArrivalTarget) -> Result<Timestamp, RouteError> {
    match target {
        ArrivalTarget::Seconds(t) => Ok(t),
        ArrivalTarget::Clock(s) => parse_time(s),
    }
}

/// Parses an `"HH:MM:SS"` string into seconds-of-day. Behaviour is undefined
/// (but does not panic) for times outside 00:00:00-23:59:59.
pub fn parse_time(s: &str) -> Result<Timestamp, RouteError> {
    let invalid = || RouteError::InvalidTime(s.to_owned());

    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 3 {
        return Err(invalid());
    }
    let hours: Timestamp = parts[0].parse().map_err(|_| invalid())?;
    let minutes: Timestamp = parts[1].parse().map_err(|_| invalid())?;
    let seconds: Timestamp = parts[2].parse().map_err(|_| invalid())?;
    if parts[1].len() != 2 || parts[2].len() != 2 || minutes > 59 || seconds > 59 {
        return Err(invalid());
    }
    Ok(hours * 3600 + minutes * 60 + seconds)
}

/// Formats seconds-of-day as an `"HH:MM:SS"` string.
pub fn get_time_str(time: Timestamp) -> String {
    let hours = time / 3600;
    let minutes = (time % 3600) / 60;
    let seconds = time % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
