use super::Duration;
use crate::error::ParseError;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;
use tracing::debug;

static HMS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+):(\d+):(\d+)$").expect("static regex pattern is valid"));

// The trailing minutes marker lets "3h15m" (suggestion text with the space
// stripped) parse back to the same duration.
static HOURS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)(?:hours|h)?(?:[:.]?(\d+)(?:minutes|min|m)?)?$")
        .expect("static regex pattern is valid")
});

static MINUTES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)(?:minutes|min|m)?$").expect("static regex pattern is valid")
});

static BARE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)(?:[:.]?(\d+))?$").expect("static regex pattern is valid")
});

/// Input grammars, in dispatch priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Grammar {
    /// `01:30:00`
    HoursMinutesSeconds,
    /// `3h15`, `3h`, `3hours:15`
    HoursMarker,
    /// `15m`, `15min`, `15minutes`
    MinutesMarker,
    /// `3:15`
    ColonPair,
    /// `3.15`
    DotPair,
    /// `3`, `315`
    BareDigits,
}

impl Grammar {
    /// Select a grammar from trigger characters alone. The selected grammar
    /// either matches the whole input or the input is rejected; no other
    /// grammar is tried afterwards.
    pub fn classify(normalized: &str) -> Self {
        if normalized.split(':').count() == 3 {
            Grammar::HoursMinutesSeconds
        } else if normalized.contains('h') {
            Grammar::HoursMarker
        } else if normalized.contains('m') {
            Grammar::MinutesMarker
        } else if normalized.contains(':') {
            Grammar::ColonPair
        } else if normalized.contains('.') {
            Grammar::DotPair
        } else {
            Grammar::BareDigits
        }
    }

    fn apply(self, s: &str) -> Option<Duration> {
        match self {
            Grammar::HoursMinutesSeconds => {
                let caps = HMS_RE.captures(s)?;
                let (hours, minutes) = (number(&caps[1])?, number(&caps[2])?);
                // Same bound as the other grammars, so the suggestion text
                // always parses back.
                Duration::from_hours_minutes(hours, minutes)?;
                Some(Duration::new(hours, minutes, number(&caps[3])?))
            }
            Grammar::HoursMarker => {
                let caps = HOURS_RE.captures(s)?;
                let minutes = match caps.get(2) {
                    Some(m) => number(m.as_str())?,
                    None => 0,
                };
                Duration::from_hours_minutes(number(&caps[1])?, minutes)
            }
            Grammar::MinutesMarker => {
                let caps = MINUTES_RE.captures(s)?;
                Duration::from_hours_minutes(0, number(&caps[1])?)
            }
            Grammar::ColonPair => pair(s, ':'),
            Grammar::DotPair => pair(s, '.'),
            // Reached only without ':' or '.', yet the pattern still accepts
            // an embedded separator. Kept as is; see DESIGN.md.
            Grammar::BareDigits => {
                let caps = BARE_RE.captures(s)?;
                let minutes = match caps.get(2) {
                    Some(m) => number(m.as_str())?,
                    None => 0,
                };
                Duration::from_hours_minutes(number(&caps[1])?, minutes)
            }
        }
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Grammar::HoursMinutesSeconds => "hh:mm:ss",
            Grammar::HoursMarker => "hours",
            Grammar::MinutesMarker => "minutes",
            Grammar::ColonPair => "h:m",
            Grammar::DotPair => "h.m",
            Grammar::BareDigits => "digits",
        };
        f.write_str(name)
    }
}

/// Trim, lowercase and drop every whitespace character.
pub fn normalize(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Parse free-form duration text.
pub fn parse(raw: &str) -> Result<Duration, ParseError> {
    parse_with_grammar(raw).map(|(duration, _)| duration)
}

/// Parse free-form duration text, also reporting which grammar matched.
pub fn parse_with_grammar(raw: &str) -> Result<(Duration, Grammar), ParseError> {
    let s = normalize(raw);
    if s.is_empty() {
        return Err(ParseError::Empty);
    }

    let grammar = Grammar::classify(&s);
    match grammar.apply(&s) {
        Some(duration) => {
            debug!(input = %s, ?grammar, ?duration, "parsed duration");
            Ok((duration, grammar))
        }
        None => {
            debug!(input = %s, ?grammar, "rejected duration input");
            Err(ParseError::Unparseable { input: s, grammar })
        }
    }
}

/// Strict base-10 digit group. `u64::from_str` alone would accept a sign.
fn number(group: &str) -> Option<u64> {
    if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    group.parse().ok()
}

fn pair(s: &str, separator: char) -> Option<Duration> {
    let mut parts = s.split(separator);
    let (Some(hours), Some(minutes), None) = (parts.next(), parts.next(), parts.next()) else {
        return None;
    };
    Duration::from_hours_minutes(number(hours)?, number(minutes)?)
}
