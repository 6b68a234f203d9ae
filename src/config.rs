use std::env;

pub const STOPS_ENV_VAR: &str = "REPORTING_BUS_STOPS";
pub const STOP_SEPARATOR: char = '|';

const DEFAULT_STOPS: [&str; 5] = [
    "Schiphol Airport",
    "Schiphol-Rijk, Boeingavenue",
    "Schiphol-Rijk, Beechavenue",
    "Schiphol, Schipholgebouw",
    "Schiphol, P12/Vrachtgebouw",
];

/// Bus stops whose trips count towards the reimbursed expenses.
#[derive(Debug, Clone, PartialEq)]
pub struct StopSet {
    stops: Vec<String>,
}

impl StopSet {
    /// Parses a `|`-separated list. Entries are trimmed, empty ones dropped.
    pub fn parse(raw: &str) -> Self {
        let stops = raw
            .split(STOP_SEPARATOR)
            .map(str::trim)
            .filter(|stop| !stop.is_empty())
            .map(String::from)
            .collect();

        Self { stops }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.stops.iter().any(|stop| stop == name)
    }

    pub fn is_match(&self, departure: &str, destination: &str) -> bool {
        self.contains(departure) || self.contains(destination)
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

impl Default for StopSet {
    fn default() -> Self {
        Self {
            stops: DEFAULT_STOPS.iter().map(|stop| stop.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub stops: StopSet,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_value(env::var(STOPS_ENV_VAR).ok().as_deref())
    }

    /// Builds the config from the raw env value; unset, empty or blank means the built-in list.
    pub fn from_value(value: Option<&str>) -> Self {
        let stops = match value.map(StopSet::parse) {
            Some(stops) if !stops.is_empty() => stops,
            _ => StopSet::default(),
        };

        Self { stops }
    }
}
