use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// one of four fixed rider-preference archetypes used to re-rank
/// confidence-scored routes. this is a tag driving scoring formulas, not a
/// stored entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Persona {
    Rusher,
    #[default]
    SafePlanner,
    ComfortSeeker,
    Explorer,
}

impl Persona {
    /// parses a persona tag from caller input, falling back to the default
    /// persona for missing or unrecognized values. the boundary contract
    /// requires lenient handling here rather than an error.
    pub fn parse_or_default(value: Option<&str>) -> Persona {
        match value {
            None => Persona::default(),
            Some(s) => s.parse().unwrap_or_else(|_| {
                log::warn!("unrecognized persona '{s}', falling back to SAFE_PLANNER");
                Persona::default()
            }),
        }
    }

    /// short description of this persona's ranking preference.
    pub fn description(&self) -> &'static str {
        match self {
            Persona::Rusher => "prioritizes fastest routes with acceptable reliability",
            Persona::SafePlanner => "prioritizes highest reliability, avoids failure hotspots",
            Persona::ComfortSeeker => "prioritizes comfort, avoids crowds and transfers",
            Persona::Explorer => "balanced approach across speed, reliability, and comfort",
        }
    }
}

impl FromStr for Persona {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "RUSHER" => Ok(Persona::Rusher),
            "SAFE_PLANNER" => Ok(Persona::SafePlanner),
            "COMFORT_SEEKER" => Ok(Persona::ComfortSeeker),
            "EXPLORER" => Ok(Persona::Explorer),
            other => Err(format!("unknown persona '{other}'")),
        }
    }
}

impl Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Persona::Rusher => "RUSHER",
            Persona::SafePlanner => "SAFE_PLANNER",
            Persona::ComfortSeeker => "COMFORT_SEEKER",
            Persona::Explorer => "EXPLORER",
        };
        write!(f, "{s}")
    }
}
