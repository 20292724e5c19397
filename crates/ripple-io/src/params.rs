//! Parameter file reader.
//!
//! The file holds whitespace-separated `<name> <value>` pairs. Only
//! position matters: the first five values are L, λ, c, r and T in that
//! order, and names are never checked. Reading stops at the first pair
//! whose value does not parse; anything after the fifth pair is ignored.

use std::fs;
use std::path::Path;

use ripple_core::params::PARAMETER_COUNT;
use ripple_core::SimulationParameters;
use tracing::warn;

use crate::error::ParameterSourceError;

/// Positional parameter names, for diagnostics only.
const POSITIONS: [&str; PARAMETER_COUNT] = [
    "domain_length",
    "wavelength",
    "wave_speed",
    "courant",
    "total_time",
];

/// What to do when fewer than five values parse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParameterDefaults {
    /// Fill the missing values with `0.0` and log a warning.
    #[default]
    ZeroFill,
    /// Fail with [`ParameterSourceError::MalformedOrIncompleteParameters`].
    Reject,
}

/// Parse parameter text.
///
/// # Examples
///
/// ```
/// use ripple_io::{parse_parameters, ParameterDefaults};
///
/// let text = "L 10\nlambda 2\nc 1\nr 0.5\nT 0.1\n";
/// let p = parse_parameters(text, ParameterDefaults::Reject).unwrap();
/// assert_eq!(p.domain_length, 10.0);
/// assert_eq!(p.total_time, 0.1);
/// ```
pub fn parse_parameters(
    text: &str,
    defaults: ParameterDefaults,
) -> Result<SimulationParameters, ParameterSourceError> {
    let mut values = [0.0; PARAMETER_COUNT];
    let mut found = 0;
    let mut tokens = text.split_whitespace();

    while found < PARAMETER_COUNT {
        let (Some(_name), Some(raw)) = (tokens.next(), tokens.next()) else {
            break;
        };
        let Ok(value) = raw.parse::<f64>() else {
            break;
        };
        values[found] = value;
        found += 1;
    }

    if found < PARAMETER_COUNT {
        match defaults {
            ParameterDefaults::Reject => {
                return Err(ParameterSourceError::MalformedOrIncompleteParameters {
                    found,
                    expected: PARAMETER_COUNT,
                });
            }
            ParameterDefaults::ZeroFill => {
                warn!(
                    found,
                    expected = PARAMETER_COUNT,
                    missing = ?&POSITIONS[found..],
                    "incomplete parameters, missing values set to 0"
                );
            }
        }
    }

    Ok(SimulationParameters::from_positional(values))
}

/// Read and parse the parameter file at `path`.
///
/// The file need not be UTF-8; only the values have to be ASCII numbers.
pub fn read_parameters(
    path: &Path,
    defaults: ParameterDefaults,
) -> Result<SimulationParameters, ParameterSourceError> {
    let bytes = fs::read(path).map_err(|source| ParameterSourceError::MissingParameterFile {
        path: path.to_path_buf(),
        source,
    })?;
    // Names are never inspected, so undecodable bytes in them are harmless.
    parse_parameters(&String::from_utf8_lossy(&bytes), defaults)
}
