//! Error types for the simulator.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when simulation parameters are invalid
//!   (zero contents, zero edges, negative capacity, negative alpha, unknown
//!   policy name).
//! - [`SimError`]: Returned by [`Simulation::run`](crate::simulation::Simulation::run);
//!   wraps a [`ConfigError`] or reports a negative request count.
//!
//! Neither error is transient. A run either starts with a valid configuration
//! and completes, or it never starts.
//!
//! ## Example Usage
//!
//! ```
//! use cdnsim::create_simulation;
//! use cdnsim::error::SimError;
//!
//! let err = create_simulation(0, 1.0, 1, 10, "LRU", 42).unwrap_err();
//! assert!(err.to_string().contains("n_contents"));
//!
//! let sim = create_simulation(100, 1.0, 1, 10, "LRU", 42).unwrap();
//! assert_eq!(sim.run(-1), Err(SimError::InvalidRequestCount(-1)));
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// A simulation parameter outside its valid range, or an unknown policy name.
///
/// The message names the offending parameter and, where there is one, the
/// rejected value, e.g. `"edges must be >= 1, got 0"`. Raised by
/// [`SimulationConfig::validate`](crate::config::SimulationConfig::validate),
/// [`create_simulation`](crate::create_simulation),
/// [`PopularitySampler::new`](crate::popularity::PopularitySampler::new),
/// [`RequestRouter::new`](crate::router::RequestRouter::new) and policy-name
/// parsing.
///
/// # Example
///
/// ```
/// use cdnsim::builder::PolicyKind;
/// use cdnsim::popularity::PopularitySampler;
///
/// let err = PopularitySampler::new(10, -0.5).unwrap_err();
/// assert!(err.message().starts_with("alpha"));
///
/// let err = "ARC".parse::<PolicyKind>().unwrap_err();
/// assert!(err.to_string().contains("ARC"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Wraps a message naming the rejected parameter.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// The message, without the `invalid configuration` prefix that
    /// [`SimError`] adds.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// SimError
// ---------------------------------------------------------------------------

/// Error returned by a simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// The simulation was configured with invalid parameters.
    Config(ConfigError),
    /// A negative number of requests was asked for. Raised before any sampling.
    InvalidRequestCount(i64),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Config(err) => write!(f, "invalid configuration: {}", err),
            SimError::InvalidRequestCount(n) => {
                write!(f, "request count must be >= 0, got {}", n)
            },
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Config(err) => Some(err),
            SimError::InvalidRequestCount(_) => None,
        }
    }
}

impl From<ConfigError> for SimError {
    fn from(err: ConfigError) -> Self {
        SimError::Config(err)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
