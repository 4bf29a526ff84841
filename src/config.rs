use std::collections::BTreeSet;

use crate::error::ConfigError;

/// Default set of accepted cage face counts.
const DEFAULT_SIZES: std::ops::RangeInclusive<usize> = 3..=8;

/// Default maximum ring size considered by the ring enumeration collaborator.
const DEFAULT_MAX_RING: usize = 8;

/// Open range bounds: `-16` means `1-16`, `12-` means `12-20`.
const OPEN_RANGE_LO: usize = 1;
const OPEN_RANGE_HI: usize = 20;

/// Configuration for one cage analysis run.
///
/// Built once (programmatically or via [`AnalysisConfig::parse`]) and passed
/// explicitly to the analysis entry point; there is no ambient global.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Accepted cage face counts.
    pub sizes: BTreeSet<usize>,
    /// Maximum ring size the ring enumeration collaborator was asked for.
    pub max_ring: usize,
    /// Optional cap on cage-search steps; exceeding it truncates the run.
    pub step_budget: Option<usize>,
    max_cage_size: Option<usize>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.collect(),
            max_ring: DEFAULT_MAX_RING,
            step_budget: None,
            max_cage_size: None,
        }
    }
}

impl AnalysisConfig {
    /// Parses an option string.
    ///
    /// Grammar: colon-separated clauses. A `key=value` clause sets `maxring`
    /// or `maxcagesize`; any other clause is a comma-separated list of face
    /// counts (`12`) and inclusive ranges (`14-16`; `-16` counts from
    /// 1, `12-` counts up to 20). An empty size list falls back to the
    /// default of 3 to 8.
    ///
    /// # Errors
    ///
    /// Returns a configuration error on an unknown option key, an
    /// unparseable value, or a malformed or empty size range.
    pub fn parse(arg: &str) -> Result<Self, ConfigError> {
        let mut sizes = BTreeSet::new();
        let mut max_ring = DEFAULT_MAX_RING;
        let mut max_cage_size = None;

        if !arg.is_empty() {
            for clause in arg.split(':') {
                if let Some((key, value)) = clause.split_once('=') {
                    match key {
                        "maxring" => max_ring = parse_count(key, value)?,
                        "maxcagesize" => max_cage_size = Some(parse_count(key, value)?),
                        _ => return Err(ConfigError::UnknownOption(key.to_string())),
                    }
                } else {
                    for spec in clause.split(',') {
                        parse_size_spec(spec, &mut sizes)?;
                    }
                }
            }
        }

        if sizes.is_empty() {
            sizes = DEFAULT_SIZES.collect();
        }

        Ok(Self {
            sizes,
            max_ring,
            step_budget: None,
            max_cage_size,
        })
    }

    /// Overrides the cage-search bound.
    #[must_use]
    pub fn with_max_cage_size(mut self, bound: usize) -> Self {
        self.max_cage_size = Some(bound);
        self
    }

    /// Imposes a search-step budget.
    #[must_use]
    pub fn with_step_budget(mut self, steps: usize) -> Self {
        self.step_budget = Some(steps);
        self
    }

    /// The cage-search bound: the explicit override if set, otherwise the
    /// largest accepted face count.
    #[must_use]
    pub fn max_cage_size(&self) -> usize {
        self.max_cage_size
            .unwrap_or_else(|| self.sizes.last().copied().unwrap_or(0))
    }
}

fn parse_count(option: &str, value: &str) -> Result<usize, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        option: option.to_string(),
        value: value.to_string(),
    })
}

fn parse_size_spec(spec: &str, sizes: &mut BTreeSet<usize>) -> Result<(), ConfigError> {
    let invalid = || ConfigError::InvalidSizeSpec(spec.to_string());
    if let Some((lo, hi)) = spec.split_once('-') {
        let lo = if lo.is_empty() {
            OPEN_RANGE_LO
        } else {
            lo.parse().map_err(|_| invalid())?
        };
        let hi = if hi.is_empty() {
            OPEN_RANGE_HI
        } else {
            hi.parse().map_err(|_| invalid())?
        };
        if lo > hi {
            return Err(ConfigError::EmptySizeRange { lo, hi });
        }
        sizes.extend(lo..=hi);
    } else {
        sizes.insert(spec.parse().map_err(|_| invalid())?);
    }
    Ok(())
}
