//! Derivation of per-exploration target numbers.

use crate::constants::{
    ENERGY_SHARE, FOOD_REDUCTION, FOOD_SHARE, GRID_REDUCTION, OVERALL_TARGET, TRANSPORT_REDUCTION,
    TRANSPORT_SHARE,
};
use crate::exploration::Exploration;
use crate::facts::country_by_code;

/// Numbers derived from one exploration against the static tables.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DerivedTargets {
    /// National baseline after the enabled structural changes.
    pub adjusted_emissions: f64,
    /// Required average footprint for participants so the population-wide
    /// mean meets [`OVERALL_TARGET`].
    pub personal_target: f64,
    /// No non-negative personal target can satisfy the population average.
    pub is_impossible: bool,
}

/// Compute the derived numbers for an exploration.
///
/// Pure and deterministic; invoked on demand rather than cached. An
/// exploration without a resolvable country is a valid state and yields the
/// all-zero result.
#[must_use]
pub fn derive_targets(exploration: &Exploration) -> DerivedTargets {
    let Some(country) = exploration
        .country_code
        .as_deref()
        .and_then(country_by_code)
    else {
        return DerivedTargets::default();
    };

    let baseline = country.emissions;
    let changes = exploration.structural_changes;

    let mut reduction = 0.0;
    if changes.grid {
        reduction += baseline * ENERGY_SHARE * GRID_REDUCTION;
    }
    if changes.transport {
        reduction += baseline * TRANSPORT_SHARE * TRANSPORT_REDUCTION;
    }
    if changes.food {
        reduction += baseline * FOOD_SHARE * FOOD_REDUCTION;
    }
    // Unclamped: the shipped factors cannot push this negative, and a
    // negative value would mean misconfigured reference data.
    let adjusted_emissions = baseline - reduction;

    // The non-participating fraction keeps the adjusted baseline; the
    // participating fraction must average down to hit the overall target.
    let participation = f64::from(exploration.participation_rate) / 100.0;
    // The rate control bottoms out at 1, so the guard branch is never taken
    // in normal operation.
    let personal_target = if participation > 0.0 {
        (OVERALL_TARGET - (1.0 - participation) * adjusted_emissions) / participation
    } else {
        f64::INFINITY
    };

    DerivedTargets {
        adjusted_emissions,
        personal_target,
        is_impossible: personal_target < 0.0,
    }
}
