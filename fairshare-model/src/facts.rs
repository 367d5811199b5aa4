//! Static reference data: country baselines and lifestyle tiers.
//!
//! Figures are illustrative consumption-based per-capita emissions drawn
//! from public sources, not authoritative inventories.

/// A country baseline available as a starting point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    /// Baseline per-capita footprint in tonnes CO₂e per year.
    pub emissions: f64,
}

pub static COUNTRIES: [Country; 10] = [
    Country { code: "USA", name: "United States", emissions: 16.1 },
    Country { code: "AUS", name: "Australia", emissions: 14.9 },
    Country { code: "CAN", name: "Canada", emissions: 14.2 },
    Country { code: "DEU", name: "Germany", emissions: 8.1 },
    Country { code: "JPN", name: "Japan", emissions: 8.0 },
    Country { code: "CHN", name: "China", emissions: 7.7 },
    Country { code: "GBR", name: "United Kingdom", emissions: 5.5 },
    Country { code: "FRA", name: "France", emissions: 5.3 },
    Country { code: "SWE", name: "Sweden", emissions: 4.7 },
    Country { code: "WLD", name: "World Average", emissions: 4.6 },
];

/// Look up a country by its code.
#[must_use]
pub fn country_by_code(code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|country| country.code == code)
}

/// A qualitative bucket of example behaviors for a footprint level.
/// Tiers form an ascending list of disjoint upper bounds; the last tier is
/// unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LifestyleTier {
    /// Upper bound in tonnes CO₂e per year; `f64::INFINITY` on the last tier.
    pub threshold: f64,
    pub title: &'static str,
    pub food: &'static [&'static str],
    pub mobility: &'static [&'static str],
    pub home: &'static [&'static str],
    pub stuff: &'static [&'static str],
}

impl LifestyleTier {
    /// Category key and phrase list pairs, in display order.
    #[must_use]
    pub const fn categories(&self) -> [(&'static str, &'static [&'static str]); 4] {
        [
            ("food", self.food),
            ("mobility", self.mobility),
            ("home", self.home),
            ("stuff", self.stuff),
        ]
    }
}

pub static LIFESTYLE_TIERS: [LifestyleTier; 4] = [
    LifestyleTier {
        threshold: 1.0,
        title: "Extreme",
        food: &[
            "Strictly vegan diet",
            "Hyper-local & homegrown food",
            "Zero food waste",
        ],
        mobility: &[
            "No flights",
            "Completely car-free living",
            "Radically local life",
        ],
        home: &[
            "Off-grid or equivalent energy",
            "Minimalist/smaller living spaces",
            "Minimal hot water use",
        ],
        stuff: &[
            "Consumption moratorium (buy almost nothing new)",
            "Radical repair & community sharing",
        ],
    },
    LifestyleTier {
        threshold: 2.5,
        title: "Ambitious",
        food: &[
            "Plant-rich diet (minimal meat/dairy)",
            "Low food waste",
            "Local & seasonal sourcing",
        ],
        mobility: &[
            "Mostly flight-free",
            "Car-free or very low use",
            "Prioritize public/active transport",
        ],
        home: &[
            "100% renewable electricity tariff",
            "High-efficiency, well-insulated home",
            "Sufficient, not excessive, space",
        ],
        stuff: &[
            "Drastically reduce new purchases",
            "Repair & reuse first",
            "Second-hand as a default",
        ],
    },
    LifestyleTier {
        threshold: 5.0,
        title: "Moderate",
        food: &[
            "Less & better meat (e.g., chicken over beef)",
            "Conscious of food waste",
            "Buy local when possible",
        ],
        mobility: &[
            "One short-haul flight every few years",
            "Drive an efficient EV/hybrid mindfully",
            "Use public transport for commutes",
        ],
        home: &[
            "Energy-saving habits",
            "Ensure good home insulation",
            "Switch to a green energy tariff",
        ],
        stuff: &[
            "Buy durable goods, not disposable",
            "Limit fast fashion",
            "Active recycling",
        ],
    },
    LifestyleTier {
        threshold: f64::INFINITY,
        title: "High (Efficiency Focus)",
        food: &[
            "Reduce beef intake",
            "Buy in bulk to reduce packaging",
            "Choose sustainable seafood",
        ],
        mobility: &[
            "Offset flights",
            "Drive an EV or Hybrid",
            "Combine trips to be more efficient",
        ],
        home: &[
            "Use smart home tech for efficiency",
            "Install solar panels",
            "LED lighting throughout",
        ],
        stuff: &[
            "Recycle electronics & clothing",
            "Choose brands with sustainability goals",
            "Avoid single-use plastics",
        ],
    },
];

/// Pick the tier describing a personal target: the first tier whose
/// threshold the target does not exceed, falling back to the unbounded last
/// tier.
#[must_use]
pub fn tier_for_target(target: f64) -> &'static LifestyleTier {
    LIFESTYLE_TIERS
        .iter()
        .find(|tier| target <= tier.threshold)
        .unwrap_or(&LIFESTYLE_TIERS[LIFESTYLE_TIERS.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_lookup_resolves_known_codes() {
        let usa = country_by_code("USA").unwrap();
        assert_eq!(usa.name, "United States");
        assert!((usa.emissions - 16.1).abs() < f64::EPSILON);
        assert!(country_by_code("ZZZ").is_none());
    }

    #[test]
    fn tiers_ascend_and_end_unbounded() {
        for pair in LIFESTYLE_TIERS.windows(2) {
            assert!(pair[0].threshold < pair[1].threshold);
        }
        assert!(LIFESTYLE_TIERS[LIFESTYLE_TIERS.len() - 1]
            .threshold
            .is_infinite());
    }

    #[test]
    fn tier_selection_honors_upper_bounds() {
        assert_eq!(tier_for_target(0.4).title, "Extreme");
        assert_eq!(tier_for_target(1.0).title, "Extreme");
        assert_eq!(tier_for_target(2.5).title, "Ambitious");
        assert_eq!(tier_for_target(4.9).title, "Moderate");
        assert_eq!(tier_for_target(40.0).title, "High (Efficiency Focus)");
    }

    #[test]
    fn every_tier_describes_all_four_categories() {
        for tier in &LIFESTYLE_TIERS {
            for (_, phrases) in tier.categories() {
                assert!(!phrases.is_empty(), "tier {} has an empty category", tier.title);
            }
        }
    }
}
