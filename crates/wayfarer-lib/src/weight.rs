use serde::Serialize;

use crate::graph::RouteLeg;

/// Divisor applied to the raw per-kilometre emission rate before it enters
/// the weight. Kept for behavioural parity with previously generated routes;
/// this is a weighting coefficient, not a unit conversion.
pub const EMISSIONS_SCALE: f64 = 100.0;

/// A single additive term of an edge cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CostTerm {
    /// The leg distance in kilometres.
    Distance,
    /// Scaled CO2 emissions over the leg.
    Emissions,
    /// Travel time over the leg in hours.
    Time,
}

impl CostTerm {
    fn apply(self, leg: &RouteLeg) -> f64 {
        match self {
            CostTerm::Distance => leg.distance(),
            CostTerm::Emissions => (leg.mode().co2_per_km() / EMISSIONS_SCALE) * leg.distance(),
            CostTerm::Time => leg.distance() / leg.mode().average_speed(),
        }
    }
}

/// A composable cost function mapping a route leg to a scalar weight.
///
/// The weight is the sum of the configured terms; the base distance term is
/// always present. All terms are pure functions of the leg, so repeated
/// calls return identical values.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightFunction {
    terms: Vec<CostTerm>,
}

impl WeightFunction {
    /// The base weight function: distance only.
    pub fn distance() -> Self {
        Self {
            terms: vec![CostTerm::Distance],
        }
    }

    /// The terms this function sums, in application order.
    pub fn terms(&self) -> &[CostTerm] {
        &self.terms
    }

    /// Calculate the weight for a leg.
    pub fn calculate(&self, leg: &RouteLeg) -> f64 {
        self.terms.iter().map(|term| term.apply(leg)).sum()
    }
}

impl Default for WeightFunction {
    fn default() -> Self {
        Self::distance()
    }
}

/// Assembles a [`WeightFunction`] from per-request flags.
///
/// Every [`build`](WeightFunctionBuilder::build) starts from a fresh base
/// distance term, so a builder can be reused across requests; each requested
/// term is applied exactly once.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightFunctionBuilder {
    emissions: bool,
    time: bool,
}

impl WeightFunctionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Factor scaled CO2 emissions into the weights. Passing `false` is a
    /// no-op so request flags can be forwarded unconditionally.
    pub fn with_emissions(mut self, emissions: bool) -> Self {
        self.emissions = emissions;
        self
    }

    /// Factor travel time into the weights. Passing `false` is a no-op so
    /// request flags can be forwarded unconditionally.
    pub fn with_time(mut self, time: bool) -> Self {
        self.time = time;
        self
    }

    /// Build the weight function from the configured flags.
    pub fn build(&self) -> WeightFunction {
        let mut terms = vec![CostTerm::Distance];
        if self.emissions {
            terms.push(CostTerm::Emissions);
        }
        if self.time {
            terms.push(CostTerm::Time);
        }
        WeightFunction { terms }
    }
}
