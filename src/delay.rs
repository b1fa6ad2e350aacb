//! Turns an edge pair and the slack time between them into a connection
//! success probability.

use std::cell::RefCell;
use std::collections::HashMap;

use statrs::distribution::{ContinuousCDF, Gamma};

use crate::network::{EdgeProps, GammaParams, TType, Timestamp};

/// Mode-dependent buffer subtracted from the available slack before the
/// Gamma CDF is evaluated, chosen by the mode the traveller is *exiting*.
pub fn transfer_penalty(ttype: TType) -> Timestamp {
    match ttype {
        TType::Bus | TType::Foot => 20,
        TType::Tram => 30,
        TType::SBahn | TType::Extrazug => 100,
        TType::InterRegio
        | TType::Eurocity
        | TType::RegioExpress
        | TType::Ice
        | TType::Eurostar
        | TType::Intercity => 120,
        // Never consulted: the Init sentinel always carries gamma = None.
        TType::Init => 0,
    }
}

/// Probability of making the connection from `prev_props` to `curr_props`,
/// assuming `prev_props` is the earlier real leg and `curr_props` the next.
pub fn connection_probability(prev_props: &EdgeProps, curr_props: &EdgeProps) -> f64 {
    GammaCdfCache::new().connection_probability(prev_props, curr_props)
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct GammaKey(u64, u64, u64);

impl From<GammaParams> for GammaKey {
    fn from(params: GammaParams) -> Self {
        GammaKey(params.shape.to_bits(), params.loc.to_bits(), params.scale.to_bits())
    }
}

/// Per-search memoisation of the Gamma CDF, keyed by `(gamma params, t_eff
/// rounded to the nearest whole second)`. Never shared or persisted across
/// searches.
#[derive(Default)]
pub struct GammaCdfCache {
    cache: RefCell<HashMap<(GammaKey, i64), f64>>,
}

impl GammaCdfCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connection_probability(&self, prev_props: &EdgeProps, curr_props: &EdgeProps) -> f64 {
        if prev_props.trip_id == curr_props.trip_id {
            return 1.0;
        }
        if curr_props.ttype == TType::Foot {
            return 1.0;
        }
        let Some(gamma) = prev_props.gamma else {
            return 1.0;
        };

        let t_slack = curr_props.dep_time as i64 - prev_props.arr_time as i64;
        let penalty = transfer_penalty(prev_props.ttype) as i64;
        let t_eff = t_slack - penalty;
        self.gamma_cdf(gamma, t_eff)
    }

    fn gamma_cdf(&self, params: GammaParams, t_eff: i64) -> f64 {
        let key = (GammaKey::from(params), t_eff);
        if let Some(&cached) = self.cache.borrow().get(&key) {
            return cached;
        }

        let x = t_eff as f64 - params.loc;
        let probability = if x <= 0.0 {
            0.0
        } else {
            Gamma::new(params.shape, 1.0 / params.scale)
                .map(|dist| dist.cdf(x))
                .unwrap_or(0.0)
        };

        self.cache.borrow_mut().insert(key, probability);
        probability
    }
}
