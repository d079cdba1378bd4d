//! Per-tick force rules.
//!
//! Rules define the external forces applied to particles each tick. They
//! are data, not behavior: the simulation interprets the rule list in order
//! before integrating. Leaving a rule out disables its force, which is how
//! deterministic test setups drop [`Rule::Jitter`].
//!
//! # Example
//!
//! ```ignore
//! Simulation::new()
//!     .with_rule(Rule::Flock(FlockConfig::default()))
//!     .with_rule(Rule::PointerAttract { radius: 300.0, strength: 0.15 })
//!     .with_rule(Rule::Jitter { strength: 0.05 })
//! ```

use crate::flocking::FlockConfig;

/// A force applied to particles every tick, in list order.
#[derive(Clone, Debug)]
pub enum Rule {
    /// Emergent flocking: alignment, cohesion and separation blended per
    /// [`FlockConfig`]. Evaluated on a rotating subset of particles each
    /// tick (see the simulation's flock stride) to bound per-tick cost.
    ///
    /// # Example
    ///
    /// ```ignore
    /// Rule::Flock(FlockConfig::default())
    /// ```
    Flock(FlockConfig),

    /// Attraction toward the current pointer position, for particles
    /// within `radius` of it. The force falls off linearly: full
    /// `strength` at the pointer, zero at the radius edge. Inactive while
    /// the pointer is off-surface.
    ///
    /// # Example
    ///
    /// ```ignore
    /// Rule::PointerAttract { radius: 300.0, strength: 0.15 }
    /// ```
    PointerAttract {
        /// Effect radius around the pointer.
        radius: f32,
        /// Force magnitude at distance zero.
        strength: f32,
    },

    /// A small random-direction force every tick, for organic drift even
    /// with no neighbors or pointer in range.
    ///
    /// # Example
    ///
    /// ```ignore
    /// Rule::Jitter { strength: 0.05 }
    /// ```
    Jitter {
        /// Magnitude of the random force.
        strength: f32,
    },
}

impl Rule {
    /// The standard rule stack for the full-viewport background effect.
    pub fn synaptic_defaults() -> Vec<Rule> {
        vec![
            Rule::Flock(FlockConfig::default()),
            Rule::PointerAttract {
                radius: 300.0,
                strength: 0.15,
            },
            Rule::Jitter { strength: 0.05 },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stack_has_all_three_forces() {
        let rules = Rule::synaptic_defaults();
        assert_eq!(rules.len(), 3);
        assert!(matches!(rules[0], Rule::Flock(_)));
        assert!(matches!(
            rules[1],
            Rule::PointerAttract { radius, strength } if radius == 300.0 && strength == 0.15
        ));
        assert!(matches!(rules[2], Rule::Jitter { strength } if strength == 0.05));
    }
}
