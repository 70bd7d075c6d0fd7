use crate::error::SetupError;
use crate::state::Race;

/// Tunable parameters of the tactical core.
///
/// Every field has a default, so data files only need to list overrides.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TacticsConfig {
    /// Radius around each combat unit in which hostiles are considered.
    pub proximity_radius: f32,
    /// Game seconds during which the army heads for the enemy start location
    /// when no structure has been seen.
    pub early_game_secs: f32,
    /// Surfaced stance-capable units burrow at or below this health fraction.
    pub burrow_at_health: f32,
    /// Burrowed units surface above this health fraction.
    pub unburrow_at_health: f32,
    /// Shield-retreat units disengage below this shield fraction.
    pub shield_retreat_below: f32,
    /// Army supply that opens the activation gate for Terran.
    pub terran_attack_supply: f32,
    /// Army supply that opens the activation gate for every other race.
    pub default_attack_supply: f32,
    /// How far a unit steps back while its weapon cools down.
    pub stutter_distance: f32,
    /// Search radius for a low-cost cell when retreating.
    pub safe_spot_radius: f32,
    /// Free supply below which another supply provider is requested.
    pub supply_buffer: u32,
    /// Run race macro tasks (chrono, MULE, depots, injects, burrow research).
    pub macro_tasks: bool,
}

impl TacticsConfig {
    // ===== fixed game constants =====
    pub const MAX_SUPPLY: u32 = 200;
    pub const CHRONO_ENERGY: f32 = 50.0;
    pub const MULE_ENERGY: f32 = 50.0;
    pub const INJECT_ENERGY: f32 = 25.0;
    pub const MULE_SEARCH_RADIUS: f32 = 10.0;
    pub const BURROW_COST_MINERALS: u32 = 100;
    pub const BURROW_COST_VESPENE: u32 = 100;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PROXIMITY_RADIUS: f32 = 15.0;
    pub const DEFAULT_EARLY_GAME_SECS: f32 = 240.0;
    pub const DEFAULT_BURROW_AT_HEALTH: f32 = 0.3;
    pub const DEFAULT_UNBURROW_AT_HEALTH: f32 = 0.9;
    pub const DEFAULT_SHIELD_RETREAT_BELOW: f32 = 0.3;
    pub const DEFAULT_TERRAN_ATTACK_SUPPLY: f32 = 3.0;
    pub const DEFAULT_ATTACK_SUPPLY: f32 = 6.0;
    pub const DEFAULT_STUTTER_DISTANCE: f32 = 4.0;
    pub const DEFAULT_SAFE_SPOT_RADIUS: f32 = 8.0;
    pub const DEFAULT_SUPPLY_BUFFER: u32 = 4;

    pub fn new() -> Self {
        Self {
            proximity_radius: Self::DEFAULT_PROXIMITY_RADIUS,
            early_game_secs: Self::DEFAULT_EARLY_GAME_SECS,
            burrow_at_health: Self::DEFAULT_BURROW_AT_HEALTH,
            unburrow_at_health: Self::DEFAULT_UNBURROW_AT_HEALTH,
            shield_retreat_below: Self::DEFAULT_SHIELD_RETREAT_BELOW,
            terran_attack_supply: Self::DEFAULT_TERRAN_ATTACK_SUPPLY,
            default_attack_supply: Self::DEFAULT_ATTACK_SUPPLY,
            stutter_distance: Self::DEFAULT_STUTTER_DISTANCE,
            safe_spot_radius: Self::DEFAULT_SAFE_SPOT_RADIUS,
            supply_buffer: Self::DEFAULT_SUPPLY_BUFFER,
            macro_tasks: true,
        }
    }

    /// Army supply required before the army starts attacking.
    pub fn attack_supply_threshold(&self, race: Race) -> f32 {
        match race {
            Race::Terran => self.terran_attack_supply,
            Race::Protoss | Race::Zerg => self.default_attack_supply,
        }
    }

    /// Rejects values that would break the stance hysteresis or the queries.
    pub fn validate(&self) -> Result<(), SetupError> {
        let fractions = [
            ("burrow_at_health", self.burrow_at_health),
            ("unburrow_at_health", self.unburrow_at_health),
            ("shield_retreat_below", self.shield_retreat_below),
        ];
        for (field, value) in fractions {
            if !(0.0..=1.0).contains(&value) {
                return Err(SetupError::InvalidConfig {
                    field,
                    reason: "must be within 0.0..=1.0",
                });
            }
        }

        if self.burrow_at_health >= self.unburrow_at_health {
            return Err(SetupError::InvalidConfig {
                field: "burrow_at_health",
                reason: "must be below unburrow_at_health",
            });
        }

        let distances = [
            ("proximity_radius", self.proximity_radius),
            ("stutter_distance", self.stutter_distance),
            ("safe_spot_radius", self.safe_spot_radius),
        ];
        for (field, value) in distances {
            if value.is_nan() || value <= 0.0 {
                return Err(SetupError::InvalidConfig {
                    field,
                    reason: "must be positive",
                });
            }
        }

        Ok(())
    }
}

impl Default for TacticsConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(TacticsConfig::default().validate().is_ok());
    }

    #[test]
    fn terran_attacks_earlier() {
        let config = TacticsConfig::default();
        assert_eq!(config.attack_supply_threshold(Race::Terran), 3.0);
        assert_eq!(config.attack_supply_threshold(Race::Zerg), 6.0);
        assert_eq!(config.attack_supply_threshold(Race::Protoss), 6.0);
    }

    #[test]
    fn inverted_hysteresis_is_rejected() {
        let config = TacticsConfig {
            burrow_at_health: 0.9,
            unburrow_at_health: 0.3,
            ..TacticsConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SetupError::InvalidConfig {
                field: "burrow_at_health",
                ..
            })
        ));
    }

    #[test]
    fn non_positive_radius_is_rejected() {
        let config = TacticsConfig {
            proximity_radius: 0.0,
            ..TacticsConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
