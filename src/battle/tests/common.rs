use crate::battle::state::BattleRng;
use crate::creature::{BaseStats, CreatureRecord, MoveRecord, StatusCondition};

/// A builder for creating test creature records with common defaults.
///
/// # Example
/// ```ignore
/// let pikachu = TestCreatureBuilder::new("pikachu")
///     .with_types(&["electric"])
///     .with_move(MoveRecord::damaging("thunder-shock", 40, "electric"))
///     .build();
/// ```
pub struct TestCreatureBuilder {
    name: String,
    stats: BaseStats,
    types: Vec<String>,
    moves: Vec<MoveRecord>,
}

impl TestCreatureBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            stats: BaseStats {
                hp: 100,
                attack: 50,
                defense: 50,
                special_attack: 50,
                special_defense: 50,
                speed: 50,
            },
            types: vec!["normal".to_string()],
            moves: Vec::new(),
        }
    }

    pub fn with_hp(mut self, hp: u32) -> Self {
        self.stats.hp = hp;
        self
    }

    pub fn with_attack(mut self, attack: u32) -> Self {
        self.stats.attack = attack;
        self.stats.special_attack = attack;
        self
    }

    pub fn with_defense(mut self, defense: u32) -> Self {
        self.stats.defense = defense;
        self.stats.special_defense = defense;
        self
    }

    pub fn with_speed(mut self, speed: u32) -> Self {
        self.stats.speed = speed;
        self
    }

    pub fn with_types(mut self, types: &[&str]) -> Self {
        self.types = types.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_move(mut self, move_: MoveRecord) -> Self {
        self.moves.push(move_);
        self
    }

    /// Builds the record. A builder with no moves gets no default move, so
    /// `InvalidParticipant` paths stay testable.
    pub fn build(self) -> CreatureRecord {
        CreatureRecord::new(&self.name, self.stats, self.types, self.moves)
    }
}

/// A plain physical move with no status rider.
pub fn tackle() -> MoveRecord {
    MoveRecord::damaging("tackle", 40, "normal")
}

/// A status-only move that does nothing the engine models, for stalemates.
pub fn splash() -> MoveRecord {
    MoveRecord::damaging("splash", 0, "normal")
}

/// A status-only move that always paralyzes.
pub fn thunder_wave() -> MoveRecord {
    MoveRecord::damaging("thunder-wave", 0, "electric")
        .with_status(StatusCondition::Paralysis, 100)
}

/// An rng whose rolls are high enough that no 25% paralysis proc and no
/// sub-100% status chance ever triggers.
pub fn quiet_rng() -> BattleRng {
    BattleRng::new_for_test(vec![99; 1000])
}
