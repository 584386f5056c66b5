//! Combat module — resolver урона + death sequencing
//!
//! Урон триггерится ТОЛЬКО анимационными событиями (damage-кадр),
//! никогда тиковым loop'ом напрямую. Условия попадания перепроверяются
//! в момент события, а не кэшируются со входа в Attack.

use bevy::prelude::*;

pub mod damage;
pub mod death;
pub mod resolve;

pub use damage::apply_damage;
pub use death::{DeathPhase, PlayerDeath, LOSE_DELAY, SETTLE_DELAY, SINK_DURATION, SINK_SPEED};
pub use resolve::{dispatch_animation_events, within_attack_cone};

/// Подтверждённое попадание (resolver → apply_damage)
#[derive(Event, Debug, Clone)]
pub struct HitLanded {
    pub attacker: Entity,
    pub target: Entity,
    pub amount: u32,
}

/// Урон применён (для bridge'а: hit VFX, звук)
#[derive(Event, Debug, Clone)]
pub struct DamageDealt {
    pub attacker: Entity,
    pub target: Entity,
    pub amount: u32,
    pub remaining_health: u32,
}

/// Персонаж умер (переход в Die состоялся, ровно один раз на персонажа)
#[derive(Event, Debug, Clone)]
pub struct EntityDied {
    pub entity: Entity,
}

/// Combat Plugin
///
/// Порядок выполнения (chain):
/// 1. dispatch_animation_events — события keyframe'ов → hit-тесты
/// 2. advance_death_phases — подвижка death sub-state machine врагов
/// 3. advance_player_death — таймер lose banner'а
/// 4. apply_damage — мутация здоровья + триггер смерти
///
/// apply_damage стоит ПОСЛЕ death-систем: свежая смерть подхватывается
/// ими на следующем тике, что даёт death sequencing'у честный
/// "один кадр на вступление в силу" перед отключением агента.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<HitLanded>()
            .add_event::<DamageDealt>()
            .add_event::<EntityDied>();

        app.add_systems(
            FixedUpdate,
            (
                resolve::dispatch_animation_events,
                death::advance_death_phases,
                death::advance_player_death,
                damage::apply_damage,
            )
                .chain(),
        );
    }
}
