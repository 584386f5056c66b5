//! CRYPTFALL Simulation Core
//!
//! Headless ECS-симуляция (strategic layer) маленького melee-экшена:
//! state-driven персонажи (игрок + два вида врагов), patrol/perception loop,
//! конусный melee-бой по damage-кадрам анимации, death sequencing.
//!
//! HYBRID ARCHITECTURE:
//! - ECS = strategic layer (состояния, combat rules, health, перцепция)
//! - Движок = tactical layer (рендер, анимационный blending, pathfinding,
//!   input polling) — общается с ядром через events и proxy-компоненты

use bevy::prelude::*;

// Публичные модули
pub mod ai;
pub mod animation;
pub mod combat;
pub mod components;
pub mod error;
pub mod logger;
pub mod player;
pub mod spawn;
pub mod state;

// Re-export базовых типов для удобства
pub use ai::{AIPlugin, PatrolPath, WAYPOINT_RADIUS};
pub use animation::{AnimationEvent, AnimationRequest, BLEND_TIME};
pub use combat::{
    within_attack_cone, CombatPlugin, DamageDealt, DeathPhase, EntityDied, HitLanded, PlayerDeath,
    LOSE_DELAY, SETTLE_DELAY, SINK_DURATION, SINK_SPEED,
};
pub use components::*;
pub use error::ConfigurationError;
pub use player::{PlayerPlugin, VICTORY_RADIUS};
pub use spawn::{spawn_enemy, spawn_player, ENEMY_MAX_HEALTH, PLAYER_MAX_HEALTH};
pub use state::{transition, CharState, EntryAction, StateMachine};

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            // Общий анимационный канал (движок ↔ ядро)
            .add_event::<AnimationEvent>()
            .add_event::<AnimationRequest>()
            // Подсистемы (ECS strategic layer)
            .add_plugins((PlayerPlugin, AIPlugin, CombatPlugin));
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app() -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins).add_plugins(SimulationPlugin);
    app
}

/// Продвигает симуляцию ровно на один fixed tick
///
/// Детерминированно: время двигается на фиксированный шаг вручную,
/// без wall-clock (для тестов и scripted-прогонов).
pub fn advance_fixed(app: &mut App) {
    let step = app.world().resource::<Time<Fixed>>().timestep();
    app.world_mut()
        .resource_mut::<Time<Fixed>>()
        .advance_by(step);
    app.world_mut().run_schedule(FixedUpdate);
}

/// Продвигает симуляцию на `ticks` fixed-тиков
pub fn advance_fixed_by(app: &mut App, ticks: u32) {
    for _ in 0..ticks {
        advance_fixed(app);
    }
}
