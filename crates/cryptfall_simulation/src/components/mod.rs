//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - actor: базовые характеристики (kind, health, melee stats, health bar)
//! - movement: навигационный агент (surface движкового pathfinding)
//! - player: player control marker + sword trail VFX flag
//! - world: world-level ресурсы (victory point, input, win/lose banners)

pub mod actor;
pub mod movement;
pub mod player;
pub mod world;

// Re-exports для удобного импорта
pub use actor::*;
pub use movement::*;
pub use player::*;
pub use world::*;
