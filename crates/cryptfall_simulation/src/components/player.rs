//! Player control marker + sword trail VFX flag

use bevy::prelude::Component;

/// Marker component для player-controlled entity
///
/// Враждебные AI системы используют `Without<Player>` filter,
/// input-системы — `With<Player>`. В уровне ровно один такой entity.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;

/// Флаг sword-trail VFX (рендерится движком)
///
/// Включается/выключается по анимационным событиям StartTrail/StopTrail,
/// принудительно гасится на AttackEnd.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct SwordTrail {
    pub active: bool,
}
