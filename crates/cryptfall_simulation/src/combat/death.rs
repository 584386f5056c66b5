//! Death sequencing — явный sub-state machine вместо корутин
//!
//! Вражеская цепочка: JustDied (один кадр) → Settling (пауза на death-клип)
//! → Sinking (погружение в пол) → despawn. Удаление entity из мира И есть
//! удаление из реестра врагов. Цепочка никогда не отменяется.
//!
//! Путь игрока асимметричен: фиксированная пауза → lose banner, без
//! погружения и без despawn'а.

use bevy::prelude::*;

use crate::components::{NavAgent, OutcomeBanners};

/// Пауза перед погружением (death-клип успевает проиграться)
pub const SETTLE_DELAY: f32 = 1.0;
/// Длительность погружения в пол
pub const SINK_DURATION: f32 = 2.0;
/// Скорость погружения (юниты/сек вниз)
pub const SINK_SPEED: f32 = 0.5;
/// Пауза перед lose banner'ом после смерти игрока
pub const LOSE_DELAY: f32 = 2.0;

/// Фаза вражеской death-цепочки (продвигается каждый тик)
#[derive(Component, Debug, Clone, PartialEq)]
pub enum DeathPhase {
    /// Смерть только что случилась; кадр ожидания, чтобы выключенный
    /// коллайдер вступил в силу до дальнейших мутаций
    JustDied,
    Settling { remaining: f32 },
    Sinking { remaining: f32 },
}

/// Таймер смерти игрока (до показа lose banner'а)
#[derive(Component, Debug, Clone)]
pub struct PlayerDeath {
    pub remaining: f32,
}

impl Default for PlayerDeath {
    fn default() -> Self {
        Self {
            remaining: LOSE_DELAY,
        }
    }
}

/// Система: продвижка вражеских death-цепочек
pub fn advance_death_phases(
    mut dying: Query<(Entity, &mut DeathPhase, &mut Transform, &mut NavAgent)>,
    time: Res<Time<Fixed>>,
    mut commands: Commands,
) {
    let delta = time.delta_secs();

    for (entity, mut phase, mut transform, mut agent) in dying.iter_mut() {
        match &mut *phase {
            DeathPhase::JustDied => {
                // Кадр прошёл — теперь агента можно гасить полностью
                agent.enabled = false;
                *phase = DeathPhase::Settling {
                    remaining: SETTLE_DELAY,
                };
            }
            DeathPhase::Settling { remaining } => {
                *remaining -= delta;
                if *remaining <= 0.0 {
                    *phase = DeathPhase::Sinking {
                        remaining: SINK_DURATION,
                    };
                }
            }
            DeathPhase::Sinking { remaining } => {
                transform.translation.y -= SINK_SPEED * delta;
                *remaining -= delta;
                if *remaining <= 0.0 {
                    commands.entity(entity).despawn();
                    crate::logger::log(&format!("⚰️ {:?} sank and was removed", entity));
                }
            }
        }
    }
}

/// Система: таймер смерти игрока → lose banner
pub fn advance_player_death(
    mut dying: Query<(Entity, &mut PlayerDeath)>,
    mut banners: ResMut<OutcomeBanners>,
    time: Res<Time<Fixed>>,
    mut commands: Commands,
) {
    let delta = time.delta_secs();

    for (entity, mut death) in dying.iter_mut() {
        death.remaining -= delta;
        if death.remaining <= 0.0 {
            banners.lose_visible = true;
            commands.entity(entity).remove::<PlayerDeath>();
            crate::logger::log_info("☠️ Player death delay elapsed, lose banner revealed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_death_phase_timings_total_about_three_seconds() {
        // 1 кадр + 1.0 settle + 2.0 sink ≈ 3 временных юнита
        assert_eq!(SETTLE_DELAY + SINK_DURATION, 3.0);
    }

    #[test]
    fn test_player_death_defaults_to_lose_delay() {
        assert_eq!(PlayerDeath::default().remaining, LOSE_DELAY);
    }
}
