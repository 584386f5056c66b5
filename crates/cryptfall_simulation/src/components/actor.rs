//! Базовые компоненты персонажей: CharacterKind, Health, MeleeStats, HealthBar

use bevy::prelude::*;

/// Вид персонажа — определяет таблицу состояний и transition-правила
///
/// Player управляется input'ом, оба вида врагов — perception loop'ом.
/// MeleeEnemy и PatrolEnemy различаются только таблицей анимационных клипов.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum CharacterKind {
    Player,
    MeleeEnemy,
    PatrolEnemy,
}

impl CharacterKind {
    pub fn is_enemy(&self) -> bool {
        !matches!(self, Self::Player)
    }
}

/// Здоровье персонажа
///
/// Инвариант: 0 ≤ current ≤ max
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(2)
    }
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    /// Урон с clamp'ом на нуле (здоровье никогда не отрицательное)
    pub fn take_damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    /// Доля оставшегося здоровья (для health bar)
    pub fn ratio(&self) -> f32 {
        self.current as f32 / self.max as f32
    }
}

/// Параметры ближнего боя: радиус удара + фронтальный конус
///
/// cone_degrees — ПОЛНЫЙ угол конуса; hit-тест использует половину.
#[derive(Component, Debug, Clone, Copy, Reflect)]
pub struct MeleeStats {
    pub range: f32,
    pub cone_degrees: f32,
}

impl Default for MeleeStats {
    fn default() -> Self {
        Self {
            range: 1.5,
            cone_degrees: 90.0,
        }
    }
}

impl MeleeStats {
    pub fn range_squared(&self) -> f32 {
        self.range * self.range
    }

    /// Косинус половинного угла конуса (порог для dot-теста)
    pub fn cos_half_cone(&self) -> f32 {
        (self.cone_degrees * 0.5).to_radians().cos()
    }
}

/// Радиус зрения врага (за пределами — патруль, внутри — chase)
#[derive(Component, Debug, Clone, Copy, Reflect)]
pub struct VisionRadius {
    pub radius: f32,
}

impl Default for VisionRadius {
    fn default() -> Self {
        Self { radius: 10.0 }
    }
}

impl VisionRadius {
    pub fn radius_squared(&self) -> f32 {
        self.radius * self.radius
    }
}

/// Скорость прямого перемещения (метры/сек)
///
/// Используется игроком; враги делегируют скорость внешнему nav-агенту.
#[derive(Component, Debug, Clone, Copy, Reflect)]
pub struct MovementSpeed {
    pub speed: f32,
}

impl Default for MovementSpeed {
    fn default() -> Self {
        Self { speed: 3.0 }
    }
}

/// Health bar врага — наблюдаемый side effect для движка
///
/// scale.x — чистая функция current/max, пересчитывается после каждого удара.
/// Скрывается при смерти.
#[derive(Component, Debug, Clone, Reflect)]
pub struct HealthBar {
    pub scale: Vec3,
    pub visible: bool,
}

impl Default for HealthBar {
    fn default() -> Self {
        Self {
            scale: Vec3::ONE,
            visible: true,
        }
    }
}

impl HealthBar {
    pub fn set_ratio(&mut self, ratio: f32) {
        self.scale = Vec3::new(ratio, 1.0, 1.0);
    }
}

/// Proxy движкового коллайдера: ядро только включает/выключает
#[derive(Component, Debug, Clone, Copy, Reflect)]
pub struct ColliderState {
    pub enabled: bool,
}

impl Default for ColliderState {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_damage_clamps_at_zero() {
        let mut health = Health::new(2);
        assert_eq!(health.current, 2);

        health.take_damage(1);
        assert_eq!(health.current, 1);
        assert!(health.is_alive());

        health.take_damage(5); // Saturating sub
        assert_eq!(health.current, 0);
        assert!(!health.is_alive());

        health.take_damage(1); // Уже на нуле — остаётся ноль
        assert_eq!(health.current, 0);
    }

    #[test]
    fn test_health_ratio() {
        let mut health = Health::new(2);
        health.take_damage(1);
        assert_eq!(health.ratio(), 0.5);

        health.take_damage(1);
        assert_eq!(health.ratio(), 0.0);
    }

    #[test]
    fn test_health_bar_scale_from_ratio() {
        let mut bar = HealthBar::default();
        assert_eq!(bar.scale, Vec3::ONE);

        bar.set_ratio(0.5);
        assert_eq!(bar.scale, Vec3::new(0.5, 1.0, 1.0));
    }

    #[test]
    fn test_cone_threshold_uses_half_angle() {
        let stats = MeleeStats {
            range: 1.5,
            cone_degrees: 90.0,
        };
        // cos(45°) ≈ 0.7071
        assert!((stats.cos_half_cone() - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-5);
    }
}
