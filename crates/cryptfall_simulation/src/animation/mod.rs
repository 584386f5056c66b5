//! Animation Event Bridge — явная событийная очередь между движком и ядром
//!
//! Входящий канал: движок постит [`AnimationEvent`] на авторских keyframe'ах
//! клипа, ядро потребляет их в порядке тиков (combat resolver). Урон всегда
//! синхронизирован с damage-кадром анимации, никогда с произвольным тиком.
//!
//! Исходящий канал: ядро запрашивает cross-fade клипа через
//! [`AnimationRequest`], движок исполняет blending.

use bevy::prelude::*;

/// Фиксированное время blend'а для каждого перехода клипа
pub const BLEND_TIME: f32 = 0.1;

/// Имена анимационных клипов (должны совпадать с ригом)
pub mod clips {
    pub const IDLE: &str = "Idle";
    pub const RUN: &str = "Run";
    pub const ATTACK: &str = "Attack";
    pub const DIE: &str = "Die";
}

/// Имена keyframe-событий, которые понимает gameplay-логика
///
/// Неизвестные имена молча игнорируются.
pub mod names {
    /// Damage-кадр атаки: момент hit-теста и применения урона
    pub const ATTACK_DAMAGE: &str = "AttackDamage";
    /// Конец клипа атаки: выход из sticky Attack-состояния
    pub const ATTACK_END: &str = "AttackEnd";
    pub const START_TRAIL: &str = "StartTrail";
    pub const STOP_TRAIL: &str = "StopTrail";
}

/// Событие с анимационного keyframe'а (движок → ядро)
///
/// Тегировано entity персонажа: одна очередь на мир, scoping по entity.
#[derive(Event, Debug, Clone)]
pub struct AnimationEvent {
    pub entity: Entity,
    pub name: String,
}

/// Запрос cross-fade на именованный клип (ядро → движок)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct AnimationRequest {
    pub entity: Entity,
    pub clip: &'static str,
    pub blend: f32,
}
