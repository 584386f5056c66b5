//! Ошибки конфигурации контента
//!
//! Gameplay-ядро не имеет recoverable-error taxonomy (real-time симуляция
//! без I/O); ошибки здесь — баги авторинга уровня, ловим их при спавне,
//! а не в рантайме тика.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Patrol-путь обязан содержать хотя бы одну точку —
    /// пустой путь это ошибка контента, fail fast вместо out-of-bounds
    #[error("patrol path must contain at least one waypoint")]
    EmptyPatrolPath,
}
