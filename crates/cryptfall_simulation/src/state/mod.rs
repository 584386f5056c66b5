//! Character State Machine — общий паттерн для всех трёх видов персонажей
//!
//! Один generic тип состояний + data-driven таблица entry-действий на вид
//! персонажа (вместо продублированных enum-switch'ей на каждый контроллер).
//! `set_state` идемпотентен: переход в текущее состояние — no-op, entry-
//! действие выполняется ровно один раз на фактический переход. Exit-действий
//! нет: вся уборка — в entry следующего состояния или в death sequencing.

use bevy::prelude::*;

use crate::animation::{clips, AnimationRequest, BLEND_TIME};
use crate::components::{CharacterKind, NavAgent};

/// Состояния персонажа
///
/// Игрок не использует Chase. Die терминально (one-way, без возврата).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum CharState {
    Idle,
    Run,
    Chase,
    Attack,
    Die,
}

/// Entry-действие состояния: команда агенту + запрос клипа
///
/// stop_agent = None у игрока (двигается напрямую, без nav-агента).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntryAction {
    pub stop_agent: Option<bool>,
    pub clip: &'static str,
}

/// Таблица entry-действий: (вид персонажа, состояние) → действие
///
/// Chase переиспользует клип Run. У MeleeEnemy клипы Attack/Die в авторском
/// контроллере стоят крест-накрест — имена сохранены как в контенте рига.
pub const fn entry_action(kind: CharacterKind, state: CharState) -> EntryAction {
    let stop_agent = match (kind, state) {
        (CharacterKind::Player, _) => None,
        (_, CharState::Run | CharState::Chase) => Some(false),
        (_, CharState::Idle | CharState::Attack | CharState::Die) => Some(true),
    };

    let clip = match (kind, state) {
        (CharacterKind::MeleeEnemy, CharState::Attack) => clips::DIE,
        (CharacterKind::MeleeEnemy, CharState::Die) => clips::ATTACK,
        (_, CharState::Idle) => clips::IDLE,
        (_, CharState::Run | CharState::Chase) => clips::RUN,
        (_, CharState::Attack) => clips::ATTACK,
        (_, CharState::Die) => clips::DIE,
    };

    EntryAction { stop_agent, clip }
}

/// Конечный автомат персонажа
///
/// Ровно одно активное состояние; transition-правила живут в тиковых
/// системах (player_tick / enemy_tick), сюда приходят уже принятые решения.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
pub struct StateMachine {
    pub kind: CharacterKind,
    pub current: CharState,
}

impl StateMachine {
    pub fn new(kind: CharacterKind) -> Self {
        Self {
            kind,
            current: CharState::Idle,
        }
    }

    /// Переход состояния: no-op при совпадении, иначе возвращает
    /// entry-действие (ровно один раз) и коммитит новое состояние.
    ///
    /// Из Die выхода нет.
    pub fn set_state(&mut self, next: CharState) -> Option<EntryAction> {
        if self.current == next || self.current == CharState::Die {
            return None;
        }
        let entry = entry_action(self.kind, next);
        self.current = next;
        Some(entry)
    }
}

/// Применяет переход к ECS-окружению персонажа: команда агенту + клип
///
/// Возвращает true если переход фактически произошёл.
pub fn transition(
    entity: Entity,
    machine: &mut StateMachine,
    next: CharState,
    agent: Option<&mut NavAgent>,
    anim: &mut EventWriter<AnimationRequest>,
) -> bool {
    let previous = machine.current;
    let Some(entry) = machine.set_state(next) else {
        return false;
    };

    if let (Some(agent), Some(stopped)) = (agent, entry.stop_agent) {
        agent.stopped = stopped;
    }

    anim.write(AnimationRequest {
        entity,
        clip: entry.clip,
        blend: BLEND_TIME,
    });

    crate::logger::log(&format!(
        "🎭 {:?} {:?}: {:?} → {:?}",
        machine.kind, entity, previous, next
    ));

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_state_is_idempotent() {
        let mut machine = StateMachine::new(CharacterKind::PatrolEnemy);

        // Первый переход — entry-действие ровно один раз
        assert!(machine.set_state(CharState::Run).is_some());
        assert_eq!(machine.current, CharState::Run);

        // Повторный set_state с тем же состоянием — no-op
        assert!(machine.set_state(CharState::Run).is_none());
        assert_eq!(machine.current, CharState::Run);
    }

    #[test]
    fn test_die_is_terminal() {
        let mut machine = StateMachine::new(CharacterKind::PatrolEnemy);
        assert!(machine.set_state(CharState::Die).is_some());

        // Из Die не выйти ни в одно состояние
        assert!(machine.set_state(CharState::Idle).is_none());
        assert!(machine.set_state(CharState::Run).is_none());
        assert_eq!(machine.current, CharState::Die);
    }

    #[test]
    fn test_chase_reuses_run_clip() {
        let entry = entry_action(CharacterKind::PatrolEnemy, CharState::Chase);
        assert_eq!(entry.clip, clips::RUN);
        assert_eq!(entry.stop_agent, Some(false));
    }

    #[test]
    fn test_player_has_no_agent_commands() {
        for state in [
            CharState::Idle,
            CharState::Run,
            CharState::Attack,
            CharState::Die,
        ] {
            assert_eq!(entry_action(CharacterKind::Player, state).stop_agent, None);
        }
    }

    #[test]
    fn test_melee_enemy_attack_die_clips_are_swapped() {
        // Авторский риг MeleeEnemy: Attack-состояние играет клип "Die" и наоборот
        let attack = entry_action(CharacterKind::MeleeEnemy, CharState::Attack);
        let die = entry_action(CharacterKind::MeleeEnemy, CharState::Die);
        assert_eq!(attack.clip, clips::DIE);
        assert_eq!(die.clip, clips::ATTACK);

        // У PatrolEnemy клипы прямые
        let attack = entry_action(CharacterKind::PatrolEnemy, CharState::Attack);
        assert_eq!(attack.clip, clips::ATTACK);
    }

    #[test]
    fn test_enemy_attack_and_die_stop_agent() {
        for state in [CharState::Idle, CharState::Attack, CharState::Die] {
            let entry = entry_action(CharacterKind::PatrolEnemy, state);
            assert_eq!(entry.stop_agent, Some(true));
        }
    }
}
