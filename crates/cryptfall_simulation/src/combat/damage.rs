//! Применение урона и триггер смерти

use bevy::prelude::*;

use crate::animation::AnimationRequest;
use crate::combat::{DamageDealt, DeathPhase, EntityDied, HitLanded, PlayerDeath};
use crate::components::{ColliderState, Health, HealthBar, NavAgent, Player};
use crate::state::{transition, CharState, StateMachine};

/// Система: HitLanded → мутация здоровья → (однократный) переход в Die
///
/// Смерть триггерится по СОСТОЯНИЮ, не по здоровью: сколько бы damage-событий
/// ни пришло за кадр после обнуления, переход в Die выполняется один раз.
/// Health bar пересчитывается после каждого удара (наблюдаемый side effect).
pub fn apply_damage(
    mut hits: EventReader<HitLanded>,
    mut characters: Query<(
        &mut Health,
        &mut StateMachine,
        Option<&mut HealthBar>,
        Option<&mut NavAgent>,
        Option<&mut ColliderState>,
        Has<Player>,
    )>,
    mut commands: Commands,
    mut anim: EventWriter<AnimationRequest>,
    mut dealt: EventWriter<DamageDealt>,
    mut died: EventWriter<EntityDied>,
) {
    for hit in hits.read() {
        let Ok((mut health, mut machine, mut health_bar, mut agent, collider, is_player)) =
            characters.get_mut(hit.target)
        else {
            continue;
        };

        health.take_damage(hit.amount);

        if let Some(bar) = health_bar.as_mut() {
            bar.set_ratio(health.ratio());
        }

        dealt.write(DamageDealt {
            attacker: hit.attacker,
            target: hit.target,
            amount: hit.amount,
            remaining_health: health.current,
        });

        if health.current == 0 && machine.current != CharState::Die {
            transition(
                hit.target,
                &mut machine,
                CharState::Die,
                agent.as_deref_mut(),
                &mut anim,
            );

            if is_player {
                commands.entity(hit.target).insert(PlayerDeath::default());
            } else {
                if let Some(mut collider) = collider {
                    collider.enabled = false;
                }
                if let Some(bar) = health_bar.as_mut() {
                    bar.visible = false;
                }
                commands.entity(hit.target).insert(DeathPhase::JustDied);
            }

            died.write(EntityDied { entity: hit.target });
            crate::logger::log_info(&format!("💀 {:?} died", hit.target));
        }
    }
}
