//! Combat resolver: диспетчеризация анимационных событий в hit-тесты
//!
//! Игрок бьёт конусом по всем живым врагам мира, враг — единственную цель
//! (игрока) с повторной проверкой дистанции в момент damage-кадра.

use bevy::prelude::*;

use crate::animation::{names, AnimationEvent, AnimationRequest};
use crate::combat::HitLanded;
use crate::components::{Health, MeleeStats, Player, SwordTrail};
use crate::state::{transition, CharState, StateMachine};

/// Урон за одно попадание (в обе стороны, без критов и falloff'а)
pub const HIT_DAMAGE: u32 = 1;

/// Проверка фронтального конуса: цель должна лежать СТРОГО внутри
///
/// Граница исключена: при cos угла, равном порогу, попадания нет.
pub fn within_attack_cone(forward: Vec3, to_target: Vec3, cos_half_cone: f32) -> bool {
    cos_half_cone < to_target.normalize_or_zero().dot(forward)
}

/// Система: потребление очереди анимационных событий
///
/// Известные имена маппятся на combat resolver / state machine,
/// неизвестные имена и entity без подписчика молча игнорируются.
pub fn dispatch_animation_events(
    mut events: EventReader<AnimationEvent>,
    mut hits: EventWriter<HitLanded>,
    mut anim: EventWriter<AnimationRequest>,
    mut players: Query<
        (
            Entity,
            &Transform,
            &Health,
            &MeleeStats,
            &mut StateMachine,
            &mut SwordTrail,
        ),
        With<Player>,
    >,
    enemies: Query<(Entity, &Transform, &MeleeStats), Without<Player>>,
) {
    for event in events.read() {
        if players.contains(event.entity) {
            let Ok((player_entity, player_transform, _, stats, mut machine, mut trail)) =
                players.get_mut(event.entity)
            else {
                continue;
            };

            match event.name.as_str() {
                names::ATTACK_DAMAGE => {
                    // Конусная атака: перебор всех зарегистрированных врагов
                    let forward = *player_transform.forward();
                    let cos_half = stats.cos_half_cone();

                    for (enemy_entity, enemy_transform, _) in enemies.iter() {
                        let to_target = enemy_transform.translation - player_transform.translation;
                        if to_target.length_squared() < stats.range_squared()
                            && within_attack_cone(forward, to_target, cos_half)
                        {
                            hits.write(HitLanded {
                                attacker: player_entity,
                                target: enemy_entity,
                                amount: HIT_DAMAGE,
                            });
                            crate::logger::log(&format!(
                                "⚔️ Player hit {:?} (cone check passed)",
                                enemy_entity
                            ));
                        }
                    }
                }
                names::ATTACK_END => {
                    trail.active = false;
                    transition(player_entity, &mut machine, CharState::Idle, None, &mut anim);
                }
                names::START_TRAIL => trail.active = true,
                names::STOP_TRAIL => trail.active = false,
                _ => {}
            }
            continue;
        }

        if let Ok((enemy_entity, enemy_transform, stats)) = enemies.get(event.entity) {
            match event.name.as_str() {
                names::ATTACK_DAMAGE => {
                    let Ok((player_entity, player_transform, player_health, _, _, _)) =
                        players.single_mut()
                    else {
                        continue;
                    };

                    // Дистанция перепроверяется в момент damage-кадра:
                    // сбежавший за время замаха игрок урона не получает
                    let dist_sq = player_transform
                        .translation
                        .distance_squared(enemy_transform.translation);

                    if player_health.is_alive() && dist_sq < stats.range_squared() {
                        hits.write(HitLanded {
                            attacker: enemy_entity,
                            target: player_entity,
                            amount: HIT_DAMAGE,
                        });
                    }
                }
                names::ATTACK_END => {
                    crate::logger::log(&format!("🗡️ {:?} attack animation ended", enemy_entity));
                }
                _ => {}
            }
        }
    }
}
