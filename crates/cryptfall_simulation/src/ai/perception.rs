//! Perception loop врага: attack range → vision → патруль

use bevy::prelude::*;

use crate::ai::{PatrolPath, WAYPOINT_RADIUS};
use crate::animation::AnimationRequest;
use crate::components::{Health, MeleeStats, NavAgent, Player, VisionRadius};
use crate::state::{transition, CharState, StateMachine};

/// Система: активация свежезаспавненных врагов
///
/// Враг стартует с маршрутом на нулевой waypoint и состоянием Run.
pub fn initialize_enemies(
    mut fresh: Query<(Entity, &mut StateMachine, &mut NavAgent, &PatrolPath), Added<PatrolPath>>,
    mut anim: EventWriter<AnimationRequest>,
) {
    for (entity, mut machine, mut agent, path) in fresh.iter_mut() {
        agent.set_destination(path.current());
        transition(
            entity,
            &mut machine,
            CharState::Run,
            Some(&mut agent),
            &mut anim,
        );
    }
}

/// Система: тик врага (perception + патруль), оба вида врагов
///
/// Порядок проверок за тик:
/// 1. Die или Attack — тик пропускается (Attack снимает только
///    анимационное событие / смерть игрока на следующем Chase-тике)
/// 2. игрок жив и в attack range → разворот на игрока, Attack
/// 3. игрок жив и в vision → маршрут на игрока, разворот, Chase
/// 4. иначе патруль: waypoint достигнут → сдвиг курсора (цикл), новый маршрут
/// 5. игрок умер в процессе преследования → Run и возврат на ТЕКУЩИЙ
///    waypoint (курсор не сбрасывается)
pub fn enemy_tick(
    mut enemies: Query<
        (
            Entity,
            &mut Transform,
            &mut StateMachine,
            &mut NavAgent,
            &mut PatrolPath,
            &MeleeStats,
            &VisionRadius,
        ),
        Without<Player>,
    >,
    players: Query<(&Transform, &Health), With<Player>>,
    mut anim: EventWriter<AnimationRequest>,
) {
    let Ok((player_transform, player_health)) = players.single() else {
        return;
    };
    let player_pos = player_transform.translation;
    let player_alive = player_health.is_alive();

    for (entity, mut transform, mut machine, mut agent, mut path, stats, vision) in
        enemies.iter_mut()
    {
        if matches!(machine.current, CharState::Die | CharState::Attack) {
            continue;
        }

        let dist_sq = player_pos.distance_squared(transform.translation);

        if player_alive && dist_sq < stats.range_squared() {
            transition(
                entity,
                &mut machine,
                CharState::Attack,
                Some(&mut agent),
                &mut anim,
            );
            transform.look_at(player_pos, Vec3::Y);
        } else if player_alive && dist_sq < vision.radius_squared() {
            agent.set_destination(player_pos);
            transform.look_at(player_pos, Vec3::Y);
            transition(
                entity,
                &mut machine,
                CharState::Chase,
                Some(&mut agent),
                &mut anim,
            );
        } else if transform.translation.distance(path.current()) < WAYPOINT_RADIUS {
            let next = path.advance();
            agent.set_destination(next);
            crate::logger::log(&format!(
                "🧭 {:?} patrol waypoint reached, next cursor {}",
                entity,
                path.cursor()
            ));
        }

        // Игрок погиб — преследование сбрасывается на текущий waypoint
        if matches!(machine.current, CharState::Attack | CharState::Chase) && !player_alive {
            transition(
                entity,
                &mut machine,
                CharState::Run,
                Some(&mut agent),
                &mut anim,
            );
            agent.set_destination(path.current());
        }
    }
}
