//! Headless-прогон CRYPTFALL
//!
//! Запускает scripted-скирмиш без рендера: игрок стоит на месте, враги
//! патрулируют, замечают его и забивают. Роль движкового bridge'а играет
//! сам прогон: постит damage-кадры для врагов в Attack-состоянии.

use bevy::prelude::*;
use cryptfall_simulation::{
    advance_fixed, animation::names, create_headless_app, spawn_enemy, spawn_player,
    AnimationEvent, CharState, CharacterKind, NavAgent, OutcomeBanners, PatrolPath, Player,
    StateMachine, VictoryPoint,
};

/// Скорость движения вражеского агента в заглушке (метры/сек)
const STUB_AGENT_SPEED: f32 = 2.0;

fn main() {
    println!("Starting CRYPTFALL headless simulation");

    let mut app = create_headless_app();
    app.insert_resource(VictoryPoint {
        position: Vec3::new(0.0, 0.0, 40.0),
    });

    let skeleton_path = PatrolPath::new(vec![
        Vec3::new(8.0, 0.0, 0.0),
        Vec3::new(8.0, 0.0, 8.0),
        Vec3::new(0.0, 0.0, 8.0),
    ])
    .expect("patrol path is non-empty");
    let dragon_path =
        PatrolPath::new(vec![Vec3::new(-6.0, 0.0, 2.0)]).expect("patrol path is non-empty");

    {
        let mut commands = app.world_mut().commands();
        spawn_player(&mut commands, Vec3::ZERO);
        spawn_enemy(
            &mut commands,
            CharacterKind::PatrolEnemy,
            Vec3::new(8.0, 0.0, 0.0),
            skeleton_path,
        );
        spawn_enemy(
            &mut commands,
            CharacterKind::MeleeEnemy,
            Vec3::new(-6.0, 0.0, 2.0),
            dragon_path,
        );
    }
    app.world_mut().flush();

    for tick in 0..900u32 {
        advance_fixed(&mut app);

        // Bridge-заглушка: примитивный steering вместо движкового pathfinding
        let step = STUB_AGENT_SPEED / 60.0;
        let world = app.world_mut();
        let mut movers = world.query_filtered::<(&mut Transform, &NavAgent), Without<Player>>();
        for (mut transform, agent) in movers.iter_mut(world) {
            if !agent.enabled || agent.stopped {
                continue;
            }
            let Some(destination) = agent.destination else {
                continue;
            };
            let mut to_target = destination - transform.translation;
            to_target.y = 0.0;
            if to_target.length_squared() > 0.01 {
                let offset = to_target.normalize() * step;
                transform.translation += offset;
            }
        }

        // Bridge-заглушка: раз в полсекунды анимация атакующего врага
        // доходит до damage-кадра
        if tick % 30 == 0 {
            let mut query = app
                .world_mut()
                .query_filtered::<(Entity, &StateMachine), Without<Player>>();
            let attackers: Vec<Entity> = query
                .iter(app.world())
                .filter(|(_, machine)| machine.current == CharState::Attack)
                .map(|(entity, _)| entity)
                .collect();

            for entity in attackers {
                app.world_mut().send_event(AnimationEvent {
                    entity,
                    name: names::ATTACK_DAMAGE.to_string(),
                });
            }
        }

        if tick % 100 == 0 {
            println!("Tick {}: {} entities", tick, app.world().entities().len());
        }
    }

    let banners = app.world().resource::<OutcomeBanners>();
    println!(
        "Simulation complete! win: {}, lose: {}",
        banners.win_visible, banners.lose_visible
    );
}
