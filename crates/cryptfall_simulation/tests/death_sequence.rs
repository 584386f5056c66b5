//! Death sequencing tests
//!
//! Вражеская цепочка: кадр ожидания → отключение агента → пауза 1.0 →
//! погружение 2.0 → despawn (≈3 временных юнита суммарно).
//! Путь игрока асимметричен: пауза 2.0 → lose banner, без погружения.

use bevy::prelude::*;
use cryptfall_simulation::animation::names;
use cryptfall_simulation::*;

fn spawn_duel(player_pos: Vec3, enemy_pos: Vec3) -> (App, Entity, Entity) {
    let mut app = create_headless_app();

    let path = PatrolPath::new(vec![enemy_pos]).unwrap();
    let (player, enemy) = {
        let mut commands = app.world_mut().commands();
        let player = spawn_player(&mut commands, player_pos);
        let enemy = spawn_enemy(&mut commands, CharacterKind::PatrolEnemy, enemy_pos, path);
        (player, enemy)
    };
    app.world_mut().flush();

    (app, player, enemy)
}

fn post_animation_event(app: &mut App, entity: Entity, name: &str) {
    app.world_mut().send_event(AnimationEvent {
        entity,
        name: name.to_string(),
    });
}

/// Убивает врага двумя damage-кадрами за один тик
fn kill_enemy(app: &mut App, player: Entity) {
    post_animation_event(app, player, names::ATTACK_DAMAGE);
    post_animation_event(app, player, names::ATTACK_DAMAGE);
    advance_fixed(app);
}

#[test]
fn test_enemy_death_sequence_timeline() {
    let (mut app, player, enemy) = spawn_duel(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

    kill_enemy(&mut app, player);

    // Тик смерти: Die, коллайдер и маршрут погашены, но агент ещё enabled
    // (кадр ожидания, чтобы отключение коллайдера вступило в силу)
    assert_eq!(
        app.world().get::<StateMachine>(enemy).unwrap().current,
        CharState::Die
    );
    assert!(!app.world().get::<ColliderState>(enemy).unwrap().enabled);
    let agent = app.world().get::<NavAgent>(enemy).unwrap();
    assert!(agent.stopped);
    assert!(agent.enabled);
    assert_eq!(
        app.world().get::<DeathPhase>(enemy),
        Some(&DeathPhase::JustDied)
    );

    // Один кадр спустя: агент выключен полностью, началась пауза
    advance_fixed(&mut app);
    assert!(!app.world().get::<NavAgent>(enemy).unwrap().enabled);
    assert!(matches!(
        app.world().get::<DeathPhase>(enemy),
        Some(DeathPhase::Settling { .. })
    ));

    // Через ~1.2 сек после смерти: уже погружается
    advance_fixed_by(&mut app, 70);
    assert!(matches!(
        app.world().get::<DeathPhase>(enemy),
        Some(DeathPhase::Sinking { .. })
    ));

    // Погружение: за секунду уходит вниз примерно на SINK_SPEED
    let y_before = app.world().get::<Transform>(enemy).unwrap().translation.y;
    advance_fixed_by(&mut app, 60);
    let y_after = app.world().get::<Transform>(enemy).unwrap().translation.y;
    assert!((y_before - y_after - SINK_SPEED).abs() < 0.01);

    // Суммарно ≈3 временных юнита от смерти — entity удалён из мира
    // (и тем самым из реестра врагов)
    advance_fixed_by(&mut app, 70);
    assert!(app.world().get_entity(enemy).is_err());
}

#[test]
fn test_enemy_not_removed_before_sequence_completes() {
    let (mut app, player, enemy) = spawn_duel(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

    kill_enemy(&mut app, player);

    // 2.5 сек после смерти — ещё в мире (цепочка занимает ≈3 сек)
    advance_fixed_by(&mut app, 150);
    assert!(app.world().get_entity(enemy).is_ok());
}

#[test]
fn test_player_death_reveals_lose_banner_without_sinking() {
    let (mut app, player, enemy) = spawn_duel(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));

    // Пять damage-кадров врага за один тик: health 5 → 0, Die ровно один раз
    for _ in 0..PLAYER_MAX_HEALTH {
        post_animation_event(&mut app, enemy, names::ATTACK_DAMAGE);
    }
    advance_fixed(&mut app);

    assert_eq!(app.world().get::<Health>(player).unwrap().current, 0);
    assert_eq!(
        app.world().get::<StateMachine>(player).unwrap().current,
        CharState::Die
    );
    assert!(app.world().get::<PlayerDeath>(player).is_some());
    assert!(!app.world().resource::<OutcomeBanners>().lose_visible);

    // До истечения паузы banner скрыт
    advance_fixed_by(&mut app, 100);
    assert!(!app.world().resource::<OutcomeBanners>().lose_visible);

    // После ~2 сек — lose banner; игрок остаётся в мире и не тонет
    let y_before = app.world().get::<Transform>(player).unwrap().translation.y;
    advance_fixed_by(&mut app, 30);
    assert!(app.world().resource::<OutcomeBanners>().lose_visible);
    assert!(app.world().get_entity(player).is_ok());
    let y_after = app.world().get::<Transform>(player).unwrap().translation.y;
    assert_eq!(y_before, y_after);
    assert!(app.world().get::<PlayerDeath>(player).is_none());
}

#[test]
fn test_dead_player_tick_is_skipped() {
    let (mut app, player, enemy) = spawn_duel(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));

    for _ in 0..PLAYER_MAX_HEALTH {
        post_animation_event(&mut app, enemy, names::ATTACK_DAMAGE);
    }
    advance_fixed(&mut app);

    // Мёртвый игрок не двигается от input'а
    let before = app.world().get::<Transform>(player).unwrap().translation;
    app.world_mut().resource_mut::<PlayerInput>().axes = Vec2::new(1.0, 0.0);
    advance_fixed_by(&mut app, 10);
    let after = app.world().get::<Transform>(player).unwrap().translation;
    assert_eq!(before, after);
    assert_eq!(
        app.world().get::<StateMachine>(player).unwrap().current,
        CharState::Die
    );
}
