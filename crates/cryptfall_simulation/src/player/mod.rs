//! Player-системы: input-driven движение и transition-правила игрока

use bevy::prelude::*;

use crate::animation::AnimationRequest;
use crate::components::{
    Health, MovementSpeed, OutcomeBanners, Player, PlayerInput, VictoryPoint,
};
use crate::state::{transition, CharState, StateMachine};

/// Дистанция до victory point, засчитываемая как победа
pub const VICTORY_RADIUS: f32 = 2.0;

/// Player Plugin
///
/// player_tick выполняется в FixedUpdate; input за тик приходит
/// от движкового bridge'а через ресурс PlayerInput.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerInput>()
            .init_resource::<OutcomeBanners>()
            .add_systems(FixedUpdate, player_tick);
    }
}

/// Система: тик игрока (transition-правила + прямое движение)
///
/// Порядок проверок за тик:
/// 1. Die — тик полностью пропускается
/// 2. victory point в радиусе — win banner, Idle, обнуление здоровья
///    (терминально, дальше бой не ведётся)
/// 3. движение: ненулевые оси → сдвиг ПРОТИВ направления input'а
///    (инвертированная схема управления уровня), разворот по движению, Run;
///    нулевые → Idle. Пока активен Attack — блок движения пропускается
///    целиком (sticky state, снимается только событием AttackEnd)
/// 4. edge атаки → Attack независимо от движения
pub fn player_tick(
    mut players: Query<
        (
            Entity,
            &mut Transform,
            &mut StateMachine,
            &mut Health,
            &MovementSpeed,
        ),
        With<Player>,
    >,
    mut input: ResMut<PlayerInput>,
    victory: Option<Res<VictoryPoint>>,
    mut banners: ResMut<OutcomeBanners>,
    mut anim: EventWriter<AnimationRequest>,
    time: Res<Time<Fixed>>,
) {
    let Ok((entity, mut transform, mut machine, mut health, speed)) = players.single_mut() else {
        return;
    };

    if machine.current == CharState::Die {
        return;
    }

    // Edge-сигнал потребляется ровно один раз за тик
    let attack_pressed = std::mem::take(&mut input.attack_pressed);

    if let Some(victory) = victory {
        if transform.translation.distance(victory.position) < VICTORY_RADIUS {
            if !banners.win_visible {
                banners.win_visible = true;
                crate::logger::log_info(&format!("🏆 Player {:?} reached victory point", entity));
            }
            transition(entity, &mut machine, CharState::Idle, None, &mut anim);
            // Вышли из боя насовсем: враги видят health == 0 и отпускают
            health.current = 0;
            return;
        }
    }

    let direction = Vec3::new(input.axes.x, 0.0, input.axes.y).normalize_or_zero();

    if machine.current != CharState::Attack {
        if direction != Vec3::ZERO {
            transform.translation -= direction * speed.speed * time.delta_secs();
            let facing = transform.translation - direction;
            transform.look_at(facing, Vec3::Y);
            transition(entity, &mut machine, CharState::Run, None, &mut anim);
        } else {
            transition(entity, &mut machine, CharState::Idle, None, &mut anim);
        }
    }

    if attack_pressed {
        transition(entity, &mut machine, CharState::Attack, None, &mut anim);
    }
}
