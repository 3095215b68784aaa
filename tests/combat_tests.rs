// tests/combat_tests.rs

use tile_rpg::{BasicCombat, Combat, CombatStats, CooldownCombat};

#[test]
fn enemy_lands_one_hit_every_thirty_frames() {
    let mut player = BasicCombat::new(100, 1);
    let mut enemy = CooldownCombat::new(3, 1, 30);

    // overlapping every frame: update, then try to attack
    let mut health_log = Vec::new();
    for _ in 0..120 {
        enemy.update();
        if enemy.attack() {
            player.damage(enemy.attack_power());
        }
        health_log.push(player.health());
    }

    assert_eq!(player.health(), 96);
    let drops: Vec<usize> = health_log
        .windows(2)
        .enumerate()
        .filter(|(_, w)| w[1] < w[0])
        .map(|(i, _)| i + 1)
        .collect();
    assert_eq!(drops, vec![30, 60, 90]);
}

#[test]
fn three_player_hits_eliminate_three_health_enemy() {
    let player = Combat::basic(3, 1);
    let mut enemy = Combat::cooldown(3, 1, 30);

    let mut clicks = 0;
    while !enemy.is_dead() {
        enemy.damage(player.attack_power());
        clicks += 1;
    }
    assert_eq!(clicks, 3);
    assert_eq!(enemy.health(), 0);
}

#[test]
fn overkill_leaves_negative_health() {
    let mut enemy = Combat::cooldown(1, 1, 30);
    enemy.damage(5);
    assert_eq!(enemy.health(), -4);
    assert!(enemy.is_dead());
}
