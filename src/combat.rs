//! Health, attack power and cooldown-gated attacks.

/// Capability shared by every combatant.
pub trait CombatStats {
    /// Current health; may be negative.
    fn health(&self) -> i32;
    /// Damage dealt per successful hit.
    fn attack_power(&self) -> i32;
    /// Subtracts `amount` from health, with no floor.
    fn damage(&mut self, amount: i32);

    /// `health() <= 0`
    fn is_dead(&self) -> bool {
        self.health() <= 0
    }
}

/// Health and attack power, without any attack gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasicCombat {
    health: i32,
    attack_power: i32,
}

impl BasicCombat {
    /// Full-health combatant.
    pub fn new(health: i32, attack_power: i32) -> Self {
        Self {
            health,
            attack_power,
        }
    }

    /// Explicit heal effect. This is the only way health goes up.
    pub fn heal(&mut self, amount: i32) {
        self.health += amount;
    }
}

impl CombatStats for BasicCombat {
    fn health(&self) -> i32 {
        self.health
    }

    fn attack_power(&self) -> i32 {
        self.attack_power
    }

    fn damage(&mut self, amount: i32) {
        self.health -= amount;
    }
}

/// [`BasicCombat`] plus a frame-counted attack cooldown.
///
/// `attack()` succeeds when the timer is idle and rearms it to `cooldown`;
/// `update()` counts it down once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CooldownCombat {
    base: BasicCombat,
    cooldown: u32,
    timer: u32,
}

impl CooldownCombat {
    /// `cooldown` is in frames. The first attack is never blocked.
    pub fn new(health: i32, attack_power: i32, cooldown: u32) -> Self {
        Self {
            base: BasicCombat::new(health, attack_power),
            cooldown,
            timer: 0,
        }
    }

    /// `true` while the cooldown from the last hit is still running.
    pub fn attacking(&self) -> bool {
        self.timer > 0
    }

    /// Tries to land an attack. Returns whether it connects.
    pub fn attack(&mut self) -> bool {
        if self.attacking() {
            return false;
        }
        self.timer = self.cooldown;
        true
    }

    /// One frame tick.
    pub fn update(&mut self) {
        self.timer = self.timer.saturating_sub(1);
    }
}

impl CombatStats for CooldownCombat {
    fn health(&self) -> i32 {
        self.base.health()
    }

    fn attack_power(&self) -> i32 {
        self.base.attack_power()
    }

    fn damage(&mut self, amount: i32) {
        self.base.damage(amount);
    }
}

/// The combat capability an entity carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combat {
    /// Not a combatant: cannot be hurt and never attacks.
    None,
    /// Takes damage, attacks are not gated.
    Basic(BasicCombat),
    /// Takes damage, attacks gated by a cooldown.
    Cooldown(CooldownCombat),
}

impl Combat {
    /// Ungated combatant, e.g. the player.
    pub fn basic(health: i32, attack_power: i32) -> Self {
        Combat::Basic(BasicCombat::new(health, attack_power))
    }

    /// Cooldown-gated combatant, e.g. an enemy.
    pub fn cooldown(health: i32, attack_power: i32, cooldown: u32) -> Self {
        Combat::Cooldown(CooldownCombat::new(health, attack_power, cooldown))
    }

    /// Whether an attack connects this frame. Basic combatants always
    /// connect; non-combatants never do.
    pub fn attack(&mut self) -> bool {
        match self {
            Combat::None => false,
            Combat::Basic(_) => true,
            Combat::Cooldown(c) => c.attack(),
        }
    }

    /// Only cooldown combatants are ever mid-attack.
    pub fn attacking(&self) -> bool {
        match self {
            Combat::Cooldown(c) => c.attacking(),
            _ => false,
        }
    }

    /// Per-frame tick; counts down any running cooldown.
    pub fn update(&mut self) {
        if let Combat::Cooldown(c) = self {
            c.update();
        }
    }

    /// Heals basic combatants; other variants ignore it.
    pub fn heal(&mut self, amount: i32) {
        if let Combat::Basic(b) = self {
            b.heal(amount);
        }
    }
}

impl CombatStats for Combat {
    fn health(&self) -> i32 {
        match self {
            Combat::None => 0,
            Combat::Basic(b) => b.health(),
            Combat::Cooldown(c) => c.health(),
        }
    }

    fn attack_power(&self) -> i32 {
        match self {
            Combat::None => 0,
            Combat::Basic(b) => b.attack_power(),
            Combat::Cooldown(c) => c.attack_power(),
        }
    }

    fn damage(&mut self, amount: i32) {
        match self {
            Combat::None => {}
            Combat::Basic(b) => b.damage(amount),
            Combat::Cooldown(c) => c.damage(amount),
        }
    }

    fn is_dead(&self) -> bool {
        !matches!(self, Combat::None) && self.health() <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_is_subtractive_and_unfloored() {
        let mut c = BasicCombat::new(3, 1);
        c.damage(2);
        assert_eq!(c.health(), 1);
        c.damage(4);
        assert_eq!(c.health(), -3);
        assert!(c.is_dead());
    }

    #[test]
    fn repeated_damage_composes() {
        let mut split = CooldownCombat::new(10, 1, 30);
        split.damage(3);
        split.damage(4);
        let mut once = CooldownCombat::new(10, 1, 30);
        once.damage(7);
        assert_eq!(split.health(), once.health());
    }

    #[test]
    fn cooldown_blocks_until_elapsed() {
        let mut c = CooldownCombat::new(3, 1, 30);
        assert!(c.attack());
        assert!(c.attacking());

        for _ in 0..29 {
            c.update();
            assert!(!c.attack());
        }
        c.update();
        assert!(!c.attacking());
        assert!(c.attack());
    }

    #[test]
    fn zero_cooldown_always_connects() {
        let mut c = CooldownCombat::new(3, 1, 0);
        assert!(c.attack());
        assert!(c.attack());
    }

    #[test]
    fn variants_share_capabilities() {
        let mut none = Combat::None;
        none.damage(5);
        assert_eq!(none.health(), 0);
        assert!(!none.is_dead());
        assert!(!none.attack());

        let mut basic = Combat::basic(3, 1);
        assert!(basic.attack());
        assert!(basic.attack());
        basic.heal(2);
        assert_eq!(basic.health(), 5);

        let mut cd = Combat::cooldown(3, 2, 5);
        assert_eq!(cd.attack_power(), 2);
        assert!(cd.attack());
        assert!(!cd.attack());
        cd.heal(10);
        assert_eq!(cd.health(), 3);
    }
}
