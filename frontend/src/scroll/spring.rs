use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Damped spring parameters, same meaning as a motion-library spring:
/// `stiffness` k, `damping` coefficient c and `mass` m.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance from the target under which the spring may settle.
    pub rest_delta: f64,
    /// Speed under which the spring may settle.
    pub rest_speed: f64,
}

impl SpringConfig {
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
            rest_delta: 0.0005,
            rest_speed: 0.005,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("stiffness", self.stiffness),
            ("damping", self.damping),
            ("mass", self.mass),
            ("rest_delta", self.rest_delta),
            ("rest_speed", self.rest_speed),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidSpring { field, value });
            }
        }
        Ok(())
    }

    /// ζ = c / (2·sqrt(k·m)). Below 1 the spring overshoots.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::new(100.0, 30.0)
    }
}

/// A value chasing a target through a damped harmonic oscillator.
///
/// Each step uses the closed-form solution for the current damping regime,
/// so large frame deltas stay stable instead of blowing up like an explicit
/// integrator would.
#[derive(Debug, Clone)]
pub struct SpringValue {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
}

impl SpringValue {
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            position: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Move straight to `value` and stop there.
    pub fn jump(&mut self, value: f64) {
        if value.is_finite() {
            self.position = value;
            self.target = value;
            self.velocity = 0.0;
        }
    }

    pub fn is_at_rest(&self) -> bool {
        self.position == self.target && self.velocity == 0.0
    }

    /// Advance by `dt` seconds. Returns true once the spring has settled.
    pub fn step(&mut self, dt: f64) -> bool {
        if self.is_at_rest() {
            return true;
        }
        if !dt.is_finite() || dt <= 0.0 {
            return false;
        }

        let (x, v) = solve(&self.config, self.position - self.target, self.velocity, dt);
        self.position = self.target + x;
        self.velocity = v;

        let settled = x.abs() < self.config.rest_delta && v.abs() < self.config.rest_speed;
        if settled || !self.position.is_finite() || !self.velocity.is_finite() {
            self.position = self.target;
            self.velocity = 0.0;
            return true;
        }
        false
    }
}

/// Displacement and velocity after `t` seconds, starting from displacement
/// `x0` and velocity `v0` relative to the target.
fn solve(config: &SpringConfig, x0: f64, v0: f64, t: f64) -> (f64, f64) {
    let w0 = config.natural_frequency();
    let zeta = config.damping_ratio();

    if (zeta - 1.0).abs() < 1e-6 {
        // x(t) = (c1 + c2·t)·e^(-w0·t)
        let c1 = x0;
        let c2 = v0 + w0 * x0;
        let e = (-w0 * t).exp();
        let x = (c1 + c2 * t) * e;
        let v = (c2 - w0 * (c1 + c2 * t)) * e;
        (x, v)
    } else if zeta < 1.0 {
        let a = zeta * w0;
        let wd = w0 * (1.0 - zeta * zeta).sqrt();
        let s = (v0 + a * x0) / wd;
        let e = (-a * t).exp();
        let (sin, cos) = (wd * t).sin_cos();
        let x = e * (x0 * cos + s * sin);
        let v = e * (-a * (x0 * cos + s * sin) + wd * (s * cos - x0 * sin));
        (x, v)
    } else {
        let root = (zeta * zeta - 1.0).sqrt();
        let r1 = -w0 * (zeta - root);
        let r2 = -w0 * (zeta + root);
        let a = (v0 - r2 * x0) / (r1 - r2);
        let b = x0 - a;
        let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
        (a * e1 + b * e2, r1 * a * e1 + r2 * b * e2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn settle(spring: &mut SpringValue) -> usize {
        for frame in 1..=2_000 {
            if spring.step(FRAME) {
                return frame;
            }
        }
        panic!("spring never settled");
    }

    #[test]
    fn settles_on_target_in_every_regime() {
        // under-damped, critically damped, over-damped
        for config in [
            SpringConfig::new(100.0, 10.0),
            SpringConfig::new(100.0, 20.0),
            SpringConfig::new(100.0, 30.0),
        ] {
            let mut spring = SpringValue::new(config, 0.0);
            spring.set_target(1.0);
            settle(&mut spring);
            assert_eq!(spring.position(), 1.0);
            assert_eq!(spring.velocity(), 0.0);
            assert!(spring.is_at_rest());
        }
    }

    #[test]
    fn overdamped_never_overshoots() {
        let mut spring = SpringValue::new(SpringConfig::new(100.0, 30.0), 0.0);
        spring.set_target(1.0);
        let mut last = 0.0;
        while !spring.step(FRAME) {
            assert!(spring.position() <= 1.0);
            assert!(spring.position() >= last);
            last = spring.position();
        }
    }

    #[test]
    fn underdamped_overshoots() {
        let mut spring = SpringValue::new(SpringConfig::new(100.0, 5.0), 0.0);
        spring.set_target(1.0);
        let mut peak: f64 = 0.0;
        while !spring.step(FRAME) {
            peak = peak.max(spring.position());
        }
        assert!(peak > 1.0);
    }

    #[test]
    fn huge_step_is_stable() {
        let mut spring = SpringValue::new(SpringConfig::default(), 0.0);
        spring.set_target(1.0);
        assert!(spring.step(100.0));
        assert_eq!(spring.position(), 1.0);
    }

    #[test]
    fn jump_stops_motion() {
        let mut spring = SpringValue::new(SpringConfig::default(), 0.0);
        spring.set_target(1.0);
        spring.step(FRAME);
        spring.jump(0.25);
        assert!(spring.is_at_rest());
        assert_eq!(spring.position(), 0.25);
    }

    #[test]
    fn bad_dt_does_not_move() {
        let mut spring = SpringValue::new(SpringConfig::default(), 0.0);
        spring.set_target(1.0);
        assert!(!spring.step(f64::NAN));
        assert!(!spring.step(-1.0));
        assert_eq!(spring.position(), 0.0);
    }

    #[test]
    fn stiffer_spring_settles_sooner() {
        let mut soft = SpringValue::new(SpringConfig::new(40.0, 20.0), 0.0);
        let mut stiff = SpringValue::new(SpringConfig::new(400.0, 40.0), 0.0);
        soft.set_target(1.0);
        stiff.set_target(1.0);
        assert!(settle(&mut stiff) < settle(&mut soft));
    }

    #[test]
    fn rejects_non_positive_parameters() {
        assert!(SpringConfig::new(100.0, 30.0).validate().is_ok());
        assert!(matches!(
            SpringConfig::new(0.0, 30.0).validate(),
            Err(ConfigError::InvalidSpring { field: "stiffness", .. })
        ));
        assert!(matches!(
            SpringConfig::new(100.0, f64::NAN).validate(),
            Err(ConfigError::InvalidSpring { field: "damping", .. })
        ));
    }

    #[test]
    fn config_fills_defaults_from_json() {
        let config: SpringConfig =
            serde_json::from_str(r#"{ "stiffness": 40, "damping": 20 }"#).unwrap();
        assert_eq!(config, SpringConfig::new(40.0, 20.0));
    }
}
