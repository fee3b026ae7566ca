//! Easing curve catalog: the standard sine/quad/cubic/quart/quint/expo/
//! circ/back/elastic/bounce families in in/out/in-out variants, plus
//! linear. Every curve is a pure function of normalized progress.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// The available easing curves.
///
/// Each variant maps normalized progress `x` to an eased value via
/// [`ease`](Easing::ease). The expo and elastic variants special-case
/// `x == 0` and `x == 1` so the endpoints hold despite the exponential
/// term; the remaining curves land on (0, 0) and (1, 1) by formula,
/// give or take an ulp on the back family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Easing {
    #[default]
    Linear,
    SineIn,
    SineOut,
    SineInOut,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    QuartIn,
    QuartOut,
    QuartInOut,
    QuintIn,
    QuintOut,
    QuintInOut,
    ExpoIn,
    ExpoOut,
    ExpoInOut,
    CircIn,
    CircOut,
    CircInOut,
    BackIn,
    BackOut,
    BackInOut,
    ElasticIn,
    ElasticOut,
    ElasticInOut,
    BounceIn,
    BounceOut,
    BounceInOut,
}

/// Bounce-out base curve shared by the three bounce variants.
#[inline]
fn bounce_out(x: f64) -> f64 {
    let n1 = 7.5625;
    let d1 = 2.75;
    if x < 1.0 / d1 {
        n1 * x * x
    } else if x < 2.0 / d1 {
        let x = x - 1.5 / d1;
        n1 * x * x + 0.75
    } else if x < 2.5 / d1 {
        let x = x - 2.25 / d1;
        n1 * x * x + 0.9375
    } else {
        let x = x - 2.625 / d1;
        n1 * x * x + 0.984375
    }
}

impl Easing {
    /// Every variant, in declaration order. Handy for tests and tooling.
    pub const ALL: [Easing; 31] = [
        Self::Linear,
        Self::SineIn,
        Self::SineOut,
        Self::SineInOut,
        Self::QuadIn,
        Self::QuadOut,
        Self::QuadInOut,
        Self::CubicIn,
        Self::CubicOut,
        Self::CubicInOut,
        Self::QuartIn,
        Self::QuartOut,
        Self::QuartInOut,
        Self::QuintIn,
        Self::QuintOut,
        Self::QuintInOut,
        Self::ExpoIn,
        Self::ExpoOut,
        Self::ExpoInOut,
        Self::CircIn,
        Self::CircOut,
        Self::CircInOut,
        Self::BackIn,
        Self::BackOut,
        Self::BackInOut,
        Self::ElasticIn,
        Self::ElasticOut,
        Self::ElasticInOut,
        Self::BounceIn,
        Self::BounceOut,
        Self::BounceInOut,
    ];

    /// Evaluate the curve at normalized progress `x`.
    ///
    /// Inputs outside `[0,1]` are not clamped; the formulas simply
    /// extrapolate. The engine only ever passes clamped progress.
    pub fn ease(self, x: f64) -> f64 {
        match self {
            Self::Linear => x,

            Self::SineIn => 1.0 - (x * PI / 2.0).cos(),
            Self::SineOut => (x * PI / 2.0).sin(),
            Self::SineInOut => -((PI * x).cos() - 1.0) / 2.0,

            Self::QuadIn => x * x,
            Self::QuadOut => 1.0 - (1.0 - x) * (1.0 - x),
            Self::QuadInOut => {
                if x < 0.5 {
                    2.0 * x * x
                } else {
                    1.0 - (-2.0 * x + 2.0).powi(2) / 2.0
                }
            }

            Self::CubicIn => x * x * x,
            Self::CubicOut => 1.0 - (1.0 - x).powi(3),
            Self::CubicInOut => {
                if x < 0.5 {
                    4.0 * x * x * x
                } else {
                    1.0 - (-2.0 * x + 2.0).powi(3) / 2.0
                }
            }

            Self::QuartIn => x * x * x * x,
            Self::QuartOut => 1.0 - (1.0 - x).powi(4),
            Self::QuartInOut => {
                if x < 0.5 {
                    8.0 * x * x * x * x
                } else {
                    1.0 - (-2.0 * x + 2.0).powi(4) / 2.0
                }
            }

            Self::QuintIn => x * x * x * x * x,
            Self::QuintOut => 1.0 - (1.0 - x).powi(5),
            Self::QuintInOut => {
                if x < 0.5 {
                    16.0 * x * x * x * x * x
                } else {
                    1.0 - (-2.0 * x + 2.0).powi(5) / 2.0
                }
            }

            Self::ExpoIn => {
                if x == 0.0 {
                    0.0
                } else {
                    2.0f64.powf(10.0 * x - 10.0)
                }
            }
            Self::ExpoOut => {
                if x == 1.0 {
                    1.0
                } else {
                    1.0 - 2.0f64.powf(-10.0 * x)
                }
            }
            Self::ExpoInOut => {
                if x == 0.0 {
                    0.0
                } else if x == 1.0 {
                    1.0
                } else if x < 0.5 {
                    2.0f64.powf(20.0 * x - 10.0) / 2.0
                } else {
                    (2.0 - 2.0f64.powf(-20.0 * x + 10.0)) / 2.0
                }
            }

            Self::CircIn => 1.0 - (1.0 - x * x).sqrt(),
            Self::CircOut => (1.0 - (x - 1.0).powi(2)).sqrt(),
            Self::CircInOut => {
                if x < 0.5 {
                    (1.0 - (1.0 - (2.0 * x).powi(2)).sqrt()) / 2.0
                } else {
                    ((1.0 - (-2.0 * x + 2.0).powi(2)).sqrt() + 1.0) / 2.0
                }
            }

            Self::BackIn => {
                let c1 = 1.70158;
                let c3 = c1 + 1.0;
                c3 * x * x * x - c1 * x * x
            }
            Self::BackOut => {
                let c1 = 1.70158;
                let c3 = c1 + 1.0;
                1.0 + c3 * (x - 1.0).powi(3) + c1 * (x - 1.0).powi(2)
            }
            Self::BackInOut => {
                let c1 = 1.70158;
                let c2 = c1 * 1.525;
                if x < 0.5 {
                    ((2.0 * x).powi(2) * ((c2 + 1.0) * 2.0 * x - c2)) / 2.0
                } else {
                    ((2.0 * x - 2.0).powi(2) * ((c2 + 1.0) * (x * 2.0 - 2.0) + c2) + 2.0) / 2.0
                }
            }

            Self::ElasticIn => {
                let c4 = 2.0 * PI / 3.0;
                if x == 0.0 {
                    0.0
                } else if x == 1.0 {
                    1.0
                } else {
                    -(2.0f64.powf(10.0 * x - 10.0)) * ((x * 10.0 - 10.75) * c4).sin()
                }
            }
            Self::ElasticOut => {
                let c4 = 2.0 * PI / 3.0;
                if x == 0.0 {
                    0.0
                } else if x == 1.0 {
                    1.0
                } else {
                    2.0f64.powf(-10.0 * x) * ((x * 10.0 - 0.75) * c4).sin() + 1.0
                }
            }
            Self::ElasticInOut => {
                let c5 = 2.0 * PI / 4.5;
                if x == 0.0 {
                    0.0
                } else if x == 1.0 {
                    1.0
                } else if x < 0.5 {
                    -(2.0f64.powf(20.0 * x - 10.0) * ((20.0 * x - 11.125) * c5).sin()) / 2.0
                } else {
                    (2.0f64.powf(-20.0 * x + 10.0) * ((20.0 * x - 11.125) * c5).sin()) / 2.0 + 1.0
                }
            }

            Self::BounceIn => 1.0 - bounce_out(1.0 - x),
            Self::BounceOut => bounce_out(x),
            Self::BounceInOut => {
                if x < 0.5 {
                    (1.0 - bounce_out(1.0 - 2.0 * x)) / 2.0
                } else {
                    (1.0 + bounce_out(2.0 * x - 1.0)) / 2.0
                }
            }
        }
    }

    /// Get the stable name of this curve
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::SineIn => "sine-in",
            Self::SineOut => "sine-out",
            Self::SineInOut => "sine-in-out",
            Self::QuadIn => "quad-in",
            Self::QuadOut => "quad-out",
            Self::QuadInOut => "quad-in-out",
            Self::CubicIn => "cubic-in",
            Self::CubicOut => "cubic-out",
            Self::CubicInOut => "cubic-in-out",
            Self::QuartIn => "quart-in",
            Self::QuartOut => "quart-out",
            Self::QuartInOut => "quart-in-out",
            Self::QuintIn => "quint-in",
            Self::QuintOut => "quint-out",
            Self::QuintInOut => "quint-in-out",
            Self::ExpoIn => "expo-in",
            Self::ExpoOut => "expo-out",
            Self::ExpoInOut => "expo-in-out",
            Self::CircIn => "circ-in",
            Self::CircOut => "circ-out",
            Self::CircInOut => "circ-in-out",
            Self::BackIn => "back-in",
            Self::BackOut => "back-out",
            Self::BackInOut => "back-in-out",
            Self::ElasticIn => "elastic-in",
            Self::ElasticOut => "elastic-out",
            Self::ElasticInOut => "elastic-in-out",
            Self::BounceIn => "bounce-in",
            Self::BounceOut => "bounce-out",
            Self::BounceInOut => "bounce-in-out",
        }
    }
}

impl From<&str> for Easing {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "linear" => Self::Linear,
            "sine-in" => Self::SineIn,
            "sine-out" => Self::SineOut,
            "sine-in-out" => Self::SineInOut,
            "quad-in" => Self::QuadIn,
            "quad-out" => Self::QuadOut,
            "quad-in-out" => Self::QuadInOut,
            "cubic-in" => Self::CubicIn,
            "cubic-out" => Self::CubicOut,
            "cubic-in-out" => Self::CubicInOut,
            "quart-in" => Self::QuartIn,
            "quart-out" => Self::QuartOut,
            "quart-in-out" => Self::QuartInOut,
            "quint-in" => Self::QuintIn,
            "quint-out" => Self::QuintOut,
            "quint-in-out" => Self::QuintInOut,
            "expo-in" => Self::ExpoIn,
            "expo-out" => Self::ExpoOut,
            "expo-in-out" => Self::ExpoInOut,
            "circ-in" => Self::CircIn,
            "circ-out" => Self::CircOut,
            "circ-in-out" => Self::CircInOut,
            "back-in" => Self::BackIn,
            "back-out" => Self::BackOut,
            "back-in-out" => Self::BackInOut,
            "elastic-in" => Self::ElasticIn,
            "elastic-out" => Self::ElasticOut,
            "elastic-in-out" => Self::ElasticInOut,
            "bounce-in" => Self::BounceIn,
            "bounce-out" => Self::BounceOut,
            "bounce-in-out" => Self::BounceInOut,
            _ => Self::Linear, // Default to linear for unknown names
        }
    }
}
