use crate::finite_or;

/// `base + amplitude * sin(t * speed + phase)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oscillate {
    pub amplitude: f32,
    pub speed: f32,
    pub phase: f32,
}

impl Oscillate {
    pub fn new(amplitude: f32, speed: f32) -> Self {
        Self::with_phase(amplitude, speed, 0.0)
    }

    pub fn with_phase(amplitude: f32, speed: f32, phase: f32) -> Self {
        Self {
            amplitude: finite_or(amplitude, 0.0),
            speed: finite_or(speed, 0.0),
            phase: finite_or(phase, 0.0),
        }
    }

    #[inline]
    pub fn offset(&self, t: f32) -> f32 {
        if self.amplitude == 0.0 {
            return 0.0;
        }
        self.amplitude * (t * self.speed + self.phase).sin()
    }

    #[inline]
    pub fn value(&self, base: f32, t: f32) -> f32 {
        base + self.offset(t)
    }

    /// `2π / |speed|`, or `None` for a static oscillator.
    pub fn period(&self) -> Option<f32> {
        if self.speed == 0.0 {
            None
        } else {
            Some(crate::TAU / self.speed.abs())
        }
    }
}

/// `base + rate * t`. Unbounded; consumers take sin/cos downstream.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContinuousSpin {
    pub rate: f32,
}

impl ContinuousSpin {
    pub fn new(rate: f32) -> Self {
        Self {
            rate: finite_or(rate, 0.0),
        }
    }

    #[inline]
    pub fn offset(&self, t: f32) -> f32 {
        self.rate * t
    }

    #[inline]
    pub fn value(&self, base: f32, t: f32) -> f32 {
        base + self.offset(t)
    }
}

/// One scalar animation channel.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Track {
    #[default]
    Still,
    Oscillate(Oscillate),
    Spin(ContinuousSpin),
}

impl Track {
    pub fn oscillate(amplitude: f32, speed: f32) -> Self {
        Self::Oscillate(Oscillate::new(amplitude, speed))
    }

    pub fn spin(rate: f32) -> Self {
        Self::Spin(ContinuousSpin::new(rate))
    }

    #[inline]
    pub fn offset(&self, t: f32) -> f32 {
        match self {
            Self::Still => 0.0,
            Self::Oscillate(o) => o.offset(t),
            Self::Spin(s) => s.offset(t),
        }
    }

    #[inline]
    pub fn value(&self, base: f32, t: f32) -> f32 {
        base + self.offset(t)
    }

    pub fn is_still(&self) -> bool {
        matches!(self, Self::Still)
    }
}
