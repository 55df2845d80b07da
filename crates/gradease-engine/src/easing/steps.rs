use std::fmt;

/// Which ends of a `steps()` ramp get a jump.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum JumpTerm {
    Start,
    End,
    None,
    Both,
}

impl JumpTerm {
    /// Accepts the CSS keywords plus the older `skip-*` spellings.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword.to_ascii_lowercase().as_str() {
            "jump-start" | "start" | "skip-start" => Self::Start,
            "jump-end" | "end" | "skip-end" => Self::End,
            "jump-none" | "skip-none" => Self::None,
            "jump-both" | "skip-both" => Self::Both,
            _ => return None,
        })
    }

    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Start => "jump-start",
            Self::End => "jump-end",
            Self::None => "jump-none",
            Self::Both => "jump-both",
        }
    }
}

/// A CSS `steps(n, <jump-term>)` curve.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Steps {
    count: u32,
    jump: JumpTerm,
}

impl Steps {
    /// `None` for a zero count, or fewer than two steps with `jump-none`.
    pub fn new(count: u32, jump: JumpTerm) -> Option<Self> {
        let min = if jump == JumpTerm::None { 2 } else { 1 };
        (count >= min).then_some(Self { count, jump })
    }

    pub const fn count(self) -> u32 {
        self.count
    }

    pub const fn jump(self) -> JumpTerm {
        self.jump
    }

    /// Number of distinct rises in output value.
    const fn jumps(self) -> u32 {
        match self.jump {
            JumpTerm::Start | JumpTerm::End => self.count,
            JumpTerm::None => self.count - 1,
            JumpTerm::Both => self.count + 1,
        }
    }

    /// Step easing per CSS Easing Functions Level 1, without the
    /// before-flag (gradients have no "before" phase).
    pub fn evaluate(self, x: f64) -> f64 {
        let x = x.clamp(0.0, 1.0);
        let n = f64::from(self.count);
        let mut step = (x * n).floor();
        if matches!(self.jump, JumpTerm::Start | JumpTerm::Both) {
            step += 1.0;
        }
        let jumps = f64::from(self.jumps());
        step.min(jumps) / jumps
    }

    /// The constant segments of the ramp as `(x_start, x_end, value)`.
    ///
    /// There are always `count` segments of equal width; the value of
    /// each depends on the jump term.
    pub fn plateaus(self) -> impl Iterator<Item = (f64, f64, f64)> {
        let n = f64::from(self.count);
        let jumps = f64::from(self.jumps());
        let offset = if matches!(self.jump, JumpTerm::Start | JumpTerm::Both) { 1.0 } else { 0.0 };
        (0..self.count).map(move |i| {
            let i = f64::from(i);
            (i / n, (i + 1.0) / n, (i + offset) / jumps)
        })
    }
}

impl fmt::Display for Steps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "steps({}, {})", self.count, self.jump.keyword())
    }
}
