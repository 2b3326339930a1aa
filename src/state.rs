// Velocity accumulation: key-driven deltas with clamp-after-accumulate

/// Velocity change per key press
pub const VEL_STEP: f64 = 0.1;

/// Symmetric bound on both velocity components
pub const VEL_LIMIT: f64 = 1.0;

/// Current commanded velocities, normalized to [-VEL_LIMIT, VEL_LIMIT]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VelocityState {
    pub linear: f64,
    pub angular: f64,
}

impl VelocityState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one polled key to the current state
    ///
    /// 'w'/'x' step linear up/down, 'a'/'d' step angular up/down,
    /// 's' forces a full stop. Anything else (or no key) leaves the
    /// state unchanged. Both components are clamped after every
    /// mutation, so repeated presses saturate at the limit.
    pub fn apply_key(&mut self, key: Option<char>) {
        match key {
            Some('w') => self.linear += VEL_STEP,
            Some('x') => self.linear -= VEL_STEP,
            Some('a') => self.angular += VEL_STEP,
            Some('d') => self.angular -= VEL_STEP,
            Some('s') => {
                self.linear = 0.0;
                self.angular = 0.0;
            }
            // No valid key, keep current velocities
            _ => {}
        }

        self.linear = self.linear.clamp(-VEL_LIMIT, VEL_LIMIT);
        self.angular = self.angular.clamp(-VEL_LIMIT, VEL_LIMIT);
    }
}
