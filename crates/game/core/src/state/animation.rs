/// Looping sprite frame counter advanced by elapsed time.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationTimer {
    pub frame: u8,
    elapsed: f32,
    frame_duration: f32,
}

impl AnimationTimer {
    pub const FRAME_COUNT: u8 = 4;
    pub const PLAYER_FRAME_SECS: f32 = 0.14;
    pub const ENEMY_FRAME_SECS: f32 = 0.16;

    pub const fn new(frame_duration: f32) -> Self {
        Self {
            frame: 0,
            elapsed: 0.0,
            frame_duration,
        }
    }

    /// Advances by `dt` seconds; at most one frame step per call.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
        if self.elapsed > self.frame_duration {
            self.elapsed = 0.0;
            self.frame = (self.frame + 1) % Self::FRAME_COUNT;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_after_four_frames() {
        let mut timer = AnimationTimer::new(0.1);
        for _ in 0..4 {
            timer.advance(0.11);
        }
        assert_eq!(timer.frame, 0);
        timer.advance(0.05);
        assert_eq!(timer.frame, 0);
        timer.advance(0.06);
        assert_eq!(timer.frame, 1);
    }
}
