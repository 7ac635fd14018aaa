//! Easing curves and the capped trail buffer shared by fireworks and shards.

use std::collections::VecDeque;
use std::f32::consts::PI;

/// Cosine ease-in-out: slow start, fast middle, slow end.
pub fn ease_in_out(progress: f32) -> f32 {
    -(progress * PI).cos() / 2.0 + 0.5
}

/// `tick / duration`, with a zero duration treated as one tick.
pub fn progress(tick: u32, duration: u32) -> f32 {
    tick as f32 / duration.max(1) as f32
}

/// Ordered history of recent points, oldest first, never longer than its cap.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail<T> {
    points: VecDeque<T>,
    capacity: usize,
}

impl<T> Trail<T> {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn starting_at(capacity: usize, point: T) -> Self {
        let mut trail = Self::new(capacity);
        trail.push(point);
        trail
    }

    pub fn push(&mut self, point: T) {
        self.points.push_back(point);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn oldest(&self) -> Option<&T> {
        self.points.front()
    }

    pub fn newest(&self) -> Option<&T> {
        self.points.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.points.iter()
    }

    /// Consecutive `(older, newer)` pairs, oldest pair first.
    pub fn segments(&self) -> impl Iterator<Item = (&T, &T)> {
        self.points.iter().zip(self.points.iter().skip(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_in_out_hits_its_anchors() {
        assert!(ease_in_out(0.0).abs() < 1e-6);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
        assert!((ease_in_out(1.0) - 1.0).abs() < 1e-6);
        assert!(ease_in_out(0.25) < 0.25);
    }

    #[test]
    fn zero_duration_progress_stays_finite() {
        assert_eq!(progress(3, 0), 3.0);
        assert_eq!(progress(5, 10), 0.5);
    }

    #[test]
    fn trail_drops_oldest_past_capacity() {
        let mut trail = Trail::starting_at(3, 0);
        for point in 1..10 {
            trail.push(point);
            assert!(trail.len() <= 3);
        }
        assert_eq!(trail.iter().copied().collect::<Vec<_>>(), vec![7, 8, 9]);
        assert_eq!(trail.oldest(), Some(&7));
        assert_eq!(trail.newest(), Some(&9));
        assert_eq!(trail.segments().count(), 2);
    }
}
