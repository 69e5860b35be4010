use crate::model::timeline::{Direction, Iterations, Timeline};

/// Local in-track time of `timeline` at global time `global_ms`, or `None`
/// when the timeline contributes nothing at that instant.
///
/// Follows CSS animation timing: delay, iteration count (possibly infinite),
/// per-iteration direction and fill mode outside the active window.
pub fn resolve_cursor(timeline: &Timeline, global_ms: f64) -> Option<f64> {
    let global_ms = if global_ms.is_nan() { 0.0 } else { global_ms };
    let duration = timeline.effective_duration_ms();
    let elapsed = global_ms - timeline.effective_delay_ms();
    let iterations = timeline.iterations();

    if elapsed < 0.0 {
        if !timeline.fill_mode.fills_backwards() {
            return None;
        }
        let reversed = is_reverse_at_iteration(timeline.direction, 0);
        return Some(if reversed { duration } else { 0.0 });
    }

    let total = iterations.total_duration_ms(duration);
    if elapsed < total {
        return Some(local_time(timeline.direction, duration, elapsed));
    }

    match iterations {
        // Only reached when `elapsed` itself is +inf.
        Iterations::Infinite => Some(local_time(timeline.direction, duration, elapsed)),
        Iterations::Finite(n) => {
            if !timeline.fill_mode.fills_forwards() {
                return None;
            }
            let reversed = is_reverse_at_iteration(timeline.direction, n.saturating_sub(1));
            Some(if reversed { 0.0 } else { duration })
        }
    }
}

/// Whether iteration `iteration_index` (zero-based) plays backward.
pub fn is_reverse_at_iteration(direction: Direction, iteration_index: u64) -> bool {
    match direction {
        Direction::Normal => false,
        Direction::Reverse => true,
        Direction::Alternate => iteration_index % 2 == 1,
        Direction::AlternateReverse => iteration_index % 2 == 0,
    }
}

fn local_time(direction: Direction, duration: f64, elapsed: f64) -> f64 {
    let iteration = (elapsed / duration).floor();
    let loop_ms = elapsed - iteration * duration;
    if is_reverse_at_iteration(direction, iteration as u64) {
        duration - loop_ms
    } else {
        loop_ms
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/cursor.rs"]
mod tests;
