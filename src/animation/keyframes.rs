use crate::{
    animation::ease::resolve_easing,
    model::{track::Keyframe, value::AnimValue},
};

/// Value of a keyframe list at a local time.
///
/// Keyframes are expected sorted by `at_ms` with unique offsets. Times are
/// floored to whole non-negative milliseconds and extrapolated flat past
/// either end. Text values and held keyframes step instead of interpolating.
pub fn resolve_value(keyframes: &[Keyframe], at_ms: f64) -> AnimValue {
    let (Some(first), Some(last)) = (keyframes.first(), keyframes.last()) else {
        return AnimValue::Number(0.0);
    };
    if keyframes.len() == 1 {
        return first.value.clone();
    }

    // NaN lands on 0 through `max`.
    let target = at_ms.max(0.0).floor();
    if target <= first.at_ms {
        return first.value.clone();
    }
    if target >= last.at_ms {
        return last.value.clone();
    }

    let prev = keyframes.iter().rposition(|k| k.at_ms <= target);
    let next = keyframes.iter().position(|k| k.at_ms >= target);
    let (Some(prev), Some(next)) = (prev, next) else {
        return first.value.clone();
    };
    let (prev, next) = (&keyframes[prev], &keyframes[next]);

    if prev.at_ms == next.at_ms || prev.hold {
        return prev.value.clone();
    }
    let (Some(a), Some(b)) = (prev.value.as_number(), next.value.as_number()) else {
        return prev.value.clone();
    };

    let raw = ((target - prev.at_ms) / (next.at_ms - prev.at_ms)).clamp(0.0, 1.0);
    let eased = resolve_easing(prev.easing.as_deref()).apply(raw);
    AnimValue::Number(a + (b - a) * eased)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframes.rs"]
mod tests;
