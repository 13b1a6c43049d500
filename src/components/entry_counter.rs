use log::warn;
use web_sys::js_sys::{Date, Math};
use yew::prelude::*;
use yew_hooks::prelude::use_interval;

use crate::storage::{BrowserStore, KeyValueStore, ENTRY_COUNT_KEY};

const ANIMATION_MS: f64 = 1500.0;
const FRAME_MS: u32 = 16;

/// Uniform integer in `low..=high` from a `[0, 1)` source.
fn pick(rng: &mut impl FnMut() -> f64, low: u64, high: u64) -> u64 {
    let span = (high - low + 1) as f64;
    low + ((rng() * span).floor() as u64).min(high - low)
}

/// Stored count (never below the base) plus 5 to 19 new "entries".
pub fn initial_count(stored: Option<&str>, base: u64, mut rng: impl FnMut() -> f64) -> u64 {
    let count = stored
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .map_or(base, |count| count.max(base));
    count.saturating_add(pick(&mut rng, 5, 19))
}

pub fn tick(count: u64, mut rng: impl FnMut() -> f64) -> u64 {
    count.saturating_add(pick(&mut rng, 1, 3))
}

pub fn tick_interval_ms(mut rng: impl FnMut() -> f64) -> u32 {
    (rng() * 30_000.0 + 30_000.0) as u32
}

pub fn ease_out_quart(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(4)
}

/// Value shown `elapsed_ms` into the count-up animation.
pub fn animated_value(target: u64, elapsed_ms: f64, duration_ms: f64) -> u64 {
    let progress = (elapsed_ms / duration_ms).clamp(0.0, 1.0);
    (target as f64 * ease_out_quart(progress)).floor() as u64
}

pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn persist(count: u64) {
    match BrowserStore::local() {
        Ok(store) => {
            let _ = store.set(ENTRY_COUNT_KEY, &count.to_string());
        }
        Err(e) => warn!("Entry count not persisted: {}", e),
    }
}

#[derive(Properties, PartialEq)]
pub struct EntryCounterProps {
    pub base: u64,
}

#[function_component(EntryCounter)]
pub fn entry_counter(props: &EntryCounterProps) -> Html {
    let base = props.base;
    let count = use_state(move || {
        let stored = BrowserStore::local().ok().and_then(|store| store.get(ENTRY_COUNT_KEY));
        let count = initial_count(stored.as_deref(), base, Math::random);
        persist(count);
        count
    });
    let displayed = use_state(|| 0u64);
    let started_at = use_state(Date::now);
    let animating = use_state(|| true);
    let tick_ms = use_state(|| tick_interval_ms(Math::random));

    {
        let displayed = displayed.clone();
        let period = if *animating { FRAME_MS } else { 0 };
        let animating = animating.clone();
        let target = *count;
        let started_at = *started_at;
        use_interval(
            move || {
                let elapsed = Date::now() - started_at;
                displayed.set(animated_value(target, elapsed, ANIMATION_MS));
                if elapsed >= ANIMATION_MS {
                    animating.set(false);
                }
            },
            period,
        );
    }

    {
        let count = count.clone();
        let displayed = displayed.clone();
        let animating = animating.clone();
        use_interval(
            move || {
                let next = tick(*count, Math::random);
                persist(next);
                count.set(next);
                if !*animating {
                    displayed.set(next);
                }
            },
            *tick_ms,
        );
    }

    html! {
        <span id="entries-count" class="entries-count">{format_count(*displayed)}</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_count_exceeds_base() {
        assert_eq!(initial_count(None, 2847, || 0.0), 2852);
        assert_eq!(initial_count(None, 2847, || 0.999_999), 2866);
        for step in 0..100 {
            let r = step as f64 / 100.0;
            assert!(initial_count(None, 2847, || r) > 2847);
        }
    }

    #[test]
    fn stored_count_is_resumed() {
        assert_eq!(initial_count(Some("3000"), 2847, || 0.0), 3005);
    }

    #[test]
    fn unusable_stored_count_falls_back_to_base() {
        assert_eq!(initial_count(Some("lots"), 2847, || 0.0), 2852);
        assert_eq!(initial_count(Some("0"), 2847, || 0.0), 2852);
        assert_eq!(initial_count(Some("-4"), 2847, || 0.0), 2852);
    }

    #[test]
    fn stale_count_below_base_is_lifted() {
        assert_eq!(initial_count(Some("100"), 2847, || 0.0), 2852);
        assert!(initial_count(Some("2847"), 2847, || 0.0) > 2847);
    }

    #[test]
    fn huge_stored_count_saturates() {
        assert_eq!(initial_count(Some("18446744073709551615"), 2847, || 0.5), u64::MAX);
        assert_eq!(tick(u64::MAX - 1, || 0.999), u64::MAX);
    }

    #[test]
    fn ticks_add_one_to_three() {
        assert_eq!(tick(100, || 0.0), 101);
        assert_eq!(tick(100, || 0.5), 102);
        assert_eq!(tick(100, || 0.999), 103);
    }

    #[test]
    fn tick_interval_between_half_and_one_minute() {
        assert_eq!(tick_interval_ms(|| 0.0), 30_000);
        assert!(tick_interval_ms(|| 0.999) < 60_000);
    }

    #[test]
    fn animation_eases_to_target() {
        assert_eq!(animated_value(2860, 0.0, 1500.0), 0);
        assert_eq!(animated_value(2860, 1500.0, 1500.0), 2860);
        assert_eq!(animated_value(2860, 9000.0, 1500.0), 2860);
        // Halfway in, ease-out-quart is already at 15/16.
        assert_eq!(animated_value(1600, 750.0, 1500.0), 1500);
    }

    #[test]
    fn counts_are_grouped_by_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(2867), "2,867");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}
