use chrono::{Datelike, Local, Timelike, Weekday};
use yew::prelude::*;
use yew_hooks::prelude::use_interval;

const REFRESH_MS: u32 = 3_600_000;

/// Whole days until the next draw. On the draw day itself this is 0 until the
/// cutoff hour, then 7.
pub fn days_until_draw(today: Weekday, hour: u32, draw_day: Weekday, cutoff_hour: u32) -> u32 {
    let today = today.num_days_from_sunday();
    let draw = draw_day.num_days_from_sunday();
    let days = (draw + 7 - today) % 7;
    if days == 0 && hour >= cutoff_hour {
        7
    } else {
        days
    }
}

/// A countdown never shows zero; draw day reads as a full week.
pub fn display_days(days: u32) -> u32 {
    if days == 0 {
        7
    } else {
        days
    }
}

fn days_from_now(draw_day: Weekday, cutoff_hour: u32) -> u32 {
    let now = Local::now();
    display_days(days_until_draw(now.weekday(), now.hour(), draw_day, cutoff_hour))
}

#[derive(Properties, PartialEq)]
pub struct CountdownProps {
    pub draw_day: Weekday,
    pub cutoff_hour: u32,
}

#[function_component(Countdown)]
pub fn countdown(props: &CountdownProps) -> Html {
    let draw_day = props.draw_day;
    let cutoff_hour = props.cutoff_hour;
    let days = use_state(move || days_from_now(draw_day, cutoff_hour));

    {
        let days = days.clone();
        use_interval(move || days.set(days_from_now(draw_day, cutoff_hour)), REFRESH_MS);
    }

    html! {
        <span id="countdown-days" class="countdown-days">{*days}</span>
    }
}
