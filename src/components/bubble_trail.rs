//! Decorative bubble trail following the pointer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once by the home page. Owns a window `mousemove` subscription, a
//! `BubbleTrail` queue and the decay timer that drains it.
//!
//! DESIGN
//! ======
//! - Every pointer move appends one bubble. The queue is bounded, so a
//!   fast-moving pointer evicts the oldest bubbles instead of growing.
//! - One decay tick is pending at most. It is armed when the queue goes from
//!   empty to non-empty and re-armed after each removal while bubbles remain.
//! - Teardown removes the listener and cancels the pending tick, so nothing
//!   fires after the component is gone.

#[cfg(test)]
#[path = "bubble_trail_test.rs"]
mod bubble_trail_test;

use leptos::prelude::*;
use rand::Rng;

use crate::state::bubbles::{BubbleTrail as Trail, DECAY_DELAY};
use crate::util::timer::Timer;

/// Component-owned decay timer. `Timer` holds a non-`Send` callback.
pub type DecayTimer = StoredValue<Timer, LocalStorage>;

/// Fixed, click-through layer rendering the live bubbles.
#[component]
pub fn BubbleTrail() -> impl IntoView {
    let trail = RwSignal::new(Trail::default());

    #[cfg(feature = "csr")]
    subscribe(trail);

    view! {
        <div class="bubble-layer" aria-hidden="true">
            <For
                each=move || trail.with(|t| t.iter().copied().collect::<Vec<_>>())
                key=|bubble| bubble.id
                children=|bubble| view! { <span class=bubble.class() style=bubble.style()></span> }
            />
        </div>
    }
}

#[cfg(feature = "csr")]
fn subscribe(trail: RwSignal<Trail>) {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    let seed = js_sys::Date::now().to_bits();
    let rng = StoredValue::new(SmallRng::seed_from_u64(seed));
    let timer: DecayTimer = StoredValue::new_local(Timer::default());

    let handle = window_event_listener(leptos::ev::mousemove, move |ev| {
        let x = f64::from(ev.client_x());
        let y = f64::from(ev.client_y());
        rng.try_update_value(|rng| emit_at(trail, timer, x, y, rng));
    });

    on_cleanup(move || {
        handle.remove();
        teardown(trail, timer);
    });
}

/// Add a bubble at `(x, y)`, arming decay when the trail was idle.
pub fn emit_at<R: Rng + ?Sized>(
    trail: RwSignal<Trail>,
    timer: DecayTimer,
    x: f64,
    y: f64,
    rng: &mut R,
) {
    let must_arm = trail.try_update(|t| t.emit(x, y, rng)).unwrap_or(false);
    if must_arm {
        arm_decay(trail, timer);
    }
}

/// Schedule one decay tick. Each tick removes the oldest bubble and
/// schedules the next while bubbles remain.
pub fn arm_decay(trail: RwSignal<Trail>, timer: DecayTimer) {
    let tick = move || {
        let again = trail
            .try_update(|t| {
                t.expire_oldest();
                t.decay_armed()
            })
            .unwrap_or(false);
        if again {
            arm_decay(trail, timer);
        }
    };
    timer.try_update_value(|t| t.schedule(DECAY_DELAY, tick));
}

/// Cancel the pending tick and mark the trail idle.
pub fn teardown(trail: RwSignal<Trail>, timer: DecayTimer) {
    timer.try_update_value(Timer::cancel);
    trail.try_update(Trail::disarm);
}
