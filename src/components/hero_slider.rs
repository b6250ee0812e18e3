//! Hero slideshow: rotating banner images with indicator dots.
//!
//! ARCHITECTURE
//! ============
//! [`SlideshowState`] decides which timer should exist; an effect watches the
//! derived [`TimerMode`] and swaps the browser timer in the shared slots to
//! match. Timer callbacks only update the signal, never the slots.

use leptos::prelude::*;

use crate::config::CatalogConfig;
use crate::state::slideshow::{Navigation, SlideshowState, TimerMode};
use crate::util::timers::{PageTimers, SharedTimers, TimerKind};
use crate::util::visibility::watch_visibility;

/// Replace the slide timers with the one `mode` calls for.
fn reconcile_slide_timer(
    timers: &mut PageTimers,
    mode: TimerMode,
    slideshow: RwSignal<SlideshowState>,
    config: &CatalogConfig,
) {
    timers.cancel(TimerKind::SlideTick);
    timers.cancel(TimerKind::SlideCooldown);
    match mode {
        TimerMode::Running => {
            timers.schedule_interval(TimerKind::SlideTick, config.slide_interval_ms, move || {
                slideshow.update(SlideshowState::advance);
            });
        }
        TimerMode::Cooldown { epoch } => {
            timers.schedule_timeout(TimerKind::SlideCooldown, config.nav_cooldown_ms, move || {
                slideshow.update(|s| s.cooldown_elapsed(epoch));
            });
        }
        TimerMode::Paused => {}
    }
    log::debug!("slideshow: timer {mode:?}");
}

#[component]
pub fn HeroSlider(images: Vec<String>) -> impl IntoView {
    let config = expect_context::<CatalogConfig>();
    let timers = expect_context::<SharedTimers>();
    let slideshow = RwSignal::new(SlideshowState::new(images.len()));
    let mode = Memo::new(move |_| slideshow.with(SlideshowState::timer_mode));

    Effect::new(move || {
        let mode = mode.get();
        timers.update_value(|t| reconcile_slide_timer(t, mode, slideshow, &config));
    });

    let keys = window_event_listener(leptos::ev::keydown, move |ev| {
        if let Some(nav) = Navigation::from_key(&ev.key()) {
            slideshow.update(|s| s.navigate(nav));
        }
    });
    on_cleanup(move || keys.remove());

    watch_visibility(move |hidden| slideshow.update(|s| s.set_hidden(hidden)));

    let slides = images
        .iter()
        .enumerate()
        .map(|(i, image)| {
            view! {
                <div class="slide" class:active=move || slideshow.with(|s| s.is_active(i))>
                    <img src=image.clone() alt=format!("Featured shoe {}", i + 1) class="slide-image"/>
                </div>
            }
        })
        .collect_view();

    let dots = (0..images.len())
        .map(|i| {
            view! {
                <button
                    class="slider-dot"
                    class:active=move || slideshow.with(|s| s.is_active(i))
                    on:click=move |_| slideshow.update(|s| s.navigate(Navigation::To(i)))
                    aria-label=format!("Go to slide {}", i + 1)
                ></button>
            }
        })
        .collect_view();

    view! {
        <section
            id="heroSection"
            class="hero"
            on:mouseenter=move |_| slideshow.update(|s| s.set_hovered(true))
            on:mouseleave=move |_| slideshow.update(|s| s.set_hovered(false))
        >
            <div class="hero-slider">{slides}</div>
            <div class="slider-dots">{dots}</div>
        </section>
    }
}
