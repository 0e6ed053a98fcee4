use std::time::Duration;

use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener, use_raf_fn, use_window};
use wasm_bindgen::JsCast;
use web_sys::CanvasRenderingContext2d;

use crate::content::HeroContent;
use crate::pointfield::{draw_frame, PointField, Pointer};
use crate::typewriter::{Typewriter, TICK_MS};

/// Hero copy holds back briefly so the canvas paints first.
const CONTENT_DELAY_MS: u64 = 200;

#[component]
pub fn HeroSection(hero: HeroContent) -> impl IntoView {
    let (show_content, set_show_content) = signal(false);
    let show_timer = StoredValue::new_local(None::<TimeoutHandle>);

    Effect::new(move |_| {
        if let Ok(handle) = set_timeout_with_handle(
            move || set_show_content(true),
            Duration::from_millis(CONTENT_DELAY_MS),
        ) {
            show_timer.set_value(Some(handle));
        }
    });
    on_cleanup(move || {
        if let Some(handle) = show_timer.get_value() {
            handle.clear();
        }
    });

    let badge = hero.badge;
    let headline = hero.headline;
    let headline_accent = hero.headline_accent;
    let subtitle = hero.subtitle;
    let subtitle_delay_ms = hero.subtitle_delay_ms;

    view! {
        <section class="relative min-h-screen flex items-center justify-center overflow-hidden">
            <GridCanvas />

            // horizontal line accents
            <div
                class="absolute top-1/4 left-0 w-full h-px bg-gradient-to-r from-transparent via-primary/10 to-transparent"
                aria-hidden="true"
            ></div>
            <div
                class="absolute top-3/4 left-0 w-full h-px bg-gradient-to-r from-transparent via-neon-red/10 to-transparent"
                aria-hidden="true"
            ></div>

            {move || {
                show_content()
                    .then(|| {
                        view! {
                            <div class="relative z-10 mx-auto max-w-4xl px-6 text-center">
                                <div class="mb-8 animate-fade-in-up" style=("animation-delay", "0.1s")>
                                    <span class="inline-block font-mono text-xs tracking-[0.3em] text-muted-foreground border border-border px-4 py-2">
                                        {badge}
                                    </span>
                                </div>

                                <h1 class="text-4xl md:text-6xl lg:text-7xl font-sans font-bold tracking-tight text-foreground mb-6">
                                    <span class="block animate-fade-in-up" style=("animation-delay", "0.3s")>
                                        {headline}
                                    </span>
                                    <span
                                        class="block text-primary animate-fade-in-up"
                                        style=("animation-delay", "0.5s")
                                    >
                                        {headline_accent}
                                    </span>
                                </h1>

                                <div
                                    class="font-mono text-sm md:text-base text-secondary-foreground max-w-2xl mx-auto mb-12 animate-fade-in-up"
                                    style=("animation-delay", "0.8s")
                                >
                                    <TypewriterText text=subtitle delay_ms=subtitle_delay_ms />
                                </div>

                                <div
                                    class="flex flex-col sm:flex-row items-center justify-center gap-4 animate-fade-in-up"
                                    style=("animation-delay", "1.2s")
                                >
                                    <a
                                        href="#projects"
                                        class="font-mono text-xs tracking-wider px-8 py-3 border border-primary text-primary hover:bg-primary hover:text-primary-foreground transition-all duration-300"
                                    >
                                        "VIEW PROJECTS"
                                    </a>
                                    <a
                                        href="#contact"
                                        class="font-mono text-xs tracking-wider px-8 py-3 border border-border text-secondary-foreground hover:border-foreground hover:text-foreground transition-all duration-300"
                                    >
                                        "ESTABLISH CONTACT"
                                    </a>
                                </div>

                                <div
                                    class="absolute bottom-10 left-1/2 -translate-x-1/2 flex flex-col items-center gap-2 animate-fade-in-up"
                                    style=("animation-delay", "2s")
                                >
                                    <span class="font-mono text-xs text-muted-foreground tracking-widest">
                                        "SCROLL"
                                    </span>
                                    <div class="w-px h-8 bg-gradient-to-b from-primary/50 to-transparent"></div>
                                </div>
                            </div>
                        }
                    })
            }}
        </section>
    }
}

/// Full-viewport canvas of proximity-lit dots behind the hero copy.
///
/// The grid model and intensity math live in [`crate::pointfield`]; this
/// component owns the scheduling: rebuild on resize, track the pointer, and
/// redraw once per animation frame. All three hooks are scoped to the
/// component and released on unmount.
#[component]
fn GridCanvas() -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let field = StoredValue::new(PointField::default());
    let pointer = StoredValue::new(Pointer::default());
    let ctx = StoredValue::new_local(None::<CanvasRenderingContext2d>);

    let fit_to_window = move || {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let win = window();
        let width = win
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or_default();
        let height = win
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or_default();
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        field.update_value(|f| f.rebuild(width, height));
    };

    // grab the 2d context and lay out the first grid once the node exists
    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|obj| obj.dyn_into::<CanvasRenderingContext2d>().ok());
        ctx.set_value(context);
        fit_to_window();
    });

    let _ = use_event_listener(use_window(), ev::resize, move |_| fit_to_window());
    let _ = use_event_listener(use_window(), ev::mousemove, move |evt| {
        pointer.set_value(Pointer {
            x: evt.client_x() as f64,
            y: evt.client_y() as f64,
        });
    });

    let _ = use_raf_fn(move |_| {
        ctx.with_value(|context| {
            if let Some(context) = context {
                field.with_value(|f| draw_frame(context, f, pointer.get_value()));
            }
        });
    });

    view! {
        <canvas node_ref=canvas_ref class="absolute inset-0 pointer-events-none" aria-hidden="true"></canvas>
    }
}

/// Reveals `text` one character every 35 ms after an initial delay, with a
/// blinking cursor glyph. The interval is cleared when the full string is out
/// and on unmount; a remount starts over from the empty prefix.
#[component]
pub fn TypewriterText(text: &'static str, #[prop(default = 0)] delay_ms: u64) -> impl IntoView {
    let (revealed, set_revealed) = signal(String::new());
    let machine = StoredValue::new(Typewriter::new(text));
    let delay_timer = StoredValue::new_local(None::<TimeoutHandle>);
    let tick_timer = StoredValue::new_local(None::<IntervalHandle>);

    Effect::new(move |_| {
        let start_ticking = move || {
            let tick = move || {
                machine.update_value(|m| m.tick());
                set_revealed(machine.with_value(|m| m.revealed()));
                if machine.with_value(|m| m.done()) {
                    if let Some(handle) = tick_timer.get_value() {
                        handle.clear();
                        tick_timer.set_value(None);
                    }
                }
            };
            if let Ok(handle) = set_interval_with_handle(tick, Duration::from_millis(TICK_MS)) {
                tick_timer.set_value(Some(handle));
            }
        };
        if let Ok(handle) = set_timeout_with_handle(start_ticking, Duration::from_millis(delay_ms))
        {
            delay_timer.set_value(Some(handle));
        }
    });

    on_cleanup(move || {
        if let Some(handle) = delay_timer.get_value() {
            handle.clear();
        }
        if let Some(handle) = tick_timer.get_value() {
            handle.clear();
        }
    });

    view! {
        <span>
            {revealed}
            <span class="animate-blink text-primary">"_"</span>
        </span>
    }
}
