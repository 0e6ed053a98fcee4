use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::content::NavLink;

/// Scroll offset past which the bar gets a solid background.
const SCROLLED_AT: f64 = 50.0;
/// A section counts as active once its top crosses this line below the bar.
const ACTIVE_BAND: f64 = 120.0;

#[component]
pub fn Navigation(links: Vec<NavLink>, handle: &'static str) -> impl IntoView {
    let (scrolled, set_scrolled) = signal(false);
    let (active, set_active) = signal(String::new());
    let (mobile_open, set_mobile_open) = signal(false);

    {
        let links = links.clone();
        let _ = use_event_listener(use_window(), ev::scroll, move |_| {
            set_scrolled(window().scroll_y().unwrap_or(0.0) > SCROLLED_AT);

            // last section whose top has crossed the band wins
            for link in links.iter().rev() {
                if let Some(el) = document().get_element_by_id(link.target_id()) {
                    if el.get_bounding_client_rect().top() <= ACTIVE_BAND {
                        set_active(link.target_id().to_string());
                        break;
                    }
                }
            }
        });
    }

    let desktop_links = links.clone();
    let mobile_links = links;

    view! {
        <nav class=move || {
            format!(
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 {}",
                if scrolled() {
                    "bg-background/80 backdrop-blur-md border-b border-border"
                } else {
                    "bg-transparent"
                },
            )
        }>
            <div class="mx-auto max-w-6xl flex items-center justify-between px-6 py-4">
                <a
                    href="#"
                    class="font-mono text-sm tracking-widest text-primary hover:text-foreground transition-colors"
                    aria-label="Home"
                >
                    ">"
                    {handle}
                </a>

                <ul class="hidden md:flex items-center gap-8">
                    {desktop_links
                        .into_iter()
                        .map(|link| {
                            view! {
                                <li>
                                    <a
                                        href=link.anchor
                                        class=move || {
                                            format!(
                                                "font-mono text-xs tracking-wider transition-colors {}",
                                                if active() == link.target_id() {
                                                    "text-primary"
                                                } else {
                                                    "text-secondary-foreground hover:text-foreground"
                                                },
                                            )
                                        }
                                    >
                                        {link.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <div class="hidden md:flex items-center gap-2">
                    <span class="inline-block h-2 w-2 rounded-full bg-primary animate-pulse-glow"></span>
                    <span class="font-mono text-xs text-muted-foreground">"ONLINE"</span>
                </div>

                <button
                    on:click=move |_| set_mobile_open(!mobile_open.get_untracked())
                    class="md:hidden font-mono text-xs text-muted-foreground hover:text-primary transition-colors"
                    aria-label="Toggle menu"
                >
                    {move || if mobile_open() { "[CLOSE]" } else { "[MENU]" }}
                </button>
            </div>

            {move || {
                mobile_open()
                    .then(|| {
                        view! {
                            <div class="md:hidden bg-background/95 backdrop-blur-md border-b border-border px-6 pb-6">
                                <ul class="flex flex-col gap-4">
                                    {mobile_links
                                        .iter()
                                        .map(|link| {
                                            let link = *link;
                                            view! {
                                                <li>
                                                    <a
                                                        href=link.anchor
                                                        on:click=move |_| set_mobile_open(false)
                                                        class="font-mono text-sm tracking-wider text-secondary-foreground hover:text-primary transition-colors"
                                                    >
                                                        {link.label}
                                                    </a>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
            }}
        </nav>
    }
}
