use leptos::{html, prelude::*};

use super::section::SectionHeader;
use crate::content::Directive;
use crate::reveal::{use_in_view, DEFAULT_THRESHOLD};

#[component]
pub fn PhilosophySection(directives: Vec<Directive>) -> impl IntoView {
    let section_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(section_ref, DEFAULT_THRESHOLD);

    view! {
        <section id="philosophy" class="relative py-32 px-6">
            // background accent line
            <div
                class="absolute top-0 left-1/2 w-px h-full bg-gradient-to-b from-transparent via-border to-transparent -translate-x-1/2"
                aria-hidden="true"
            ></div>

            <div class="mx-auto max-w-5xl relative" node_ref=section_ref>
                <SectionHeader index="04" title="CORE DIRECTIVES" />

                <div class="grid md:grid-cols-2 gap-8">
                    {directives
                        .into_iter()
                        .enumerate()
                        .map(|(i, directive)| {
                            view! {
                                <div
                                    class=move || {
                                        format!(
                                            "border border-border p-8 relative overflow-hidden group hover:border-primary/20 transition-all duration-500 {}",
                                            if in_view() {
                                                "opacity-100 translate-y-0"
                                            } else {
                                                "opacity-0 translate-y-8"
                                            },
                                        )
                                    }
                                    style=("transition-delay", format!("{}ms", i * 150))
                                >
                                    <div
                                        class="absolute top-0 left-0 w-3 h-3 border-t border-l border-primary/40"
                                        aria-hidden="true"
                                    ></div>
                                    <div
                                        class="absolute bottom-0 right-0 w-3 h-3 border-b border-r border-primary/40"
                                        aria-hidden="true"
                                    ></div>

                                    <blockquote class="font-sans text-xl md:text-2xl font-bold text-foreground mb-3 text-balance">
                                        {format!("\"{}\"", directive.text)}
                                    </blockquote>
                                    <p class="font-mono text-xs text-primary/80">
                                        {directive.annotation}
                                    </p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
