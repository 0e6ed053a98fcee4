use leptos::{html, prelude::*};

use super::section::SectionHeader;
use crate::content::AboutContent;
use crate::reveal::{use_in_view, DEFAULT_THRESHOLD};

#[component]
pub fn AboutSection(about: AboutContent) -> impl IntoView {
    let section_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(section_ref, DEFAULT_THRESHOLD);

    view! {
        <section id="about" class="relative py-32 px-6">
            <div class="mx-auto max-w-5xl" node_ref=section_ref>
                <SectionHeader index="01" title="ABOUT" />

                <div class="flex flex-col gap-16">
                    <div class=move || {
                        format!(
                            "transition-all duration-700 {}",
                            if in_view() {
                                "opacity-100 translate-y-0"
                            } else {
                                "opacity-0 translate-y-8"
                            },
                        )
                    }>
                        <p class="text-lg leading-relaxed text-foreground mb-6">{about.lead}</p>
                        <p class="text-base leading-relaxed text-secondary-foreground mb-6">
                            {about.body}
                        </p>

                        <div class="mt-10 flex flex-wrap gap-6">
                            {about
                                .coordinates
                                .iter()
                                .map(|(key, value)| {
                                    let (key, value) = (*key, *value);
                                    view! {
                                        <div class="font-mono text-xs text-muted-foreground">
                                            <span class="text-primary">{key}</span>
                                            <br />
                                            {value}
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        {about
                            .traits
                            .iter()
                            .enumerate()
                            .map(|(i, card)| {
                                let card = card.clone();
                                view! {
                                    <div
                                        class=move || {
                                            format!(
                                                "border border-border p-5 hover:border-primary/30 transition-all duration-500 {}",
                                                if in_view() {
                                                    "opacity-100 translate-x-0"
                                                } else {
                                                    "opacity-0 translate-x-8"
                                                },
                                            )
                                        }
                                        style=("transition-delay", format!("{}ms", i * 150))
                                    >
                                        <div class="flex items-center gap-3 mb-2">
                                            <span class="font-mono text-xs text-primary">
                                                "[" {card.id} "]"
                                            </span>
                                            <span class="font-sans text-sm font-semibold text-foreground">
                                                {card.label}
                                            </span>
                                        </div>
                                        <p class="font-mono text-xs text-secondary-foreground leading-relaxed">
                                            {card.description}
                                        </p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
