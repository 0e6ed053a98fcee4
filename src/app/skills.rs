use leptos::{html, prelude::*};

use super::section::{SectionHeader, TerminalChrome};
use crate::content::SkillCategory;
use crate::reveal::{use_in_view, DEFAULT_THRESHOLD};

#[component]
pub fn SkillsSection(categories: Vec<SkillCategory>) -> impl IntoView {
    let section_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(section_ref, DEFAULT_THRESHOLD);

    view! {
        <section id="skills" class="relative py-32 px-6">
            <div class="mx-auto max-w-5xl" node_ref=section_ref>
                <SectionHeader index="03" title="SYSTEM DIAGNOSTICS" />

                <div class="border border-border mb-8">
                    <TerminalChrome command="skills --diagnostics --verbose" />

                    <div class="p-6">
                        <div class="font-mono text-xs text-secondary-foreground mb-6">
                            <span class="text-primary">">"</span>
                            " Running system diagnostics..."
                            <br />
                            <span class="text-primary">">"</span>
                            " All subsystems nominal."
                            <br />
                            <span class="text-primary">">"</span>
                            " Rendering capability matrix:"
                        </div>

                        <div class="grid md:grid-cols-1 gap-10">
                            {categories
                                .into_iter()
                                .enumerate()
                                .map(|(ci, category)| {
                                    view! {
                                        <div
                                            class=move || {
                                                format!(
                                                    "transition-all duration-700 {}",
                                                    if in_view() {
                                                        "opacity-100 translate-y-0"
                                                    } else {
                                                        "opacity-0 translate-y-6"
                                                    },
                                                )
                                            }
                                            style=("transition-delay", format!("{}ms", ci * 200))
                                        >
                                            <div class="flex items-center gap-3 mb-4">
                                                <span class="font-mono text-xs text-primary">
                                                    "[" {category.prefix} "]"
                                                </span>
                                                <span class="font-mono text-xs tracking-widest text-foreground">
                                                    {category.title}
                                                </span>
                                                <div class="flex-1 h-px bg-border"></div>
                                            </div>

                                            <div class="flex flex-col gap-3 pl-4">
                                                {category
                                                    .skills
                                                    .iter()
                                                    .enumerate()
                                                    .map(|(si, skill)| {
                                                        let skill = *skill;
                                                        view! {
                                                            <SkillBar
                                                                label=skill.label
                                                                level=skill.level
                                                                delay_ms=ci * 200 + si * 100
                                                                active=in_view
                                                            />
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Bar and percentage label both animate from zero when the section reveals;
/// the sweep itself is a CSS transition, only the target width is state.
#[component]
fn SkillBar(
    label: &'static str,
    level: u8,
    delay_ms: usize,
    active: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4">
            <span class="font-mono text-xs text-secondary-foreground w-36 shrink-0 text-right">
                {label}
            </span>
            <div class="flex-1 h-1 bg-secondary relative overflow-hidden">
                <div
                    class="absolute inset-y-0 left-0 bg-primary transition-all duration-1000 ease-out"
                    style:width=move || {
                        if active() { format!("{level}%") } else { "0%".to_string() }
                    }
                    style=("transition-delay", format!("{delay_ms}ms"))
                ></div>
            </div>
            <span class="font-mono text-xs text-primary w-10">
                {move || if active() { format!("{level}%") } else { "0%".to_string() }}
            </span>
        </div>
    }
}
