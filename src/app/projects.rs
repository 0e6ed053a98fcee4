use leptos::{html, prelude::*};

use super::section::SectionHeader;
use crate::content::Project;
use crate::reveal::use_in_view;

// taller cards, so reveal a little earlier than the other sections
const THRESHOLD: f64 = 0.15;

#[component]
pub fn ProjectsSection(projects: Vec<Project>) -> impl IntoView {
    let section_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(section_ref, THRESHOLD);

    view! {
        <section id="projects" class="relative py-32 px-6">
            <div class="mx-auto max-w-5xl" node_ref=section_ref>
                <SectionHeader index="02" title="PROJECTS" />

                <div class="flex flex-col gap-6">
                    {projects
                        .into_iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <div
                                    class=move || {
                                        format!(
                                            "group border border-border hover:border-primary/30 transition-all duration-500 {}",
                                            if in_view() {
                                                "opacity-100 translate-y-0"
                                            } else {
                                                "opacity-0 translate-y-8"
                                            },
                                        )
                                    }
                                    style=("transition-delay", format!("{}ms", i * 100))
                                >
                                    <div class="flex items-center justify-between px-5 py-3 border-b border-border bg-secondary/30">
                                        <div class="flex items-center gap-4">
                                            <span class="font-mono text-xs text-muted-foreground">
                                                {project.id}
                                            </span>
                                            <span class="font-mono text-xs text-muted-foreground">
                                                {project.year}
                                            </span>
                                        </div>
                                        <span class=format!(
                                            "font-mono text-xs {}",
                                            project.status_class,
                                        )>{project.status}</span>
                                    </div>

                                    <div class="px-5 py-5">
                                        <h3 class="font-sans text-lg font-semibold text-foreground mb-3 group-hover:text-primary transition-colors">
                                            {project.title}
                                        </h3>
                                        <p class="font-mono text-xs text-secondary-foreground leading-relaxed mb-4 max-w-2xl">
                                            {project.description}
                                        </p>

                                        <div class="mb-4 flex items-center gap-4">
                                            <a
                                                href=project.github_url
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="font-mono text-xs text-primary hover:text-foreground transition-colors"
                                            >
                                                "[GITHUB]"
                                            </a>
                                            {project
                                                .live_url
                                                .map(|url| {
                                                    view! {
                                                        <a
                                                            href=url
                                                            target="_blank"
                                                            rel="noopener noreferrer"
                                                            class="font-mono text-xs text-primary hover:text-foreground transition-colors"
                                                        >
                                                            "[LIVE]"
                                                        </a>
                                                    }
                                                })}
                                        </div>

                                        <div class="flex flex-wrap gap-2">
                                            {project
                                                .tags
                                                .iter()
                                                .map(|tag| {
                                                    let tag = *tag;
                                                    view! {
                                                        <span class="font-mono text-xs px-2 py-1 border border-border text-secondary-foreground">
                                                            {tag}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
