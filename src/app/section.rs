use leptos::prelude::*;

/// Numbered section header: index tag, rule, uppercase title.
#[component]
pub fn SectionHeader(index: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4 mb-16">
            <span class="font-mono text-xs tracking-[0.3em] text-primary">{index}</span>
            <div class="h-px flex-1 bg-border"></div>
            <h2 class="font-mono text-xs tracking-[0.3em] text-muted-foreground">{title}</h2>
        </div>
    }
}

#[component]
pub fn SectionDivider() -> impl IntoView {
    view! {
        <div class="mx-auto max-w-5xl px-6">
            <div class="h-px bg-gradient-to-r from-transparent via-border to-transparent"></div>
        </div>
    }
}

/// Dot row + command label that dresses a panel up as a terminal window.
#[component]
pub fn TerminalChrome(command: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2 px-4 py-2 border-b border-border bg-secondary/30">
            <span class="h-2 w-2 rounded-full bg-neon-red"></span>
            <span class="h-2 w-2 rounded-full bg-muted-foreground"></span>
            <span class="h-2 w-2 rounded-full bg-primary"></span>
            <span class="font-mono text-xs text-muted-foreground ml-2">{command}</span>
        </div>
    }
}
