use leptos::prelude::*;

#[component]
pub fn Footer(handle: &'static str) -> impl IntoView {
    view! {
        <footer class="border-t border-border py-8 px-6">
            <div class="mx-auto max-w-5xl flex flex-col md:flex-row items-center justify-between gap-4">
                <span class="font-mono text-xs text-muted-foreground">
                    <span class="text-primary">">"</span>
                    {handle}
                </span>

                <div class="flex items-center gap-6">
                    <span class="font-mono text-xs text-muted-foreground">
                        "Built with precision."
                    </span>
                    <span class="font-mono text-xs text-muted-foreground/60">
                        {format!("build {}", env!("BUILD_TIME"))}
                    </span>
                    <span class="inline-block h-2 w-2 rounded-full bg-primary animate-pulse-glow"></span>
                </div>
            </div>
        </footer>
    }
}
