mod about;
mod contact;
mod footer;
mod hero;
mod nav;
mod philosophy;
mod projects;
mod section;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{site_url, SiteContent, SiteMeta};

use about::AboutSection;
use contact::ContactSection;
use footer::Footer;
use hero::HeroSection;
use nav::Navigation;
use philosophy::PhilosophySection;
use projects::ProjectsSection;
use section::SectionDivider;
use skills::SkillsSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <meta name="theme-color" content="#0a0a0f" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let content = SiteContent::default();
    let meta = content.meta.clone();
    let url = site_url();

    view! {
        <Title text=meta.title />
        <Meta name="description" content=meta.description />
        <Meta name="author" content=meta.author />
        <Link rel="canonical" href=url.clone() />
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=url.clone() />
        <Meta property="og:title" content=meta.title />
        <Meta property="og:description" content=meta.description />
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content=meta.title />
        <Meta name="twitter:description" content=meta.description />

        <Router>
            <main class="grid-bg min-h-screen">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route
                        path=path!("/")
                        view=move || view! { <HomePage content=content.clone() /> }
                    />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage(content: SiteContent) -> impl IntoView {
    view! {
        <script type="application/ld+json" inner_html=json_ld(&content.meta)></script>
        <Navigation links=content.nav.clone() handle=content.meta.handle />
        <HeroSection hero=content.hero.clone() />
        <SectionDivider />
        <AboutSection about=content.about.clone() />
        <SectionDivider />
        <ProjectsSection projects=content.projects.clone() />
        <SectionDivider />
        <SkillsSection categories=content.skills.clone() />
        <SectionDivider />
        <PhilosophySection directives=content.directives.clone() />
        <SectionDivider />
        <ContactSection channels=content.channels.clone() />
        <Footer handle=content.meta.handle />
    }
}

/// Person/WebSite graph for search engines, parameterized by the site URL.
fn json_ld(meta: &SiteMeta) -> String {
    let url = site_url();
    serde_json::json!({
        "@context": "https://schema.org",
        "@graph": [
            {
                "@type": "Person",
                "name": meta.author,
                "url": url,
                "jobTitle": meta.job_title,
                "alumniOf": meta.field,
                "sameAs": [meta.github, meta.linkedin],
            },
            {
                "@type": "WebSite",
                "name": format!("{} Portfolio", meta.author),
                "url": url,
                "description": meta.description,
            },
        ],
    })
    .to_string()
}
