//! Site content as plain data.
//!
//! Everything the sections render (copy, projects, skill levels, nav links)
//! lives here and is passed into components as props, so content edits never
//! touch behavior.

pub const DEFAULT_SITE_URL: &str = "https://recepcelik.dev";

/// Base URL for canonical/OG metadata. Read from the server environment when
/// available; metadata only, never behavioral.
pub fn site_url() -> String {
    #[cfg(feature = "ssr")]
    if let Ok(url) = std::env::var("SITE_URL") {
        return url;
    }
    DEFAULT_SITE_URL.to_string()
}

#[derive(Debug, Clone)]
pub struct SiteMeta {
    pub author: &'static str,
    pub handle: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub job_title: &'static str,
    pub field: &'static str,
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

impl NavLink {
    /// Element id the anchor points at.
    pub fn target_id(&self) -> &'static str {
        self.anchor.trim_start_matches('#')
    }
}

#[derive(Debug, Clone)]
pub struct HeroContent {
    pub badge: &'static str,
    pub headline: &'static str,
    pub headline_accent: &'static str,
    pub subtitle: &'static str,
    pub subtitle_delay_ms: u64,
}

#[derive(Debug, Clone)]
pub struct TraitCard {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone)]
pub struct AboutContent {
    pub lead: &'static str,
    pub body: &'static str,
    pub coordinates: Vec<(&'static str, &'static str)>,
    pub traits: Vec<TraitCard>,
}

#[derive(Debug, Clone)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub status: &'static str,
    pub status_class: &'static str,
    pub description: &'static str,
    pub tags: Vec<&'static str>,
    pub year: &'static str,
    pub github_url: &'static str,
    pub live_url: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub label: &'static str,
    pub level: u8,
}

#[derive(Debug, Clone)]
pub struct SkillCategory {
    pub title: &'static str,
    pub prefix: &'static str,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Copy)]
pub struct Directive {
    pub text: &'static str,
    pub annotation: &'static str,
}

#[derive(Debug, Clone)]
pub struct ContactChannel {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone)]
pub struct SiteContent {
    pub meta: SiteMeta,
    pub nav: Vec<NavLink>,
    pub hero: HeroContent,
    pub about: AboutContent,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub directives: Vec<Directive>,
    pub channels: Vec<ContactChannel>,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            meta: SiteMeta {
                author: "Recep Celik",
                handle: "Recep_Celik",
                title: "Recep Celik | Backend & Systems Engineer",
                description: "Backend-oriented Mathematics Engineering student building \
                              scalable systems, secure APIs, and cloud-native software.",
                job_title: "Backend Developer",
                field: "Mathematics Engineering",
                email: "celikrecep289@gmail.com",
                github: "https://github.com/RecepCelik1",
                linkedin: "https://www.linkedin.com/in/recep-celik-/",
            },
            nav: vec![
                NavLink { label: "ABOUT", anchor: "#about" },
                NavLink { label: "PROJECTS", anchor: "#projects" },
                NavLink { label: "CONTACT", anchor: "#contact" },
            ],
            hero: HeroContent {
                badge: "SYSTEM STATUS: OPERATIONAL",
                headline: "Engineering",
                headline_accent: "the Future.",
                subtitle: "Mathematics, Software, Engineering systems",
                subtitle_delay_ms: 1200,
            },
            about: AboutContent {
                lead: "Backend-focused Mathematics Engineering student building scalable \
                       systems with strong architectural foundations. I care about \
                       structure, performance, and long-term reliability over quick hacks.",
                body: "My mindset blends mathematical discipline with practical \
                       engineering. I design software like a system — modular, secure, and \
                       built to evolve. Currently focused on backend architecture, cloud \
                       infrastructure, and security-oriented development.",
                coordinates: vec![
                    ("FIELD", "Mathematics Engineering"),
                    ("FOCUS", "Backend Systems & Architecture"),
                    ("MISSION", "Build Robust & Scalable Software"),
                ],
                traits: vec![
                    TraitCard {
                        id: "ANA",
                        label: "Analytical Thinking",
                        description: "Breaking down complex problems into clear and \
                                      manageable solutions.",
                    },
                    TraitCard {
                        id: "SYS",
                        label: "System Design",
                        description: "Building structured and scalable software systems \
                                      that grow without breaking.",
                    },
                    TraitCard {
                        id: "SEC",
                        label: "Security Awareness",
                        description: "Designing applications with strong authentication \
                                      and data protection in mind.",
                    },
                    TraitCard {
                        id: "REL",
                        label: "Reliability",
                        description: "Creating stable and maintainable systems that \
                                      perform consistently under load.",
                    },
                    TraitCard {
                        id: "PRD",
                        label: "Product Mindset",
                        description: "Focusing not only on code, but on delivering real \
                                      value to users and businesses.",
                    },
                    TraitCard {
                        id: "CLD",
                        label: "Cloud-Ready",
                        description: "Deploying and managing applications in modern cloud \
                                      environments.",
                    },
                ],
            },
            projects: vec![
                Project {
                    id: "PRJ-001",
                    title: "Co-Founder & Backend Developer | B2B SaaS Startup",
                    status: "ARCHIVED",
                    status_class: "text-neon-red",
                    description: "Full-stack SaaS startup built with MongoDB, Express, \
                                  React, Node.js. Handled authentication, payments, and \
                                  real-time data. Valuable failure — sharpened system \
                                  design and resilience.",
                    tags: vec![
                        "MongoDB", "Express", "React", "Node.js", "Stripe", "Redux", "JWT",
                    ],
                    year: "2023",
                    github_url: "https://github.com/RecepCelik1/company-os",
                    live_url: None,
                },
                Project {
                    id: "PRJ-002",
                    title: "Oceanwaves Maritime | Freelance",
                    status: "COMPLETE",
                    status_class: "text-primary",
                    description: "Developed a production-ready web platform and \
                                  administrative dashboard for a global maritime \
                                  turbocharger supplier, focusing on scalable backend \
                                  architecture, secure authentication, and cloud \
                                  deployment.",
                    tags: vec![
                        "NestJS", "Node.js", "PostgreSQL", "Next.js", "JWT", "Docker",
                        "Google Cloud",
                    ],
                    year: "2025",
                    github_url: "https://github.com/RecepCelik1/ocean-waves",
                    live_url: Some("https://www.oceanwavesms.com/"),
                },
                Project {
                    id: "PRJ-003",
                    title: "Food Delivery Marketplace Platform",
                    status: "ACTIVE",
                    status_class: "text-accent",
                    description: "Architecting a scalable and real-time food delivery \
                                  backend with a modular system design, secure \
                                  authentication, and cloud-ready deployment. Focused on \
                                  reliability, low-latency APIs, and maintainable \
                                  architecture.",
                    tags: vec![
                        "NestJS", "PostgreSQL", "Redis", "Socket.io", "Prisma", "JWT",
                        "Docker", "Google Cloud",
                    ],
                    year: "2026",
                    github_url: "https://github.com/RecepCelik1/yiyo-refactor",
                    live_url: None,
                },
            ],
            skills: vec![
                SkillCategory {
                    title: "MATHEMATICS",
                    prefix: "MTH",
                    skills: vec![
                        Skill { label: "Linear Algebra", level: 92 },
                        Skill { label: "Calculus & Analysis", level: 88 },
                        Skill { label: "Probability & Stats", level: 85 },
                        Skill { label: "Numerical Methods", level: 80 },
                    ],
                },
                SkillCategory {
                    title: "SOFTWARE",
                    prefix: "SFT",
                    skills: vec![
                        Skill { label: "JavaScript / TS", level: 90 },
                        Skill { label: "React / Next.js", level: 85 },
                        Skill { label: "Node.js / Express", level: 82 },
                        Skill { label: "Python", level: 78 },
                    ],
                },
                SkillCategory {
                    title: "SYSTEMS",
                    prefix: "SYS",
                    skills: vec![
                        Skill { label: "System Design", level: 82 },
                        Skill { label: "Problem Decomp.", level: 90 },
                        Skill { label: "Analytical Modeling", level: 85 },
                        Skill { label: "Cybersecurity", level: 70 },
                    ],
                },
            ],
            directives: vec![
                Directive {
                    text: "Discipline over motivation.",
                    annotation: "// consistency compounds",
                },
                Directive {
                    text: "Systems > Emotions.",
                    annotation: "// trust the architecture",
                },
                Directive {
                    text: "Build. Test. Improve. Repeat.",
                    annotation: "// iteration protocol",
                },
                Directive {
                    text: "Weakness is a bug. Fix it.",
                    annotation: "// continuous deployment",
                },
            ],
            channels: vec![
                ContactChannel {
                    label: "celikrecep289@gmail.com",
                    href: "mailto:celikrecep289@gmail.com",
                },
                ContactChannel {
                    label: "github.com/RecepCelik1",
                    href: "https://github.com/RecepCelik1",
                },
                ContactChannel {
                    label: "linkedin.com/in/recep-celik-",
                    href: "https://www.linkedin.com/in/recep-celik-/",
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_anchors_resolve_to_ids() {
        let content = SiteContent::default();
        for link in &content.nav {
            assert!(link.anchor.starts_with('#'));
            assert!(!link.target_id().contains('#'));
        }
    }

    #[test]
    fn skill_levels_are_percentages() {
        let content = SiteContent::default();
        for category in &content.skills {
            for skill in &category.skills {
                assert!(skill.level <= 100, "{} out of range", skill.label);
            }
        }
    }
}
