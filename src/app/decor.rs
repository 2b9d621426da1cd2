use leptos::prelude::*;

use crate::effects::particle_field;

const GRADIENT_TEXT: &str = "background: linear-gradient(90deg, #818cf8 0%, #c084fc 50%, #f472b6 100%); -webkit-background-clip: text; -webkit-text-fill-color: transparent;";

pub const NOISE_SVG: &str = "url(\"data:image/svg+xml,%3Csvg viewBox='0 0 200 200' xmlns='http://www.w3.org/2000/svg'%3E%3Cfilter id='n'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='0.9' numOctaves='4' stitchTiles='stitch'/%3E%3C/filter%3E%3Crect width='100%25' height='100%25' filter='url(%23n)'/%3E%3C/svg%3E\")";

/// Slowly drifting dots behind a section.
#[component]
pub fn Particles(count: usize, seed: u64) -> impl IntoView {
    view! {
        <div class="pointer-events-none absolute inset-0 overflow-hidden" aria-hidden="true">
            {particle_field(count, seed)
                .into_iter()
                .map(|p| {
                    view! {
                        <div
                            class="particle absolute rounded-full bg-indigo-300"
                            style=p.style()
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn NoiseGrain() -> impl IntoView {
    view! {
        <div
            class="pointer-events-none absolute inset-0 z-20 opacity-[0.03]"
            style=format!("background-image: {NOISE_SVG}; background-size: 180px 180px;")
            aria-hidden="true"
        ></div>
    }
}

/// Soft coloured blob that breathes in the corner of a section.
#[component]
pub fn GradientOrb(
    #[prop(into)] color: String,
    #[prop(into)] class: String,
    #[prop(default = 0.0)] delay: f64,
) -> impl IntoView {
    view! {
        <div
            class=format!("orb absolute rounded-full pointer-events-none {class}")
            style=format!(
                "background: radial-gradient(circle, {color} 0%, transparent 70%); animation-delay: {delay}s;",
            )
            aria-hidden="true"
        ></div>
    }
}

/// Vertical "02 / ABOUT" marker on the left edge.
#[component]
pub fn SectionLabel(text: &'static str) -> impl IntoView {
    view! {
        <div class="absolute left-3 top-1/2 -translate-y-1/2 hidden lg:flex flex-col items-center gap-1 pointer-events-none z-30">
            <span class="text-white/20 text-[9px] tracking-[0.2em] [writing-mode:vertical-rl] rotate-180 font-mono">
                {text}
            </span>
        </div>
    }
}

/// Two-word heading whose second word carries the brand gradient.
#[component]
pub fn WordHeading(first: &'static str, second: &'static str) -> impl IntoView {
    view! {
        <h2 class="flex flex-wrap gap-x-4 gap-y-1 overflow-hidden">
            <span class="word-reveal block text-white font-black leading-none text-[clamp(2.5rem,6vw,5rem)] tracking-[-0.04em]">
                {first}
            </span>
            <span class="word-reveal block font-black leading-none text-[clamp(2.5rem,6vw,5rem)] tracking-[-0.04em] [animation-delay:120ms]">
                <span style=GRADIENT_TEXT>{second}</span>
            </span>
        </h2>
    }
}

/// Infinite horizontal ticker. The items are rendered twice so the CSS
/// animation can loop at -50%.
#[component]
pub fn Marquee(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="relative overflow-hidden py-3 border-y border-white/5 [mask-image:linear-gradient(90deg,transparent,black_15%,black_85%,transparent)]">
            <div class="marquee flex w-max gap-8">
                {items
                    .iter()
                    .chain(items.iter())
                    .map(|item| {
                        view! {
                            <span class="text-white/30 text-xs font-mono uppercase tracking-widest whitespace-nowrap">
                                {*item}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn SocialLinks(links: &'static [(&'static str, &'static str, &'static str)]) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3">
            {links
                .iter()
                .map(|(label, href, icon)| {
                    view! {
                        <a
                            href=*href
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label=*label
                            class="p-2.5 rounded-xl border border-white/10 text-white/40 hover:text-white hover:border-indigo-400/40 transition-all duration-300"
                        >
                            <i class=*icon></i>
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

pub const SOCIALS: &[(&str, &str, &str)] = &[
    ("GitHub", "https://github.com", "devicon-github-plain"),
    ("LinkedIn", "https://linkedin.com", "devicon-linkedin-plain"),
    ("Email", "mailto:hello@saadedroos.com", "extra-email"),
];
