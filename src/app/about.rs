use leptos::{html, prelude::*};
use leptos_use::{use_mouse_in_element, UseMouseInElementReturn};

use crate::effects::tilt_angles;

use super::decor::{
    GradientOrb, Marquee, NoiseGrain, Particles, SectionLabel, SocialLinks, WordHeading, SOCIALS,
};

const MARQUEE_ITEMS: &[&str] = &[
    "React",
    "Next.js",
    "Node.js",
    "TypeScript",
    "AWS",
    "System Design",
    "UI/UX",
    "Performance",
    "MongoDB",
    "GraphQL",
];

const ACCENT_TEXT: &str = "background: linear-gradient(90deg, #818cf8, #c084fc); -webkit-background-clip: text; -webkit-text-fill-color: transparent;";

#[component]
fn StatChip(value: &'static str, label: &'static str, icon: &'static str) -> impl IntoView {
    view! {
        <div class="fade-up flex items-center gap-3 px-5 py-3.5 rounded-2xl border border-white/8 bg-white/[0.04] backdrop-blur-sm hover:border-indigo-400/40 hover:bg-white/[0.07] transition-all duration-300 cursor-default group">
            <div class="p-2 rounded-xl bg-indigo-500/15 group-hover:bg-indigo-500/25 transition-colors text-indigo-400 text-sm">
                {icon}
            </div>
            <div>
                <div class="text-white font-bold text-sm leading-none">{value}</div>
                <div class="text-white/35 text-[11px] mt-0.5 font-medium">{label}</div>
            </div>
        </div>
    }
}

/// Portrait that tilts towards the pointer.
#[component]
fn PhotoCard(src: &'static str, name: &'static str) -> impl IntoView {
    let card = NodeRef::<html::Div>::new();
    let UseMouseInElementReturn {
        element_x,
        element_y,
        element_width,
        element_height,
        is_outside,
        ..
    } = use_mouse_in_element(card);

    let tilt_style = move || {
        let (rx, ry) = if is_outside.get() {
            (0.0, 0.0)
        } else {
            tilt_angles(
                element_x.get(),
                element_y.get(),
                element_width.get(),
                element_height.get(),
            )
        };
        format!(
            "transform: perspective(900px) rotateX({rx:.2}deg) rotateY({ry:.2}deg); transform-style: preserve-3d;"
        )
    };

    view! {
        <div class="relative flex items-center justify-center">
            <div
                class="absolute w-[300px] h-[300px] rounded-full blur-[100px] opacity-30"
                style="background: radial-gradient(circle, #6366f1 0%, #a855f7 60%, transparent 100%);"
            ></div>

            <div
                node_ref=card
                class="relative z-10 w-[280px] h-[340px] rounded-3xl overflow-hidden cursor-default group transition-transform duration-200 ease-out"
                style=tilt_style
            >
                <div
                    class="absolute -inset-[2px] rounded-3xl z-0"
                    style="background: linear-gradient(135deg, #6366f1 0%, #a855f7 50%, #f472b6 100%);"
                ></div>
                <div class="absolute inset-[2px] rounded-[22px] overflow-hidden z-10 bg-[#0d0a1f]">
                    <img
                        src=src
                        alt=name
                        class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-105"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-[#080b22] via-transparent to-transparent opacity-70"></div>
                </div>
                <div class="absolute bottom-5 left-5 z-20" style="transform: translateZ(40px);">
                    <p class="text-white font-bold text-lg leading-none tracking-tight">{name}</p>
                    <p class="text-sm font-semibold mt-1 tracking-wide" style=ACCENT_TEXT>
                        "Full-Stack Developer"
                    </p>
                </div>
            </div>

            <div class="absolute -bottom-4 z-30 inline-flex items-center gap-2 px-4 py-2 rounded-full border border-emerald-400/30 bg-[#0d0f1a]/90 backdrop-blur-md shadow-lg">
                <span class="relative flex h-2 w-2">
                    <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-emerald-400 opacity-75"></span>
                    <span class="relative inline-flex rounded-full h-2 w-2 bg-emerald-400"></span>
                </span>
                <span class="text-emerald-400 text-xs font-semibold tracking-wide uppercase">
                    "Available for Work"
                </span>
            </div>
        </div>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section
            id="about"
            class="relative overflow-hidden py-28 lg:py-36"
            style="background: linear-gradient(180deg, #080b22 0%, #05061a 50%, #080b22 100%);"
        >
            <Particles count=20 seed=2 />
            <NoiseGrain />
            <GradientOrb color="rgba(99,102,241,0.3)" class="-top-40 -right-40 w-[550px] h-[550px]" />
            <GradientOrb
                color="rgba(168,85,247,0.25)"
                class="-bottom-40 -left-40 w-[500px] h-[500px]"
                delay=3.0
            />
            <SectionLabel text="02 / ABOUT" />

            <div class="container mx-auto max-w-7xl px-6 lg:px-12 relative z-10">
                <div class="grid gap-16 lg:gap-20 lg:grid-cols-[auto_1fr] items-center">
                    <div class="flex justify-center lg:justify-start">
                        <PhotoCard src="/images/myPhoto.png" name="Saad Edroos" />
                    </div>

                    <div class="space-y-8">
                        <WordHeading first="About" second="Me" />

                        <div class="flex items-center gap-3">
                            <div class="w-8 h-px bg-indigo-400/60"></div>
                            <span class="text-white/35 text-sm font-mono uppercase tracking-widest">
                                "<developer />"
                            </span>
                        </div>

                        <div class="space-y-4 text-[15px] sm:text-base text-white/45 leading-relaxed max-w-lg">
                            <p>
                                "I'm a passionate developer who bridges the gap between "
                                <span class="text-white/80 font-medium">"robust backend logic"</span>
                                " and "
                                <span class="text-white/80 font-medium">"elegant frontend design"</span>
                                "."
                            </p>
                            <p>
                                "With deep expertise in the React ecosystem, I don't just write code, I build digital products that are "
                                <span class="font-semibold" style=ACCENT_TEXT>"fast"</span>
                                ", "
                                <span class="font-semibold" style=ACCENT_TEXT>"accessible"</span>
                                ", and "
                                <span class="font-semibold" style=ACCENT_TEXT>"scalable"</span>
                                "."
                            </p>
                        </div>

                        <div class="flex flex-wrap gap-3">
                            <StatChip value="3+ yrs" label="Experience" icon="⚡" />
                            <StatChip value="React+" label="Tech Stack" icon="</>" />
                        </div>

                        <Marquee items=MARQUEE_ITEMS />

                        <div class="flex flex-wrap items-center gap-4">
                            <a
                                href="#work"
                                class="inline-flex items-center gap-2 px-6 py-3 rounded-xl text-white font-semibold text-sm hover:scale-[1.04] active:scale-[0.97] transition-transform"
                                style="background: linear-gradient(135deg, #6366f1 0%, #8b5cf6 100%); box-shadow: 0 0 30px rgba(99,102,241,0.3), inset 0 1px 0 rgba(255,255,255,0.15);"
                            >
                                <span>"View Projects"</span>
                                <span>"↗"</span>
                            </a>
                            <a
                                href="/resume.pdf"
                                download="resume.pdf"
                                class="inline-flex items-center gap-2 px-6 py-3 rounded-xl border border-white/10 text-white/70 text-sm font-semibold hover:scale-[1.04] hover:border-white/20 active:scale-[0.97] transition-all"
                            >
                                <span>"↓"</span>
                                <span>"Download CV"</span>
                            </a>
                        </div>

                        <SocialLinks links=SOCIALS />
                    </div>
                </div>
            </div>
        </section>
    }
}
