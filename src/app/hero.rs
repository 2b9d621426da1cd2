use leptos::prelude::*;
use leptos_use::{use_interval_fn, use_window_scroll, use_window_size, utils::Pausable};

use crate::effects::{decrypt_frame, hero_fade, is_decrypted, DECRYPT_TICK_MS};

use super::decor::SocialLinks;

const HERO_SOCIALS: &[(&str, &str, &str)] = &[
    ("GitHub", "https://github.com", "devicon-github-plain"),
    ("LinkedIn", "https://linkedin.com", "devicon-linkedin-plain"),
    ("Twitter", "https://twitter.com", "devicon-twitter-original"),
];

/// Text that scrambles and resolves left to right, replaying on hover.
#[component]
fn DecryptedText(text: &'static str, #[prop(optional)] class: &'static str) -> impl IntoView {
    let (tick, set_tick) = signal(0u32);
    let Pausable { pause, resume, .. } =
        use_interval_fn(move || set_tick.update(|t| *t += 1), DECRYPT_TICK_MS);

    Effect::watch(
        move || tick.get(),
        move |tick, _, _| {
            if is_decrypted(text, *tick) {
                pause();
            }
        },
        false,
    );

    let display = move || {
        let tick = tick.get();
        if tick == 0 || is_decrypted(text, tick) {
            text.to_string()
        } else {
            decrypt_frame(text, tick)
        }
    };

    view! {
        <span
            class=format!("inline-block font-mono cursor-default {class}")
            aria-label=text
            on:mouseenter=move |_| {
                set_tick.set(0);
                resume();
            }
        >
            {display}
        </span>
    }
}

#[component]
fn BackgroundGrid() -> impl IntoView {
    view! {
        <div class="absolute inset-0 pointer-events-none" aria-hidden="true">
            <div class="absolute inset-0 bg-[linear-gradient(to_right,#80808012_1px,transparent_1px),linear-gradient(to_bottom,#80808012_1px,transparent_1px)] bg-[size:24px_24px] [mask-image:radial-gradient(ellipse_60%_50%_at_50%_0%,#000_70%,transparent_100%)]"></div>
            <div class="absolute left-0 right-0 top-0 m-auto h-[310px] w-[310px] rounded-full bg-[#00FFF5] opacity-20 blur-[100px]"></div>
        </div>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let size = use_window_size();
    let fade_style = move || {
        let (opacity, offset) = hero_fade(scroll_y.get(), size.height.get());
        format!("opacity: {opacity:.3}; transform: translateY({offset:.1}px);")
    };

    view! {
        <section id="home" class="relative min-h-screen flex items-center overflow-hidden bg-[#0a0a0f]">
            <BackgroundGrid />
            <div class="relative z-10 container mx-auto max-w-7xl px-6 lg:px-12 pt-28" style=fade_style>
                <div class="grid gap-12 lg:grid-cols-2 items-center">
                    <div class="space-y-8">
                        <div class="fade-up inline-flex items-center gap-2 px-3 py-1 rounded-full border border-[#00FFF5]/30 bg-[#00FFF5]/10 text-[#00FFF5] text-xs font-medium">
                            <span class="relative flex h-2 w-2">
                                <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-[#00FFF5] opacity-75"></span>
                                <span class="relative inline-flex rounded-full h-2 w-2 bg-[#00FFF5]"></span>
                            </span>
                            "Available for Work"
                        </div>

                        <div class="space-y-2">
                            <h2 class="text-xl text-white/60 font-medium">"Hello, I'm"</h2>
                            <h1 class="text-5xl sm:text-6xl lg:text-7xl font-black tracking-tight">
                                <DecryptedText text="SAAD EDROOS" class="text-[#00FFF5]" />
                            </h1>
                            <h2 class="fade-up text-2xl sm:text-3xl font-bold text-white/80 [animation-delay:500ms]">
                                "Full Stack Developer"
                            </h2>
                        </div>

                        <p class="fade-up max-w-xl text-white/50 leading-relaxed [animation-delay:700ms]">
                            "Crafting modern web experiences with React, Node.js, and cloud technologies. Building scalable applications with pixel-perfect intuitive interfaces."
                        </p>

                        <div class="fade-up flex flex-wrap gap-4 [animation-delay:900ms]">
                            <a
                                href="#work"
                                class="inline-flex items-center gap-2 px-6 py-3 rounded-lg bg-[#00FFF5] text-black font-semibold hover:shadow-[0_0_20px_rgba(0,255,245,0.4)] transition-all duration-300"
                            >
                                "View Projects →"
                            </a>
                            <a
                                href="/resume.pdf"
                                download="resume.pdf"
                                class="inline-flex items-center gap-2 px-6 py-3 rounded-lg border border-white/20 text-white/80 hover:bg-white/5 transition-all duration-300"
                            >
                                "Download CV ↓"
                            </a>
                        </div>

                        <div class="fade-up [animation-delay:1100ms]">
                            <SocialLinks links=HERO_SOCIALS />
                        </div>
                    </div>

                    <div class="relative hidden lg:flex items-center justify-center" aria-hidden="true">
                        <div class="absolute w-[380px] h-[380px] rounded-full bg-[#00FFF5]/10 blur-[90px]"></div>
                        <div class="float relative w-[320px] h-[320px] rounded-[40%] border border-[#00FFF5]/20 bg-gradient-to-br from-[#00FFF5]/10 via-indigo-500/10 to-fuchsia-500/10 flex items-center justify-center">
                            <span class="font-mono text-6xl text-[#00FFF5]/60">"</>"</span>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
