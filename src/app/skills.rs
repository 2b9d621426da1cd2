use leptos::{ev::MouseEvent, prelude::*};

struct Skill {
    name: &'static str,
    icon: &'static str,
    hover: &'static str,
}

const SKILLS: &[Skill] = &[
    Skill { name: "JavaScript", icon: "devicon-javascript-plain", hover: "group-hover:text-yellow-400" },
    Skill { name: "Next.js", icon: "devicon-nextjs-plain", hover: "group-hover:text-white" },
    Skill { name: "React", icon: "devicon-react-original", hover: "group-hover:text-cyan-400" },
    Skill { name: "Laravel", icon: "devicon-laravel-original", hover: "group-hover:text-red-600" },
    Skill { name: "Tailwind", icon: "devicon-tailwindcss-original", hover: "group-hover:text-cyan-300" },
    Skill { name: "HTML5", icon: "devicon-html5-plain", hover: "group-hover:text-orange-600" },
    Skill { name: "CSS3", icon: "devicon-css3-plain", hover: "group-hover:text-blue-500" },
    Skill { name: "Node.js", icon: "devicon-nodejs-plain", hover: "group-hover:text-green-500" },
    Skill { name: "GSAP", icon: "extra-gsap", hover: "group-hover:text-green-400" },
    Skill { name: "Git", icon: "devicon-git-plain", hover: "group-hover:text-orange-500" },
    Skill { name: "Vercel", icon: "devicon-vercel-original", hover: "group-hover:text-white" },
    Skill { name: "Netlify", icon: "devicon-netlify-plain", hover: "group-hover:text-teal-400" },
    Skill { name: "Cloudways", icon: "extra-cloud", hover: "group-hover:text-indigo-400" },
    Skill { name: "Postman", icon: "devicon-postman-plain", hover: "group-hover:text-orange-500" },
];

/// Tile with a soft light that follows the pointer.
#[component]
fn SpotlightTile(children: Children) -> impl IntoView {
    let (position, set_position) = signal((0, 0));
    let (lit, set_lit) = signal(false);

    let spotlight = move || {
        let (x, y) = position.get();
        let opacity = if lit.get() { 1 } else { 0 };
        format!(
            "opacity: {opacity}; background: radial-gradient(600px circle at {x}px {y}px, rgba(255,255,255,0.06), transparent 40%);"
        )
    };

    view! {
        <div
            class="relative h-full overflow-hidden rounded-xl border border-white/10 bg-neutral-900/50 p-6"
            on:mousemove=move |ev: MouseEvent| set_position.set((ev.offset_x(), ev.offset_y()))
            on:mouseenter=move |_| set_lit.set(true)
            on:mouseleave=move |_| set_lit.set(false)
        >
            <div
                class="pointer-events-none absolute -inset-px transition duration-300"
                style=spotlight
            ></div>
            {children()}
        </div>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="relative py-24 bg-[#05061a]">
            <div class="container mx-auto max-w-6xl px-6">
                <div class="fade-up mb-14 text-center">
                    <h2 class="text-4xl md:text-5xl font-black tracking-tight mb-4">"Technologies"</h2>
                    <p class="text-white/40 max-w-xl mx-auto">
                        "A curated stack of tools for building scalable, high-performance applications."
                    </p>
                </div>

                <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-7 gap-4">
                    {SKILLS
                        .iter()
                        .enumerate()
                        .map(|(i, skill)| {
                            view! {
                                <div
                                    class="skill-tile group"
                                    style=format!("animation-delay: {}ms", i * 50)
                                >
                                    <SpotlightTile>
                                        <div class="flex flex-col items-center gap-3">
                                            <div class=format!(
                                                "text-4xl text-neutral-600 transition-colors duration-300 {}",
                                                skill.hover,
                                            )>
                                                <i class=skill.icon></i>
                                            </div>
                                            <h3 class="text-sm font-medium text-white/60 group-hover:text-white transition-colors">
                                                {skill.name}
                                            </h3>
                                        </div>
                                    </SpotlightTile>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
