use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use leptos::{
    either::Either,
    ev::{self, KeyboardEvent},
    html,
    leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle},
    prelude::*,
    server_fn::codec::GetUrl,
};
use leptos_use::{use_element_hover, use_event_listener, use_raf_fn, use_window};

use crate::effects::with_alpha;
#[cfg(feature = "ssr")]
use crate::projects::get_projects;
use crate::projects::{ShowcaseItem, GLOBAL_SHOWCASE_CACHE};
use crate::selector::{
    channel_number, ChannelSelector, Direction, Millis, SelectorConfig, SelectorError,
    SelectorState,
};

use super::decor::{GradientOrb, NoiseGrain, Particles, SectionLabel, WordHeading, NOISE_SVG};

#[server(input = GetUrl)]
pub async fn get_projects_server() -> Result<Vec<ShowcaseItem>, ServerFnError> {
    get_projects().map_err(|e| {
        tracing::error!("couldn't load projects: {e}");
        ServerFnError::new(e)
    })
}

fn now_ms() -> Millis {
    chrono::Utc::now().timestamp_millis().max(0) as Millis
}

/// Connects a [`ChannelSelector`] to the browser clock.
///
/// Every interaction goes through [`ChannelDriver::drive`], which fires any
/// due deadlines, publishes the resulting state and leaves exactly one
/// timeout armed for the next deadline.
#[derive(Clone)]
struct ChannelDriver {
    selector: StoredValue<ChannelSelector>,
    state: RwSignal<SelectorState>,
    wake: Arc<Mutex<Option<TimeoutHandle>>>,
}

impl ChannelDriver {
    fn new(len: usize) -> Result<Self, SelectorError> {
        let selector = ChannelSelector::new(len, SelectorConfig::default(), now_ms())?;
        Ok(Self {
            state: RwSignal::new(selector.state()),
            selector: StoredValue::new(selector),
            wake: Arc::new(Mutex::new(None)),
        })
    }

    fn drive(&self, f: impl FnOnce(&mut ChannelSelector, Millis)) {
        let now = now_ms();
        let Some((state, deadline)) = self.selector.try_update_value(|selector| {
            f(selector, now);
            selector.advance(now);
            (selector.state(), selector.next_deadline())
        }) else {
            // owner is gone, nothing left to drive
            return;
        };

        if self.state.try_get_untracked().is_some_and(|s| s != state) {
            self.state.set(state);
        }
        self.rearm(deadline.map(|at| at.saturating_sub(now)));
    }

    fn pump(&self) {
        self.drive(|_, _| {});
    }

    fn rearm(&self, delay: Option<Millis>) {
        let Ok(mut wake) = self.wake.lock() else {
            return;
        };
        if let Some(handle) = wake.take() {
            handle.clear();
        }
        let Some(delay) = delay else {
            return;
        };

        let driver = self.clone();
        match set_timeout_with_handle(move || driver.pump(), Duration::from_millis(delay)) {
            Ok(handle) => *wake = Some(handle),
            Err(e) => log::warn!("couldn't arm channel timer: {e:?}"),
        }
    }

    fn request(&self, target: usize) {
        self.drive(move |selector, now| {
            if let Err(e) = selector.request_channel(target, now) {
                log::warn!("ignored channel request: {e}");
            }
        });
    }

    fn step(&self, direction: Direction) {
        self.drive(move |selector, now| {
            selector.step(direction, now);
        });
    }

    fn set_paused(&self, paused: bool) {
        self.drive(move |selector, now| selector.set_paused(paused, now));
    }

    fn teardown(&self) {
        if let Ok(mut wake) = self.wake.lock() {
            if let Some(handle) = wake.take() {
                handle.clear();
            }
        }
        self.selector.try_update_value(|selector| selector.unmount());
    }
}

#[component]
pub fn Work() -> impl IntoView {
    let projects = Resource::new(
        || (),
        |_| async move {
            let cache = &*GLOBAL_SHOWCASE_CACHE;
            let cached = cache.get(&()).map(|items| (*items).clone());
            if let Some(items) = cached {
                return items;
            }
            let items = get_projects_server().await.unwrap_or_else(|e| {
                log::warn!("couldn't fetch projects: {e}");
                Vec::new()
            });
            #[cfg(feature = "hydrate")]
            if !items.is_empty() {
                cache.insert((), items.clone());
            }
            items
        },
    );

    view! {
        <section
            id="work"
            class="relative overflow-hidden py-28 lg:py-36"
            style="background: linear-gradient(180deg, #080b22 0%, #05061a 50%, #080b22 100%);"
        >
            <Particles count=12 seed=3 />
            <NoiseGrain />
            <SectionLabel text="03 / WORK" />

            <div class="container mx-auto max-w-5xl px-6 relative z-10">
                <div class="mb-14 text-center flex flex-col items-center gap-4">
                    <div class="fade-up inline-flex items-center gap-2 px-3 py-1 rounded-full border border-white/10 text-white/50 text-xs font-mono uppercase tracking-widest">
                        "Selected Projects"
                    </div>
                    <WordHeading first="My" second="Work" />
                    <p class="fade-up text-white/40 max-w-xl [animation-delay:200ms]">
                        "Flip through the channels to explore what I've been building."
                    </p>
                </div>

                <Suspense fallback=move || view! { <TvScreenMessage text="TUNING..." /> }>
                    {move || Suspend::new(async move {
                        let items = projects.await;
                        if items.is_empty() {
                            Either::Left(view! { <TvScreenMessage text="NO SIGNAL" /> })
                        } else {
                            Either::Right(view! { <ChannelTv items /> })
                        }
                    })}
                </Suspense>
            </div>
        </section>
    }
}

/// Placeholder screen shown while loading or when there is nothing to show.
#[component]
fn TvScreenMessage(text: &'static str) -> impl IntoView {
    view! {
        <div class="relative mx-auto aspect-video max-w-4xl rounded-3xl border border-white/10 bg-black overflow-hidden flex items-center justify-center">
            <Scanlines />
            <div
                class="absolute inset-0 opacity-20"
                style=format!("background-image: {NOISE_SVG}; background-size: 160px 160px;")
                aria-hidden="true"
            ></div>
            <span class="relative z-10 font-mono text-2xl tracking-[0.4em] text-white/60">{text}</span>
        </div>
    }
}

#[component]
fn ChannelTv(items: Vec<ShowcaseItem>) -> impl IntoView {
    let driver = match ChannelDriver::new(items.len()) {
        Ok(driver) => driver,
        Err(e) => {
            log::warn!("channel selector unavailable: {e}");
            return Either::Left(view! { <TvScreenMessage text="NO SIGNAL" /> });
        }
    };

    let len = items.len();
    let items = StoredValue::new(items);
    let state = driver.state;
    let active = Memo::new(move |_| state.get().active_index);
    let accent = Memo::new(move |_| items.with_value(|items| items[active.get()].accent_color.clone()));

    Effect::watch(
        || (),
        {
            let driver = driver.clone();
            move |_, _, _| driver.pump()
        },
        true,
    );
    on_cleanup({
        let driver = driver.clone();
        move || driver.teardown()
    });

    let screen = NodeRef::<html::Div>::new();
    let hovered = use_element_hover(screen);
    Effect::watch(
        move || hovered.get(),
        {
            let driver = driver.clone();
            move |hovered, _, _| driver.set_paused(*hovered)
        },
        false,
    );

    let _ = use_event_listener(use_window(), ev::keydown, {
        let driver = driver.clone();
        move |ev: KeyboardEvent| {
            if let Some(direction) = Direction::from_key(&ev.key()) {
                driver.step(direction);
            }
        }
    });

    let previous = driver.clone();
    let next = driver.clone();

    Either::Right(view! {
        <div class="relative">
            <div
                class="orb absolute -inset-20 rounded-full pointer-events-none blur-3xl transition-[background] duration-700"
                style=move || {
                    format!(
                        "background: radial-gradient(circle, {} 0%, transparent 70%);",
                        with_alpha(&accent.get(), 0x30),
                    )
                }
                aria-hidden="true"
            ></div>
            <GradientOrb
                color="rgba(168,85,247,0.2)"
                class="-bottom-32 -left-32 w-[420px] h-[420px]"
                delay=2.0
            />

            <div
                class="relative mx-auto max-w-4xl rounded-[2rem] border border-white/10 bg-[#0d0f1a] p-4 sm:p-6"
                style=move || {
                    format!(
                        "box-shadow: 0 0 80px {}, inset 0 1px 0 rgba(255,255,255,0.06);",
                        with_alpha(&accent.get(), 0x10),
                    )
                }
            >
                <div class="flex items-center justify-between mb-4 px-2 font-mono text-[10px] tracking-[0.3em] uppercase text-white/30">
                    <span>"Portfolio TV"</span>
                    <div class="flex items-center gap-3">
                        <span>"SIGNAL: LIVE"</span>
                        <div class="flex items-end gap-[2px]" aria-hidden="true">
                            {(1..=4)
                                .map(|bar| {
                                    view! {
                                        <span
                                            class="w-[3px] rounded-sm transition-colors duration-500"
                                            style=move || {
                                                format!(
                                                    "height: {}px; background: {};",
                                                    bar * 3,
                                                    with_alpha(&accent.get(), 0x60 + bar as u8 * 0x20),
                                                )
                                            }
                                        ></span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div
                    node_ref=screen
                    class="relative aspect-video overflow-hidden rounded-2xl bg-black"
                >
                    {move || {
                        let project = items.with_value(|items| items[active.get()].clone());
                        view! { <ChannelContent project /> }
                    }}
                    <div
                        class="pointer-events-none absolute inset-0 z-20"
                        style="background: radial-gradient(ellipse at center, transparent 55%, rgba(0,0,0,0.65) 100%);"
                        aria-hidden="true"
                    ></div>
                    <Scanlines />
                    <div class="crt-flicker pointer-events-none absolute inset-0 z-20 bg-white/[0.015]" aria-hidden="true"></div>
                    {move || state.get().is_transitioning.then(|| view! { <StaticNoise /> })}
                    {move || {
                        state
                            .get()
                            .show_badge
                            .then(|| {
                                view! {
                                    <div
                                        class="channel-badge absolute top-4 right-5 z-40 font-mono text-3xl font-bold tracking-widest"
                                        style=format!(
                                            "color: {}; text-shadow: 0 0 12px {};",
                                            accent.get(),
                                            with_alpha(&accent.get(), 0x90),
                                        )
                                    >
                                        "CH "
                                        {channel_number(active.get())}
                                    </div>
                                }
                            })
                    }}
                </div>

                <div class="mt-5 flex flex-col sm:flex-row items-center justify-between gap-4 px-2">
                    <div class="flex items-center gap-2" role="tablist">
                        {items
                            .with_value(|items| {
                                items
                                    .iter()
                                    .enumerate()
                                    .map(|(i, project)| (i, project.title.clone()))
                                    .collect::<Vec<_>>()
                            })
                            .into_iter()
                            .map(|(i, title)| {
                                let driver = driver.clone();
                                view! {
                                    <button
                                        class="h-2 rounded-full transition-all duration-300"
                                        style=move || {
                                            if active.get() == i {
                                                format!(
                                                    "width: 24px; background: linear-gradient(90deg, {0}, {1});",
                                                    accent.get(),
                                                    with_alpha(&accent.get(), 0x88),
                                                )
                                            } else {
                                                "width: 8px; background: rgba(255,255,255,0.3);".to_string()
                                            }
                                        }
                                        aria-label=format!("Channel {}: {title}", channel_number(i))
                                        aria-current=move || (active.get() == i).then_some("true")
                                        on:click=move |_| driver.request(i)
                                    ></button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="font-mono text-xs tracking-widest text-white/40">
                        {move || format!("CH {}/{}", channel_number(active.get()), channel_number(len - 1))}
                        <span class="mx-2 text-white/20">"·"</span>
                        <span style=move || format!("color: {};", with_alpha(&accent.get(), 0x80))>
                            {move || {
                                items.with_value(|items| items[active.get()].category.to_uppercase())
                            }}
                        </span>
                    </div>

                    <div class="flex items-center gap-2">
                        <button
                            class="p-2 rounded-lg border border-white/10 text-white/50 hover:text-white hover:border-white/30 transition-colors"
                            aria-label="Previous channel"
                            on:click=move |_| previous.step(Direction::Retreat)
                        >
                            "▲"
                        </button>
                        <button
                            class="p-2 rounded-lg border border-white/10 text-white/50 hover:text-white hover:border-white/30 transition-colors"
                            aria-label="Next channel"
                            on:click=move |_| next.step(Direction::Advance)
                        >
                            "▼"
                        </button>
                    </div>
                </div>

                <p class="mt-4 text-center font-mono text-[10px] tracking-widest text-white/20 uppercase">
                    "Use ← → or ↑ ↓ to change channels"
                </p>
            </div>
        </div>
    })
}

/// The programme on the current channel.
#[component]
fn ChannelContent(project: ShowcaseItem) -> impl IntoView {
    let accent = project.accent_color.clone();
    let recorded = chrono::Utc::now().format("%b %Y").to_string().to_uppercase();

    view! {
        <div class="channel-in absolute inset-0 grid md:grid-cols-2">
            <div class="relative hidden md:block overflow-hidden">
                <img
                    src=project.thumbnail.clone()
                    alt=project.title.clone()
                    class="h-full w-full object-cover opacity-80"
                />
                <div class="absolute inset-0 bg-gradient-to-r from-transparent to-black"></div>
                <div class="absolute top-4 left-4 flex items-center gap-2 font-mono text-[10px] tracking-widest text-red-400">
                    <span class="animate-pulse">"REC ●"</span>
                    <span class="text-white/50">{recorded}</span>
                </div>
            </div>

            <div class="relative flex flex-col justify-center gap-4 p-6 sm:p-8 overflow-y-auto">
                <span
                    class="self-start px-2.5 py-1 rounded-md text-[10px] font-mono uppercase tracking-widest"
                    style=format!(
                        "background: {}; border: 1px solid {}; color: {accent};",
                        with_alpha(&accent, 0x12),
                        with_alpha(&accent, 0x30),
                    )
                >
                    {project.category.clone()}
                </span>
                <GlitchText text=project.title.clone() />
                <p
                    class="text-sm font-semibold"
                    style=format!(
                        "background: linear-gradient(90deg, {accent}, {}); -webkit-background-clip: text; -webkit-text-fill-color: transparent;",
                        with_alpha(&accent, 0x88),
                    )
                >
                    {project.subtitle.clone()}
                </p>
                <div
                    class="text-sm text-white/50 leading-relaxed space-y-2"
                    inner_html=project.description.clone()
                ></div>
                <div class="flex flex-wrap gap-2">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="px-2 py-0.5 rounded border border-white/10 text-[10px] font-mono text-white/40">
                                    {tag.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <a
                    href=project.url.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="self-start inline-flex items-center gap-2 px-4 py-2 rounded-lg text-xs font-bold tracking-widest text-black transition-transform hover:scale-[1.04]"
                    style=format!("background: {accent};")
                >
                    "VISIT LIVE SITE ↗"
                </a>
            </div>
        </div>
    }
}

/// Heading with offset red and cyan ghosts that jitter in CSS.
#[component]
fn GlitchText(text: String) -> impl IntoView {
    view! {
        <h3 class="glitch relative text-2xl sm:text-3xl font-black tracking-tight text-white">
            <span class="relative z-10">{text.clone()}</span>
            <span class="glitch-red absolute inset-0 text-red-500/60" aria-hidden="true">
                {text.clone()}
            </span>
            <span class="glitch-cyan absolute inset-0 text-cyan-400/60" aria-hidden="true">
                {text}
            </span>
        </h3>
    }
}

#[component]
fn Scanlines() -> impl IntoView {
    view! {
        <div
            class="pointer-events-none absolute inset-0 z-20 opacity-40"
            style="background: repeating-linear-gradient(0deg, rgba(0,0,0,0.25) 0px, rgba(0,0,0,0.25) 1px, transparent 1px, transparent 3px);"
            aria-hidden="true"
        ></div>
    }
}

/// Snow shown for the length of a channel flip.
#[component]
fn StaticNoise() -> impl IntoView {
    let (frame, set_frame) = signal(0u32);
    let _ = use_raf_fn(move |_| set_frame.update(|f| *f = f.wrapping_add(1)));

    let style = move || {
        let f = frame.get() % 160;
        format!(
            "background-image: {NOISE_SVG}; background-size: 160px 160px; background-position: {}px {}px;",
            f * 37 % 160,
            f * 91 % 160,
        )
    };

    view! {
        <div class="absolute inset-0 z-30 bg-neutral-900" aria-hidden="true">
            <div class="absolute inset-0 opacity-70" style=style></div>
            {[(24, 3), (51, 5), (79, 2)]
                .into_iter()
                .map(|(top, height)| {
                    view! {
                        <div
                            class="glitch-bar absolute left-0 right-0 bg-white/20"
                            style=format!("top: {top}%; height: {height}px;")
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}
