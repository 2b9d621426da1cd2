use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Home,
    About,
    Projects,
    Contact,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Home, Tab::About, Tab::Projects, Tab::Contact];

    fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::About => "About",
            Tab::Projects => "Projects",
            Tab::Contact => "Contact",
        }
    }

    fn href(self) -> &'static str {
        match self {
            Tab::Home => "#home",
            Tab::About => "#about",
            Tab::Projects => "#work",
            Tab::Contact => "#contact",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Tab::Home => "⌂",
            Tab::About => "◉",
            Tab::Projects => "</>",
            Tab::Contact => "✉",
        }
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let (active, set_active) = signal(Tab::Home);

    view! {
        <nav class="fixed top-6 left-1/2 -translate-x-1/2 z-50">
            <div class="flex items-center gap-1 bg-[#1F1F2E]/90 backdrop-blur-sm px-3 py-2 rounded-full border border-[#00FFF5]/20 hover:border-[#00FFF5]/40 transition-all duration-300">
                {Tab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <a
                                href=tab.href()
                                aria-label=tab.label()
                                on:click=move |_| set_active.set(tab)
                                class=move || {
                                    if active.get() == tab {
                                        "group relative p-2 rounded-full text-sm font-mono transition-all duration-300 bg-[#00FFF5]/20 text-[#00FFF5]"
                                    } else {
                                        "group relative p-2 rounded-full text-sm font-mono transition-all duration-300 text-[#EAEAEA]/60 hover:text-[#00FFF5]/80 hover:-translate-y-[2px]"
                                    }
                                }
                            >
                                <span class="inline-block w-5 text-center transition-transform duration-200 group-hover:scale-105">
                                    {tab.icon()}
                                </span>
                                <span class="absolute -top-8 left-1/2 -translate-x-1/2 opacity-0 group-hover:opacity-100 transition-all duration-200 text-[10px] font-medium text-[#00FFF5] pointer-events-none bg-[#1F1F2E]/90 px-2 py-1 rounded-full border border-[#00FFF5]/20">
                                    {tab.label()}
                                </span>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
