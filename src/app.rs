mod about;
mod decor;
mod hero;
mod navbar;
mod skills;
mod work;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::About;
use hero::Hero;
use navbar::Navbar;
use skills::Skills;
use work::Work;

pub const BUILD_TIME: &str = env!("BUILD_TIME");

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
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-[#05061a] text-white font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Saad Edroos - {title}") />
        <Meta name="description" content="Full-stack developer portfolio: projects, skills and contact." />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Navbar />
        <main class="flex flex-col w-full overflow-x-hidden">
            <Hero />
            <About />
            <Skills />
            <Work />
        </main>
        <Footer />
    }
}

#[component]
fn Footer() -> impl IntoView {
    let built = chrono::DateTime::parse_from_rfc3339(BUILD_TIME)
        .map(|t| t.format("%b %e %Y").to_string())
        .unwrap_or_else(|_| BUILD_TIME.to_string());
    view! {
        <footer id="contact" class="py-10 text-center text-xs font-mono text-white/30">
            <a href="mailto:hello@saadedroos.com" class="hover:text-white/60 transition-colors">
                "hello@saadedroos.com"
            </a>
            <div class="mt-2">"built " {built}</div>
        </footer>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        let resp = expect_context::<leptos_axum::ResponseOptions>();
        resp.set_status(http::StatusCode::NOT_FOUND);
    }
    view! {
        <Title text="Not Found" />
        <main class="flex flex-col min-h-screen items-center justify-center gap-4 font-mono">
            <h1 class="text-4xl font-black tracking-widest">"NO SIGNAL"</h1>
            <p class="text-white/40">"404 - this channel doesn't exist."</p>
            <a href="/" class="text-indigo-300 hover:text-indigo-200">
                "Back to the homepage"
            </a>
        </main>
    }
}
