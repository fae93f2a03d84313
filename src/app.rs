mod contact;
mod content;
mod experience;
mod header;
mod hero;
mod portfolio;
mod toast;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use contact::ContactSection;
use experience::ExperienceSection;
use header::Header;
use hero::HeroSection;
use portfolio::PortfolioSection;
use toast::{Toaster, Toasts};

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
            <body class="bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(Toasts::new());

    view! {
        // sets the document title
        <Title formatter=|title| format!("Portfolio - {title}") />

        <Router>
            <Header />
            <main class="flex flex-col flex-grow mx-auto w-full max-w-7xl">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Toaster />
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <HeroSection />
        <PortfolioSection />
        <ExperienceSection />
        <ContactSection />
    }
}
