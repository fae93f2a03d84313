use leptos::prelude::*;

use super::content::NAV_LINKS;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-40 bg-background/90 shadow-lg backdrop-blur-sm">
            <div class="mx-auto px-4 sm:px-6 lg:px-8 py-4 max-w-7xl">
                <div class="flex flex-wrap items-center justify-between gap-2">
                    <a href="#hero" class="text-2xl font-bold">
                        <span class="text-cyan">"dev"</span>
                        <span class="text-muted">"."</span>
                        <span class="text-purple">"folio"</span>
                    </a>
                    <nav class="flex gap-4 sm:gap-6">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=format!("#{}", link.id)
                                        class="font-medium text-muted hover:text-foreground transition-colors duration-200"
                                    >
                                        {link.title}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                </div>
            </div>
        </header>
    }
}
