use leptos::prelude::*;

use super::content::PROJECTS;

#[component]
pub fn PortfolioSection() -> impl IntoView {
    view! {
        <section id="portfolio" class="my-16 section-content">
            <h2 class="text-3xl font-bold mb-8">"Portfolio"</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                {PROJECTS
                    .iter()
                    .map(|project| {
                        view! {
                            <div class="flex flex-col bg-brightBlack/20 rounded-lg border border-muted/30 overflow-hidden hover:bg-brightBlack/30 transition-colors duration-200">
                                <img
                                    src=project.image
                                    alt=project.name
                                    loading="lazy"
                                    class="w-full h-48 object-cover"
                                />
                                <div class="p-6 flex flex-col gap-3">
                                    <h3 class="text-xl font-bold text-cyan">{project.name}</h3>
                                    <p class="text-sm text-muted leading-relaxed">
                                        {project.description}
                                    </p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
