use leptos::prelude::*;

use super::content::EXPERIENCES;

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section id="experience" class="my-16 section-content">
            <h2 class="text-3xl font-bold mb-8">"Experience"</h2>
            <div class="flex flex-col gap-8 border-l-2 border-muted/30 pl-6">
                {EXPERIENCES
                    .iter()
                    .map(|exp| {
                        view! {
                            <div class="space-y-2">
                                <div class="flex flex-col sm:flex-row sm:items-baseline sm:justify-between">
                                    <h3 class="text-xl font-bold">{exp.title}</h3>
                                    <span class="text-sm font-bold text-muted">{exp.date}</span>
                                </div>
                                <div class="text-cyan font-medium">{exp.company}</div>
                                <ul class="list-disc ml-5 space-y-1 text-muted">
                                    {exp.details
                                        .iter()
                                        .map(|detail| {
                                            view! { <li inner_html=*detail></li> }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
