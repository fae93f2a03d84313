use leptos::prelude::*;

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section
            id="hero"
            class="flex flex-col justify-center items-center text-center min-h-[70vh] gap-6 section-content"
        >
            <h1 class="text-4xl lg:text-6xl font-bold">"Full Stack Developer"</h1>
            <p class="max-w-2xl text-lg text-muted leading-relaxed">
                "I design and build responsive, scalable web applications, from reactive frontends to the services behind them."
            </p>
            <div class="flex gap-4 mt-4">
                <a
                    href="#portfolio"
                    class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium transition-all duration-200 border border-cyan/30"
                >
                    "View Work"
                </a>
                <a
                    href="#contact"
                    class="bg-purple/20 hover:bg-purple/30 text-purple px-6 py-3 rounded-md font-medium transition-all duration-200 border border-purple/30"
                >
                    "Get in Touch"
                </a>
            </div>
        </section>
    }
}
