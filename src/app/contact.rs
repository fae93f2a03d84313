use leptos::{either::Either, ev::SubmitEvent, prelude::*};

#[cfg(target_arch = "wasm32")]
use leptos::task::spawn_local;

#[cfg(target_arch = "wasm32")]
use crate::form::{RelayTransport, Transport, RELAY_ENDPOINT};
use crate::form::{FieldKind, FieldSpec, FormModel, CONTACT_FIELDS};

use super::toast::Toasts;

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(FormModel::new(CONTACT_FIELDS));
    let toasts = expect_context::<Toasts>();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let submission = match form.write().begin_submit() {
            Ok(submission) => submission,
            // validation errors are already rendered inline; InFlight means
            // the click raced the disabled state
            Err(_) => return,
        };
        #[cfg(target_arch = "wasm32")]
        spawn_local(async move {
            let result = RelayTransport::new(RELAY_ENDPOINT).send(&submission).await;
            // if the section was torn down mid-request, discard the outcome
            let Some(outcome) = form.try_update(|f| f.finish_submit(result)) else {
                return;
            };
            match outcome {
                Ok(()) => toasts.success("Message sent successfully!"),
                Err(err) => {
                    log::error!("contact form submission failed: {err}");
                    toasts.error("Failed to send message. Please try again.");
                }
            }
        });
        #[cfg(not(target_arch = "wasm32"))]
        let _ = (submission, toasts);
    };

    view! {
        <section id="contact" class="my-16 max-w-2xl w-full mx-auto section-content">
            <h2 class="text-3xl font-bold">"Contact"</h2>
            <form on:submit=on_submit novalidate=true class="mt-12 gap-4 flex flex-col">
                {CONTACT_FIELDS
                    .iter()
                    .copied()
                    .map(|spec| view! { <FieldInput spec form /> })
                    .collect_view()}
                <button
                    type="submit"
                    disabled=move || form.with(|f| f.is_submitting())
                    class="bg-brightBlack/40 py-3 px-8 w-fit font-bold rounded-md shadow-md hover:bg-brightBlack/60 transition-colors duration-300 disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {move || if form.with(|f| f.is_submitting()) { "Sending..." } else { "Send" }}
                </button>
            </form>
        </section>
    }
}

#[component]
fn FieldInput(spec: FieldSpec, form: RwSignal<FormModel>) -> impl IntoView {
    let name = spec.name;
    let has_error = move || form.with(|f| f.error(name).is_some());
    let control_class = move || {
        let border = if has_error() { "border-red" } else { "border-muted" };
        format!(
            "bg-brightBlack/30 p-4 border rounded-md font-medium transition-all duration-300 focus:outline-none focus:ring-2 focus:ring-cyan {border}"
        )
    };
    let value = move || form.with(|f| f.value(name).to_string());
    let on_input = move |ev: leptos::ev::Event| {
        form.write().update_field(name, event_target_value(&ev));
    };

    let control = match spec.kind {
        FieldKind::Textarea => Either::Left(view! {
            <textarea
                name=name
                prop:value=value
                on:input=on_input
                placeholder=spec.placeholder
                rows="10"
                maxlength=spec.char_cap.map(|cap| cap.to_string())
                class=control_class
            ></textarea>
        }),
        kind => Either::Right(view! {
            <input
                type=if kind == FieldKind::Email { "email" } else { "text" }
                name=name
                prop:value=value
                on:input=on_input
                placeholder=spec.placeholder
                class=control_class
            />
        }),
    };

    view! {
        <span class="font-medium mt-3">{spec.label}</span>
        {control}
        <div class="flex justify-between text-sm">
            {move || {
                form.with(|f| {
                    f.error(name)
                        .map(|e| view! { <span class="text-red">{e.to_string()}</span> })
                })
            }}
            {spec.char_cap
                .map(|cap| {
                    view! {
                        <span class="ml-auto text-muted">
                            {move || format!("{}/{}", form.with(|f| f.char_count(name)), cap)}
                        </span>
                    }
                })}
        </div>
    }
}
