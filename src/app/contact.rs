use leptos::{html, prelude::*, task::spawn_local};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use super::section::{SectionHeader, TerminalChrome};
use crate::content::ContactChannel;
use crate::reveal::{use_in_view, DEFAULT_THRESHOLD};
use crate::transmission::{
    ContactForm, SubmitOutcome, Transmission, TransportError, FORM_ENDPOINT,
};

impl From<JsValue> for TransportError {
    fn from(_: JsValue) -> Self {
        Self::Unreachable
    }
}

/// Single POST of the form payload; no retry, no timeout. The caller folds
/// any error into the generic unreachable outcome.
async fn transmit(payload: &ContactForm) -> Result<u16, TransportError> {
    let body = serde_json::to_string(payload)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(FORM_ENDPOINT, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or(TransportError::Unreachable)?;
    let response = JsFuture::from(window.fetch_with_request(&request)).await?;
    let response: Response = response.dyn_into()?;
    Ok(response.status())
}

#[component]
pub fn ContactSection(channels: Vec<ContactChannel>) -> impl IntoView {
    let section_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(section_ref, DEFAULT_THRESHOLD);
    let tx = RwSignal::new(Transmission::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // None when a send is in flight or a field is blank; both stay silent
        let Some(payload) = tx.try_update(|t| t.begin_submit()).flatten() else {
            return;
        };
        spawn_local(async move {
            let outcome = match transmit(&payload).await {
                Ok(status) => SubmitOutcome::from_status(status),
                Err(err) => {
                    log::error!("contact transmission failed: {err}");
                    SubmitOutcome::Unreachable
                }
            };
            tx.update(|t| t.finish_submit(outcome));
        });
    };

    let field = move |get: fn(&ContactForm) -> &String| {
        Signal::derive(move || tx.with(|t| get(&t.form).clone()))
    };

    view! {
        <section id="contact" class="relative py-32 px-6">
            <div class="mx-auto max-w-5xl" node_ref=section_ref>
                <SectionHeader index="05" title="ESTABLISH CONTACT" />

                <div class=move || {
                    format!(
                        "grid md:grid-cols-2 gap-12 transition-all duration-700 {}",
                        if in_view() {
                            "opacity-100 translate-y-0"
                        } else {
                            "opacity-0 translate-y-8"
                        },
                    )
                }>
                    <div>
                        <p class="font-mono text-sm text-secondary-foreground leading-relaxed mb-10">
                            "Open channels for collaboration, opportunities, or technical discussions"
                        </p>

                        <div class="flex flex-col gap-6">
                            {channels
                                .iter()
                                .map(|channel| {
                                    let channel = channel.clone();
                                    view! {
                                        <a
                                            href=channel.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="group flex items-center gap-4 font-mono text-sm text-foreground hover:text-primary transition-colors"
                                        >
                                            <span class="text-primary text-xs">">"</span>
                                            <span>{channel.label}</span>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="border border-border">
                        <TerminalChrome command="contact --terminal" />

                        <div class="p-4 min-h-[200px] flex flex-col">
                            <div class="flex-1 flex flex-col gap-1 mb-4">
                                {move || {
                                    tx.with(|t| {
                                        t.transcript()
                                            .iter()
                                            .map(|line| {
                                                view! {
                                                    <p class="font-mono text-xs text-secondary-foreground">
                                                        <span class="text-primary">"$"</span>
                                                        " "
                                                        {line.clone()}
                                                    </p>
                                                }
                                            })
                                            .collect_view()
                                    })
                                }}
                            </div>

                            <Show
                                when=move || !tx.with(|t| t.submitted())
                                fallback=|| {
                                    view! {
                                        <p class="font-mono text-xs text-primary">
                                            "> Transmission complete. Standing by."
                                        </p>
                                    }
                                }
                            >
                                <form on:submit=on_submit class="flex flex-col gap-3">
                                    <TerminalField
                                        value=field(|f| &f.name)
                                        on_input=Callback::new(move |v| tx.update(|t| t.form.name = v))
                                        placeholder="Name"
                                    />
                                    <TerminalField
                                        value=field(|f| &f.surname)
                                        on_input=Callback::new(move |v| {
                                            tx.update(|t| t.form.surname = v)
                                        })
                                        placeholder="Surname"
                                    />
                                    <TerminalField
                                        value=field(|f| &f.email)
                                        on_input=Callback::new(move |v| tx.update(|t| t.form.email = v))
                                        placeholder="Email"
                                        kind="email"
                                    />
                                    <TerminalField
                                        value=field(|f| &f.subject)
                                        on_input=Callback::new(move |v| {
                                            tx.update(|t| t.form.subject = v)
                                        })
                                        placeholder="Subject"
                                    />
                                    <TerminalField
                                        value=field(|f| &f.message)
                                        on_input=Callback::new(move |v| {
                                            tx.update(|t| t.form.message = v)
                                        })
                                        placeholder="Message"
                                    />
                                    <button
                                        type="submit"
                                        disabled=move || tx.with(|t| t.sending())
                                        class="self-end font-mono text-sm text-primary hover:text-foreground transition-colors disabled:opacity-50 disabled:cursor-not-allowed"
                                    >
                                        {move || {
                                            if tx.with(|t| t.sending()) {
                                                "[SENDING...]"
                                            } else {
                                                "[SEND]"
                                            }
                                        }}
                                    </button>
                                </form>
                            </Show>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// One prompt-prefixed input row of the terminal form.
#[component]
fn TerminalField(
    value: Signal<String>,
    on_input: Callback<String>,
    placeholder: &'static str,
    #[prop(default = "text")] kind: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 py-1">
            <span class="font-mono text-sm text-primary">">"</span>
            <input
                type=kind
                prop:value=value
                on:input=move |ev| on_input.run(event_target_value(&ev))
                placeholder=placeholder
                aria-label=placeholder
                class="flex-1 bg-transparent font-mono text-sm text-foreground placeholder:text-muted-foreground/50 outline-none"
            />
        </div>
    }
}
