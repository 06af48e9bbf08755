use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::api::{self, ApiError};
use crate::session::{SessionContext, SessionStore};
use crate::ui::icon_button::IconButton;
use crate::ui::style::*;

/// Who said a line in the transcript.
#[derive(Clone, PartialEq)]
pub enum Author {
    User,
    Assistant,
}

#[derive(Clone, PartialEq)]
pub struct ChatMessage {
    pub author: Author,
    pub text: String,
}

#[function_component(ChatWindow)]
pub fn chat_window() -> Html {
    let session_ctx = use_context::<SessionContext>().expect("SessionContext not found");
    let messages = use_state(Vec::<ChatMessage>::new);
    let question = use_state(String::new);
    let pending = use_state(|| false);
    let chat_error = use_state(|| None as Option<String>);
    let uploading = use_state(|| false);
    let upload_status = use_state(|| None as Option<String>);
    let transcript_ref = use_node_ref();

    {
        let transcript_ref = transcript_ref.clone();
        use_effect_with((*messages).len(), move |_| {
            if let Some(el) = transcript_ref.cast::<web_sys::Element>() {
                el.set_scroll_top(el.scroll_height());
            }
            || ()
        });
    }

    let Some(session) = (*session_ctx).clone() else {
        // The gate redirects to the login form on the next render.
        return Html::default();
    };

    let send = {
        let messages = messages.clone();
        let question = question.clone();
        let pending = pending.clone();
        let chat_error = chat_error.clone();
        let session_ctx = session_ctx.clone();
        let session = session.clone();
        Callback::from(move |_: ()| {
            let messages = messages.clone();
            let question = question.clone();
            let pending = pending.clone();
            let chat_error = chat_error.clone();
            let session_ctx = session_ctx.clone();
            let session = session.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if *pending {
                    return;
                }
                let text = question.trim().to_string();
                if text.is_empty() {
                    return;
                }
                pending.set(true);
                chat_error.set(None);
                question.set(String::new());

                let mut log = (*messages).clone();
                log.push(ChatMessage {
                    author: Author::User,
                    text: text.clone(),
                });
                messages.set(log.clone());

                match api::ask(&session, &text).await {
                    Ok(body) => {
                        log.push(ChatMessage {
                            author: Author::Assistant,
                            text: body.response,
                        });
                        messages.set(log);
                    }
                    Err(ApiError::Unauthorized(_)) => {
                        // Stale token: drop the session and let the gate
                        // route back to the login form.
                        SessionStore::clear();
                        session_ctx.set(None);
                    }
                    Err(err) => {
                        chat_error.set(Some(err.to_string()));
                    }
                }
                pending.set(false);
            });
        })
    };

    let on_send_click = {
        let send = send.clone();
        Callback::from(move |_: MouseEvent| send.emit(()))
    };

    let on_keydown = {
        let send = send.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                send.emit(());
            }
        })
    };

    let logout = {
        let session_ctx = session_ctx.clone();
        Callback::from(move |_: MouseEvent| {
            SessionStore::clear();
            session_ctx.set(None);
        })
    };

    let on_upload = {
        let session = session.clone();
        let uploading = uploading.clone();
        let upload_status = upload_status.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                return;
            };
            input.set_value("");
            let session = session.clone();
            let uploading = uploading.clone();
            let upload_status = upload_status.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if *uploading {
                    return;
                }
                uploading.set(true);
                upload_status.set(Some(format!("Uploading {}…", file.name())));
                match api::upload_pdf(&session, &file).await {
                    Ok(body) => upload_status.set(Some(body.message)),
                    Err(err) => upload_status.set(Some(err.to_string())),
                }
                uploading.set(false);
            });
        })
    };

    html! {
        <div class={container_style()}>
            <div class={top_bar_style()}>
                <div class={header_style()}>{ "DocChat" }</div>
                <div style="display: flex; gap: 0.8em;">
                    <label for="pdf-upload" class={icon_style()} title="Upload a PDF for indexing">
                        <Icon width={"1.5em"} height={"1.5em"} icon_id={IconId::LucideUpload} />
                    </label>
                    <input
                        id="pdf-upload"
                        type="file"
                        accept="application/pdf"
                        style="display: none;"
                        onchange={on_upload}
                    />
                    <IconButton
                        icon_id={IconId::LucideLogOut}
                        label={"Sign out"}
                        onclick={logout}
                    />
                </div>
            </div>
            if let Some(status) = &*upload_status {
                <div class={status_text_style()}>{ status }</div>
            }
            <div class={transcript_style()} ref={transcript_ref}>
                if messages.is_empty() {
                    <div class={paragraph_style()}>
                        { "Ask a question about the uploaded documents to get started." }
                    </div>
                }
                { for messages.iter().map(|message| {
                    let class = match message.author {
                        Author::User => message_user_style(),
                        Author::Assistant => message_assistant_style(),
                    };
                    html! { <div {class}>{ &message.text }</div> }
                }) }
            </div>
            if let Some(err) = &*chat_error {
                <div class={error_text_style()}>{ err }</div>
            }
            <div class={input_row_style()}>
                <input
                    class={text_input_style()}
                    type="text"
                    placeholder={if *pending { "Waiting for an answer…" } else { "Ask a question" }}
                    disabled={*pending}
                    value={(*question).clone()}
                    oninput={Callback::from({
                        let question = question.clone();
                        move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            question.set(input.value());
                        }
                    })}
                    onkeydown={on_keydown}
                />
                <IconButton
                    icon_id={IconId::LucideSend}
                    label={"Send"}
                    onclick={on_send_click}
                />
            </div>
        </div>
    }
}
