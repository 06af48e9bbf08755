use stylist::{css, Style};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::api;
use crate::session::{Session, SessionContext, SessionStore};
use crate::ui::style::*;

#[function_component(LoginForm)]
pub fn login_form() -> Html {
    let session_ctx = use_context::<SessionContext>().expect("SessionContext not found");

    let username = use_state(String::new);
    let password = use_state(String::new);
    let logging_in = use_state(|| false);
    let login_error = use_state(|| None as Option<String>);

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let session_ctx = session_ctx.clone();
        let logging_in = logging_in.clone();
        let login_error = login_error.clone();
        move |event: SubmitEvent| {
            event.prevent_default();
            let username = username.clone();
            let password = password.clone();
            let session_ctx = session_ctx.clone();
            let logging_in = logging_in.clone();
            let login_error = login_error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if *logging_in {
                    return;
                }
                if username.is_empty() || password.is_empty() {
                    login_error.set(Some("Username and password cannot be empty".to_string()));
                    return;
                }
                logging_in.set(true);
                login_error.set(None);
                match api::login(&username, &password).await {
                    Ok(body) => {
                        let session = Session::new(body.access_token);
                        SessionStore::save(&session);
                        // Publishing the session is enough: the gate bounces
                        // a logged-in visitor off /login on the next render.
                        session_ctx.set(Some(session));
                    }
                    Err(err) => {
                        login_error.set(Some(err.to_string()));
                    }
                }
                logging_in.set(false);
            });
        }
    };

    let form_style = Style::new(css!(r#"
            display: flex;
            flex-direction: column;
            align-items: center;
            width: 100%;
        "#
    )).expect("Error creating form style");

    let field_style = Style::new(css!(r#"
            display: flex;
            flex-direction: column;
            width: min(20em, 90%);
            margin-bottom: 0.5em;
        "#
    )).expect("Error creating field style");

    let label_style = Style::new(css!(r#"
            font-weight: bold;
            margin-bottom: 0.4em;
        "#
    )).expect("Error creating label style");

    let input_style = Style::new(css!(r#"
            padding: 0.55em;
            margin-bottom: 0.9em;
            border-radius: 6px;
            border: 1px solid #3c424d;
            background: #262a32;
            color: inherit;
            outline: none;
        "#
    )).expect("Error creating input style");

    let submit_style = Style::new(css!(r#"
            padding: 0.55em 1.4em;
            margin-top: 0.5em;
            color: white;
            border: none;
            border-radius: 18px;
            cursor: pointer;
            background: #2d5c8f;

            &:hover {
                background: #396fa8;
            }

            &:disabled {
                opacity: 0.5;
                cursor: wait;
            }
        "#
    )).expect("Error creating submit style");

    html! {
        <div class={container_style()}>
            <Icon width={"3em"} height={"3em"} icon_id={IconId::BootstrapPersonCircle} />
            <div class={header_style()}>
                { "Sign in to DocChat" }
            </div>
            <div class={paragraph_style()}>
                { "Ask questions about the uploaded documents once you are signed in." }
            </div>
            <form class={form_style} onsubmit={on_submit} autocomplete="off">
                if let Some(err) = &*login_error {
                    <div class={error_text_style()}>{ err }</div>
                }
                <div class={field_style.clone()}>
                    <div class={label_style.clone()}>
                        { "Username:" }
                    </div>
                    <input
                        class={input_style.clone()}
                        name="username"
                        type="text"
                        placeholder="username"
                        value={(*username).clone()}
                        oninput={Callback::from(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            username.set(input.value());
                        })}
                    />
                    <div class={label_style}>
                        { "Password:" }
                    </div>
                    <input
                        class={input_style}
                        name="password"
                        type="password"
                        placeholder="password"
                        value={(*password).clone()}
                        oninput={Callback::from(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            password.set(input.value());
                        })}
                    />
                </div>
                <button class={submit_style} type="submit" disabled={*logging_in}>
                    { if *logging_in { "Signing in…" } else { "Sign in" } }
                </button>
            </form>
        </div>
    }
}
