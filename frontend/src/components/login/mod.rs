//! Login and registration view. On success the token (or a local placeholder
//! when the server answered without one) is handed to the shell, which stores
//! it and switches to the landing view.

use common::error::ClientError;
use common::notification::Notification;
use common::session::token_from_login;
use uuid::Uuid;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::client;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mode {
    SignIn,
    Register,
}

pub enum Msg {
    SetEmail(String),
    SetPassword(String),
    SetName(String),
    ToggleMode,
    Submit,
    Finished(Result<Option<String>, ClientError>),
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_logged_in: Callback<String>,
    pub on_notify: Callback<Notification>,
}

pub struct Login {
    email: String,
    password: String,
    name: String,
    mode: Mode,
    busy: bool,
    error: Option<String>,
}

impl Component for Login {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            name: String::new(),
            mode: Mode::SignIn,
            busy: false,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetEmail(value) => {
                self.email = value;
                true
            }
            Msg::SetPassword(value) => {
                self.password = value;
                true
            }
            Msg::SetName(value) => {
                self.name = value;
                true
            }
            Msg::ToggleMode => {
                self.mode = match self.mode {
                    Mode::SignIn => Mode::Register,
                    Mode::Register => Mode::SignIn,
                };
                self.error = None;
                true
            }
            Msg::Submit => {
                if self.busy {
                    return false;
                }
                if self.email.trim().is_empty() || self.password.is_empty() {
                    self.error = Some("Email and password are required".to_string());
                    return true;
                }
                self.busy = true;
                self.error = None;

                let (email, password, name, mode) = (
                    self.email.trim().to_string(),
                    self.password.clone(),
                    self.name.trim().to_string(),
                    self.mode,
                );
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = match mode {
                        Mode::SignIn => client::login(&email, &password).await,
                        Mode::Register => client::register(&email, &password, &name).await,
                    };
                    link.send_message(Msg::Finished(result));
                });
                true
            }
            Msg::Finished(result) => {
                self.busy = false;
                match result {
                    Ok(body_token) => {
                        let token = token_from_login(body_token, &Uuid::new_v4().to_string());
                        self.password.clear();
                        ctx.props().on_logged_in.emit(token);
                    }
                    Err(err) => {
                        gloo_console::warn!(format!("sign in failed: {}", err));
                        ctx.props().on_notify.emit(Notification::error(err.to_string()));
                        self.error = Some(err.to_string());
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let (heading, action, switch) = match self.mode {
            Mode::SignIn => ("Sign in", "Sign in", "Create an account"),
            Mode::Register => ("Create an account", "Register", "I already have an account"),
        };
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <div class="login">
                <h1>{ heading }</h1>
                <form {onsubmit}>
                    if self.mode == Mode::Register {
                        <label>
                            { "Name" }
                            <input type="text" value={self.name.clone()}
                                oninput={link.callback(|e: InputEvent| Msg::SetName(input_value(e)))} />
                        </label>
                    }
                    <label>
                        { "Email" }
                        <input type="email" autocomplete="username" value={self.email.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::SetEmail(input_value(e)))} />
                    </label>
                    <label>
                        { "Password" }
                        <input type="password" autocomplete="current-password" value={self.password.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::SetPassword(input_value(e)))} />
                    </label>
                    if let Some(error) = &self.error {
                        <p class="login-error">{ error.clone() }</p>
                    }
                    <button type="submit" disabled={self.busy}>
                        { if self.busy { "Please wait..." } else { action } }
                    </button>
                </form>
                <button class="link-btn" onclick={link.callback(|_| Msg::ToggleMode)}>{ switch }</button>
            </div>
        }
    }
}

fn input_value(e: InputEvent) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}
