//! Application shell: owns the session, the current view and the single
//! notification slot, and hands the session down to every view.

use common::notification::{Notification, NotificationSlot, DISPLAY_MS};
use common::session::Session;
use common::submission::Destination;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::auth_gate::AuthGate;
use crate::components::data_browser::DataBrowser;
use crate::components::form::FormComponent;
use crate::components::landing::Landing;
use crate::components::login::Login;
use crate::components::notification::NotificationBanner;
use crate::{client, storage};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Route {
    Login,
    Landing,
    Form(&'static str),
    Data,
}

pub enum Msg {
    Navigate(Route),
    LoggedIn(String),
    Logout,
    SessionExpired,
    Notify(Notification),
    ExpireNotification(u64),
    DismissNotification,
}

pub struct App {
    session: Session,
    route: Route,
    notifications: NotificationSlot,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let session = storage::load_session();
        let route = if session.is_authenticated() {
            Route::Landing
        } else {
            Route::Login
        };
        Self {
            session,
            route,
            notifications: NotificationSlot::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(route) => {
                self.route = route;
                true
            }
            Msg::LoggedIn(token) => {
                storage::store_token(&token);
                self.session = Session::with_token(token);
                self.route = Route::Landing;
                true
            }
            Msg::Logout => {
                if let Some(token) = self.session.token().map(str::to_string) {
                    spawn_local(async move {
                        if let Err(err) = client::logout(&token).await {
                            gloo_console::warn!(format!("logout request failed: {}", err));
                        }
                    });
                }
                storage::clear_token();
                self.session = Session::anonymous();
                self.route = Route::Login;
                true
            }
            Msg::SessionExpired => {
                storage::clear_token();
                self.session = Session::anonymous();
                self.route = Route::Login;
                true
            }
            Msg::Notify(notification) => {
                let generation = self.notifications.show(notification);
                let link = ctx.link().clone();
                spawn_local(async move {
                    TimeoutFuture::new(DISPLAY_MS).await;
                    link.send_message(Msg::ExpireNotification(generation));
                });
                true
            }
            Msg::ExpireNotification(generation) => self.notifications.expire(generation),
            Msg::DismissNotification => self.notifications.dismiss(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_notify = link.callback(Msg::Notify);

        let content = match self.route {
            Route::Login => html! {
                <Login on_logged_in={link.callback(Msg::LoggedIn)} on_notify={on_notify.clone()} />
            },
            Route::Landing => html! {
                <Landing
                    on_open_form={link.callback(|form_type| Msg::Navigate(Route::Form(form_type)))}
                    on_browse={link.callback(|_| Msg::Navigate(Route::Data))}
                    on_logout={link.callback(|_| Msg::Logout)}
                />
            },
            Route::Form(form_type) => match common::templates::find(form_type) {
                Some(template) => html! {
                    <FormComponent
                        key={form_type}
                        template={template}
                        session={self.session.clone()}
                        on_notify={on_notify.clone()}
                        on_navigate={link.callback(|to| match to {
                            Destination::Landing => Msg::Navigate(Route::Landing),
                            Destination::Login => Msg::SessionExpired,
                        })}
                    />
                },
                None => html! { <p>{ format!("Unknown form type {}", form_type) }</p> },
            },
            Route::Data => html! {
                <DataBrowser
                    session={self.session.clone()}
                    on_notify={on_notify.clone()}
                    on_session_expired={link.callback(|_| Msg::SessionExpired)}
                    on_back={link.callback(|_| Msg::Navigate(Route::Landing))}
                />
            },
        };

        let content = if self.route == Route::Login {
            content
        } else {
            html! {
                <AuthGate
                    session={self.session.clone()}
                    on_redirect={link.callback(|_| Msg::Navigate(Route::Login))}
                >
                    { content }
                </AuthGate>
            }
        };

        html! {
            <div class="app-root">
                <NotificationBanner
                    notification={self.notifications.current().cloned()}
                    on_dismiss={link.callback(|_| Msg::DismissNotification)}
                />
                { content }
            </div>
        }
    }
}
