use shared::{AccountFormConfig, FieldErrors, FormValues};
use yew::prelude::*;

mod components;
mod hooks;
mod services;
mod theme;

use components::forms::account_form::AccountForm;
use services::config::{mount_element, HostConfig};
use services::logging::{self, Logger};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: AccountFormConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let on_submit = Callback::from(|values: FormValues| logging::report_submit(&values));
    let on_error = Callback::from(|errors: FieldErrors| logging::report_errors(&errors));

    html! {
        <>
            <style>{theme::stylesheet()}</style>
            <AccountForm config={props.config.clone()} {on_submit} {on_error} />
        </>
    }
}

fn main() {
    let host = HostConfig::load();
    Logger::init(host.log_level);
    Logger::debug_with_component("bootstrap", &format!("Host configuration: {:?}", host));
    Logger::info_with_component(
        "bootstrap",
        &format!("Mounting account form for {}", host.form.account_email),
    );

    let props = AppProps { config: host.form };
    match mount_element() {
        Ok(root) => yew::Renderer::<App>::with_root_and_props(root, props).render(),
        Err(e) => {
            Logger::warn_with_component("bootstrap", &format!("{:#}, rendering into <body>", e));
            yew::Renderer::<App>::with_props(props).render()
        }
    };
}
