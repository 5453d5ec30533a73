use shared::{AccountFormConfig, FieldErrors, FieldName, FieldStatus, FormState, FormValues};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::info_banner::InfoBanner;
use crate::hooks::use_account_form::{use_account_form, UseAccountFormActions};

const NO_PASSWORD_NOTICE: &str = "Your account don't have password yet. Set password so you can log in with your Layoutbase account.";

#[derive(Properties, PartialEq)]
pub struct AccountFormProps {
    pub config: AccountFormConfig,
    pub on_submit: Callback<FormValues>,
    pub on_error: Callback<FieldErrors>,
}

#[function_component(AccountForm)]
pub fn account_form(props: &AccountFormProps) -> Html {
    let form = use_account_form(
        props.config.clone(),
        props.on_submit.clone(),
        props.on_error.clone(),
    );

    let onsubmit = {
        let on_submit = form.actions.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <div class="account-page">
            <div class="account-column">
                <h1>{"Account"}</h1>
                <form class="account-section" {onsubmit} novalidate=true>
                    <h2>{"Set Password"}</h2>
                    <InfoBanner message={NO_PASSWORD_NOTICE} />

                    <div class="form-group">
                        <label for="email">{"Email (Your account)"}</label>
                        <input
                            id="email"
                            type="email"
                            value={form.state.values().email.clone()}
                            disabled=true
                        />
                    </div>

                    {field_input(&form.state, &form.actions, FieldName::Password, "Set Password")}
                    {field_input(&form.state, &form.actions, FieldName::ConfirmPassword, "Confirm Password")}

                    <div class="form-actions">
                        <button type="submit" class="btn btn-primary">{"Submit"}</button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn field_input(
    state: &FormState,
    actions: &UseAccountFormActions,
    field: FieldName,
    label: &'static str,
) -> Html {
    let id = field.as_str();
    let invalid = state.status(field) == FieldStatus::Invalid;

    let oninput = {
        let on_input = actions.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit((field, input.value()));
        })
    };

    let onblur = {
        let on_blur = actions.on_blur.clone();
        Callback::from(move |_: FocusEvent| on_blur.emit(field))
    };

    html! {
        <div class="form-group">
            <label for={id}>{label}</label>
            <input
                {id}
                type="password"
                class={classes!(invalid.then_some("invalid"))}
                aria-invalid={invalid.to_string()}
                value={state.values().get(field).to_string()}
                {oninput}
                {onblur}
            />
            {if let Some(error) = state.error(field) {
                html! {
                    <div class="form-error-message">
                        {&error.message}
                    </div>
                }
            } else { html! {} }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::validation::{CONFIRM_PASSWORD_REQUIRED, PASSWORD_REQUIRED};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, Event, EventInit, HtmlElement};

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Default)]
    struct Outcomes {
        submitted: Vec<FormValues>,
        rejected: Vec<FieldErrors>,
    }

    fn mount(outcomes: &Rc<RefCell<Outcomes>>) -> Element {
        let document = gloo::utils::document();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        let on_submit = {
            let outcomes = outcomes.clone();
            Callback::from(move |values: FormValues| outcomes.borrow_mut().submitted.push(values))
        };
        let on_error = {
            let outcomes = outcomes.clone();
            Callback::from(move |errors: FieldErrors| outcomes.borrow_mut().rejected.push(errors))
        };

        yew::Renderer::<AccountForm>::with_root_and_props(
            root.clone(),
            AccountFormProps {
                config: AccountFormConfig::default(),
                on_submit,
                on_error,
            },
        )
        .render();
        root
    }

    async fn settle() {
        yew::platform::time::sleep(Duration::from_millis(20)).await;
    }

    fn type_into(root: &Element, field: FieldName, value: &str) {
        let input: HtmlInputElement = root
            .query_selector(&format!("#{}", field.as_str()))
            .unwrap()
            .unwrap()
            .unchecked_into();
        input.set_value(value);

        let init = EventInit::new();
        init.set_bubbles(true);
        let event = Event::new_with_event_init_dict("input", &init).unwrap();
        input.dispatch_event(&event).unwrap();
    }

    fn click_submit(root: &Element) {
        let button: HtmlElement = root
            .query_selector("button[type=submit]")
            .unwrap()
            .unwrap()
            .unchecked_into();
        button.click();
    }

    #[wasm_bindgen_test]
    async fn test_submitting_empty_form_reports_errors_once() {
        let outcomes = Rc::new(RefCell::new(Outcomes::default()));
        let root = mount(&outcomes);
        settle().await;

        click_submit(&root);
        settle().await;

        let outcomes = outcomes.borrow();
        assert!(outcomes.submitted.is_empty());
        assert_eq!(outcomes.rejected.len(), 1);
        let errors = &outcomes.rejected[0];
        assert_eq!(errors[&FieldName::Password].message, PASSWORD_REQUIRED);
        assert_eq!(errors[&FieldName::ConfirmPassword].message, CONFIRM_PASSWORD_REQUIRED);

        let rendered = root.text_content().unwrap_or_default();
        assert!(rendered.contains(PASSWORD_REQUIRED));
        assert!(rendered.contains(CONFIRM_PASSWORD_REQUIRED));
    }

    #[wasm_bindgen_test]
    async fn test_submitting_valid_form_reports_values_once() {
        let outcomes = Rc::new(RefCell::new(Outcomes::default()));
        let root = mount(&outcomes);
        settle().await;

        type_into(&root, FieldName::Password, "abc12345!");
        type_into(&root, FieldName::ConfirmPassword, "abc12345!");
        settle().await;

        click_submit(&root);
        settle().await;

        let outcomes = outcomes.borrow();
        assert!(outcomes.rejected.is_empty());
        assert_eq!(
            outcomes.submitted,
            vec![FormValues {
                email: "hello@branch8.com".to_string(),
                password: "abc12345!".to_string(),
                confirm_password: "abc12345!".to_string(),
            }]
        );
        assert!(root.query_selector(".form-error-message").unwrap().is_none());
    }

    #[wasm_bindgen_test]
    async fn test_no_callback_before_submit() {
        let outcomes = Rc::new(RefCell::new(Outcomes::default()));
        let root = mount(&outcomes);
        settle().await;

        type_into(&root, FieldName::Password, "abc");
        settle().await;

        let outcomes = outcomes.borrow();
        assert!(outcomes.submitted.is_empty());
        assert!(outcomes.rejected.is_empty());
        assert!(root.query_selector(".form-error-message").unwrap().is_none());
    }
}
