use std::rc::Rc;

use shared::{AccountFormConfig, FieldErrors, FieldName, FormState, FormValues, InvalidForm};
use yew::prelude::*;

/// Events the account form reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    Input(FieldName, String),
    Blur(FieldName),
    Submit,
}

/// Reducer state: the form plus the outcome of the latest submit attempt
#[derive(Debug, Clone, PartialEq)]
pub struct AccountFormReducer {
    pub form: FormState,
    pub last_submit: Option<Result<FormValues, InvalidForm>>,
}

impl AccountFormReducer {
    pub fn new(config: AccountFormConfig) -> Self {
        Self {
            form: FormState::new(config),
            last_submit: None,
        }
    }
}

impl Reducible for AccountFormReducer {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Input(field, value) => {
                next.form.change(field, value);
            }
            FormAction::Blur(field) => next.form.blur(field),
            FormAction::Submit => next.last_submit = Some(next.form.submit()),
        }
        Rc::new(next)
    }
}

#[derive(Clone, PartialEq)]
pub struct UseAccountFormActions {
    pub on_input: Callback<(FieldName, String)>,
    pub on_blur: Callback<FieldName>,
    pub on_submit: Callback<()>,
}

pub struct UseAccountFormResult {
    pub state: FormState,
    pub actions: UseAccountFormActions,
}

/// Hook that owns the account form state.
///
/// `on_submit` receives the values of an accepted submission, `on_error` the
/// errors of a blocked one. Both fire after the render that shows the outcome.
#[hook]
pub fn use_account_form(
    config: AccountFormConfig,
    on_submit: Callback<FormValues>,
    on_error: Callback<FieldErrors>,
) -> UseAccountFormResult {
    let form = use_reducer(move || AccountFormReducer::new(config));

    {
        let last_submit = form.last_submit.clone();
        use_effect_with(form.form.submit_count(), move |_| {
            match last_submit {
                Some(Ok(values)) => on_submit.emit(values),
                Some(Err(invalid)) => on_error.emit(invalid.errors),
                None => {}
            }
            || ()
        });
    }

    let on_input = {
        let form = form.clone();
        Callback::from(move |(field, value): (FieldName, String)| {
            form.dispatch(FormAction::Input(field, value));
        })
    };

    let on_blur = {
        let form = form.clone();
        Callback::from(move |field: FieldName| {
            form.dispatch(FormAction::Blur(field));
        })
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |_| {
            form.dispatch(FormAction::Submit);
        })
    };

    UseAccountFormResult {
        state: form.form.clone(),
        actions: UseAccountFormActions {
            on_input,
            on_blur,
            on_submit,
        },
    }
}
