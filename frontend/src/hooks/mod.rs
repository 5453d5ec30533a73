pub mod use_account_form;
