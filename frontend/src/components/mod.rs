pub mod forms;
pub mod info_banner;
