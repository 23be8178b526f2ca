//! Page components: the form, the transient status line, the error banner,
//! and the result card.

pub mod error_banner;
pub mod result_card;
pub mod status_message;
pub mod summarize_form;
