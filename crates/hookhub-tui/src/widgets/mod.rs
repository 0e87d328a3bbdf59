pub mod category_bar;
pub mod hook_card;
