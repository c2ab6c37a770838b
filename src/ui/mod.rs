pub mod filter_panel;
pub mod result_list;
pub mod search_input;
pub mod suggestions;
pub mod theme;
