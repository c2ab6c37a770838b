use iced::widget::{button, column, row, text, text_input};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::ui::theme;

/// The search input ID for focus management
pub const SEARCH_INPUT_ID: &str = "platter-search-input";

/// Search box with the filter toggle and the submit button.
///
/// Submitting is disabled while a search is running.
pub fn view<'a>(query: &'a str, searching: bool, error: Option<&'a str>) -> Element<'a, Message> {
    let submit = (!searching).then_some(Message::Submit);

    let input = text_input("Search by dish, restaurant, or cuisine...", query)
        .on_input(Message::QueryChanged)
        .on_submit_maybe(submit.clone())
        .id(SEARCH_INPUT_ID)
        .padding(12)
        .size(16)
        .width(Fill)
        .style(theme::search_input);

    let filter_toggle = button(text("Filters").size(14))
        .on_press(Message::ToggleFilters)
        .padding([8, 14])
        .style(theme::chip);

    let label = if searching { "Searching..." } else { "Compare" };
    let compare = button(text(label).size(14))
        .on_press_maybe(submit)
        .padding([8, 16])
        .style(theme::primary_button);

    let bar = row![input, filter_toggle, compare]
        .spacing(8)
        .align_y(Alignment::Center);

    match error {
        Some(message) => column![bar, text(message).size(13).style(theme::error)]
            .spacing(6)
            .into(),
        None => bar.into(),
    }
}
