use iced::widget::{button, column, row, text, Column, Row, Space};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::catalog::{POPULAR_SEARCHES, TRENDING};
use crate::ui::theme;

/// "Popular Searches" pills followed by the "Trending Now" list
pub fn view<'a>() -> Element<'a, Message> {
    let pills: Vec<Element<'a, Message>> = POPULAR_SEARCHES
        .iter()
        .map(|&term| {
            button(text(term).size(14))
                .on_press(Message::SuggestionSelected(term.to_string()))
                .padding([8, 16])
                .style(theme::chip)
                .into()
        })
        .collect();

    let popular = column![
        text("Popular Searches").size(18).style(theme::heading),
        Row::with_children(pills).spacing(8).wrap(),
    ]
    .spacing(12);

    let rows: Vec<Element<'a, Message>> = TRENDING
        .iter()
        .map(|item| {
            let content = row![
                text(item.name).size(15),
                Space::new().width(Fill),
                text(item.trend).size(13).style(theme::trend),
            ]
            .align_y(Alignment::Center);

            button(content)
                .on_press(Message::SuggestionSelected(item.name.to_string()))
                .padding(12)
                .width(Fill)
                .style(theme::row_button)
                .into()
        })
        .collect();

    let trending = column![
        text("Trending Now").size(18).style(theme::heading),
        Column::with_children(rows).spacing(12),
    ]
    .spacing(12);

    column![popular, trending].spacing(32).into()
}
