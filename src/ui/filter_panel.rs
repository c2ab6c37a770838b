use iced::widget::{button, column, container, row, slider, text, Row, Space};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::catalog::Cuisine;
use crate::filter::{FilterState, PRICE_FLOOR, PRICE_MAX, PRICE_STEP};
use crate::ui::theme;

/// Build the filter panel (only rendered while open)
pub fn view(filters: &FilterState) -> Element<'_, Message> {
    let header = row![
        text("Filters").size(16).style(theme::heading),
        Space::new().width(Fill),
        button(text("×").size(16))
            .on_press(Message::CloseFilters)
            .padding([2, 8])
            .style(theme::chip),
    ]
    .align_y(Alignment::Center);

    let chips: Vec<Element<'_, Message>> = Cuisine::ALL
        .iter()
        .map(|&cuisine| {
            let style = if filters.is_selected(cuisine) {
                theme::chip_selected as fn(&iced::Theme, button::Status) -> button::Style
            } else {
                theme::chip
            };
            button(text(cuisine.label()).size(13))
                .on_press(Message::CuisineToggled(cuisine))
                .padding([4, 12])
                .style(style)
                .into()
        })
        .collect();
    let cuisines = column![
        text("Cuisines").size(14),
        Row::with_children(chips).spacing(8).wrap(),
    ]
    .spacing(8);

    let (floor, ceiling) = filters.price_range();
    let price = column![
        text("Price Range").size(14),
        row![
            text(format!("₹{floor}")).size(12).style(theme::muted),
            Space::new().width(Fill),
            text(format!("₹{ceiling}")).size(12).style(theme::muted),
        ],
        slider(PRICE_FLOOR..=PRICE_MAX, ceiling, Message::PriceCeilingChanged).step(PRICE_STEP),
    ]
    .spacing(6);

    let apply = row![
        Space::new().width(Fill),
        button(text("Apply Filters").size(14))
            .on_press(Message::ApplyFilters)
            .padding([8, 16])
            .style(theme::primary_button),
    ];

    container(column![header, cuisines, price, apply].spacing(16))
        .padding(Padding::new(16.0))
        .width(Fill)
        .style(theme::card)
        .into()
}
