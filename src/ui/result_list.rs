use iced::widget::{column, container, row, scrollable, text, Column, Space};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::catalog::SearchResult;
use crate::ui::theme;

/// Build the results list: one card per dish with its cheapest offer
pub fn view(results: &[SearchResult]) -> Element<'_, Message> {
    if results.is_empty() {
        return text("No dishes found.")
            .size(14)
            .style(theme::muted)
            .into();
    }

    let rows: Vec<Element<'_, Message>> = results
        .iter()
        .map(|result| {
            let details = column![
                text(&result.dish).size(16).style(theme::heading),
                text(format!(
                    "{} · {} · ★ {:.1}",
                    result.restaurant, result.cuisine, result.rating
                ))
                .size(12)
                .style(theme::muted),
            ]
            .spacing(2);

            let price: Element<'_, Message> = match result.best_offer() {
                Some(offer) => column![
                    text(format!("₹{}", offer.total())).size(16),
                    text(format!("on {} · {} min", offer.platform, offer.eta_minutes))
                        .size(12)
                        .style(theme::muted),
                ]
                .align_x(Alignment::End)
                .into(),
                None => Space::new().into(),
            };

            container(row![details, Space::new().width(Fill), price].align_y(Alignment::Center))
                .padding(Padding::from([10, 14]))
                .width(Fill)
                .style(theme::card)
                .into()
        })
        .collect();

    scrollable(Column::with_children(rows).spacing(8))
        .height(Fill)
        .into()
}
