use iced::widget::{button, container, text, text_input};
use iced::{Border, Color, Shadow, Theme};

/// Page background
pub const BACKGROUND: Color = Color {
    r: 0.97,
    g: 0.97,
    b: 0.98,
    a: 1.0,
};

/// Cards, inputs and chips
const SURFACE: Color = Color::WHITE;

/// Brand coral used for primary actions and selected chips
const ACCENT: Color = Color {
    r: 1.0,
    g: 0.353,
    b: 0.373,
    a: 1.0,
};

const BORDER: Color = Color {
    r: 0.86,
    g: 0.86,
    b: 0.88,
    a: 1.0,
};

const TEXT_PRIMARY: Color = Color {
    r: 0.13,
    g: 0.13,
    b: 0.15,
    a: 1.0,
};

const TEXT_SECONDARY: Color = Color {
    r: 0.45,
    g: 0.45,
    b: 0.5,
    a: 1.0,
};

/// Trend labels
const POSITIVE: Color = Color {
    r: 0.09,
    g: 0.6,
    b: 0.3,
    a: 1.0,
};

pub fn page(theme: &Theme) -> container::Style {
    let _ = theme;
    container::Style {
        background: Some(BACKGROUND.into()),
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

/// Filter panel and result rows
pub fn card(theme: &Theme) -> container::Style {
    let _ = theme;
    container::Style {
        background: Some(SURFACE.into()),
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 10.0.into(),
        },
        shadow: Shadow {
            color: Color {
                a: 0.08,
                ..Color::BLACK
            },
            offset: iced::Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

pub fn search_input(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let _ = theme;
    let focused = matches!(status, text_input::Status::Focused { .. });
    text_input::Style {
        background: SURFACE.into(),
        border: Border {
            color: if focused { ACCENT } else { BORDER },
            width: if focused { 2.0 } else { 1.0 },
            radius: 24.0.into(),
        },
        icon: TEXT_SECONDARY,
        placeholder: TEXT_SECONDARY,
        value: TEXT_PRIMARY,
        selection: Color { a: 0.3, ..ACCENT },
    }
}

/// "Compare", "Apply Filters" and other primary buttons
pub fn primary_button(theme: &Theme, status: button::Status) -> button::Style {
    let _ = theme;
    let alpha = match status {
        button::Status::Disabled => 0.7,
        button::Status::Hovered => 0.9,
        _ => 1.0,
    };
    button::Style {
        background: Some(Color { a: alpha, ..ACCENT }.into()),
        text_color: Color::WHITE,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 20.0.into(),
        },
        ..button::Style::default()
    }
}

/// Suggestion pills and unselected cuisine chips
pub fn chip(theme: &Theme, status: button::Status) -> button::Style {
    let _ = theme;
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => BACKGROUND,
        _ => SURFACE,
    };
    button::Style {
        background: Some(background.into()),
        text_color: TEXT_PRIMARY,
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 20.0.into(),
        },
        ..button::Style::default()
    }
}

pub fn chip_selected(theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: Some(ACCENT.into()),
        text_color: Color::WHITE,
        border: Border {
            color: ACCENT,
            ..chip(theme, status).border
        },
        ..button::Style::default()
    }
}

/// Trending rows: full-width, card-like buttons
pub fn row_button(theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        border: Border {
            radius: 10.0.into(),
            ..chip(theme, status).border
        },
        ..chip(theme, status)
    }
}

pub fn heading(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(TEXT_PRIMARY),
    }
}

pub fn muted(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(TEXT_SECONDARY),
    }
}

pub fn trend(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(POSITIVE),
    }
}

pub fn error(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ACCENT),
    }
}
