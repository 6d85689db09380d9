use crate::app::{Message, WeatherApp};
use crate::components;
use crate::style;
use crate::weather::Page;
use iced::{
    theme,
    widget::{button, column, container, row, scrollable, text, Space},
    Alignment, Element, Length,
};

/// Header shortcuts: label and the page each one opens
pub const HEADER_ACTIONS: [(&str, Page); 2] =
    [("Search", Page::Forecast), ("Settings", Page::Settings)];

/// Navigation bar entries, flagged with whether each is the current page
pub fn nav_items(current: Page) -> [(Page, bool); 3] {
    Page::ALL.map(|page| (page, page == current))
}

pub fn view(app: &WeatherApp) -> Element<Message> {
    let header = create_header(app);

    // Exactly one page body at a time
    let body: Element<Message> = match app.current_page {
        Page::Home => column![
            components::create_current_conditions_card(app),
            components::create_hourly_card(),
        ]
        .spacing(24)
        .into(),
        Page::Forecast => components::create_forecast_card(app),
        Page::Settings => components::create_settings_card(app),
    };

    let content = column![
        header,
        scrollable(body).height(Length::Fill),
        create_nav_bar(app.current_page),
    ]
    .spacing(16)
    .max_width(480.0);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(16)
        .center_x()
        .into()
}

fn create_header(app: &WeatherApp) -> Element<Message> {
    let actions = HEADER_ACTIONS
        .iter()
        .fold(row![].spacing(8), |actions, (label, page)| {
            actions.push(
                button(text(*label).size(14))
                    .on_press(Message::Navigate(*page))
                    .padding([6, 12])
                    .style(theme::Button::Text),
            )
        });

    row![
        text("⌖").size(22).shaping(style::GLYPH_SHAPING),
        Space::with_width(Length::Fixed(8.0)),
        text(&app.location).size(20),
        Space::with_width(Length::Fill),
        actions,
    ]
    .align_items(Alignment::Center)
    .into()
}

fn create_nav_bar<'a>(current: Page) -> Element<'a, Message> {
    let buttons = nav_items(current)
        .into_iter()
        .fold(row![].spacing(8), |bar, (page, active)| {
            let style = if active {
                theme::Button::Primary
            } else {
                theme::Button::Secondary
            };
            bar.push(
                button(text(page.label()).size(14))
                    .on_press(Message::Navigate(page))
                    .padding([8, 16])
                    .style(style),
            )
        });

    container(buttons)
        .padding(4)
        .style(theme::Container::Box)
        .width(Length::Fill)
        .center_x()
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_nav_item_is_active() {
        for current in Page::ALL {
            let items = nav_items(current);
            let active: Vec<Page> = items
                .iter()
                .filter(|(_, active)| *active)
                .map(|(page, _)| *page)
                .collect();
            assert_eq!(active, vec![current]);
        }
    }

    #[test]
    fn nav_bar_lists_every_page_once() {
        let pages: Vec<Page> = nav_items(Page::Home).iter().map(|(p, _)| *p).collect();
        assert_eq!(pages, Page::ALL.to_vec());
    }

    #[test]
    fn header_shortcuts_navigate() {
        let mut app = WeatherApp::default();
        for (label, page) in HEADER_ACTIONS {
            let _ = iced::Application::update(&mut app, Message::Navigate(page));
            assert_eq!(app.current_page, page, "{label} should open {page:?}");
        }
        assert_eq!(HEADER_ACTIONS[0], ("Search", Page::Forecast));
        assert_eq!(HEADER_ACTIONS[1], ("Settings", Page::Settings));
    }
}
