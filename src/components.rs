use crate::app::{Message, WeatherApp};
use crate::chart::TemperatureChart;
use crate::style;
use crate::weather::{self, Condition, Unit, CURRENT_HUMIDITY_PCT, CURRENT_WIND_MPH, DAILY};
use iced::{
    theme,
    widget::{button, canvas::Canvas, checkbox, column, container, pick_list, row, text, Space},
    Alignment, Element, Length,
};

/// One line of the 7-day forecast, already formatted for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastRow {
    pub day: &'static str,
    pub condition: Condition,
    pub temperature: String,
    pub humidity: String,
    pub wind: String,
}

/// Rows for the forecast list. Always one per day of the static dataset, in
/// order; only the temperature text depends on the unit.
pub fn forecast_rows(unit: Unit) -> Vec<ForecastRow> {
    DAILY
        .iter()
        .enumerate()
        .map(|(index, day)| ForecastRow {
            day: day.day,
            condition: Condition::for_forecast_row(index),
            temperature: weather::format_temperature(day.temp_f, unit),
            humidity: format!("{}%", day.humidity_pct),
            wind: format!("{} mph", day.wind_mph),
        })
        .collect()
}

pub fn weather_icon<'a>(condition: Condition, size: u16) -> Element<'a, Message> {
    text(condition.icon())
        .size(size)
        .shaping(style::GLYPH_SHAPING)
        .style(style::icon_color(condition))
        .into()
}

fn card<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .padding(16)
        .style(theme::Container::Box)
        .width(Length::Fill)
        .into()
}

pub fn create_current_conditions_card(app: &WeatherApp) -> Element<Message> {
    let updated = match &app.last_tick {
        Some(updated) => format!("Updated: {}", updated.format("%I:%M:%S %p")),
        None => String::new(),
    };

    let readings = row![
        text(format!("Wind {} mph", CURRENT_WIND_MPH)).size(14),
        Space::with_width(Length::Fixed(12.0)),
        text(format!("Humidity {}%", CURRENT_HUMIDITY_PCT)).size(14),
    ]
    .align_items(Alignment::Center);

    card(
        column![
            row![
                weather_icon(app.condition, 48),
                Space::with_width(Length::Fill),
                text(app.display_temperature()).size(48),
            ]
            .align_items(Alignment::Center),
            text(app.condition.name()).size(24),
            readings,
            text(updated)
                .size(12)
                .style(style::muted_text(app.is_dark_mode)),
        ]
        .spacing(8),
    )
}

pub fn create_hourly_card<'a>() -> Element<'a, Message> {
    let chart = Canvas::new(TemperatureChart::hourly())
        .width(Length::Fill)
        .height(Length::Fixed(200.0));

    card(column![text("Hourly Forecast (°F)").size(18), chart].spacing(12))
}

fn create_forecast_row<'a>(row_data: ForecastRow) -> Element<'a, Message> {
    row![
        text(row_data.day).size(18).width(Length::Fixed(48.0)),
        Space::with_width(Length::Fill),
        weather_icon(row_data.condition, 24),
        text(row_data.temperature).size(18).width(Length::Fixed(64.0)),
        text(row_data.humidity).size(14).width(Length::Fixed(48.0)),
        text(row_data.wind).size(14).width(Length::Fixed(56.0)),
    ]
    .spacing(12)
    .align_items(Alignment::Center)
    .into()
}

pub fn create_forecast_card(app: &WeatherApp) -> Element<Message> {
    let rows = forecast_rows(app.unit)
        .into_iter()
        .fold(column![].spacing(10), |list, row_data| {
            list.push(create_forecast_row(row_data))
        });

    let trend = Canvas::new(TemperatureChart::daily_trend())
        .width(Length::Fill)
        .height(Length::Fixed(200.0));

    card(
        column![
            text("7-Day Forecast").size(24),
            rows,
            Space::with_height(Length::Fixed(12.0)),
            text("Temperature Trend (°F)").size(20),
            trend,
        ]
        .spacing(12),
    )
}

fn settings_row<'a>(label: &'a str, control: Element<'a, Message>) -> Element<'a, Message> {
    row![text(label).size(18), Space::with_width(Length::Fill), control]
        .align_items(Alignment::Center)
        .into()
}

pub fn create_settings_card(app: &WeatherApp) -> Element<Message> {
    let unit_picker = pick_list(&Unit::ALL[..], Some(app.unit), Message::UnitSelected)
        .text_size(14)
        .padding([4, 12]);

    let dark_mode_style = if app.is_dark_mode {
        theme::Button::Primary
    } else {
        theme::Button::Secondary
    };
    let dark_mode_button = button(text(if app.is_dark_mode { "On" } else { "Off" }).size(14))
        .on_press(Message::ToggleDarkMode)
        .padding([4, 12])
        .style(dark_mode_style);

    let notifications =
        checkbox("", app.notifications).on_toggle(Message::NotificationsToggled);

    card(
        column![
            text("Settings").size(24),
            settings_row("Temperature Unit", unit_picker.into()),
            settings_row("Dark Mode", dark_mode_button.into()),
            settings_row("Notifications", notifications.into()),
        ]
        .spacing(16),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::Page;

    #[test]
    fn forecast_has_seven_rows_in_order() {
        for unit in Unit::ALL {
            let rows = forecast_rows(unit);
            assert_eq!(rows.len(), 7);
            for (row, day) in rows.iter().zip(DAILY.iter()) {
                assert_eq!(row.day, day.day);
                assert_eq!(row.humidity, format!("{}%", day.humidity_pct));
                assert_eq!(row.wind, format!("{} mph", day.wind_mph));
            }
        }
    }

    #[test]
    fn forecast_temperatures_follow_unit() {
        let fahrenheit = forecast_rows(Unit::F);
        let celsius = forecast_rows(Unit::C);
        assert_eq!(fahrenheit[0].temperature, "72°F");
        assert_eq!(celsius[0].temperature, "22°C");
        assert_eq!(fahrenheit[4].temperature, "76°F");
        assert_eq!(celsius[4].temperature, "24°C");
    }

    #[test]
    fn forecast_rows_ignore_theme_and_page() {
        let mut app = WeatherApp::default();
        let before = forecast_rows(app.unit);
        app.toggle_dark_mode();
        app.set_page(Page::Settings);
        app.tick();
        assert_eq!(forecast_rows(app.unit), before);
    }

    #[test]
    fn forecast_icons_cycle_through_conditions() {
        let rows = forecast_rows(Unit::F);
        assert_eq!(rows[0].condition, Condition::Sunny);
        assert_eq!(rows[3].condition, Condition::Thunder);
        assert_eq!(rows[5].condition, Condition::Sunny);
        assert_eq!(rows[6].condition, Condition::Cloudy);
    }
}
