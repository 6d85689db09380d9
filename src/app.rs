use crate::config::Config;
use crate::style;
use crate::view;
use crate::weather::{self, Condition, Page, Unit};
use chrono::{DateTime, Local};
use iced::{Application, Command, Element, Subscription, Theme};
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Page),
    UnitSelected(Unit),
    ToggleDarkMode,
    NotificationsToggled(bool),
    Tick(Instant),
}

/// Dashboard state. Temperatures are stored in Fahrenheit and only converted
/// for display.
#[derive(Debug, Clone)]
pub struct WeatherApp {
    pub current_page: Page,
    pub condition: Condition,
    pub is_dark_mode: bool,
    pub temperature_f: i32,
    pub unit: Unit,
    pub notifications: bool,
    pub location: String,
    pub last_tick: Option<DateTime<Local>>,
    tick_interval: Duration,
}

impl Default for WeatherApp {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl WeatherApp {
    const INITIAL_TEMPERATURE_F: i32 = 72;

    pub fn from_config(config: &Config) -> Self {
        Self {
            current_page: Page::Home,
            condition: Condition::Sunny,
            is_dark_mode: config.dark_mode,
            temperature_f: Self::INITIAL_TEMPERATURE_F,
            unit: config.unit,
            notifications: config.notifications,
            location: config.location.clone(),
            last_tick: None,
            tick_interval: config.tick_interval(),
        }
    }

    pub fn set_page(&mut self, page: Page) {
        debug!(from = ?self.current_page, to = ?page, "Changing page");
        self.current_page = page;
    }

    pub fn set_unit(&mut self, unit: Unit) {
        debug!(?unit, "Changing display unit");
        self.unit = unit;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.is_dark_mode = !self.is_dark_mode;
        debug!(dark_mode = self.is_dark_mode, "Toggled dark mode");
    }

    pub fn set_notifications(&mut self, enabled: bool) {
        debug!(enabled, "Toggled notifications");
        self.notifications = enabled;
    }

    /// Simulate a weather change
    pub fn tick(&mut self) {
        self.tick_with(&mut rand::thread_rng());
    }

    pub fn tick_with(&mut self, rng: &mut impl Rng) {
        self.condition = Condition::random(rng);
        self.temperature_f = weather::random_temperature(rng);
        self.last_tick = Some(Local::now());
        debug!(
            condition = %self.condition,
            temperature_f = self.temperature_f,
            "Simulated weather update"
        );
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Current temperature in the selected unit, e.g. `22°C`
    pub fn display_temperature(&self) -> String {
        weather::format_temperature(self.temperature_f, self.unit)
    }
}

impl Application for WeatherApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = Config;

    fn new(config: Config) -> (WeatherApp, Command<Message>) {
        (WeatherApp::from_config(&config), Command::none())
    }

    fn title(&self) -> String {
        format!("Weather - {}", self.location)
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::Navigate(page) => self.set_page(page),
            Message::UnitSelected(unit) => self.set_unit(unit),
            Message::ToggleDarkMode => self.toggle_dark_mode(),
            Message::NotificationsToggled(enabled) => self.set_notifications(enabled),
            Message::Tick(_) => self.tick(),
        }
        Command::none()
    }

    fn view(&self) -> Element<Message> {
        view::view(self)
    }

    fn theme(&self) -> Theme {
        style::dashboard_theme(self.condition, self.is_dark_mode)
    }

    // Dropped together with the application, which stops the timer
    fn subscription(&self) -> Subscription<Message> {
        iced::time::every(self.tick_interval()).map(Message::Tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn initial_state() {
        let app = WeatherApp::default();
        assert_eq!(app.current_page, Page::Home);
        assert_eq!(app.condition, Condition::Sunny);
        assert!(!app.is_dark_mode);
        assert_eq!(app.temperature_f, 72);
        assert_eq!(app.unit, Unit::F);
        assert!(app.last_tick.is_none());
        assert_eq!(app.display_temperature(), "72°F");
    }

    #[test]
    fn config_seeds_state() {
        let config = Config {
            location: "Durban".to_string(),
            tick_interval_secs: 2,
            unit: Unit::C,
            dark_mode: true,
            notifications: true,
        };
        let app = WeatherApp::from_config(&config);
        assert_eq!(app.location, "Durban");
        assert_eq!(app.unit, Unit::C);
        assert!(app.is_dark_mode);
        assert!(app.notifications);
        assert_eq!(app.tick_interval(), Duration::from_secs(2));
        assert_eq!(app.display_temperature(), "22°C");
    }

    #[test]
    fn navigation_reaches_every_page_from_every_page() {
        let mut app = WeatherApp::default();
        for from in Page::ALL {
            for to in Page::ALL {
                let _ = app.update(Message::Navigate(from));
                assert_eq!(app.current_page, from);
                let _ = app.update(Message::Navigate(to));
                assert_eq!(app.current_page, to);
            }
        }
    }

    #[test]
    fn dark_mode_double_toggle_restores_state() {
        let mut app = WeatherApp::default();
        let before = app.is_dark_mode;
        app.toggle_dark_mode();
        assert_ne!(app.is_dark_mode, before);
        app.toggle_dark_mode();
        assert_eq!(app.is_dark_mode, before);
    }

    #[test]
    fn unit_change_does_not_touch_stored_temperature() {
        let mut app = WeatherApp::default();
        app.temperature_f = 100;
        let _ = app.update(Message::UnitSelected(Unit::C));
        assert_eq!(app.unit, Unit::C);
        assert_eq!(app.temperature_f, 100);
        assert_eq!(app.display_temperature(), "38°C");

        let _ = app.update(Message::UnitSelected(Unit::F));
        assert_eq!(app.display_temperature(), "100°F");
    }

    #[test]
    fn tick_stays_in_bounds() {
        let mut app = WeatherApp::default();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..500 {
            app.tick_with(&mut rng);
            assert!(Condition::ALL.contains(&app.condition));
            assert!((50..=79).contains(&app.temperature_f));
        }
        assert!(app.last_tick.is_some());
    }

    #[test]
    fn tick_message_leaves_settings_alone() {
        let mut app = WeatherApp::default();
        let _ = app.update(Message::Navigate(Page::Settings));
        let _ = app.update(Message::UnitSelected(Unit::C));
        let _ = app.update(Message::ToggleDarkMode);
        let _ = app.update(Message::Tick(Instant::now()));

        assert_eq!(app.current_page, Page::Settings);
        assert_eq!(app.unit, Unit::C);
        assert!(app.is_dark_mode);
        assert!((50..=79).contains(&app.temperature_f));
    }

    #[test]
    fn notifications_checkbox() {
        let mut app = WeatherApp::default();
        let _ = app.update(Message::NotificationsToggled(true));
        assert!(app.notifications);
        let _ = app.update(Message::NotificationsToggled(false));
        assert!(!app.notifications);
    }
}
