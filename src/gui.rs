use iced::{
    alignment::Horizontal,
    executor,
    theme::{self, Palette},
    widget::{
        button, column, container, horizontal_space,
        image::{Handle, Image},
        row, text, text_input, vertical_space,
    },
    window, Alignment, Application, Color, Command, Element, Length, Settings, Theme,
};

use image::GrayImage;

use crate::{
    config::{load_icon, AppConfig, MIN_WINDOW_SIZE, PREVIEW_SIZE},
    controller::{GenerateOutcome, QrController},
    dialogs::NativeDialogs,
    qrcode::SymbolConfig,
};

const PLACEHOLDER_EMPTY: &str = "QR code will appear here";
const PLACEHOLDER_FAILED: &str = "Generation failed";

pub struct QrDeskApp {
    config: AppConfig,
    input: String,
    controller: QrController,
    dialogs: NativeDialogs,
    preview: Option<Handle>,
    placeholder: &'static str,
}

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    Generate,
    Save,
}

impl Application for QrDeskApp {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = iced::Theme;
    type Flags = AppConfig;

    fn new(config: AppConfig) -> (Self, Command<Message>) {
        let controller = QrController::new(SymbolConfig::DEFAULT, config.diagnostics);
        tracing::debug!("application window created");
        (
            Self {
                config,
                input: String::new(),
                controller,
                dialogs: NativeDialogs,
                preview: None,
                placeholder: PLACEHOLDER_EMPTY,
            },
            Command::none(),
        )
    }

    fn theme(&self) -> Theme {
        Theme::custom(Palette {
            background: Color::from_rgb(0.09, 0.09, 0.15),
            text: Color::from_rgb(0.8, 0.8, 0.8),
            primary: Color::from_rgb(0.5, 0.5, 0.75),
            success: Color::from_rgb(0.33, 0.7, 0.5),
            danger: Color::from_rgb(0.90, 0.30, 0.45),
        })
    }

    fn title(&self) -> String {
        self.config.window_title()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::InputChanged(input) => {
                self.input = input;
            }
            Message::Generate => self.on_generate(),
            Message::Save => self.on_save(),
        }
        Command::none()
    }

    fn view(&self) -> Element<Message> {
        let preview: Element<Message> = match &self.preview {
            Some(handle) => Image::new(handle.clone())
                .width(Length::Units(PREVIEW_SIZE as u16))
                .height(Length::Units(PREVIEW_SIZE as u16))
                .into(),
            None => text(self.placeholder)
                .horizontal_alignment(Horizontal::Center)
                .into(),
        };

        let mut save_button = button(text("Save QR code").horizontal_alignment(Horizontal::Center))
            .padding(10)
            .width(Length::Fill)
            .style(theme::Button::Secondary);
        if self.controller.save_enabled() {
            save_button = save_button.on_press(Message::Save);
        }

        let content = column![
            text("Enter the text for the QR code:"),
            text_input(
                "e.g. https://www.example.com",
                &self.input,
                Message::InputChanged
            )
            .on_submit(Message::Generate)
            .padding(10),
            vertical_space(Length::Units(20)),
            container(preview)
                .width(Length::Units(PREVIEW_SIZE as u16))
                .height(Length::Units(PREVIEW_SIZE as u16))
                .center_x()
                .center_y()
                .style(theme::Container::Box),
            vertical_space(Length::Fill),
            row![
                button(text("Generate QR code").horizontal_alignment(Horizontal::Center))
                    .padding(10)
                    .width(Length::Fill)
                    .on_press(Message::Generate)
                    .style(theme::Button::Positive),
                horizontal_space(Length::Units(10)),
                save_button,
            ],
        ]
        .spacing(10)
        .align_items(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(20)
            .center_x()
            .into()
    }
}

impl QrDeskApp {
    fn on_generate(&mut self) {
        match self.controller.generate(&self.input, &self.dialogs) {
            GenerateOutcome::Ready { .. } => {
                self.preview = self
                    .controller
                    .artifact()
                    .map(|artifact| preview_handle(&artifact.preview));
            }
            GenerateOutcome::Empty => {
                self.preview = None;
                self.placeholder = PLACEHOLDER_EMPTY;
            }
            GenerateOutcome::Failed(_) => {
                self.preview = None;
                self.placeholder = PLACEHOLDER_FAILED;
            }
        }
    }

    fn on_save(&mut self) {
        let outcome = self.controller.save(&self.dialogs);
        tracing::debug!("save finished: {:?}", outcome);
    }
}

/// Grayscale to the 4-byte pixels the image widget expects. The channels
/// are equal, so channel order does not matter.
fn preview_handle(preview: &GrayImage) -> Handle {
    let pixels: Vec<u8> = preview
        .pixels()
        .flat_map(|p| [p.0[0], p.0[0], p.0[0], 255])
        .collect();
    Handle::from_pixels(preview.width(), preview.height(), pixels)
}

pub fn settings(config: AppConfig) -> Settings<AppConfig> {
    let icon = match load_icon(&config.icon_path()) {
        Ok(data) => match window::Icon::from_rgba(data.rgba, data.width, data.height) {
            Ok(icon) => {
                tracing::debug!("window icon loaded from {}", config.icon_path().display());
                Some(icon)
            }
            Err(e) => {
                tracing::warn!("window icon rejected by the toolkit: {:?}", e);
                None
            }
        },
        Err(e) => {
            tracing::warn!("{}, using the default window icon", e);
            None
        }
    };

    Settings {
        window: window::Settings {
            size: (MIN_WINDOW_SIZE.0 + 20, MIN_WINDOW_SIZE.1 + 30),
            min_size: Some(MIN_WINDOW_SIZE),
            icon,
            ..window::Settings::default()
        },
        ..Settings::with_flags(config)
    }
}
