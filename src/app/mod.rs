//! Desktop shell: the tool panel above a freehand canvas.

pub mod messages;
pub mod sketch_view;
pub mod style;

use iced::executor;
use iced::theme::{self, Theme};
use iced::widget::canvas::{Cache, Canvas};
use iced::widget::{
    Column, Row, Space, button, column, container, horizontal_rule, row, slider, text, text_input,
};
use iced::{Alignment, Application, Command, Element, Length, Settings, Size};

use crate::canvas::SketchCanvas;
use crate::config::Config;
use crate::draw::HexColor;
use crate::panel::{OPACITY_RANGE, PanelEvent, PanelOptions, ToolPanel, WIDTH_RANGE};

pub use messages::{Message, SketchMessage};
use sketch_view::SketchView;
use style::{CanvasFrameStyle, ColorPreviewStyle, DISABLED_TEXT, ERROR_TEXT, hex_to_color};

/// Opens the main window and runs until it is closed.
pub fn run(config: Config) -> iced::Result {
    let mut settings = Settings::with_flags(config.clone());
    settings.window.size = Size::new(config.window.width, config.window.height);
    settings.window.resizable = true;
    settings.window.decorations = true;
    settings.antialiasing = true;
    FreedrawApp::run(settings)
}

pub struct FreedrawApp {
    panel: ToolPanel<SketchCanvas>,
    stroke_color_draft: String,
    canvas_color_draft: String,
    canvas_height: f32,
    border_width: f32,
    title: String,
    cache: Cache,
}

impl FreedrawApp {
    /// Builds the shell with a freshly mounted sketch surface.
    pub fn with_config(config: &Config) -> Self {
        let options = PanelOptions::new()
            .draggable(config.canvas.draggable)
            .on_canvas_mouse_enter(|| log::debug!("pointer entered canvas"))
            .on_canvas_mouse_leave(|| log::debug!("pointer left canvas"));

        let mut panel = ToolPanel::new(options);
        let sketch = SketchCanvas::new(panel.canvas_props());
        panel.attach(sketch);

        Self {
            stroke_color_draft: panel.state().stroke_color().to_string(),
            canvas_color_draft: panel.state().canvas_color().to_string(),
            panel,
            canvas_height: config.canvas.height,
            border_width: config.canvas.border_width,
            title: config.window.title.clone(),
            cache: Cache::new(),
        }
    }

    pub fn panel(&self) -> &ToolPanel<SketchCanvas> {
        &self.panel
    }

    /// Applies a message without going through the iced runtime.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Panel(event) => {
                self.panel.dispatch(event);
                self.cache.clear();
            }
            Message::StrokeColorInput(value) => {
                if let Ok(color) = HexColor::parse(value.trim()) {
                    self.panel.set_stroke_color(color);
                }
                self.stroke_color_draft = value;
            }
            Message::CanvasColorInput(value) => {
                if let Ok(color) = HexColor::parse(value.trim()) {
                    self.panel.set_canvas_color(color);
                    self.cache.clear();
                }
                self.canvas_color_draft = value;
            }
            Message::Sketch(sketch_message) => self.handle_sketch(sketch_message),
            Message::SketchBatch(messages) => {
                for sketch_message in messages {
                    self.handle_sketch(sketch_message);
                }
            }
        }
    }

    fn handle_sketch(&mut self, message: SketchMessage) {
        match message {
            SketchMessage::PointerEntered => self.panel.pointer_entered(),
            SketchMessage::PointerLeft => self.panel.pointer_left(),
            SketchMessage::StrokeStarted(point) => {
                if let Some(sketch) = self.panel.handle_mut() {
                    sketch.begin_stroke((point.x, point.y));
                }
            }
            SketchMessage::StrokeMoved(point) => {
                if let Some(sketch) = self.panel.handle_mut() {
                    sketch.extend_stroke((point.x, point.y));
                }
            }
            SketchMessage::StrokeEnded => {
                if let Some(sketch) = self.panel.handle_mut() {
                    sketch.end_stroke();
                }
                self.cache.clear();
            }
        }
    }
}

impl Application for FreedrawApp {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = Config;

    fn new(config: Self::Flags) -> (Self, Command<Self::Message>) {
        (Self::with_config(&config), Command::none())
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn update(&mut self, message: Message) -> Command<Self::Message> {
        self.handle_message(message);
        Command::none()
    }

    fn view(&self) -> Element<'_, Message> {
        column![
            text("Tools").size(28),
            self.tools_view(),
            horizontal_rule(1),
            text("Canvas").size(28),
            self.canvas_view(),
        ]
        .spacing(8)
        .padding(8)
        .into()
    }
}

impl FreedrawApp {
    fn tools_view(&self) -> Element<'_, Message> {
        let controls = self.panel.controls();
        let state = self.panel.state();

        let history = Row::new()
            .spacing(8)
            .align_items(Alignment::Center)
            .push(panel_button("Undo", Some(PanelEvent::UndoClicked)))
            .push(panel_button("Redo", Some(PanelEvent::RedoClicked)))
            .push(panel_button("Clear", Some(PanelEvent::ClearClicked)))
            .push(Space::with_width(Length::Fixed(16.0)))
            .push(panel_button(
                "Pen",
                controls.pen_button().then_some(PanelEvent::PenSelected),
            ))
            .push(panel_button(
                "Eraser",
                controls.eraser_button().then_some(PanelEvent::EraserSelected),
            ))
            .push(text(format!("Active: {}", state.mode().label())).size(14));

        let colors = Row::new()
            .spacing(8)
            .align_items(Alignment::Center)
            .push(color_field(
                "Stroke color",
                &self.stroke_color_draft,
                Message::StrokeColorInput,
            ))
            .push(Space::with_width(Length::Fixed(16.0)))
            .push(color_field(
                "Canvas color",
                &self.canvas_color_draft,
                Message::CanvasColorInput,
            ));

        let sliders = Row::new()
            .spacing(16)
            .align_items(Alignment::Center)
            .push(labeled_slider(
                "Stroke opacity",
                format!("{}%", state.stroke_opacity()),
                controls.stroke_controls,
                slider(OPACITY_RANGE, state.stroke_opacity(), |value| {
                    Message::Panel(PanelEvent::StrokeOpacityChanged(value))
                })
                .step(1u8),
            ))
            .push(labeled_slider(
                "Stroke width",
                format!("{} px", state.stroke_width()),
                controls.stroke_controls,
                slider(WIDTH_RANGE, state.stroke_width(), |value| {
                    Message::Panel(PanelEvent::StrokeWidthChanged(value))
                })
                .step(1u8),
            ))
            .push(labeled_slider(
                "Eraser width",
                format!("{} px", state.eraser_width()),
                controls.eraser_controls,
                slider(WIDTH_RANGE, state.eraser_width(), |value| {
                    Message::Panel(PanelEvent::EraserWidthChanged(value))
                })
                .step(1u8),
            ));

        Column::new()
            .spacing(8)
            .push(history)
            .push(colors)
            .push(sliders)
            .into()
    }

    fn canvas_view(&self) -> Element<'_, Message> {
        let program = SketchView {
            sketch: self.panel.handle(),
            cache: &self.cache,
            cursor: self.panel.cursor(),
        };

        container(
            Canvas::new(program)
                .width(Length::Fill)
                .height(Length::Fixed(self.canvas_height)),
        )
        .padding(self.border_width)
        .style(theme::Container::Custom(Box::new(CanvasFrameStyle {
            border_width: self.border_width,
        })))
        .into()
    }
}

fn panel_button(label: &str, event: Option<PanelEvent>) -> Element<'_, Message> {
    let mut widget = button(text(label).size(14))
        .style(theme::Button::Secondary)
        .padding([4, 10]);
    if let Some(event) = event {
        widget = widget.on_press(Message::Panel(event));
    }
    widget.into()
}

fn color_field<'a>(
    label: &'static str,
    draft: &'a str,
    on_input: fn(String) -> Message,
) -> Element<'a, Message> {
    let parsed = HexColor::parse(draft.trim()).ok();

    let mut field = Column::new().spacing(2).push(
        row![
            text(label).size(14),
            text_input("#RRGGBB", draft)
                .on_input(on_input)
                .width(Length::Fixed(96.0)),
            color_preview_badge(parsed.as_ref()),
        ]
        .spacing(8)
        .align_items(Alignment::Center),
    );

    if parsed.is_none() {
        field = field.push(
            text("Expected #RRGGBB")
                .size(12)
                .style(theme::Text::Color(ERROR_TEXT)),
        );
    }

    field.into()
}

fn color_preview_badge<'a>(color: Option<&HexColor>) -> Element<'a, Message> {
    let (preview_color, is_valid) = match color {
        Some(color) => (hex_to_color(color), true),
        None => (iced::Color::from_rgb(0.2, 0.2, 0.2), false),
    };

    container(Space::with_width(Length::Fixed(20.0)).height(Length::Fixed(20.0)))
        .width(Length::Fixed(24.0))
        .height(Length::Fixed(24.0))
        .style(theme::Container::Custom(Box::new(ColorPreviewStyle {
            color: preview_color,
            is_invalid: !is_valid,
        })))
        .into()
}

/// Disabled sliders stay visible with a dimmed label; the panel drops any
/// value they emit.
fn labeled_slider<'a>(
    label: &'static str,
    value: String,
    enabled: bool,
    slider: iced::widget::Slider<'a, u8, Message>,
) -> Element<'a, Message> {
    let caption = if enabled {
        text(format!("{label}: {value}")).size(14)
    } else {
        text(format!("{label}: {value}"))
            .size(14)
            .style(theme::Text::Color(DISABLED_TEXT))
    };

    column![caption, slider.width(Length::Fixed(180.0))]
        .spacing(4)
        .into()
}
