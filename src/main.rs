mod logger;
mod sample;
mod style;
mod widget;

use std::time::{Duration, Instant};

use data::config::{self, FeedCfg, theme};
use data::{Chart, Config, GraphConfig, Line, LiveFeed};
use iced::widget::{button, column, container, row, text};
use iced::{Color, Element, Length, Subscription};

use widget::chart::GraphEvent;
use widget::chart::graph::Graph;

fn main() -> iced::Result {
    if let Err(e) = logger::setup(cfg!(debug_assertions)) {
        eprintln!("Failed to initialize logger: {e}");
    }

    iced::application(Grapher::new, Grapher::update, Grapher::view)
        .title("Grapher")
        .subscription(Grapher::subscription)
        .window_size(iced::Size::new(720.0, 420.0))
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    Graph(GraphEvent),
    Tick(Instant),
    ToggleDrag,
    ToggleDividers,
}

impl From<GraphEvent> for Message {
    fn from(event: GraphEvent) -> Self {
        Message::Graph(event)
    }
}

/// Live line fed one point per tick.
struct Stream {
    line: usize,
    feed: LiveFeed,
}

struct Grapher {
    chart: Chart,
    graph: GraphConfig,
    feed_cfg: FeedCfg,
    started: Instant,
    pending: Option<Line>,
    stream: Option<Stream>,
    readout: String,
}

impl Grapher {
    fn new() -> Self {
        let Config { range, graph, feed } = match config::load(&config::config_path()) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{e}, falling back to defaults");
                Config::default()
            }
        };

        let mut chart = Chart::new(range);
        chart.push_line(
            Line::new(sample::FIRST, Color::from_rgb8(0, 0, 255))
                .with_secondary(Color::from_rgb8(255, 0, 0))
                .with_name("first"),
        );

        Self {
            chart,
            graph,
            feed_cfg: feed,
            started: Instant::now(),
            pending: Some(Line::new(sample::SECOND, theme::line_color(1)).with_name("second")),
            stream: None,
            readout: sample::readout(&[]),
        }
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::Graph(GraphEvent::Touched { points, .. }) => {
                self.readout = sample::readout(&points);
            }
            Message::Graph(GraphEvent::TouchEnded) => {
                self.readout = sample::readout(&[]);
            }
            Message::Tick(now) => self.tick(now),
            Message::ToggleDrag => {
                self.graph.drag_enabled = !self.graph.drag_enabled;
                log::debug!("Drag inspection enabled: {}", self.graph.drag_enabled);
            }
            Message::ToggleDividers => {
                self.graph.show_dividers = !self.graph.show_dividers;
            }
        }
    }

    fn tick(&mut self, now: Instant) {
        let delay = Duration::from_secs(sample::SECOND_DELAY_SECS);

        if now.duration_since(self.started) >= delay
            && let Some(line) = self.pending.take()
        {
            self.chart.push_line(line);
            self.start_stream();
        }

        if let Some(stream) = self.stream.as_mut()
            && let Some(point) = stream.feed.tick()
            && let Err(e) = self.chart.push_point(stream.line, point)
        {
            log::warn!("Dropping live point: {e}");
            stream.feed.cancel();
        }

        if self.chart.take_redraw() {
            log::trace!("Chart changed, now at revision {}", self.chart.revision());
        }
    }

    fn start_stream(&mut self) {
        if !self.feed_cfg.enabled {
            return;
        }

        let color = theme::lighten(theme::line_color(2), 0.1);
        let line = self
            .chart
            .push_line(Line::new(Vec::<(f32, f32)>::new(), color).with_name("live"));

        self.stream = Some(Stream {
            line,
            feed: LiveFeed::new(&self.chart.range(), self.feed_cfg.step, sample::wave),
        });
    }

    fn is_animating(&self) -> bool {
        self.pending.is_some() || self.stream.as_ref().is_some_and(|s| s.feed.is_running())
    }

    fn subscription(&self) -> Subscription<Message> {
        if !self.is_animating() {
            return Subscription::none();
        }

        let interval = Duration::from_millis(self.feed_cfg.interval_ms.max(1));
        iced::time::every(interval).map(Message::Tick)
    }

    fn view(&self) -> Element<'_, Message> {
        let toggle = |label: &str, on: bool, message: Message| {
            button(text(format!("{label}: {}", if on { "on" } else { "off" })))
                .on_press(message)
        };

        let controls = row![
            text(&self.readout).width(Length::Fill),
            toggle("Drag", self.graph.drag_enabled, Message::ToggleDrag),
            toggle("Dividers", self.graph.show_dividers, Message::ToggleDividers),
        ]
        .spacing(8)
        .align_y(iced::Alignment::Center);

        let graph = container(Graph::new(&self.chart).config(self.graph))
            .width(Length::Fill)
            .height(Length::Fill);

        column![controls, graph].spacing(8).padding(12).into()
    }
}
