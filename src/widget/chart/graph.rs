use super::{GraphEvent, fill_draw_list};

use data::chart::drag::{Touch, Tracker};
use data::chart::draw::DrawList;
use data::chart::scale::Mapper;
use data::{Chart, GraphConfig, GraphDelegate, Point, ScreenPoint};

use iced::advanced::widget::tree::{self, Tree};
use iced::advanced::{self, Clipboard, Layout, Shell, Widget, layout, renderer};
use iced::widget::canvas;
use iced::{
    Element, Event, Length, Rectangle, Renderer, Size, Theme, Vector, mouse, touch, window,
};

struct State {
    plot_cache: canvas::Cache,
    overlay_cache: canvas::Cache,
    plot: DrawList,
    overlay: DrawList,
    tracker: Tracker,
    last_cache_rev: Option<u64>,
    last_bounds: Size,
    last_config: Option<GraphConfig>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            plot_cache: canvas::Cache::new(),
            overlay_cache: canvas::Cache::new(),
            plot: DrawList::new(),
            overlay: DrawList::new(),
            tracker: Tracker::default(),
            last_cache_rev: None,
            last_bounds: Size::ZERO,
            last_config: None,
        }
    }
}

impl State {
    fn plot_is_stale(&self, rev: u64, bounds: Size, config: &GraphConfig) -> bool {
        self.last_cache_rev != Some(rev)
            || self.last_bounds != bounds
            || self.last_config.as_ref() != Some(config)
    }

    fn repaint_plot(&mut self, chart: &Chart, mapper: &Mapper, config: &GraphConfig) {
        self.plot.paint_plot(chart, mapper, config);
        self.plot_cache.clear();
    }

    fn repaint_overlay(&mut self, mapper: &Mapper, config: &GraphConfig) {
        self.overlay.paint_overlay(&self.tracker, mapper, config);
        self.overlay_cache.clear();
    }
}

/// Collects delegate notifications so they can be published as messages.
#[derive(Default)]
struct Publisher {
    events: Vec<GraphEvent>,
}

impl GraphDelegate for Publisher {
    fn on_touch(&mut self, points: &[Point], position: ScreenPoint) {
        self.events.push(GraphEvent::Touched {
            points: points.to_vec(),
            position,
        });
    }

    fn on_touch_end(&mut self) {
        self.events.push(GraphEvent::TouchEnded);
    }
}

/// Line graph over a fixed data range with drag-to-inspect.
///
/// The plot layer (dividers and lines) is only repainted when the chart's
/// revision, the bounds or the config change; drags repaint the overlay
/// layer alone.
pub struct Graph<'a> {
    chart: &'a Chart,
    config: GraphConfig,
}

impl<'a> Graph<'a> {
    pub fn new(chart: &'a Chart) -> Self {
        Self {
            chart,
            config: GraphConfig::default(),
        }
    }

    pub fn config(mut self, config: GraphConfig) -> Self {
        self.config = config;
        self
    }

    fn touch_from_event(event: &Event, layout: Layout<'_>, cursor: mouse::Cursor) -> Option<Touch> {
        let bounds = layout.bounds();
        let local = |p: iced::Point| ScreenPoint::new(p.x - bounds.x, p.y - bounds.y);

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                cursor.position_in(bounds).map(Touch::Down)
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                Some(Touch::Moved(local(*position)))
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => Some(Touch::Up),
            Event::Mouse(mouse::Event::CursorLeft) => Some(Touch::Cancel),
            Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                Some(Touch::Down(local(*position)))
            }
            Event::Touch(touch::Event::FingerMoved { position, .. }) => {
                Some(Touch::Moved(local(*position)))
            }
            Event::Touch(touch::Event::FingerLifted { .. }) => Some(Touch::Up),
            Event::Touch(touch::Event::FingerLost { .. }) => Some(Touch::Cancel),
            _ => None,
        }
    }
}

impl<'a, M> Widget<M, Theme, Renderer> for Graph<'a>
where
    M: Clone + 'static + From<GraphEvent>,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State {
            tracker: Tracker::new(self.config.drag_enabled),
            ..State::default()
        })
    }

    fn size(&self) -> Size<Length> {
        Size {
            width: Length::Fill,
            height: Length::Fill,
        }
    }

    fn layout(
        &mut self,
        _tree: &mut Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::atomic(limits, Length::Fill, Length::Fill)
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, M>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();
        let bounds = layout.bounds().size();

        let Some(mapper) = self.chart.mapper(bounds) else {
            log::trace!("Skipping graph update, drawable is {bounds:?}");
            return;
        };

        let mut publisher = Publisher::default();

        if state.tracker.is_enabled() != self.config.drag_enabled
            && let Some(transition) = state.tracker.set_enabled(self.config.drag_enabled)
        {
            self.chart.dispatch(&mapper, transition, &mut publisher);
            state.repaint_overlay(&mapper, &self.config);
        }

        match event {
            Event::Window(window::Event::RedrawRequested(_)) => {
                if state.plot_is_stale(self.chart.revision(), bounds, &self.config) {
                    state.repaint_plot(self.chart, &mapper, &self.config);
                    state.last_cache_rev = Some(self.chart.revision());
                    state.last_bounds = bounds;
                    state.last_config = Some(self.config);
                }
            }
            _ if !shell.is_event_captured() => {
                if let Some(touch) = Self::touch_from_event(event, layout, cursor)
                    && let Some(transition) = state.tracker.handle(touch, bounds)
                {
                    self.chart.dispatch(&mapper, transition, &mut publisher);
                    state.repaint_overlay(&mapper, &self.config);
                    shell.capture_event();
                }
            }
            _ => {}
        }

        for event in publisher.events {
            shell.publish(M::from(event));
        }
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        use advanced::Renderer as _;

        let state = tree.state.downcast_ref::<State>();
        let bounds = layout.bounds();

        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return;
        }

        renderer.with_translation(Vector::new(bounds.x, bounds.y), |r| {
            let plot_geom = state.plot_cache.draw(r, bounds.size(), |frame| {
                fill_draw_list(frame, &state.plot);
            });

            let overlay_geom = state.overlay_cache.draw(r, bounds.size(), |frame| {
                fill_draw_list(frame, &state.overlay);
            });

            {
                use iced::advanced::graphics::geometry::Renderer as _;
                r.draw_geometry(plot_geom);
            }

            r.with_layer(
                Rectangle {
                    x: 0.0,
                    y: 0.0,
                    width: bounds.width,
                    height: bounds.height,
                },
                |r| {
                    use iced::advanced::graphics::geometry::Renderer as _;
                    r.draw_geometry(overlay_geom);
                },
            );
        });
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: advanced::mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> advanced::mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();

        if state.tracker.is_dragging() {
            advanced::mouse::Interaction::Grabbing
        } else if state.tracker.is_enabled() && cursor.is_over(layout.bounds()) {
            advanced::mouse::Interaction::Crosshair
        } else {
            advanced::mouse::Interaction::default()
        }
    }
}

impl<'a, M> From<Graph<'a>> for Element<'a, M, Theme, Renderer>
where
    M: Clone + 'a + 'static + From<GraphEvent>,
{
    fn from(graph: Graph<'a>) -> Self {
        Element::new(graph)
    }
}
