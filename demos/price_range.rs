use gpui::prelude::*;
use gpui::{
    AppContext, Application, Bounds, Context, Entity, Subscription, Window, WindowBounds,
    WindowOptions, div, px, rgb, size,
};
use tracing_subscriber::EnvFilter;

use gpui_rangebrush::{
    BrushEvent, BrushTheme, BrushViewConfig, GpuiBrushView, Interval, LinearScale,
};

const WIDTH: f32 = 640.0;
const HEIGHT: f32 = 240.0;

struct PriceRangeDemo {
    brush: Entity<GpuiBrushView>,
    live: Option<Interval>,
    committed: Option<Interval>,
    _subscription: Subscription,
}

impl PriceRangeDemo {
    fn new(cx: &mut Context<Self>) -> Self {
        let scale = LinearScale::with_width((1_800.0, 2_600.0), WIDTH).expect("valid scale");
        let initial = Some(Interval::new(2_050.0, 2_300.0));
        let brush = cx.new(|_| {
            GpuiBrushView::with_config(scale, WIDTH, HEIGHT, BrushViewConfig::default())
                .with_theme(BrushTheme::dark())
                .with_value(initial)
        });
        let subscription = cx.subscribe(&brush, Self::on_brush_event);
        Self {
            brush,
            live: initial,
            committed: initial,
            _subscription: subscription,
        }
    }

    fn on_brush_event(
        &mut self,
        brush: Entity<GpuiBrushView>,
        event: &BrushEvent,
        cx: &mut Context<Self>,
    ) {
        match *event {
            BrushEvent::Changed(interval) => {
                self.live = Some(interval);
            }
            BrushEvent::Committed(interval) => {
                self.live = Some(interval);
                self.committed = Some(interval);
                brush.update(cx, |view, cx| view.set_value(Some(interval), cx));
            }
        }
        cx.notify();
    }
}

impl Render for PriceRangeDemo {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .gap_2()
            .p_4()
            .bg(rgb(0x11151c))
            .text_color(rgb(0xd8dee9))
            .child(div().bg(rgb(0x1b212b)).child(self.brush.clone()))
            .child(format!("dragging: {}", describe(self.live)))
            .child(format!("committed: {}", describe(self.committed)))
    }
}

fn describe(interval: Option<Interval>) -> String {
    match interval {
        Some(interval) => format!("{:.2} .. {:.2}", interval.low, interval.high),
        None => "none".to_string(),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    Application::new().run(|cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(720.0), px(400.0)),
                cx,
            ))),
            ..Default::default()
        };

        cx.open_window(options, |_window, cx| cx.new(PriceRangeDemo::new))
            .unwrap();
    });
}
