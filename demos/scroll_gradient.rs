use anyhow::Context as _;
use gpui::{
    App, AppContext, Application, Bounds, Context, KeyBinding, Menu, ScrollHandle,
    TitlebarOptions, Window, WindowBounds, WindowOptions, actions, div, point, prelude::*, px,
    size,
};
use tracing_subscriber::EnvFilter;

use gpui_scroll_gradient::{
    components::ScrollGradient,
    theme::{Theme, ThemeBackgroundKind, ThemeExt, ThemeVariantKind},
};

const CHIP_COUNT: usize = 24;
const SELECTED_CHIP: usize = 0;

actions!(demo, [ToggleVariant]);

struct Root {
    scroll_handle: ScrollHandle,
}

impl Render for Root {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = cx.active_variant().colors.clone();

        div()
            .size_full()
            .bg(colors.background.primary)
            .text_color(colors.text.primary)
            .flex()
            .flex_col()
            .justify_center()
            .gap(px(24.))
            .p(px(40.))
            .child(
                div()
                    .flex()
                    .gap(px(6.))
                    .text_color(colors.text.secondary)
                    .child("Scroll the row sideways. Press")
                    .child(div().text_color(colors.accent.primary).child("cmd-t / ctrl-t"))
                    .child("to switch light and dark."),
            )
            .child(
                div()
                    .relative()
                    .w_full()
                    .h(px(56.))
                    .child(
                        div()
                            .id("chips")
                            .size_full()
                            .flex()
                            .flex_row()
                            .items_center()
                            .gap(px(8.))
                            .overflow_x_scroll()
                            .track_scroll(&self.scroll_handle)
                            .children((0..CHIP_COUNT).map(|index| {
                                div()
                                    .flex_none()
                                    .px(px(16.))
                                    .py(px(8.))
                                    .rounded(px(100.))
                                    .border_1()
                                    .bg(colors.background.tertiary)
                                    .map(|chip| match index {
                                        SELECTED_CHIP => chip
                                            .border_color(colors.accent.primary)
                                            .text_color(colors.accent.primary),
                                        _ => chip.border_color(colors.background.tertiary),
                                    })
                                    .child(format!("Topic {}", index + 1))
                            })),
                    )
                    .children(ScrollGradient::both("chips-gradient", self.scroll_handle.clone())),
            )
            .child(
                div()
                    .relative()
                    .w(px(260.))
                    .h(px(56.))
                    .bg(colors.background.secondary)
                    .child(
                        div()
                            .id("short-row")
                            .size_full()
                            .flex()
                            .items_center()
                            .px(px(16.))
                            .child("Nothing overflows here"),
                    )
                    .children(
                        ScrollGradient::both("short-row-gradient", ScrollHandle::new())
                            .map(|gradient| gradient.background(ThemeBackgroundKind::Secondary)),
                    ),
            )
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let theme = match std::env::args().nth(1) {
        Some(path) => {
            Some(Theme::from_path(&path).with_context(|| format!("loading theme from {path}"))?)
        }
        None => None,
    };

    Application::new()
        .with_quit_mode(gpui::QuitMode::LastWindowClosed)
        .run(move |cx: &mut App| {
            if let Some(theme) = theme {
                cx.set_theme(theme);
            }

            gpui_scroll_gradient::init(cx);

            cx.set_menus(vec![Menu {
                name: "Scroll Gradient".into(),
                items: vec![],
            }]);

            cx.bind_keys([
                KeyBinding::new("cmd-t", ToggleVariant, None),
                KeyBinding::new("ctrl-t", ToggleVariant, None),
            ]);

            cx.on_action(|_: &ToggleVariant, cx| {
                let next = match cx.active_variant().kind {
                    ThemeVariantKind::Dark => ThemeVariantKind::Light,
                    ThemeVariantKind::Light => ThemeVariantKind::Dark,
                };

                if cx.set_active_variant(next) {
                    cx.refresh_windows();
                }
            });

            let bounds = Bounds::centered(None, size(px(620.), px(320.)), cx);

            cx.open_window(
                WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(bounds)),
                    titlebar: Some(TitlebarOptions {
                        appears_transparent: true,
                        traffic_light_position: Some(point(px(10.), px(10.))),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                |_window, cx| {
                    cx.new(|_cx| Root {
                        scroll_handle: ScrollHandle::new(),
                    })
                },
            )
            .expect("failed to open the demo window");

            cx.activate(true);
        });

    Ok(())
}
