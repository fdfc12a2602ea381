use std::time::Duration;

use gpui::{
    App, AppContext, Application, Bounds, Context, ElementId, Entity, TitlebarOptions, Window,
    WindowBounds, WindowOptions, div, point, prelude::*, px, size,
};

use gpui_elements::{
    ElementIdExt, ElementsAssets, assets,
    components::{
        Avatar, AvatarAccessory, Badge, Button, ButtonType, Divider, Icon, IconPosition,
        ListItem, ListItemChevron, ListItemContent, ListItemSubtitle, ListItemTitle,
        SecureTextInput, Spacer, Text, TextInput,
    },
    extensions::pressable::Pressable,
    icons::IconSpec,
    theme::{
        AvatarSizeKind, FontSizes, Shade, TextSizeKind, ThemeExt, ThemePatch, Themed,
        provide_theme,
    },
};
use gpui_primitives::input::InputState;

struct Gallery {
    presses: usize,
    loading: bool,
    email: Entity<InputState>,
    password: Entity<InputState>,
}

impl Gallery {
    fn new(cx: &mut Context<Self>) -> Self {
        Self {
            presses: 0,
            loading: false,
            email: cx.new(|cx| InputState::new(cx)),
            password: cx.new(|cx| InputState::new(cx)),
        }
    }
}

impl Render for Gallery {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.get_theme();
        let email_invalid = {
            let email = self.email.read(cx).value();
            !email.is_empty() && !email.contains('@')
        };

        let large_titles = ThemePatch::new().font_size(FontSizes {
            sm: 22.,
            ..FontSizes::default()
        });

        div()
            .id("gallery")
            .size_full()
            .overflow_y_scroll()
            .bg(theme.colors.background)
            .flex()
            .flex_col()
            .gap(px(16.))
            .p(px(40.))
            .child(Text::new("gpui_elements").size(TextSizeKind::Lg))
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(px(12.))
                    .child(Icon::new("star", "star").size(px(28.)))
                    .child(Icon::new("fa-star", "star").icon_type("font-awesome-5").solid(true))
                    .child(Badge::new("badge").value(self.presses.to_string()))
                    .child(Badge::new("dot"))
                    .child(
                        Avatar::new("avatar")
                            .size(AvatarSizeKind::Medium)
                            .rounded(true)
                            .title("AE")
                            .child(AvatarAccessory::new("avatar-accessory").size(16.)),
                    )
                    .child(
                        Avatar::new("avatar-icon")
                            .size(AvatarSizeKind::Medium)
                            .icon(IconSpec::new("user").icon_type("feather")),
                    ),
            )
            .child(Divider::new())
            .child(
                div()
                    .flex()
                    .gap(px(12.))
                    .child(
                        Button::new("solid")
                            .title(format!("Pressed {}", self.presses))
                            .raised(true)
                            .on_press(cx.listener(|view, _event, _window, cx| {
                                view.presses += 1;
                                cx.notify();
                            })),
                    )
                    .child(
                        Button::new("outline")
                            .title("Load")
                            .button_type(ButtonType::Outline)
                            .icon(IconSpec::new("check"))
                            .icon_position(IconPosition::Right)
                            .loading(self.loading)
                            .on_press(cx.listener(|view, _event, _window, cx| {
                                view.loading = true;
                                cx.notify();
                                cx.spawn(async move |view, cx| {
                                    cx.background_executor().timer(Duration::from_secs(2)).await;
                                    view.update(cx, |view, cx| {
                                        view.loading = false;
                                        cx.notify();
                                    })
                                })
                                .detach();
                            })),
                    )
                    .child(
                        Button::new("clear")
                            .title("Disabled")
                            .button_type(ButtonType::Clear)
                            .disabled(true),
                    ),
            )
            .child(Spacer::new().size(8.))
            .child(
                ListItem::new("row-1")
                    .top_divider(true)
                    .bottom_divider(true)
                    .on_press(|_, _, _| tracing::info!("row pressed"))
                    .child(Avatar::new("row-avatar").rounded(true).title("JD"))
                    .child(
                        ListItemContent::new()
                            .child(ListItemTitle::new("John Doe"))
                            .child(ListItemSubtitle::new("Engineer")),
                    )
                    .child(ListItemTitle::new("3m").right(true))
                    .child(ListItemChevron::new("row-1-chevron")),
            )
            .child(provide_theme(large_titles, |scope| {
                ListItem::new("row-2")
                    .bottom_divider(true)
                    .theme(scope)
                    .child(
                        ListItemContent::new()
                            .child(ListItemTitle::new("Scoped theme").theme(scope))
                            .child(
                                ListItemSubtitle::new("Font sizes come from the nearest scope")
                                    .theme(scope),
                            ),
                    )
            }))
            .child(Divider::new().sub_header("Account"))
            .child(
                TextInput::new(ElementId::from("email").with_suffix("field"), self.email.clone())
                    .label("Email")
                    .required(true)
                    .placeholder("you@example.com")
                    .left_icon(IconSpec::new("mail").size(px(18.)).color(theme.colors.neutral[Shade::S400]))
                    .error(email_invalid)
                    .help(if email_invalid {
                        "Enter a valid email address"
                    } else {
                        "We never share it"
                    }),
            )
            .child(
                SecureTextInput::new("password", self.password.clone())
                    .label("Password")
                    .placeholder("Password")
                    .left_icon(IconSpec::new("lock").size(px(18.)).color(theme.colors.neutral[Shade::S400])),
            )
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    Application::new()
        .with_assets(assets![ElementsAssets])
        .run(|cx: &mut App| {
            gpui_elements::init(cx);

            let bounds = Bounds::centered(None, size(px(620.), px(860.)), cx);

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
                |_window, cx| cx.new(Gallery::new),
            )
            .unwrap();

            cx.activate(true);
        });
}
