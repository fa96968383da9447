// SPDX-License-Identifier: MPL-2.0
//! Rendering of the two layouts.
//!
//! Styles are re-derived from state on every call, so a change to a menu
//! entry's `selected` flag restyles it on the next frame.

use super::{MainWindow, Message, WindowAction};
use crate::config::Layout;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::table::Column as TableColumn;
use crate::ui::state::{MenuItem, Page, PanelId, PanelState};
use crate::ui::styles;
use crate::ui::theming::{ColorScheme, ThemeMode};
use crate::ui::widgets::AnimatedSpinner;
use iced::alignment::{Horizontal, Vertical};
use iced::font::{self, Font};
use iced::widget::image::{self, Image};
use iced::widget::{button, mouse_area, scrollable, Column, Container, Row, Space, Text};
use iced::{Alignment, Color, Element, Length};

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// Contextual data needed to render the window.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: ColorScheme,
    pub theme_mode: ThemeMode,
    /// Title bar image path from the stylesheet, if one is registered.
    pub logo: Option<&'a str>,
}

pub fn view<'a>(window: &'a MainWindow, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let content = match window.layout() {
        Layout::Simple => simple_layout(window, &ctx),
        Layout::Extended => extended_layout(window, &ctx),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::background(ctx.colors))
        .into()
}

fn simple_layout<'a>(window: &'a MainWindow, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let header = Row::new()
        .push(title_block(window, ctx).width(Length::FillPortion(2)))
        .push(
            Container::new(feedback_label(window, ctx.colors))
                .width(Length::FillPortion(2))
                .align_y(Vertical::Center),
        )
        .push(
            Container::new(status_label(window, ctx.colors))
                .width(Length::FillPortion(1))
                .align_x(Horizontal::Right),
        )
        .spacing(spacing::MD)
        .padding([spacing::SM, spacing::LG])
        .align_y(Alignment::Center);

    let menu = left_menu(window, ctx, true);
    let body = Row::new()
        .push(menu)
        .push(main_content(window, ctx))
        .height(Length::Fill);

    Column::new()
        .push(
            Container::new(header)
                .width(Length::Fill)
                .style(styles::container::title_bar(ctx.colors)),
        )
        .push(body)
        .into()
}

fn extended_layout<'a>(window: &'a MainWindow, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;
    let toolbar_enabled = window.is_toolbar_enabled();

    let menu_toggle = button(Text::new("☰").size(typography::TITLE))
        .on_press_maybe(toolbar_enabled.then_some(Message::ToggleMenu))
        .style(styles::button::chrome(colors))
        .padding(spacing::XS);

    let drag_area = mouse_area(
        Container::new(title_block(window, ctx))
            .width(Length::Fill)
            .align_y(Vertical::Center),
    )
    .on_press(Message::TitleBarPressed);

    let settings_toggle = button(Text::new("⚙"))
        .on_press_maybe(toolbar_enabled.then_some(Message::ToggleExtraRight))
        .style(styles::button::chrome(colors))
        .width(sizing::CHROME_BUTTON)
        .height(sizing::CHROME_BUTTON);

    let logo = ctx.logo.map(|path| {
        Image::new(image::Handle::from_path(path))
            .width(Length::Fixed(sizing::CHROME_BUTTON))
            .height(Length::Fixed(sizing::CHROME_BUTTON))
    });

    let title_bar = Row::new()
        .push(menu_toggle)
        .push(logo)
        .push(drag_area)
        .push(settings_toggle)
        .push(chrome_button("–", WindowAction::Minimize, colors))
        .push(chrome_button("□", WindowAction::Maximize, colors))
        .push(chrome_button("×", WindowAction::Close, colors))
        .spacing(spacing::XS)
        .padding([spacing::XS, spacing::SM])
        .height(sizing::TITLE_BAR_HEIGHT)
        .align_y(Alignment::Center);

    let body = Row::new()
        .push(left_menu(window, ctx, false))
        .push(panel_frame(
            window.panel(PanelId::ExtraLeft),
            extra_left_content(ctx),
            colors,
        ))
        .push(main_content(window, ctx))
        .push(panel_frame(
            window.panel(PanelId::ExtraRight),
            settings_drawer(window, ctx),
            colors,
        ))
        .height(Length::Fill);

    let footer = Row::new()
        .push(
            Container::new(feedback_label(window, colors))
                .width(Length::Fill)
                .align_y(Vertical::Center),
        )
        .push(status_label(window, colors))
        .spacing(spacing::MD)
        .padding([spacing::XXS, spacing::SM])
        .height(sizing::STATUS_BAR_HEIGHT)
        .align_y(Alignment::Center);

    Column::new()
        .push(
            Container::new(title_bar)
                .width(Length::Fill)
                .style(styles::container::title_bar(colors)),
        )
        .push(body)
        .push(
            Container::new(footer)
                .width(Length::Fill)
                .style(styles::container::title_bar(colors)),
        )
        .into()
}

fn title_block<'a>(window: &'a MainWindow, ctx: &ViewContext<'a>) -> Column<'a, Message> {
    let subtitle = match window.menu().viewing() {
        Some(page) => ctx.i18n.tr_with_args("subtitle-viewing", &[("page", page)]),
        None => ctx.i18n.tr("subtitle-default"),
    };

    Column::new()
        .push(Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE).font(BOLD))
        .push(
            Text::new(subtitle)
                .size(typography::CAPTION)
                .color(ctx.colors.text_secondary),
        )
        .spacing(2.0)
}

fn feedback_label(window: &MainWindow, colors: ColorScheme) -> Element<'_, Message> {
    let feedback = window.success_feedback();
    if !feedback.is_visible() {
        return Space::new().width(Length::Fill).into();
    }

    let color = if feedback.is_animating() {
        colors.success
    } else {
        colors.text_secondary
    };
    Text::new(feedback.text())
        .size(typography::BODY)
        .color(Color {
            a: feedback.opacity(),
            ..color
        })
        .into()
}

fn status_label(window: &MainWindow, colors: ColorScheme) -> Text<'_> {
    Text::new(window.status().text())
        .size(typography::CAPTION)
        .color(colors.text_secondary)
}

fn chrome_button<'a>(
    glyph: &'a str,
    action: WindowAction,
    colors: ColorScheme,
) -> Element<'a, Message> {
    let style = match action {
        WindowAction::Close => {
            button(Text::new(glyph)).style(styles::button::chrome_close(colors))
        }
        WindowAction::Minimize | WindowAction::Maximize => {
            button(Text::new(glyph)).style(styles::button::chrome(colors))
        }
    };
    style
        .on_press(Message::WindowControl(action))
        .width(sizing::CHROME_BUTTON)
        .height(sizing::CHROME_BUTTON)
        .into()
}

/// The navigation menu. The simple layout keeps its toggle and settings
/// entry inside the menu; the extended one moves them to the title bar and
/// ends the menu with Exit.
fn left_menu<'a>(
    window: &'a MainWindow,
    ctx: &ViewContext<'a>,
    simple: bool,
) -> Element<'a, Message> {
    let colors = ctx.colors;
    let panel = window.panel(PanelId::MainMenu);
    let show_labels = panel.width() >= sizing::MENU_LABEL_MIN_WIDTH;
    let form_enabled = window.is_form_enabled();

    let mut menu = Column::new().spacing(spacing::SM).padding(spacing::MD);

    if simple {
        menu = menu.push(
            button(Text::new("☰").size(typography::TITLE))
                .on_press_maybe(window.is_toolbar_enabled().then_some(Message::ToggleMenu))
                .style(styles::button::chrome(colors))
                .padding(spacing::XS),
        );
    }

    for item in window.menu().items() {
        menu = menu.push(menu_button(item, ctx, show_labels, form_enabled));
    }

    if !simple {
        menu = menu.push(plain_menu_button(
            "◧",
            ctx.i18n.tr("menu-extra"),
            show_labels,
            form_enabled.then_some(Message::ToggleExtraLeft),
            colors,
        ));
    }

    menu = menu.push(
        button(Text::new(label_or_glyph("✓", ctx.i18n.tr("menu-save"), show_labels)))
            .on_press_maybe(form_enabled.then_some(Message::SavePressed))
            .style(styles::button::primary(colors))
            .width(Length::Fill)
            .height(sizing::BUTTON_HEIGHT),
    );
    menu = menu.push(Space::new().height(Length::Fill));

    menu = if simple {
        menu.push(plain_menu_button(
            "⚙",
            ctx.i18n.tr("menu-settings"),
            show_labels,
            window.settings_enabled().then_some(Message::SettingsPressed),
            colors,
        ))
    } else {
        menu.push(plain_menu_button(
            "⏻",
            ctx.i18n.tr("menu-exit"),
            show_labels,
            form_enabled.then_some(Message::ExitPressed),
            colors,
        ))
    };

    Container::new(menu)
        .width(Length::Fixed(panel.width()))
        .height(Length::Fill)
        .clip(true)
        .style(styles::container::menu(colors))
        .into()
}

fn label_or_glyph(glyph: &str, label: String, show_labels: bool) -> String {
    if show_labels {
        label
    } else {
        glyph.to_owned()
    }
}

fn menu_button<'a>(
    item: &'a MenuItem,
    ctx: &ViewContext<'a>,
    show_labels: bool,
    enabled: bool,
) -> Element<'a, Message> {
    let label = label_or_glyph(item.glyph(), ctx.i18n.tr(item.label_key()), show_labels);
    button(Text::new(label))
        .on_press_maybe(enabled.then(|| Message::MenuClicked(item.id().to_owned())))
        .style(styles::button::menu_item(ctx.colors, item.is_selected()))
        .width(Length::Fill)
        .height(sizing::BUTTON_HEIGHT)
        .into()
}

fn plain_menu_button<'a>(
    glyph: &str,
    label: String,
    show_labels: bool,
    message: Option<Message>,
    colors: ColorScheme,
) -> Element<'a, Message> {
    button(Text::new(label_or_glyph(glyph, label, show_labels)))
        .on_press_maybe(message)
        .style(styles::button::menu_item(colors, false))
        .width(Length::Fill)
        .height(sizing::BUTTON_HEIGHT)
        .into()
}

/// Clips `content` to the panel's current width; a collapsed panel takes no
/// space.
fn panel_frame<'a>(
    panel: &PanelState,
    content: Element<'a, Message>,
    colors: ColorScheme,
) -> Element<'a, Message> {
    if panel.width() <= 0.0 && !panel.is_animating() {
        return Space::new().width(Length::Shrink).into();
    }
    Container::new(content)
        .width(Length::Fixed(panel.width()))
        .height(Length::Fill)
        .clip(true)
        .style(styles::container::menu(colors))
        .into()
}

fn extra_left_content<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .push(Text::new(ctx.i18n.tr("extra-panel-title")).size(typography::HEADING).font(BOLD))
        .push(
            Text::new(ctx.i18n.tr("extra-panel-body"))
                .size(typography::BODY)
                .color(ctx.colors.text_secondary),
        )
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .width(Length::Fixed(sizing::MENU_LABEL_MIN_WIDTH + spacing::XL * 2.0))
        .into()
}

fn settings_drawer<'a>(window: &'a MainWindow, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;

    let theme_buttons = ThemeMode::ALL.iter().fold(Column::new(), |column, mode| {
        column.push(
            button(Text::new(ctx.i18n.tr(mode.label_key())))
                .on_press(Message::ThemeSelected(*mode))
                .style(styles::button::menu_item(colors, *mode == ctx.theme_mode))
                .width(Length::Fill),
        )
    });

    let current_locale = ctx.i18n.current_locale();
    let language_buttons =
        ctx.i18n
            .available_locales
            .iter()
            .fold(Column::new(), |column, locale| {
                let name = ctx.i18n.tr(&format!("language-name-{locale}"));
                column.push(
                    button(Text::new(name))
                        .on_press(Message::LanguageSelected(locale.clone()))
                        .style(styles::button::menu_item(colors, locale == current_locale))
                        .width(Length::Fill),
                )
            });

    let more = button(Text::new(ctx.i18n.tr("settings-more")))
        .on_press_maybe(window.settings_enabled().then_some(Message::SettingsPressed))
        .style(styles::button::primary(colors))
        .width(Length::Fill);

    Column::new()
        .push(Text::new(ctx.i18n.tr("settings-title")).size(typography::HEADING).font(BOLD))
        .push(Text::new(ctx.i18n.tr("settings-theme")).size(typography::CAPTION))
        .push(theme_buttons.spacing(spacing::XXS))
        .push(Text::new(ctx.i18n.tr("settings-language")).size(typography::CAPTION))
        .push(language_buttons.spacing(spacing::XXS))
        .push(Space::new().height(Length::Fill))
        .push(more)
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .width(Length::Fixed(window.panel(PanelId::ExtraRight).expanded_width()))
        .into()
}

fn main_content<'a>(window: &'a MainWindow, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let inner: Element<'a, Message> = match window.loading_elapsed() {
        Some(elapsed) => loading_indicator(elapsed, ctx),
        None => match window.current_page() {
            Page::Home => home_page(ctx),
            Page::Widgets => widgets_page(window, ctx),
            Page::Create => create_page(ctx),
        },
    };

    Container::new(inner)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .into()
}

fn loading_indicator<'a>(
    elapsed: std::time::Duration,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let content = Column::new()
        .push(AnimatedSpinner::new(ctx.colors.accent, elapsed).into_element())
        .push(Text::new(ctx.i18n.tr("loading")).color(ctx.colors.text_secondary))
        .spacing(spacing::SM)
        .align_x(Alignment::Center);

    Container::new(content).center(Length::Fill).into()
}

fn home_page<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .push(Text::new(ctx.i18n.tr("home-hero")).size(typography::HERO).font(BOLD))
        .push(
            Text::new(ctx.i18n.tr("home-body"))
                .size(typography::BODY)
                .color(ctx.colors.text_secondary),
        )
        .spacing(spacing::SM)
        .into()
}

fn widgets_page<'a>(window: &'a MainWindow, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;
    let portion = |column: TableColumn| match column {
        TableColumn::Name => sizing::TABLE_NAME_PORTION,
        TableColumn::Category => sizing::TABLE_CATEGORY_PORTION,
        TableColumn::Status => sizing::TABLE_STATUS_PORTION,
    };

    let header = TableColumn::ALL.iter().fold(Row::new(), |row, column| {
        row.push(
            Text::new(ctx.i18n.tr(column.header_key()))
                .font(BOLD)
                .width(Length::FillPortion(portion(*column))),
        )
    });

    let table = window.table();
    let rows = (0..table.len()).fold(Column::new(), |rows, index| {
        let cells = TableColumn::ALL.iter().fold(Row::new(), |row, column| {
            row.push(
                Text::new(table.cell(index, *column))
                    .width(Length::FillPortion(portion(*column))),
            )
        });
        rows.push(
            Container::new(cells.padding([spacing::XS, spacing::SM]))
                .width(Length::Fill)
                .style(styles::container::table_row(colors, index % 2 == 1)),
        )
    });

    let card = Column::new()
        .push(
            Container::new(header.padding([spacing::XS, spacing::SM]))
                .width(Length::Fill)
                .style(styles::container::table_header(colors)),
        )
        .push(scrollable(rows).height(Length::Fill));

    Column::new()
        .push(Text::new(ctx.i18n.tr("widgets-description")).size(typography::HEADING))
        .push(
            Container::new(card)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::XXS)
                .style(styles::container::card(colors)),
        )
        .spacing(spacing::SM)
        .into()
}

fn create_page<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .push(Text::new(ctx.i18n.tr("create-info")).size(typography::HEADING))
        .push(Space::new().height(Length::Fill))
        .into()
}
