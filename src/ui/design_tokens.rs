// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Centralized design tokens for the shell.

## Organization

- **Palette**: Base colors (Dracula family plus a light counterpart)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use dracula_gui::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let overlay_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BACKGROUND
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Dracula surfaces
    pub const BACKGROUND: Color = Color::from_rgb8(0x28, 0x2a, 0x36);
    pub const MENU: Color = Color::from_rgb8(0x21, 0x22, 0x2c);
    pub const TITLE_BAR: Color = Color::from_rgb8(0x1e, 0x1f, 0x29);
    pub const CURRENT_LINE: Color = Color::from_rgb8(0x44, 0x47, 0x5a);
    pub const COMMENT: Color = Color::from_rgb8(0x62, 0x72, 0xa4);
    pub const FOREGROUND: Color = Color::from_rgb8(0xf8, 0xf8, 0xf2);

    // Dracula accents
    pub const PURPLE: Color = Color::from_rgb8(0xbd, 0x93, 0xf9);
    pub const PINK: Color = Color::from_rgb8(0xff, 0x79, 0xc6);
    pub const CYAN: Color = Color::from_rgb8(0x8b, 0xe9, 0xfd);
    pub const GREEN: Color = Color::from_rgb8(0x50, 0xfa, 0x7b);
    pub const ORANGE: Color = Color::from_rgb8(0xff, 0xb8, 0x6c);
    pub const RED: Color = Color::from_rgb8(0xff, 0x55, 0x55);

    // Light counterpart
    pub const GRAY_100: Color = Color::from_rgb8(0xf4, 0xf4, 0xf6);
    pub const GRAY_200: Color = Color::from_rgb8(0xe4, 0xe4, 0xea);
    pub const GRAY_700: Color = Color::from_rgb8(0x4a, 0x4c, 0x5a);
    pub const GRAY_900: Color = Color::from_rgb8(0x1a, 0x1b, 0x22);
    pub const PURPLE_DARK: Color = Color::from_rgb8(0x7c, 0x4d, 0xd8);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 40.0;
    pub const CHROME_BUTTON: f32 = 28.0;
    pub const TITLE_BAR_HEIGHT: f32 = 56.0;
    pub const STATUS_BAR_HEIGHT: f32 = 24.0;
    pub const SPINNER: f32 = 48.0;

    /// Below this width menu buttons show their glyph only.
    pub const MENU_LABEL_MIN_WIDTH: f32 = 140.0;

    /// Table column widths as portions of the available width.
    pub const TABLE_NAME_PORTION: u16 = 3;
    pub const TABLE_CATEGORY_PORTION: u16 = 2;
    pub const TABLE_STATUS_PORTION: u16 = 1;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero text on the home page.
    pub const HERO: f32 = 24.0;

    /// Window title label.
    pub const TITLE: f32 = 18.0;

    /// Page headings.
    pub const HEADING: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    /// Subtitle and status labels.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);

    assert!(typography::HERO > typography::TITLE);
    assert!(typography::TITLE > typography::HEADING);
    assert!(typography::BODY > typography::CAPTION);
};
