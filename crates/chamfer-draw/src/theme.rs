#![forbid(unsafe_code)]

//! System-theme color identifiers and their concrete palette.

/// A concrete 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value.
    #[inline]
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: (packed & 0xFF) as u8,
        }
    }
}

/// Abstract theme-color identifiers resolved at draw time.
///
/// These are the tokens stored in the color lookup tables; a [`Theme`] (or a
/// backend's own resolution) turns them into concrete colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemColor {
    /// Bevel edge facing the light source.
    Highlight,
    /// Secondary light edge.
    Light,
    /// Control face / fill color.
    Face,
    /// Bevel edge away from the light source.
    Shadow,
    /// Deepest shadow edge.
    DarkShadow,
    /// Document/content background.
    Window,
    /// Monochrome frame color.
    WindowFrame,
    /// Document/content foreground.
    WindowText,
}

/// Maps every [`SystemColor`] to a concrete color.
///
/// The default is the classic gray desktop palette. Immutable once built;
/// cheap to clone and safe to share across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub highlight: Rgb,
    pub light: Rgb,
    pub face: Rgb,
    pub shadow: Rgb,
    pub dark_shadow: Rgb,
    pub window: Rgb,
    pub window_frame: Rgb,
    pub window_text: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            highlight: Rgb::from_u32(0xFFFFFF),
            light: Rgb::from_u32(0xDFDFDF),
            face: Rgb::from_u32(0xC0C0C0),
            shadow: Rgb::from_u32(0x808080),
            dark_shadow: Rgb::from_u32(0x000000),
            window: Rgb::from_u32(0xFFFFFF),
            window_frame: Rgb::from_u32(0x000000),
            window_text: Rgb::from_u32(0x000000),
        }
    }
}

impl Theme {
    /// Start building a theme from the default palette.
    pub fn builder() -> ThemeBuilder {
        ThemeBuilder::default()
    }

    /// Resolve an identifier to its concrete color.
    #[inline]
    pub const fn color(&self, id: SystemColor) -> Rgb {
        match id {
            SystemColor::Highlight => self.highlight,
            SystemColor::Light => self.light,
            SystemColor::Face => self.face,
            SystemColor::Shadow => self.shadow,
            SystemColor::DarkShadow => self.dark_shadow,
            SystemColor::Window => self.window,
            SystemColor::WindowFrame => self.window_frame,
            SystemColor::WindowText => self.window_text,
        }
    }
}

/// Builder for [`Theme`] overriding individual slots.
#[derive(Debug, Clone, Default)]
pub struct ThemeBuilder {
    theme: Theme,
}

impl ThemeBuilder {
    /// Start from an existing theme.
    pub fn from_theme(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn highlight(mut self, color: Rgb) -> Self {
        self.theme.highlight = color;
        self
    }

    pub fn light(mut self, color: Rgb) -> Self {
        self.theme.light = color;
        self
    }

    pub fn face(mut self, color: Rgb) -> Self {
        self.theme.face = color;
        self
    }

    pub fn shadow(mut self, color: Rgb) -> Self {
        self.theme.shadow = color;
        self
    }

    pub fn dark_shadow(mut self, color: Rgb) -> Self {
        self.theme.dark_shadow = color;
        self
    }

    pub fn window(mut self, color: Rgb) -> Self {
        self.theme.window = color;
        self
    }

    pub fn window_frame(mut self, color: Rgb) -> Self {
        self.theme.window_frame = color;
        self
    }

    pub fn window_text(mut self, color: Rgb) -> Self {
        self.theme.window_text = color;
        self
    }

    pub fn build(self) -> Theme {
        self.theme
    }
}
