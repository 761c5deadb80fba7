/// Premultiplied RGBA color, components in `[0, 1]`.
///
/// Invariant: `r`, `g`, `b` never exceed `a`. Textures produced by
/// `content` follow the same convention, which is what the
/// `(One, OneMinusSrcAlpha)` blend state expects.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Self = Self::from_premul(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::from_premul(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::from_premul(1.0, 1.0, 1.0, 1.0);
    /// Mid gray, the demo clear color.
    pub const GRAY: Self = Self::from_premul(0.5, 0.5, 0.5, 1.0);

    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight-alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// Creates a premultiplied color from straight-alpha bytes.
    #[inline]
    pub fn from_straight_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Parses `#rrggbb` or `#rrggbbaa` (straight alpha). The `#` is optional.
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        let byte = |i: usize| s.get(i..i + 2).and_then(|h| u8::from_str_radix(h, 16).ok());
        match s.len() {
            6 => Some(Self::from_straight_u8(byte(0)?, byte(2)?, byte(4)?, 255)),
            8 => Some(Self::from_straight_u8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Premultiplied bytes back to a color.
    #[inline]
    pub fn from_premul_u8(px: [u8; 4]) -> Self {
        let f = |v: u8| v as f32 / 255.0;
        Self::from_premul(f(px[0]), f(px[1]), f(px[2]), f(px[3]))
    }

    /// `self` composited over `dst`: `src + dst * (1 - src.a)`.
    ///
    /// Same arithmetic as the `(One, OneMinusSrcAlpha)` blend state.
    #[inline]
    pub fn over(self, dst: Color) -> Self {
        let k = 1.0 - self.a;
        Self::from_premul(
            self.r + dst.r * k,
            self.g + dst.g * k,
            self.b + dst.b * k,
            self.a + dst.a * k,
        )
    }

    /// Scales all channels by `coverage` (antialiasing weight in `[0, 1]`).
    #[inline]
    pub fn scaled(self, coverage: f32) -> Self {
        let c = coverage.clamp(0.0, 1.0);
        Self::from_premul(self.r * c, self.g * c, self.b * c, self.a * c)
    }

    /// Premultiplied RGBA bytes.
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}
