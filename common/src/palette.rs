//! Accent choices offered by the settings surface.
//!
//! The palette pairs a list of display names with a list of ARGB values. The
//! two lists are maintained separately, so construction checks that their
//! lengths agree; a mismatch is a build-time mistake and the settings surface
//! refuses to start rather than silently dropping entries.

use core::fmt;

use embedded_graphics::pixelcolor::Rgb565;

use crate::accent::AccentColor;
use crate::colors::{BLACK, WHITE, argb_to_rgb565, luminance};

/// Display names of the built-in accents.
pub const ACCENT_NAMES: [&str; 12] = [
    "Amber",
    "Red",
    "Pink",
    "Purple",
    "Cyan",
    "Light Green",
    "Lime",
    "Yellow",
    "Orange",
    "Indigo",
    "Blue",
    "Deep Orange",
];

/// ARGB values of the built-in accents, index-aligned with [`ACCENT_NAMES`].
pub const ACCENT_VALUES: [u32; 12] = [
    0xFFFF_C107,
    0xFFF4_4336,
    0xFFE9_1E63,
    0xFF9C_27B0,
    0xFF00_BCD4,
    0xFF8B_C34A,
    0xFFCD_DC39,
    0xFFFF_EB3B,
    0xFFFF_9800,
    0xFF3F_51B5,
    0xFF21_96F3,
    0xFFFF_5722,
];

/// Swatches at or above this luminance get a black label.
///
/// Sits between Deep Orange (131) and Cyan (134), so the built-in palette
/// labels Amber, Cyan, Light Green, Lime, Yellow and Orange in black.
const DARK_LABEL_LUMINANCE: u32 = 132;

/// Palette construction failure.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PaletteError {
    /// Names and values lists differ in length.
    LengthMismatch { names: usize, values: usize },
}

impl fmt::Display for PaletteError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::LengthMismatch { names, values } => {
                write!(f, "count of colors ({values}) differs from count of names ({names})")
            }
        }
    }
}

/// One selectable accent.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Swatch<'a> {
    pub name: &'a str,
    pub accent: AccentColor,
}

impl Swatch<'_> {
    /// Fill color of the swatch row.
    #[inline]
    pub const fn fill(&self) -> Rgb565 { argb_to_rgb565(self.accent.argb()) }

    /// Label color with enough contrast against [`fill`](Self::fill).
    pub const fn label_color(&self) -> Rgb565 {
        if luminance(self.accent.argb()) >= DARK_LABEL_LUMINANCE {
            BLACK
        } else {
            WHITE
        }
    }
}

/// Validated list of accent choices.
#[derive(Clone, Copy, Debug)]
pub struct Palette<'a> {
    names: &'a [&'a str],
    values: &'a [u32],
}

impl<'a> Palette<'a> {
    /// Pair names with values. Fails if the lists differ in length.
    pub const fn new(
        names: &'a [&'a str],
        values: &'a [u32],
    ) -> Result<Self, PaletteError> {
        if names.len() != values.len() {
            return Err(PaletteError::LengthMismatch {
                names: names.len(),
                values: values.len(),
            });
        }
        Ok(Self { names, values })
    }

    /// The built-in palette.
    pub const fn builtin() -> Result<Palette<'static>, PaletteError> { Palette::new(&ACCENT_NAMES, &ACCENT_VALUES) }

    #[inline]
    pub const fn len(&self) -> usize { self.values.len() }

    #[inline]
    pub const fn is_empty(&self) -> bool { self.values.is_empty() }

    pub fn get(
        &self,
        index: usize,
    ) -> Option<Swatch<'a>> {
        Some(Swatch {
            name: *self.names.get(index)?,
            accent: AccentColor::from_argb(*self.values.get(index)?),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = Swatch<'a>> + '_ {
        self.names
            .iter()
            .zip(self.values)
            .map(|(name, value)| Swatch {
                name: *name,
                accent: AccentColor::from_argb(*value),
            })
    }

    /// Index of the swatch with this accent, if any.
    pub fn position(
        &self,
        accent: AccentColor,
    ) -> Option<usize> {
        self.values.iter().position(|v| *v == accent.argb())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_palette_is_consistent() {
        let palette = Palette::builtin().unwrap();
        assert_eq!(palette.len(), ACCENT_NAMES.len());
        assert_eq!(palette.iter().count(), palette.len());
    }

    #[test]
    fn test_mismatched_lengths_fail() {
        let names = ["Red", "Blue"];
        let values = [0xFFFF_0000];
        assert_eq!(
            Palette::new(&names, &values).unwrap_err(),
            PaletteError::LengthMismatch { names: 2, values: 1 }
        );
    }

    #[test]
    fn test_get_out_of_range() {
        let palette = Palette::builtin().unwrap();
        assert!(palette.get(palette.len()).is_none());
        assert_eq!(palette.get(1).unwrap().name, "Red");
    }

    #[test]
    fn test_label_contrast() {
        let palette = Palette::builtin().unwrap();
        // Amber is light, Red and Indigo are dark
        assert_eq!(palette.get(0).unwrap().label_color(), BLACK);
        assert_eq!(palette.get(1).unwrap().label_color(), WHITE);
        assert_eq!(palette.get(9).unwrap().label_color(), WHITE);
    }

    #[test]
    fn test_black_labels_on_light_swatches_only() {
        let palette = Palette::builtin().unwrap();
        let black: std::vec::Vec<usize> = palette
            .iter()
            .enumerate()
            .filter(|(_, swatch)| swatch.label_color() == BLACK)
            .map(|(index, _)| index)
            .collect();
        assert_eq!(black, [0, 4, 5, 6, 7, 8]);

        // Deep Orange sits just under the threshold
        assert_eq!(palette.get(11).unwrap().label_color(), WHITE);
    }

    #[test]
    fn test_position_of_accent() {
        let palette = Palette::builtin().unwrap();
        assert_eq!(palette.position(AccentColor::from_argb(0xFF21_96F3)), Some(10));
        assert_eq!(palette.position(AccentColor::RED), None);
    }
}
