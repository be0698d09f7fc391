//! Anzeige-Schalter und Füllfarbe (shared zwischen App und Renderer).

/// Reine Render-Schalter; die Geometrie liest sie nie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFlags {
    /// Konstruktionssehnen und Kontrollpolygon
    pub construction: bool,
    /// Querrippen des Umrisses
    pub skeleton: bool,
    /// Gefüllter Halm
    pub fill: bool,
}

impl Default for DisplayFlags {
    fn default() -> Self {
        Self {
            construction: true,
            skeleton: false,
            fill: false,
        }
    }
}

/// Umschaltbare Anzeige-Ebene (ein Checkbox-Eintrag in der Toolbar).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayLayer {
    Construction,
    Skeleton,
    Fill,
}

impl DisplayLayer {
    /// Beschriftung der Checkbox.
    pub fn label(self) -> &'static str {
        match self {
            DisplayLayer::Construction => "Construction",
            DisplayLayer::Skeleton => "Skeleton",
            DisplayLayer::Fill => "Fill",
        }
    }
}

impl DisplayFlags {
    pub fn get(&self, layer: DisplayLayer) -> bool {
        match layer {
            DisplayLayer::Construction => self.construction,
            DisplayLayer::Skeleton => self.skeleton,
            DisplayLayer::Fill => self.fill,
        }
    }

    pub fn set(&mut self, layer: DisplayLayer, visible: bool) {
        match layer {
            DisplayLayer::Construction => self.construction = visible,
            DisplayLayer::Skeleton => self.skeleton = visible,
            DisplayLayer::Fill => self.fill = visible,
        }
    }
}

/// Bildet den Farb-Regler (0..=100) auf eine Grün-Füllfarbe ab: `(c/2, 80 + c, c/8)`.
pub fn fill_color_from_seed(seed: f32) -> [u8; 3] {
    let c = if seed.is_nan() { 0.0 } else { seed.max(0.0) };
    let channel = |v: f32| v.round().clamp(0.0, 255.0) as u8;
    [channel(c * 0.5), channel(80.0 + c), channel(c / 8.0)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_color_mapping() {
        assert_eq!(fill_color_from_seed(80.0), [40, 160, 10]);
        assert_eq!(fill_color_from_seed(0.0), [0, 80, 0]);
        assert_eq!(fill_color_from_seed(100.0), [50, 180, 13]);
    }

    #[test]
    fn test_fill_color_ignores_invalid_seed() {
        assert_eq!(fill_color_from_seed(f32::NAN), [0, 80, 0]);
        assert_eq!(fill_color_from_seed(-5.0), [0, 80, 0]);
    }

    #[test]
    fn test_flags_set_and_get() {
        let mut flags = DisplayFlags::default();
        assert!(flags.get(DisplayLayer::Construction));
        assert!(!flags.get(DisplayLayer::Fill));

        flags.set(DisplayLayer::Fill, true);
        flags.set(DisplayLayer::Construction, false);
        assert!(flags.fill);
        assert!(!flags.construction);
    }
}
