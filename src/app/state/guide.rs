//! Schrittweise Anleitung ("Tooltips") für den Modellier-Ablauf.

/// Ein Anleitungs-Schritt in Anzeige-Reihenfolge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideStep {
    /// Auflösung über 1 erhöhen
    Resolution,
    /// Model-Button klicken
    Model,
    /// Breite über den Standard erhöhen
    Width,
    /// Füllung einblenden
    Fill,
    /// Farbe anpassen
    Color,
    /// Skelett ausblenden; erledigt, sobald das Skelett sichtbar ist
    Skeleton,
    /// Alles erledigt
    Done,
}

impl GuideStep {
    const PENDING: [GuideStep; 6] = [
        GuideStep::Resolution,
        GuideStep::Model,
        GuideStep::Width,
        GuideStep::Fill,
        GuideStep::Color,
        GuideStep::Skeleton,
    ];

    /// Hinweistext für die Statuszeile.
    pub fn hint(self) -> &'static str {
        match self {
            GuideStep::Resolution => "Add more strings to the construction.",
            GuideStep::Model => "Click Model when you are happy with the grass shape.",
            GuideStep::Width => "Add width to your blade of grass.",
            GuideStep::Fill => "Click Fill to show the full blade.",
            GuideStep::Color => "Fine tune the fill color.",
            GuideStep::Skeleton => "Hide the skeleton lines.",
            GuideStep::Done => {
                "Congratulations! You have modeled a blade of grass. You can continue to change your design."
            }
        }
    }

    fn index(self) -> Option<usize> {
        Self::PENDING.iter().position(|&s| s == self)
    }
}

/// Offene Anleitungs-Schritte.
///
/// Jeder Schritt wird unabhängig erledigt; angezeigt wird der erste offene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideState {
    pending: [bool; 6],
}

impl GuideState {
    /// Alle Schritte offen.
    pub fn new() -> Self {
        Self { pending: [true; 6] }
    }

    /// Markiert einen Schritt als erledigt.
    pub fn complete(&mut self, step: GuideStep) {
        if let Some(i) = step.index() {
            if self.pending[i] {
                log::debug!("Anleitungs-Schritt erledigt: {:?}", step);
            }
            self.pending[i] = false;
        }
    }

    pub fn is_pending(&self, step: GuideStep) -> bool {
        step.index().is_some_and(|i| self.pending[i])
    }

    /// Erster offener Schritt oder `Done`.
    pub fn current(&self) -> GuideStep {
        GuideStep::PENDING
            .iter()
            .zip(self.pending.iter())
            .find(|(_, open)| **open)
            .map_or(GuideStep::Done, |(&step, _)| step)
    }
}

impl Default for GuideState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_resolution() {
        assert_eq!(GuideState::new().current(), GuideStep::Resolution);
    }

    #[test]
    fn test_shows_first_pending_step() {
        let mut guide = GuideState::new();
        // Breite vor der Auflösung erledigt → bleibt bei Resolution
        guide.complete(GuideStep::Width);
        assert_eq!(guide.current(), GuideStep::Resolution);

        guide.complete(GuideStep::Resolution);
        assert_eq!(guide.current(), GuideStep::Model);

        guide.complete(GuideStep::Model);
        assert_eq!(guide.current(), GuideStep::Fill, "Width war schon erledigt");
    }

    #[test]
    fn test_done_after_all_steps() {
        let mut guide = GuideState::new();
        for step in GuideStep::PENDING {
            guide.complete(step);
        }
        assert_eq!(guide.current(), GuideStep::Done);
        assert!(!guide.is_pending(GuideStep::Skeleton));

        // Done ist kein offener Schritt
        guide.complete(GuideStep::Done);
        assert_eq!(guide.current(), GuideStep::Done);
    }
}
