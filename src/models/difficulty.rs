use log::warn;

/// Difficulty level, which fixes the time allowed per question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn time_limit_ms(self) -> u64 {
        match self {
            Difficulty::Beginner => 15_000,
            Difficulty::Intermediate => 10_000,
            Difficulty::Advanced => 7_000,
        }
    }

    /// Name used on the selection screen.
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "principiante",
            Difficulty::Intermediate => "intermedio",
            Difficulty::Advanced => "avanzado",
        }
    }

    pub fn label(self) -> String {
        let name = self.name();
        let mut chars = name.chars();
        let capitalized: String = chars
            .next()
            .map(|first| first.to_uppercase().chain(chars).collect())
            .unwrap_or_default();
        format!("{} ({} s)", capitalized, self.time_limit_ms() / 1000)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "principiante" | "beginner" => Some(Difficulty::Beginner),
            "intermedio" | "intermediate" => Some(Difficulty::Intermediate),
            "avanzado" | "advanced" => Some(Difficulty::Advanced),
            _ => None,
        }
    }

    /// Like [`Difficulty::from_name`], but unknown names fall back to beginner.
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            warn!("Unknown difficulty {:?}, falling back to {}", name, Difficulty::default().name());
            Difficulty::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_limits() {
        assert_eq!(Difficulty::Beginner.time_limit_ms(), 15_000);
        assert_eq!(Difficulty::Intermediate.time_limit_ms(), 10_000);
        assert_eq!(Difficulty::Advanced.time_limit_ms(), 7_000);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Difficulty::from_name("avanzado"), Some(Difficulty::Advanced));
        assert_eq!(Difficulty::from_name("Intermedio"), Some(Difficulty::Intermediate));
        assert_eq!(Difficulty::from_name(" beginner "), Some(Difficulty::Beginner));
        assert_eq!(Difficulty::from_name("experto"), None);
    }

    #[test]
    fn test_resolve_falls_back_to_beginner() {
        let difficulty = Difficulty::resolve("experto");
        assert_eq!(difficulty, Difficulty::Beginner);
        assert_eq!(difficulty.time_limit_ms(), 15_000);
    }

    #[test]
    fn test_label() {
        assert_eq!(Difficulty::Beginner.label(), "Principiante (15 s)");
        assert_eq!(Difficulty::Advanced.label(), "Avanzado (7 s)");
    }
}
