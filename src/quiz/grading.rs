use crate::error::DivisionByZero;

/// Qualitative grade for a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Excellent,
    Good,
    NeedsImprovement,
}

impl Grade {
    pub fn label(self) -> &'static str {
        match self {
            Grade::Excellent => "Excelente",
            Grade::Good => "Bueno",
            Grade::NeedsImprovement => "Necesita mejorar",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

pub fn percentage(score: usize, total: usize) -> Result<f64, DivisionByZero> {
    if total == 0 {
        return Err(DivisionByZero);
    }
    Ok(score as f64 * 100.0 / total as f64)
}

/// 90% and above is excellent, 70% and above is good.
pub fn grade(score: usize, total: usize) -> Result<Grade, DivisionByZero> {
    let percentage = percentage(score, total)?;

    let grade = if percentage >= 90.0 {
        Grade::Excellent
    } else if percentage >= 70.0 {
        Grade::Good
    } else {
        Grade::NeedsImprovement
    };

    Ok(grade)
}
